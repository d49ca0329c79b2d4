use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::investment::Investment;
use super::transaction::Transaction;

/// All user data for one run of the application.
///
/// Lives only in memory. Collections are appended to, and the investment
/// list is replaced as a whole when prices are refreshed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Ledger entries in insertion order
    pub transactions: Vec<Transaction>,

    /// Holdings in insertion order
    pub investments: Vec<Investment>,

    pub budgets: Vec<Budget>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
