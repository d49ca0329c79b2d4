use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of ledger movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money coming in (salary, gifts, refunds)
    Income,
    /// Money going out for consumption; counts against budgets
    Expense,
    /// Cash sent to the brokerage to fund a purchase
    Investment,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
            TransactionType::Investment => write!(f, "Investment"),
        }
    }
}

/// A single ledger entry. Amounts are in EUR and always positive;
/// the sign is implied by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,

    pub description: String,

    pub amount: f64,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub date: NaiveDate,

    /// Free-text category. Only categorized expenses count against budgets.
    #[serde(default)]
    pub category: Option<String>,
}

impl Transaction {
    pub fn new(input: NewTransaction) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: input.description,
            amount: input.amount,
            kind: input.kind,
            date: input.date,
            category: input.category,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// User input for a transaction, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewTransaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            kind,
            date,
            category: None,
        }
    }

    /// Attach a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn income(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self::new(description, amount, TransactionType::Income, date)
    }

    pub fn expense(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self::new(description, amount, TransactionType::Expense, date)
    }

    pub fn investment(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self::new(description, amount, TransactionType::Investment, date)
    }
}
