pub mod analytics;
pub mod budget;
pub mod dividends;
pub mod investment;
pub mod market;
pub mod session;
pub mod settings;
pub mod summary;
pub mod transaction;
