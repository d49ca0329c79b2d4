pub mod ai_service;
pub mod budget_service;
pub mod currency_service;
pub mod dividend_service;
pub mod ledger_service;
pub mod market_service;
pub mod portfolio_service;
