//! API endpoint implementations

pub mod market;
pub mod lending;
pub mod trading;
pub mod account;

pub use market::MarketEndpoints;
pub use lending::LendingEndpoints;
pub use trading::TradingEndpoints;
pub use account::AccountEndpoints;
