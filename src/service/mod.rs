pub mod calculator;
pub mod matcher;

pub use calculator::SettlementCalculator;
pub use matcher::match_debtors_to_creditors;
