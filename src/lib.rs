pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod service;
pub mod source;

pub use config::AppConfig;
pub use error::{IouError, SettleError, SourceError};
pub use models::{MonthlyUtilities, PaymentInstruction, SettlementReport, Standing};
pub use service::SettlementCalculator;
pub use source::load_utilities;
