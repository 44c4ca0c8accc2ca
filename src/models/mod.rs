pub mod report;
pub mod settlement;
pub mod utilities;

pub use report::SettlementReport;
pub use settlement::{PaymentInstruction, Role, Standing};
pub use utilities::{MonthlyUtilities, PersonPayments};
