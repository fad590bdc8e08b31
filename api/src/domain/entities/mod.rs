//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod disbursement;
pub mod pensioner;

pub use disbursement::{DisbursementRequest, ProcessPensionStatus};
pub use pensioner::{BankDetail, BankType, PensionType, PensionerDetail};
