//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{
    BankDetail, BankType, DisbursementRequest, PensionType, PensionerDetail,
};

/// Create a test pensioner detail with default values
///
/// Self pension on salary 100000 with allowances 20000 at a public bank:
/// authoritative pension 100000, authoritative charge 500.
pub fn test_pensioner_detail() -> PensionerDetail {
    test_pensioner_detail_with(100000.0, 20000.0, PensionType::SelfPension, BankType::Public)
}

/// Create a test pensioner detail with specific salary, allowances and categories
pub fn test_pensioner_detail_with(
    salary_earned: f64,
    allowances: f64,
    pension_type: PensionType,
    bank_type: BankType,
) -> PensionerDetail {
    PensionerDetail {
        aadhar_number: "123412341234".to_string(),
        salary_earned,
        allowances,
        pension_type,
        bank_detail: BankDetail {
            bank_name: Some("National Bank".to_string()),
            account_number: Some("AC-1042".to_string()),
            bank_type,
        },
    }
}

/// Create a disbursement request with the given claimed amounts
pub fn test_request(
    identifier: &str,
    pension_amount: f64,
    bank_service_charge: f64,
) -> DisbursementRequest {
    DisbursementRequest {
        identifier: identifier.to_string(),
        pension_amount,
        bank_service_charge,
    }
}
