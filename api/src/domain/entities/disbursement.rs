//! Disbursement request and result types

use serde::Deserialize;

/// A disbursement request submitted for validation.
///
/// Created per incoming call; never persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisbursementRequest {
    /// Aadhaar number identifying the pensioner.
    pub identifier: String,
    /// Pension amount claimed by the caller, in currency units.
    pub pension_amount: f64,
    /// Bank service charge claimed by the caller.
    pub bank_service_charge: f64,
}

/// Two-valued outcome of validating a disbursement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessPensionStatus {
    Approved,
    Rejected,
}

impl ProcessPensionStatus {
    /// Numeric status code reported to callers.
    pub fn code(&self) -> i32 {
        match self {
            ProcessPensionStatus::Approved => 10,
            ProcessPensionStatus::Rejected => 21,
        }
    }
}

impl std::fmt::Display for ProcessPensionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessPensionStatus::Approved => write!(f, "approved"),
            ProcessPensionStatus::Rejected => write!(f, "rejected"),
        }
    }
}
