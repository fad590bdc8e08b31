//! Disbursement service
//!
//! Fetches the pensioner record for a disbursement request and validates the
//! claimed amounts against the authoritative calculation.

use std::sync::Arc;

use crate::app::bank_charges::service_charge;
use crate::domain::entities::{
    DisbursementRequest, PensionType, PensionerDetail, ProcessPensionStatus,
};
use crate::domain::ports::PensionerDetailRepository;
use crate::error::AppError;

/// Service validating disbursement requests against pensioner records.
pub struct DisbursementService<R>
where
    R: PensionerDetailRepository,
{
    pensioner_details: Arc<R>,
}

impl<R> DisbursementService<R>
where
    R: PensionerDetailRepository,
{
    pub fn new(pensioner_details: Arc<R>) -> Self {
        Self { pensioner_details }
    }

    /// Look up the pensioner record and validate the request against it.
    ///
    /// A request that fails validation is not an error; it maps to the
    /// rejected status code.
    pub async fn process(
        &self,
        request: &DisbursementRequest,
    ) -> Result<ProcessPensionStatus, AppError> {
        let detail = self
            .pensioner_details
            .get_detail_by_aadhaar(&request.identifier)
            .await
            .ok_or(AppError::PensionerNotFound)?;

        let status = if validate_pension(request, &detail) {
            ProcessPensionStatus::Approved
        } else {
            ProcessPensionStatus::Rejected
        };

        tracing::info!("Pension process code: '{}'", status.code());
        Ok(status)
    }
}

/// Ordered short-circuit checks; the first failing check rejects.
///
/// Amount comparisons are exact, not tolerance-based.
#[allow(clippy::float_cmp)]
pub fn validate_pension(request: &DisbursementRequest, detail: &PensionerDetail) -> bool {
    if request.bank_service_charge <= 0.0 || request.pension_amount <= 0.0 {
        return false;
    }

    // Validate bank charges
    if request.bank_service_charge != service_charge(detail.bank_detail.bank_type) {
        return false;
    }

    // Validate pension amount
    let calculated = calculate_pension(detail.salary_earned, detail.allowances, detail.pension_type);
    request.pension_amount == calculated
}

/// Authoritative pension amount: payout rate × earned salary + allowances.
pub fn calculate_pension(salary_earned: f64, allowances: f64, pension_type: PensionType) -> f64 {
    pension_type.payout_rate() * salary_earned + allowances
}
