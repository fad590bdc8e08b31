//! Disbursement handlers
//!
//! Endpoint for processing pension disbursement requests.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::DisbursementRequest;
use crate::error::AppError;
use crate::AppState;

/// Response body for a processed disbursement request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPensionResponse {
    /// 10 = approved, 21 = rejected
    pub process_pension_status_code: i32,
}

/// POST /api/pensionDisbursement/disbursePension
///
/// Validate a disbursement request against the pensioner's record.
/// A validation failure is still a 200 response; the outcome is carried in
/// the payload's status code, not the transport status.
pub async fn disburse_pension(
    State(state): State<AppState>,
    request: Option<Json<DisbursementRequest>>,
) -> Result<Json<ProcessPensionResponse>, AppError> {
    let Some(Json(request)) = request else {
        return Err(AppError::MissingInput);
    };

    tracing::info!("POST: /disbursePension for {}", request.identifier);

    let status = state.disbursement_service.process(&request).await?;

    Ok(Json(ProcessPensionResponse {
        process_pension_status_code: status.code(),
    }))
}
