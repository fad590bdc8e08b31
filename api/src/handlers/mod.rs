//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod disbursement;

pub use disbursement::disburse_pension;
