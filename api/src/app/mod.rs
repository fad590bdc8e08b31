//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod bank_charges;
pub mod disbursement_service;

pub use bank_charges::service_charge;
pub use disbursement_service::{calculate_pension, validate_pension, DisbursementService};
