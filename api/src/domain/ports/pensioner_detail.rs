//! Pensioner detail lookup port
//!
//! Defines the interface for fetching pensioner records from the upstream
//! detail service.

use async_trait::async_trait;

use crate::domain::entities::PensionerDetail;

/// Read-only access to pensioner records held by the upstream detail service.
#[async_trait]
pub trait PensionerDetailRepository: Send + Sync {
    /// Fetch the pensioner record for an Aadhaar number.
    ///
    /// Returns `None` when the record is absent or the lookup fails for any
    /// reason; implementations never propagate transport errors. Callers
    /// cannot distinguish genuine absence from an upstream outage.
    async fn get_detail_by_aadhaar(&self, aadhaar: &str) -> Option<PensionerDetail>;
}
