//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::PensionerDetail;
use crate::domain::ports::PensionerDetailRepository;

/// In-memory pensioner detail repository.
///
/// Lookups miss unless a record was added with `with_detail`. A miss is
/// indistinguishable from an upstream failure, matching the port contract,
/// so there is no separate failing mode.
#[derive(Default)]
pub struct InMemoryPensionerDetailRepository {
    details: Arc<RwLock<HashMap<String, PensionerDetail>>>,
}

impl InMemoryPensionerDetailRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a pensioner record, keyed by Aadhaar number
    pub fn with_detail(self, detail: PensionerDetail) -> Self {
        {
            let mut details = self.details.write().unwrap();
            details.insert(detail.aadhar_number.clone(), detail);
        }
        self
    }
}

#[async_trait]
impl PensionerDetailRepository for InMemoryPensionerDetailRepository {
    async fn get_detail_by_aadhaar(&self, aadhaar: &str) -> Option<PensionerDetail> {
        let details = self.details.read().unwrap();
        details.get(aadhaar).cloned()
    }
}
