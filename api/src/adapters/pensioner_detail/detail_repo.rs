//! Pensioner detail HTTP repository

use async_trait::async_trait;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::entities::PensionerDetail;
use crate::domain::ports::PensionerDetailRepository;
use crate::error::LookupError;

/// Fetches pensioner records from the upstream pensioner detail service.
pub struct HttpPensionerDetailRepository {
    http: Client,
    base_url: String,
}

impl HttpPensionerDetailRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn detail_url(&self, aadhaar: &str) -> String {
        format!(
            "{}/api/pensionerDetail/getDetailByAadhar/{}",
            self.base_url,
            encode(aadhaar)
        )
    }

    async fn fetch(&self, aadhaar: &str) -> Result<PensionerDetail, LookupError> {
        let url = self.detail_url(aadhaar);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Pensioner detail response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| LookupError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl PensionerDetailRepository for HttpPensionerDetailRepository {
    async fn get_detail_by_aadhaar(&self, aadhaar: &str) -> Option<PensionerDetail> {
        match self.fetch(aadhaar).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                tracing::warn!("Pensioner detail lookup failed for '{}': {}", aadhaar, e);
                None
            }
        }
    }
}
