use crate::domain::model::{AdRequest, AdResponse};
use crate::domain::ports::DecisionService;
use crate::utils::error::{Result, TransportError};
use async_trait::async_trait;
use reqwest::Client;

/// Decision service backed by a real HTTP transport. One POST per call,
/// default transport timeout, no retries.
pub struct HttpDecisionService {
    client: Client,
    endpoint: String,
}

impl HttpDecisionService {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DecisionService for HttpDecisionService {
    async fn request(&self, request: &AdRequest) -> Result<AdResponse> {
        tracing::debug!("Sending decision request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("Decision API response status: {}", status);

        if !status.is_success() {
            return Err(TransportError::Status { status });
        }

        // Decode via serde_json so a malformed body surfaces as a decode error
        // rather than a generic transport one.
        let body = response.text().await?;
        let decoded = serde_json::from_str(&body)?;
        Ok(decoded)
    }
}
