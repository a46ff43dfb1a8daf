use crate::domain::model::{AdRequest, AdResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Port to the decision API. Implementations must be safe for concurrent use
/// since one instance is shared by every call from the client.
#[async_trait]
pub trait DecisionService: Send + Sync {
    async fn request(&self, request: &AdRequest) -> Result<AdResponse>;
}
