#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Base URL of the ad engine's decision API.
pub const DECISION_API_ENDPOINT: &str = "http://engine.adzerk.net/api/v2";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DECISION_API_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_decision_api() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DECISION_API_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_endpoint_fails_validation() {
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("ftp://engine").validate().is_err());
    }
}
