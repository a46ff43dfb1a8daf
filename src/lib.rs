pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::ProbeConfig;
pub use crate::config::{ClientConfig, DECISION_API_ENDPOINT};

pub use crate::core::client::{AdClient, AdClientBuilder};
pub use crate::core::service::HttpDecisionService;
pub use crate::domain::model::{AdRequest, AdResponse};
pub use crate::domain::ports::DecisionService;
pub use crate::utils::error::{Result, TransportError};
