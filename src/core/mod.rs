pub mod client;
pub mod service;

pub use crate::domain::model::{AdRequest, AdResponse};
pub use crate::domain::ports::DecisionService;
pub use crate::utils::error::Result;
