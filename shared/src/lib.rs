//! Shared domain for the VaanMozhi alert relay
//!
//! Everything here is pure: alert models, the risk scoring rule, the district
//! catalog and the scenario generator. The backend crate wires them to HTTP.

pub mod districts;
pub mod models;
pub mod scenario;
pub mod scoring;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
