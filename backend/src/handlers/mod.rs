//! HTTP handlers

pub mod districts;
pub mod forecast;
pub mod health;

pub use districts::{get_district, list_districts};
pub use forecast::{get_forecast, get_forecast_batch};
pub use health::{health_check, root};
