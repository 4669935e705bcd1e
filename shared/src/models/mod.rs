//! Domain models for the VaanMozhi alert relay

mod alert;
mod scenario;
mod weather;

pub use alert::*;
pub use scenario::*;
pub use weather::*;
