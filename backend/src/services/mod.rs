//! Forecast services for the VaanMozhi alert relay

use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::Mutex;

pub mod forecast;
pub mod live;
pub mod mock;

pub use forecast::{build_provider, ForecastProvider, ForecastReport};
pub use live::LiveForecastProvider;
pub use mock::MockForecastProvider;

/// Random source shared by everything that fabricates data
pub type SharedRng = Arc<Mutex<StdRng>>;

/// Create the process-wide random source, seeded from `seed` when given
pub fn shared_rng(seed: Option<u64>) -> SharedRng {
    let seed = seed.unwrap_or_else(rand::random::<u64>);
    tracing::info!("Random source seeded with {}", seed);
    Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))
}
