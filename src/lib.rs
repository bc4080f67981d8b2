pub mod core;
pub mod error;
pub mod extract;
pub mod qa;
pub mod types;
pub mod utils;
pub mod web;

pub use error::IntakeError;
pub use extract::{Document, Extraction, Extractor};
pub use web::{build_rocket, start_web_server};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Install the fmt subscriber; `RUST_LOG` overrides the default filter
pub fn init_tracing(default_filter: &str) {
    let _ = Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .try_init();
}
