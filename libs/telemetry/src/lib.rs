//! Logging setup for hosts of `blockkit-core`.
//!
//! The core crate only emits `tracing` events (rejections on `blockkit::validate`, built views on
//! `blockkit::view`). This crate installs a subscriber for them, configured from the environment.
use anyhow::Result;

mod config;
mod tracing_init;

pub use config::{LogFormat, TelemetryConfig};
pub use tracing_init::{init_telemetry, telemetry_installed};

/// Installs the shared subscriber configured from `BLOCKKIT_SERVICE_NAME`, `LOG_FORMAT` and
/// `RUST_LOG`.
pub fn install(service_name: &str) -> Result<()> {
    init_telemetry(TelemetryConfig::from_env(service_name))
}
