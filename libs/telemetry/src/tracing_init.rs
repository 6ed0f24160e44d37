use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_subscriber::layer::Layer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, TelemetryConfig};

static INIT: OnceLock<String> = OnceLock::new();

/// Installs the global subscriber once. Later calls are no-ops, and an already installed
/// foreign subscriber is left in place.
pub fn init_telemetry(cfg: TelemetryConfig) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let env_filter = build_filter(&cfg)?;
    let fmt_layer = match cfg.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();

    tracing::info!(service = %cfg.service_name, "telemetry installed");
    INIT.set(cfg.service_name).ok();
    Ok(())
}

fn build_filter(cfg: &TelemetryConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&cfg.filter).with_context(|| format!("invalid log filter '{}'", cfg.filter))
}

pub fn telemetry_installed() -> bool {
    INIT.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter() {
        let cfg = TelemetryConfig {
            service_name: "svc".into(),
            log_format: LogFormat::Text,
            filter: "blockkit=loud".into(),
        };
        let err = build_filter(&cfg).unwrap_err();
        assert!(err.to_string().contains("blockkit=loud"));
    }

    #[test]
    fn install_is_idempotent() {
        let cfg = TelemetryConfig {
            service_name: "svc".into(),
            log_format: LogFormat::Json,
            filter: "info".into(),
        };
        init_telemetry(cfg.clone()).unwrap();
        init_telemetry(cfg).unwrap();
        assert!(telemetry_installed());
    }
}
