use std::env;

pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "text" | "pretty" | "plain" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub log_format: LogFormat,
    /// An `EnvFilter` directive string such as `info,blockkit::validate=debug`.
    pub filter: String,
}

impl TelemetryConfig {
    pub fn from_env(default_service_name: &str) -> Self {
        Self::from_lookup(default_service_name, |key| env::var(key).ok())
    }

    /// Same as [`TelemetryConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(
        default_service_name: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let service_name = lookup("BLOCKKIT_SERVICE_NAME")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_service_name.to_string());
        let log_format = lookup("LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or(LogFormat::Json);
        let filter = lookup("RUST_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        Self {
            service_name,
            log_format,
            filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_json_and_info() {
        let cfg = TelemetryConfig::from_lookup("surface-builder", lookup(&[]));
        assert_eq!(cfg.service_name, "surface-builder");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.filter, "info");
    }

    #[test]
    fn reads_overrides() {
        let cfg = TelemetryConfig::from_lookup(
            "surface-builder",
            lookup(&[
                ("BLOCKKIT_SERVICE_NAME", "modal-api"),
                ("LOG_FORMAT", "Pretty"),
                ("RUST_LOG", "blockkit::validate=debug"),
            ]),
        );
        assert_eq!(cfg.service_name, "modal-api");
        assert_eq!(cfg.log_format, LogFormat::Text);
        assert_eq!(cfg.filter, "blockkit::validate=debug");
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let cfg = TelemetryConfig::from_lookup("svc", lookup(&[("LOG_FORMAT", "xml")]));
        assert_eq!(cfg.log_format, LogFormat::Json);
    }
}
