use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::IpAddr;
use std::path::Path;

use crate::catalog::{Catalog, ModelProfile};
use crate::estimator::{EstimatorSettings, MissingMetricPolicy};
use crate::input::RequestRange;
use crate::metric::Metric;
use crate::server::RESERVED_PATHS;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Replaces the built-in catalog when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<ModelProfile>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EstimatorConfig {
    #[serde(default = "default_metrics")]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub missing_metric: MissingMetricPolicy,
    #[serde(default)]
    pub requests: RequestRange,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            metrics: default_metrics(),
            missing_metric: MissingMetricPolicy::default(),
            requests: RequestRange::default(),
        }
    }
}

impl EstimatorConfig {
    pub fn settings(&self) -> EstimatorSettings {
        EstimatorSettings {
            metrics: self.metrics.clone(),
            missing_metric: self.missing_metric,
        }
    }
}

fn default_metrics() -> Vec<Metric> {
    Metric::ALL.to_vec()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

impl Config {
    /// Catalog from config entries, or the built-in table
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog {
            Some(entries) => Ok(Catalog::new(entries.clone())?),
            None => Ok(Catalog::builtin().clone()),
        }
    }
}

/// Load configuration from an optional TOML file plus `AI_IMPACT__*` env overrides
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("AI_IMPACT")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("estimator.metrics"),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    cfg.server
        .host
        .parse::<IpAddr>()
        .map_err(|e| anyhow::anyhow!("Invalid server host '{}': {}", cfg.server.host, e))?;

    match cfg.server.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        other => anyhow::bail!("Invalid log level: {}", other),
    }

    if cfg.estimator.metrics.is_empty() {
        anyhow::bail!("At least one metric must be enabled");
    }

    let mut seen = HashSet::new();
    for metric in &cfg.estimator.metrics {
        if !seen.insert(metric) {
            anyhow::bail!("Metric '{}' is listed more than once", metric.key());
        }
    }

    cfg.estimator.requests.validate()?;

    if let Some(entries) = &cfg.catalog {
        if entries.is_empty() {
            anyhow::bail!("Catalog override must contain at least one model");
        }
    }
    cfg.load_catalog()?;

    if cfg.metrics.enabled {
        let endpoint = cfg.metrics.endpoint.as_str();
        if !endpoint.starts_with('/') {
            anyhow::bail!("Metrics endpoint must start with '/': {}", endpoint);
        }
        if RESERVED_PATHS.contains(&endpoint) {
            anyhow::bail!("Metrics endpoint {} collides with an API route", endpoint);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModelCategory;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = Config::default();
        assert!(validate_config(&cfg).is_ok());
        assert_eq!(cfg.load_catalog().unwrap().len(), 8);
    }

    #[test]
    fn test_validate_config_requires_metric() {
        let mut cfg = Config::default();
        cfg.estimator.metrics.clear();

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("At least one metric"));
    }

    #[test]
    fn test_validate_config_rejects_duplicate_metric() {
        let mut cfg = Config::default();
        cfg.estimator.metrics = vec![Metric::Energy, Metric::Energy];
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_bad_range() {
        let mut cfg = Config::default();
        cfg.estimator.requests = RequestRange {
            min: 5,
            max: 1,
            default: 3,
        };
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_bad_host() {
        let mut cfg = Config::default();
        cfg.server.host = "not-an-ip".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_duplicate_catalog_entries() {
        let mut cfg = Config::default();
        cfg.catalog = Some(vec![
            ModelProfile::new("X", ModelCategory::Chat, 1.0, 1.0, None),
            ModelProfile::new("X", ModelCategory::Chat, 1.0, 1.0, None),
        ]);
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_parse_variant_without_water() {
        let cfg: Config = toml::from_str(
            r#"
            [estimator]
            metrics = ["energy", "co2"]
            missing_metric = "zero"

            [estimator.requests]
            min = 1
            max = 1000
            default = 10

            [[catalog]]
            name = "GPT-4"
            category = "chat"
            energy_wh = 2.9
            co2_grams = 1.4
            "#,
        )
        .unwrap();

        assert!(validate_config(&cfg).is_ok());
        assert_eq!(cfg.estimator.metrics, vec![Metric::Energy, Metric::Co2]);
        assert_eq!(cfg.estimator.missing_metric, MissingMetricPolicy::Zero);
        assert_eq!(cfg.estimator.requests.max, 1000);
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.load_catalog().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_partial_request_range() {
        let cfg: Config = toml::from_str("[estimator.requests]\nmax = 1000\n").unwrap();
        assert_eq!(
            cfg.estimator.requests,
            RequestRange {
                min: 1,
                max: 1000,
                default: 10,
            }
        );
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_parse_partial_server_section() {
        let cfg: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
    }

    #[test]
    fn test_validate_config_rejects_reserved_metrics_endpoint() {
        for path in ["/health", "/api/estimate"] {
            let mut cfg = Config::default();
            cfg.metrics.endpoint = path.to_string();
            assert!(validate_config(&cfg).is_err(), "{} accepted", path);
        }

        let mut cfg = Config::default();
        cfg.metrics.enabled = false;
        cfg.metrics.endpoint = "/health".to_string();
        assert!(validate_config(&cfg).is_ok());
    }
}
