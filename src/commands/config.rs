use ai_impact::config::Config;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file + environment + defaults)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", toml::to_string_pretty(cfg)?);

    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; print a summary
pub fn validate(cfg: &Config, path: &Path) -> Result<()> {
    info!("Validating configuration file");

    let catalog = cfg.load_catalog()?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Source".cyan(), source);
    println!("  {}: {}:{}", "Server".cyan(), cfg.server.host, cfg.server.port);
    println!("  {}: {}", "Log Level".cyan(), cfg.server.log_level);
    println!(
        "  {}: {}",
        "Metrics".cyan(),
        metric_summary(cfg)
    );
    println!("  {}: {:?}", "Missing Metric".cyan(), cfg.estimator.missing_metric);
    println!(
        "  {}: {}-{} (default {})",
        "Requests/Day".cyan(),
        cfg.estimator.requests.min,
        cfg.estimator.requests.max,
        cfg.estimator.requests.default
    );
    println!(
        "  {}: {} ({})",
        "Models".cyan(),
        catalog.len(),
        if cfg.catalog.is_some() { "configured" } else { "built-in" }
    );
    println!(
        "  {}: {}",
        "Prometheus".cyan(),
        if cfg.metrics.enabled {
            format!("enabled at {}", cfg.metrics.endpoint).green()
        } else {
            "disabled".red()
        }
    );

    info!("Configuration validation successful");
    Ok(())
}

fn metric_summary(cfg: &Config) -> String {
    cfg.estimator
        .settings()
        .tracked()
        .iter()
        .map(|m| m.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_impact::metric::Metric;

    #[test]
    fn test_metric_summary() {
        let mut cfg = Config::default();
        assert_eq!(metric_summary(&cfg), "energy, co2, water");

        cfg.estimator.metrics = vec![Metric::Co2, Metric::Energy];
        assert_eq!(metric_summary(&cfg), "energy, co2");
    }

    #[test]
    fn test_show_serializes_defaults() {
        let cfg = Config::default();
        let rendered = toml::to_string_pretty(&cfg).unwrap();
        assert!(rendered.contains("[estimator.requests]"));
        assert!(rendered.contains("missing_metric = \"not_applicable\""));
    }
}
