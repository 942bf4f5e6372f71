use ai_impact::{
    config::Config,
    estimator::Estimator,
    input::UsageInput,
    report::{results_table, summary_lines},
};
use anyhow::Result;
use colored::Colorize;
use tracing::info;

/// Execute the estimate command
///
/// `requests` is clamped into the configured range; an unknown model is an error.
pub fn execute(cfg: &Config, model: &str, requests: Option<i64>, json: bool) -> Result<()> {
    let catalog = cfg.load_catalog()?;
    let range = cfg.estimator.requests;
    let raw = requests.unwrap_or(i64::from(range.default));
    let input = UsageInput::clamped(model, raw, &range);

    if i64::from(input.requests_per_day) != raw {
        info!(
            "Requests per day {} clamped to {} (range {}-{})",
            raw, input.requests_per_day, range.min, range.max
        );
    }

    let report = Estimator::new(&catalog, cfg.estimator.settings()).estimate(&input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} × {} requests/day ({})",
        "Estimated impact:".green().bold(),
        report.model.bold(),
        report.requests_per_day,
        report.category
    );
    println!();
    println!("{}", results_table(&report));
    println!();
    for line in summary_lines(&report) {
        println!("  {}", line);
    }

    Ok(())
}
