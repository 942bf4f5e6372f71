use ai_impact::{config::Config, estimator::Estimator, report::ranking_table};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

#[derive(Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    #[serde(flatten)]
    profile: &'a ai_impact::catalog::ModelProfile,
}

/// Execute the rank command
pub fn execute(cfg: &Config, json: bool) -> Result<()> {
    let catalog = cfg.load_catalog()?;
    let estimator = Estimator::new(&catalog, cfg.estimator.settings());
    let ranked = estimator.ranking();

    if json {
        let entries: Vec<RankedEntry> = ranked
            .iter()
            .enumerate()
            .map(|(idx, profile)| RankedEntry {
                rank: idx + 1,
                profile,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{}",
        "Models ranked by footprint per request (lightest first)"
            .green()
            .bold()
    );
    println!("{}", ranking_table(&ranked, &estimator.settings().tracked()));

    Ok(())
}
