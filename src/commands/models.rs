use ai_impact::{config::Config, report::catalog_table};
use anyhow::Result;
use colored::Colorize;

/// Execute the models command
///
/// Lists the catalog in declaration order
pub fn execute(cfg: &Config) -> Result<()> {
    let catalog = cfg.load_catalog()?;
    let profiles: Vec<_> = catalog.profiles().iter().collect();

    let source = if cfg.catalog.is_some() {
        "configuration"
    } else {
        "built-in"
    };
    println!(
        "{} {} models ({})",
        "Catalog:".green().bold(),
        catalog.len(),
        source
    );
    println!("{}", catalog_table(&profiles, &cfg.estimator.settings().tracked()));

    Ok(())
}
