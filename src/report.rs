//! Text rendering of reports and rankings
//!
//! All display rounding (two decimals) lives here.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::catalog::ModelProfile;
use crate::estimator::AggregateReport;
use crate::metric::{Metric, Period};

/// Two-decimal display value
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

/// Value with unit, or "n/a" when the metric does not apply
pub fn format_metric(value: Option<f64>, metric: Metric) -> String {
    match value {
        Some(v) => format!("{} {}", format_value(v), metric.unit()),
        None => "n/a".to_string(),
    }
}

/// Column header: upper-cased label, unit kept as written
fn metric_header(metric: Metric) -> String {
    format!("{} ({})", metric.label().to_uppercase(), metric.unit())
}

/// One line per period, e.g. "Day: 3.50 Wh | 2.00 gCO2e | 5.00 L"
pub fn summary_lines(report: &AggregateReport) -> Vec<String> {
    Period::ALL
        .iter()
        .map(|&period| {
            let values = report.periods.get(period);
            let cells: Vec<String> = report
                .metrics
                .iter()
                .map(|&m| format_metric(values.get(m), m))
                .collect();
            format!("{}: {}", period.label(), cells.join(" | "))
        })
        .collect()
}

/// Results table: one row per period, one column per tracked metric
pub fn results_table(report: &AggregateReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("PERIOD").fg(Color::Cyan)];
    header.extend(
        report
            .metrics
            .iter()
            .map(|&m| Cell::new(metric_header(m)).fg(Color::Cyan)),
    );
    table.set_header(header);

    for period in Period::ALL {
        let values = report.periods.get(period);
        let mut row = vec![Cell::new(period.label())];
        row.extend(
            report
                .metrics
                .iter()
                .map(|&m| Cell::new(values.get(m).map(format_value).unwrap_or_else(|| "n/a".to_string()))),
        );
        table.add_row(row);
    }

    table
}

/// Ranking table with per-request coefficients for the given metrics
pub fn ranking_table(ranked: &[&ModelProfile], metrics: &[Metric]) -> Table {
    profile_table(ranked, metrics, true)
}

/// Plain catalog listing, no rank column
pub fn catalog_table(profiles: &[&ModelProfile], metrics: &[Metric]) -> Table {
    profile_table(profiles, metrics, false)
}

fn profile_table(profiles: &[&ModelProfile], metrics: &[Metric], with_rank: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = Vec::new();
    if with_rank {
        header.push(Cell::new("#").fg(Color::Cyan));
    }
    header.push(Cell::new("MODEL").fg(Color::Cyan));
    header.push(Cell::new("CATEGORY").fg(Color::Cyan));
    header.extend(
        metrics
            .iter()
            .map(|&m| Cell::new(format!("{} / REQ", metric_header(m))).fg(Color::Cyan)),
    );
    table.set_header(header);

    for (idx, profile) in profiles.iter().enumerate() {
        let mut row = Vec::new();
        if with_rank {
            row.push(if idx == 0 {
                Cell::new(idx + 1).fg(Color::Green)
            } else {
                Cell::new(idx + 1)
            });
        }
        row.push(Cell::new(&profile.name));
        row.push(Cell::new(profile.category));
        row.extend(
            metrics
                .iter()
                .map(|&m| Cell::new(format_metric(profile.coefficient(m), m))),
        );
        table.add_row(row);
    }

    table
}

/// Grouped bar chart data: for each tracked metric, its day/week/month values
pub fn chart_series(report: &AggregateReport) -> Vec<(Metric, [f64; 3])> {
    report
        .metrics
        .iter()
        .map(|&m| {
            let series = Period::ALL.map(|p| report.periods.get(p).get(m).unwrap_or(0.0));
            (m, series)
        })
        .collect()
}
