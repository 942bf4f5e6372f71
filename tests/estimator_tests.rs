/// Integration tests for the impact estimator public API
use ai_impact::{
    catalog::{Catalog, ModelCategory, ModelProfile},
    error::AppError,
    estimator::{
        compute_daily_totals, expand_to_periods, rank_models, Estimator, EstimatorSettings,
        MissingMetricPolicy,
    },
    input::{RequestRange, UsageInput},
    metric::{Metric, Period},
};

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("metric should be present");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_week_and_month_are_fixed_multiples_of_day() {
    for profile in Catalog::builtin().profiles() {
        for n in [1, 3, 10, 137, 200] {
            let daily = compute_daily_totals(profile, n);
            let periods = expand_to_periods(&daily);

            for metric in Metric::ALL {
                let day = periods.get(Period::Day).get(metric).unwrap();
                assert_close(periods.get(Period::Week).get(metric), day * 7.0);
                assert_close(periods.get(Period::Month).get(metric), day * 30.0);
            }
        }
    }
}

#[test]
fn test_gpt35_ten_requests_per_day() {
    let catalog = Catalog::new(vec![ModelProfile::new(
        "GPT-3.5",
        ModelCategory::Chat,
        0.35,
        0.2,
        Some(0.5),
    )])
    .unwrap();
    let report = Estimator::new(&catalog, EstimatorSettings::default())
        .estimate(&UsageInput::new("GPT-3.5", 10))
        .unwrap();

    assert_close(report.periods.day.energy_wh, 3.5);
    assert_close(report.periods.day.co2_grams, 2.0);
    assert_close(report.periods.day.water_liters, 5.0);
    assert_close(report.periods.week.energy_wh, 24.5);
    assert_close(report.periods.week.co2_grams, 14.0);
    assert_close(report.periods.week.water_liters, 35.0);
    assert_close(report.periods.month.energy_wh, 105.0);
    assert_close(report.periods.month.co2_grams, 60.0);
    assert_close(report.periods.month.water_liters, 150.0);
}

#[test]
fn test_unknown_model_yields_model_not_found() {
    let estimator = Estimator::new(Catalog::builtin(), EstimatorSettings::default());
    match estimator.estimate(&UsageInput::new("Unknown", 10)) {
        Err(AppError::ModelNotFound(name)) => assert_eq!(name, "Unknown"),
        other => panic!("expected ModelNotFound, got {:?}", other),
    }
}

#[test]
fn test_two_entry_ranking() {
    let catalog = Catalog::new(vec![
        ModelProfile::new("A", ModelCategory::Chat, 1.0, 1.0, Some(1.0)),
        ModelProfile::new("B", ModelCategory::Chat, 0.5, 2.0, Some(2.0)),
    ])
    .unwrap();

    let ranked: Vec<&str> = rank_models(&catalog).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(ranked, vec!["B", "A"]);
}

#[test]
fn test_variant_without_water_wider_range() {
    // Energy/CO2-only variant with an extended model list and a 1..1000 slider
    let mut profiles: Vec<ModelProfile> = Catalog::builtin()
        .profiles()
        .iter()
        .cloned()
        .map(|mut p| {
            p.water_liters = None;
            p
        })
        .collect();
    profiles.push(ModelProfile::new(
        "Llama",
        ModelCategory::Chat,
        0.3,
        0.1,
        None,
    ));
    let catalog = Catalog::new(profiles).unwrap();
    let range = RequestRange {
        min: 1,
        max: 1000,
        default: 10,
    };
    let settings = EstimatorSettings {
        metrics: vec![Metric::Energy, Metric::Co2],
        missing_metric: MissingMetricPolicy::NotApplicable,
    };
    let estimator = Estimator::new(&catalog, settings);

    let report = estimator
        .estimate(&UsageInput::clamped("Llama", 5000, &range))
        .unwrap();
    assert_eq!(report.requests_per_day, 1000);
    assert_eq!(report.metrics, vec![Metric::Energy, Metric::Co2]);
    assert_close(report.periods.month.energy_wh, 0.3 * 1000.0 * 30.0);
    assert!(report.periods.month.water_liters.is_none());

    // Llama ties Mistral on energy and wins on CO2
    let ranked = estimator.ranking();
    assert_eq!(ranked[0].name, "Llama");
    assert_eq!(ranked[1].name, "Mistral");
}

#[test]
fn test_report_serializes_without_absent_metrics() {
    let catalog = Catalog::new(vec![ModelProfile::new(
        "Dry",
        ModelCategory::CodingAssistant,
        1.0,
        0.5,
        None,
    )])
    .unwrap();
    let report = Estimator::new(&catalog, EstimatorSettings::default())
        .estimate(&UsageInput::new("Dry", 2))
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["model"], "Dry");
    assert_eq!(json["category"], "coding_assistant");
    assert_eq!(json["metrics"], serde_json::json!(["energy", "co2"]));
    assert!(json["periods"]["day"].get("water_liters").is_none());
    assert_eq!(json["periods"]["week"]["energy_wh"], 14.0);
}
