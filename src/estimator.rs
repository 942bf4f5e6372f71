//! Impact estimation: daily totals, period expansion and model ranking
//!
//! Everything here is a pure function of its explicit inputs. Display
//! rounding happens in [`crate::report`], never here.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use crate::catalog::{Catalog, ModelCategory, ModelProfile};
use crate::error::AppError;
use crate::input::UsageInput;
use crate::metric::{Metric, MetricValues, Period};

/// How a metric missing from a profile is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMetricPolicy {
    /// Absent from output; sorts after any present value in rankings
    #[default]
    NotApplicable,
    /// Reported and ranked as 0.0
    Zero,
}

/// Which metrics are tracked and how gaps are handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    pub metrics: Vec<Metric>,
    pub missing_metric: MissingMetricPolicy,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            metrics: Metric::ALL.to_vec(),
            missing_metric: MissingMetricPolicy::NotApplicable,
        }
    }
}

impl EstimatorSettings {
    /// Enabled metrics in display order, deduplicated
    pub fn tracked(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|m| self.metrics.contains(m))
            .collect()
    }

    /// Ranking sort keys: energy then CO2 always, water only when tracked
    pub fn ranking_keys(&self) -> Vec<Metric> {
        let mut keys = vec![Metric::Energy, Metric::Co2];
        if self.metrics.contains(&Metric::Water) {
            keys.push(Metric::Water);
        }
        keys
    }
}

/// Totals for each aggregation period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub day: MetricValues,
    pub week: MetricValues,
    pub month: MetricValues,
}

impl PeriodTotals {
    pub fn get(&self, period: Period) -> &MetricValues {
        match period {
            Period::Day => &self.day,
            Period::Week => &self.week,
            Period::Month => &self.month,
        }
    }
}

/// Result of one estimation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub model: String,
    pub category: ModelCategory,
    pub requests_per_day: u32,
    /// Metrics carried by `periods`, in display order
    pub metrics: Vec<Metric>,
    pub periods: PeriodTotals,
}

/// Per-request coefficients times the daily request count
pub fn compute_daily_totals(profile: &ModelProfile, requests_per_day: u32) -> MetricValues {
    profile.per_request().scale(f64::from(requests_per_day))
}

/// Week is seven days, month is thirty
pub fn expand_to_periods(daily: &MetricValues) -> PeriodTotals {
    PeriodTotals {
        day: *daily,
        week: daily.scale(f64::from(Period::Week.days())),
        month: daily.scale(f64::from(Period::Month.days())),
    }
}

/// Least intensive first, keyed on energy, then CO2, then water.
///
/// Missing water sorts after present water; ties keep catalog order.
pub fn rank_models(catalog: &Catalog) -> Vec<&ModelProfile> {
    rank_models_by(catalog, &Metric::ALL, MissingMetricPolicy::NotApplicable)
}

/// Stable multi-key ascending sort over the given metrics, in the given order
pub fn rank_models_by<'a>(
    catalog: &'a Catalog,
    keys: &[Metric],
    policy: MissingMetricPolicy,
) -> Vec<&'a ModelProfile> {
    let mut ranked: Vec<&ModelProfile> = catalog.profiles().iter().collect();
    ranked.sort_by(|a, b| {
        keys.iter().fold(Ordering::Equal, |ord, &metric| {
            ord.then_with(|| {
                compare_coefficient(a.coefficient(metric), b.coefficient(metric), policy)
            })
        })
    });
    ranked
}

fn compare_coefficient(a: Option<f64>, b: Option<f64>, policy: MissingMetricPolicy) -> Ordering {
    match policy {
        MissingMetricPolicy::Zero => a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0)),
        MissingMetricPolicy::NotApplicable => match (a, b) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Estimator bound to a catalog and a set of tracked metrics
#[derive(Debug, Clone)]
pub struct Estimator<'a> {
    catalog: &'a Catalog,
    settings: EstimatorSettings,
}

impl<'a> Estimator<'a> {
    pub fn new(catalog: &'a Catalog, settings: EstimatorSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn settings(&self) -> &EstimatorSettings {
        &self.settings
    }

    /// Full estimation pass; fails on an unknown model without partial output
    pub fn estimate(&self, input: &UsageInput) -> Result<AggregateReport, AppError> {
        let profile = self.catalog.get(&input.model)?;
        let raw = compute_daily_totals(profile, input.requests_per_day);

        let mut daily = MetricValues::default();
        let mut metrics = Vec::new();
        for metric in self.settings.tracked() {
            let value = match (raw.get(metric), self.settings.missing_metric) {
                (Some(v), _) => Some(v),
                (None, MissingMetricPolicy::Zero) => Some(0.0),
                (None, MissingMetricPolicy::NotApplicable) => None,
            };
            if value.is_some() {
                metrics.push(metric);
            }
            daily.set(metric, value);
        }

        debug!(
            model = %profile.name,
            requests_per_day = input.requests_per_day,
            tracked = metrics.len(),
            "Computed impact estimate"
        );

        Ok(AggregateReport {
            model: profile.name.clone(),
            category: profile.category,
            requests_per_day: input.requests_per_day,
            metrics,
            periods: expand_to_periods(&daily),
        })
    }

    /// Catalog ranked on [`EstimatorSettings::ranking_keys`] under the configured policy
    pub fn ranking(&self) -> Vec<&'a ModelProfile> {
        rank_models_by(
            self.catalog,
            &self.settings.ranking_keys(),
            self.settings.missing_metric,
        )
    }
}
