//! Tracked footprint metrics and aggregation periods

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource tracked per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Energy,
    Co2,
    Water,
}

impl Metric {
    /// All metrics in display order
    pub const ALL: [Metric; 3] = [Metric::Energy, Metric::Co2, Metric::Water];

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Energy => "Wh",
            Metric::Co2 => "gCO2e",
            Metric::Water => "L",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Energy => "Energy",
            Metric::Co2 => "CO2",
            Metric::Water => "Water",
        }
    }

    /// Config/CLI spelling
    pub fn key(self) -> &'static str {
        match self {
            Metric::Energy => "energy",
            Metric::Co2 => "co2",
            Metric::Water => "water",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

/// Aggregation period; week and month are fixed multiples of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    pub fn days(self) -> u32 {
        match self {
            Period::Day => 1,
            Period::Week => 7,
            Period::Month => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Day => "Day",
            Period::Week => "Week",
            Period::Month => "Month",
        }
    }
}

/// One value per metric; `None` means the metric does not apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_wh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_liters: Option<f64>,
}

impl MetricValues {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Energy => self.energy_wh,
            Metric::Co2 => self.co2_grams,
            Metric::Water => self.water_liters,
        }
    }

    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        match metric {
            Metric::Energy => self.energy_wh = value,
            Metric::Co2 => self.co2_grams = value,
            Metric::Water => self.water_liters = value,
        }
    }

    /// Multiply every present value, leaving absent ones absent
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            energy_wh: self.energy_wh.map(|v| v * factor),
            co2_grams: self.co2_grams.map(|v| v * factor),
            water_liters: self.water_liters.map(|v| v * factor),
        }
    }

    /// Present metrics with their values, in display order
    pub fn present(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(move |m| self.get(m).map(|v| (m, v)))
    }
}
