//! Input boundary: the only place request counts are clamped

use serde::{Deserialize, Serialize};

/// Allowed requests-per-day range and its initial value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl Default for RequestRange {
    fn default() -> Self {
        Self {
            min: 1,
            max: 200,
            default: 10,
        }
    }
}

impl RequestRange {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.min == 0 {
            anyhow::bail!("Request range minimum must be at least 1");
        }
        if self.min > self.max {
            anyhow::bail!(
                "Request range minimum ({}) exceeds maximum ({})",
                self.min,
                self.max
            );
        }
        if !(self.min..=self.max).contains(&self.default) {
            anyhow::bail!(
                "Default request count {} is outside [{}, {}]",
                self.default,
                self.min,
                self.max
            );
        }
        Ok(())
    }

    pub fn clamp(&self, raw: i64) -> u32 {
        raw.clamp(i64::from(self.min), i64::from(self.max)) as u32
    }

    /// Step within the range, saturating at the bounds
    pub fn step(&self, current: u32, delta: i64) -> u32 {
        self.clamp(i64::from(current) + delta)
    }
}

/// One user interaction: selected model and daily request count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageInput {
    pub model: String,
    pub requests_per_day: u32,
}

impl UsageInput {
    /// Caller guarantees `requests_per_day` is already in range
    pub fn new(model: impl Into<String>, requests_per_day: u32) -> Self {
        Self {
            model: model.into(),
            requests_per_day,
        }
    }

    /// Clamp a raw widget/CLI value into `range`
    pub fn clamped(model: impl Into<String>, raw: i64, range: &RequestRange) -> Self {
        Self::new(model, range.clamp(raw))
    }
}
