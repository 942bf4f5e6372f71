//! Model catalog: per-request footprint coefficients
//!
//! The catalog is built once and never mutated. The built-in table is a
//! process-wide constant; a configuration file may supply its own entries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use crate::error::AppError;
use crate::metric::{Metric, MetricValues};

/// Kind of AI usage a model serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelCategory {
    Chat,
    ImageGeneration,
    CodingAssistant,
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModelCategory::Chat => "chat",
            ModelCategory::ImageGeneration => "image generation",
            ModelCategory::CodingAssistant => "coding assistant",
        };
        f.write_str(s)
    }
}

/// Per-request footprint of one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelProfile {
    pub name: String,
    pub category: ModelCategory,
    pub energy_wh: f64,
    pub co2_grams: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_liters: Option<f64>,
}

impl ModelProfile {
    pub fn new(
        name: impl Into<String>,
        category: ModelCategory,
        energy_wh: f64,
        co2_grams: f64,
        water_liters: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            energy_wh,
            co2_grams,
            water_liters,
        }
    }

    /// Coefficients as metric values (water absent when the profile omits it)
    pub fn per_request(&self) -> MetricValues {
        MetricValues {
            energy_wh: Some(self.energy_wh),
            co2_grams: Some(self.co2_grams),
            water_liters: self.water_liters,
        }
    }

    pub fn coefficient(&self, metric: Metric) -> Option<f64> {
        self.per_request().get(metric)
    }
}

/// Immutable, ordered set of model profiles with unique names
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    profiles: Vec<ModelProfile>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and invalid coefficients
    pub fn new(profiles: Vec<ModelProfile>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if profile.name.trim().is_empty() {
                return Err(AppError::InvalidCatalog("model name cannot be empty".to_string()));
            }
            if !seen.insert(profile.name.as_str()) {
                return Err(AppError::InvalidCatalog(format!(
                    "duplicate model name '{}'",
                    profile.name
                )));
            }
            for (metric, value) in profile.per_request().present() {
                if !value.is_finite() || value < 0.0 {
                    return Err(AppError::InvalidCatalog(format!(
                        "model '{}' has invalid {} coefficient: {}",
                        profile.name,
                        metric.key(),
                        value
                    )));
                }
            }
        }

        Ok(Self { profiles })
    }

    /// Built-in catalog, initialised on first use
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Look up a profile by exact name
    pub fn get(&self, name: &str) -> Result<&ModelProfile, AppError> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AppError::ModelNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.iter().any(|p| p.name == name)
    }

    /// Model names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn profiles(&self) -> &[ModelProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    profiles: builtin_profiles(),
});

/// Coefficients in Wh, gCO2e and liters per request
pub fn builtin_profiles() -> Vec<ModelProfile> {
    use ModelCategory::*;

    vec![
        ModelProfile::new("GPT-3.5", Chat, 0.35, 0.2, Some(0.5)),
        ModelProfile::new("GPT-4", Chat, 2.9, 1.4, Some(3.0)),
        ModelProfile::new("Midjourney", ImageGeneration, 6.0, 3.0, Some(5.0)),
        ModelProfile::new("DALL·E", ImageGeneration, 2.5, 1.2, Some(2.5)),
        ModelProfile::new("Copilot", CodingAssistant, 0.5, 0.25, Some(0.6)),
        ModelProfile::new("Gemini", Chat, 2.0, 1.0, Some(2.0)),
        ModelProfile::new("Mistral", Chat, 0.3, 0.15, Some(0.4)),
        ModelProfile::new("Claude", Chat, 1.5, 0.7, Some(1.2)),
    ]
}
