//! Command implementations for the CLI
//!
//! - dashboard: interactive calculator
//! - estimate: day/week/month footprint of one model
//! - rank: models ordered by per-request footprint
//! - models: catalog listing
//! - tips: usage advice
//! - config: configuration display and validation

pub mod config;
pub mod dashboard;
pub mod estimate;
pub mod models;
pub mod rank;
pub mod tips;
