//! Interactive calculator dashboard
//!
//! A ratatui rendition of the calculator page: model selector, requests
//! slider, results table, grouped bar chart, ranking and tips.

pub mod app;
pub mod ui;

pub use app::DashboardApp;
