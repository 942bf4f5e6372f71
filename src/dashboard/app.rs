//! Dashboard state and key handling

use crossterm::event::{KeyCode, KeyEvent};

use crate::catalog::{Catalog, ModelProfile};
use crate::error::AppError;
use crate::estimator::{AggregateReport, Estimator, EstimatorSettings};
use crate::input::{RequestRange, UsageInput};

/// Application state for the calculator dashboard
pub struct DashboardApp {
    catalog: Catalog,
    settings: EstimatorSettings,
    pub range: RequestRange,
    pub selected: usize,
    pub requests_per_day: u32,
    pub report: Option<AggregateReport>,
    pub error_message: Option<String>,
}

impl DashboardApp {
    /// `model` must name a catalog entry; the first entry is used when `None`
    pub fn new(
        catalog: Catalog,
        settings: EstimatorSettings,
        range: RequestRange,
        model: Option<&str>,
        requests: Option<i64>,
    ) -> Result<Self, AppError> {
        if catalog.is_empty() {
            return Err(AppError::InvalidCatalog("catalog is empty".to_string()));
        }

        let selected = match model {
            Some(name) => catalog
                .names()
                .position(|n| n == name)
                .ok_or_else(|| AppError::ModelNotFound(name.to_string()))?,
            None => 0,
        };
        let requests_per_day = range.clamp(requests.unwrap_or(i64::from(range.default)));

        let mut app = Self {
            catalog,
            settings,
            range,
            selected,
            requests_per_day,
            report: None,
            error_message: None,
        };
        app.recompute();
        Ok(app)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn estimator(&self) -> Estimator<'_> {
        Estimator::new(&self.catalog, self.settings.clone())
    }

    pub fn selected_model(&self) -> &ModelProfile {
        &self.catalog.profiles()[self.selected]
    }

    /// One full estimation pass for the current inputs
    pub fn recompute(&mut self) {
        let input = UsageInput::new(self.selected_model().name.clone(), self.requests_per_day);
        let result = self.estimator().estimate(&input);
        match result {
            Ok(report) => {
                self.report = Some(report);
                self.error_message = None;
            }
            Err(e) => {
                self.report = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Handle keyboard input; returns true when the user quits
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let last = self.catalog.len() - 1;
        let before = (self.selected, self.requests_per_day);

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = if self.selected == 0 { last } else { self.selected - 1 };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = if self.selected == last { 0 } else { self.selected + 1 };
            }
            KeyCode::Left | KeyCode::Char('h') => self.step_requests(-1),
            KeyCode::Right | KeyCode::Char('l') => self.step_requests(1),
            KeyCode::PageDown => self.step_requests(-10),
            KeyCode::PageUp => self.step_requests(10),
            KeyCode::Home => self.requests_per_day = self.range.min,
            KeyCode::End => self.requests_per_day = self.range.max,
            _ => {}
        }

        if before != (self.selected, self.requests_per_day) {
            self.recompute();
        }
        false
    }

    fn step_requests(&mut self, delta: i64) {
        self.requests_per_day = self.range.step(self.requests_per_day, delta);
    }
}
