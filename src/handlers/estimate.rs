use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::AppError;
use crate::estimator::AggregateReport;
use crate::handlers::AppState;
use crate::input::UsageInput;
use crate::metrics;

#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    pub model: String,
    /// Clamped into the configured range; defaults to the range default
    pub requests: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: AggregateReport,
}

/// Handle /api/estimate
pub async fn estimate(
    State(state): State<AppState>,
    Query(query): Query<EstimateQuery>,
) -> Result<Json<EstimateResponse>, AppError> {
    let raw = query.requests.unwrap_or(i64::from(state.requests.default));
    let input = UsageInput::clamped(query.model, raw, &state.requests);

    let report = state.estimator().estimate(&input).map_err(|e| {
        warn!(model = %input.model, "Estimate rejected: {}", e);
        metrics::record_error(e.type_name());
        e
    })?;

    metrics::record_estimate(&report.model);
    info!(
        model = %report.model,
        requests_per_day = report.requests_per_day,
        "Served impact estimate"
    );

    Ok(Json(EstimateResponse {
        generated_at: Utc::now(),
        report,
    }))
}
