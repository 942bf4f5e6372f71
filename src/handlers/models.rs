use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use crate::catalog::ModelProfile;
use crate::handlers::AppState;
use crate::tips::{Tip, TIPS};

#[derive(Debug, Serialize)]
pub struct ModelsResponse<'a> {
    pub object: &'static str,
    pub data: &'a [ModelProfile],
}

#[derive(Debug, Serialize)]
pub struct RankedModel<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub profile: &'a ModelProfile,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse<'a> {
    pub object: &'static str,
    pub data: Vec<RankedModel<'a>>,
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub object: &'static str,
    pub data: &'static [Tip],
}

/// Handle /api/models: catalog entries in declaration order
pub async fn list_models(State(state): State<AppState>) -> impl IntoResponse {
    Json(ModelsResponse {
        object: "list",
        data: state.catalog.profiles(),
    })
    .into_response()
}

/// Handle /api/ranking: least resource-intensive models first
pub async fn ranking(State(state): State<AppState>) -> impl IntoResponse {
    let estimator = state.estimator();
    let data = estimator
        .ranking()
        .into_iter()
        .enumerate()
        .map(|(idx, profile)| RankedModel {
            rank: idx + 1,
            profile,
        })
        .collect();

    Json(RankingResponse {
        object: "list",
        data,
    })
    .into_response()
}

/// Handle /api/tips
pub async fn tips() -> impl IntoResponse {
    Json(TipsResponse {
        object: "list",
        data: TIPS,
    })
}
