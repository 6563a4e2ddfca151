use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use log::{info, warn};
use std::sync::Arc;

use crate::error::FetchError;
use crate::models::{AnalysisResponse, AnalyzeParams, AnalyzeRequest, AppState};

pub async fn analyze_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalyzeParams>,
) -> (StatusCode, Json<AnalysisResponse>) {
    run_analysis(&state, &params.url).await
}

pub async fn analyze_post(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> (StatusCode, Json<AnalysisResponse>) {
    run_analysis(&state, &request.url).await
}

pub async fn health() -> &'static str {
    "ok"
}

async fn run_analysis(state: &AppState, url: &str) -> (StatusCode, Json<AnalysisResponse>) {
    info!("Started analyze handler for {}", url);

    match state
        .analyzer
        .analyze_url(&state.fetcher, url, state.config.fetch_timeout)
        .await
    {
        Ok((result, signals)) => {
            let signals = state.analyzer.debug().then_some(signals);
            (StatusCode::OK, Json(AnalysisResponse::completed(result, signals)))
        }
        Err(e) => {
            warn!("Analysis of {} failed: {}", url, e);
            (status_for(&e), Json(AnalysisResponse::error(e.to_string())))
        }
    }
}

pub fn status_for(error: &FetchError) -> StatusCode {
    match error {
        FetchError::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
        FetchError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        FetchError::Unreachable(_) | FetchError::Status { .. } => StatusCode::BAD_GATEWAY,
    }
}
