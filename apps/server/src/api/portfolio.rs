use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use financegpt_core::{market::TickOutcome, PortfolioSummary};

async fn get_portfolio(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.data_service.get_portfolio()?;
    Ok(Json(summary))
}

/// Runs one market tick outside the schedule.
async fn tick_market(State(state): State<Arc<AppState>>) -> ApiResult<Json<TickOutcome>> {
    let outcome = state.tick_market()?;
    Ok(Json(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(get_portfolio))
        .route("/portfolio/tick", post(tick_market))
}
