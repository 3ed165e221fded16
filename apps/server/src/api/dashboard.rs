use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use financegpt_core::store::FinancialData;

/// Everything the dashboard renders in one read.
async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<FinancialData>> {
    let data = state.data_service.get_data()?;
    Ok(Json(data))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
