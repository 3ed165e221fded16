use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::HealthResponse};
use axum::{extract::State, routing::get, Json, Router};

async fn get_health(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    let data = state.data_service.get_data()?;
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        connected: data.is_connected,
        last_update: data.last_update,
        storage: state.data_service.storage_info(),
        api_key: state.advisor.api_key_status(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}
