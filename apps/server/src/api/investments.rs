use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use financegpt_core::{
    validation::{validate_investment, InvestmentForm},
    Investment,
};

async fn get_investments(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Investment>>> {
    let investments = state.data_service.get_investments()?;
    Ok(Json(investments))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Json(form): Json<InvestmentForm>,
) -> ApiResult<(StatusCode, Json<Investment>)> {
    let new_investment = validate_investment(&form)?;
    let investment = state.data_service.add_investment(new_investment).await?;
    Ok((StatusCode::CREATED, Json(investment)))
}

async fn update_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(form): Json<InvestmentForm>,
) -> ApiResult<Json<Investment>> {
    let update = validate_investment(&form)?;
    let investment = state.data_service.update_investment(&id, update).await?;
    Ok(Json(investment))
}

async fn delete_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.data_service.remove_investment(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(get_investments).post(create_investment))
        .route(
            "/investments/{id}",
            put(update_investment).delete(delete_investment),
        )
}
