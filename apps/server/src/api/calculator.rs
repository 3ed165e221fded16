use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{routing::post, Json, Router};
use financegpt_core::{
    calculator::{try_calculate_sip, SipInput, SipProjection},
    Error as CoreError,
};

/// Projection rounded to whole rupees.
async fn calculate_sip(Json(input): Json<SipInput>) -> ApiResult<Json<SipProjection>> {
    let projection = try_calculate_sip(&input).map_err(CoreError::from)?;
    Ok(Json(projection.rounded()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/calculator/sip", post(calculate_sip))
}
