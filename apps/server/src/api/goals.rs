use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use financegpt_core::{
    validation::{validate_add_funds, validate_goal, AddFundsForm, GoalForm},
    Error as CoreError, Goal, GoalProgress,
};

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.data_service.get_goals()?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(form): Json<GoalForm>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let new_goal = validate_goal(&form, Utc::now())?;
    let goal = state.data_service.add_goal(new_goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.data_service.remove_goal(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_funds(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(form): Json<AddFundsForm>,
) -> ApiResult<Json<Goal>> {
    let amount = validate_add_funds(&form)?;
    let goal = state.data_service.add_funds_to_goal(&id, amount).await?;
    Ok(Json(goal))
}

async fn get_goal_progress(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GoalProgress>> {
    let goals = state.data_service.get_goals()?;
    let goal = goals
        .iter()
        .find(|g| g.id == id)
        .ok_or_else(|| CoreError::not_found("Goal", id.as_str()))?;
    Ok(Json(GoalProgress::of(goal)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{id}", delete(delete_goal))
        .route("/goals/{id}/funds", post(add_funds))
        .route("/goals/{id}/progress", get(get_goal_progress))
}
