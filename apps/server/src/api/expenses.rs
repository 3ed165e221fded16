use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use financegpt_core::{
    utils::today_utc,
    validation::{validate_expense, ExpenseForm},
    Expense,
};

/// Newest first.
async fn get_expenses(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state.data_service.get_expenses()?;
    Ok(Json(expenses))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ExpenseForm>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let new_expense = validate_expense(&form)?;
    let expense = state.data_service.add_expense(new_expense).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// Edits replace the entry; the response carries the new id.
async fn replace_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(form): Json<ExpenseForm>,
) -> ApiResult<Json<Expense>> {
    let replacement = validate_expense(&form)?;
    let expense = state.data_service.replace_expense(&id, replacement).await?;
    Ok(Json(expense))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.data_service.remove_expense(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Simulated bank-statement import.
async fn import_expenses(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Expense>>> {
    let imported = state.data_service.import_expenses(today_utc()).await?;
    Ok(Json(imported))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(get_expenses).post(create_expense))
        .route("/expenses/import", post(import_expenses))
        .route("/expenses/{id}", put(replace_expense).delete(delete_expense))
}
