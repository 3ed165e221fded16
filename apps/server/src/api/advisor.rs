use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{AdvisorStatus, ChatRequest, ChatResponse, StrategyResponse},
};
use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use financegpt_ai::{AdviceContext, ExpenseAnalysis};
use financegpt_core::validation::{
    validate_analysis_request, validate_api_key, AnalysisRequest, ApiKeyForm, FieldErrors,
};

/// Answers a free-form question. Falls back to canned answers when the
/// provider is unavailable, so this never fails once the message is valid.
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let message = request.message.trim();
    if message.is_empty() {
        let mut errors = FieldErrors::new();
        errors.add("message", "Please enter a question");
        return Err(errors.into());
    }

    let context = if request.include_context {
        Some(AdviceContext::from_data(&state.data_service.get_data()?))
    } else {
        None
    };
    let answer = state
        .advisor
        .generate_financial_advice(message, context.as_ref())
        .await;
    Ok(Json(ChatResponse { answer }))
}

/// Analyzes the posted expenses, or the stored ones when none are posted.
async fn analyze_expenses(
    State(state): State<Arc<AppState>>,
    body: Option<Json<AnalysisRequest>>,
) -> ApiResult<Json<ExpenseAnalysis>> {
    let mut request = body.map(|Json(inner)| inner).unwrap_or_default();
    if request.expenses.is_empty() {
        request.expenses = state.data_service.get_expenses()?;
    }
    validate_analysis_request(&request)?;

    let analysis = state.advisor.analyze_expenses(&request.expenses).await;
    Ok(Json(analysis))
}

async fn investment_strategy(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StrategyResponse>> {
    let goals = state.data_service.get_goals()?;
    let strategy = state.advisor.generate_investment_strategy(&goals).await;
    Ok(Json(StrategyResponse { strategy }))
}

async fn get_status(State(state): State<Arc<AppState>>) -> Json<AdvisorStatus> {
    Json(AdvisorStatus {
        api_key: state.advisor.api_key_status(),
    })
}

/// Replaces the configured key for the lifetime of the process.
async fn set_api_key(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ApiKeyForm>,
) -> ApiResult<Json<AdvisorStatus>> {
    let key = validate_api_key(&form)?;
    state.credential.set(Some(key));
    state.advisor.reset_key_status();
    tracing::info!("Gemini API key replaced");
    Ok(get_status(State(state)).await)
}

/// Drops a key set through the API, restoring the configured one.
async fn clear_api_key(State(state): State<Arc<AppState>>) -> Json<AdvisorStatus> {
    state.credential.set(None);
    state.advisor.reset_key_status();
    get_status(State(state)).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/advisor/chat", post(chat))
        .route("/advisor/expenses", post(analyze_expenses))
        .route("/advisor/strategy", post(investment_strategy))
        .route("/advisor/status", get(get_status))
        .route("/advisor/key", put(set_api_key).delete(clear_api_key))
}
