use std::sync::Arc;

use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

pub mod advisor;
pub mod calculator;
pub mod dashboard;
pub mod expenses;
pub mod goals;
pub mod health;
pub mod investments;
pub mod portfolio;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let origins = if config.cors_allow.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let allowed = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        AllowOrigin::list(allowed)
    };
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .merge(health::router())
        .merge(dashboard::router())
        .merge(portfolio::router())
        .merge(investments::router())
        .merge(expenses::router())
        .merge(goals::router())
        .merge(calculator::router())
        .merge(advisor::router());

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
