pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::fanout::handlers::handle_complete;
use crate::interview::handlers::handle_chat;
use crate::state::AppState;

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/chat", post(handle_chat).fallback(method_not_allowed))
        .route(
            "/api/complete",
            post(handle_complete).fallback(method_not_allowed),
        )
        .with_state(state)
}
