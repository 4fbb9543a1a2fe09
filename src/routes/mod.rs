pub mod calendars;
pub mod index;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use notion_calendar_core::RecordSource;

use crate::state::AppState;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Convert anyhow errors to HTTP responses
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = format!("{:#}", self.0), "Request failed");

        let body = Json(ErrorResponse {
            error: "Internal Server Error".to_string(),
            message: self.0.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// The complete application, ready to serve.
pub fn app<S>(state: AppState<S>) -> Router
where
    S: RecordSource + Send + Sync + 'static,
    S::Error: Into<anyhow::Error>,
{
    Router::new()
        .merge(index::router::<S>())
        .merge(calendars::router::<S>())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
