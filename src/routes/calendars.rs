//! Calendar feed endpoints

use anyhow::Context;
use axum::{
    Router,
    body::Body,
    extract::State,
    http::header,
    response::Response,
    routing::get,
};
use chrono::{Local, Utc};

use notion_calendar_core::{
    CalendarDocument, RecordSource, TracingObserver, ViewKind, generate_ics,
};

use crate::fallback::failure_calendar;
use crate::routes::AppError;
use crate::state::AppState;

const PARAMETERS_ERROR: &str = "Something went wrong with the given parameters";

pub fn router<S>() -> Router<AppState<S>>
where
    S: RecordSource + Send + Sync + 'static,
    S::Error: Into<anyhow::Error>,
{
    Router::new()
        .route("/ics", get(default_calendar::<S>))
        .route("/ics_reserved", get(reserved_calendar::<S>))
        .route("/ics_welcomedesk", get(welcome_desk_calendar::<S>))
}

/// GET /ics - Done events with details
async fn default_calendar<S>(State(state): State<AppState<S>>) -> Result<Response, AppError>
where
    S: RecordSource + Send + Sync + 'static,
    S::Error: Into<anyhow::Error>,
{
    calendar_response(&state, ViewKind::Default).await
}

/// GET /ics_reserved - Anonymised bookings of the reserved room
async fn reserved_calendar<S>(State(state): State<AppState<S>>) -> Result<Response, AppError>
where
    S: RecordSource + Send + Sync + 'static,
    S::Error: Into<anyhow::Error>,
{
    calendar_response(&state, ViewKind::Reserved).await
}

/// GET /ics_welcomedesk - Events with everything the welcome desk needs
async fn welcome_desk_calendar<S>(State(state): State<AppState<S>>) -> Result<Response, AppError>
where
    S: RecordSource + Send + Sync + 'static,
    S::Error: Into<anyhow::Error>,
{
    calendar_response(&state, ViewKind::WelcomeDesk).await
}

/// Render a view. Generation failures never reach the client as an HTTP
/// error; they are served as the failure calendar instead.
async fn calendar_response<S>(state: &AppState<S>, kind: ViewKind) -> Result<Response, AppError>
where
    S: RecordSource + Send + Sync + 'static,
    S::Error: Into<anyhow::Error>,
{
    let document = match build_calendar(state, kind).await {
        Ok(document) => document,
        Err(error) => {
            let error = format!("{error:#}");
            tracing::error!(view = ?kind, error = %error, "Calendar generation failed");
            failure_calendar(
                kind.calendar_name(),
                &error,
                Local::now().date_naive(),
                Utc::now(),
            )
        }
    };

    let response = Response::builder()
        .header(header::CONTENT_TYPE, "text/calendar;charset=utf-8")
        .header(header::CONTENT_DISPOSITION, "attachment;filename=calendar.ics")
        .body(Body::from(generate_ics(&document)))?;

    Ok(response)
}

async fn build_calendar<S>(state: &AppState<S>, kind: ViewKind) -> anyhow::Result<CalendarDocument>
where
    S: RecordSource + Send + Sync + 'static,
    S::Error: Into<anyhow::Error>,
{
    let query = state.config.record_query().context(PARAMETERS_ERROR)?;

    let records = state
        .source
        .fetch_records(&query)
        .await
        .map_err(Into::<anyhow::Error>::into)
        .context("Failed to fetch records")?;

    let document = state.views.get(kind).run(&records, &TracingObserver)?;
    tracing::info!(
        view = ?kind,
        records = records.len(),
        events = document.events.len(),
        "Calendar generated"
    );

    Ok(document)
}
