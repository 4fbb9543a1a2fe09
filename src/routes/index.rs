//! Landing page

use axum::{Router, response::Html, routing::get};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub fn router<S>() -> Router<AppState<S>>
where
    S: Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

/// GET / - Subscription instructions
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
