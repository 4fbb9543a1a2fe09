//! Notion database client.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Value, json};

use notion_calendar_core::schema;
use notion_calendar_core::{Record, RecordQuery, RecordSource};

use crate::config::ServerConfig;

pub struct NotionClient {
    http: reqwest::Client,
    api_url: String,
    version: String,
    token: Option<String>,
}

/// One page of a database query.
#[derive(Deserialize)]
struct QueryPage {
    results: Vec<Record>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl NotionClient {
    pub fn new(config: &ServerConfig) -> Self {
        NotionClient {
            http: reqwest::Client::new(),
            api_url: config.notion_api_url.trim_end_matches('/').to_string(),
            version: config.notion_version.clone(),
            token: config.notion_token.clone(),
        }
    }

    fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .filter(|token| !token.is_empty())
            .context("SPH_NOTION_INTEGRATION_SECRET is not set")
    }
}

/// Filter and sort are repeated on every page; Notion does not remember them
/// behind a cursor.
fn query_body(query: &RecordQuery, cursor: Option<&str>) -> Value {
    let mut body = json!({
        "filter": {
            "property": schema::DATE,
            "date": { "after": query.since.format("%Y-%m-%d").to_string() },
        },
        "sorts": [{
            "property": schema::DATE,
            "direction": query.direction.as_str(),
        }],
    });

    if let Some(cursor) = cursor {
        body["start_cursor"] = json!(cursor);
    }

    body
}

impl RecordSource for NotionClient {
    type Error = anyhow::Error;

    async fn fetch_records(&self, query: &RecordQuery) -> Result<Vec<Record>> {
        let token = self.token()?;
        let url = format!("{}/databases/{}/query", self.api_url, query.database_id);

        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let response = self
                .http
                .post(&url)
                .bearer_auth(token)
                .header("Notion-Version", &self.version)
                .json(&query_body(query, cursor.as_deref()))
                .send()
                .await
                .context("Failed to query the Notion database")?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                anyhow::bail!("Notion returned {}: {}", status, error_text);
            }

            let page: QueryPage = response
                .json()
                .await
                .context("Failed to parse the Notion query response")?;

            tracing::debug!(
                database = %query.database_id,
                count = page.results.len(),
                has_more = page.has_more,
                "Fetched Notion page"
            );
            records.extend(page.results);

            match page.next_cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(records)
    }
}
