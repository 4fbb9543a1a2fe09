//! Server configuration.
//!
//! Read from an optional `notion-calendar.toml` in the working directory,
//! then from environment variables (`EVENTS_DB_ID`, `PORT`, ...), which win.

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeDelta};
use config::{Config, Environment, File};
use serde::Deserialize;

use notion_calendar_core::{RecordQuery, SortDirection, ViewSettings};

const CONFIG_FILE: &str = "notion-calendar";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Notion integration token. Checked per request, not at startup.
    #[serde(default, rename = "sph_notion_integration_secret")]
    pub notion_token: Option<String>,

    #[serde(default, rename = "events_db_id")]
    pub database_id: Option<String>,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_notion_api_url")]
    pub notion_api_url: String,

    #[serde(default = "default_notion_version")]
    pub notion_version: String,

    /// Only records dated after this day are fetched.
    #[serde(default = "default_events_since")]
    pub events_since: NaiveDate,

    #[serde(default = "default_reserved_room_prefix")]
    pub reserved_room_prefix: String,

    #[serde(default = "default_reserved_padding_minutes")]
    pub reserved_padding_minutes: i64,

    /// `json` switches log output to JSON lines.
    #[serde(default)]
    pub log_format: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_notion_api_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_notion_version() -> String {
    "2022-06-28".to_string()
}

fn default_events_since() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

fn default_reserved_room_prefix() -> String {
    ViewSettings::default().reserved_room_prefix
}

fn default_reserved_padding_minutes() -> i64 {
    ViewSettings::default().reserved_padding.num_minutes()
}

impl ServerConfig {
    /// Load from the config file and the process environment.
    pub fn load() -> Result<Self> {
        Self::from_sources(Environment::default())
    }

    /// Load with `vars` standing in for the process environment.
    #[cfg(test)]
    pub fn from_vars(vars: &[(&str, &str)]) -> Result<Self> {
        let vars: std::collections::HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self::from_sources(Environment::default().source(Some(vars)))
    }

    fn from_sources(environment: Environment) -> Result<Self> {
        let config: ServerConfig = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.view_settings()?;
        Ok(config)
    }

    pub fn view_settings(&self) -> Result<ViewSettings> {
        let reserved_padding = TimeDelta::try_minutes(self.reserved_padding_minutes)
            .with_context(|| {
                format!(
                    "RESERVED_PADDING_MINUTES is out of range: {}",
                    self.reserved_padding_minutes
                )
            })?;

        Ok(ViewSettings {
            reserved_room_prefix: self.reserved_room_prefix.clone(),
            reserved_padding,
        })
    }

    /// The query every calendar route runs. Fails when the integration
    /// token or the database id is not set.
    pub fn record_query(&self) -> Result<RecordQuery> {
        if self.notion_token.as_deref().is_none_or(str::is_empty) {
            anyhow::bail!("SPH_NOTION_INTEGRATION_SECRET is not set");
        }
        let database_id = self
            .database_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .context("EVENTS_DB_ID is not set")?;

        Ok(RecordQuery {
            database_id: database_id.to_string(),
            since: self.events_since,
            direction: SortDirection::Descending,
        })
    }

    pub fn json_logs(&self) -> bool {
        self.log_format
            .as_deref()
            .is_some_and(|format| format.eq_ignore_ascii_case("json"))
    }
}
