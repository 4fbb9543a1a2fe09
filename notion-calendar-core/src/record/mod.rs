//! Source records and the accessors the pipeline reads them through.
//!
//! A `Record` is one page of the events database. Its properties are a
//! weakly-typed bag; the accessors below narrow a property to the shape they
//! expect and fall back to an empty value (or `None`) when the property is
//! missing, null or of another shape. They never fail.

mod date;
mod property;

pub use date::{parse_date_string, parse_date_string_in};
pub use property::{DateRange, PropertyValue, RichText, SelectOption};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::schema;

/// One page of the source database.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawRecord")]
pub struct Record {
    pub id: String,
    pub created_time: DateTime<Utc>,
    pub url: String,
    pub properties: BTreeMap<String, PropertyValue>,
}

/// Page as it arrives over the wire, before each property is narrowed.
#[derive(Deserialize)]
struct RawRecord {
    id: String,
    created_time: DateTime<Utc>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    properties: BTreeMap<String, serde_json::Value>,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        let properties = raw
            .properties
            .into_iter()
            .filter_map(|(name, value)| {
                if value.is_null() {
                    return None;
                }
                match serde_json::from_value::<PropertyValue>(value) {
                    Ok(property) => Some((name, property)),
                    Err(e) => {
                        tracing::debug!(
                            record = %raw.id,
                            property = %name,
                            error = %e,
                            "Dropping malformed property"
                        );
                        None
                    }
                }
            })
            .collect();

        Record {
            id: raw.id,
            created_time: raw.created_time,
            url: raw.url,
            properties,
        }
    }
}

impl Record {
    pub fn new(id: impl Into<String>, created_time: DateTime<Utc>, url: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            created_time,
            url: url.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property setter, mostly for fixtures.
    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn from_json(value: serde_json::Value) -> crate::CalendarResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Plain text of the title property, or an empty string.
    ///
    /// Notion databases have exactly one title property, so it is located by
    /// type rather than by name.
    pub fn title(&self) -> String {
        self.properties
            .values()
            .find_map(|value| match value {
                PropertyValue::Title { title } => Some(property::plain_text(title)),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// The event's date range, if the record has one.
    pub fn date(&self) -> Option<&DateRange> {
        match self.property(schema::DATE)? {
            PropertyValue::Date { date } => date.as_ref(),
            _ => None,
        }
    }

    /// Names of the location tags, or `None` if the record has no location property.
    pub fn location(&self) -> Option<Vec<String>> {
        self.tags(schema::LOCATION)
    }

    /// Names of the options of any multi-select property.
    pub fn tags(&self, name: &str) -> Option<Vec<String>> {
        match self.property(name)? {
            PropertyValue::MultiSelect { multi_select } => Some(
                multi_select
                    .iter()
                    .map(|option| option.name.clone())
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Name of the selected status, or an empty string.
    pub fn status(&self, name: &str) -> String {
        match self.property(name) {
            Some(PropertyValue::Status {
                status: Some(option),
            }) => option.name.clone(),
            _ => String::new(),
        }
    }

    /// Name of the selected option of a select property, or an empty string.
    pub fn select(&self, name: &str) -> String {
        self.select_option(name)
            .map(|option| option.name.clone())
            .unwrap_or_default()
    }

    fn select_option(&self, name: &str) -> Option<&SelectOption> {
        match self.property(name)? {
            PropertyValue::Select { select } => select.as_ref(),
            _ => None,
        }
    }

    /// Event type as `(name, color)`; both empty when unset.
    pub fn event_type(&self) -> (String, String) {
        self.select_option(schema::EVENT_TYPE)
            .map(|option| (option.name.clone(), option.color.clone()))
            .unwrap_or_default()
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.property(name)? {
            PropertyValue::Number { number } => *number,
            _ => None,
        }
    }

    /// Plain text of a rich text property, or an empty string.
    pub fn text(&self, name: &str) -> String {
        match self.property(name) {
            Some(PropertyValue::RichText { rich_text }) => property::plain_text(rich_text),
            _ => String::new(),
        }
    }

    pub fn email(&self, name: &str) -> String {
        match self.property(name) {
            Some(PropertyValue::Email { email: Some(email) }) => email.clone(),
            _ => String::new(),
        }
    }

    pub fn url_property(&self, name: &str) -> String {
        match self.property(name) {
            Some(PropertyValue::Url { url: Some(url) }) => url.clone(),
            _ => String::new(),
        }
    }
}
