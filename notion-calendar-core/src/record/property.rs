//! Typed property values of a Notion page.
//!
//! Notion sends every property as an object tagged with `"type"`, carrying
//! its payload under a key of the same name. Only the shapes the calendar
//! views read are modelled; everything else decodes to `Unsupported`.

use serde::Deserialize;

/// One property of a record, narrowed to the shapes the pipeline understands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Date {
        date: Option<DateRange>,
    },
    Status {
        status: Option<SelectOption>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    Number {
        number: Option<f64>,
    },
    Email {
        email: Option<String>,
    },
    Url {
        url: Option<String>,
    },
    /// Relations, people, formulas, rollups and anything newer.
    #[serde(other)]
    Unsupported,
}

/// A run of rich text. Only the plain-text rendering is kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        RichText {
            plain_text: text.into(),
        }
    }
}

/// Option of a select, status or multi-select property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        SelectOption {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Raw value of a date property.
///
/// `start` and `end` are kept as Notion sent them, either `YYYY-MM-DD` or a
/// full ISO-8601 timestamp. Parsing happens in the date filler so that each
/// view can apply its own offsets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DateRange {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: Option<&str>) -> Self {
        DateRange {
            start: start.into(),
            end: end.map(str::to_string),
            time_zone: None,
        }
    }
}

/// Concatenate the plain-text runs of a rich text list.
pub(crate) fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}
