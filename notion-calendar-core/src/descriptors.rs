//! Description lines. Each descriptor renders one `\n`-terminated line.
//!
//! Lines are rendered even when the underlying property is empty, so the
//! description of every event in a view has the same shape.

use crate::pipeline::Descriptor;
use crate::record::Record;
use crate::schema;

/// The record's Notion URL.
pub fn page_url(record: &Record) -> String {
    format!("{}\n", record.url)
}

pub fn capacity(record: &Record) -> String {
    let capacity = record
        .number(schema::CAPACITY)
        .map(|n| n.to_string())
        .unwrap_or_default();
    format!("Capacity: {capacity}\n")
}

pub fn event_type(record: &Record) -> String {
    let (name, _) = record.event_type();
    format!("Type: {name}\n")
}

pub fn sign_up_link(record: &Record) -> String {
    format!("Sign up: {}\n", record.url_property(schema::SIGN_UP_LINK))
}

pub fn catering(record: &Record) -> String {
    format!("Catering: {}\n", record.status(schema::CATERING))
}

pub fn tour_guide(record: &Record) -> String {
    format!("Tour guide: {}\n", record.text(schema::TOUR_GUIDE))
}

pub fn applicant_email(record: &Record) -> String {
    format!("Applicant email: {}\n", record.email(schema::APPLICANT_EMAIL))
}

/// `"{label}: {text}"` for any rich text property.
#[derive(Debug, Clone)]
pub struct TextLine {
    label: String,
    property: String,
}

impl TextLine {
    pub fn new(label: impl Into<String>, property: impl Into<String>) -> Self {
        TextLine {
            label: label.into(),
            property: property.into(),
        }
    }

    pub fn organisation() -> Self {
        TextLine::new("Organisation", schema::ORGANISATION)
    }

    pub fn applicant_name() -> Self {
        TextLine::new("Applicant", schema::APPLICANT_NAME)
    }

    pub fn setup_timeframe() -> Self {
        TextLine::new("Set up", schema::SETUP_TIMEFRAME)
    }
}

impl Descriptor for TextLine {
    fn describe(&self, record: &Record) -> String {
        format!("{}: {}\n", self.label, record.text(&self.property))
    }
}
