//! Calendar output types.
//!
//! A `CalendarDocument` is built once per request from the records that pass
//! a view's skip rules, handed to the ICS renderer and dropped.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{CalendarError, CalendarResult};

pub const PRODUCT_ID: &str = "https://github.com/evertheylen/notion-export-ics";
pub const FORMAT_VERSION: &str = "2.0";
pub const DOCUMENT_SUMMARY: &str = "Imported from Notion, via notion-calendar.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    Date(NaiveDate),
    DateTimeUtc(DateTime<Utc>),
}

/// A finished calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// Copied from the record id.
    pub uid: String,
    /// Copied from the record's creation time (DTSTAMP).
    pub stamp: DateTime<Utc>,
    pub summary: String,
    pub start: EventTime,
    pub end: Option<EventTime>,
    /// Empty when the record has no location.
    pub location: String,
    pub categories: Vec<String>,
    pub description: String,
}

/// Event under construction. Fillers write into it; the assembler finishes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub summary: String,
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
    pub location: String,
    pub categories: Vec<String>,
}

impl EventDraft {
    pub fn finish(
        self,
        uid: String,
        stamp: DateTime<Utc>,
        description: String,
    ) -> CalendarResult<CalendarEvent> {
        let start = self.start.ok_or_else(|| CalendarError::MissingStart(uid.clone()))?;

        Ok(CalendarEvent {
            uid,
            stamp,
            summary: self.summary,
            start,
            end: self.end,
            location: self.location,
            categories: self.categories,
            description,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDocument {
    pub name: String,
    pub summary: String,
    pub product_id: String,
    pub version: String,
    pub events: Vec<CalendarEvent>,
}

impl CalendarDocument {
    /// Empty document carrying the fixed metadata.
    pub fn new(name: impl Into<String>) -> Self {
        CalendarDocument {
            name: name.into(),
            summary: DOCUMENT_SUMMARY.to_string(),
            product_id: PRODUCT_ID.to_string(),
            version: FORMAT_VERSION.to_string(),
            events: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }
}
