//! Projection of Notion database records into subscribable calendars.
//!
//! A view is three ordered lists of small functions:
//! - skip rules (`rules`) deciding which records stay out,
//! - fillers (`fillers`) setting one event attribute each,
//! - descriptors (`descriptors`) rendering one description line each.
//!
//! `pipeline::run_view` applies a view to a fetched record set and returns a
//! `CalendarDocument`, which `ics::generate_ics` renders. The crate does no
//! I/O; records come in through the `RecordSource` trait.

pub mod calendar;
pub mod descriptors;
pub mod error;
pub mod fillers;
pub mod ics;
pub mod observer;
pub mod pipeline;
pub mod record;
pub mod rules;
pub mod schema;
pub mod source;
pub mod views;

#[cfg(test)]
mod testing;

pub use calendar::{CalendarDocument, CalendarEvent, EventDraft, EventTime};
pub use error::{CalendarError, CalendarResult};
pub use ics::generate_ics;
pub use observer::{PipelineObserver, TracingObserver};
pub use pipeline::{Descriptor, Filler, SkipRule, ViewConfig, run_view};
pub use record::Record;
pub use source::{RecordQuery, RecordSource, SortDirection};
pub use views::{ViewKind, ViewRegistry, ViewSettings};
