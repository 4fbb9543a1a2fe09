//! The calendar served when a feed cannot be generated.
//!
//! Subscribers only look at their calendar app, so the error is put where
//! they will see it: one all-day event per day for the coming week.

use chrono::{DateTime, Days, NaiveDate, Utc};

use notion_calendar_core::{CalendarDocument, CalendarEvent, EventTime};

pub const FAILURE_SUMMARY: &str = "Imported from Notion, via notion-calendar, but failed.";

const FAILURE_DAYS: u64 = 7;

pub fn failure_calendar(
    name: &str,
    error: &str,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> CalendarDocument {
    let mut document = CalendarDocument::new(name).with_summary(FAILURE_SUMMARY);

    for offset in 0..FAILURE_DAYS {
        let Some(day) = today.checked_add_days(Days::new(offset)) else {
            break;
        };

        document.push(CalendarEvent {
            uid: format!("notion-calendar-failure-{day}"),
            stamp: now,
            summary: error.to_string(),
            start: EventTime::Date(day),
            end: None,
            location: String::new(),
            categories: Vec::new(),
            description: String::new(),
        });
    }

    document
}
