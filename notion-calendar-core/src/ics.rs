//! ICS rendering of calendar documents.

use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::calendar::{CalendarDocument, CalendarEvent, EventTime};

/// Render a document as iCalendar text (RFC 5545).
///
/// Nothing in the output depends on the wall clock: DTSTAMP is the record's
/// creation time, so the same document always renders to the same bytes.
pub fn generate_ics(document: &CalendarDocument) -> String {
    let mut cal = Calendar::new();
    cal.name(&document.name);
    cal.description(&document.summary);

    for event in &document.events {
        cal.push(to_ics_event(event));
    }

    let cal = cal.done();
    rewrite_header(&cal.to_string(), document)
}

fn to_ics_event(event: &CalendarEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.add_property("DTSTAMP", event.stamp.format("%Y%m%dT%H%M%SZ").to_string());
    ics_event.summary(&event.summary);

    add_datetime_property(&mut ics_event, "DTSTART", &event.start);
    if let Some(ref end) = event.end {
        add_datetime_property(&mut ics_event, "DTEND", end);
    }

    if !event.location.is_empty() {
        ics_event.location(&event.location);
    }

    for category in &event.categories {
        ics_event.append_multi_property(Property::new("CATEGORIES", category));
    }

    if !event.description.is_empty() {
        ics_event.description(&event.description);
    }

    ics_event.done()
}

/// The icalendar crate writes its own PRODID and VERSION; replace them with
/// the document's and drop CALSCALE:GREGORIAN (it's the default).
fn rewrite_header(ics: &str, document: &CalendarDocument) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{}\r\n", document.product_id));
            continue;
        }

        if line.starts_with("VERSION:") {
            result.push_str(&format!("VERSION:{}\r\n", document.version));
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Add a date or UTC datetime property with proper formatting.
fn add_datetime_property(ics_event: &mut icalendar::Event, name: &str, time: &EventTime) {
    match time {
        EventTime::Date(d) => {
            let mut prop = Property::new(name, d.format("%Y%m%d").to_string());
            prop.append_parameter(ValueType::Date);
            ics_event.append_property(prop);
        }
        EventTime::DateTimeUtc(dt) => {
            ics_event.add_property(name, dt.format("%Y%m%dT%H%M%SZ").to_string());
        }
    }
}
