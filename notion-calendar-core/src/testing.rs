//! Record fixtures shared by the unit tests.

use chrono::{TimeZone, Utc};

use crate::record::{DateRange, PropertyValue, Record, RichText, SelectOption};
use crate::schema;

pub fn record(id: &str) -> Record {
    Record::new(
        id,
        Utc.with_ymd_and_hms(2023, 11, 2, 8, 15, 0).unwrap(),
        format!("https://www.notion.so/{id}"),
    )
}

pub fn dated_record(id: &str, title: &str, start: &str) -> Record {
    with_date(with_title(record(id), title), start, None)
}

pub fn with_title(record: Record, title: &str) -> Record {
    record.with_property(
        "Name",
        PropertyValue::Title {
            title: vec![RichText::plain(title)],
        },
    )
}

pub fn with_date(record: Record, start: &str, end: Option<&str>) -> Record {
    record.with_property(
        schema::DATE,
        PropertyValue::Date {
            date: Some(DateRange::new(start, end)),
        },
    )
}

fn multi_select(names: &[&str]) -> PropertyValue {
    PropertyValue::MultiSelect {
        multi_select: names
            .iter()
            .map(|name| SelectOption::new(*name, "default"))
            .collect(),
    }
}

pub fn with_tags(record: Record, tags: &[&str]) -> Record {
    record.with_property(schema::TAGS, multi_select(tags))
}

pub fn with_location(record: Record, locations: &[&str]) -> Record {
    record.with_property(schema::LOCATION, multi_select(locations))
}

pub fn with_status(record: Record, status: &str) -> Record {
    record.with_property(
        schema::STATUS,
        PropertyValue::Status {
            status: Some(SelectOption::new(status, "default")),
        },
    )
}

pub fn with_type(record: Record, name: &str, color: &str) -> Record {
    record.with_property(
        schema::EVENT_TYPE,
        PropertyValue::Select {
            select: Some(SelectOption::new(name, color)),
        },
    )
}

pub fn with_text(record: Record, property: &str, text: &str) -> Record {
    record.with_property(
        property,
        PropertyValue::RichText {
            rich_text: vec![RichText::plain(text)],
        },
    )
}
