//! Fillers. Each one sets a single attribute of the event draft.

use chrono::TimeDelta;

use crate::calendar::EventDraft;
use crate::error::CalendarResult;
use crate::pipeline::Filler;
use crate::record::{Record, parse_date_string_in};

/// Sets the summary from the record title, or to a fixed text.
#[derive(Debug, Clone, Default)]
pub enum TitleFiller {
    #[default]
    FromRecord,
    Constant(String),
}

impl TitleFiller {
    pub fn constant(title: impl Into<String>) -> Self {
        TitleFiller::Constant(title.into())
    }
}

impl Filler for TitleFiller {
    fn fill(&self, record: &Record, draft: &mut EventDraft) -> CalendarResult<()> {
        draft.summary = match self {
            TitleFiller::FromRecord => record.title(),
            TitleFiller::Constant(title) => title.clone(),
        };
        Ok(())
    }
}

/// Sets start and end from the record's date range.
///
/// Offsets only move timestamps; all-day dates are kept as they are. The end
/// is only set when the range declares one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFiller {
    pub start_offset: TimeDelta,
    pub end_offset: TimeDelta,
}

impl DateFiller {
    /// Widen the event by `padding` on both sides.
    pub fn padded(padding: TimeDelta) -> Self {
        DateFiller {
            start_offset: -padding,
            end_offset: padding,
        }
    }
}

impl Filler for DateFiller {
    fn fill(&self, record: &Record, draft: &mut EventDraft) -> CalendarResult<()> {
        let Some(range) = record.date() else {
            return Ok(());
        };
        let time_zone = range.time_zone.as_deref();

        draft.start = Some(parse_date_string_in(
            &range.start,
            time_zone,
            self.start_offset,
        )?);
        draft.end = range
            .end
            .as_deref()
            .map(|end| parse_date_string_in(end, time_zone, self.end_offset))
            .transpose()?;

        Ok(())
    }
}

/// Sets the location from the record's location tags, or to fixed names.
/// Names are joined with `", "`.
#[derive(Debug, Clone, Default)]
pub enum LocationFiller {
    #[default]
    FromRecord,
    Constant(Vec<String>),
}

impl LocationFiller {
    pub fn constant<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LocationFiller::Constant(names.into_iter().map(Into::into).collect())
    }
}

impl Filler for LocationFiller {
    fn fill(&self, record: &Record, draft: &mut EventDraft) -> CalendarResult<()> {
        let names = match self {
            LocationFiller::FromRecord => record.location(),
            LocationFiller::Constant(names) => Some(names.clone()),
        };

        if let Some(names) = names {
            draft.location = names.join(", ");
        }
        Ok(())
    }
}

/// Outlook category names for Notion's option colors, in English and German.
const CATEGORY_NAMES: [(&str, &str, &str); 6] = [
    ("Blue", "Blue category", "Blaue Kategorie"),
    ("Yellow", "Yellow category", "Gelbe Kategorie"),
    ("Green", "Green category", "Grüne Kategorie"),
    ("Orange", "Orange category", "Orange Kategorie"),
    ("Red", "Red category", "Rote Kategorie"),
    ("Purple", "Purple category", "Lila Kategorie"),
];

/// Sets the categories from the color of the record's event type.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFiller;

impl CategoryFiller {
    /// Both category names for a color, if it is one of the six known ones.
    pub fn categories_for(color: &str) -> Option<[&'static str; 2]> {
        let color = capitalize(color);
        CATEGORY_NAMES
            .iter()
            .find(|(name, _, _)| *name == color)
            .map(|(_, english, german)| [*english, *german])
    }
}

impl Filler for CategoryFiller {
    fn fill(&self, record: &Record, draft: &mut EventDraft) -> CalendarResult<()> {
        let (_, color) = record.event_type();
        if let Some(names) = Self::categories_for(&color) {
            draft.categories = names.iter().map(|name| name.to_string()).collect();
        }
        Ok(())
    }
}

/// `"bLUE"` -> `"Blue"`.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::calendar::EventTime;
    use crate::error::CalendarError;
    use crate::record::{DateRange, PropertyValue};
    use crate::schema;
    use crate::testing::{dated_record, record, with_date, with_location, with_title, with_type};

    fn fill(filler: &dyn Filler, record: &Record) -> EventDraft {
        let mut draft = EventDraft::default();
        filler.fill(record, &mut draft).unwrap();
        draft
    }

    #[test]
    fn test_title_from_record_and_constant() {
        let record = dated_record("a", "Team Offsite", "2024-03-01");

        assert_eq!(fill(&TitleFiller::default(), &record).summary, "Team Offsite");
        assert_eq!(fill(&TitleFiller::constant("Reserved"), &record).summary, "Reserved");
    }

    #[test]
    fn test_date_without_end_leaves_end_unset() {
        let draft = fill(&DateFiller::default(), &dated_record("a", "A", "2024-03-01"));

        assert_eq!(
            draft.start,
            Some(EventTime::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))
        );
        assert_eq!(draft.end, None);
    }

    #[test]
    fn test_date_range_with_end() {
        let record = with_date(record("a"), "2024-03-01", Some("2024-03-02"));
        let draft = fill(&DateFiller::default(), &record);

        assert_eq!(
            draft.end,
            Some(EventTime::Date(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()))
        );
    }

    #[test]
    fn test_padded_dates_shift_both_ends() {
        let record = with_date(
            record("a"),
            "2024-03-01T09:00:00Z",
            Some("2024-03-01T10:00:00Z"),
        );
        let draft = fill(&DateFiller::padded(TimeDelta::hours(1)), &record);

        assert_eq!(
            draft.start,
            Some(EventTime::DateTimeUtc(
                Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
            ))
        );
        assert_eq!(
            draft.end,
            Some(EventTime::DateTimeUtc(
                Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 0).unwrap()
            ))
        );
    }

    #[test]
    fn test_date_uses_range_time_zone() {
        let record = record("a").with_property(
            schema::DATE,
            PropertyValue::Date {
                date: Some(DateRange {
                    start: "2024-01-15T09:00:00".to_string(),
                    end: None,
                    time_zone: Some("Europe/Berlin".to_string()),
                }),
            },
        );
        let draft = fill(&DateFiller::default(), &record);

        assert_eq!(
            draft.start,
            Some(EventTime::DateTimeUtc(
                Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
            ))
        );
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let record = with_date(record("a"), "2024-02-30", None);
        let mut draft = EventDraft::default();

        let result = DateFiller::default().fill(&record, &mut draft);

        assert!(matches!(result, Err(CalendarError::InvalidDate(_))));
    }

    #[test]
    fn test_location_joins_names() {
        let record = with_location(
            dated_record("a", "A", "2024-03-01"),
            &["FHK-Room1", "Foyer"],
        );

        assert_eq!(fill(&LocationFiller::default(), &record).location, "FHK-Room1, Foyer");
        assert_eq!(fill(&LocationFiller::constant(["FHK"]), &record).location, "FHK");
    }

    #[test]
    fn test_location_absent_stays_empty() {
        let record = with_title(record("a"), "A");

        assert_eq!(fill(&LocationFiller::default(), &record).location, "");
    }

    #[test]
    fn test_category_known_color_any_case() {
        for color in ["blue", "Blue", "BLUE"] {
            let record = with_type(dated_record("a", "A", "2024-03-01"), "Workshop", color);
            let categories = fill(&CategoryFiller, &record).categories;

            assert_eq!(categories.len(), 2);
            assert!(categories.contains(&"Blue category".to_string()));
        }
    }

    #[test]
    fn test_category_unknown_color_sets_nothing() {
        let record = with_type(dated_record("a", "A", "2024-03-01"), "Workshop", "teal");
        assert!(fill(&CategoryFiller, &record).categories.is_empty());

        let untyped = dated_record("b", "B", "2024-03-01");
        assert!(fill(&CategoryFiller, &untyped).categories.is_empty());
    }
}
