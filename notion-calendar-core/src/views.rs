//! The calendar views served over the events database.

use chrono::TimeDelta;

use crate::descriptors::{self, TextLine};
use crate::fillers::{CategoryFiller, DateFiller, LocationFiller, TitleFiller};
use crate::pipeline::ViewConfig;
use crate::rules::{
    CancelledStatus, ExcludedTags, ExcludedType, LocationPrefix, MissingTitleOrDate,
    StatusAllowlist, TemplateSentinel,
};
use crate::schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Done events, for staff calendars.
    Default,
    /// Room bookings of the reserved room, anonymised and padded.
    Reserved,
    /// Everything the welcome desk needs to know about upcoming events.
    WelcomeDesk,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Default, ViewKind::Reserved, ViewKind::WelcomeDesk];

    pub fn calendar_name(self) -> &'static str {
        match self {
            ViewKind::Default => "Notion events",
            ViewKind::Reserved => "Reserved slots",
            ViewKind::WelcomeDesk => "Welcome desk",
        }
    }
}

/// Knobs of the reserved-slots view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    /// Location tags of the reserved room start with this code.
    pub reserved_room_prefix: String,
    /// How much each reserved slot is widened on both sides.
    pub reserved_padding: TimeDelta,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            reserved_room_prefix: "FHK".to_string(),
            reserved_padding: TimeDelta::hours(1),
        }
    }
}

/// The configured views, built once at startup.
pub struct ViewRegistry {
    default: ViewConfig,
    reserved: ViewConfig,
    welcome_desk: ViewConfig,
}

impl ViewRegistry {
    pub fn new(settings: &ViewSettings) -> Self {
        ViewRegistry {
            default: default_view(),
            reserved: reserved_view(settings),
            welcome_desk: welcome_desk_view(),
        }
    }

    pub fn get(&self, kind: ViewKind) -> &ViewConfig {
        match kind {
            ViewKind::Default => &self.default,
            ViewKind::Reserved => &self.reserved,
            ViewKind::WelcomeDesk => &self.welcome_desk,
        }
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        ViewRegistry::new(&ViewSettings::default())
    }
}

/// Eligibility and fillers shared by the default and welcome-desk views.
fn listed_events(name: &str) -> ViewConfig {
    ViewConfig::new(name)
        .skip(MissingTitleOrDate)
        .skip(TemplateSentinel::default())
        .skip(ExcludedTags::new(schema::TAGS, [schema::TAG_EXCLUDE_FROM_OUTLOOK]))
        .fill(TitleFiller::FromRecord)
        .fill(DateFiller::default())
        .fill(LocationFiller::FromRecord)
        .fill(CategoryFiller)
}

pub fn default_view() -> ViewConfig {
    listed_events(ViewKind::Default.calendar_name())
        .skip(StatusAllowlist::new(schema::STATUS, [schema::STATUS_DONE]))
        .describe(descriptors::page_url)
        .describe(descriptors::capacity)
        .describe(descriptors::event_type)
        .describe(TextLine::organisation())
        .describe(TextLine::applicant_name())
        .describe(TextLine::setup_timeframe())
}

pub fn reserved_view(settings: &ViewSettings) -> ViewConfig {
    ViewConfig::new(ViewKind::Reserved.calendar_name())
        .skip(MissingTitleOrDate)
        .skip(TemplateSentinel::default())
        .skip(LocationPrefix::new(settings.reserved_room_prefix.clone()))
        .skip(ExcludedTags::new(
            schema::TAGS,
            [
                schema::TAG_EXCLUDE_FROM_OUTLOOK,
                schema::TAG_EXCLUDE_FROM_ENTRANCE_SCREEN,
            ],
        ))
        .skip(CancelledStatus::new(schema::STATUS))
        .skip(ExcludedType::new(schema::TYPE_TOUR))
        .fill(TitleFiller::constant("Reserved"))
        .fill(DateFiller::padded(settings.reserved_padding))
        .fill(LocationFiller::constant([settings.reserved_room_prefix.clone()]))
}

/// Unlike the default view this one keeps events that are not done yet, so
/// the desk can prepare for tentative bookings too.
pub fn welcome_desk_view() -> ViewConfig {
    listed_events(ViewKind::WelcomeDesk.calendar_name())
        .describe(descriptors::event_type)
        .describe(descriptors::capacity)
        .describe(TextLine::setup_timeframe())
        .describe(descriptors::tour_guide)
        .describe(descriptors::catering)
        .describe(TextLine::organisation())
        .describe(TextLine::applicant_name())
        .describe(descriptors::applicant_email)
        .describe(descriptors::sign_up_link)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::calendar::EventTime;
    use crate::ics::generate_ics;
    use crate::record::{PropertyValue, Record, RichText};
    use crate::testing::{
        dated_record, record, with_date, with_location, with_status, with_tags, with_text,
        with_title, with_type,
    };

    fn offsite(status: &str) -> Record {
        with_status(
            with_date(
                with_title(record("offsite"), "Team Offsite"),
                "2024-03-01",
                Some("2024-03-02"),
            ),
            status,
        )
    }

    fn run(kind: ViewKind, records: &[Record]) -> crate::CalendarDocument {
        ViewRegistry::default().get(kind).run(records, &()).unwrap()
    }

    #[test]
    fn test_default_view_done_record() {
        let document = run(ViewKind::Default, &[offsite("Done")]);

        assert_eq!(document.events.len(), 1);
        let event = &document.events[0];
        assert_eq!(event.summary, "Team Offsite");
        assert_eq!(
            event.start,
            EventTime::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert_eq!(
            event.end,
            Some(EventTime::Date(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()))
        );
    }

    #[test]
    fn test_tentative_record_only_on_welcome_desk() {
        let records = [offsite("Tentative")];

        assert!(run(ViewKind::Default, &records).events.is_empty());
        assert_eq!(run(ViewKind::WelcomeDesk, &records).events.len(), 1);
    }

    #[test]
    fn test_reserved_view_pads_and_anonymises() {
        let booking = with_location(
            with_date(
                with_title(record("booking"), "Board meeting"),
                "2024-03-01T09:00:00Z",
                None,
            ),
            &["FHK-Room1"],
        );

        let document = run(ViewKind::Reserved, &[booking]);

        assert_eq!(document.events.len(), 1);
        let event = &document.events[0];
        assert_eq!(event.summary, "Reserved");
        assert_eq!(event.location, "FHK");
        assert_eq!(
            event.start,
            EventTime::DateTimeUtc(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap())
        );
        assert_eq!(event.end, None);
        assert_eq!(event.description, "");
    }

    #[test]
    fn test_reserved_view_exclusions() {
        let booking = |id: &str| {
            with_location(
                dated_record(id, "Booking", "2024-03-01T09:00:00Z"),
                &["FHK-Room1"],
            )
        };

        let records = vec![
            booking("kept"),
            with_status(booking("cancelled"), "Cancelled"),
            with_status(booking("declined"), "Declined by venue"),
            with_type(booking("tour"), schema::TYPE_TOUR, "green"),
            with_tags(booking("screen"), &[schema::TAG_EXCLUDE_FROM_ENTRANCE_SCREEN]),
            with_tags(booking("outlook"), &[schema::TAG_EXCLUDE_FROM_OUTLOOK]),
            with_location(dated_record("elsewhere", "Booking", "2024-03-01"), &["Foyer"]),
            dated_record("nowhere", "Booking", "2024-03-01"),
        ];

        let document = run(ViewKind::Reserved, &records);
        let uids: Vec<&str> = document.events.iter().map(|e| e.uid.as_str()).collect();

        assert_eq!(uids, vec!["kept"]);
    }

    #[test]
    fn test_ineligible_records_excluded_from_every_view() {
        let untitled = with_location(
            with_status(dated_record("untitled", "", "2024-03-01"), "Done"),
            &["FHK-Room1"],
        );
        let undated = with_location(
            with_status(with_title(record("undated"), "Talk"), "Done"),
            &["FHK-Room1"],
        );
        let template = with_location(
            with_status(
                dated_record("template", schema::TEMPLATE_TITLE, "2024-03-01"),
                "Done",
            ),
            &["FHK-Room1"],
        );

        for kind in ViewKind::ALL {
            let document = run(kind, &[untitled.clone(), undated.clone(), template.clone()]);
            assert!(document.events.is_empty(), "{kind:?} kept an ineligible record");
        }
    }

    #[test]
    fn test_default_description_lines() {
        let record = with_text(
            with_type(offsite("Done"), "Workshop", "blue"),
            schema::ORGANISATION,
            "ACME",
        )
        .with_property(schema::CAPACITY, PropertyValue::Number { number: Some(12.0) });

        let document = run(ViewKind::Default, &[record]);
        let event = &document.events[0];

        assert_eq!(
            event.description,
            "https://www.notion.so/offsite\n\
             Capacity: 12\n\
             Type: Workshop\n\
             Organisation: ACME\n\
             Applicant: \n\
             Set up: \n"
        );
        assert_eq!(event.categories, vec!["Blue category", "Blaue Kategorie"]);
    }

    #[test]
    fn test_welcome_desk_description_order() {
        let record = with_text(offsite("Done"), schema::TOUR_GUIDE, "Kim");

        let document = run(ViewKind::WelcomeDesk, &[record]);
        let lines: Vec<&str> = document.events[0].description.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Type: ",
                "Capacity: ",
                "Set up: ",
                "Tour guide: Kim",
                "Catering: ",
                "Organisation: ",
                "Applicant: ",
                "Applicant email: ",
                "Sign up: ",
            ]
        );
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let records = vec![
            with_type(offsite("Done"), "Workshop", "red"),
            with_location(
                with_status(dated_record("b", "Second", "2024-02-01T10:00:00Z"), "Done"),
                &["FHK-Room1", "Foyer"],
            ),
        ];

        for kind in ViewKind::ALL {
            let first = generate_ics(&run(kind, &records));
            let second = generate_ics(&run(kind, &records));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_outlook_exclusion_applies_to_listed_views() {
        let hidden = with_tags(offsite("Done"), &[schema::TAG_EXCLUDE_FROM_OUTLOOK]);
        let shown = with_tags(
            with_date(with_title(record("shown"), "Open Day"), "2024-04-01", None),
            &["Newsletter"],
        );
        let records = [with_status(shown, "Done"), hidden];

        for kind in [ViewKind::Default, ViewKind::WelcomeDesk] {
            let document = run(kind, &records);
            let uids: Vec<&str> = document.events.iter().map(|e| e.uid.as_str()).collect();

            assert_eq!(uids, vec!["shown"], "{kind:?}");
        }
    }

    #[test]
    fn test_padding_out_of_date_range_is_an_error() {
        let settings = ViewSettings {
            reserved_padding: TimeDelta::minutes(200_000_000_000),
            ..ViewSettings::default()
        };
        let booking = with_location(
            dated_record("booking", "Board meeting", "2024-03-01T09:00:00Z"),
            &["FHK-Room1"],
        );

        let result = ViewRegistry::new(&settings)
            .get(ViewKind::Reserved)
            .run(&[booking], &());

        assert!(matches!(result, Err(crate::CalendarError::DateOutOfRange(..))));
    }

    #[test]
    fn test_custom_reserved_settings() {
        let settings = ViewSettings {
            reserved_room_prefix: "LAB".to_string(),
            reserved_padding: TimeDelta::minutes(30),
        };
        let booking = with_location(
            dated_record("lab", "Experiment", "2024-03-01T09:00:00Z"),
            &["LAB-2"],
        );

        let document = ViewRegistry::new(&settings)
            .get(ViewKind::Reserved)
            .run(&[booking], &())
            .unwrap();

        assert_eq!(document.events[0].location, "LAB");
        assert_eq!(
            document.events[0].start,
            EventTime::DateTimeUtc(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_title_runs_are_joined_in_views() {
        let record = with_status(
            dated_record("runs", "ignored", "2024-03-01").with_property(
                "Name",
                PropertyValue::Title {
                    title: vec![RichText::plain("Open "), RichText::plain("Day")],
                },
            ),
            "Done",
        );

        let document = run(ViewKind::Default, &[record]);

        assert_eq!(document.events[0].summary, "Open Day");
    }
}
