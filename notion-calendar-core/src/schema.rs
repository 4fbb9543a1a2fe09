//! Property names and option values of the events database.

pub const DATE: &str = "Date";
pub const LOCATION: &str = "Location";
pub const TAGS: &str = "Tags";
pub const STATUS: &str = "Preparation status";
pub const EVENT_TYPE: &str = "Event type";
pub const CAPACITY: &str = "Number of participants";
pub const ORGANISATION: &str = "Applicant organisation";
pub const APPLICANT_NAME: &str = "Applicant name";
pub const APPLICANT_EMAIL: &str = "Applicant email";
pub const SETUP_TIMEFRAME: &str = "Set up Timeframe";
pub const SIGN_UP_LINK: &str = "Sign up Link";
pub const CATERING: &str = "Catering";
pub const TOUR_GUIDE: &str = "Tour guide";

/// Title of the page that serves as the database's event template.
pub const TEMPLATE_TITLE: &str = "Event-Template";

pub const TAG_EXCLUDE_FROM_OUTLOOK: &str = "Exclude from Outlook";
pub const TAG_EXCLUDE_FROM_ENTRANCE_SCREEN: &str = "Exclude from entrance screen";

pub const STATUS_DONE: &str = "Done";
pub const TYPE_TOUR: &str = "Tour";
