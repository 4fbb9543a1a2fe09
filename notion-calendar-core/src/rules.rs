//! Skip rules. Each one answers "should this record stay out of the view?"

use std::collections::BTreeSet;

use crate::pipeline::SkipRule;
use crate::record::Record;
use crate::schema;

/// Skips records without a title or without a date.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingTitleOrDate;

impl SkipRule for MissingTitleOrDate {
    fn skips(&self, record: &Record) -> bool {
        record.title().is_empty() || record.date().is_none()
    }

    fn name(&self) -> &str {
        "missing-title-or-date"
    }
}

/// Skips the database's template page.
#[derive(Debug, Clone)]
pub struct TemplateSentinel {
    title: String,
}

impl TemplateSentinel {
    pub fn new(title: impl Into<String>) -> Self {
        TemplateSentinel {
            title: title.into(),
        }
    }
}

impl Default for TemplateSentinel {
    fn default() -> Self {
        TemplateSentinel::new(schema::TEMPLATE_TITLE)
    }
}

impl SkipRule for TemplateSentinel {
    fn skips(&self, record: &Record) -> bool {
        record.title() == self.title
    }

    fn name(&self) -> &str {
        "template"
    }
}

/// Skips records carrying any of the given tags. Records without the tag
/// property are kept.
#[derive(Debug, Clone)]
pub struct ExcludedTags {
    property: String,
    tags: BTreeSet<String>,
}

impl ExcludedTags {
    pub fn new<I, S>(property: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExcludedTags {
            property: property.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl SkipRule for ExcludedTags {
    fn skips(&self, record: &Record) -> bool {
        record
            .tags(&self.property)
            .is_some_and(|tags| tags.iter().any(|tag| self.tags.contains(tag)))
    }

    fn name(&self) -> &str {
        "excluded-tag"
    }
}

/// Skips records whose status is not one of the allowed names.
#[derive(Debug, Clone)]
pub struct StatusAllowlist {
    property: String,
    allowed: BTreeSet<String>,
}

impl StatusAllowlist {
    pub fn new<I, S>(property: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StatusAllowlist {
            property: property.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl SkipRule for StatusAllowlist {
    fn skips(&self, record: &Record) -> bool {
        !self.allowed.contains(&record.status(&self.property))
    }

    fn name(&self) -> &str {
        "status-not-allowed"
    }
}

/// Skips cancelled or declined records (case-sensitive prefix match).
#[derive(Debug, Clone)]
pub struct CancelledStatus {
    property: String,
}

impl CancelledStatus {
    const PREFIXES: [&'static str; 2] = ["Cancelled", "Declined"];

    pub fn new(property: impl Into<String>) -> Self {
        CancelledStatus {
            property: property.into(),
        }
    }
}

impl SkipRule for CancelledStatus {
    fn skips(&self, record: &Record) -> bool {
        let status = record.status(&self.property);
        Self::PREFIXES
            .iter()
            .any(|prefix| status.starts_with(*prefix))
    }

    fn name(&self) -> &str {
        "cancelled"
    }
}

/// Skips records none of whose locations start with `prefix`.
///
/// A record without a location property cannot be in a matching room, so it
/// is skipped as well.
#[derive(Debug, Clone)]
pub struct LocationPrefix {
    prefix: String,
}

impl LocationPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        LocationPrefix {
            prefix: prefix.into(),
        }
    }
}

impl SkipRule for LocationPrefix {
    fn skips(&self, record: &Record) -> bool {
        match record.location() {
            Some(locations) => !locations
                .iter()
                .any(|location| location.starts_with(&self.prefix)),
            None => true,
        }
    }

    fn name(&self) -> &str {
        "location-prefix"
    }
}

/// Skips records of one event type.
#[derive(Debug, Clone)]
pub struct ExcludedType {
    type_name: String,
}

impl ExcludedType {
    pub fn new(type_name: impl Into<String>) -> Self {
        ExcludedType {
            type_name: type_name.into(),
        }
    }
}

impl SkipRule for ExcludedType {
    fn skips(&self, record: &Record) -> bool {
        record.event_type().0 == self.type_name
    }

    fn name(&self) -> &str {
        "excluded-type"
    }
}
