//! Interface to the service the records are fetched from.

use std::future::Future;

use chrono::NaiveDate;

use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Which records to fetch: everything dated after `since`, sorted by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub database_id: String,
    pub since: NaiveDate,
    pub direction: SortDirection,
}

/// Produces the full, already paginated record set for a query.
///
/// The pipeline only starts once every page has been fetched; any error
/// aborts the whole calendar.
pub trait RecordSource {
    type Error;

    fn fetch_records(
        &self,
        query: &RecordQuery,
    ) -> impl Future<Output = Result<Vec<Record>, Self::Error>> + Send;
}
