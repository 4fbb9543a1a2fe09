//! The view assembler.
//!
//! A view is plain data: three ordered lists of small, independent
//! functions. `run_view` walks the fetched records once, drops every record
//! any skip rule matches, and turns the rest into events.

use crate::calendar::{CalendarDocument, EventDraft};
use crate::error::CalendarResult;
use crate::observer::PipelineObserver;
use crate::record::Record;

/// Decides whether a record is excluded from a view. `true` means skip.
pub trait SkipRule: Send + Sync {
    fn skips(&self, record: &Record) -> bool;

    /// Short name used in skip notices.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> SkipRule for F
where
    F: Fn(&Record) -> bool + Send + Sync,
{
    fn skips(&self, record: &Record) -> bool {
        self(record)
    }
}

/// Writes one attribute of the event draft from a record.
pub trait Filler: Send + Sync {
    fn fill(&self, record: &Record, draft: &mut EventDraft) -> CalendarResult<()>;
}

/// Renders one line of the event description, line terminator included.
pub trait Descriptor: Send + Sync {
    fn describe(&self, record: &Record) -> String;
}

impl<F> Descriptor for F
where
    F: Fn(&Record) -> String + Send + Sync,
{
    fn describe(&self, record: &Record) -> String {
        self(record)
    }
}

/// A named view over the record set.
///
/// Descriptor order is the line order of the description. Fillers run in
/// order too; if two of them write the same attribute the later one wins.
pub struct ViewConfig {
    pub name: String,
    pub skip_rules: Vec<Box<dyn SkipRule>>,
    pub fillers: Vec<Box<dyn Filler>>,
    pub descriptors: Vec<Box<dyn Descriptor>>,
}

impl ViewConfig {
    pub fn new(name: impl Into<String>) -> Self {
        ViewConfig {
            name: name.into(),
            skip_rules: Vec::new(),
            fillers: Vec::new(),
            descriptors: Vec::new(),
        }
    }

    pub fn skip(mut self, rule: impl SkipRule + 'static) -> Self {
        self.skip_rules.push(Box::new(rule));
        self
    }

    pub fn fill(mut self, filler: impl Filler + 'static) -> Self {
        self.fillers.push(Box::new(filler));
        self
    }

    pub fn describe(mut self, descriptor: impl Descriptor + 'static) -> Self {
        self.descriptors.push(Box::new(descriptor));
        self
    }

    /// First rule that excludes `record`, if any.
    pub fn skipped_by(&self, record: &Record) -> Option<&dyn SkipRule> {
        self.skip_rules
            .iter()
            .map(|rule| rule.as_ref())
            .find(|rule| rule.skips(record))
    }

    pub fn run(
        &self,
        records: &[Record],
        observer: &dyn PipelineObserver,
    ) -> CalendarResult<CalendarDocument> {
        run_view(self, records, observer)
    }
}

/// Build the calendar document for `view` from `records`.
///
/// Output order follows input order. The first error aborts the whole view;
/// there is no partial document.
pub fn run_view(
    view: &ViewConfig,
    records: &[Record],
    observer: &dyn PipelineObserver,
) -> CalendarResult<CalendarDocument> {
    let mut document = CalendarDocument::new(view.name.clone());

    for record in records {
        if let Some(rule) = view.skipped_by(record) {
            observer.record_skipped(&view.name, record, rule.name());
            continue;
        }

        let mut draft = EventDraft::default();
        for filler in &view.fillers {
            filler.fill(record, &mut draft)?;
        }

        let description: String = view
            .descriptors
            .iter()
            .map(|descriptor| descriptor.describe(record))
            .collect();

        let event = draft.finish(record.id.clone(), record.created_time, description)?;
        observer.event_emitted(&view.name, &event);
        document.push(event);
    }

    Ok(document)
}
