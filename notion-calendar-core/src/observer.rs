//! Notices emitted while a view is assembled.

use crate::calendar::CalendarEvent;
use crate::record::Record;

/// Receives skip and emit notices from the assembler.
///
/// Both methods default to doing nothing, and `()` is the silent observer.
pub trait PipelineObserver {
    fn record_skipped(&self, _view: &str, _record: &Record, _rule: &str) {}

    fn event_emitted(&self, _view: &str, _event: &CalendarEvent) {}
}

impl PipelineObserver for () {}

/// Forwards notices to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn record_skipped(&self, view: &str, record: &Record, rule: &str) {
        tracing::debug!(view, record = %record.id, rule, "Skipping record");
    }

    fn event_emitted(&self, view: &str, event: &CalendarEvent) {
        tracing::debug!(view, uid = %event.uid, summary = %event.summary, "Adding event");
    }
}
