//! The `OutputWriter` trait implemented by recorder backends.

use crate::{EventRow, OutputResult, TickRow};

/// A sink for recorded rows.
///
/// The observer never panics on a failed write; errors are kept and handed
/// back by [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Append a batch of per-tick rows.
    fn write_ticks(&mut self, rows: &[TickRow]) -> OutputResult<()>;

    /// Append a batch of event rows.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Flush and close the underlying sinks.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
