//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use freq_core::Phase;
use freq_sim::{SimObserver, SimSnapshot};

use crate::row::{EventKind, EventRow, TickRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records every tick and every phase / MOB
/// notification to an [`OutputWriter`].
///
/// Notifications arrive before the tick's final state is known, so events are
/// held until the next `on_tick_end` and stamped with that tick.  Events
/// raised outside a tick (`set_phase`, `reset_simulation` called directly)
/// land on the following tick, or on [`finish`][Self::finish].
///
/// Subscribe it through `Rc<RefCell<_>>` to keep a handle for `finish`.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    ticks:        u64,
    last_elapsed: f32,
    pending:      Vec<(EventKind, String)>,
    finished:     bool,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            ticks:        0,
            last_elapsed: 0.0,
            pending:      Vec::new(),
            finished:     false,
            last_error:   None,
        }
    }

    /// Number of tick rows recorded so far.
    pub fn ticks_recorded(&self) -> u64 {
        self.ticks
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write any held events, then flush the writer.
    ///
    /// Returns the first error seen during the session, if any.  Later calls
    /// are no-ops.
    pub fn finish(&mut self) -> OutputResult<()> {
        if !self.finished {
            self.finished = true;
            self.flush_pending(self.ticks, self.last_elapsed);
            let result = self.writer.finish();
            self.store_err(result);
        }
        match self.last_error.take() {
            Some(e) => Err(e),
            None    => Ok(()),
        }
    }

    /// Unwrap the inner writer (e.g. to inspect rows after the session).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self, tick: u64, elapsed_secs: f32) {
        if self.pending.is_empty() {
            return;
        }
        let rows: Vec<EventRow> = self
            .pending
            .drain(..)
            .map(|(kind, value)| EventRow { tick, elapsed_secs, kind, value })
            .collect();
        let result = self.writer.write_events(&rows);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_phase_changed(&mut self, phase: Phase) {
        self.pending.push((EventKind::Phase, phase.display_name().to_owned()));
    }

    fn on_mob_state_changed(&mut self, active: bool) {
        self.pending.push((EventKind::Mob, (active as u8).to_string()));
    }

    fn on_tick_end(&mut self, snapshot: &SimSnapshot) {
        if self.finished {
            return;
        }
        self.ticks += 1;
        self.last_elapsed = snapshot.simulation_elapsed_secs;

        let row = TickRow::from_snapshot(self.ticks, snapshot);
        let result = self.writer.write_ticks(&[row]);
        self.store_err(result);

        self.flush_pending(self.ticks, self.last_elapsed);
    }
}
