//! Simulation observer trait: the notification channels.

use std::cell::RefCell;
use std::rc::Rc;

use freq_core::Phase;

use crate::SimSnapshot;

/// Callbacks invoked synchronously by [`Sim`][crate::Sim], in the order the
/// events happen within a tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers receive values, never the
/// simulation itself, so they cannot re-enter it.
///
/// # Example — phase logger
///
/// ```rust,ignore
/// struct PhaseLog(Vec<Phase>);
///
/// impl SimObserver for PhaseLog {
///     fn on_phase_changed(&mut self, phase: Phase) {
///         self.0.push(phase);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after a phase change, once the new phase's entry actions ran.
    fn on_phase_changed(&mut self, _phase: Phase) {}

    /// Called every running tick with the cargo load in percent.
    fn on_cargo_load_updated(&mut self, _percent: f32) {}

    /// Called when the man-overboard event starts (`true`) or clears
    /// (`false`).
    fn on_mob_state_changed(&mut self, _active: bool) {}

    /// Called once at the very end of every tick with the post-tick state.
    fn on_tick_end(&mut self, _snapshot: &SimSnapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Shared observers: subscribe one clone, keep another to read results after
/// the run.
impl<O: SimObserver + ?Sized> SimObserver for Rc<RefCell<O>> {
    fn on_phase_changed(&mut self, phase: Phase) {
        self.borrow_mut().on_phase_changed(phase);
    }

    fn on_cargo_load_updated(&mut self, percent: f32) {
        self.borrow_mut().on_cargo_load_updated(percent);
    }

    fn on_mob_state_changed(&mut self, active: bool) {
        self.borrow_mut().on_mob_state_changed(active);
    }

    fn on_tick_end(&mut self, snapshot: &SimSnapshot) {
        self.borrow_mut().on_tick_end(snapshot);
    }
}
