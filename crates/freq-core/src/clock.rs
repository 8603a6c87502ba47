//! Simulation time model.
//!
//! # Design
//!
//! The host drives the simulation with a variable frame delta `dt` (seconds,
//! `dt >= 0`).  Two accumulators exist:
//!
//!   simulation elapsed — total running time, reset only by an explicit reset
//!   phase elapsed      — time spent in the current phase, reset on every
//!                        phase change
//!
//! Both live in `SimClock`.  Negative or non-finite deltas are ignored so the
//! accumulators stay monotonic.

use std::fmt;

/// Elapsed-time accumulators for one simulation run.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds since the run started.  Only advances while a phase is active.
    pub simulation_elapsed_secs: f32,
    /// Seconds since the current phase began.
    pub phase_elapsed_secs: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance both accumulators by `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);
        self.simulation_elapsed_secs += dt;
        self.phase_elapsed_secs      += dt;
    }

    /// Start timing a new phase.
    #[inline]
    pub fn restart_phase(&mut self) {
        self.phase_elapsed_secs = 0.0;
    }

    /// Zero both accumulators.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of a phase of length `duration_secs` completed so far, in
    /// `[0.0, 1.0]`.
    ///
    /// A non-positive duration counts as already complete (`1.0`).
    pub fn phase_alpha(&self, duration_secs: f32) -> f32 {
        if !(duration_secs > 0.0) {
            return 1.0;
        }
        crate::math::clamp01(self.phase_elapsed_secs / duration_secs)
    }

    /// Break simulation elapsed time into whole (minutes, seconds) for a
    /// timer readout.
    pub fn elapsed_mmss(&self) -> (u32, u32) {
        let total = self.simulation_elapsed_secs.max(0.0) as u32;
        (total / 60, total % 60)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_mmss();
        write!(f, "{m:02}:{s:02}")
    }
}

/// Frame deltas below zero (or NaN) contribute nothing.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
