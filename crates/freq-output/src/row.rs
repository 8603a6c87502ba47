//! Plain data row types written by output backends.

use std::fmt;

use freq_core::{Phase, Point3};
use freq_sim::SimSnapshot;

/// The simulation state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRow {
    /// 1-based count of ticks seen by the recorder.
    pub tick:               u64,
    pub elapsed_secs:       f32,
    pub phase:              Phase,
    pub cargo_load_percent: f32,
    pub draft_fore_ft:      f32,
    pub draft_aft_ft:       f32,
    pub draft_port_ft:      f32,
    pub draft_starboard_ft: f32,
    pub gm_m:               f32,
    pub trim_deg:           f32,
    pub heel_deg:           f32,
    /// `None` when the simulation has no crane.
    pub bucket:             Option<Point3>,
    pub mob_active:         bool,
}

impl TickRow {
    pub fn from_snapshot(tick: u64, s: &SimSnapshot) -> Self {
        Self {
            tick,
            elapsed_secs:       s.simulation_elapsed_secs,
            phase:              s.phase,
            cargo_load_percent: s.cargo_load_percent,
            draft_fore_ft:      s.draft.fore,
            draft_aft_ft:       s.draft.aft,
            draft_port_ft:      s.draft.port,
            draft_starboard_ft: s.draft.starboard,
            gm_m:               s.stability.gm_m,
            trim_deg:           s.stability.trim_deg,
            heel_deg:           s.stability.heel_deg,
            bucket:             s.bucket_position,
            mob_active:         s.mob_active,
        }
    }
}

/// What an [`EventRow`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The phase changed; value is the new phase label.
    Phase,
    /// The MOB drill started (`1`) or cleared (`0`).
    Mob,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Phase => "phase",
            EventKind::Mob   => "mob",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discrete notification, stamped with the tick that delivered it.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub tick:         u64,
    pub elapsed_secs: f32,
    pub kind:         EventKind,
    pub value:        String,
}
