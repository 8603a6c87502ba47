//! Read-only view of the simulation for presentation layers.

use freq_core::{DraftReadings, Phase, Point3, StabilityMetrics};

/// Everything a HUD shows, captured at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SimSnapshot {
    pub phase:                   Phase,
    pub phase_elapsed_secs:      f32,
    pub simulation_elapsed_secs: f32,
    pub cargo_load_percent:      f32,
    pub draft:                   DraftReadings,
    pub stability:               StabilityMetrics,
    /// `None` when no crane is attached.
    pub bucket_position:         Option<Point3>,
    pub bucket_active:           bool,
    pub mob_active:              bool,
}
