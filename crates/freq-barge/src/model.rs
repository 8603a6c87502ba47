//! The `BargeModel` struct.

use std::f32::consts::PI;

use freq_core::config::CM_PER_FT;
use freq_core::math::{clamp01, lerp};
use freq_core::{BargeConfig, DraftReadings, StabilityMetrics};

use crate::WaterlinePose;

/// Fixed fore/aft spread of the draft marks, feet.  Cosmetic, not derived.
const TRIM_MARK_OFFSET_FT: f32 = 0.1;

const GM_LIGHT_M:      f32 = 3.5;
const GM_LOADED_M:     f32 = 1.8;
const TRIM_PER_FILL:   f32 = 0.3;
const PEAK_HEEL_DEG:   f32 = 0.1;

/// Cargo state and load response of one barge.
///
/// Serializable for reports only; restore state through [`BargeModel::new`]
/// and [`set_cargo_fill_level`][Self::set_cargo_fill_level] so the fill
/// stays clamped.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BargeModel {
    config:     BargeConfig,
    /// Always in `[0.0, 1.0]`.
    fill_level: f32,
}

impl BargeModel {
    /// An empty barge.
    pub fn new(config: BargeConfig) -> Self {
        Self { config, fill_level: 0.0 }
    }

    pub fn config(&self) -> &BargeConfig {
        &self.config
    }

    // ── Cargo ─────────────────────────────────────────────────────────────

    /// Set the hold fill level (`0.0` = empty, `1.0` = full).  Out-of-range
    /// values are clamped.
    pub fn set_cargo_fill_level(&mut self, fill: f32) {
        self.fill_level = clamp01(fill);
    }

    #[inline]
    pub fn cargo_fill_level(&self) -> f32 {
        self.fill_level
    }

    /// Cargo aboard, short tons.
    pub fn cargo_tons(&self) -> f32 {
        self.fill_level * self.config.max_cargo_tons
    }

    // ── Derived readings ──────────────────────────────────────────────────

    /// Base draft in feet at an arbitrary fill level.  `fill` is not clamped.
    #[inline]
    pub fn compute_draft_at_fill(&self, fill: f32) -> f32 {
        lerp(self.config.light_draft_ft, self.config.loaded_draft_ft, fill)
    }

    /// Draft marks at the current fill level.
    pub fn draft_readings(&self) -> DraftReadings {
        let base = self.compute_draft_at_fill(self.fill_level);
        DraftReadings {
            fore:      base - TRIM_MARK_OFFSET_FT,
            aft:       base + TRIM_MARK_OFFSET_FT,
            port:      base,
            starboard: base,
        }
    }

    /// Stability figures at the current fill level.
    ///
    /// Heel peaks mid-load and returns to zero once the hold is full: it
    /// stands in for the transient list while one side is being filled.
    pub fn stability_metrics(&self) -> StabilityMetrics {
        let f = self.fill_level;
        StabilityMetrics {
            gm_m:     lerp(GM_LIGHT_M, GM_LOADED_M, f),
            trim_deg: f * TRIM_PER_FILL,
            heel_deg: (f * PI).sin() * PEAK_HEEL_DEG,
        }
    }

    /// How far the hull sits below its light waterline, and its attitude.
    pub fn waterline_pose(&self) -> WaterlinePose {
        let sinkage_ft = self.compute_draft_at_fill(self.fill_level) - self.config.light_draft_ft;
        let stability  = self.stability_metrics();
        WaterlinePose {
            z_offset_cm: -sinkage_ft * CM_PER_FT,
            pitch_deg:   stability.trim_deg,
            roll_deg:    stability.heel_deg,
        }
    }
}

impl Default for BargeModel {
    fn default() -> Self {
        Self::new(BargeConfig::default())
    }
}
