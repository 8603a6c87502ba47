//! Simulation configuration.
//!
//! Every tunable number the simulation uses lives here, grouped by the
//! component that reads it.  All `Default` impls reproduce the reference
//! training scenario: a 195 ft × 35 ft jumbo hopper barge, a shore crane
//! with a 25 m boom, and a 10 s man-overboard drill.
//!
//! Configurations are immutable once a simulation is built.  Applications
//! typically load one from JSON (with the `serde` feature) and hand it to the
//! simulation builder, which calls [`SimConfig::validate`].

use crate::{FreqError, FreqResult, Phase, Point3};

/// Centimetres per foot.
pub const CM_PER_FT: f32 = 30.48;

// ── PhaseDurations ────────────────────────────────────────────────────────────

/// Length of each timed phase, in seconds.
///
/// A duration `<= 0` is legal and means the phase completes on its first tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhaseDurations {
    pub initial_survey: f32,
    pub pre_load:       f32,
    pub active_load:    f32,
    pub cargo_load:     f32,
    pub post_load:      f32,
    pub final_survey:   f32,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            initial_survey: 20.0,
            pre_load:       15.0,
            active_load:    45.0,
            cargo_load:     45.0,
            post_load:      15.0,
            final_survey:   20.0,
        }
    }
}

impl PhaseDurations {
    /// Duration of `phase` in seconds.  `Phase::None` reports `1.0`.
    pub fn of(&self, phase: Phase) -> f32 {
        match phase {
            Phase::InitialSurvey => self.initial_survey,
            Phase::PreLoad       => self.pre_load,
            Phase::ActiveLoad    => self.active_load,
            Phase::CargoLoad     => self.cargo_load,
            Phase::PostLoad      => self.post_load,
            Phase::FinalSurvey   => self.final_survey,
            Phase::None          => 1.0,
        }
    }

    /// Nominal length of an uninterrupted run (sum of positive durations).
    pub fn total(&self) -> f32 {
        Phase::SEQUENCE.iter().map(|&p| self.of(p).max(0.0)).sum()
    }
}

// ── BargeConfig ───────────────────────────────────────────────────────────────

/// Hull dimensions and draft range of the barge.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BargeConfig {
    /// Hull length, cm.  195 ft.
    pub length_cm:       f32,
    /// Hull beam, cm.  35 ft.
    pub beam_cm:         f32,
    /// Hull depth, cm.  12 ft.
    pub depth_cm:        f32,
    /// Draft with an empty hold, feet.
    pub light_draft_ft:  f32,
    /// Draft with a full hold, feet.
    pub loaded_draft_ft: f32,
    /// Cargo tonnage at a fill level of 1.0.
    pub max_cargo_tons:  f32,
}

impl Default for BargeConfig {
    fn default() -> Self {
        Self {
            length_cm:       5943.6,
            beam_cm:         1066.8,
            depth_cm:        365.76,
            light_draft_ft:  1.5,
            loaded_draft_ft: 9.0,
            max_cargo_tons:  1500.0,
        }
    }
}

impl BargeConfig {
    #[inline]
    pub fn length_ft(&self) -> f32 {
        self.length_cm / CM_PER_FT
    }

    #[inline]
    pub fn beam_ft(&self) -> f32 {
        self.beam_cm / CM_PER_FT
    }

    #[inline]
    pub fn depth_ft(&self) -> f32 {
        self.depth_cm / CM_PER_FT
    }
}

// ── CraneConfig ───────────────────────────────────────────────────────────────

/// Geometry and actuator rates of the shore crane.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CraneConfig {
    /// Total slew envelope, degrees.  Targets are clamped to ±half of this.
    pub max_boom_rotation_deg: f32,
    /// Boom length at full extension, cm.
    pub boom_length_cm:        f32,
    /// Height of the boom pivot above the crane base, cm.
    pub pivot_height_cm:       f32,
    /// Exponential closure rate for boom rotation, 1/s.
    pub rotation_speed:        f32,
    /// Exponential closure rate for boom extension, 1/s.
    pub extension_speed:       f32,
    /// World position of the crane base.
    pub base_position:         Point3,
}

impl Default for CraneConfig {
    fn default() -> Self {
        Self {
            max_boom_rotation_deg: 270.0,
            boom_length_cm:        2500.0,
            pivot_height_cm:       1500.0,
            rotation_speed:        30.0,
            extension_speed:       50.0,
            base_position:         Point3::ORIGIN,
        }
    }
}

// ── MobConfig ─────────────────────────────────────────────────────────────────

/// Man-overboard drill settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MobConfig {
    /// Seconds the event lasts before it clears itself.
    pub duration_secs: f32,
    /// Where the person is shown, relative to the barge deck origin.
    pub spawn_offset:  Point3,
}

impl Default for MobConfig {
    fn default() -> Self {
        Self {
            duration_secs: 10.0,
            spawn_offset:  Point3::new(0.0, 0.0, 200.0),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub phases: PhaseDurations,
    pub barge:  BargeConfig,
    pub crane:  CraneConfig,
    pub mob:    MobConfig,
}

impl SimConfig {
    /// Reject values the models cannot work with.
    ///
    /// Phase durations may be zero or negative (the phase completes at once)
    /// but must not be NaN or infinite.
    pub fn validate(&self) -> FreqResult<()> {
        let p = &self.phases;
        finite("phases.initial_survey", p.initial_survey)?;
        finite("phases.pre_load", p.pre_load)?;
        finite("phases.active_load", p.active_load)?;
        finite("phases.cargo_load", p.cargo_load)?;
        finite("phases.post_load", p.post_load)?;
        finite("phases.final_survey", p.final_survey)?;

        let b = &self.barge;
        non_negative("barge.length_cm", b.length_cm)?;
        non_negative("barge.beam_cm", b.beam_cm)?;
        non_negative("barge.depth_cm", b.depth_cm)?;
        non_negative("barge.light_draft_ft", b.light_draft_ft)?;
        non_negative("barge.loaded_draft_ft", b.loaded_draft_ft)?;
        non_negative("barge.max_cargo_tons", b.max_cargo_tons)?;
        if b.light_draft_ft > b.loaded_draft_ft {
            return Err(FreqError::config(
                "barge.light_draft_ft",
                format!(
                    "light draft {} ft exceeds loaded draft {} ft",
                    b.light_draft_ft, b.loaded_draft_ft
                ),
            ));
        }

        let c = &self.crane;
        finite("crane.max_boom_rotation_deg", c.max_boom_rotation_deg)?;
        if c.max_boom_rotation_deg <= 0.0 {
            return Err(FreqError::config(
                "crane.max_boom_rotation_deg",
                format!("must be positive, got {}", c.max_boom_rotation_deg),
            ));
        }
        non_negative("crane.boom_length_cm", c.boom_length_cm)?;
        finite("crane.pivot_height_cm", c.pivot_height_cm)?;
        non_negative("crane.rotation_speed", c.rotation_speed)?;
        non_negative("crane.extension_speed", c.extension_speed)?;
        if !c.base_position.is_finite() {
            return Err(FreqError::config("crane.base_position", "must be finite"));
        }

        non_negative("mob.duration_secs", self.mob.duration_secs)?;
        if !self.mob.spawn_offset.is_finite() {
            return Err(FreqError::config("mob.spawn_offset", "must be finite"));
        }
        Ok(())
    }

    /// Parse a JSON document.  Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> FreqResult<Self> {
        serde_json::from_str(json).map_err(|e| FreqError::Parse(e.to_string()))
    }
}

fn finite(field: &'static str, v: f32) -> FreqResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(FreqError::config(field, format!("must be finite, got {v}")))
    }
}

fn non_negative(field: &'static str, v: f32) -> FreqResult<()> {
    finite(field, v)?;
    if v < 0.0 {
        return Err(FreqError::config(field, format!("must not be negative, got {v}")));
    }
    Ok(())
}
