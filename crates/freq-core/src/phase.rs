//! The phase sequence and the derived hull readings.

use std::fmt;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// The six operational phases of the barge drafting sequence.
///
/// `None` is both the pre-start and the post-completion state.  The order is
/// fixed and linear: `InitialSurvey → PreLoad → ActiveLoad → CargoLoad →
/// PostLoad → FinalSurvey → None`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    InitialSurvey,
    PreLoad,
    ActiveLoad,
    CargoLoad,
    PostLoad,
    FinalSurvey,
    #[default]
    None,
}

impl Phase {
    /// The six timed phases in run order.
    pub const SEQUENCE: [Phase; 6] = [
        Phase::InitialSurvey,
        Phase::PreLoad,
        Phase::ActiveLoad,
        Phase::CargoLoad,
        Phase::PostLoad,
        Phase::FinalSurvey,
    ];

    /// The phase that follows `self`.  `FinalSurvey` and `None` both lead to
    /// `None`.
    pub fn next(self) -> Phase {
        match self {
            Phase::InitialSurvey => Phase::PreLoad,
            Phase::PreLoad       => Phase::ActiveLoad,
            Phase::ActiveLoad    => Phase::CargoLoad,
            Phase::CargoLoad     => Phase::PostLoad,
            Phase::PostLoad      => Phase::FinalSurvey,
            Phase::FinalSurvey   => Phase::None,
            Phase::None          => Phase::None,
        }
    }

    /// `true` for the six timed phases.
    #[inline]
    pub fn is_running(self) -> bool {
        self != Phase::None
    }

    /// 1-based position in [`Phase::SEQUENCE`]; `0` for `None`.
    pub fn ordinal(self) -> u8 {
        match self {
            Phase::InitialSurvey => 1,
            Phase::PreLoad       => 2,
            Phase::ActiveLoad    => 3,
            Phase::CargoLoad     => 4,
            Phase::PostLoad      => 5,
            Phase::FinalSurvey   => 6,
            Phase::None          => 0,
        }
    }

    /// Short upper-case label shown on the HUD.
    pub fn display_name(self) -> &'static str {
        match self {
            Phase::InitialSurvey => "INITIAL-SURV",
            Phase::PreLoad       => "PRE-LOAD",
            Phase::ActiveLoad    => "ACTIVE-LOAD",
            Phase::CargoLoad     => "CARGO-LOAD",
            Phase::PostLoad      => "POST-LOAD",
            Phase::FinalSurvey   => "FINAL-SURV",
            Phase::None          => "NONE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ── DraftReadings ─────────────────────────────────────────────────────────────

/// Draft at the four hull measurement positions, in feet.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraftReadings {
    pub fore:      f32,
    pub aft:       f32,
    pub port:      f32,
    pub starboard: f32,
}

impl DraftReadings {
    /// Mean of the four marks.
    pub fn mean(&self) -> f32 {
        (self.fore + self.aft + self.port + self.starboard) * 0.25
    }
}

// ── StabilityMetrics ──────────────────────────────────────────────────────────

/// Stability figures for the barge.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StabilityMetrics {
    /// Metacentric height, metres.
    pub gm_m:      f32,
    /// Trim angle, degrees.  Positive = stern down.
    pub trim_deg:  f32,
    /// Heel angle, degrees.  Positive = starboard down.
    pub heel_deg:  f32,
}
