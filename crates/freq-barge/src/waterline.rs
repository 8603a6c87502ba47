//! Hull placement relative to the light waterline.

/// Transform a presentation layer applies to the hull so the rendered barge
/// matches the current load.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterlinePose {
    /// Vertical offset from the light-ship position, cm.  Negative = sunk.
    pub z_offset_cm: f32,
    /// Pitch, degrees (equals trim).
    pub pitch_deg:   f32,
    /// Roll, degrees (equals heel).
    pub roll_deg:    f32,
}
