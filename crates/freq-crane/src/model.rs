//! The `CraneModel` struct and its per-tick easing.

use freq_core::math::{clamp01, lerp, smoothing_factor};
use freq_core::{CraneConfig, Point3};
use tracing::{info, trace, warn};

use crate::CraneLink;

/// Half-width of the sweep envelope, degrees.  Independent of
/// `CraneConfig::max_boom_rotation_deg`.
pub const SWEEP_HALF_ANGLE_DEG: f32 = 60.0;

/// Reach fraction at zero and full extension.
const REACH_RETRACTED: f32 = 0.5;
const REACH_EXTENDED:  f32 = 1.0;

/// Gaps smaller than these snap to the target.
const ROTATION_SNAP_DEG: f32 = 1e-4;
const EXTENSION_SNAP:    f32 = 1e-6;

/// Operating mode of the crane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CraneMode {
    #[default]
    Normal,
    EmergencyStopped,
}

/// Boom kinematics of the shore crane.
#[derive(Clone, Debug)]
pub struct CraneModel {
    config: CraneConfig,

    current_rotation_deg: f32,
    target_rotation_deg:  f32,
    current_extension:    f32,
    target_extension:     f32,
    sweep_position:       f32,
    bucket_active:        bool,
    mode:                 CraneMode,
}

impl CraneModel {
    /// A crane at rest: boom straight ahead, fully retracted, bucket idle.
    pub fn new(config: CraneConfig) -> Self {
        Self {
            config,
            current_rotation_deg: 0.0,
            target_rotation_deg:  0.0,
            current_extension:    0.0,
            target_extension:     0.0,
            sweep_position:       0.0,
            bucket_active:        false,
            mode:                 CraneMode::Normal,
        }
    }

    pub fn config(&self) -> &CraneConfig {
        &self.config
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Aim the boom.  Rotation is clamped to ±half the configured envelope,
    /// extension to `[0, 1]`.  The boom moves on subsequent ticks.
    ///
    /// Ignored while emergency-stopped.
    pub fn set_boom_target(&mut self, rotation_deg: f32, extension: f32) {
        if self.is_stopped() {
            trace!(rotation_deg, extension, "boom target ignored: crane stopped");
            return;
        }
        let half = self.config.max_boom_rotation_deg * 0.5;
        self.target_rotation_deg = clamp_or_zero(rotation_deg, -half, half);
        self.target_extension    = clamp01(extension);
    }

    /// Position the boom along the barge (`0.0` = bow, `1.0` = stern).
    ///
    /// Maps linearly onto a slew target in `[-60°, +60°]`, replacing any
    /// rotation target set by [`set_boom_target`][Self::set_boom_target].
    /// Ignored while emergency-stopped.
    pub fn set_sweep_position(&mut self, position: f32) {
        if self.is_stopped() {
            trace!(position, "sweep position ignored: crane stopped");
            return;
        }
        self.sweep_position      = clamp01(position);
        self.target_rotation_deg = lerp(-SWEEP_HALF_ANGLE_DEG, SWEEP_HALF_ANGLE_DEG, self.sweep_position);
    }

    /// Start or stop the bucket drop cycle.  Presentation only.
    pub fn set_bucket_active(&mut self, active: bool) {
        self.bucket_active = active;
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Ease current rotation and extension toward their targets.
    ///
    /// No-op while emergency-stopped or when `dt <= 0`.
    pub fn tick(&mut self, dt: f32) {
        if self.is_stopped() {
            return;
        }
        let k_rot = smoothing_factor(self.config.rotation_speed, dt);
        let k_ext = smoothing_factor(self.config.extension_speed, dt);

        self.current_rotation_deg =
            approach(self.current_rotation_deg, self.target_rotation_deg, k_rot, ROTATION_SNAP_DEG);
        self.current_extension =
            approach(self.current_extension, self.target_extension, k_ext, EXTENSION_SNAP);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn mode(&self) -> CraneMode {
        self.mode
    }

    #[inline]
    pub fn current_rotation_deg(&self) -> f32 {
        self.current_rotation_deg
    }

    #[inline]
    pub fn target_rotation_deg(&self) -> f32 {
        self.target_rotation_deg
    }

    #[inline]
    pub fn current_extension(&self) -> f32 {
        self.current_extension
    }

    #[inline]
    pub fn target_extension(&self) -> f32 {
        self.target_extension
    }

    #[inline]
    pub fn sweep_position(&self) -> f32 {
        self.sweep_position
    }

    #[inline]
    pub fn is_bucket_active(&self) -> bool {
        self.bucket_active
    }

    /// Effective boom length as a fraction of full length: `0.5` retracted,
    /// `1.0` fully extended.
    pub fn reach_fraction(&self) -> f32 {
        lerp(REACH_RETRACTED, REACH_EXTENDED, self.current_extension)
    }

    /// World position of the bucket at the boom tip.
    pub fn bucket_position(&self) -> Point3 {
        let reach_cm = self.config.boom_length_cm * self.reach_fraction();
        let yaw      = self.current_rotation_deg.to_radians();
        self.config.base_position.offset(Point3::new(
            yaw.cos() * reach_cm,
            yaw.sin() * reach_cm,
            self.config.pivot_height_cm,
        ))
    }
}

impl CraneLink for CraneModel {
    fn emergency_stop(&mut self) {
        if self.mode == CraneMode::EmergencyStopped {
            return;
        }
        self.mode = CraneMode::EmergencyStopped;
        warn!(
            rotation_deg = self.current_rotation_deg,
            extension    = self.current_extension,
            "crane emergency stop activated"
        );
    }

    fn resume_operations(&mut self) {
        if self.mode == CraneMode::Normal {
            return;
        }
        self.mode = CraneMode::Normal;
        info!("crane operations resumed");
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.mode == CraneMode::EmergencyStopped
    }
}

impl Default for CraneModel {
    fn default() -> Self {
        Self::new(CraneConfig::default())
    }
}

/// One smoothing step from `current` toward `target`, snapping when close.
///
/// The result always lies between `current` and `target`.
#[inline]
fn approach(current: f32, target: f32, factor: f32, snap: f32) -> f32 {
    if factor <= 0.0 {
        return current;
    }
    let gap = target - current;
    if gap.abs() <= snap || factor >= 1.0 {
        return target;
    }
    let next = current + gap * factor;
    if gap > 0.0 { next.min(target) } else { next.max(target) }
}

#[inline]
fn clamp_or_zero(x: f32, lo: f32, hi: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(lo, hi) }
}
