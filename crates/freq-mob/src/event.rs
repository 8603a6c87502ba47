//! The `MobEvent` state machine: `Idle ⇄ Active`.

use freq_core::clock::sanitize_dt;
use freq_core::{MobConfig, Point3};
use freq_crane::CraneLink;
use tracing::{info, warn};

/// A change of MOB state, returned by the methods that cause one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MobTransition {
    Triggered,
    Cleared,
}

impl MobTransition {
    /// The MOB flag after this transition.
    #[inline]
    pub fn is_active(self) -> bool {
        self == MobTransition::Triggered
    }
}

/// Timed man-overboard override.
#[derive(Clone, Debug)]
pub struct MobEvent {
    config:    MobConfig,
    active:    bool,
    /// Seconds since the event started.  Zero while idle.
    timer:     f32,
}

impl MobEvent {
    pub fn new(config: MobConfig) -> Self {
        Self { config, active: false, timer: 0.0 }
    }

    pub fn config(&self) -> &MobConfig {
        &self.config
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn timer_secs(&self) -> f32 {
        self.timer
    }

    /// Seconds until the event clears itself; `0.0` while idle.
    pub fn remaining_secs(&self) -> f32 {
        if self.active {
            (self.config.duration_secs - self.timer).max(0.0)
        } else {
            0.0
        }
    }

    /// Where the person on deck is shown, given the deck origin in world
    /// space.  `None` while idle.
    pub fn figure_position(&self, deck_origin: Point3) -> Option<Point3> {
        self.active.then(|| deck_origin.offset(self.config.spawn_offset))
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Start the drill: halt `crane` (if linked) and restart the timer.
    ///
    /// Returns `None` if the event was already active.
    pub fn trigger(&mut self, crane: Option<&mut dyn CraneLink>) -> Option<MobTransition> {
        if self.active {
            return None;
        }
        self.active = true;
        self.timer  = 0.0;
        if let Some(crane) = crane {
            crane.emergency_stop();
        }
        warn!(duration_secs = self.config.duration_secs, "MOB event triggered: crane halted, person on deck");
        Some(MobTransition::Triggered)
    }

    /// End the drill: resume `crane` (if linked) and zero the timer.
    ///
    /// Returns `None` if the event was already idle.
    pub fn clear(&mut self, crane: Option<&mut dyn CraneLink>) -> Option<MobTransition> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.timer  = 0.0;
        if let Some(crane) = crane {
            crane.resume_operations();
        }
        info!("MOB event cleared: operations resumed");
        Some(MobTransition::Cleared)
    }

    /// Advance the timer; clears the event once `duration_secs` has elapsed.
    ///
    /// Returns `Some(Cleared)` on the tick that clears it.
    pub fn tick(&mut self, dt: f32, crane: Option<&mut dyn CraneLink>) -> Option<MobTransition> {
        if !self.active {
            return None;
        }
        self.timer += sanitize_dt(dt);
        if self.timer >= self.config.duration_secs {
            return self.clear(crane);
        }
        None
    }
}

impl Default for MobEvent {
    fn default() -> Self {
        Self::new(MobConfig::default())
    }
}
