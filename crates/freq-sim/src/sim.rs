//! The `Sim` struct: phase state machine and per-tick update.

use std::f32::consts::PI;

use freq_barge::BargeModel;
use freq_core::clock::sanitize_dt;
use freq_core::{DraftReadings, Phase, SimClock, SimConfig, StabilityMetrics};
use freq_crane::{CraneLink, CraneModel};
use freq_mob::{MobEvent, MobTransition};
use tracing::{debug, info, warn};

use crate::{SimError, SimObserver, SimResult, SimSnapshot};

// ── Phase setpoints ───────────────────────────────────────────────────────────

/// Boom aim on entering `PreLoad`: (rotation °, extension).
const PRELOAD_BOOM: (f32, f32) = (45.0, 0.5);
/// Boom parked position during `PostLoad`.
const PARKED_BOOM:  (f32, f32) = (0.0, 0.0);

/// Cargo percent at the end of `ActiveLoad`; `CargoLoad` ramps from here to 100.
const HALF_LOAD_PERCENT: f32 = 50.0;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The loading-sequence orchestrator.
///
/// `Sim` exclusively owns the barge, crane and MOB models and drives them
/// from a single externally-scheduled [`tick`][Self::tick].  Every input is
/// clamped rather than rejected, and a missing collaborator only skips its
/// own setpoints, so the tick path cannot fail.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated at build time.  The barge, crane and MOB hold their own
    /// copies, so this is read-only after construction.
    config: SimConfig,

    /// Simulation and phase elapsed time.
    clock: SimClock,

    phase: Phase,

    /// Always `barge.fill_level × 100` after a setpoint push.
    cargo_load_percent: f32,

    /// Cached from the barge at the end of each running tick.
    draft:     DraftReadings,
    stability: StabilityMetrics,

    /// Mirror of `mob.is_active()`.
    mob_active: bool,

    /// Operator emergency stop requested through [`Sim::emergency_stop`].
    /// Survives a MOB event clearing.
    operator_hold: bool,

    barge: Option<BargeModel>,
    crane: Option<CraneModel>,
    mob:   Option<MobEvent>,

    observers: Vec<Box<dyn SimObserver>>,
}

impl Sim {
    pub(crate) fn from_parts(
        config:    SimConfig,
        barge:     Option<BargeModel>,
        crane:     Option<CraneModel>,
        mob:       Option<MobEvent>,
        observers: Vec<Box<dyn SimObserver>>,
    ) -> Self {
        Self {
            config,
            clock:              SimClock::new(),
            phase:              Phase::None,
            cargo_load_percent: 0.0,
            draft:              DraftReadings::default(),
            stability:          StabilityMetrics::default(),
            mob_active:         false,
            operator_hold:      false,
            barge,
            crane,
            mob,
            observers,
        }
    }

    // ── Observers ─────────────────────────────────────────────────────────

    /// Register an observer.  It receives every notification from now on;
    /// missed events are not replayed.
    pub fn subscribe(&mut self, observer: Box<dyn SimObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The configuration the simulation was built with.
    ///
    /// There is no mutable access; build a new `Sim` to change it.
    ///
    /// ```compile_fail
    /// use freq_core::SimConfig;
    /// use freq_sim::SimBuilder;
    ///
    /// let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
    /// sim.config.phases.initial_survey = f32::NAN;
    /// ```
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // ── Session control ───────────────────────────────────────────────────

    /// Reset, then enter `InitialSurvey`.
    pub fn start(&mut self) {
        self.reset_simulation();
        self.set_phase(Phase::InitialSurvey);
    }

    /// Advance the simulation by `dt` seconds.  Negative or non-finite
    /// deltas count as zero.
    pub fn tick(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);

        if self.phase.is_running() {
            self.clock.advance(dt);
            self.update_phase();
        }

        let cleared = match self.mob.as_mut() {
            Some(mob) => mob.tick(dt, crane_link(&mut self.crane)),
            None      => None,
        };
        if let Some(transition) = cleared {
            self.publish_mob(transition);
        }

        if let Some(crane) = self.crane.as_mut() {
            crane.tick(dt);
        }

        let snapshot = self.snapshot();
        self.notify(|o| o.on_tick_end(&snapshot));
    }

    /// Step fixed `dt` ticks until at least `secs` seconds have been
    /// simulated.  Returns the number of ticks run.
    ///
    /// A NaN or infinite `secs` is rejected with [`SimError::InvalidDuration`].
    pub fn run_for(&mut self, secs: f32, dt: f32) -> SimResult<u64> {
        check_step(dt)?;
        if !secs.is_finite() {
            return Err(SimError::InvalidDuration(secs));
        }
        if secs <= 0.0 {
            return Ok(0);
        }
        let ticks = (secs / dt).ceil() as u64;
        for _ in 0..ticks {
            self.tick(dt);
        }
        Ok(ticks)
    }

    /// Step fixed `dt` ticks until the sequence returns to `Phase::None`.
    ///
    /// Returns the number of ticks run, or [`SimError::Incomplete`] if the
    /// sequence is still running after `max_ticks`.
    pub fn run_to_completion(&mut self, dt: f32, max_ticks: u64) -> SimResult<u64> {
        check_step(dt)?;
        let mut ticks = 0;
        while self.phase.is_running() {
            if ticks >= max_ticks {
                return Err(SimError::Incomplete { ticks, phase: self.phase });
            }
            self.tick(dt);
            ticks += 1;
        }
        Ok(ticks)
    }

    // ── Phase control ─────────────────────────────────────────────────────

    /// Switch to `phase`, restart the phase timer and run its entry actions.
    ///
    /// Entry actions that aim the boom (`PreLoad`, `PostLoad`) go through the
    /// crane's normal setters, so they are dropped while the crane is
    /// emergency-stopped and not replayed on resume.  `PostLoad` re-asserts
    /// its park target every tick; the `PreLoad` aim is lost.
    pub fn set_phase(&mut self, phase: Phase) {
        if self.phase.is_running() {
            self.end_phase(self.phase);
        }

        self.phase = phase;
        self.clock.restart_phase();
        self.begin_phase(phase);
        self.notify(|o| o.on_phase_changed(phase));

        info!(
            phase       = %phase,
            elapsed_secs = self.clock.simulation_elapsed_secs,
            "phase changed"
        );
    }

    /// Move to the next phase in sequence.  After `FinalSurvey` the
    /// simulation is complete and returns to `Phase::None`.  No-op while
    /// already in `Phase::None`.
    pub fn advance_to_next_phase(&mut self) {
        if !self.phase.is_running() {
            return;
        }
        let next = self.phase.next();
        self.set_phase(next);
        if next == Phase::None {
            info!(elapsed_secs = self.clock.simulation_elapsed_secs, "simulation complete");
        }
    }

    /// Return everything to its initial state.  Callable from any state;
    /// calling it twice is the same as calling it once.
    pub fn reset_simulation(&mut self) {
        self.phase              = Phase::None;
        self.cargo_load_percent = 0.0;
        self.clock.reset();
        self.draft              = DraftReadings::default();
        self.stability          = StabilityMetrics::default();
        self.mob_active         = false;
        self.operator_hold      = false;

        if let Some(barge) = self.barge.as_mut() {
            barge.set_cargo_fill_level(0.0);
        }
        if let Some(crane) = self.crane.as_mut() {
            crane.resume_operations();
            crane.set_bucket_active(false);
            crane.set_sweep_position(0.0);
        }
        let cleared = match self.mob.as_mut() {
            Some(mob) => mob.clear(crane_link(&mut self.crane)),
            None      => None,
        };
        if let Some(transition) = cleared {
            self.publish_mob(transition);
        }

        info!("simulation reset");
    }

    // ── Crane commands ────────────────────────────────────────────────────

    pub fn set_boom_target(&mut self, rotation_deg: f32, extension: f32) {
        if let Some(crane) = self.crane.as_mut() {
            crane.set_boom_target(rotation_deg, extension);
        }
    }

    pub fn set_sweep_position(&mut self, position: f32) {
        if let Some(crane) = self.crane.as_mut() {
            crane.set_sweep_position(position);
        }
    }

    pub fn set_bucket_active(&mut self, active: bool) {
        if let Some(crane) = self.crane.as_mut() {
            crane.set_bucket_active(active);
        }
    }

    /// Operator emergency stop, independent of the MOB drill.  Stays latched
    /// when a MOB event clears, until [`resume_operations`][Self::resume_operations].
    pub fn emergency_stop(&mut self) {
        self.operator_hold = true;
        if let Some(crane) = self.crane.as_mut() {
            crane.emergency_stop();
        }
    }

    /// Release an operator emergency stop.  Refused while a MOB event holds
    /// the crane.
    pub fn resume_operations(&mut self) {
        if self.mob_active {
            warn!("resume refused: MOB event active");
            return;
        }
        self.operator_hold = false;
        if let Some(crane) = self.crane.as_mut() {
            crane.resume_operations();
        }
    }

    // ── MOB commands ──────────────────────────────────────────────────────

    /// Start the man-overboard drill.  No-op if it is already running or no
    /// MOB event is attached.
    pub fn trigger_mob(&mut self) {
        let triggered = match self.mob.as_mut() {
            Some(mob) => mob.trigger(crane_link(&mut self.crane)),
            None      => None,
        };
        if let Some(transition) = triggered {
            self.publish_mob(transition);
        }
    }

    /// End the man-overboard drill early.
    pub fn clear_mob(&mut self) {
        let cleared = match self.mob.as_mut() {
            Some(mob) => mob.clear(crane_link(&mut self.crane)),
            None      => None,
        };
        if let Some(transition) = cleared {
            self.publish_mob(transition);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.phase.is_running()
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn phase_elapsed_secs(&self) -> f32 {
        self.clock.phase_elapsed_secs
    }

    #[inline]
    pub fn simulation_elapsed_secs(&self) -> f32 {
        self.clock.simulation_elapsed_secs
    }

    /// Configured length of the current phase, seconds.
    pub fn phase_duration(&self) -> f32 {
        self.config.phases.of(self.phase)
    }

    /// Fraction of the current phase completed, `[0, 1]`.
    pub fn phase_progress(&self) -> f32 {
        self.clock.phase_alpha(self.phase_duration())
    }

    #[inline]
    pub fn cargo_load_percent(&self) -> f32 {
        self.cargo_load_percent
    }

    #[inline]
    pub fn draft_readings(&self) -> DraftReadings {
        self.draft
    }

    #[inline]
    pub fn stability_metrics(&self) -> StabilityMetrics {
        self.stability
    }

    #[inline]
    pub fn is_mob_active(&self) -> bool {
        self.mob_active
    }

    /// Whether an operator emergency stop is latched.
    #[inline]
    pub fn is_operator_hold(&self) -> bool {
        self.operator_hold
    }

    pub fn barge(&self) -> Option<&BargeModel> {
        self.barge.as_ref()
    }

    pub fn crane(&self) -> Option<&CraneModel> {
        self.crane.as_ref()
    }

    pub fn mob(&self) -> Option<&MobEvent> {
        self.mob.as_ref()
    }

    /// The state a HUD renders, as of now.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            phase:                   self.phase,
            phase_elapsed_secs:      self.clock.phase_elapsed_secs,
            simulation_elapsed_secs: self.clock.simulation_elapsed_secs,
            cargo_load_percent:      self.cargo_load_percent,
            draft:                   self.draft,
            stability:               self.stability,
            bucket_position:         self.crane.as_ref().map(CraneModel::bucket_position),
            bucket_active:           self.crane.as_ref().is_some_and(CraneModel::is_bucket_active),
            mob_active:              self.mob_active,
        }
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    fn update_phase(&mut self) {
        let duration = self.phase_duration();
        let alpha    = self.clock.phase_alpha(duration);

        match self.phase {
            Phase::ActiveLoad => {
                self.cargo_load_percent = alpha * HALF_LOAD_PERCENT;
                self.push_cargo_fill();
                if let Some(crane) = self.crane.as_mut() {
                    crane.set_bucket_active(true);
                    crane.set_sweep_position((alpha * PI).sin() * 0.5);
                }
            }
            Phase::CargoLoad => {
                self.cargo_load_percent = HALF_LOAD_PERCENT + alpha * HALF_LOAD_PERCENT;
                self.push_cargo_fill();
                if let Some(crane) = self.crane.as_mut() {
                    crane.set_bucket_active(true);
                    crane.set_sweep_position(0.5 + (alpha * PI).sin() * 0.5);
                }
            }
            Phase::PostLoad => {
                if let Some(crane) = self.crane.as_mut() {
                    crane.set_bucket_active(false);
                    crane.set_boom_target(PARKED_BOOM.0, PARKED_BOOM.1);
                }
            }
            _ => {}
        }

        self.refresh_readings();

        let percent = self.cargo_load_percent;
        self.notify(|o| o.on_cargo_load_updated(percent));

        if let Some(mob) = self.mob.as_ref() {
            self.mob_active = mob.is_active();
        }

        if self.clock.phase_elapsed_secs >= duration && !self.mob_active {
            self.advance_to_next_phase();
        } else if self.clock.phase_elapsed_secs >= duration {
            debug!(phase = %self.phase, "phase complete but held by MOB event");
        }
    }

    fn begin_phase(&mut self, phase: Phase) {
        match phase {
            Phase::InitialSurvey => {
                self.cargo_load_percent = 0.0;
                self.push_cargo_fill();
            }
            Phase::PreLoad => {
                if let Some(crane) = self.crane.as_mut() {
                    crane.set_boom_target(PRELOAD_BOOM.0, PRELOAD_BOOM.1);
                }
            }
            Phase::ActiveLoad => {
                if let Some(crane) = self.crane.as_mut() {
                    crane.set_bucket_active(true);
                }
            }
            Phase::PostLoad => {
                if let Some(crane) = self.crane.as_mut() {
                    crane.set_bucket_active(false);
                    crane.set_boom_target(PARKED_BOOM.0, PARKED_BOOM.1);
                }
            }
            Phase::CargoLoad | Phase::FinalSurvey | Phase::None => {}
        }
    }

    /// Per-phase cleanup hook.  No phase needs one yet.
    fn end_phase(&mut self, _phase: Phase) {}

    fn push_cargo_fill(&mut self) {
        if let Some(barge) = self.barge.as_mut() {
            barge.set_cargo_fill_level(self.cargo_load_percent / 100.0);
        }
    }

    fn refresh_readings(&mut self) {
        if let Some(barge) = self.barge.as_ref() {
            self.draft     = barge.draft_readings();
            self.stability = barge.stability_metrics();
        }
    }

    fn publish_mob(&mut self, transition: MobTransition) {
        let active = transition.is_active();
        self.mob_active = active;
        if !active && self.operator_hold {
            if let Some(crane) = self.crane.as_mut() {
                crane.emergency_stop();
            }
            debug!("crane held after MOB clear: operator stop latched");
        }
        self.notify(|o| o.on_mob_state_changed(active));
    }

    fn notify(&mut self, mut f: impl FnMut(&mut dyn SimObserver)) {
        for observer in &mut self.observers {
            f(observer.as_mut());
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Borrow the crane as the MOB event's halt/resume link.
fn crane_link(crane: &mut Option<CraneModel>) -> Option<&mut dyn CraneLink> {
    crane.as_mut().map(|c| c as &mut dyn CraneLink)
}

fn check_step(dt: f32) -> SimResult<()> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidStep(dt))
    }
}
