//! Fluent builder for constructing a [`Sim`].

use freq_barge::BargeModel;
use freq_core::SimConfig;
use freq_crane::CraneModel;
use freq_mob::MobEvent;
use tracing::warn;

use crate::{Sim, SimObserver, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — phase durations and component settings
///
/// # Optional inputs
///
/// | Method             | Default when omitted                               |
/// |--------------------|----------------------------------------------------|
/// | `.barge(b)`        | no barge: cargo % still ramps, readings stay zero  |
/// | `.crane(c)`        | no crane: boom setpoints are skipped               |
/// | `.mob(m)`          | no MOB drill: phases never stall                   |
/// | `.observer(o)`     | no subscribers                                     |
///
/// [`SimBuilder::equipped`] attaches all three components built from the
/// config.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config.clone())
///     .barge(BargeModel::new(config.barge.clone()))
///     .crane(CraneModel::new(config.crane.clone()))
///     .observer(Box::new(NoopObserver))
///     .build()?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    barge:     Option<BargeModel>,
    crane:     Option<CraneModel>,
    mob:       Option<MobEvent>,
    observers: Vec<Box<dyn SimObserver>>,
}

impl SimBuilder {
    /// A builder with no collaborators attached.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            barge:     None,
            crane:     None,
            mob:       None,
            observers: Vec::new(),
        }
    }

    /// A builder with barge, crane and MOB drill built from `config`.
    pub fn equipped(config: SimConfig) -> Self {
        let barge = BargeModel::new(config.barge.clone());
        let crane = CraneModel::new(config.crane.clone());
        let mob   = MobEvent::new(config.mob.clone());
        Self::new(config).barge(barge).crane(crane).mob(mob)
    }

    pub fn barge(mut self, barge: BargeModel) -> Self {
        self.barge = Some(barge);
        self
    }

    pub fn crane(mut self, crane: CraneModel) -> Self {
        self.crane = Some(crane);
        self
    }

    /// Attach the MOB drill.  It halts the attached crane, if any.
    pub fn mob(mut self, mob: MobEvent) -> Self {
        self.mob = Some(mob);
        self
    }

    /// Subscribe an observer from the start.  More can be added later with
    /// [`Sim::subscribe`].
    pub fn observer(mut self, observer: Box<dyn SimObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Validate the configuration and return an idle [`Sim`] in
    /// `Phase::None`.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        if self.barge.is_none() {
            warn!("no barge attached: draft and stability readings stay at zero");
        }
        if self.crane.is_none() {
            warn!("no crane attached: boom setpoints will be skipped");
        }
        if self.mob.is_none() {
            warn!("no MOB event attached: phases will never stall");
        }

        Ok(Sim::from_parts(
            self.config,
            self.barge,
            self.crane,
            self.mob,
            self.observers,
        ))
    }
}
