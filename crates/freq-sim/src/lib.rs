//! `freq-sim` — the loading-sequence orchestrator.
//!
//! # Tick
//!
//! ```text
//! tick(dt):
//!   if phase != None:
//!     ① Clock      — simulation and phase elapsed += dt; alpha = elapsed / duration
//!     ② Setpoints  — ActiveLoad / CargoLoad ramp cargo and sweep the boom,
//!                    PostLoad parks the boom
//!     ③ Readings   — draft marks and stability recomputed from the barge
//!     ④ Notify     — cargo-load-updated(percent)
//!     ⑤ MOB mirror — copy the MOB flag
//!     ⑥ Advance    — elapsed >= duration && !mob  →  next phase
//!   MOB timer      — may clear the event and resume the crane
//!   Crane easing   — boom rotation / extension move toward targets
//!   on_tick_end(snapshot)
//! ```
//!
//! Barge, crane and MOB are optional collaborators injected through
//! [`SimBuilder`]; a missing one only skips its setpoints.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use freq_core::{Phase, SimConfig};
//! use freq_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::equipped(SimConfig::default()).build()?;
//! sim.start();
//! let ticks = sim.run_to_completion(1.0 / 60.0, 1_000_000)?;
//! assert_eq!(sim.phase(), Phase::None);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::SimSnapshot;
