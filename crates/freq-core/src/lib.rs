//! `freq-core` — foundational types for the FREQ barge drafting simulation.
//!
//! This crate is a dependency of every other `freq-*` crate.  It has no
//! `freq-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde` / `serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`phase`]       | `Phase`, `DraftReadings`, `StabilityMetrics`          |
//! | [`point`]       | `Point3` (centimetre world coordinates)               |
//! | [`clock`]       | `SimClock`                                            |
//! | [`config`]      | `SimConfig` and the per-component config structs      |
//! | [`math`]        | `lerp`, `clamp01`, exponential smoothing factor       |
//! | [`error`]       | `FreqError`, `FreqResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types and     |
//! |         | enables `SimConfig::from_json_str`.                        |

pub mod clock;
pub mod config;
pub mod error;
pub mod math;
pub mod phase;
pub mod point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::SimClock;
pub use config::{BargeConfig, CraneConfig, MobConfig, PhaseDurations, SimConfig};
pub use error::{FreqError, FreqResult};
pub use phase::{DraftReadings, Phase, StabilityMetrics};
pub use point::Point3;
