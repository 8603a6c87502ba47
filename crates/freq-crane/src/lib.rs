//! `freq-crane` — the shore crane's boom actuator.
//!
//! [`CraneModel`] holds a current and a target value for boom rotation
//! (slew, degrees) and boom extension (`[0, 1]`).  Each tick closes part of
//! the gap with frame-rate-independent exponential smoothing, so the boom
//! eases in without ever overshooting.
//!
//! An emergency-stop latch ([`CraneMode::EmergencyStopped`]) freezes the
//! current and target values until operations resume.  Other components
//! reach the latch through the [`CraneLink`] trait, which is how the
//! man-overboard event halts the crane without knowing its concrete type.

pub mod link;
pub mod model;


pub use link::CraneLink;
pub use model::{CraneMode, CraneModel, SWEEP_HALF_ANGLE_DEG};
