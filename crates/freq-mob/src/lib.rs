//! `freq-mob` — the man-overboard (MOB) safety drill.
//!
//! When triggered, a [`MobEvent`] latches the linked crane's emergency stop,
//! shows a person on the barge deck, and counts down its configured
//! duration.  When the timer expires (or the event is cleared by hand) the
//! crane resumes.  While the event is active the crane is stopped; the
//! simulation also holds the current phase open until the event clears.
//!
//! State changes are returned as [`MobTransition`] values so the owner can
//! broadcast them; the event itself keeps no listener list.

pub mod event;


pub use event::{MobEvent, MobTransition};
