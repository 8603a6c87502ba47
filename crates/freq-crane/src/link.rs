//! The halt/resume seam other components use to control a crane.

/// Emergency-stop control over a crane.
///
/// Both methods must be idempotent: stopping a stopped crane or resuming a
/// running one is a no-op.
pub trait CraneLink {
    /// Freeze all boom motion.
    fn emergency_stop(&mut self);

    /// Release the emergency stop.
    fn resume_operations(&mut self);

    /// `true` while the emergency stop is latched.
    fn is_stopped(&self) -> bool;
}
