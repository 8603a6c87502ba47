//! World-space coordinate type.
//!
//! Units are centimetres, matching the scene the presentation layer renders.
//! Z is up.

/// A point (or offset) in world space, centimetres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum.
    #[inline]
    pub fn offset(self, by: Point3) -> Point3 {
        Point3::new(self.x + by.x, self.y + by.y, self.z + by.z)
    }

    /// Straight-line distance in centimetres.
    pub fn distance_cm(self, other: Point3) -> f32 {
        let (dx, dy, dz) = (other.x - self.x, other.y - self.y, other.z - self.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X{:.0} Y{:.0} Z{:.0}", self.x, self.y, self.z)
    }
}
