//! `freq-barge` — the barge's load response.
//!
//! [`BargeModel`] maps a single scalar, the cargo fill level in `[0, 1]`, to
//! draft marks at four hull positions and to stability figures.  This is a
//! closed-form training model, not hydrostatics: nothing is derived from hull
//! geometry or buoyancy.
//!
//! | Output               | Formula (fill = f)                               |
//! |----------------------|--------------------------------------------------|
//! | base draft, ft       | `lerp(light, loaded, f)`                         |
//! | fore / aft, ft       | `base - 0.1` / `base + 0.1`                      |
//! | port / starboard, ft | `base`                                           |
//! | GM, m                | `lerp(3.5, 1.8, f)`                              |
//! | trim, deg            | `0.3 f`                                          |
//! | heel, deg            | `0.1 sin(π f)`                                   |

pub mod model;
pub mod waterline;


pub use model::BargeModel;
pub use waterline::WaterlinePose;
