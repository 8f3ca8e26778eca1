//! Physics module
//!
//! Projectile kinematics and the circle tests used for target hits.
//! No external physics library.
//!
//! # Unit System
//!
//! Scene-local units, the same units the meshes are authored in. Time is
//! measured in ticks of the flight clock (0.1 per frame by default), not in
//! seconds.
//!
//! # Submodules
//!
//! - [`projectile`] - Launch, flight integration, rebound and cutoff
//! - [`collision`] - Closed-boundary circle overlap

pub mod collision;
pub mod projectile;

pub use collision::{Circle, circles_overlap};
pub use projectile::{BallisticsConfig, Projectile, Rebound, ReboundBounds};
