//! Game systems: self-contained modules that own state and logic.

pub mod aiming_system;
pub mod projectile_system;

pub use aiming_system::{AimPhase, AimingSystem, CannonState, wrap_angle};
pub use projectile_system::{ProjectileSystem, ShotReport};
