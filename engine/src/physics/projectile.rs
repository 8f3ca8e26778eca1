//! Projectile kinematics for the cannon range
//!
//! The projectile is re-solved from its launch velocity and an ever-growing
//! tick clock every frame rather than stepped with an incremental integrator.
//! The resulting trajectory shape is part of the game feel, so the formulas
//! below must stay exactly as written.
//!
//! # Example
//!
//! ```ignore
//! use cannon_range_engine::physics::{BallisticsConfig, Projectile};
//! use glam::Vec2;
//!
//! let config = BallisticsConfig::default();
//! let mut projectile = Projectile::resting(Vec2::new(1.0, 1.16), 0.1);
//! projectile.launch(0.0, 0.03);
//! projectile.integrate(&config);
//! projectile.apply_rebound(&config);
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangle the projectile rebounds inside, in scene-local units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReboundBounds {
    pub left: f32,
    pub right: f32,
    pub floor: f32,
    pub ceiling: f32,
}

impl Default for ReboundBounds {
    fn default() -> Self {
        Self {
            left: -0.9,
            right: 7.1,
            floor: -0.8,
            ceiling: 7.2,
        }
    }
}

/// Environment constants for projectile flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallisticsConfig {
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    /// Amount added to the flight clock on every tick
    pub tick: f32,
    /// Fraction of speed lost on each rebound
    pub damping: f32,
    pub bounds: ReboundBounds,
    /// Below this height the projectile is considered out of play
    pub cutoff_y: f32,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self {
            gravity: -0.01,
            tick: 0.1,
            damping: 0.05,
            bounds: ReboundBounds::default(),
            cutoff_y: -2.0,
        }
    }
}

/// Which boundaries were crossed during a rebound check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rebound {
    pub horizontal: bool,
    pub vertical: bool,
}

/// The single cannonball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Centre in scene-local coordinates
    pub position: Vec2,
    /// Launch velocity; only rebounds change it after firing
    pub velocity: Vec2,
    /// Vertical speed at the current flight time
    pub final_vertical_speed: f32,
    /// Flight clock, grows by `tick` per integration
    pub elapsed: f32,
    pub radius: f32,
    pub launched: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self::resting(Vec2::ZERO, 0.1)
    }
}

impl Projectile {
    /// A projectile sitting unlaunched at `position`.
    pub fn resting(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            final_vertical_speed: 0.0,
            elapsed: 0.0,
            radius,
            launched: false,
        }
    }

    /// Launch velocity for a cannon at `angle_degrees` (0 = straight up,
    /// positive = counter-clockwise).
    pub fn launch_velocity(angle_degrees: f32, speed: f32) -> Vec2 {
        let angle = angle_degrees.to_radians();
        Vec2::new(-speed * angle.sin(), speed * angle.cos())
    }

    /// Park the projectile on the muzzle. Ignored while in flight.
    pub fn track_muzzle(&mut self, muzzle: Vec2) {
        if !self.launched {
            self.position = muzzle;
        }
    }

    /// Fire from the current position.
    ///
    /// Returns `false` (and changes nothing) when a shot is already in flight.
    pub fn launch(&mut self, angle_degrees: f32, speed: f32) -> bool {
        if self.launched {
            return false;
        }
        self.velocity = Self::launch_velocity(angle_degrees, speed);
        self.final_vertical_speed = self.velocity.y;
        self.elapsed = 0.0;
        self.launched = true;
        true
    }

    /// Return to muzzle tracking, dropping the current flight.
    pub fn rearm(&mut self) {
        self.launched = false;
        self.elapsed = 0.0;
        self.velocity = Vec2::ZERO;
        self.final_vertical_speed = 0.0;
    }

    /// Advance the flight clock and move the projectile.
    ///
    /// Each call adds the full displacement since launch at the new clock
    /// value, so the step grows every tick.
    pub fn integrate(&mut self, config: &BallisticsConfig) {
        self.elapsed += config.tick;
        let t = self.elapsed;
        self.position.x += self.velocity.x * t;
        self.position.y += self.velocity.y * t + 0.5 * config.gravity * t * t;
        self.final_vertical_speed = self.velocity.y + config.gravity * t;
    }

    /// Reverse and damp velocity components whose boundary was crossed.
    ///
    /// The vertical component is rebuilt from the current vertical speed,
    /// not from the launch value.
    pub fn apply_rebound(&mut self, config: &BallisticsConfig) -> Rebound {
        let bounds = &config.bounds;
        let mut rebound = Rebound::default();

        if self.position.x > bounds.right || self.position.x < bounds.left {
            self.velocity.x = damped_reverse(self.velocity.x, config.damping);
            rebound.horizontal = true;
        }

        if self.position.y < bounds.floor || self.position.y > bounds.ceiling {
            self.velocity.y = damped_reverse(self.final_vertical_speed, config.damping);
            rebound.vertical = true;
        }

        rebound
    }

    /// True once the projectile has dropped out of play.
    pub fn is_below_cutoff(&self, config: &BallisticsConfig) -> bool {
        self.position.y < config.cutoff_y
    }
}

fn damped_reverse(speed: f32, damping: f32) -> f32 {
    -(speed - speed * damping)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_launch_straight_up() {
        let v = Projectile::launch_velocity(0.0, 0.03);
        assert_eq!(v.x, 0.0);
        assert!((v.y - 0.03).abs() < EPS);
    }

    #[test]
    fn test_launch_left_of_vertical_goes_negative_x() {
        let v = Projectile::launch_velocity(45.0, 1.0);
        assert!(v.x < 0.0);
        assert!((v.x + v.y).abs() < EPS);
    }

    #[test]
    fn test_second_launch_rejected() {
        let mut p = Projectile::resting(Vec2::new(1.0, 1.0), 0.1);
        assert!(p.launch(0.0, 0.03));
        let velocity = p.velocity;
        assert!(!p.launch(60.0, 0.5));
        assert_eq!(p.velocity, velocity);
    }

    #[test]
    fn test_track_muzzle_ignored_in_flight() {
        let mut p = Projectile::resting(Vec2::ZERO, 0.1);
        p.track_muzzle(Vec2::new(2.0, 3.0));
        assert_eq!(p.position, Vec2::new(2.0, 3.0));

        p.launch(0.0, 0.03);
        p.track_muzzle(Vec2::new(9.0, 9.0));
        assert_eq!(p.position, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_integrate_step_grows_with_clock() {
        let config = BallisticsConfig::default();
        let mut p = Projectile::resting(Vec2::ZERO, 0.1);
        p.launch(-30.0, 0.05);
        let vx = p.velocity.x;

        p.integrate(&config);
        assert!((p.elapsed - 0.1).abs() < EPS);
        assert!((p.position.x - vx * 0.1).abs() < EPS);

        p.integrate(&config);
        // 0.1 + 0.2 of accumulated clock
        assert!((p.position.x - vx * 0.3).abs() < EPS);
    }

    #[test]
    fn test_final_vertical_speed_tracks_clock() {
        let config = BallisticsConfig::default();
        let mut p = Projectile::resting(Vec2::ZERO, 0.1);
        p.launch(0.0, 0.03);
        for _ in 0..5 {
            p.integrate(&config);
        }
        let expected = 0.03 + config.gravity * p.elapsed;
        assert!((p.final_vertical_speed - expected).abs() < EPS);
    }

    #[test]
    fn test_horizontal_rebound_damps() {
        let config = BallisticsConfig::default();
        let mut p = Projectile::resting(Vec2::new(7.5, 3.0), 0.1);
        p.velocity = Vec2::new(0.2, 0.0);
        p.launched = true;

        let rebound = p.apply_rebound(&config);
        assert!(rebound.horizontal);
        assert!(!rebound.vertical);
        assert!((p.velocity.x + 0.19).abs() < EPS);
    }

    #[test]
    fn test_vertical_rebound_uses_final_speed() {
        let config = BallisticsConfig::default();
        let mut p = Projectile::resting(Vec2::new(3.0, -1.0), 0.1);
        p.velocity = Vec2::new(0.0, 0.03);
        p.final_vertical_speed = -0.2;
        p.launched = true;

        let rebound = p.apply_rebound(&config);
        assert!(rebound.vertical);
        assert!((p.velocity.y - 0.19).abs() < EPS);
    }

    #[test]
    fn test_no_rebound_inside_bounds() {
        let config = BallisticsConfig::default();
        let mut p = Projectile::resting(Vec2::new(3.0, 3.0), 0.1);
        p.velocity = Vec2::new(0.1, 0.1);
        assert_eq!(p.apply_rebound(&config), Rebound::default());
        assert_eq!(p.velocity, Vec2::new(0.1, 0.1));
    }

    #[test]
    fn test_cutoff() {
        let config = BallisticsConfig::default();
        let mut p = Projectile::resting(Vec2::new(0.0, -1.99), 0.1);
        assert!(!p.is_below_cutoff(&config));
        p.position.y = -2.01;
        assert!(p.is_below_cutoff(&config));
    }

    #[test]
    fn test_rearm_clears_flight() {
        let config = BallisticsConfig::default();
        let mut p = Projectile::resting(Vec2::ZERO, 0.1);
        p.launch(10.0, 0.03);
        p.integrate(&config);
        p.rearm();
        assert!(!p.launched);
        assert_eq!(p.elapsed, 0.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }
}
