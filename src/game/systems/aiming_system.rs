//! Cannon aiming system.
//!
//! Turns rotate/speed events into the cannon angle and launch speed. The
//! angle is in degrees, 0 is straight up and positive turns counter-clockwise.
//! Rotation advances one fixed step per tick while a rotate key is held.

use crate::game::config::AimingConfig;
use crate::game::input::GameEvent;

/// What the cannon is doing this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AimPhase {
    #[default]
    Idle,
    RotatingPositive,
    RotatingNegative,
}

/// Raw cannon orientation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CannonState {
    pub angle_degrees: f32,
    /// +1 counter-clockwise, -1 clockwise
    pub direction: f32,
    pub rotating: bool,
}

impl Default for CannonState {
    fn default() -> Self {
        Self {
            angle_degrees: 0.0,
            direction: 1.0,
            rotating: false,
        }
    }
}

/// Keeps the cannon angle inside `[-max, max]`, jumping to the opposite
/// limit when a step would leave it.
pub fn wrap_angle(next: f32, max_degrees: f32) -> f32 {
    if next > max_degrees {
        -max_degrees
    } else if next < -max_degrees {
        max_degrees
    } else {
        next
    }
}

/// Owns the cannon angle and the launch speed.
pub struct AimingSystem {
    cannon: CannonState,
    config: AimingConfig,
    speed: f32,
}

impl AimingSystem {
    pub fn new(config: AimingConfig) -> Self {
        Self {
            cannon: CannonState::default(),
            config,
            speed: config.initial_speed,
        }
    }

    /// Apply one input event. Events this system does not own are ignored.
    pub fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RotateLeftDown => {
                self.cannon.direction = 1.0;
                self.cannon.rotating = true;
            }
            GameEvent::RotateRightDown => {
                self.cannon.direction = -1.0;
                self.cannon.rotating = true;
            }
            // Releasing either key stops rotation, even if the other is held
            GameEvent::RotateLeftUp | GameEvent::RotateRightUp => {
                self.cannon.rotating = false;
            }
            GameEvent::SpeedUp => {
                self.speed += self.config.speed_step;
                tracing::debug!(speed = self.speed, "[Aim] speed up");
            }
            GameEvent::SpeedDown => {
                self.speed -= self.config.speed_step;
                tracing::debug!(speed = self.speed, "[Aim] speed down");
            }
            GameEvent::Fire | GameEvent::Quit => {}
        }
    }

    pub fn phase(&self) -> AimPhase {
        match (self.cannon.rotating, self.cannon.direction > 0.0) {
            (false, _) => AimPhase::Idle,
            (true, true) => AimPhase::RotatingPositive,
            (true, false) => AimPhase::RotatingNegative,
        }
    }

    /// Advance rotation by one tick.
    pub fn advance(&mut self) {
        if !self.cannon.rotating {
            return;
        }
        let next = self.cannon.angle_degrees
            + self.config.rotation_step_degrees * self.cannon.direction;
        self.cannon.angle_degrees = wrap_angle(next, self.config.max_angle_degrees);
    }

    pub fn angle_degrees(&self) -> f32 {
        self.cannon.angle_degrees
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}
