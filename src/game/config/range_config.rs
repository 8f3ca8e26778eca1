//! Range Configuration
//!
//! Every tunable of the cannon range in one place. `Default` reproduces the
//! hand-tuned constants of the range; a JSON file can override any subset of
//! them, missing fields keep their defaults.

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::physics::BallisticsConfig;

use crate::game::targets::TARGET_COUNT;

/// Errors raised while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Window and presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Background colour (RGBA)
    pub clear_color: [f64; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cannon Range".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            clear_color: [0.8, 0.023, 0.3, 0.38431],
        }
    }
}

/// Cannon rotation and launch speed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimingConfig {
    /// Degrees turned per tick while a rotate key is held
    pub rotation_step_degrees: f32,
    /// Angle magnitude at which rotation wraps to the opposite side
    pub max_angle_degrees: f32,
    pub initial_speed: f32,
    /// Change applied by one speed-up / speed-down event
    pub speed_step: f32,
}

impl Default for AimingConfig {
    fn default() -> Self {
        Self {
            rotation_step_degrees: 5.0,
            max_angle_degrees: 90.0,
            initial_speed: 0.03,
            speed_step: 0.01,
        }
    }
}

/// What happens when the projectile drops below the cutoff height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorPolicy {
    /// Return to muzzle tracking so the next shot can be fired
    #[default]
    Rearm,
    /// Stay launched and keep integrating out of sight; aiming is held
    Freeze,
}

/// Fixed offsets used to place the cannon assembly in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLayout {
    /// Applied to everything; moves the scene origin to the lower left
    pub world_offset: Vec3,
    /// Rotation centre of the cannon
    pub cannon_mount: Vec3,
    /// Barrel mesh offset from the mount, along the barrel
    pub barrel_offset: Vec3,
    /// Hub offset relative to the barrel
    pub hub_offset: Vec3,
    pub pivot_mount: Vec3,
    /// Where the ball rests before firing, relative to the mount
    pub muzzle_offset: Vec3,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            world_offset: Vec3::new(-4.0, -4.0, 0.0),
            cannon_mount: Vec3::new(1.0, 0.3, 0.0),
            barrel_offset: Vec3::new(0.0, 0.5, 0.0),
            hub_offset: Vec3::new(0.0, -0.5, 0.0),
            pivot_mount: Vec3::new(1.0, 0.8, 0.0),
            muzzle_offset: Vec3::new(0.0, 0.86, 0.0),
        }
    }
}

/// One target disc.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub center: Vec2,
    pub radius: f32,
    pub color: [f32; 3],
}

/// Central configuration for the whole range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub aiming: AimingConfig,
    pub ballistics: BallisticsConfig,
    pub projectile_radius: f32,
    pub floor_policy: FloorPolicy,
    pub layout: SceneLayout,
    pub targets: [TargetConfig; TARGET_COUNT],
    /// Seconds between status log lines
    pub status_interval_secs: f32,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            aiming: AimingConfig::default(),
            ballistics: BallisticsConfig::default(),
            projectile_radius: 0.1,
            floor_policy: FloorPolicy::default(),
            layout: SceneLayout::default(),
            targets: [
                TargetConfig {
                    center: Vec2::new(4.3, 3.0),
                    radius: 0.5,
                    color: [0.6, 0.56, 0.21],
                },
                TargetConfig {
                    center: Vec2::new(2.25, 3.7),
                    radius: 0.7,
                    color: [0.78, 0.2323, 0.321],
                },
                TargetConfig {
                    center: Vec2::new(7.3, 1.2),
                    radius: 0.2,
                    color: [0.6231, 0.42, 0.6767],
                },
            ],
            status_interval_secs: 0.5,
        }
    }
}

impl RangeConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = RangeConfig::default();
        assert_eq!(config.aiming.initial_speed, 0.03);
        assert_eq!(config.aiming.rotation_step_degrees, 5.0);
        assert_eq!(config.ballistics.gravity, -0.01);
        assert_eq!(config.ballistics.tick, 0.1);
        assert_eq!(config.projectile_radius, 0.1);
        assert_eq!(config.floor_policy, FloorPolicy::Rearm);
        assert_eq!(config.targets[1].center, Vec2::new(2.25, 3.7));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RangeConfig::from_json(
            r#"{ "floor_policy": "freeze", "aiming": { "initial_speed": 0.05 } }"#,
        )
        .unwrap();
        assert_eq!(config.floor_policy, FloorPolicy::Freeze);
        assert_eq!(config.aiming.initial_speed, 0.05);
        assert_eq!(config.aiming.speed_step, 0.01);
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_json_round_trip() {
        let config = RangeConfig::default();
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(RangeConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_wrong_target_count_rejected() {
        let result = RangeConfig::from_json(
            r#"{ "targets": [ { "center": [1.0, 1.0], "radius": 0.5, "color": [1.0, 1.0, 1.0] } ] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = RangeConfig::load("/definitely/not/here/range.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = RangeConfig::load_or_default(None::<&str>).unwrap();
        assert_eq!(config, RangeConfig::default());
    }
}
