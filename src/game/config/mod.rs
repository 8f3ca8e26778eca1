//! Config Module
//!
//! Centralized configuration for the range layout and gameplay parameters.

pub mod range_config;

pub use range_config::{
    AimingConfig, ConfigError, FloorPolicy, RangeConfig, SceneLayout, TargetConfig, WindowConfig,
};
