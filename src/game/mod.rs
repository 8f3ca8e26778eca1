//! Game Module
//!
//! The cannon range itself, built on top of the engine: configuration,
//! input mapping, aiming and projectile systems, targets, transforms and
//! the per-frame draw list.

pub mod config;
pub mod frame;
pub mod input;
pub mod shapes;
pub mod state;
pub mod systems;
pub mod targets;
pub mod timer;
pub mod transform;

pub use config::{FloorPolicy, RangeConfig};
pub use frame::{MeshId, MeshRegistry, RenderCommand, submit_frame};
pub use input::{GameEvent, map_key_to_event, map_text_to_event};
pub use state::{FrameOutput, GameState};
pub use systems::{AimPhase, AimingSystem, ProjectileSystem, ShotReport};
pub use targets::{ScoreCounter, TARGET_COUNT, Target, TargetSet};
pub use timer::IntervalTimer;
pub use transform::{CannonPose, TransformComposer};
