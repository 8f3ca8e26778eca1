//! Cannon Range Engine Library
//!
//! A small 2D cannon range: aim a pivoted cannon, fire a single ball along
//! a gravity-and-rebound trajectory, knock down three targets.
//!
//! # Modules
//!
//! - [`physics`] - Projectile kinematics, rebound and circle overlap
//! - [`camera`] - Fixed view and resize-driven projection
//! - [`render`] - wgpu renderer behind the [`render::RendererBackend`] trait
//! - [`game`] - Aiming, projectile/target systems, transforms, scene meshes
//!
//! # Example
//!
//! ```ignore
//! use cannon_range_engine::game::{GameEvent, GameState, RangeConfig};
//!
//! let mut state = GameState::new(RangeConfig::default(), 1280, 720);
//! let frame = state.update(&[GameEvent::Fire]);
//! for command in &frame.commands {
//!     // renderer.draw(handles[command.mesh], command.transform);
//! }
//! ```

pub mod camera;
pub mod physics;
pub mod render;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::{CameraConfig, SceneCamera};
pub use physics::{BallisticsConfig, Projectile};
pub use render::{FlatRenderer, MeshData, MeshHandle, RenderError, RendererBackend};
