//! Camera Module
//!
//! View and projection matrices for the range. Window-system agnostic: it
//! only deals with camera state and math.

pub mod scene_camera;

pub use scene_camera::{CameraConfig, SceneCamera};
