//! Renderer Backend
//!
//! The drawing interface the game talks to. Game code never touches wgpu
//! directly: it uploads meshes once, then queues `(mesh, transform)` pairs
//! between `clear_frame` and `present`.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::error::RenderResult;
use super::mesh::{MeshData, MeshHandle};

/// Upper bound on draws queued in one frame.
pub const MAX_DRAWS_PER_FRAME: usize = 32;

/// Per-draw uniform block (matches `DrawUniforms` in the shader).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct DrawUniforms {
    pub mvp: [[f32; 4]; 4],
}

impl DrawUniforms {
    pub fn new(transform: Mat4) -> Self {
        Self {
            mvp: transform.to_cols_array_2d(),
        }
    }
}

impl Default for DrawUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

static_assertions::const_assert_eq!(std::mem::size_of::<DrawUniforms>(), 64);

/// Mesh upload and per-frame draw submission.
pub trait RendererBackend {
    /// Upload a static mesh and return a handle for later draws.
    fn create_mesh(&mut self, mesh: &MeshData) -> RenderResult<MeshHandle>;

    /// Start a new frame, discarding any queued draws.
    fn clear_frame(&mut self);

    /// Queue `mesh` with its final clip-space transform.
    fn draw(&mut self, mesh: MeshHandle, transform: Mat4);

    /// Execute queued draws and show the frame.
    fn present(&mut self) -> RenderResult<()>;
}
