//! Render Module
//!
//! wgpu-based rendering for the range: a single flat-colour pipeline that
//! draws pre-uploaded meshes with one transform each.
//!
//! Game code depends only on [`RendererBackend`], [`MeshData`] and
//! [`MeshHandle`]; [`FlatRenderer`] is the GPU implementation.

pub mod backend;
pub mod error;
pub mod flat_renderer;
pub mod gpu_context;
pub mod mesh;
pub mod shader;

pub use backend::{DrawUniforms, MAX_DRAWS_PER_FRAME, RendererBackend};
pub use error::{RenderError, RenderResult};
pub use flat_renderer::{FlatRenderer, RendererConfig};
pub use gpu_context::{GpuContext, GpuContextConfig};
pub use mesh::{FillMode, FlatVertex, MeshData, MeshHandle, PrimitiveKind};
pub use shader::SHADER_SOURCE;
