//! Rendering errors
//!
//! Everything here except a transient surface error is fatal for the demo:
//! without a device or a valid shader there is nothing to draw.

/// Rendering error types
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create window surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
    #[error("shader compilation failed: {0}")]
    Shader(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
