//! Mesh Data
//!
//! CPU-side description of a static shape: primitive kind, positions,
//! per-vertex colours and fill mode. The renderer uploads it once and hands
//! back an opaque [`MeshHandle`].

use bytemuck::{Pod, Zeroable};

/// How the vertex list is assembled into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Every three vertices form a triangle
    Triangles,
    /// Vertex 0 is shared by every triangle `(0, i, i + 1)`
    TriangleFan,
}

/// Rasterisation mode for a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    #[default]
    Fill,
    /// Wireframe; needs `POLYGON_MODE_LINE`, falls back to `Fill` without it
    Line,
}

/// Vertex layout consumed by the flat-colour shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FlatVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl FlatVertex {
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FlatVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Colour
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// A static shape ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub label: &'static str,
    pub primitive: PrimitiveKind,
    pub fill: FillMode,
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
}

impl MeshData {
    pub fn new(
        label: &'static str,
        primitive: PrimitiveKind,
        positions: Vec<[f32; 3]>,
        colors: Vec<[f32; 3]>,
        fill: FillMode,
    ) -> Self {
        Self {
            label,
            primitive,
            fill,
            positions,
            colors,
        }
    }

    /// Same colour on every vertex.
    pub fn uniform_color(
        label: &'static str,
        primitive: PrimitiveKind,
        positions: Vec<[f32; 3]>,
        color: [f32; 3],
        fill: FillMode,
    ) -> Self {
        let colors = vec![color; positions.len()];
        Self::new(label, primitive, positions, colors, fill)
    }

    /// Number of vertices that have both a position and a colour.
    pub fn vertex_count(&self) -> usize {
        self.positions.len().min(self.colors.len())
    }

    /// Interleaved vertices for the GPU.
    pub fn vertices(&self) -> Vec<FlatVertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(&position, &color)| FlatVertex { position, color })
            .collect()
    }

    /// Triangle-list indices. Fans are unrolled since wgpu has no fan topology.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let count = self.vertex_count() as u32;
        match self.primitive {
            PrimitiveKind::Triangles => (0..count - count % 3).collect(),
            PrimitiveKind::TriangleFan => (1..count.saturating_sub(1))
                .flat_map(|i| [0, i, i + 1])
                .collect(),
        }
    }
}

/// Opaque reference to a mesh owned by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub(crate) u32);

impl MeshHandle {
    /// Build a handle from a raw slot. Renderer implementations outside this
    /// crate use it to mint their own handles.
    pub fn from_raw(slot: u32) -> Self {
        Self(slot)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_vertex_size() {
        assert_eq!(std::mem::size_of::<FlatVertex>(), 24);
    }

    #[test]
    fn test_triangle_list_drops_partial_triangle() {
        let mesh = MeshData::uniform_color(
            "partial",
            PrimitiveKind::Triangles,
            vec![[0.0; 3]; 7],
            [1.0, 0.0, 0.0],
            FillMode::Fill,
        );
        assert_eq!(mesh.triangle_indices(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fan_unrolls() {
        let mesh = MeshData::uniform_color(
            "fan",
            PrimitiveKind::TriangleFan,
            vec![[0.0; 3]; 5],
            [0.0, 1.0, 0.0],
            FillMode::Fill,
        );
        assert_eq!(mesh.triangle_indices(), vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn test_degenerate_fan_is_empty() {
        let mesh = MeshData::uniform_color(
            "tiny",
            PrimitiveKind::TriangleFan,
            vec![[0.0; 3]; 2],
            [0.0, 0.0, 1.0],
            FillMode::Fill,
        );
        assert!(mesh.triangle_indices().is_empty());
    }

    #[test]
    fn test_vertices_zip_shorter_side() {
        let mesh = MeshData::new(
            "mismatch",
            PrimitiveKind::Triangles,
            vec![[0.0; 3]; 4],
            vec![[1.0; 3]; 3],
            FillMode::Line,
        );
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.vertices()[2].color, [1.0; 3]);
    }
}
