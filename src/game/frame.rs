//! Frame output
//!
//! The fixed set of mesh slots, the draw commands a frame produces and the
//! glue that uploads meshes and submits a frame to a [`RendererBackend`].

use glam::Mat4;

use crate::render::{MeshHandle, RenderResult, RendererBackend};

use super::config::RangeConfig;
use super::shapes;
use super::targets::TARGET_COUNT;

/// Every drawable on the range, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshId {
    Spire,
    Column,
    Ledge,
    Target0,
    Target1,
    Target2,
    Cannon,
    Hub,
    Pivot,
    Projectile,
}

impl MeshId {
    pub const COUNT: usize = 10;

    pub const ALL: [MeshId; Self::COUNT] = [
        MeshId::Spire,
        MeshId::Column,
        MeshId::Ledge,
        MeshId::Target0,
        MeshId::Target1,
        MeshId::Target2,
        MeshId::Cannon,
        MeshId::Hub,
        MeshId::Pivot,
        MeshId::Projectile,
    ];

    pub const TARGETS: [MeshId; TARGET_COUNT] = [MeshId::Target0, MeshId::Target1, MeshId::Target2];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn target_index(self) -> Option<usize> {
        Self::TARGETS.iter().position(|&id| id == self)
    }
}

static_assertions::const_assert!(MeshId::COUNT <= crate::render::MAX_DRAWS_PER_FRAME);

/// One draw: which mesh and its final clip-space transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCommand {
    pub mesh: MeshId,
    pub transform: Mat4,
}

/// Renderer handles for every [`MeshId`].
#[derive(Debug, Clone)]
pub struct MeshRegistry {
    handles: [MeshHandle; MeshId::COUNT],
}

impl MeshRegistry {
    /// Build and upload every shape.
    pub fn upload<B: RendererBackend>(backend: &mut B, config: &RangeConfig) -> RenderResult<Self> {
        let mut handles = [MeshHandle::from_raw(0); MeshId::COUNT];
        for id in MeshId::ALL {
            let mesh = shapes::mesh_for(id, config);
            handles[id.index()] = backend.create_mesh(&mesh)?;
        }
        tracing::info!(meshes = MeshId::COUNT, "[Frame] scene meshes uploaded");
        Ok(Self { handles })
    }

    pub fn handle(&self, id: MeshId) -> MeshHandle {
        self.handles[id.index()]
    }
}

/// Clear, queue `commands` in order, present.
pub fn submit_frame<B: RendererBackend>(
    backend: &mut B,
    registry: &MeshRegistry,
    commands: &[RenderCommand],
) -> RenderResult<()> {
    backend.clear_frame();
    for command in commands {
        backend.draw(registry.handle(command.mesh), command.transform);
    }
    backend.present()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_index() {
        for (i, id) in MeshId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_target_index() {
        assert_eq!(MeshId::Target0.target_index(), Some(0));
        assert_eq!(MeshId::Target2.target_index(), Some(2));
        assert_eq!(MeshId::Cannon.target_index(), None);
    }
}
