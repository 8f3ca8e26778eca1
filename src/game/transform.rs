//! Transform composition
//!
//! Builds the clip-space matrix for every drawable: camera view-projection,
//! then the world offset, then the object's own local placement. Local
//! coordinates put the range's lower-left corner at the origin.

use glam::{Mat4, Vec2, Vec3};

use crate::camera::{CameraConfig, SceneCamera};

use super::config::SceneLayout;

/// Cannon placement for one frame, in local range coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CannonPose {
    pub angle_degrees: f32,
    /// Mount translation, then rotation, then the barrel offset
    pub model: Mat4,
    /// Mount translation and rotation only
    pub mount: Mat4,
}

pub struct TransformComposer {
    camera: SceneCamera,
    layout: SceneLayout,
    view_projection: Mat4,
    world: Mat4,
}

impl TransformComposer {
    pub fn new(camera: CameraConfig, layout: SceneLayout, width: u32, height: u32) -> Self {
        let camera = SceneCamera::new(camera, width, height);
        Self {
            view_projection: camera.view_projection(),
            world: Mat4::from_translation(layout.world_offset),
            camera,
            layout,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.view_projection = self.camera.view_projection();
    }

    /// Refresh the cached view-projection at the start of a frame.
    pub fn begin_frame(&mut self) {
        self.view_projection = self.camera.view_projection();
    }

    pub fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    pub fn camera(&self) -> &SceneCamera {
        &self.camera
    }

    pub fn pose_cannon(&self, angle_degrees: f32) -> CannonPose {
        let mount = Mat4::from_translation(self.layout.cannon_mount)
            * Mat4::from_rotation_z(angle_degrees.to_radians());
        CannonPose {
            angle_degrees,
            model: mount * Mat4::from_translation(self.layout.barrel_offset),
            mount,
        }
    }

    /// Scene transform with no local placement (static decor).
    pub fn scene(&self) -> Mat4 {
        self.view_projection * self.world
    }

    pub fn cannon(&self, pose: &CannonPose) -> Mat4 {
        self.scene() * pose.model
    }

    /// The hub rides with the barrel.
    pub fn hub(&self, pose: &CannonPose) -> Mat4 {
        self.cannon(pose) * Mat4::from_translation(self.layout.hub_offset)
    }

    pub fn pivot(&self) -> Mat4 {
        self.scene() * Mat4::from_translation(self.layout.pivot_mount)
    }

    /// Transform for a shape centred at local point `position`.
    pub fn at(&self, position: Vec2) -> Mat4 {
        self.scene() * Mat4::from_translation(position.extend(0.0))
    }

    /// The ball resting in the barrel, rotated with it.
    pub fn resting_projectile(&self, pose: &CannonPose) -> Mat4 {
        self.scene() * pose.mount * Mat4::from_translation(self.layout.muzzle_offset)
    }

    /// Local position of the ball resting in the barrel.
    pub fn muzzle_position(&self, pose: &CannonPose) -> Vec2 {
        (pose.mount * Mat4::from_translation(self.layout.muzzle_offset))
            .transform_point3(Vec3::ZERO)
            .truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn composer() -> TransformComposer {
        TransformComposer::new(CameraConfig::default(), SceneLayout::default(), 800, 800)
    }

    #[test]
    fn test_muzzle_straight_up() {
        let composer = composer();
        let pose = composer.pose_cannon(0.0);
        let muzzle = composer.muzzle_position(&pose);
        assert!((muzzle - Vec2::new(1.0, 1.16)).length() < EPS);
    }

    #[test]
    fn test_muzzle_rotated_left() {
        let composer = composer();
        let pose = composer.pose_cannon(90.0);
        let muzzle = composer.muzzle_position(&pose);
        assert!((muzzle - Vec2::new(1.0 - 0.86, 0.3)).length() < EPS);
    }

    #[test]
    fn test_barrel_centre_follows_rotation() {
        let composer = composer();
        let pose = composer.pose_cannon(-90.0);
        let centre = pose.model.transform_point3(Vec3::ZERO);
        assert!((centre - Vec3::new(1.5, 0.3, 0.0)).length() < EPS);
    }

    #[test]
    fn test_hub_sits_on_mount() {
        let composer = composer();
        let pose = composer.pose_cannon(35.0);
        let expected = composer.scene().project_point3(Vec3::new(1.0, 0.3, 0.0));
        let hub = composer.hub(&pose).project_point3(Vec3::ZERO);
        assert!((hub - expected).length() < EPS);
    }

    #[test]
    fn test_resting_projectile_matches_muzzle() {
        let composer = composer();
        let pose = composer.pose_cannon(-40.0);
        let muzzle = composer.muzzle_position(&pose);
        let drawn = composer.resting_projectile(&pose).project_point3(Vec3::ZERO);
        let expected = composer.at(muzzle).project_point3(Vec3::ZERO);
        assert!((drawn - expected).length() < EPS);
    }

    #[test]
    fn test_scene_origin_maps_through_offset() {
        let composer = composer();
        let local = composer.at(Vec2::new(4.0, 4.0)).project_point3(Vec3::ZERO);
        // (4, 4) local is the world origin, straight ahead of the camera
        assert!(local.x.abs() < EPS);
        assert!(local.y.abs() < EPS);
    }
}
