/// Camera - 2D orthographic camera.
///
/// Screen space has its origin at the top-left corner of the viewport,
/// x to the right and y down. The camera position is the world point shown
/// at the center of the viewport.

use glam::{Mat4, Vec2, Vec3};

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// 2D camera (position, rotation, zoom over a viewport)
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec2,
    rotation: f32,
    zoom: f32,
    viewport: Viewport,
    near: f32,
    far: f32,
}

impl Camera {
    pub const DEFAULT_NEAR: f32 = -1000.0;
    pub const DEFAULT_FAR: f32 = 1000.0;

    /// Camera centered on the world origin, no rotation, zoom 1
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
            viewport,
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
        }
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Depth range (near, far)
    pub fn depth_range(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Move by a world-space offset
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    pub fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }

    /// Set the zoom factor. Non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom > 0.0 {
            self.zoom = zoom;
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_depth_range(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    // ===== TRANSFORMS =====

    /// World → screen-pixel transform
    pub fn view_matrix(&self) -> Mat4 {
        let center = self.viewport.center();
        Mat4::from_translation(center.extend(0.0))
            * Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0))
            * Mat4::from_rotation_z(-self.rotation)
            * Mat4::from_translation((-self.position).extend(0.0))
    }

    /// Screen-pixel → clip-space transform
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            0.0,
            self.viewport.width,
            self.viewport.height,
            0.0,
            self.near,
            self.far,
        )
    }

    /// Combined view-projection matrix (projection * view)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.view_matrix().transform_point3(world.extend(0.0)).truncate()
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.view_matrix().inverse().transform_point3(screen.extend(0.0)).truncate()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Viewport::new(800.0, 600.0))
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
