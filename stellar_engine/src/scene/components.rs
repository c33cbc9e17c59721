/// Built-in components read by the render passes.

use glam::{Vec2, Vec3};
use crate::asset::AssetId;
use crate::graphics_device::{Color, Rect};

/// 2D transform. `position.z` is the per-entity depth used for sorting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation in radians
    pub rotation: f32,
    pub scale: Vec2,
}

impl Transform {
    pub fn from_xy(x: f32, y: f32) -> Self {
        Self {
            position: Vec3::new(x, y, 0.0),
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.position.z = depth;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

/// Draws a texture at the entity's transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRenderer {
    pub texture: AssetId,
    pub color: Color,
    /// Draw layer; lower values draw first
    pub layer_depth: f32,
    /// Texture region; `None` draws the whole texture
    pub source: Option<Rect>,
    /// Pivot in normalized sprite coordinates
    pub origin: Vec2,
    pub visible: bool,
}

impl SpriteRenderer {
    pub fn new(texture: AssetId) -> Self {
        Self {
            texture,
            color: Color::WHITE,
            layer_depth: 0.0,
            source: None,
            origin: Vec2::new(0.5, 0.5),
            visible: true,
        }
    }

    pub fn with_layer_depth(mut self, layer_depth: f32) -> Self {
        self.layer_depth = layer_depth;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
