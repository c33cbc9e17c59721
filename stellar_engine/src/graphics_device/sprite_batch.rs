/// SpriteBatch trait - batched textured-quad submission

use glam::{Mat4, Vec2};
use crate::asset::AssetId;
use crate::error::Result;
use super::graphics_device::{Color, Rect};

/// One sprite draw, in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    /// Texture identity (resolved by the backend)
    pub texture: AssetId,
    pub position: Vec2,
    /// Per-entity depth (transform z)
    pub depth: f32,
    /// Layer the sprite belongs to; lower layers draw first
    pub layer_depth: f32,
    /// Rotation in radians
    pub rotation: f32,
    pub scale: Vec2,
    /// Pivot in normalized sprite coordinates
    pub origin: Vec2,
    /// Texture region; `None` draws the whole texture
    pub source: Option<Rect>,
    pub color: Color,
}

/// Sprite batch
///
/// Draws between `begin` and `end` are submitted in call order.
pub trait SpriteBatch: Send {
    /// Open a batch scope with the given view-projection transform
    fn begin(&mut self, view_projection: Mat4) -> Result<()>;

    /// Queue one sprite
    fn draw(&mut self, sprite: &SpriteDraw) -> Result<()>;

    /// Close the scope and submit queued sprites
    fn end(&mut self) -> Result<()>;
}
