/// GraphicsDevice trait - the drawing surface the engine renders into
///
/// A backend (Vulkan, wgpu, software, ...) implements this trait. The engine
/// owns the device behind an `Arc<Mutex<dyn GraphicsDevice>>` and drives one
/// `begin_frame` / `end_frame` pair per rendered frame.

use crate::error::Result;
use crate::camera::Camera;
use super::sprite_batch::SpriteBatch;

/// RGBA color, linear components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const CORNFLOWER_BLUE: Color = Color::rgba(0.392, 0.584, 0.929, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Same color with another alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Axis-aligned rectangle in pixels (source region of a texture)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Main graphics device trait
///
/// All methods are called from the thread that owns the engine.
pub trait GraphicsDevice: Send {
    /// Start a frame seen through `camera`
    fn begin_frame(&mut self, camera: &Camera) -> Result<()>;

    /// Clear the whole render target
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Finish and present the frame
    fn end_frame(&mut self) -> Result<()>;

    /// Create a sprite batch recording into this device
    fn create_sprite_batch(&mut self) -> Result<Box<dyn SpriteBatch>>;

    /// Notify the device that the window surface changed size
    fn resize(&mut self, width: u32, height: u32);
}
