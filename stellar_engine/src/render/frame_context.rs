/// Per-frame render context handed to every pass.
///
/// Holds borrowed references only, so a pass cannot keep any of it past
/// the frame.

use std::time::Duration;
use crate::camera::Camera;
use crate::graphics_device::{GraphicsDevice, SpriteBatch};
use crate::scene::{ComponentStore, Scene};

/// Frame counter and elapsed time since the previous frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInfo {
    pub index: u64,
    pub delta: Duration,
}

impl FrameInfo {
    pub fn new(index: u64, delta: Duration) -> Self {
        Self { index, delta }
    }

    /// Delta in seconds
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

pub struct FrameContext<'a> {
    camera: &'a Camera,
    scene: &'a Scene,
    graphics_device: &'a mut dyn GraphicsDevice,
    sprite_batch: &'a mut dyn SpriteBatch,
    frame: FrameInfo,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        camera: &'a Camera,
        scene: &'a Scene,
        graphics_device: &'a mut dyn GraphicsDevice,
        sprite_batch: &'a mut dyn SpriteBatch,
        frame: FrameInfo,
    ) -> Self {
        Self { camera, scene, graphics_device, sprite_batch, frame }
    }

    pub fn camera(&self) -> &'a Camera {
        self.camera
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Read-only component store of the scene being rendered
    pub fn components(&self) -> &'a ComponentStore {
        self.scene.components()
    }

    pub fn graphics_device(&mut self) -> &mut dyn GraphicsDevice {
        &mut *self.graphics_device
    }

    pub fn sprite_batch(&mut self) -> &mut dyn SpriteBatch {
        &mut *self.sprite_batch
    }

    pub fn frame(&self) -> FrameInfo {
        self.frame
    }
}
