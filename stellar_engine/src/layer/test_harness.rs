/// Engine services for layer unit tests, backed by the mock device.

use std::path::Path;
use std::sync::{Arc, Mutex, RwLock};
use crate::asset::{AssetFactory, AssetManager, AssetRegistry};
use crate::graphics_device::mock_graphics_device::{CallLog, DeviceCall, MockGraphicsDevice, MockSpriteBatch};
use crate::graphics_device::{GraphicsDevice, SpriteBatch};
use crate::render::{FrameInfo, RenderPassStack};
use crate::scene::SceneManager;
use super::layer::LayerContext;

pub struct LayerHarness {
    pub scenes: SceneManager,
    pub render_passes: RenderPassStack,
    pub device: Arc<Mutex<dyn GraphicsDevice>>,
    pub batch: Box<dyn SpriteBatch>,
    pub assets: AssetManager,
    pub calls: CallLog,
}

impl LayerHarness {
    pub fn new() -> Self {
        let device = MockGraphicsDevice::new();
        let calls = device.call_log();
        let batch = MockSpriteBatch::new(device.call_log());
        let assets = AssetManager::new(
            Arc::new(Mutex::new(AssetRegistry::new())),
            Arc::new(RwLock::new(AssetFactory::new())),
            Path::new("content"),
        );

        Self {
            scenes: SceneManager::new(),
            render_passes: RenderPassStack::new(),
            device: Arc::new(Mutex::new(device)),
            batch: Box::new(batch),
            assets,
            calls,
        }
    }

    pub fn ctx(&mut self) -> LayerContext<'_> {
        LayerContext {
            scenes: &mut self.scenes,
            render_passes: &mut self.render_passes,
            graphics_device: &self.device,
            sprite_batch: &mut *self.batch,
            assets: &self.assets,
            frame: FrameInfo::default(),
        }
    }

    pub fn device_calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().unwrap().clone()
    }
}
