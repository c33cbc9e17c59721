/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Every call is appended to a shared call log so tests can assert on the
/// exact sequence of device and batch operations in a frame.

use std::sync::{Arc, Mutex};
use glam::Mat4;
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, SpriteBatch, SpriteDraw, Color};

/// A recorded device or batch call
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    BeginFrame,
    Clear(Color),
    EndFrame,
    Resize(u32, u32),
    BatchBegin,
    Draw(SpriteDraw),
    BatchEnd,
}

pub type CallLog = Arc<Mutex<Vec<DeviceCall>>>;

// ============================================================================
// Mock Sprite Batch
// ============================================================================

pub struct MockSpriteBatch {
    pub calls: CallLog,
    pub last_view_projection: Option<Mat4>,
    open: bool,
}

impl MockSpriteBatch {
    pub fn new(calls: CallLog) -> Self {
        Self {
            calls,
            last_view_projection: None,
            open: false,
        }
    }

    fn record(&self, call: DeviceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SpriteBatch for MockSpriteBatch {
    fn begin(&mut self, view_projection: Mat4) -> Result<()> {
        if self.open {
            return Err(Error::RenderFailed("Sprite batch already open".to_string()));
        }
        self.open = true;
        self.last_view_projection = Some(view_projection);
        self.record(DeviceCall::BatchBegin);
        Ok(())
    }

    fn draw(&mut self, sprite: &SpriteDraw) -> Result<()> {
        if !self.open {
            return Err(Error::RenderFailed("Draw outside a batch scope".to_string()));
        }
        self.record(DeviceCall::Draw(*sprite));
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        if !self.open {
            return Err(Error::RenderFailed("Sprite batch not open".to_string()));
        }
        self.open = false;
        self.record(DeviceCall::BatchEnd);
        Ok(())
    }
}

// ============================================================================
// Mock Graphics Device
// ============================================================================

pub struct MockGraphicsDevice {
    pub calls: CallLog,
    pub width: u32,
    pub height: u32,
    pub fail_begin_frame: bool,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            width: 800,
            height: 600,
            fail_begin_frame: false,
        }
    }

    /// Shared handle on the call log
    pub fn call_log(&self) -> CallLog {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: DeviceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn begin_frame(&mut self, _camera: &Camera) -> Result<()> {
        if self.fail_begin_frame {
            return Err(Error::BackendError("Mock device lost".to_string()));
        }
        self.record(DeviceCall::BeginFrame);
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.record(DeviceCall::Clear(color));
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.record(DeviceCall::EndFrame);
        Ok(())
    }

    fn create_sprite_batch(&mut self) -> Result<Box<dyn SpriteBatch>> {
        Ok(Box::new(MockSpriteBatch::new(self.call_log())))
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.record(DeviceCall::Resize(width, height));
    }
}
