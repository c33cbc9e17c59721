/// Layer trait and the context handed to layer hooks.
///
/// A layer goes through `Created → Attached → Detached`. The LayerStack
/// calls `on_attach` exactly once when the layer is pushed and `on_detach`
/// exactly once when it leaves the stack; the other hooks only run while
/// the layer is attached.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use crate::asset::AssetManager;
use crate::error::Result;
use crate::event::Event;
use crate::graphics_device::{GraphicsDevice, SpriteBatch};
use crate::render::{FrameInfo, RenderPassStack};
use crate::scene::SceneManager;

/// Engine services available to layer hooks
pub struct LayerContext<'a> {
    pub scenes: &'a mut SceneManager,
    pub render_passes: &'a mut RenderPassStack,
    pub graphics_device: &'a Arc<Mutex<dyn GraphicsDevice>>,
    pub sprite_batch: &'a mut dyn SpriteBatch,
    pub assets: &'a AssetManager,
    pub frame: FrameInfo,
}

/// Answer of a layer to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Let layers below see the event
    Ignored,
    /// Stop propagation
    Consumed,
}

/// A unit of update/render/event logic in the LayerStack
///
/// Every hook has a no-op default.
pub trait Layer: Send {
    /// Diagnostic name
    fn name(&self) -> &str;

    fn on_attach(&mut self, _ctx: &mut LayerContext<'_>) -> Result<()> {
        Ok(())
    }

    fn on_detach(&mut self, _ctx: &mut LayerContext<'_>) -> Result<()> {
        Ok(())
    }

    fn on_update(&mut self, _ctx: &mut LayerContext<'_>, _delta: Duration) -> Result<()> {
        Ok(())
    }

    fn on_render(&mut self, _ctx: &mut LayerContext<'_>) -> Result<()> {
        Ok(())
    }

    fn on_event(&mut self, _ctx: &mut LayerContext<'_>, _event: &Event) -> Result<EventResponse> {
        Ok(EventResponse::Ignored)
    }
}
