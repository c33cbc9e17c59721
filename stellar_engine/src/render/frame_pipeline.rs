/// Frame pipeline - one frame of the pass stack against a device.
///
/// Locks the device for the whole frame, then runs
/// `begin_frame` → passes → `end_frame`. Any failure propagates at once;
/// `end_frame` is not called for a failed frame.

use std::sync::{Arc, Mutex};
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::engine_trace;
use crate::graphics_device::{GraphicsDevice, SpriteBatch};
use crate::scene::Scene;
use super::frame_context::{FrameContext, FrameInfo};
use super::render_pass_stack::RenderPassStack;

const SOURCE: &str = "stellar::FramePipeline";

pub fn render_frame(
    scene: &Scene,
    camera: &Camera,
    graphics_device: &Arc<Mutex<dyn GraphicsDevice>>,
    sprite_batch: &mut dyn SpriteBatch,
    render_passes: &mut RenderPassStack,
    frame: FrameInfo,
) -> Result<()> {
    let mut device = graphics_device.lock()
        .map_err(|_| Error::BackendError("Graphics device lock poisoned".to_string()))?;

    device.begin_frame(camera)?;
    {
        let mut ctx = FrameContext::new(camera, scene, &mut *device, sprite_batch, frame);
        render_passes.render_passes(&mut ctx)?;
    }
    device.end_frame()?;

    engine_trace!(SOURCE, "Frame {} rendered ({} passes)", frame.index, render_passes.pass_count());
    Ok(())
}
