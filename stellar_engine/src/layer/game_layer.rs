/// GameLayer - drives the active scene and renders it.
///
/// On attach it starts the active scene, on update it advances it (starting
/// a scene activated after attach), and on render it runs the frame
/// pipeline with the scene's main camera. A frame
/// without an active scene or without a main camera renders nothing.

use std::time::Duration;
use crate::camera::{Camera, Viewport};
use crate::error::Result;
use crate::scene::SceneState;
use crate::event::Event;
use crate::render::render_frame;
use crate::{engine_trace, engine_warn};
use super::layer::{EventResponse, Layer, LayerContext};

const SOURCE: &str = "stellar::GameLayer";

pub struct GameLayer {
    name: String,
    frames_rendered: u64,
}

impl GameLayer {
    pub fn new() -> Self {
        Self::with_name("GameLayer")
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            frames_rendered: 0,
        }
    }

    /// Frames that actually reached the pass stack
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl Default for GameLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer for GameLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_attach(&mut self, ctx: &mut LayerContext<'_>) -> Result<()> {
        match ctx.scenes.active_mut() {
            Some(scene) => scene.start(),
            None => engine_warn!(SOURCE, "Attached without an active scene"),
        }
        Ok(())
    }

    fn on_update(&mut self, ctx: &mut LayerContext<'_>, delta: Duration) -> Result<()> {
        let Some(scene) = ctx.scenes.active_mut() else {
            return Ok(());
        };
        // Activated after attach, or switched to; paused scenes stay paused
        if scene.state() == SceneState::Created {
            scene.start();
        }
        scene.update(delta)
    }

    fn on_render(&mut self, ctx: &mut LayerContext<'_>) -> Result<()> {
        let Some(scene) = ctx.scenes.active() else {
            return Ok(());
        };
        let Some(camera) = scene.main_camera() else {
            engine_trace!(SOURCE, "Scene '{}' has no main camera, frame skipped", scene.name());
            return Ok(());
        };

        render_frame(
            scene,
            camera,
            ctx.graphics_device,
            &mut *ctx.sprite_batch,
            &mut *ctx.render_passes,
            ctx.frame,
        )?;
        self.frames_rendered += 1;
        Ok(())
    }

    fn on_event(&mut self, ctx: &mut LayerContext<'_>, event: &Event) -> Result<EventResponse> {
        if let Event::Resized { width, height } = *event {
            if let Some(scene) = ctx.scenes.active_mut() {
                if let Some(entity) = scene.main_camera_entity() {
                    if let Some(camera) = scene.components_mut().get_mut::<Camera>(entity) {
                        camera.set_viewport(Viewport::new(width as f32, height as f32));
                    }
                }
            }
        }
        Ok(EventResponse::Ignored)
    }
}

#[cfg(test)]
#[path = "game_layer_tests.rs"]
mod tests;
