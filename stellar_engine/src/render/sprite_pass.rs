/// Sprite pass - draws every visible SpriteRenderer of the scene.
///
/// Sprites are ordered by `layer_depth` ascending, then by transform depth
/// (`position.z`) ascending. The sort is stable, so sprites with equal keys
/// keep component-store order. Entities without a Transform are drawn at
/// the default transform.

use glam::Vec2;
use crate::error::Result;
use crate::graphics_device::SpriteDraw;
use crate::scene::{SpriteRenderer, Transform};
use super::frame_context::FrameContext;
use super::pass_tag::PassTag;
use super::render_pass::RenderPass;

pub struct SpritePass {
    /// Draw list, reused across frames
    queue: Vec<SpriteDraw>,
}

impl SpritePass {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Sprites drawn on the last rendered frame
    pub fn last_draw_count(&self) -> usize {
        self.queue.len()
    }

    fn collect(&mut self, ctx: &FrameContext<'_>) {
        self.queue.clear();
        let components = ctx.components();

        for (entity, sprite) in components.get_all::<SpriteRenderer>() {
            if !sprite.visible {
                continue;
            }
            let transform = components.get::<Transform>(entity).copied().unwrap_or_default();
            self.queue.push(SpriteDraw {
                texture: sprite.texture,
                position: Vec2::new(transform.position.x, transform.position.y),
                depth: transform.position.z,
                layer_depth: sprite.layer_depth,
                rotation: transform.rotation,
                scale: transform.scale,
                origin: sprite.origin,
                source: sprite.source,
                color: sprite.color,
            });
        }

        self.queue.sort_by(|a, b| {
            a.layer_depth.total_cmp(&b.layer_depth)
                .then(a.depth.total_cmp(&b.depth))
        });
    }
}

impl Default for SpritePass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for SpritePass {
    fn tag(&self) -> PassTag {
        PassTag::World
    }

    fn name(&self) -> &str {
        "SpritePass"
    }

    fn render(&mut self, ctx: &mut FrameContext<'_>) -> Result<()> {
        self.collect(ctx);
        if self.queue.is_empty() {
            return Ok(());
        }

        let view_projection = ctx.camera().view_projection_matrix();
        let batch = ctx.sprite_batch();
        batch.begin(view_projection)?;
        for sprite in &self.queue {
            batch.draw(sprite)?;
        }
        batch.end()
    }
}

#[cfg(test)]
#[path = "sprite_pass_tests.rs"]
mod tests;
