/// Clear pass - fills the render target with a solid color.

use crate::error::Result;
use crate::graphics_device::Color;
use super::frame_context::FrameContext;
use super::pass_tag::PassTag;
use super::render_pass::RenderPass;

pub struct ClearPass {
    color: Color,
}

impl ClearPass {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl RenderPass for ClearPass {
    fn tag(&self) -> PassTag {
        PassTag::ClearScreen
    }

    fn name(&self) -> &str {
        "ClearPass"
    }

    fn render(&mut self, ctx: &mut FrameContext<'_>) -> Result<()> {
        ctx.graphics_device().clear(self.color)
    }
}
