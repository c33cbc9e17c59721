/// Render pass trait and the closure-based pass.
///
/// A pass belongs to exactly one ordering tag for its whole lifetime. It
/// reads the scene through the FrameContext and writes only through the
/// graphics device and the sprite batch.

use crate::error::Result;
use super::frame_context::FrameContext;
use super::pass_tag::PassTag;

pub trait RenderPass: Send {
    /// Ordering tag (queried once, at registration)
    fn tag(&self) -> PassTag;

    /// Diagnostic name
    fn name(&self) -> &str;

    /// Record this pass for the current frame
    fn render(&mut self, ctx: &mut FrameContext<'_>) -> Result<()>;
}

/// Custom pass (closure-based)
///
/// Executes a user-provided closure with full access to the frame context.
pub struct FnPass {
    tag: PassTag,
    name: String,
    callback: Box<dyn for<'a> FnMut(&mut FrameContext<'a>) -> Result<()> + Send>,
}

impl FnPass {
    pub fn new<F>(tag: PassTag, name: &str, callback: F) -> Self
    where
        F: for<'a> FnMut(&mut FrameContext<'a>) -> Result<()> + Send + 'static,
    {
        Self {
            tag,
            name: name.to_string(),
            callback: Box::new(callback),
        }
    }
}

impl RenderPass for FnPass {
    fn tag(&self) -> PassTag {
        self.tag
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn render(&mut self, ctx: &mut FrameContext<'_>) -> Result<()> {
        (self.callback)(ctx)
    }
}
