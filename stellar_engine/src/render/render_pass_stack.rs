/// Render pass stack - tag-ordered pass execution.
///
/// Passes are grouped by their ordering tag. A frame runs the tags in
/// declaration order (`PassTag::ALL`) and, within a tag, the passes in
/// registration order. Registration order across different tags has no
/// effect on execution order.

use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::{engine_debug, engine_error};
use super::frame_context::FrameContext;
use super::pass_tag::PassTag;
use super::render_pass::RenderPass;

const SOURCE: &str = "stellar::RenderPassStack";

pub struct RenderPassStack {
    passes: FxHashMap<PassTag, Vec<Box<dyn RenderPass>>>,
}

impl RenderPassStack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            passes: FxHashMap::default(),
        }
    }

    /// Register a pass under its own tag
    pub fn register_pass<P: RenderPass + 'static>(&mut self, pass: P) {
        self.register_boxed_pass(Box::new(pass));
    }

    /// Register an already boxed pass
    pub fn register_boxed_pass(&mut self, pass: Box<dyn RenderPass>) {
        let tag = pass.tag();
        engine_debug!(SOURCE, "Registered pass '{}' under {}", pass.name(), tag);
        self.passes.entry(tag).or_default().push(pass);
    }

    /// Run every registered pass once, in tag order.
    ///
    /// # Errors
    ///
    /// The first failing pass's error; passes after it do not run.
    pub fn render_passes(&mut self, ctx: &mut FrameContext<'_>) -> Result<()> {
        for tag in PassTag::ALL {
            let Some(passes) = self.passes.get_mut(&tag) else {
                continue;
            };

            for pass in passes.iter_mut() {
                if let Err(err) = pass.render(ctx) {
                    engine_error!(SOURCE, "Pass '{}' ({}) failed on frame {}: {}",
                        pass.name(), tag, ctx.frame().index, err);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Total number of registered passes
    pub fn pass_count(&self) -> usize {
        self.passes.values().map(|passes| passes.len()).sum()
    }

    /// Number of passes registered under `tag`
    pub fn pass_count_for(&self, tag: PassTag) -> usize {
        self.passes.get(&tag).map(|passes| passes.len()).unwrap_or(0)
    }

    /// Pass names in execution order
    pub fn pass_names(&self) -> Vec<&str> {
        PassTag::ALL
            .iter()
            .filter_map(|tag| self.passes.get(tag))
            .flat_map(|passes| passes.iter().map(|pass| pass.name()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pass_count() == 0
    }

    /// Remove all passes
    pub fn clear(&mut self) {
        self.passes.clear();
    }
}

impl Default for RenderPassStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "render_pass_stack_tests.rs"]
mod tests;
