//! Render module
//!
//! Tag-ordered render passes, the per-frame context they receive, the
//! built-in clear and sprite passes, and the frame pipeline that drives
//! them against a graphics device.

mod clear_pass;
mod frame_context;
mod frame_pipeline;
mod pass_tag;
mod render_pass;
mod render_pass_stack;
mod sprite_pass;

pub use clear_pass::ClearPass;
pub use frame_context::{FrameContext, FrameInfo};
pub use frame_pipeline::render_frame;
pub use pass_tag::PassTag;
pub use render_pass::{FnPass, RenderPass};
pub use render_pass_stack::RenderPassStack;
pub use sprite_pass::SpritePass;
