/// Ordering tags for render passes.
///
/// Tags are compared by declaration order: every pass of an earlier tag
/// runs before any pass of a later tag, within a frame.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PassTag {
    /// Clear the render target
    ClearScreen,
    /// Scene content (sprites, tiles, ...)
    World,
    /// Screen-space interface
    Ui,
    /// Full-frame effects applied last
    PostProcess,
}

impl PassTag {
    /// All tags in execution order
    pub const ALL: [PassTag; 4] = [
        PassTag::ClearScreen,
        PassTag::World,
        PassTag::Ui,
        PassTag::PostProcess,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PassTag::ClearScreen => "ClearScreen",
            PassTag::World => "World",
            PassTag::Ui => "Ui",
            PassTag::PostProcess => "PostProcess",
        }
    }
}

impl fmt::Display for PassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
