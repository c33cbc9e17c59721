/*!
# Stellar Engine

Runtime core of the Stellar 2D engine.

This crate provides the backend-agnostic core every Stellar application runs
on. Graphics backends (Vulkan, wgpu, ...) plug in by implementing the
`GraphicsDevice` and `SpriteBatch` traits.

## Architecture

- **Engine**: Root context owning every subsystem and driving the frame loop
- **LayerStack**: Ordered layers receiving update, render and event hooks
- **RenderPassStack**: Render passes executed in a fixed tag order each frame
- **AssetManager**: Path-based asset loading with stable identifiers
- **SceneManager**: Named scenes of entities, components and systems
- **InspectorRegistry**: Component property views for editor tooling
*/

// Internal modules
mod config;
mod engine;
mod error;
pub mod asset;
pub mod camera;
pub mod editor;
pub mod event;
pub mod graphics_device;
pub mod layer;
pub mod log;
pub mod render;
pub mod scene;

// Main stellar namespace module
pub mod stellar {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine root and configuration
    pub use crate::engine::Engine;
    pub use crate::config::EngineConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Asset sub-module
    pub mod asset {
        pub use crate::asset::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Editor sub-module
    pub mod editor {
        pub use crate::editor::*;
    }

    // Event sub-module
    pub mod event {
        pub use crate::event::*;
    }

    // Graphics device sub-module
    pub mod graphics_device {
        pub use crate::graphics_device::*;
    }

    // Layer sub-module
    pub mod layer {
        pub use crate::layer::*;
    }

    // Render sub-module
    pub mod render {
        pub use crate::render::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
