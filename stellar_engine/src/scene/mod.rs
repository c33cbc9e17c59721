//! Scene management module
//!
//! Provides scenes, the entity/component store, built-in components and
//! per-frame scene systems.

mod component_store;
mod components;
mod scene;
mod scene_manager;
mod scene_system;

pub use component_store::{Component, ComponentStore, Entity};
pub use components::{SpriteRenderer, Transform};
pub use scene::{Scene, SceneState};
pub use scene_manager::SceneManager;
pub use scene_system::{FnSystem, SceneSystem};
