/// Scene systems.
///
/// A SceneSystem mutates a scene's components once per update, in the
/// order systems were added to the scene.

use std::time::Duration;
use crate::error::Result;
use super::component_store::ComponentStore;

/// Per-frame logic run by a Scene
pub trait SceneSystem: Send {
    /// Diagnostic name
    fn name(&self) -> &str;

    /// Advance the scene by `delta`
    fn update(&mut self, components: &mut ComponentStore, delta: Duration) -> Result<()>;
}

/// Closure-based system
pub struct FnSystem {
    name: String,
    callback: Box<dyn FnMut(&mut ComponentStore, Duration) -> Result<()> + Send>,
}

impl FnSystem {
    pub fn new<F>(name: &str, callback: F) -> Self
    where
        F: FnMut(&mut ComponentStore, Duration) -> Result<()> + Send + 'static,
    {
        Self {
            name: name.to_string(),
            callback: Box::new(callback),
        }
    }
}

impl SceneSystem for FnSystem {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, components: &mut ComponentStore, delta: Duration) -> Result<()> {
        (self.callback)(components, delta)
    }
}
