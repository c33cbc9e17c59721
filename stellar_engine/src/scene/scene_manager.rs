//! Central scene manager for the engine.
//!
//! Manages named scenes and tracks which one is active. The active scene is
//! the one the game layer updates and renders.

use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::{engine_bail, engine_info};
use super::scene::Scene;

const SOURCE: &str = "stellar::SceneManager";

pub struct SceneManager {
    scenes: FxHashMap<String, Scene>,
    active: Option<String>,
}

impl SceneManager {
    /// Create a new empty scene manager
    pub fn new() -> Self {
        Self {
            scenes: FxHashMap::default(),
            active: None,
        }
    }

    /// Create a new named scene
    ///
    /// # Errors
    ///
    /// Returns an error if a scene with the same name already exists.
    pub fn create_scene(&mut self, name: &str) -> Result<&mut Scene> {
        if self.scenes.contains_key(name) {
            engine_bail!(SOURCE, "Scene '{}' already exists", name);
        }

        Ok(self.scenes
            .entry(name.to_string())
            .or_insert_with(|| Scene::new(name)))
    }

    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    pub fn scene_mut(&mut self, name: &str) -> Option<&mut Scene> {
        self.scenes.get_mut(name)
    }

    /// Remove a scene by name
    ///
    /// Removing the active scene leaves no scene active.
    pub fn remove_scene(&mut self, name: &str) -> Option<Scene> {
        let removed = self.scenes.remove(name)?;
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        Some(removed)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// All scene names (unordered)
    pub fn scene_names(&self) -> Vec<&str> {
        self.scenes.keys().map(|k| k.as_str()).collect()
    }

    // ===== ACTIVE SCENE =====

    /// Make `name` the active scene
    ///
    /// # Errors
    ///
    /// Returns an error if no scene has that name.
    pub fn set_active(&mut self, name: &str) -> Result<()> {
        if !self.scenes.contains_key(name) {
            engine_bail!(SOURCE, "Cannot activate unknown scene '{}'", name);
        }
        engine_info!(SOURCE, "Active scene: '{}'", name);
        self.active = Some(name.to_string());
        Ok(())
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&Scene> {
        self.scenes.get(self.active.as_deref()?)
    }

    pub fn active_mut(&mut self) -> Option<&mut Scene> {
        let name = self.active.as_deref()?;
        self.scenes.get_mut(name)
    }

    /// Remove all scenes
    pub fn clear(&mut self) {
        self.scenes.clear();
        self.active = None;
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
