/// Scene - a named world of entities, components and systems.
///
/// Scenes are created through the SceneManager. A scene only advances
/// while it is `Running`; its systems run in insertion order on every
/// update.

use std::time::Duration;
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::{engine_debug, engine_error};
use super::component_store::{ComponentStore, Entity};
use super::scene_system::SceneSystem;

const SOURCE: &str = "stellar::Scene";

/// Scene lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    /// Created, never started
    Created,
    Running,
    Paused,
}

pub struct Scene {
    name: String,
    state: SceneState,
    components: ComponentStore,
    systems: Vec<Box<dyn SceneSystem>>,
    /// Entity carrying the Camera component used to render the scene
    main_camera: Option<Entity>,
    elapsed: Duration,
    update_count: u64,
}

impl Scene {
    /// Create a new empty scene (internal: only via SceneManager)
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: SceneState::Created,
            components: ComponentStore::new(),
            systems: Vec::new(),
            main_camera: None,
            elapsed: Duration::ZERO,
            update_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SceneState::Running
    }

    // ===== LIFECYCLE =====

    /// Start (or restart) the scene. Starting a running scene is a no-op.
    pub fn start(&mut self) {
        if self.state != SceneState::Running {
            engine_debug!(SOURCE, "Scene '{}' started", self.name);
            self.state = SceneState::Running;
        }
    }

    /// Pause a running scene
    pub fn pause(&mut self) {
        if self.state == SceneState::Running {
            self.state = SceneState::Paused;
        }
    }

    /// Resume a paused scene
    pub fn resume(&mut self) {
        if self.state == SceneState::Paused {
            self.state = SceneState::Running;
        }
    }

    /// Run every system once. Does nothing unless the scene is running.
    ///
    /// # Errors
    ///
    /// The first failing system's error; later systems do not run.
    pub fn update(&mut self, delta: Duration) -> Result<()> {
        if self.state != SceneState::Running {
            return Ok(());
        }

        for system in self.systems.iter_mut() {
            if let Err(err) = system.update(&mut self.components, delta) {
                engine_error!(SOURCE, "System '{}' failed in scene '{}': {}",
                    system.name(), self.name, err);
                return Err(err);
            }
        }

        self.elapsed += delta;
        self.update_count += 1;
        Ok(())
    }

    /// Total time advanced while running
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of completed updates
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    // ===== SYSTEMS =====

    /// Append a system (runs after those already added)
    pub fn add_system<S: SceneSystem + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|system| system.name()).collect()
    }

    // ===== COMPONENTS =====

    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut ComponentStore {
        &mut self.components
    }

    // ===== CAMERA =====

    /// Use `entity` as the scene's main camera.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` if the entity has no Camera component.
    pub fn set_main_camera(&mut self, entity: Entity) -> Result<()> {
        if !self.components.has::<Camera>(entity) {
            return Err(Error::InvalidResource(format!(
                "Entity {:?} has no Camera component", entity
            )));
        }
        self.main_camera = Some(entity);
        Ok(())
    }

    pub fn clear_main_camera(&mut self) {
        self.main_camera = None;
    }

    pub fn main_camera_entity(&self) -> Option<Entity> {
        self.main_camera
    }

    /// The main camera, if its entity is still alive, active and has a Camera
    pub fn main_camera(&self) -> Option<&Camera> {
        let entity = self.main_camera?;
        if !self.components.is_active(entity) {
            return None;
        }
        self.components.get::<Camera>(entity)
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
