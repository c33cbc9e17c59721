/// ComponentStore - entities and their typed components.
///
/// Entities are SlotMap keys, so a despawned entity's key never aliases a
/// new one. Each component type lives in its own column
/// (`SecondaryMap<Entity, T>`) keyed by `TypeId`.
///
/// Queries through `get_all` only return components of *active* entities;
/// per-entity accessors (`get`, `get_mut`) ignore the active flag.

use std::any::{Any, TypeId};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use crate::error::{Error, Result};

new_key_type! {
    /// Stable key for an entity in a ComponentStore
    pub struct Entity;
}

/// Marker for types storable as components
pub trait Component: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Component for T {}

struct EntityRecord {
    name: Option<String>,
    active: bool,
}

/// Type-erased column operations
trait ComponentColumn: Send + Sync {
    fn remove_entity(&mut self, entity: Entity);
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ComponentColumn for SecondaryMap<Entity, T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }

    fn len(&self) -> usize {
        SecondaryMap::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub struct ComponentStore {
    entities: SlotMap<Entity, EntityRecord>,
    columns: FxHashMap<TypeId, Box<dyn ComponentColumn>>,
}

impl ComponentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            columns: FxHashMap::default(),
        }
    }

    // ===== ENTITIES =====

    /// Create an active, unnamed entity
    pub fn spawn(&mut self) -> Entity {
        self.entities.insert(EntityRecord { name: None, active: true })
    }

    /// Create an active entity with a diagnostic name
    pub fn spawn_named(&mut self, name: &str) -> Entity {
        self.entities.insert(EntityRecord {
            name: Some(name.to_string()),
            active: true,
        })
    }

    /// Remove an entity and all its components
    ///
    /// Returns false if the entity was not alive.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if self.entities.remove(entity).is_none() {
            return false;
        }
        for column in self.columns.values_mut() {
            column.remove_entity(entity);
        }
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    pub fn name(&self, entity: Entity) -> Option<&str> {
        self.entities.get(entity)?.name.as_deref()
    }

    /// First entity carrying `name`
    pub fn find_by_name(&self, name: &str) -> Option<Entity> {
        self.entities
            .iter()
            .find(|(_, record)| record.name.as_deref() == Some(name))
            .map(|(entity, _)| entity)
    }

    /// Enable or disable an entity for queries
    pub fn set_active(&mut self, entity: Entity, active: bool) -> Result<()> {
        let record = self.entities.get_mut(entity)
            .ok_or_else(|| Error::InvalidResource(format!("Entity {:?} is not alive", entity)))?;
        record.active = active;
        Ok(())
    }

    /// Whether the entity is alive and active
    pub fn is_active(&self, entity: Entity) -> bool {
        self.entities.get(entity).is_some_and(|record| record.active)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// All live entities
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }

    // ===== COMPONENTS =====

    /// Attach a component, returning the previous one of the same type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` if the entity is not alive.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) -> Result<Option<T>> {
        if !self.entities.contains_key(entity) {
            return Err(Error::InvalidResource(format!(
                "Cannot add {} to dead entity {:?}", std::any::type_name::<T>(), entity
            )));
        }

        let column = self.columns
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(SecondaryMap::<Entity, T>::new()));

        match column.as_any_mut().downcast_mut::<SecondaryMap<Entity, T>>() {
            Some(column) => Ok(column.insert(entity, component)),
            None => Err(Error::InvalidResource(format!(
                "Column type mismatch for {}", std::any::type_name::<T>()
            ))),
        }
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.column::<T>()?.get(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.column_mut::<T>()?.get_mut(entity)
    }

    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.get::<T>(entity).is_some()
    }

    /// Detach a component, returning it
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.column_mut::<T>()?.remove(entity)
    }

    /// All components of type `T` on active entities
    pub fn get_all<T: Component>(&self) -> Vec<(Entity, &T)> {
        let Some(column) = self.column::<T>() else {
            return Vec::new();
        };
        column
            .iter()
            .filter(|(entity, _)| self.is_active(*entity))
            .collect()
    }

    /// Mutable variant of `get_all`
    pub fn get_all_mut<T: Component>(&mut self) -> Vec<(Entity, &mut T)> {
        let entities = &self.entities;
        let Some(column) = self.columns
            .get_mut(&TypeId::of::<T>())
            .and_then(|column| column.as_any_mut().downcast_mut::<SecondaryMap<Entity, T>>())
        else {
            return Vec::new();
        };
        column
            .iter_mut()
            .filter(|(entity, _)| entities.get(*entity).is_some_and(|record| record.active))
            .collect()
    }

    /// Number of components of type `T` (active or not)
    pub fn count<T: Component>(&self) -> usize {
        self.columns
            .get(&TypeId::of::<T>())
            .map(|column| column.len())
            .unwrap_or(0)
    }

    /// Remove every entity and component
    pub fn clear(&mut self) {
        self.entities.clear();
        self.columns.clear();
    }

    fn column<T: Component>(&self) -> Option<&SecondaryMap<Entity, T>> {
        self.columns
            .get(&TypeId::of::<T>())?
            .as_any()
            .downcast_ref::<SecondaryMap<Entity, T>>()
    }

    fn column_mut<T: Component>(&mut self) -> Option<&mut SecondaryMap<Entity, T>> {
        self.columns
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<SecondaryMap<Entity, T>>()
    }
}

impl Default for ComponentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "component_store_tests.rs"]
mod tests;
