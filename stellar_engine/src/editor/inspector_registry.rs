/// Inspector registry - per-component property views for editor tooling.
///
/// Component types are registered explicitly with a describe function that
/// flattens a component into named properties. No widgets live here: the
/// registry only produces data a UI can display.

use std::any::TypeId;
use std::marker::PhantomData;
use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;
use crate::asset::AssetId;
use crate::camera::Camera;
use crate::engine_warn;
use crate::graphics_device::Color;
use crate::scene::{Component, ComponentStore, Entity, SpriteRenderer, Transform};

const SOURCE: &str = "stellar::InspectorRegistry";

/// Displayable property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Color(Color),
    Text(String),
    Asset(AssetId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: &'static str,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: &'static str, value: PropertyValue) -> Self {
        Self { name, value }
    }
}

/// Properties of one component of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    pub component: String,
    pub properties: Vec<Property>,
}

trait ComponentInspector: Send + Sync {
    fn display_name(&self) -> &str;
    fn inspect(&self, store: &ComponentStore, entity: Entity) -> Option<Vec<Property>>;
}

type DescribeFn<T> = Box<dyn Fn(&T) -> Vec<Property> + Send + Sync>;

struct TypedInspector<T> {
    display_name: String,
    describe: DescribeFn<T>,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Component> ComponentInspector for TypedInspector<T> {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn inspect(&self, store: &ComponentStore, entity: Entity) -> Option<Vec<Property>> {
        store.get::<T>(entity).map(|component| (self.describe)(component))
    }
}

pub struct InspectorRegistry {
    inspectors: FxHashMap<TypeId, Box<dyn ComponentInspector>>,
    /// Registration order, used for display
    order: Vec<TypeId>,
}

impl InspectorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            inspectors: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Register the inspector of component type `T`.
    ///
    /// Registering a type again replaces its inspector but keeps its
    /// display position.
    pub fn register<T, F>(&mut self, display_name: &str, describe: F)
    where
        T: Component,
        F: Fn(&T) -> Vec<Property> + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<T>();
        let inspector = TypedInspector::<T> {
            display_name: display_name.to_string(),
            describe: Box::new(describe),
            _marker: PhantomData,
        };

        if self.inspectors.insert(type_id, Box::new(inspector)).is_some() {
            engine_warn!(SOURCE, "Inspector for '{}' replaced", display_name);
        } else {
            self.order.push(type_id);
        }
    }

    pub fn has_inspector<T: Component>(&self) -> bool {
        self.inspectors.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.inspectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inspectors.is_empty()
    }

    /// Display names in registration order
    pub fn display_names(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter_map(|type_id| self.inspectors.get(type_id))
            .map(|inspector| inspector.display_name())
            .collect()
    }

    /// Views of every inspectable component of `entity`, in registration order
    pub fn inspect_entity(&self, store: &ComponentStore, entity: Entity) -> Vec<ComponentView> {
        self.order
            .iter()
            .filter_map(|type_id| self.inspectors.get(type_id))
            .filter_map(|inspector| {
                inspector.inspect(store, entity).map(|properties| ComponentView {
                    component: inspector.display_name().to_string(),
                    properties,
                })
            })
            .collect()
    }
}

impl Default for InspectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register inspectors for the built-in components
pub fn register_builtin_inspectors(registry: &mut InspectorRegistry) {
    registry.register::<Transform, _>("Transform", |transform| vec![
        Property::new("position", PropertyValue::Vec3(transform.position)),
        Property::new("rotation", PropertyValue::Float(transform.rotation)),
        Property::new("scale", PropertyValue::Vec2(transform.scale)),
    ]);

    registry.register::<SpriteRenderer, _>("Sprite Renderer", |sprite| vec![
        Property::new("texture", PropertyValue::Asset(sprite.texture)),
        Property::new("color", PropertyValue::Color(sprite.color)),
        Property::new("layer_depth", PropertyValue::Float(sprite.layer_depth)),
        Property::new("origin", PropertyValue::Vec2(sprite.origin)),
        Property::new("visible", PropertyValue::Bool(sprite.visible)),
    ]);

    registry.register::<Camera, _>("Camera", |camera| vec![
        Property::new("position", PropertyValue::Vec2(camera.position())),
        Property::new("rotation", PropertyValue::Float(camera.rotation())),
        Property::new("zoom", PropertyValue::Float(camera.zoom())),
        Property::new("viewport", PropertyValue::Vec2(Vec2::new(
            camera.viewport().width,
            camera.viewport().height,
        ))),
    ]);
}

#[cfg(test)]
#[path = "inspector_registry_tests.rs"]
mod tests;
