/// Asset factory - explicit type → constructor registration.
///
/// Asset types register a constructor once at startup. The constructor may
/// be private to the asset's module, so types whose fresh (unloaded) state
/// is not meant for general callers can still be built by the engine.

use std::any::{Any, TypeId};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::{engine_debug, engine_warn};
use super::asset::Asset;

const SOURCE: &str = "stellar::AssetFactory";

type AssetConstructor = Box<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

struct FactoryEntry {
    type_name: &'static str,
    construct: AssetConstructor,
}

/// Constructor table keyed by asset type
pub struct AssetFactory {
    constructors: FxHashMap<TypeId, FactoryEntry>,
}

impl AssetFactory {
    /// Create a new empty factory
    pub fn new() -> Self {
        Self {
            constructors: FxHashMap::default(),
        }
    }

    /// Register the constructor of an asset type.
    ///
    /// Registering a type twice replaces the previous constructor.
    pub fn register<T, F>(&mut self, constructor: F)
    where
        T: Asset,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<T>();
        let entry = FactoryEntry {
            type_name,
            construct: Box::new(move || Box::new(constructor()) as Box<dyn Any + Send + Sync>),
        };

        if self.constructors.insert(TypeId::of::<T>(), entry).is_some() {
            engine_warn!(SOURCE, "Constructor for {} replaced", type_name);
        } else {
            engine_debug!(SOURCE, "Registered asset type {}", type_name);
        }
    }

    /// Register `T::default` as the constructor of `T`
    pub fn register_default<T: Asset + Default>(&mut self) {
        self.register::<T, _>(T::default);
    }

    /// Build a fresh, unloaded instance of `T`.
    ///
    /// # Errors
    ///
    /// `ConstructionFailed` if `T` was never registered.
    pub fn construct<T: Asset>(&self) -> Result<T> {
        let entry = self.constructors.get(&TypeId::of::<T>())
            .ok_or_else(|| Error::ConstructionFailed(format!(
                "No constructor registered for {}", std::any::type_name::<T>()
            )))?;

        (entry.construct)()
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| Error::ConstructionFailed(format!(
                "Constructor for {} produced another type", entry.type_name
            )))
    }

    pub fn is_registered<T: Asset>(&self) -> bool {
        self.constructors.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered asset types
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Names of all registered asset types (sorted)
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.constructors
            .values()
            .map(|entry| entry.type_name)
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for AssetFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "asset_factory_tests.rs"]
mod tests;
