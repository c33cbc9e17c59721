/// Asset manager - the entry point for obtaining loaded assets.
///
/// `AssetManager` is a cheap, cloneable handle over the engine's shared
/// registry and factory. Every load yields a fresh instance: identity is
/// shared through the registry, instances are not cached.
///
/// Load sequence for `load::<T>(path)`:
/// 1. construct a fresh `T` through the factory
/// 2. canonicalize the path and resolve (or assign) its identifier
/// 3. run `T::load` exactly once
/// 4. return the instance wrapped in a `LoadedAsset<T>`

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsDevice;
use crate::{engine_debug, engine_error};
use super::asset::{Asset, LoadContext, LoadedAsset};
use super::asset_factory::AssetFactory;
use super::asset_id::AssetId;
use super::asset_registry::{AssetRegistry, canonicalize_path};

const SOURCE: &str = "stellar::AssetManager";

#[derive(Clone)]
pub struct AssetManager {
    registry: Arc<Mutex<AssetRegistry>>,
    factory: Arc<RwLock<AssetFactory>>,
    content_root: PathBuf,
    graphics_device: Option<Arc<Mutex<dyn GraphicsDevice>>>,
}

impl AssetManager {
    /// Create a manager over a shared registry and factory.
    ///
    /// Relative asset paths are resolved against `content_root`.
    pub fn new(
        registry: Arc<Mutex<AssetRegistry>>,
        factory: Arc<RwLock<AssetFactory>>,
        content_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            factory,
            content_root: content_root.into(),
            graphics_device: None,
        }
    }

    /// Give load hooks access to a graphics device
    pub fn with_graphics_device(mut self, device: Arc<Mutex<dyn GraphicsDevice>>) -> Self {
        self.graphics_device = Some(device);
        self
    }

    /// Load the asset at `path`.
    ///
    /// The first load of a path assigns a fresh identifier; later loads
    /// (of any type) reuse it.
    ///
    /// # Errors
    ///
    /// - `ConstructionFailed` if `T` has no registered constructor
    ///   (nothing is registered in that case)
    /// - `InvalidResource` if the path is empty
    /// - any error returned by `T::load`; the path stays registered
    pub fn load<T: Asset>(&self, path: &str) -> Result<LoadedAsset<T>> {
        self.load_impl(Some(path))
    }

    /// Build a programmatic default of `T`.
    ///
    /// The result carries `AssetId::NIL` and no path; the registry is not
    /// touched.
    pub fn create<T: Asset>(&self) -> Result<LoadedAsset<T>> {
        self.load_impl(None)
    }

    /// `load` when a path is given, `create` otherwise
    pub fn load_optional<T: Asset>(&self, path: Option<&str>) -> Result<LoadedAsset<T>> {
        self.load_impl(path)
    }

    /// Identifier registered for `path`, without loading anything
    pub fn identifier_of(&self, path: &str) -> Result<Option<AssetId>> {
        let registry = self.lock_registry()?;
        Ok(registry.try_get_identifier(path))
    }

    /// Shared registry handle
    pub fn registry(&self) -> &Arc<Mutex<AssetRegistry>> {
        &self.registry
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    fn lock_registry(&self) -> Result<std::sync::MutexGuard<'_, AssetRegistry>> {
        self.registry.lock()
            .map_err(|_| Error::BackendError("Asset registry lock poisoned".to_string()))
    }

    fn construct<T: Asset>(&self) -> Result<T> {
        let factory = self.factory.read()
            .map_err(|_| Error::BackendError("Asset factory lock poisoned".to_string()))?;
        factory.construct::<T>().map_err(|err| {
            engine_error!(SOURCE, "{}", err);
            err
        })
    }

    fn load_impl<T: Asset>(&self, path: Option<&str>) -> Result<LoadedAsset<T>> {
        let mut asset = self.construct::<T>()?;

        let (id, canonical) = match path {
            Some(path) => {
                let canonical = canonicalize_path(path).ok_or_else(|| {
                    engine_error!(SOURCE, "Invalid asset path '{}'", path);
                    Error::InvalidResource(format!("Invalid asset path '{}'", path))
                })?;

                let (id, created) = self.lock_registry()?.resolve_or_register(&canonical)?;
                if created {
                    engine_debug!(SOURCE, "Registered '{}' as {}", canonical, id);
                }
                (id, Some(canonical))
            }
            None => (AssetId::NIL, None),
        };

        {
            let ctx = LoadContext::new(
                id,
                canonical.as_deref(),
                &self.content_root,
                self.graphics_device.as_ref(),
            );
            if let Err(err) = asset.load(&ctx) {
                engine_error!(SOURCE, "Failed to load {} ({}): {}",
                    canonical.as_deref().unwrap_or("<default>"),
                    std::any::type_name::<T>(), err);
                return Err(err);
            }
        }

        Ok(LoadedAsset::new(id, canonical, asset))
    }
}

#[cfg(test)]
#[path = "asset_manager_tests.rs"]
mod tests;
