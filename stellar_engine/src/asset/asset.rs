/// Asset trait, load context, and the loaded-asset wrapper.
///
/// An asset type implements a single load hook. The AssetManager builds a
/// fresh instance through the AssetFactory, assigns its identity, runs the
/// hook exactly once, and hands the result back as a `LoadedAsset<T>`.
/// `LoadedAsset` only derefs immutably: callers can neither rewrite the
/// identity nor run the hook a second time.

use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsDevice;
use super::asset_id::AssetId;

/// A loadable unit of content.
pub trait Asset: Send + Sync + 'static {
    /// Populate this instance.
    ///
    /// `ctx.path()` is `None` for programmatic defaults created with
    /// `AssetManager::create`; implementations build their default state
    /// in that case.
    fn load(&mut self, ctx: &LoadContext<'_>) -> Result<()>;
}

/// Everything a load hook may use while it runs.
pub struct LoadContext<'a> {
    id: AssetId,
    path: Option<&'a str>,
    content_root: &'a Path,
    graphics_device: Option<&'a Arc<Mutex<dyn GraphicsDevice>>>,
}

impl<'a> LoadContext<'a> {
    pub(crate) fn new(
        id: AssetId,
        path: Option<&'a str>,
        content_root: &'a Path,
        graphics_device: Option<&'a Arc<Mutex<dyn GraphicsDevice>>>,
    ) -> Self {
        Self { id, path, content_root, graphics_device }
    }

    /// Identifier assigned to the asset being loaded (`NIL` for defaults)
    pub fn id(&self) -> AssetId {
        self.id
    }

    /// Canonical source path, or `None` for a default asset
    pub fn path(&self) -> Option<&'a str> {
        self.path
    }

    pub fn is_default(&self) -> bool {
        self.path.is_none()
    }

    pub fn content_root(&self) -> &'a Path {
        self.content_root
    }

    /// Source path resolved against the content root
    pub fn full_path(&self) -> Option<PathBuf> {
        self.path.map(|path| self.content_root.join(path))
    }

    /// Graphics device, when the manager was given one
    pub fn graphics_device(&self) -> Option<&'a Arc<Mutex<dyn GraphicsDevice>>> {
        self.graphics_device
    }

    /// Read the whole source file.
    ///
    /// # Errors
    ///
    /// `LoadFailed` for default assets (no path) and for I/O failures.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        let full_path = self.full_path()
            .ok_or_else(|| self.fail("default assets have no source to read"))?;
        std::fs::read(&full_path)
            .map_err(|err| self.fail(format!("{} ({})", err, full_path.display())))
    }

    /// Read the whole source file as UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes)
            .map_err(|err| self.fail(format!("invalid UTF-8: {}", err)))
    }

    /// Build a `LoadFailed` error for the asset being loaded
    pub fn fail(&self, reason: impl Into<String>) -> Error {
        Error::LoadFailed {
            path: self.path.map(str::to_string),
            reason: reason.into(),
        }
    }
}

/// A fully loaded asset together with its identity.
pub struct LoadedAsset<T> {
    id: AssetId,
    path: Option<String>,
    asset: T,
}

impl<T> LoadedAsset<T> {
    pub(crate) fn new(id: AssetId, path: Option<String>, asset: T) -> Self {
        Self { id, path, asset }
    }

    /// Registered identifier, `NIL` for default assets
    pub fn id(&self) -> AssetId {
        self.id
    }

    /// Canonical source path, `None` for default assets
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn is_default(&self) -> bool {
        self.path.is_none()
    }

    pub fn asset(&self) -> &T {
        &self.asset
    }
}

impl<T> Deref for LoadedAsset<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.asset
    }
}

impl<T: fmt::Debug> fmt::Debug for LoadedAsset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedAsset")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("asset", &self.asset)
            .finish()
    }
}
