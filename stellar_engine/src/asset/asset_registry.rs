/// Asset registry - canonical path ↔ AssetId table.
///
/// The registry performs no I/O and has no loading logic. Its only
/// mutation is "insert a new mapping"; an existing mapping is never
/// overwritten. It is owned by the Engine and shared with every
/// AssetManager handle behind a mutex, so lookup + insert happen as a
/// single step (see `resolve_or_register`).

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::engine_error;
use super::asset_id::AssetId;

const SOURCE: &str = "stellar::AssetRegistry";

/// Normalize a source path into its canonical registry key.
///
/// - `\` separators become `/`
/// - empty and `.` segments are dropped (`./a//b` → `a/b`)
/// - `..` removes the previous segment (`a/../b` → `b`); leading `..`
///   segments of a relative path are kept, `..` at an absolute root is
///   dropped
/// - a leading `/` is preserved
///
/// Returns `None` when nothing is left (empty path, `"./"`, `"a/.."`, ...).
pub fn canonicalize_path(path: &str) -> Option<String> {
    let normalized = path.trim().replace('\\', "/");
    let absolute = normalized.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in normalized.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return None;
    }

    let joined = segments.join("/");
    if absolute {
        Some(format!("/{}", joined))
    } else {
        Some(joined)
    }
}

/// Path ↔ identifier table (see module docs)
#[derive(Debug, Default)]
pub struct AssetRegistry {
    ids_by_path: FxHashMap<String, AssetId>,
    paths_by_id: FxHashMap<AssetId, String>,
}

impl AssetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the identifier of a path. Pure, no mutation.
    pub fn try_get_identifier(&self, path: &str) -> Option<AssetId> {
        let canonical = canonicalize_path(path)?;
        self.ids_by_path.get(&canonical).copied()
    }

    /// Reverse lookup: canonical path of a registered identifier
    pub fn path_of(&self, id: AssetId) -> Option<&str> {
        self.paths_by_id.get(&id).map(|path| path.as_str())
    }

    /// Whether the (canonicalized) path is registered
    pub fn contains_path(&self, path: &str) -> bool {
        self.try_get_identifier(path).is_some()
    }

    /// Insert a new path → identifier mapping.
    ///
    /// Registering an identical mapping again is a no-op.
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if the path is empty or the id is `NIL`
    /// - `IdentityConflict` if the path is already mapped to another id
    /// - `InvalidResource` if the id is already assigned to another path
    pub fn register(&mut self, id: AssetId, path: &str) -> Result<()> {
        let canonical = canonicalize_path(path)
            .ok_or_else(|| Error::InvalidResource(format!("Invalid asset path '{}'", path)))?;

        if id.is_nil() {
            return Err(Error::InvalidResource(format!(
                "Cannot register '{}' with the NIL identifier", canonical
            )));
        }

        if let Some(&existing) = self.ids_by_path.get(&canonical) {
            if existing == id {
                return Ok(());
            }
            engine_error!(SOURCE,
                "Path '{}' is already registered as {} (requested {})",
                canonical, existing, id);
            return Err(Error::IdentityConflict {
                path: canonical,
                existing,
                requested: id,
            });
        }

        if let Some(other) = self.paths_by_id.get(&id) {
            engine_error!(SOURCE, "Identifier {} already belongs to '{}'", id, other);
            return Err(Error::InvalidResource(format!(
                "Identifier {} already belongs to '{}'", id, other
            )));
        }

        self.paths_by_id.insert(id, canonical.clone());
        self.ids_by_path.insert(canonical, id);
        Ok(())
    }

    /// Return the identifier of `path`, assigning a fresh one on first sight.
    ///
    /// The boolean is `true` when a new mapping was inserted. An existing
    /// mapping is returned untouched.
    pub fn resolve_or_register(&mut self, path: &str) -> Result<(AssetId, bool)> {
        let canonical = canonicalize_path(path)
            .ok_or_else(|| Error::InvalidResource(format!("Invalid asset path '{}'", path)))?;

        if let Some(&id) = self.ids_by_path.get(&canonical) {
            return Ok((id, false));
        }

        let id = AssetId::new();
        self.register(id, &canonical)?;
        Ok((id, true))
    }

    /// Number of registered paths
    pub fn len(&self) -> usize {
        self.ids_by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids_by_path.is_empty()
    }

    /// Iterate over all (canonical path, identifier) pairs, unordered
    pub fn iter(&self) -> impl Iterator<Item = (&str, AssetId)> {
        self.ids_by_path.iter().map(|(path, id)| (path.as_str(), *id))
    }
}

#[cfg(test)]
#[path = "asset_registry_tests.rs"]
mod tests;
