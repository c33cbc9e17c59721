/// Asset identifier - a 128-bit globally unique value.
///
/// Assigned once per distinct canonical source path by the AssetRegistry.
/// `AssetId::NIL` marks assets that were created programmatically and
/// never registered.

use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId(Uuid);

impl AssetId {
    /// The unassigned sentinel
    pub const NIL: AssetId = AssetId(Uuid::nil());

    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. one read back from a manifest)
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Build an identifier from its raw 128-bit value
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Whether this is the unassigned sentinel
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

/// Defaults to `NIL`, not to a fresh identifier.
impl Default for AssetId {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
