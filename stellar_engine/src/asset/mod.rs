//! Asset identity and loading module
//!
//! Provides the path → identifier registry, the explicit constructor
//! factory, and the stateless `AssetManager` facade that ties them to
//! each asset type's load hook.

mod asset;
mod asset_id;
mod asset_registry;
mod asset_factory;
mod asset_manager;
mod builtin_assets;

pub use asset::{Asset, LoadContext, LoadedAsset};
pub use asset_id::AssetId;
pub use asset_registry::{AssetRegistry, canonicalize_path};
pub use asset_factory::AssetFactory;
pub use asset_manager::AssetManager;
pub use builtin_assets::{TextAsset, BinaryAsset, register_builtin_assets};
