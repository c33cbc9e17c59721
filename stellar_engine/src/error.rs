//! Error types for the Stellar engine
//!
//! This module defines the error types used throughout the engine runtime:
//! asset identity and loading, frame rendering, layer management and
//! backend (graphics device) failures.

use std::fmt;
use crate::asset::AssetId;

/// Result type for Stellar engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Stellar engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (graphics device, window bridge, etc.)
    BackendError(String),

    /// Initialization failed (engine, device, subsystems)
    InitializationFailed(String),

    /// Invalid resource or handle (unknown layer key, empty path, etc.)
    InvalidResource(String),

    /// A canonical path is already registered with a different identifier
    IdentityConflict {
        path: String,
        existing: AssetId,
        requested: AssetId,
    },

    /// The asset factory cannot produce an instance of the requested type
    ConstructionFailed(String),

    /// An asset load hook could not complete
    LoadFailed {
        path: Option<String>,
        reason: String,
    },

    /// A render pass failed while recording the frame
    RenderFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::IdentityConflict { path, existing, requested } => write!(
                f,
                "Identity conflict: '{}' is registered as {} (requested {})",
                path, existing, requested
            ),
            Error::ConstructionFailed(msg) => write!(f, "Construction failed: {}", msg),
            Error::LoadFailed { path: Some(path), reason } => {
                write!(f, "Load failed for '{}': {}", path, reason)
            }
            Error::LoadFailed { path: None, reason } => {
                write!(f, "Load failed for default asset: {}", reason)
            }
            Error::RenderFailed(msg) => write!(f, "Render failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR and build an `Error::BackendError` with the same message
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("stellar::Engine", "Device lock poisoned");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::stellar::Error::BackendError(message)
    }};
}

/// Log an ERROR and return early with an `Error::BackendError`
///
/// # Example
///
/// ```ignore
/// engine_bail!("stellar::SceneManager", "Scene '{}' already exists", name);
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
