//! Engine configuration

use std::path::PathBuf;
use crate::graphics_device::Color;
use crate::log::LogSeverity;

/// Configuration passed to `Engine::new`
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Application name (logged at startup)
    pub app_name: String,
    /// Directory asset paths are resolved against
    pub content_root: PathBuf,
    /// Color used by the default clear pass
    pub clear_color: Color,
    /// Minimum severity forwarded to the logger.
    ///
    /// The filter is process-wide: `Some` overrides it for every engine in
    /// the process, `None` leaves it untouched.
    pub log_level: Option<LogSeverity>,
    /// Register the built-in ClearPass and SpritePass at startup
    pub register_default_passes: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Stellar Application".to_string(),
            content_root: PathBuf::from("content"),
            clear_color: Color::CORNFLOWER_BLUE,
            log_level: None,
            register_default_passes: true,
        }
    }
}

impl EngineConfig {
    pub fn with_app_name(mut self, app_name: &str) -> Self {
        self.app_name = app_name.to_string();
        self
    }

    pub fn with_content_root(mut self, content_root: impl Into<PathBuf>) -> Self {
        self.content_root = content_root.into();
        self
    }

    pub fn with_clear_color(mut self, clear_color: Color) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn with_log_level(mut self, log_level: LogSeverity) -> Self {
        self.log_level = Some(log_level);
        self
    }

    /// Start with an empty pass stack
    pub fn without_default_passes(mut self) -> Self {
        self.register_default_passes = false;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
