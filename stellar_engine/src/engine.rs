/// Stellar Engine - root context owning every engine subsystem
///
/// The Engine owns the asset registry and factory, the scene manager, the
/// render pass stack, the layer stack, the inspector registry and the
/// sprite batch; the graphics device is shared behind a mutex. Nothing is
/// global except the logger, so independent engines (one per test, for
/// instance) never see each other's registries.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::{Duration, SystemTime};
use winit::event::WindowEvent;
use crate::asset::{
    Asset, AssetFactory, AssetManager, AssetRegistry, register_builtin_assets,
};
use crate::config::EngineConfig;
use crate::editor::{InspectorRegistry, register_builtin_inspectors};
use crate::error::{Error, Result};
use crate::event::Event;
use crate::graphics_device::{GraphicsDevice, SpriteBatch};
use crate::layer::{EventResponse, Layer, LayerContext, LayerKey, LayerStack};
use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use crate::render::{ClearPass, FrameInfo, RenderPassStack, SpritePass};
use crate::scene::SceneManager;
use crate::{engine_debug, engine_error, engine_info};

const SOURCE: &str = "stellar::Engine";

// ===== LOGGING STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Minimum severity forwarded to the logger (Debug in debug builds, Info otherwise)
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(if cfg!(debug_assertions) { 1 } else { 2 });

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== ENGINE =====

/// Engine root context
///
/// # Example
///
/// ```ignore
/// use stellar_engine::stellar::{Engine, EngineConfig};
/// use stellar_engine::stellar::layer::GameLayer;
///
/// let mut engine = Engine::new(EngineConfig::default(), my_device)?;
/// engine.scenes_mut().create_scene("main")?;
/// engine.scenes_mut().set_active("main")?;
/// engine.push_layer(GameLayer::new())?;
///
/// while engine.is_running() {
///     engine.tick(frame_delta)?;
/// }
/// engine.shutdown()?;
/// ```
pub struct Engine {
    config: EngineConfig,
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    sprite_batch: Box<dyn SpriteBatch>,
    asset_registry: Arc<Mutex<AssetRegistry>>,
    asset_factory: Arc<RwLock<AssetFactory>>,
    assets: AssetManager,
    scenes: SceneManager,
    render_passes: RenderPassStack,
    layers: LayerStack,
    inspectors: InspectorRegistry,
    frame_index: u64,
    running: bool,
    shut_down: bool,
}

impl Engine {
    /// Create an engine rendering into `graphics_device`
    pub fn new<D: GraphicsDevice + 'static>(config: EngineConfig, graphics_device: D) -> Result<Self> {
        Self::with_shared_device(config, Arc::new(Mutex::new(graphics_device)))
    }

    /// Create an engine over an already shared graphics device
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailed` if the device cannot create a sprite
    /// batch.
    pub fn with_shared_device(
        config: EngineConfig,
        graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    ) -> Result<Self> {
        if let Some(log_level) = config.log_level {
            Engine::set_log_level(log_level);
        }
        engine_info!(SOURCE, "Starting '{}'", config.app_name);

        let sprite_batch = {
            let mut device = graphics_device.lock().map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("Graphics device lock poisoned".to_string())
            ))?;
            device.create_sprite_batch().map_err(|err| Self::log_and_return_error(
                Error::InitializationFailed(format!("Cannot create sprite batch: {}", err))
            ))?
        };

        let mut factory = AssetFactory::new();
        register_builtin_assets(&mut factory);
        let asset_registry = Arc::new(Mutex::new(AssetRegistry::new()));
        let asset_factory = Arc::new(RwLock::new(factory));
        let assets = AssetManager::new(
            Arc::clone(&asset_registry),
            Arc::clone(&asset_factory),
            config.content_root.clone(),
        ).with_graphics_device(Arc::clone(&graphics_device));

        let mut render_passes = RenderPassStack::new();
        if config.register_default_passes {
            render_passes.register_pass(ClearPass::new(config.clear_color));
            render_passes.register_pass(SpritePass::new());
        }

        let mut inspectors = InspectorRegistry::new();
        register_builtin_inspectors(&mut inspectors);

        Ok(Self {
            config,
            graphics_device,
            sprite_batch,
            asset_registry,
            asset_factory,
            assets,
            scenes: SceneManager::new(),
            render_passes,
            layers: LayerStack::new(),
            inspectors,
            frame_index: 0,
            running: true,
            shut_down: false,
        })
    }

    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        engine_error!(SOURCE, "{}", error);
        error
    }

    /// Borrow the layer stack and a context over everything else
    fn split(&mut self, delta: Duration) -> (&mut LayerStack, LayerContext<'_>) {
        let ctx = LayerContext {
            scenes: &mut self.scenes,
            render_passes: &mut self.render_passes,
            graphics_device: &self.graphics_device,
            sprite_batch: &mut *self.sprite_batch,
            assets: &self.assets,
            frame: FrameInfo::new(self.frame_index, delta),
        };
        (&mut self.layers, ctx)
    }

    // ===== LAYERS =====

    /// Attach a layer above the other regular layers
    ///
    /// # Errors
    ///
    /// `InvalidResource` after `shutdown`; the layer is not attached.
    pub fn push_layer<L: Layer + 'static>(&mut self, layer: L) -> Result<LayerKey> {
        self.ensure_not_shut_down(layer.name())?;
        let (layers, mut ctx) = self.split(Duration::ZERO);
        layers.push_layer(layer, &mut ctx)
    }

    /// Attach a layer on top of the stack
    ///
    /// # Errors
    ///
    /// `InvalidResource` after `shutdown`; the layer is not attached.
    pub fn push_overlay<L: Layer + 'static>(&mut self, layer: L) -> Result<LayerKey> {
        self.ensure_not_shut_down(layer.name())?;
        let (layers, mut ctx) = self.split(Duration::ZERO);
        layers.push_overlay(layer, &mut ctx)
    }

    fn ensure_not_shut_down(&self, layer_name: &str) -> Result<()> {
        if self.shut_down {
            return Err(Self::log_and_return_error(Error::InvalidResource(format!(
                "Cannot attach layer '{}' after shutdown", layer_name
            ))));
        }
        Ok(())
    }

    /// Detach a layer and hand it back
    pub fn remove_layer(&mut self, key: LayerKey) -> Result<Box<dyn Layer>> {
        let (layers, mut ctx) = self.split(Duration::ZERO);
        layers.remove_layer(key, &mut ctx)
    }

    // ===== FRAME LOOP =====

    /// Run one frame: every layer's update, then every layer's render.
    ///
    /// Does nothing once an exit was requested.
    pub fn tick(&mut self, delta: Duration) -> Result<()> {
        if !self.running {
            return Ok(());
        }

        {
            let (layers, mut ctx) = self.split(delta);
            layers.update(&mut ctx, delta)?;
            layers.render(&mut ctx)?;
        }

        self.frame_index += 1;
        Ok(())
    }

    /// Dispatch an event through the layer stack.
    ///
    /// A resize reaches the graphics device before any layer. A
    /// `CloseRequested` no layer consumed stops the engine.
    pub fn dispatch_event(&mut self, event: &Event) -> Result<EventResponse> {
        if let Event::Resized { width, height } = *event {
            let mut device = self.graphics_device.lock()
                .map_err(|_| Error::BackendError("Graphics device lock poisoned".to_string()))?;
            device.resize(width, height);
        }

        let response = {
            let (layers, mut ctx) = self.split(Duration::ZERO);
            layers.dispatch_event(event, &mut ctx)?
        };

        if *event == Event::CloseRequested && response == EventResponse::Ignored {
            self.request_exit();
        }
        Ok(response)
    }

    /// Convert and dispatch a winit window event
    ///
    /// Returns `None` for window events the engine does not handle.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<Option<EventResponse>> {
        match Event::from_window_event(event) {
            Some(event) => self.dispatch_event(&event).map(Some),
            None => Ok(None),
        }
    }

    /// Stop ticking
    pub fn request_exit(&mut self) {
        if self.running {
            engine_info!(SOURCE, "Exit requested after {} frames", self.frame_index);
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of completed ticks
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Detach every layer (top → bottom). Idempotent.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        self.shut_down = true;
        self.running = false;

        let result = {
            let (layers, mut ctx) = self.split(Duration::ZERO);
            layers.detach_all(&mut ctx)
        };
        engine_info!(SOURCE, "'{}' shut down", self.config.app_name);
        result
    }

    // ===== ASSETS =====

    /// Register the constructor of an asset type
    pub fn register_asset_type<T, F>(&mut self, constructor: F) -> Result<()>
    where
        T: Asset,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let mut factory = self.asset_factory.write()
            .map_err(|_| Error::BackendError("Asset factory lock poisoned".to_string()))?;
        factory.register(constructor);
        Ok(())
    }

    /// Register `T::default` as the constructor of `T`
    pub fn register_default_asset_type<T: Asset + Default>(&mut self) -> Result<()> {
        self.register_asset_type::<T, _>(T::default)
    }

    /// Asset manager handle (cheap to clone)
    pub fn assets(&self) -> &AssetManager {
        &self.assets
    }

    pub fn asset_registry(&self) -> &Arc<Mutex<AssetRegistry>> {
        &self.asset_registry
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn graphics_device(&self) -> &Arc<Mutex<dyn GraphicsDevice>> {
        &self.graphics_device
    }

    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }

    pub fn render_passes(&self) -> &RenderPassStack {
        &self.render_passes
    }

    pub fn render_passes_mut(&mut self) -> &mut RenderPassStack {
        &mut self.render_passes
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn inspectors(&self) -> &InspectorRegistry {
        &self.inspectors
    }

    pub fn inspectors_mut(&mut self) -> &mut InspectorRegistry {
        &mut self.inspectors
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (file logger,
    /// editor console, ...).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stellar_engine::stellar::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(logger_impl);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Drop log entries below `severity`
    pub fn set_log_level(severity: LogSeverity) {
        MIN_SEVERITY.store(severity.as_u8(), Ordering::Relaxed);
    }

    pub fn log_level() -> LogSeverity {
        LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    fn is_enabled(severity: LogSeverity) -> bool {
        severity.as_u8() >= MIN_SEVERITY.load(Ordering::Relaxed)
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by the engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if !self.shut_down {
            engine_debug!(SOURCE, "Dropped without shutdown, detaching layers");
            if let Err(err) = self.shutdown() {
                engine_error!(SOURCE, "Shutdown on drop failed: {}", err);
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
