/// Graphics device module - backend-agnostic drawing surface and sprite batching

// Module declarations
pub mod graphics_device;
pub mod sprite_batch;

// Re-exports
pub use graphics_device::*;
pub use sprite_batch::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
