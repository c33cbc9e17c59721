//! Layer module
//!
//! Layers are the units the engine loop drives each tick. The LayerStack
//! owns them and enforces attach/detach lifecycle and dispatch order.

mod game_layer;
mod layer;
mod layer_stack;

pub use game_layer::GameLayer;
pub use layer::{EventResponse, Layer, LayerContext};
pub use layer_stack::{LayerKey, LayerStack};

// Layer context backed by the mock device (no GPU required)
#[cfg(test)]
pub(crate) mod test_harness;
