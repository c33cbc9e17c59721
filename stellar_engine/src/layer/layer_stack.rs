/// LayerStack - ordered, lifecycle-aware layers.
///
/// Regular layers sit below overlays: `push_layer` inserts above the last
/// regular layer, `push_overlay` on top of everything. Update and render
/// walk the stack bottom → top; events walk it top → bottom and stop at
/// the first layer that consumes them.

use std::time::Duration;
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::event::Event;
use crate::{engine_debug, engine_error, engine_trace};
use super::layer::{EventResponse, Layer, LayerContext};

const SOURCE: &str = "stellar::LayerStack";

new_key_type! {
    /// Stable handle on a layer in a LayerStack
    pub struct LayerKey;
}

pub struct LayerStack {
    layers: SlotMap<LayerKey, Box<dyn Layer>>,
    /// Bottom → top
    order: Vec<LayerKey>,
    /// Index of the first overlay in `order`
    overlay_start: usize,
}

impl LayerStack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            layers: SlotMap::with_key(),
            order: Vec::new(),
            overlay_start: 0,
        }
    }

    /// Attach a layer and insert it above the other regular layers.
    ///
    /// # Errors
    ///
    /// The error of `on_attach`; the layer is dropped and never enters the
    /// stack.
    pub fn push_layer<L: Layer + 'static>(&mut self, layer: L, ctx: &mut LayerContext<'_>) -> Result<LayerKey> {
        self.push_boxed(Box::new(layer), false, ctx)
    }

    /// Attach a layer and insert it on top of the stack
    pub fn push_overlay<L: Layer + 'static>(&mut self, layer: L, ctx: &mut LayerContext<'_>) -> Result<LayerKey> {
        self.push_boxed(Box::new(layer), true, ctx)
    }

    /// Boxed variant of `push_layer` / `push_overlay`
    pub fn push_boxed(
        &mut self,
        mut layer: Box<dyn Layer>,
        overlay: bool,
        ctx: &mut LayerContext<'_>,
    ) -> Result<LayerKey> {
        if let Err(err) = layer.on_attach(ctx) {
            engine_error!(SOURCE, "Layer '{}' failed to attach: {}", layer.name(), err);
            return Err(err);
        }
        engine_debug!(SOURCE, "Layer '{}' attached{}", layer.name(),
            if overlay { " as overlay" } else { "" });

        let key = self.layers.insert(layer);
        if overlay {
            self.order.push(key);
        } else {
            self.order.insert(self.overlay_start, key);
            self.overlay_start += 1;
        }
        Ok(key)
    }

    /// Detach a layer and take it out of the stack.
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if the key is not in the stack
    /// - the error of `on_detach`; the layer has left the stack regardless
    pub fn remove_layer(&mut self, key: LayerKey, ctx: &mut LayerContext<'_>) -> Result<Box<dyn Layer>> {
        let position = self.order.iter().position(|k| *k == key)
            .ok_or_else(|| Error::InvalidResource(format!("Layer {:?} is not in the stack", key)))?;

        self.order.remove(position);
        if position < self.overlay_start {
            self.overlay_start -= 1;
        }

        let mut layer = self.layers.remove(key)
            .ok_or_else(|| Error::InvalidResource(format!("Layer {:?} is not in the stack", key)))?;

        if let Err(err) = layer.on_detach(ctx) {
            engine_error!(SOURCE, "Layer '{}' failed to detach: {}", layer.name(), err);
            return Err(err);
        }
        engine_debug!(SOURCE, "Layer '{}' detached", layer.name());
        Ok(layer)
    }

    /// Run `on_update` on every layer, bottom → top
    pub fn update(&mut self, ctx: &mut LayerContext<'_>, delta: Duration) -> Result<()> {
        for key in &self.order {
            if let Some(layer) = self.layers.get_mut(*key) {
                if let Err(err) = layer.on_update(ctx, delta) {
                    engine_error!(SOURCE, "Layer '{}' update failed: {}", layer.name(), err);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Run `on_render` on every layer, bottom → top
    pub fn render(&mut self, ctx: &mut LayerContext<'_>) -> Result<()> {
        for key in &self.order {
            if let Some(layer) = self.layers.get_mut(*key) {
                if let Err(err) = layer.on_render(ctx) {
                    engine_error!(SOURCE, "Layer '{}' render failed: {}", layer.name(), err);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Offer an event to every layer, top → bottom, until one consumes it
    pub fn dispatch_event(&mut self, event: &Event, ctx: &mut LayerContext<'_>) -> Result<EventResponse> {
        for key in self.order.iter().rev() {
            if let Some(layer) = self.layers.get_mut(*key) {
                if layer.on_event(ctx, event)? == EventResponse::Consumed {
                    engine_trace!(SOURCE, "{:?} consumed by '{}'", event, layer.name());
                    return Ok(EventResponse::Consumed);
                }
            }
        }
        Ok(EventResponse::Ignored)
    }

    /// Detach every layer, top → bottom, and empty the stack.
    ///
    /// All layers are detached even if some fail; the first error is
    /// returned.
    pub fn detach_all(&mut self, ctx: &mut LayerContext<'_>) -> Result<()> {
        let mut first_error = None;

        while let Some(key) = self.order.pop() {
            let Some(mut layer) = self.layers.remove(key) else {
                continue;
            };
            if let Err(err) = layer.on_detach(ctx) {
                engine_error!(SOURCE, "Layer '{}' failed to detach: {}", layer.name(), err);
                first_error.get_or_insert(err);
            }
        }
        self.overlay_start = 0;

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of overlays
    pub fn overlay_count(&self) -> usize {
        self.order.len() - self.overlay_start
    }

    pub fn contains(&self, key: LayerKey) -> bool {
        self.layers.contains_key(key)
    }

    pub fn layer(&self, key: LayerKey) -> Option<&dyn Layer> {
        self.layers.get(key).map(|layer| &**layer)
    }

    /// Layer names, bottom → top
    pub fn layer_names(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter_map(|key| self.layers.get(*key))
            .map(|layer| layer.name())
            .collect()
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "layer_stack_tests.rs"]
mod tests;
