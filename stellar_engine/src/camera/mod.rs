//! Camera module - 2D orthographic camera.
//!
//! A camera is plain data: scenes store it as a component on an entity and
//! the render passes read its transforms every frame.

mod camera;

pub use camera::{Camera, Viewport};
