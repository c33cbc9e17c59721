/// Engine events.
///
/// A closed set of event variants dispatched through the layer stack.
/// `Event::from_window_event` converts the winit window events the engine
/// understands; everything else maps to `None`.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// Input from keyboard and mouse
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key {
        code: KeyCode,
        pressed: bool,
        /// Auto-repeat of a held key
        repeat: bool,
    },
    /// Cursor position in window pixels
    CursorMoved { x: f32, y: f32 },
    MouseButton {
        button: MouseButton,
        pressed: bool,
    },
    MouseWheel {
        delta_x: f32,
        delta_y: f32,
        /// `true` for pixel deltas (touchpads), `false` for line deltas
        in_pixels: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Input(InputEvent),
    /// Window surface resized (physical pixels)
    Resized { width: u32, height: u32 },
    FocusChanged(bool),
    /// The user asked to close the window
    CloseRequested,
}

impl Event {
    /// Convert a winit window event
    pub fn from_window_event(event: &WindowEvent) -> Option<Event> {
        match event {
            WindowEvent::Resized(size) => Some(Event::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::CloseRequested => Some(Event::CloseRequested),
            WindowEvent::Focused(focused) => Some(Event::FocusChanged(*focused)),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => Some(Event::Input(InputEvent::Key {
                    code,
                    pressed: event.state == ElementState::Pressed,
                    repeat: event.repeat,
                })),
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::CursorMoved { position, .. } => Some(Event::Input(InputEvent::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            })),
            WindowEvent::MouseInput { state, button, .. } => Some(Event::Input(InputEvent::MouseButton {
                button: *button,
                pressed: *state == ElementState::Pressed,
            })),
            WindowEvent::MouseWheel { delta, .. } => {
                let (delta_x, delta_y, in_pixels) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x, *y, false),
                    MouseScrollDelta::PixelDelta(position) => (position.x as f32, position.y as f32, true),
                };
                Some(Event::Input(InputEvent::MouseWheel { delta_x, delta_y, in_pixels }))
            }
            _ => None,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Event::Input(_))
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
