/// Tests for Event conversion

use super::*;
use winit::dpi::PhysicalSize;

#[test]
fn test_resized_converts() {
    let event = WindowEvent::Resized(PhysicalSize::new(1280u32, 720u32));
    assert_eq!(
        Event::from_window_event(&event),
        Some(Event::Resized { width: 1280, height: 720 })
    );
}

#[test]
fn test_close_requested_converts() {
    assert_eq!(
        Event::from_window_event(&WindowEvent::CloseRequested),
        Some(Event::CloseRequested)
    );
}

#[test]
fn test_focus_converts() {
    assert_eq!(
        Event::from_window_event(&WindowEvent::Focused(false)),
        Some(Event::FocusChanged(false))
    );
}

#[test]
fn test_unhandled_event_is_none() {
    assert_eq!(Event::from_window_event(&WindowEvent::Destroyed), None);
    assert_eq!(Event::from_window_event(&WindowEvent::RedrawRequested), None);
}

#[test]
fn test_is_input() {
    let key = Event::Input(InputEvent::Key { code: KeyCode::Space, pressed: true, repeat: false });
    assert!(key.is_input());
    assert!(!Event::CloseRequested.is_input());
}
