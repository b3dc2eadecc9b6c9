//! Input conversion utilities and input state tracking.
//!
//! Maps platform-specific (winit) key and button codes to engine-agnostic
//! [`kestrel_core::input`] values, and accumulates routed events into an
//! [`InputState`] snapshot layers can poll.

use std::collections::HashSet;

use kestrel_core::input::{KeyCode, MouseButton};
use kestrel_core::{Event, EventData};
use winit::event;
use winit::keyboard;

/// Convert a winit [`keyboard::KeyCode`] to an engine [`KeyCode`], if a
/// mapping exists.
pub fn map_winit_key(key: keyboard::KeyCode) -> Option<KeyCode> {
    Some(match key {
        // Letters
        keyboard::KeyCode::KeyA => KeyCode::A,
        keyboard::KeyCode::KeyB => KeyCode::B,
        keyboard::KeyCode::KeyC => KeyCode::C,
        keyboard::KeyCode::KeyD => KeyCode::D,
        keyboard::KeyCode::KeyE => KeyCode::E,
        keyboard::KeyCode::KeyF => KeyCode::F,
        keyboard::KeyCode::KeyG => KeyCode::G,
        keyboard::KeyCode::KeyH => KeyCode::H,
        keyboard::KeyCode::KeyI => KeyCode::I,
        keyboard::KeyCode::KeyJ => KeyCode::J,
        keyboard::KeyCode::KeyK => KeyCode::K,
        keyboard::KeyCode::KeyL => KeyCode::L,
        keyboard::KeyCode::KeyM => KeyCode::M,
        keyboard::KeyCode::KeyN => KeyCode::N,
        keyboard::KeyCode::KeyO => KeyCode::O,
        keyboard::KeyCode::KeyP => KeyCode::P,
        keyboard::KeyCode::KeyQ => KeyCode::Q,
        keyboard::KeyCode::KeyR => KeyCode::R,
        keyboard::KeyCode::KeyS => KeyCode::S,
        keyboard::KeyCode::KeyT => KeyCode::T,
        keyboard::KeyCode::KeyU => KeyCode::U,
        keyboard::KeyCode::KeyV => KeyCode::V,
        keyboard::KeyCode::KeyW => KeyCode::W,
        keyboard::KeyCode::KeyX => KeyCode::X,
        keyboard::KeyCode::KeyY => KeyCode::Y,
        keyboard::KeyCode::KeyZ => KeyCode::Z,

        // Digits
        keyboard::KeyCode::Digit0 => KeyCode::Digit0,
        keyboard::KeyCode::Digit1 => KeyCode::Digit1,
        keyboard::KeyCode::Digit2 => KeyCode::Digit2,
        keyboard::KeyCode::Digit3 => KeyCode::Digit3,
        keyboard::KeyCode::Digit4 => KeyCode::Digit4,
        keyboard::KeyCode::Digit5 => KeyCode::Digit5,
        keyboard::KeyCode::Digit6 => KeyCode::Digit6,
        keyboard::KeyCode::Digit7 => KeyCode::Digit7,
        keyboard::KeyCode::Digit8 => KeyCode::Digit8,
        keyboard::KeyCode::Digit9 => KeyCode::Digit9,

        // Function keys
        keyboard::KeyCode::F1 => KeyCode::F1,
        keyboard::KeyCode::F2 => KeyCode::F2,
        keyboard::KeyCode::F3 => KeyCode::F3,
        keyboard::KeyCode::F4 => KeyCode::F4,
        keyboard::KeyCode::F5 => KeyCode::F5,
        keyboard::KeyCode::F6 => KeyCode::F6,
        keyboard::KeyCode::F7 => KeyCode::F7,
        keyboard::KeyCode::F8 => KeyCode::F8,
        keyboard::KeyCode::F9 => KeyCode::F9,
        keyboard::KeyCode::F10 => KeyCode::F10,
        keyboard::KeyCode::F11 => KeyCode::F11,
        keyboard::KeyCode::F12 => KeyCode::F12,

        // Modifiers
        keyboard::KeyCode::ShiftLeft => KeyCode::ShiftLeft,
        keyboard::KeyCode::ShiftRight => KeyCode::ShiftRight,
        keyboard::KeyCode::ControlLeft => KeyCode::ControlLeft,
        keyboard::KeyCode::ControlRight => KeyCode::ControlRight,
        keyboard::KeyCode::AltLeft => KeyCode::AltLeft,
        keyboard::KeyCode::AltRight => KeyCode::AltRight,
        keyboard::KeyCode::SuperLeft => KeyCode::SuperLeft,
        keyboard::KeyCode::SuperRight => KeyCode::SuperRight,

        // Arrows
        keyboard::KeyCode::ArrowUp => KeyCode::ArrowUp,
        keyboard::KeyCode::ArrowDown => KeyCode::ArrowDown,
        keyboard::KeyCode::ArrowLeft => KeyCode::ArrowLeft,
        keyboard::KeyCode::ArrowRight => KeyCode::ArrowRight,

        // Common
        keyboard::KeyCode::Space => KeyCode::Space,
        keyboard::KeyCode::Enter => KeyCode::Enter,
        keyboard::KeyCode::Escape => KeyCode::Escape,
        keyboard::KeyCode::Tab => KeyCode::Tab,
        keyboard::KeyCode::Backspace => KeyCode::Backspace,
        keyboard::KeyCode::Delete => KeyCode::Delete,
        keyboard::KeyCode::Insert => KeyCode::Insert,
        keyboard::KeyCode::Home => KeyCode::Home,
        keyboard::KeyCode::End => KeyCode::End,
        keyboard::KeyCode::PageUp => KeyCode::PageUp,
        keyboard::KeyCode::PageDown => KeyCode::PageDown,
        keyboard::KeyCode::CapsLock => KeyCode::CapsLock,

        // Punctuation / symbols
        keyboard::KeyCode::Minus => KeyCode::Minus,
        keyboard::KeyCode::Equal => KeyCode::Equal,
        keyboard::KeyCode::BracketLeft => KeyCode::BracketLeft,
        keyboard::KeyCode::BracketRight => KeyCode::BracketRight,
        keyboard::KeyCode::Backslash => KeyCode::Backslash,
        keyboard::KeyCode::Semicolon => KeyCode::Semicolon,
        keyboard::KeyCode::Quote => KeyCode::Quote,
        keyboard::KeyCode::Backquote => KeyCode::Backquote,
        keyboard::KeyCode::Comma => KeyCode::Comma,
        keyboard::KeyCode::Period => KeyCode::Period,
        keyboard::KeyCode::Slash => KeyCode::Slash,

        // Numeric keypad
        keyboard::KeyCode::Numpad0 => KeyCode::Numpad0,
        keyboard::KeyCode::Numpad1 => KeyCode::Numpad1,
        keyboard::KeyCode::Numpad2 => KeyCode::Numpad2,
        keyboard::KeyCode::Numpad3 => KeyCode::Numpad3,
        keyboard::KeyCode::Numpad4 => KeyCode::Numpad4,
        keyboard::KeyCode::Numpad5 => KeyCode::Numpad5,
        keyboard::KeyCode::Numpad6 => KeyCode::Numpad6,
        keyboard::KeyCode::Numpad7 => KeyCode::Numpad7,
        keyboard::KeyCode::Numpad8 => KeyCode::Numpad8,
        keyboard::KeyCode::Numpad9 => KeyCode::Numpad9,
        keyboard::KeyCode::NumpadAdd => KeyCode::NumpadAdd,
        keyboard::KeyCode::NumpadSubtract => KeyCode::NumpadSubtract,
        keyboard::KeyCode::NumpadMultiply => KeyCode::NumpadMultiply,
        keyboard::KeyCode::NumpadDivide => KeyCode::NumpadDivide,
        keyboard::KeyCode::NumpadDecimal => KeyCode::NumpadDecimal,
        keyboard::KeyCode::NumpadEnter => KeyCode::NumpadEnter,
        keyboard::KeyCode::NumLock => KeyCode::NumLock,

        _ => return None,
    })
}

/// Convert a winit [`event::MouseButton`] to an engine [`MouseButton`].
pub fn map_winit_mouse_button(button: event::MouseButton) -> MouseButton {
    match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Right => MouseButton::Right,
        event::MouseButton::Middle => MouseButton::Middle,
        event::MouseButton::Back => MouseButton::Back,
        event::MouseButton::Forward => MouseButton::Forward,
        event::MouseButton::Other(index) => MouseButton::Other(index),
    }
}

/// Snapshot of keyboard and mouse state.
///
/// The application feeds every routed event into this state, so by the time
/// a layer's `on_update` runs it reflects all events delivered up to the
/// current frame. Layers read it through
/// [`FrameContext::input`](crate::FrameContext::input).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed_keys: HashSet<KeyCode>,
    pressed_buttons: HashSet<MouseButton>,
    cursor: (f32, f32),
    scroll: (f32, f32),
}

impl InputState {
    /// Check whether a key is currently held down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check whether a mouse button is currently held down.
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Last reported cursor position in window pixels.
    pub fn cursor_position(&self) -> (f32, f32) {
        self.cursor
    }

    /// Scroll offsets accumulated by the most recent event poll.
    pub fn scroll_delta(&self) -> (f32, f32) {
        self.scroll
    }

    /// Fold a routed event into the state.
    ///
    /// Applied regardless of the handled flag: a layer consuming a key press
    /// does not make the key physically unpressed.
    pub(crate) fn apply(&mut self, event: &Event) {
        match *event.data() {
            EventData::KeyPressed { key, .. } => {
                self.pressed_keys.insert(key);
            }
            EventData::KeyReleased { key } => {
                self.pressed_keys.remove(&key);
            }
            EventData::MouseButtonPressed { button } => {
                self.pressed_buttons.insert(button);
            }
            EventData::MouseButtonReleased { button } => {
                self.pressed_buttons.remove(&button);
            }
            EventData::MouseMoved { x, y } => {
                self.cursor = (x, y);
            }
            EventData::MouseScrolled { x_offset, y_offset } => {
                self.scroll.0 += x_offset;
                self.scroll.1 += y_offset;
            }
            _ => {}
        }
    }

    /// Reset per-poll accumulators. Called right before each event poll so
    /// `scroll_delta` only reports offsets from the latest poll.
    pub(crate) fn clear_deltas(&mut self) {
        self.scroll = (0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_winit_key(keyboard::KeyCode::KeyW), Some(KeyCode::W));
        assert_eq!(
            map_winit_key(keyboard::KeyCode::Digit3),
            Some(KeyCode::Digit3)
        );
        assert_eq!(
            map_winit_key(keyboard::KeyCode::Numpad7),
            Some(KeyCode::Numpad7)
        );
        assert_eq!(
            map_winit_key(keyboard::KeyCode::NumpadEnter),
            Some(KeyCode::NumpadEnter)
        );
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(map_winit_key(keyboard::KeyCode::PrintScreen), None);
        assert_eq!(map_winit_key(keyboard::KeyCode::ContextMenu), None);
    }

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(
            map_winit_mouse_button(event::MouseButton::Left),
            MouseButton::Left
        );
        assert_eq!(
            map_winit_mouse_button(event::MouseButton::Forward),
            MouseButton::Forward
        );
        assert_eq!(
            map_winit_mouse_button(event::MouseButton::Other(7)),
            MouseButton::Other(7)
        );
    }

    #[test]
    fn test_input_state_tracks_keys_and_buttons() {
        let mut input = InputState::default();
        input.apply(&Event::new(EventData::KeyPressed {
            key: KeyCode::W,
            repeat: false,
        }));
        input.apply(&Event::new(EventData::MouseButtonPressed {
            button: MouseButton::Left,
        }));

        assert!(input.is_key_pressed(KeyCode::W));
        assert!(!input.is_key_pressed(KeyCode::S));
        assert!(input.is_mouse_button_pressed(MouseButton::Left));

        input.apply(&Event::new(EventData::KeyReleased { key: KeyCode::W }));
        input.apply(&Event::new(EventData::MouseButtonReleased {
            button: MouseButton::Left,
        }));

        assert!(!input.is_key_pressed(KeyCode::W));
        assert!(!input.is_mouse_button_pressed(MouseButton::Left));
    }

    #[test]
    fn test_input_state_cursor_and_scroll() {
        let mut input = InputState::default();
        input.apply(&Event::new(EventData::MouseMoved { x: 10.0, y: 20.0 }));
        input.apply(&Event::new(EventData::MouseScrolled {
            x_offset: 0.0,
            y_offset: 1.0,
        }));
        input.apply(&Event::new(EventData::MouseScrolled {
            x_offset: 0.5,
            y_offset: 1.0,
        }));

        assert_eq!(input.cursor_position(), (10.0, 20.0));
        assert_eq!(input.scroll_delta(), (0.5, 2.0));

        input.clear_deltas();
        assert_eq!(input.scroll_delta(), (0.0, 0.0));
        assert_eq!(input.cursor_position(), (10.0, 20.0));
    }
}
