use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state.
    ///
    /// Returns the button if this event pressed it; key repeats and
    /// releases return None.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<Button> {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return None;
        };
        let PhysicalKey::Code(keycode) = event.physical_key else {
            return None;
        };
        let button = Self::keycode_to_button(keycode)?;

        match event.state {
            ElementState::Pressed => self.press(button).then_some(button),
            ElementState::Released => {
                self.release(button);
                None
            }
        }
    }

    /// Mark a button as held, returns false if it already was
    pub fn press(&mut self, button: Button) -> bool {
        self.pressed_keys.insert(button)
    }

    pub fn release(&mut self, button: Button) {
        self.pressed_keys.remove(&button);
    }

    /// Drop every held button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(Button::Key1),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(Button::Key2),
            KeyCode::Digit3 | KeyCode::Numpad3 => Some(Button::Key3),
            KeyCode::Digit7 | KeyCode::Numpad7 => Some(Button::Key7),
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
