/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Engage the inner ring while held
    Key1,
    /// Engage the middle ring while held
    Key2,
    /// Engage the outer ring while held
    Key3,
    /// Toggle wireframe
    Key7,
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Space,
    Shift,
    Escape,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Fixed set of held buttons
    pub(crate) struct MockController {
        pub pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    #[test]
    fn test_button_hash() {
        let set: HashSet<_> = [Button::Key1, Button::Key2, Button::Key1].into_iter().collect();

        assert!(set.contains(&Button::Key1));
        assert!(!set.contains(&Button::Key3));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::Key2, Button::Space],
        };

        assert!(controller.is_down(Button::Key2));
        assert!(controller.is_down(Button::Space));
        assert!(!controller.is_down(Button::Key1));
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController { pressed: vec![] };

        assert!(!controller.is_down(Button::Key3));
        assert!(!controller.is_down(Button::Escape));
    }
}
