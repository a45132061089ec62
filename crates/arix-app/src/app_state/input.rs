//! Keyboard and mouse mapping.

use winit::event::MouseButton;
use winit::keyboard::{Key, NamedKey};

/// What an input does to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InputAction {
    Toggle,
    Exit,
}

pub(super) fn key_action(key: &Key) -> Option<InputAction> {
    match key {
        Key::Named(NamedKey::Space | NamedKey::Enter) => Some(InputAction::Toggle),
        Key::Named(NamedKey::Escape) => Some(InputAction::Exit),
        _ => None,
    }
}

pub(super) fn mouse_action(button: MouseButton) -> Option<InputAction> {
    match button {
        MouseButton::Left => Some(InputAction::Toggle),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_enter_and_click_toggle() {
        assert_eq!(key_action(&Key::Named(NamedKey::Space)), Some(InputAction::Toggle));
        assert_eq!(key_action(&Key::Named(NamedKey::Enter)), Some(InputAction::Toggle));
        assert_eq!(mouse_action(MouseButton::Left), Some(InputAction::Toggle));
    }

    #[test]
    fn escape_exits() {
        assert_eq!(key_action(&Key::Named(NamedKey::Escape)), Some(InputAction::Exit));
    }

    #[test]
    fn other_inputs_are_ignored() {
        assert_eq!(key_action(&Key::Character("a".into())), None);
        assert_eq!(mouse_action(MouseButton::Right), None);
    }
}
