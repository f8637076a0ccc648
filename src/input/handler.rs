//! Key Router
//!
//! Resolves a key event under the current mode to at most one command.

use crossterm::event::KeyEvent;

use super::keymap::{global_command, normal_mode_command, visual_mode_command, Command};
use super::modes::Mode;

/// Stateless router from (mode, key) to command.
///
/// A `None` result means the key was not consumed and may be forwarded to
/// whatever text field has focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyRouter;

impl KeyRouter {
    pub fn route(mode: Mode, key: KeyEvent) -> Option<Command> {
        if let Some(command) = global_command(mode, key) {
            return Some(command);
        }

        match mode {
            Mode::Normal => normal_mode_command(key),
            Mode::Visual => visual_mode_command(key),
            Mode::Insert => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use proptest::prelude::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode() {
        assert_eq!(KeyRouter::route(Mode::Normal, key(KeyCode::Char('j'))), Some(Command::NavigateDown));
        assert_eq!(KeyRouter::route(Mode::Normal, key(KeyCode::Char('?'))), Some(Command::Help));
    }

    #[test]
    fn test_insert_mode_passes_characters_through() {
        for c in ['j', 'k', 'g', 'd', 'c', '?', '/'] {
            assert_eq!(KeyRouter::route(Mode::Insert, key(KeyCode::Char(c))), None);
        }
        assert_eq!(KeyRouter::route(Mode::Insert, key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_insert_mode_globals() {
        assert_eq!(KeyRouter::route(Mode::Insert, key(KeyCode::Esc)), Some(Command::Escape));
        assert_eq!(
            KeyRouter::route(Mode::Insert, KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            Some(Command::OpenPalette)
        );
    }

    #[test]
    fn test_visual_mode() {
        assert_eq!(KeyRouter::route(Mode::Visual, key(KeyCode::Char('d'))), Some(Command::Delete));
        assert_eq!(KeyRouter::route(Mode::Visual, key(KeyCode::Char('v'))), None);
        assert_eq!(KeyRouter::route(Mode::Visual, key(KeyCode::Enter)), None);
    }

    fn any_mode() -> impl Strategy<Value = Mode> {
        prop_oneof![Just(Mode::Normal), Just(Mode::Insert), Just(Mode::Visual)]
    }

    fn any_modifiers() -> impl Strategy<Value = KeyModifiers> {
        (0u8..16).prop_map(|bits| KeyModifiers::from_bits_truncate(bits))
    }

    proptest! {
        #[test]
        fn prop_route_is_deterministic(mode in any_mode(), c in any::<char>(), mods in any_modifiers()) {
            let event = KeyEvent::new(KeyCode::Char(c), mods);
            prop_assert_eq!(KeyRouter::route(mode, event), KeyRouter::route(mode, event));
        }

        #[test]
        fn prop_insert_consumes_only_globals(c in any::<char>(), mods in any_modifiers()) {
            let event = KeyEvent::new(KeyCode::Char(c), mods);
            if let Some(command) = KeyRouter::route(Mode::Insert, event) {
                prop_assert_eq!(command, Command::OpenPalette);
            }
        }
    }
}
