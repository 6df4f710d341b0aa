//! Keyboard naming and global input settings.
//!
//! Bindings are configured with simple key-name strings in the style of web
//! key identifiers (`ArrowUp`, `m`, `Enter`, ...). [`key_from_name`] and
//! [`key_name`] translate between those names and raylib key codes through a
//! single lookup table. Letter names are matched case-insensitively.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

/// Name/key lookup table. The first name listed for a key is its canonical name.
const KEY_NAMES: &[(&str, KeyboardKey)] = &[
    ("ArrowUp", KeyboardKey::KEY_UP),
    ("ArrowDown", KeyboardKey::KEY_DOWN),
    ("ArrowLeft", KeyboardKey::KEY_LEFT),
    ("ArrowRight", KeyboardKey::KEY_RIGHT),
    ("a", KeyboardKey::KEY_A),
    ("b", KeyboardKey::KEY_B),
    ("c", KeyboardKey::KEY_C),
    ("d", KeyboardKey::KEY_D),
    ("e", KeyboardKey::KEY_E),
    ("f", KeyboardKey::KEY_F),
    ("g", KeyboardKey::KEY_G),
    ("h", KeyboardKey::KEY_H),
    ("i", KeyboardKey::KEY_I),
    ("j", KeyboardKey::KEY_J),
    ("k", KeyboardKey::KEY_K),
    ("l", KeyboardKey::KEY_L),
    ("m", KeyboardKey::KEY_M),
    ("n", KeyboardKey::KEY_N),
    ("o", KeyboardKey::KEY_O),
    ("p", KeyboardKey::KEY_P),
    ("q", KeyboardKey::KEY_Q),
    ("r", KeyboardKey::KEY_R),
    ("s", KeyboardKey::KEY_S),
    ("t", KeyboardKey::KEY_T),
    ("u", KeyboardKey::KEY_U),
    ("v", KeyboardKey::KEY_V),
    ("w", KeyboardKey::KEY_W),
    ("x", KeyboardKey::KEY_X),
    ("y", KeyboardKey::KEY_Y),
    ("z", KeyboardKey::KEY_Z),
    ("0", KeyboardKey::KEY_ZERO),
    ("1", KeyboardKey::KEY_ONE),
    ("2", KeyboardKey::KEY_TWO),
    ("3", KeyboardKey::KEY_THREE),
    ("4", KeyboardKey::KEY_FOUR),
    ("5", KeyboardKey::KEY_FIVE),
    ("6", KeyboardKey::KEY_SIX),
    ("7", KeyboardKey::KEY_SEVEN),
    ("8", KeyboardKey::KEY_EIGHT),
    ("9", KeyboardKey::KEY_NINE),
    ("Space", KeyboardKey::KEY_SPACE),
    (" ", KeyboardKey::KEY_SPACE),
    ("Enter", KeyboardKey::KEY_ENTER),
    ("Escape", KeyboardKey::KEY_ESCAPE),
    ("Tab", KeyboardKey::KEY_TAB),
    ("Backspace", KeyboardKey::KEY_BACKSPACE),
    ("Shift", KeyboardKey::KEY_LEFT_SHIFT),
    ("ShiftRight", KeyboardKey::KEY_RIGHT_SHIFT),
    ("Control", KeyboardKey::KEY_LEFT_CONTROL),
    ("ControlRight", KeyboardKey::KEY_RIGHT_CONTROL),
    ("Alt", KeyboardKey::KEY_LEFT_ALT),
    ("AltRight", KeyboardKey::KEY_RIGHT_ALT),
    (",", KeyboardKey::KEY_COMMA),
    (".", KeyboardKey::KEY_PERIOD),
    ("/", KeyboardKey::KEY_SLASH),
    (";", KeyboardKey::KEY_SEMICOLON),
    ("F10", KeyboardKey::KEY_F10),
    ("F11", KeyboardKey::KEY_F11),
    ("F12", KeyboardKey::KEY_F12),
];

/// Look up a key by name.
pub fn key_from_name(name: &str) -> Option<KeyboardKey> {
    KEY_NAMES
        .iter()
        .find(|(n, _)| *n == name || (n.len() == 1 && n.eq_ignore_ascii_case(name)))
        .map(|(_, key)| *key)
}

/// Canonical name of a key, if it is in the table.
pub fn key_name(key: KeyboardKey) -> Option<&'static str> {
    KEY_NAMES.iter().find(|(_, k)| *k == key).map(|(n, _)| *n)
}

/// Input settings that are not tied to a head.
#[derive(Resource, Debug, Clone, Copy)]
pub struct InputState {
    /// Toggles the debug overlay.
    pub debug_toggle: KeyboardKey,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            debug_toggle: KeyboardKey::KEY_F11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters_resolve() {
        assert_eq!(key_from_name("ArrowUp"), Some(KeyboardKey::KEY_UP));
        assert_eq!(key_from_name("m"), Some(KeyboardKey::KEY_M));
        assert_eq!(key_from_name("M"), Some(KeyboardKey::KEY_M));
        assert_eq!(key_from_name(" "), Some(KeyboardKey::KEY_SPACE));
    }

    #[test]
    fn unknown_names_are_none() {
        assert_eq!(key_from_name("arrowup"), None);
        assert_eq!(key_from_name(""), None);
        assert_eq!(key_from_name("Hyper"), None);
    }

    #[test]
    fn canonical_names_round_trip() {
        for (name, key) in KEY_NAMES {
            let canonical = key_name(*key).unwrap();
            assert_eq!(key_from_name(canonical), Some(*key), "{name}");
        }
        assert_eq!(key_name(KeyboardKey::KEY_SPACE), Some("Space"));
    }

    #[test]
    fn debug_toggle_defaults_to_f11() {
        assert_eq!(InputState::default().debug_toggle, KeyboardKey::KEY_F11);
    }
}
