//! Keyboard events.
//!
//! [`KeyEvent`] is triggered for every key-down and key-up edge of a key some
//! head is bound to. Input is global: events are not scoped to window focus
//! beyond what the window system delivers. Holding a key produces no further
//! events until it is released.

use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

/// A key was pressed (`pressed == true`) or released.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub key: KeyboardKey,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(key: KeyboardKey) -> Self {
        Self { key, pressed: true }
    }

    pub fn up(key: KeyboardKey) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}
