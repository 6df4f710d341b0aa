//! Input systems.
//!
//! [`update_input_state`] polls raylib for press/release edges of every key a
//! head is bound to and triggers a [`KeyEvent`] per edge. Key auto-repeat is
//! not reported. The debug toggle key triggers a
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;
use smallvec::SmallVec;

use crate::components::head::Head;
use crate::events::input::KeyEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard edges and trigger input events.
pub fn update_input_state(
    rl: NonSend<raylib::RaylibHandle>,
    input: Res<InputState>,
    heads: Query<&Head>,
    mut commands: Commands,
) {
    if rl.is_key_pressed(input.debug_toggle) {
        commands.trigger(SwitchDebugEvent {});
    }

    let mut watched: SmallVec<[KeyboardKey; 16]> = SmallVec::new();
    for head in heads.iter() {
        for key in head.bindings.keys() {
            if !watched.contains(&key) {
                watched.push(key);
            }
        }
    }

    for key in watched {
        if rl.is_key_pressed(key) {
            commands.trigger(KeyEvent::down(key));
        }
        if rl.is_key_released(key) {
            commands.trigger(KeyEvent::up(key));
        }
    }
}
