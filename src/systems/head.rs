//! Head input handling and launch cooldown.
//!
//! [`head_key_observer`] dispatches every [`KeyEvent`] through each head's
//! [`KeyBindings`](crate::components::head::KeyBindings) table:
//!
//! | action     | key down              | key up            |
//! |------------|-----------------------|-------------------|
//! | forward    | move speed `+1`       | stop moving       |
//! | backward   | move speed `-1`       | stop moving       |
//! | turn right | rotate speed `+1`     | stop rotating     |
//! | turn left  | rotate speed `-1`     | stop rotating     |
//! | launch     | [`start_launching`]   | [`stop_launching`] |
//!
//! Launching arms a one second cooldown [`Timer`]; only
//! [`launch_ready_observer`] clears it. Releasing the launch key restores the
//! idle image but does not touch the cooldown. A launch key-down arriving
//! while the key is still held (auto-repeat, duplicate edges) is ignored, so
//! a key held past the cooldown does not launch again until it is released
//! and pressed anew.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::head::{HEAD_WIDTH, Head, HeadAction, LAUNCH_COOLDOWN_SECS};
use crate::components::heading::Heading;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::sprite::Sprite;
use crate::components::timer::{LAUNCH_READY_SIGNAL, Timer};
use crate::events::input::KeyEvent;
use crate::events::timer::TimerEvent;
use crate::game::spawn_projectile;

/// Apply a key edge to every head bound to that key.
pub fn head_key_observer(
    trigger: On<KeyEvent>,
    mut heads: Query<(
        Entity,
        &mut Head,
        &mut Motion,
        &mut Sprite,
        &MapPosition,
        &Heading,
    )>,
    mut commands: Commands,
) {
    let event = trigger.event();
    for (entity, mut head, mut motion, mut sprite, position, heading) in heads.iter_mut() {
        let Some(action) = head.bindings.action_for(event.key) else {
            continue;
        };
        match (action, event.pressed) {
            (HeadAction::Forward, true) => motion.start_moving(1.0),
            (HeadAction::Backward, true) => motion.start_moving(-1.0),
            (HeadAction::Forward | HeadAction::Backward, false) => motion.stop_moving(),
            (HeadAction::TurnRight, true) => motion.start_rotating(1.0),
            (HeadAction::TurnLeft, true) => motion.start_rotating(-1.0),
            (HeadAction::TurnLeft | HeadAction::TurnRight, false) => motion.stop_rotating(),
            (HeadAction::Launch, true) => start_launching(
                &mut commands,
                entity,
                &mut head,
                &mut sprite,
                position,
                heading,
            ),
            (HeadAction::Launch, false) => stop_launching(&mut head, &mut sprite),
        }
    }
}

/// Show the launching image and, unless cooling down, launch a projectile.
pub fn start_launching(
    commands: &mut Commands,
    entity: Entity,
    head: &mut Head,
    sprite: &mut Sprite,
    position: &MapPosition,
    heading: &Heading,
) {
    sprite.tex_key.clone_from(&head.launching_tex);
    if head.launch_held {
        return;
    }
    head.launch_held = true;
    if !head.can_launch {
        return;
    }
    head.can_launch = false;
    commands
        .entity(entity)
        .insert(Timer::new(LAUNCH_COOLDOWN_SECS, LAUNCH_READY_SIGNAL));

    let head_width = sprite.width.unwrap_or(HEAD_WIDTH);
    let projectile = spawn_projectile(commands, entity, head, head_width, position, heading);
    debug!("{:?} launched {:?}", entity, projectile);
}

/// Restore the idle image and accept the next launch press.
pub fn stop_launching(head: &mut Head, sprite: &mut Sprite) {
    head.launch_held = false;
    sprite.tex_key.clone_from(&head.idle_tex);
}

/// Re-arm a head when its cooldown timer fires.
pub fn launch_ready_observer(trigger: On<TimerEvent>, mut heads: Query<&mut Head>) {
    let event = trigger.event();
    if event.signal != LAUNCH_READY_SIGNAL {
        return;
    }
    if let Ok(mut head) = heads.get_mut(event.entity) {
        head.can_launch = true;
        debug!("{:?} can launch again", event.entity);
    }
}
