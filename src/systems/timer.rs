//! Countdown timers.
//!
//! [`update_timers`] advances every [`Timer`] by the frame delta. A finished
//! timer is removed from its entity and a [`TimerEvent`] carrying its signal is
//! triggered. Timers cannot be cancelled; they always fire once.
use bevy_ecs::prelude::*;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

pub fn update_timers(
    world_time: Res<WorldTime>,
    mut timers: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in timers.iter_mut() {
        timer.elapsed += world_time.delta;
        if timer.is_finished() {
            commands.entity(entity).remove::<Timer>();
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal.clone(),
            });
        }
    }
}
