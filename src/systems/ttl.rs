//! TTL (Time-to-live) system.
//!
//! This module provides the [`ttl_system`] that decrements TTL timers and
//! takes sprites off the canvas when their time runs out.
//!
//! # System Flow
//!
//! Each frame:
//!
//! 1. `ttl_system` iterates all entities with [`Ttl`](crate::components::ttl::Ttl)
//! 2. Decrements `remaining` by the frame delta
//! 3. When `remaining <= 0`, queues [`remove_sprite`] for the entity, which
//!    drops it from the registry and despawns it

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::ttl::Ttl;
use crate::game::remove_sprite;
use crate::resources::worldtime::WorldTime;

/// Decrements TTL and removes sprites when it reaches zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            commands.queue(move |world: &mut World| {
                if !remove_sprite(world, entity) && world.get_entity(entity).is_ok() {
                    // never made it onto the canvas
                    world.despawn(entity);
                }
                debug!("{:?} expired", entity);
            });
        }
    }
}
