//! Per-tick sprite kinematics.
//!
//! Once per tick every sprite on the canvas is stepped in registry order:
//! rotation first (one degree per tick scaled by the rotate speed, then the
//! angle is re-normalized and the direction recomputed), then translation
//! along the updated direction by the move speed.
use bevy_ecs::prelude::*;

use crate::components::heading::Heading;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::resources::registry::SpriteRegistry;

/// One degree in radians, the base rotation step.
const DEGREE: f32 = std::f32::consts::PI / 180.0;

/// Advance one sprite by one tick.
pub fn step(position: &mut MapPosition, heading: &mut Heading, motion: &Motion) {
    if let Some(rotate_speed) = motion.rotate_speed {
        heading.rotate_by(DEGREE * rotate_speed);
    }
    if let Some(move_speed) = motion.move_speed {
        let dir = heading.direction();
        position.pos.x += dir.x * move_speed;
        position.pos.y += dir.y * move_speed;
    }
}

/// Step every registered sprite, in draw order.
pub fn step_system(
    registry: Res<SpriteRegistry>,
    mut sprites: Query<(&mut MapPosition, &mut Heading, &Motion)>,
) {
    for entity in registry.iter() {
        if let Ok((mut position, mut heading, motion)) = sprites.get_mut(entity) {
            if motion.is_moving() || motion.is_rotating() {
                step(&mut position, &mut heading, motion);
            }
        }
    }
}
