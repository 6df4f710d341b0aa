//! World-space position component.
//!
//! [`MapPosition`] is the pivot of a sprite: the point it moves, rotates
//! around and is drawn centered on.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position of an entity on the drawing surface, in pixels.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
