//! Per-sprite move/rotate state.
//!
//! [`Motion`] holds two independent optional speeds. A present `move_speed`
//! means the sprite is moving along its heading; a present `rotate_speed`
//! means it is turning. Both are applied once per tick by
//! [`crate::systems::step::step_system`].

use bevy_ecs::prelude::Component;

/// Move and rotate intent of a sprite.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    /// Pixels per tick along the heading. Negative travels backwards.
    pub move_speed: Option<f32>,
    /// Degrees per tick. Positive turns clockwise on screen.
    pub rotate_speed: Option<f32>,
}

impl Motion {
    pub fn start_moving(&mut self, speed: f32) {
        self.move_speed = Some(speed);
    }

    pub fn stop_moving(&mut self) {
        self.move_speed = None;
    }

    pub fn start_rotating(&mut self, speed: f32) {
        self.rotate_speed = Some(speed);
    }

    pub fn stop_rotating(&mut self) {
        self.rotate_speed = None;
    }

    pub fn is_moving(&self) -> bool {
        self.move_speed.is_some()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotate_speed.is_some()
    }
}
