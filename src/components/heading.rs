//! Heading component: facing angle plus its cached unit direction.
//!
//! The angle is in radians, `0` faces along positive x and positive angles turn
//! clockwise on screen (y grows downwards). The angle is kept normalized into
//! `[0, 2π)` and [`Heading::direction`] always equals `(cos angle, sin angle)`.

use std::f32::consts::TAU;

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Facing angle and unit direction vector of a sprite.
#[derive(Component, Clone, Copy, Debug)]
pub struct Heading {
    angle: f32,
    direction: Vector2,
}

impl Default for Heading {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Heading {
    /// Create a heading from any angle in radians. The angle is normalized.
    pub fn new(angle: f32) -> Self {
        let angle = normalize_angle(angle);
        Self {
            angle,
            direction: dir_from_angle(angle),
        }
    }

    /// Angle in radians, within `[0, 2π)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Unit vector pointing where the sprite faces.
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Turn by `radians` (negative turns counter-clockwise on screen).
    pub fn rotate_by(&mut self, radians: f32) {
        *self = Heading::new(self.angle + radians);
    }

    /// Whether the sprite faces "left", i.e. the angle lies strictly inside
    /// `(π/2, 3π/2)`. Artwork is authored facing right, so left-facing sprites
    /// are drawn vertically mirrored to stay upright.
    pub fn faces_left(&self) -> bool {
        use std::f32::consts::{FRAC_PI_2, PI};
        self.angle > FRAC_PI_2 && self.angle < PI + FRAC_PI_2
    }
}

/// Wrap any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Unit direction `(cos angle, sin angle)`.
pub fn dir_from_angle(angle: f32) -> Vector2 {
    Vector2 {
        x: angle.cos(),
        y: angle.sin(),
    }
}
