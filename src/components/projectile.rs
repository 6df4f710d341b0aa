//! Projectile marker component.
//!
//! A projectile is a plain sprite whose only distinction is its bounded
//! lifetime, carried by a [`Ttl`](super::ttl::Ttl) set by the head that
//! launched it.

use bevy_ecs::prelude::Component;

/// Fixed draw size of a projectile, in pixels.
pub const PROJECTILE_SIZE: f32 = 20.0;
/// Pixels per tick a projectile travels along its heading.
pub const PROJECTILE_SPEED: f32 = 3.0;
/// Seconds before a launched projectile is removed from the canvas.
pub const PROJECTILE_LIFETIME_SECS: f32 = 7.0;

/// Tags an entity as a launched projectile.
#[derive(Component, Clone, Copy, Debug)]
pub struct Projectile {
    /// The head that launched it.
    pub launcher: bevy_ecs::entity::Entity,
}
