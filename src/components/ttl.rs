//! Time-to-live component for automatic sprite removal.
//!
//! The [`Ttl`] component counts down world time each frame. When the remaining
//! time reaches zero the entity is removed from the canvas (and despawned).
//! There is no callback and no way to cancel it short of removing the sprite.
//!
//! # Related
//!
//! - [`crate::systems::ttl::ttl_system`] – system that counts down and removes sprites

use bevy_ecs::prelude::Component;

/// Time-to-live that removes the sprite after a duration.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining time in seconds before removal.
    pub remaining: f32,
}

impl Ttl {
    /// Create a new Ttl with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
