//! Canvas membership marker.
//!
//! [`OnCanvas`] is the sprite's back-reference to the game loop: it is
//! inserted exactly when the entity is added to the
//! [`SpriteRegistry`](crate::resources::registry::SpriteRegistry) and the
//! entity is despawned when it is removed from it.

use bevy_ecs::prelude::Component;

/// Marks an entity that is currently part of the sprite registry.
#[derive(Component, Clone, Copy, Debug)]
pub struct OnCanvas;
