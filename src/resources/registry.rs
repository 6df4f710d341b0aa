//! Ordered sprite registry.
//!
//! [`SpriteRegistry`] is the game loop's collection of sprites. Its order is the
//! draw order: earlier entries are stepped and drawn first, so later entries
//! paint over them. Entries are unique.
//!
//! The registry only tracks membership. Use
//! [`crate::game::add_sprite`] and [`crate::game::remove_sprite`] to keep the
//! [`OnCanvas`](crate::components::oncanvas::OnCanvas) back-reference and the
//! entity lifetime in sync with it.

use bevy_ecs::prelude::*;

#[derive(Resource, Debug, Default, Clone)]
pub struct SpriteRegistry {
    order: Vec<Entity>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity` at `index` (append when `None`).
    ///
    /// An index past the end appends. Returns `false` without changing anything
    /// when the entity is already registered.
    pub fn insert(&mut self, entity: Entity, index: Option<usize>) -> bool {
        if self.contains(entity) {
            return false;
        }
        match index {
            Some(i) => self.order.insert(i.min(self.order.len()), entity),
            None => self.order.push(entity),
        }
        true
    }

    /// Remove `entity`. Returns `false` if it was not registered.
    pub fn remove(&mut self, entity: Entity) -> bool {
        match self.position(entity) {
            Some(i) => {
                self.order.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.order.contains(&entity)
    }

    pub fn position(&self, entity: Entity) -> Option<usize> {
        self.order.iter().position(|e| *e == entity)
    }

    /// Entities in draw order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
