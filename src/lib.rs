//! Head Launch library.
//!
//! Exposes the game's ECS components, events, resources and systems for the
//! binary and for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
