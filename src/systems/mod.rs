//! Game systems and observers.
//!
//! Submodules overview
//! - [`head`] – key dispatch to heads, launching and cooldown re-arm
//! - [`imageload`] – texture loading and sprite size resolution
//! - [`input`] – read key edges from Raylib and trigger key events
//! - [`render`] – draw the canvas in registry order
//! - [`step`] – per-tick rotation and movement
//! - [`time`] – update frame time and delta
//! - [`timer`] – count down timers and trigger their events
//! - [`ttl`] – remove sprites whose lifetime ran out

pub mod head;
pub mod imageload;
pub mod input;
pub mod render;
pub mod step;
pub mod time;
pub mod timer;
pub mod ttl;
