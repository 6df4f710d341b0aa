//! Event types used by the game.
//!
//! Submodules:
//! - [`input`] – key press/release edges for bound keys
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`timer`] – timer expiration notifications
pub mod input;
pub mod switchdebug;
pub mod timer;
