//! Debug overlay toggle.
//!
//! While [`DebugMode`] is present the render system draws the overlay (FPS,
//! sprite count, position crosses and heading lines). F11 flips it through
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).

use bevy_ecs::prelude::Resource;

/// Marker resource: present while the debug overlay is shown.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
