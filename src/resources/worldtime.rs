//! Simulation time resource.

use bevy_ecs::prelude::Resource;

/// Wall-clock time as seen by the game, advanced once per frame.
///
/// Timers and time-to-live countdowns read `delta`; sprite motion does not, it
/// is driven by [`TickClock`](super::tickclock::TickClock) ticks. `elapsed` and
/// `frame_count` are shown by the debug overlay.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
}
