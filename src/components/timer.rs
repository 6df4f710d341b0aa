// Counts a number of seconds and then triggers a TimerEvent carrying the signal.
use bevy_ecs::prelude::Component;

/// Signal emitted when a head's launch cooldown is over.
pub const LAUNCH_READY_SIGNAL: &str = "launch_ready";

#[derive(Component, Debug, Clone)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub signal: String,
}
impl Timer {
    pub fn new(duration: f32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
        }
    }
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
