//! Fixed-rate tick clock.
//!
//! The game loop steps sprites at a fixed period (50 ms by default) regardless
//! of the render frame rate. [`TickClock::advance`] accumulates frame time and
//! reports how many whole ticks are due.

use bevy_ecs::prelude::Resource;

/// Default tick period in milliseconds (20 ticks per second).
pub const DEFAULT_TICK_MS: u32 = 50;

/// Upper bound of ticks run for one frame; a longer stall drops the backlog.
const MAX_CATCH_UP_TICKS: u32 = 5;

/// Fraction of a period treated as rounding error when counting due ticks.
const TICK_EPSILON: f32 = 1.0e-4;

#[derive(Resource, Debug, Clone, Copy)]
pub struct TickClock {
    period: f32,
    accumulator: f32,
    /// Ticks run since start.
    pub ticks: u64,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::from_millis(DEFAULT_TICK_MS)
    }
}

impl TickClock {
    pub fn from_millis(ms: u32) -> Self {
        Self {
            period: ms.max(1) as f32 / 1000.0,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Tick period in seconds.
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Add `dt` seconds and return the number of ticks due now.
    ///
    /// Negative and non-finite `dt` count as no time.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }
        let whole = (self.accumulator / self.period + TICK_EPSILON).floor();
        let due = if whole > MAX_CATCH_UP_TICKS as f32 {
            log::debug!("Dropping {} late ticks", whole - MAX_CATCH_UP_TICKS as f32);
            self.accumulator = 0.0;
            MAX_CATCH_UP_TICKS
        } else {
            let due = whole as u32;
            self.accumulator = (self.accumulator - due as f32 * self.period).max(0.0);
            due
        };
        self.ticks += due as u64;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_partial_frames() {
        let mut clock = TickClock::from_millis(50);
        assert_eq!(clock.advance(0.03), 0);
        assert_eq!(clock.advance(0.03), 1);
        assert_eq!(clock.advance(0.04), 1);
        assert_eq!(clock.ticks, 2);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = TickClock::from_millis(50);
        assert_eq!(clock.advance(10.0), MAX_CATCH_UP_TICKS);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn non_finite_and_huge_deltas_do_not_hang() {
        let mut clock = TickClock::from_millis(50);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(1.0e30), MAX_CATCH_UP_TICKS);
        assert_eq!(clock.advance(0.05), 1);
        assert_eq!(clock.ticks, MAX_CATCH_UP_TICKS as u64 + 1);
    }

    #[test]
    fn zero_period_is_clamped() {
        let clock = TickClock::from_millis(0);
        assert!(clock.period() > 0.0);
    }
}
