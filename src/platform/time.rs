//! Fixed-period timers driven by frame time
//!
//! The game runs three independent intervals (spawner, player movement,
//! physics). Each accumulates elapsed frame time and fires once per full
//! period, up to `MAX_TIMER_FIRINGS` per frame. Backlog beyond that is
//! dropped rather than replayed, so a stalled tab resumes at normal speed.

use crate::consts::MAX_TIMER_FIRINGS;
use crate::tuning::Tuning;

/// Shortest allowed period; guards against zero or negative tuning values
const MIN_PERIOD_MS: f64 = 1.0;

/// One repeating timer
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    period_ms: f64,
    elapsed_ms: f64,
}

impl Interval {
    pub fn new(period_ms: f64) -> Self {
        let period_ms = if period_ms.is_finite() {
            period_ms.max(MIN_PERIOD_MS)
        } else {
            MIN_PERIOD_MS
        };
        Self {
            period_ms,
            elapsed_ms: 0.0,
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Add elapsed time and return how many times the timer fires
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;

        let due = (self.elapsed_ms / self.period_ms).floor();
        if due >= MAX_TIMER_FIRINGS as f64 {
            self.elapsed_ms %= self.period_ms;
            return MAX_TIMER_FIRINGS;
        }
        self.elapsed_ms -= due * self.period_ms;
        due as u32
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}

/// Firing counts for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerFirings {
    pub spawn: u32,
    pub movement: u32,
    pub physics: u32,
}

/// The session's three timers
#[derive(Debug, Clone, PartialEq)]
pub struct Timers {
    pub spawn: Interval,
    pub movement: Interval,
    pub physics: Interval,
}

impl Timers {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spawn: Interval::new(tuning.spawn_interval_ms),
            movement: Interval::new(tuning.movement_tick_ms),
            physics: Interval::new(tuning.physics_tick_ms),
        }
    }

    /// Advance all timers by the same frame time
    pub fn advance(&mut self, dt_ms: f64) -> TimerFirings {
        TimerFirings {
            spawn: self.spawn.advance(dt_ms),
            movement: self.movement.advance(dt_ms),
            physics: self.physics.advance(dt_ms),
        }
    }

    pub fn reset(&mut self) {
        self.spawn.reset();
        self.movement.reset();
        self.physics.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_accumulates() {
        let mut interval = Interval::new(16.0);
        assert_eq!(interval.advance(10.0), 0);
        assert_eq!(interval.advance(10.0), 1);
        // 4ms carried over
        assert_eq!(interval.advance(12.0), 1);
        assert_eq!(interval.advance(32.0), 2);
    }

    #[test]
    fn test_backlog_dropped() {
        let mut interval = Interval::new(16.0);
        assert_eq!(interval.advance(5000.0), MAX_TIMER_FIRINGS);
        // 5000 % 16 = 8 left over, nothing replayed
        assert_eq!(interval.advance(7.0), 0);
        assert_eq!(interval.advance(1.0), 1);
    }

    #[test]
    fn test_bad_inputs() {
        let mut interval = Interval::new(0.0);
        assert_eq!(interval.period_ms(), MIN_PERIOD_MS);
        assert_eq!(interval.advance(-5.0), 0);
        assert_eq!(interval.advance(f64::NAN), 0);
        assert_eq!(Interval::new(f64::NAN).period_ms(), MIN_PERIOD_MS);
    }

    #[test]
    fn test_timers_fire_independently() {
        let mut timers = Timers::new(&Tuning::default());
        let mut spawn = 0;
        let mut physics = 0;
        let mut movement = 0;
        // 2 seconds of 20ms frames
        for _ in 0..100 {
            let f = timers.advance(20.0);
            spawn += f.spawn;
            physics += f.physics;
            movement += f.movement;
        }
        assert_eq!(spawn, 2);
        assert_eq!(physics, 125);
        assert_eq!(movement, 125);
    }

    #[test]
    fn test_reset() {
        let mut timers = Timers::new(&Tuning::default());
        timers.advance(900.0);
        timers.reset();
        assert_eq!(timers.advance(200.0).spawn, 0);
    }
}
