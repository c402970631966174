//! Fixed-rate tick pacing
//!
//! Best effort: a late tick pushes the schedule back instead of bursting to
//! catch up, so the game never runs faster than the target rate.

use std::time::{Duration, Instant};

/// Blocks the caller until the next tick is due
pub trait Clock {
    fn wait_for_next_tick(&mut self);
}

/// Clock with a fixed tick period
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    period: Duration,
    next: Instant,
}

impl FixedRateClock {
    /// First tick is due immediately
    pub fn new(ticks_per_second: u32) -> Self {
        Self::starting_at(ticks_per_second, Instant::now())
    }

    pub fn starting_at(ticks_per_second: u32, now: Instant) -> Self {
        let rate = ticks_per_second.max(1);
        Self {
            period: Duration::from_secs(1) / rate,
            next: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick should run
    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the tick after the one just run
    pub fn advance(&mut self, now: Instant) {
        let scheduled = self.next + self.period;
        self.next = if scheduled < now {
            now + self.period
        } else {
            scheduled
        };
    }
}

impl Clock for FixedRateClock {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
        }
        self.advance(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_for_60hz() {
        let clock = FixedRateClock::new(60);
        assert_eq!(clock.period(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_zero_rate_is_clamped() {
        let clock = FixedRateClock::new(0);
        assert_eq!(clock.period(), Duration::from_secs(1));
    }

    #[test]
    fn test_due_and_advance_on_schedule() {
        let start = Instant::now();
        let mut clock = FixedRateClock::starting_at(60, start);
        assert!(clock.is_due(start));

        clock.advance(start);
        assert_eq!(clock.next_deadline(), start + clock.period());
        assert!(!clock.is_due(start + Duration::from_millis(5)));
        assert!(clock.is_due(start + clock.period()));
    }

    #[test]
    fn test_late_tick_does_not_burst() {
        let start = Instant::now();
        let mut clock = FixedRateClock::starting_at(60, start);
        let late = start + Duration::from_millis(200);

        clock.advance(late);
        assert_eq!(clock.next_deadline(), late + clock.period());
        assert!(!clock.is_due(late));
    }

    #[test]
    fn test_wait_blocks_until_deadline() {
        let start = Instant::now();
        let mut clock = FixedRateClock::starting_at(100, start);
        clock.advance(start);
        clock.wait_for_next_tick();
        assert!(start.elapsed() >= Duration::from_millis(10));
        assert!(clock.next_deadline() >= start + Duration::from_millis(20));
    }
}
