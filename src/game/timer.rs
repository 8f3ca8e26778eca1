//! Wall-clock interval timer for periodic, non-simulation work.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    interval: Duration,
    last: Instant,
}

impl IntervalTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last: now }
    }

    /// Negative or NaN intervals fire every tick; an interval too large for
    /// `Duration` never fires.
    pub fn from_secs(secs: f32, now: Instant) -> Self {
        let interval = Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::MAX);
        Self::new(interval, now)
    }

    /// True once per elapsed interval. The schedule restarts from `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_interval() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_millis(500), start);
        assert!(!timer.tick(start + Duration::from_millis(200)));
        assert!(timer.tick(start + Duration::from_millis(500)));
        assert!(!timer.tick(start + Duration::from_millis(700)));
        assert!(timer.tick(start + Duration::from_millis(1000)));
    }

    #[test]
    fn test_from_secs_out_of_range() {
        let start = Instant::now();
        let mut huge = IntervalTimer::from_secs(f32::INFINITY, start);
        assert!(!huge.tick(start + Duration::from_secs(3600)));

        let mut negative = IntervalTimer::from_secs(-1.0, start);
        assert!(negative.tick(start));

        let mut nan = IntervalTimer::from_secs(f32::NAN, start);
        assert!(nan.tick(start));
    }

    #[test]
    fn test_from_secs_matches_config_value() {
        let start = Instant::now();
        let mut timer = IntervalTimer::from_secs(0.5, start);
        assert!(!timer.tick(start + Duration::from_millis(499)));
        assert!(timer.tick(start + Duration::from_millis(500)));
    }
}
