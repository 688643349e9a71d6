//! Income timer - elapsed-time accumulator polled once per simulation tick

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct IncomeTimer {
    interval: Duration,
    accumulated: Duration,
}

impl IncomeTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Add elapsed time. Returns true, and starts over from zero, once the
    /// accumulated time reaches the interval.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated += elapsed;
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            return true;
        }
        false
    }

    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_interval_is_reached() {
        let mut timer = IncomeTimer::new(Duration::from_secs(300));

        assert!(!timer.advance(Duration::from_secs(200)));
        assert!(!timer.advance(Duration::from_secs(99)));
        assert!(timer.advance(Duration::from_secs(1)));
    }

    #[test]
    fn test_overshoot_is_discarded_on_reset() {
        let mut timer = IncomeTimer::new(Duration::from_secs(300));

        assert!(timer.advance(Duration::from_secs(450)));
        assert_eq!(timer.remaining(), Duration::from_secs(300));
        assert!(!timer.advance(Duration::from_secs(299)));
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut timer = IncomeTimer::new(Duration::from_secs(60));
        timer.advance(Duration::from_secs(59));

        timer.reset();

        assert_eq!(timer.remaining(), Duration::from_secs(60));
    }
}
