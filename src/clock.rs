use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source used for search budgets.
pub trait Clock {
    /// Time passed since the clock's origin.
    fn elapsed(&self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that advances by a fixed step each time it is read.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    now: Cell<Duration>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn elapsed(&self) -> Duration {
        let now = self.now.get() + self.step;
        self.now.set(now);
        now
    }
}

/// Produces a fresh clock for every solve so repeated solves get the full budget.
pub trait ClockSource {
    type Clock: Clock;

    fn start(&self) -> Self::Clock;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClockSource;

impl ClockSource for SystemClockSource {
    type Clock = SystemClock;

    fn start(&self) -> SystemClock {
        SystemClock::start()
    }
}

impl ClockSource for SteppingClock {
    type Clock = SteppingClock;

    fn start(&self) -> SteppingClock {
        SteppingClock::new(self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_clock_advances_per_read() {
        let clock = SteppingClock::new(Duration::from_secs(2));
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
        assert_eq!(clock.elapsed(), Duration::from_secs(4));
    }

    #[test]
    fn stepping_source_restarts_from_zero() {
        let source = SteppingClock::new(Duration::from_millis(5));
        let first = source.start();
        first.elapsed();
        first.elapsed();
        assert_eq!(source.start().elapsed(), Duration::from_millis(5));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClockSource.start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
