//! Rate limiter for the moved signal

use std::time::{Duration, Instant};

/// Leading-edge throttle: passes at most once per interval
///
/// The first call passes immediately; later calls pass only once the
/// interval has elapsed since the last pass. Frame rate does not matter -
/// a 30 Hz and a 144 Hz loop both emit at the same bounded rate.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last_pass: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given minimum interval between passes
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: None,
        }
    }

    /// Check whether a call at `now` may pass, recording it if so
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_pass {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_pass = Some(now);
                true
            }
        }
    }

    /// The configured minimum interval
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_passes() {
        let mut throttle = Throttle::new(Duration::from_secs(1));
        assert!(throttle.ready(Instant::now()));
    }

    #[test]
    fn test_blocks_within_interval() {
        let mut throttle = Throttle::new(Duration::from_secs(1));
        let t0 = Instant::now();
        assert!(throttle.ready(t0));
        assert!(!throttle.ready(t0 + Duration::from_millis(500)));
        assert!(!throttle.ready(t0 + Duration::from_millis(999)));
    }

    #[test]
    fn test_passes_after_interval() {
        let mut throttle = Throttle::new(Duration::from_secs(1));
        let t0 = Instant::now();
        assert!(throttle.ready(t0));
        assert!(throttle.ready(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_rate_bounded_regardless_of_frame_rate() {
        // Simulate 4 seconds of 240 Hz frames; at a 1 s interval no more
        // than 5 passes are possible (leading edge plus one per second)
        let mut throttle = Throttle::new(Duration::from_secs(1));
        let t0 = Instant::now();
        let mut passes = 0;
        for frame in 0..(240 * 4) {
            let now = t0 + Duration::from_micros(frame * 1_000_000 / 240);
            if throttle.ready(now) {
                passes += 1;
            }
        }
        assert!(passes <= 5, "throttle passed {} times", passes);
        assert!(passes >= 4);
    }
}
