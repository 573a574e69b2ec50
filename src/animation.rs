use std::time::Duration;
use web_time::Instant;

pub const DEFAULT_SPIN_INTERVAL: Duration = Duration::from_millis(16);
pub const DEFAULT_TEXTURE_INTERVAL: Duration = Duration::from_millis(700);

/// Fixed-interval timer polled from the event loop.
///
/// Missed intervals are coalesced into a single firing rather than replayed.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }
}

/// Cyclic index into the loaded tile textures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextureCycle {
    index: usize,
    len: usize,
}

impl TextureCycle {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        (self.index < self.len).then_some(self.index)
    }

    /// Returns `false` without moving when there is nothing to cycle through.
    pub fn advance(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_cycle_wraps_in_order() {
        let mut cycle = TextureCycle::new(3);
        let mut seen = vec![cycle.current().unwrap()];
        for _ in 0..7 {
            assert!(cycle.advance());
            seen.push(cycle.current().unwrap());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn texture_cycle_stays_in_range() {
        for len in 1..5 {
            let mut cycle = TextureCycle::new(len);
            for _ in 0..100 {
                cycle.advance();
                assert!(cycle.current().unwrap() < len);
            }
        }
    }

    #[test]
    fn empty_texture_cycle_is_a_no_op() {
        let mut cycle = TextureCycle::new(0);
        for _ in 0..10 {
            assert!(!cycle.advance());
        }
        assert_eq!(cycle.current(), None);
        assert!(cycle.is_empty());
    }

    #[test]
    fn ticker_fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::start(Duration::from_millis(700), start);
        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(699)));
        assert!(ticker.poll(start + Duration::from_millis(700)));
        assert!(!ticker.poll(start + Duration::from_millis(1000)));
        assert!(ticker.poll(start + Duration::from_millis(1400)));
        assert_eq!(ticker.next_due(), start + Duration::from_millis(2100));
    }

    #[test]
    fn ticker_coalesces_missed_intervals() {
        let start = Instant::now();
        let mut ticker = Ticker::start(Duration::from_millis(16), start);
        let late = start + Duration::from_millis(500);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.next_due(), late + Duration::from_millis(16));
    }
}
