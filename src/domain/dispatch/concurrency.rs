/// Number of sentences dispatched together.
///
/// Starts at 1 and rises by one every `interval` accepted sentences until it
/// reaches `cap`. It never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrencyLevel {
    current: usize,
    cap: usize,
    interval: usize,
}

impl ConcurrencyLevel {
    pub fn new(cap: usize, interval: usize) -> Self {
        Self {
            current: 1,
            cap: cap.max(1),
            interval: interval.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Apply the ramp-up rule once `accepted` sentences have been taken in.
    /// Returns true when the level was raised.
    pub fn record_accepted(&mut self, accepted: usize) -> bool {
        if accepted > 0 && accepted % self.interval == 0 && self.current < self.cap {
            self.current += 1;
            true
        } else {
            false
        }
    }
}
