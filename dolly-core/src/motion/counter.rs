//! Step counter shared between the pulse timer and the supervisory loop
//!
//! The pulse timer context is the only writer of `count`; the
//! supervisory loop only reads it. Because of that single writer, plain
//! atomic loads and stores are enough and the counter works on cores
//! without read-modify-write atomics.
//!
//! `limit` is written by the supervisory loop and read by the timer: the
//! timer never advances `count` past it, so a run halts exactly on each
//! shutter boundary however late the loop notices.

use portable_atomic::{AtomicU32, Ordering};

/// Motor step counter with an advance limit
#[derive(Debug)]
pub struct StepCounter {
    count: AtomicU32,
    limit: AtomicU32,
}

impl Default for StepCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl StepCounter {
    /// Create a counter at zero with nothing allowed
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
            limit: AtomicU32::new(0),
        }
    }

    /// Zero the count and set the first limit
    ///
    /// Call only while the pulse timer is stopped.
    pub fn reset(&self, limit: u32) {
        self.count.store(0, Ordering::Release);
        self.limit.store(limit, Ordering::Release);
    }

    /// Steps taken so far
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }

    /// Current advance limit
    pub fn limit(&self) -> u32 {
        self.limit.load(Ordering::Acquire)
    }

    /// Move the advance limit
    pub fn set_limit(&self, limit: u32) {
        self.limit.store(limit, Ordering::Release);
    }

    /// One timer tick: pulse and count a step unless the limit is reached
    ///
    /// Pulse timer context only. Returns whether a step was taken.
    pub fn tick(&self, pulse: impl FnOnce()) -> bool {
        let count = self.count.load(Ordering::Relaxed);
        if count >= self.limit.load(Ordering::Acquire) {
            return false;
        }
        pulse();
        self.count.store(count + 1, Ordering::Release);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_stops_at_limit() {
        let counter = StepCounter::new();
        counter.reset(3);

        let mut pulses = 0;
        for _ in 0..10 {
            counter.tick(|| pulses += 1);
        }

        assert_eq!(counter.count(), 3);
        assert_eq!(pulses, 3);
        assert_eq!(counter.count(), counter.limit());
        assert!(!counter.tick(|| pulses += 1));
        assert_eq!(pulses, 3);
    }

    #[test]
    fn test_raising_limit_resumes_counting() {
        let counter = StepCounter::new();
        counter.reset(2);
        counter.tick(|| {});
        counter.tick(|| {});
        assert!(!counter.tick(|| {}));

        counter.set_limit(4);
        assert!(counter.tick(|| {}));
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn test_reset_zeroes_count() {
        let counter = StepCounter::new();
        counter.reset(5);
        counter.tick(|| {});
        counter.reset(1);
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.limit(), 1);
    }

    #[test]
    fn test_new_counter_allows_nothing() {
        let counter = StepCounter::new();
        assert!(!counter.tick(|| {}));
    }
}
