/// Gap watchdog: remembers when the object was last actually seen and
/// reports when the silence has gone on longer than the configured gap.
#[derive(Debug, Clone)]
pub struct ResetClock {
    last_detection: Option<f32>,
    gap: f32, // seconds
}

impl ResetClock {
    #[inline]
    pub fn new(gap: f32) -> Self {
        Self {
            last_detection: None,
            gap,
        }
    }

    /// Records the timestamp of a frame that carried a real detection.
    #[inline]
    pub fn touch(&mut self, timestamp: f32) {
        self.last_detection = Some(timestamp);
    }

    /// True once more than `gap` seconds have passed since the last
    /// detection. Never true before the first detection.
    #[inline]
    pub fn expired(&self, now: f32) -> bool {
        match self.last_detection {
            Some(last) => now - last > self.gap,
            None => false,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.last_detection = None;
    }

    #[inline]
    pub fn last_detection(&self) -> Option<f32> {
        self.last_detection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_expires_before_first_detection() {
        let clock = ResetClock::new(5.0);

        assert!(!clock.expired(1000.0));
    }

    #[test]
    fn expires_only_after_the_gap() {
        let mut clock = ResetClock::new(5.0);
        clock.touch(10.0);

        assert!(!clock.expired(10.0));
        assert!(!clock.expired(15.0));
        assert!(clock.expired(15.1));

        clock.touch(15.1);
        assert!(!clock.expired(16.0));
    }

    #[test]
    fn clear_disarms_the_clock() {
        let mut clock = ResetClock::new(5.0);
        clock.touch(3.0);
        clock.clear();

        assert!(!clock.expired(100.0));
        assert_eq!(clock.last_detection(), None);
    }
}
