// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge rate limiting.

use crate::time::{Duration, HostTime};

/// Lets at most one call through per fixed window.
///
/// The first call passes and opens a window of the configured length. Calls
/// inside the window are rejected and do not extend it. The first call at or
/// after the window's end passes and opens the next one. Rejected calls are
/// dropped, never replayed later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    window: Duration,
    open_until: Option<HostTime>,
}

impl Throttle {
    /// Creates a throttle that has not let anything through yet.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            open_until: None,
        }
    }

    /// Returns whether a call at `now` may proceed, recording it if so.
    pub fn try_acquire(&mut self, now: HostTime) -> bool {
        if let Some(until) = self.open_until
            && now < until
        {
            return false;
        }
        self.open_until = Some(now.checked_add(self.window).unwrap_or(HostTime(u64::MAX)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_passes() {
        let mut t = Throttle::new(Duration::from_millis(500));
        assert!(t.try_acquire(HostTime(123)));
    }

    #[test]
    fn calls_inside_window_are_rejected() {
        let mut t = Throttle::new(Duration::from_millis(500));
        assert!(t.try_acquire(HostTime(0)));
        assert!(!t.try_acquire(HostTime(1)));
        assert!(!t.try_acquire(HostTime(499_999)));
        assert!(t.try_acquire(HostTime(500_000)), "window end is exclusive");
    }

    #[test]
    fn rejected_calls_do_not_extend_window() {
        let mut t = Throttle::new(Duration::from_millis(500));
        assert!(t.try_acquire(HostTime(0)));
        assert!(!t.try_acquire(HostTime(400_000)));
        assert!(t.try_acquire(HostTime(500_000)));
    }

    #[test]
    fn saturates_near_end_of_time() {
        let mut t = Throttle::new(Duration::from_millis(500));
        assert!(t.try_acquire(HostTime(u64::MAX - 1)));
        assert!(!t.try_acquire(HostTime(u64::MAX - 1)));
    }
}
