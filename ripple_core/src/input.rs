// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input policy for the viewport.
//!
//! [`ViewportEvents`] decides what a click or touch-start on the viewport
//! should do; the [`Viewport`](crate::viewport::Viewport) carries the
//! decision out. Each event kind passes through its own [`Throttle`] first.
//!
//! Touch devices usually synthesize a click after a touch. A touch-start
//! therefore sets a suppression flag, and the next click that gets past the
//! click throttle clears the flag instead of spawning a second indicator.

use kurbo::Point;

use crate::throttle::Throttle;
use crate::time::{Duration, HostTime};

/// Window length both throttles default to.
pub const DEFAULT_THROTTLE_WINDOW: Duration = Duration::from_millis(500);

/// Pointer input in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A mouse click, or a click synthesized from a touch.
    Click {
        /// Client position of the click.
        position: Point,
    },
    /// A touch started.
    TouchStart {
        /// Client position of the first active touch point, if any.
        first_touch: Option<Point>,
    },
}

impl PointerEvent {
    /// Returns the event's kind.
    #[must_use]
    pub const fn kind(&self) -> PointerKind {
        match self {
            Self::Click { .. } => PointerKind::Click,
            Self::TouchStart { .. } => PointerKind::TouchStart,
        }
    }
}

/// Kind of a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// [`PointerEvent::Click`].
    Click,
    /// [`PointerEvent::TouchStart`].
    TouchStart,
}

/// Throttle windows for pointer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputConfig {
    /// Minimum spacing of accepted clicks.
    pub click_window: Duration,
    /// Minimum spacing of accepted touch-starts.
    pub touch_window: Duration,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            click_window: DEFAULT_THROTTLE_WINDOW,
            touch_window: DEFAULT_THROTTLE_WINDOW,
        }
    }
}

/// Outcome of feeding one event to [`ViewportEvents::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputDecision {
    /// Rejected by the throttle; the handler never ran.
    Throttled,
    /// A click that followed a touch; the suppression flag is now clear.
    Suppressed,
    /// A touch-start without any touch point.
    NoTouchPoint,
    /// Spawn an indicator at this point.
    Spawn(Point),
}

impl InputDecision {
    /// Returns whether the platform's default action should be prevented.
    ///
    /// Every event that reached the handler asks for it; throttled events do
    /// not.
    #[must_use]
    pub const fn prevents_default(&self) -> bool {
        !matches!(self, Self::Throttled)
    }
}

/// Click/touch de-duplication and rate limiting for one viewport.
#[derive(Clone, Copy, Debug)]
pub struct ViewportEvents {
    click: Throttle,
    touch: Throttle,
    suppress_click: bool,
}

impl Default for ViewportEvents {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl ViewportEvents {
    /// Creates the policy with the given throttle windows.
    #[must_use]
    pub const fn new(config: InputConfig) -> Self {
        Self {
            click: Throttle::new(config.click_window),
            touch: Throttle::new(config.touch_window),
            suppress_click: false,
        }
    }

    /// Returns whether the next accepted click will be swallowed.
    #[must_use]
    pub const fn is_click_suppressed(&self) -> bool {
        self.suppress_click
    }

    /// Decides what `event`, arriving at `now`, should do.
    pub fn handle(&mut self, now: HostTime, event: &PointerEvent) -> InputDecision {
        match *event {
            PointerEvent::Click { position } => {
                if !self.click.try_acquire(now) {
                    return InputDecision::Throttled;
                }
                if self.suppress_click {
                    self.suppress_click = false;
                    return InputDecision::Suppressed;
                }
                InputDecision::Spawn(position)
            }
            PointerEvent::TouchStart { first_touch } => {
                if !self.touch.try_acquire(now) {
                    return InputDecision::Throttled;
                }
                self.suppress_click = true;
                match first_touch {
                    Some(point) => InputDecision::Spawn(point),
                    None => InputDecision::NoTouchPoint,
                }
            }
        }
    }
}
