// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for ripple.
//!
//! This crate connects [`ripple_core`] to browser APIs:
//!
//! - [`CanvasProvider`]: resolves `<canvas>` ids into [`CanvasSurface`]s
//!   drawing through a 2D context
//! - [`EventBindings`]: `click`, `touchstart` and `resize` listeners feeding
//!   an [`InputHandler`]
//! - [`RafLoop`]: `requestAnimationFrame` tick source

#![no_std]

extern crate alloc;

mod canvas;
mod events;
mod raf;

pub use canvas::{CanvasContext, CanvasProvider, CanvasSurface, css_color};
pub use events::{EventBindings, InputHandler, click_event, touch_start_event};
pub use raf::RafLoop;

use ripple_core::time::HostTime;

/// Returns the current host time from `performance.now()`, in microsecond
/// ticks.
///
/// This is the same clock `requestAnimationFrame` timestamps are taken from,
/// so input and frame times can be compared directly.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(raf::performance_now())
}
