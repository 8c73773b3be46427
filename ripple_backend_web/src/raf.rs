// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame pacing from the browser.
//!
//! Browsers call `requestAnimationFrame` callbacks once per display refresh,
//! and not at all while the tab is hidden. [`RafLoop`] turns those callbacks
//! into [`FrameTick`]s numbered from zero, with the callback's
//! [`DOMHighResTimeStamp`][mdn] as the tick's [`HostTime`].
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp
//! [`FrameTick`]: ripple_core::time::FrameTick
//! [`HostTime`]: ripple_core::time::HostTime

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use ripple_core::time::{FrameTick, HostTime};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(handle: i32);
}

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Calls a handler with a [`FrameTick`] on every animation frame.
///
/// The handler typically forwards to
/// [`Application::on_play`](ripple_core::app::Application::on_play). Nothing
/// happens until [`start`](Self::start); the next frame is requested after
/// the handler returns, so a slow handler delays the frame after it rather
/// than queueing frames up.
///
/// Dropping the loop cancels it. Keep it alive for as long as frames should
/// keep coming.
///
/// [`FrameTick`]: ripple_core::time::FrameTick
pub struct RafLoop {
    shared: Rc<Shared>,
}

struct Shared {
    on_frame: RefCell<Box<dyn FnMut(FrameTick)>>,
    // Set by `start`. The closure re-requests itself, so it reads itself back
    // out of this cell.
    frame: RefCell<Option<FrameClosure>>,
    next_index: Cell<u64>,
    active: Cell<bool>,
    pending: Cell<i32>,
}

impl Shared {
    fn request(&self, closure: &FrameClosure) {
        let handle = request_animation_frame(closure.as_ref().unchecked_ref());
        self.pending.set(handle);
    }

    fn step(&self, timestamp_ms: f64) {
        if !self.active.get() {
            return;
        }
        let frame_index = self.next_index.get();
        self.next_index.set(frame_index + 1);
        self.on_frame.borrow_mut()(FrameTick {
            now: HostTime::from_millis_f64(timestamp_ms),
            frame_index,
        });

        // The handler may have stopped the loop.
        if !self.active.get() {
            return;
        }
        if let Some(closure) = &*self.frame.borrow() {
            self.request(closure);
        }
    }
}

impl RafLoop {
    /// Wraps `on_frame` in a stopped loop.
    pub fn new(on_frame: impl FnMut(FrameTick) + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                on_frame: RefCell::new(Box::new(on_frame)),
                frame: RefCell::new(None),
                next_index: Cell::new(0),
                active: Cell::new(false),
                pending: Cell::new(0),
            }),
        }
    }

    /// Requests the first frame. Does nothing while already running.
    ///
    /// Frame indices keep counting across a stop and restart.
    pub fn start(&self) {
        if self.shared.active.replace(true) {
            return;
        }
        let shared = Rc::clone(&self.shared);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            shared.step(timestamp_ms);
        }) as Box<dyn FnMut(f64)>);
        self.shared.request(&closure);
        *self.shared.frame.borrow_mut() = Some(closure);
    }

    /// Cancels the pending frame.
    pub fn stop(&self) {
        if self.shared.active.replace(false) {
            cancel_animation_frame(self.shared.pending.get());
        }
    }

    /// Returns whether frames are being requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.active.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // Breaks the cycle between `Shared` and the closure it owns.
        self.shared.frame.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("active", &self.shared.active.get())
            .field("next_index", &self.shared.next_index.get())
            .finish_non_exhaustive()
    }
}
