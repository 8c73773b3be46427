// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM event listeners feeding pointer input and resizes to a handler.
//!
//! `click` and `touchstart` are listened for on the canvas, `resize` on the
//! window. Pointer events are converted to [`PointerEvent`]s in client
//! coordinates and timestamped with [`now`](crate::now); when the handler
//! asks for it, the DOM event's default action is prevented.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Point;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Event, EventTarget, MouseEvent, TouchEvent, Window};

use ripple_core::input::PointerEvent;
use ripple_core::time::HostTime;

/// Receiver of converted DOM events.
pub trait InputHandler {
    /// Handles pointer input. Returns whether the DOM default action should
    /// be prevented.
    fn on_pointer(&mut self, now: HostTime, event: &PointerEvent) -> bool;

    /// Handles a window resize.
    fn on_resize(&mut self);
}

/// Converts a `click` into a [`PointerEvent::Click`].
#[must_use]
pub fn click_event(event: &MouseEvent) -> PointerEvent {
    PointerEvent::Click {
        position: Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
    }
}

/// Converts a `touchstart` into a [`PointerEvent::TouchStart`] carrying the
/// first active touch point.
#[must_use]
pub fn touch_start_event(event: &TouchEvent) -> PointerEvent {
    PointerEvent::TouchStart {
        first_touch: event
            .touches()
            .get(0)
            .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y()))),
    }
}

type Listener<E> = Closure<dyn FnMut(E)>;

/// Registered listeners. Dropping the bindings removes them.
pub struct EventBindings {
    target: EventTarget,
    window: Window,
    click: Listener<MouseEvent>,
    touch_start: Listener<TouchEvent>,
    resize: Listener<Event>,
}

impl EventBindings {
    /// Listens for pointer input on `target` and resizes on `window`,
    /// forwarding both to `handler`.
    ///
    /// Events arriving while `handler` is already borrowed are dropped.
    ///
    /// # Errors
    ///
    /// Returns the DOM exception if a listener cannot be registered.
    pub fn bind<H>(
        target: &EventTarget,
        window: &Window,
        handler: Rc<RefCell<H>>,
    ) -> Result<Self, JsValue>
    where
        H: InputHandler + 'static,
    {
        let h = Rc::clone(&handler);
        let click = Closure::wrap(Box::new(move |event: MouseEvent| {
            dispatch(&h, &event, &click_event(&event));
        }) as Box<dyn FnMut(MouseEvent)>);

        let h = Rc::clone(&handler);
        let touch_start = Closure::wrap(Box::new(move |event: TouchEvent| {
            dispatch(&h, &event, &touch_start_event(&event));
        }) as Box<dyn FnMut(TouchEvent)>);

        let h = handler;
        let resize = Closure::wrap(Box::new(move |_: Event| {
            if let Ok(mut handler) = h.try_borrow_mut() {
                handler.on_resize();
            }
        }) as Box<dyn FnMut(Event)>);

        target.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        target
            .add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            window: window.clone(),
            click,
            touch_start,
            resize,
        })
    }
}

fn dispatch<H: InputHandler>(handler: &RefCell<H>, dom: &Event, event: &PointerEvent) {
    let Ok(mut handler) = handler.try_borrow_mut() else {
        return;
    };
    if handler.on_pointer(crate::now(), event) {
        dom.prevent_default();
    }
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
        _ = self.target.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start.as_ref().unchecked_ref(),
        );
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for EventBindings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBindings")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
