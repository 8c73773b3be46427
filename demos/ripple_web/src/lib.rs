// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser demo: a node grows in at the centre of a full-window canvas, and
//! every click or tap leaves an expanding ring behind.
//!
//! Build with: `wasm-pack build --target web demos/ripple_web`
//!
//! Then serve `demos/ripple_web/` and open `index.html` in a browser. Enable
//! the `trace` feature to log frame, input and resize events to the console.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::ToString;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, console};

use ripple_backend_web::{CanvasProvider, CanvasSurface, EventBindings, InputHandler, RafLoop};
use ripple_core::app::Application;
use ripple_core::input::PointerEvent;
use ripple_core::time::{FrameTick, HostTime};
use ripple_core::trace::{
    FrameEvent, IndicatorSpawnedEvent, InputDroppedEvent, SurfaceResizedEvent, TraceSink, Tracer,
};

/// Frames between two frame-stat log lines.
const FRAME_LOG_INTERVAL: u64 = 120;

/// Writes trace events to the browser console.
#[derive(Debug, Default)]
struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn on_frame(&mut self, e: &FrameEvent) {
        if e.frame_index % FRAME_LOG_INTERVAL != 0 {
            return;
        }
        console::debug_1(
            &format!(
                "frame {} at {:?}: {} tweens running, {} objects drawn",
                e.frame_index, e.now, e.tweens.active, e.render.objects_rendered
            )
            .into(),
        );
    }

    fn on_indicator_spawned(&mut self, e: &IndicatorSpawnedEvent) {
        console::log_1(
            &format!(
                "{:?} spawned {:?} at ({}, {})",
                e.kind, e.object, e.position.x, e.position.y
            )
            .into(),
        );
    }

    fn on_input_dropped(&mut self, e: &InputDroppedEvent) {
        console::debug_1(&format!("{:?} dropped: {:?}", e.kind, e.reason).into());
    }

    fn on_surface_resized(&mut self, e: &SurfaceResizedEvent) {
        console::log_1(&format!("resized to {}x{}", e.size.width, e.size.height).into());
    }
}

struct Demo {
    app: Application<CanvasSurface>,
    sink: ConsoleSink,
}

impl Demo {
    fn on_play(&mut self, tick: &FrameTick) {
        self.app.on_play(tick, &mut Tracer::new(&mut self.sink));
    }
}

impl InputHandler for Demo {
    fn on_pointer(&mut self, now: HostTime, event: &PointerEvent) -> bool {
        self.app
            .on_pointer(now, event, &mut Tracer::new(&mut self.sink))
            .prevent_default
    }

    fn on_resize(&mut self) {
        self.app.on_resize(&mut Tracer::new(&mut self.sink));
    }
}

/// Entry point: called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let provider =
        CanvasProvider::current().ok_or_else(|| JsValue::from_str("no global window"))?;
    let app = Application::open(&provider).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let canvas = app.viewport().drawable().surface().canvas().clone();

    let demo = Rc::new(RefCell::new(Demo {
        app,
        sink: ConsoleSink,
    }));

    let target: &EventTarget = canvas.as_ref();
    let bindings = EventBindings::bind(target, provider.window(), Rc::clone(&demo))?;

    let state = Rc::clone(&demo);
    let raf = RafLoop::new(move |tick| {
        if let Ok(mut demo) = state.try_borrow_mut() {
            demo.on_play(&tick);
        }
    });
    raf.start();

    // There is no graceful shutdown on the web; keep the loop and listeners
    // alive for the lifetime of the page.
    core::mem::forget(raf);
    core::mem::forget(bindings);

    Ok(())
}
