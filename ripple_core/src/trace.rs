// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the frame loop and input handling.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! application calls at each stage. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies.

use kurbo::{Point, Size};

use crate::input::PointerKind;
use crate::scene::{ObjectId, RenderStats};
use crate::time::HostTime;
use crate::tween::TickSummary;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after each rendered frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameEvent {
    /// Monotonic frame counter.
    pub frame_index: u64,
    /// Timestamp of the frame callback.
    pub now: HostTime,
    /// Work done by the tweener before rendering.
    pub tweens: TickSummary,
    /// Work done by the render pass.
    pub render: RenderStats,
}

/// Emitted when pointer input spawns a click indicator.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorSpawnedEvent {
    /// Handle of the new indicator.
    pub object: ObjectId,
    /// Where it was spawned, in client coordinates.
    pub position: Point,
    /// Which input spawned it.
    pub kind: PointerKind,
    /// When the input arrived.
    pub now: HostTime,
}

/// Why pointer input did not spawn anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Rejected by the per-kind throttle.
    Throttled,
    /// A click swallowed because a touch just spawned an indicator.
    Suppressed,
    /// A touch-start that carried no touch point.
    NoTouchPoint,
}

/// Emitted when pointer input is dropped.
#[derive(Clone, Copy, Debug)]
pub struct InputDroppedEvent {
    /// Which input was dropped.
    pub kind: PointerKind,
    /// Why it was dropped.
    pub reason: DropReason,
    /// When the input arrived.
    pub now: HostTime,
}

/// Emitted when the viewport re-reads its size.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceResizedEvent {
    /// The new logical size.
    pub size: Size,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after each rendered frame.
    fn on_frame(&mut self, e: &FrameEvent) {
        _ = e;
    }

    /// Called when an indicator is spawned.
    fn on_indicator_spawned(&mut self, e: &IndicatorSpawnedEvent) {
        _ = e;
    }

    /// Called when pointer input is dropped.
    fn on_input_dropped(&mut self, e: &InputDroppedEvent) {
        _ = e;
    }

    /// Called when the viewport is resized.
    fn on_surface_resized(&mut self, e: &SurfaceResizedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`FrameEvent`].
    #[inline]
    pub fn frame(&mut self, e: &FrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IndicatorSpawnedEvent`].
    #[inline]
    pub fn indicator_spawned(&mut self, e: &IndicatorSpawnedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_indicator_spawned(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`InputDroppedEvent`].
    #[inline]
    pub fn input_dropped(&mut self, e: &InputDroppedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_input_dropped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SurfaceResizedEvent`].
    #[inline]
    pub fn surface_resized(&mut self, e: &SurfaceResizedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface_resized(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
