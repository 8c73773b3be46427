// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory surface that records every call.
//!
//! Useful for tests and for driving the scene headlessly: open a
//! [`RecordingSurface`] through a [`RecordingProvider`], run frames, then
//! inspect [`RecordingContext::commands`] and
//! [`RecordingSurface::pixel_size_writes`].

use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::{Circle, Rect, Size};

use super::{CircleStyle, DrawContext, Surface, SurfaceError, SurfaceProvider};

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`DrawContext::clear_rect`].
    Clear(Rect),
    /// [`DrawContext::draw_circle`].
    Circle(Circle, CircleStyle),
}

/// A [`DrawContext`] that appends every call to a list.
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    /// Calls in the order they were made.
    pub commands: Vec<DrawCommand>,
}

impl RecordingContext {
    /// Returns copies of the recorded circles, in draw order.
    #[must_use]
    pub fn circles(&self) -> Vec<(Circle, CircleStyle)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle(circle, style) => Some((*circle, *style)),
                DrawCommand::Clear(_) => None,
            })
            .collect()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for RecordingContext {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn draw_circle(&mut self, circle: Circle, style: &CircleStyle) {
        self.commands.push(DrawCommand::Circle(circle, *style));
    }
}

/// A [`Surface`] backed by a [`RecordingContext`].
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    /// The recording context.
    pub context: RecordingContext,
    /// Every size passed to [`Surface::set_pixel_size`], in order.
    pub pixel_size_writes: Vec<Size>,
    viewport: Size,
}

impl RecordingSurface {
    /// Creates a surface whose hosting viewport has the given size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            context: RecordingContext::default(),
            pixel_size_writes: Vec::new(),
            viewport,
        }
    }

    /// Simulates the hosting viewport changing size.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }

    /// Returns the last pixel size applied, if any.
    #[must_use]
    pub fn pixel_size(&self) -> Option<Size> {
        self.pixel_size_writes.last().copied()
    }
}

impl Surface for RecordingSurface {
    type Context = RecordingContext;

    fn context(&mut self) -> &mut RecordingContext {
        &mut self.context
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn set_pixel_size(&mut self, size: Size) {
        self.pixel_size_writes.push(size);
    }
}

/// Opens [`RecordingSurface`]s for any identifier.
#[derive(Clone, Copy, Debug)]
pub struct RecordingProvider {
    viewport: Size,
    supports_2d: bool,
}

impl RecordingProvider {
    /// Creates a provider whose surfaces report `viewport` as their size.
    #[must_use]
    pub const fn new(viewport: Size) -> Self {
        Self {
            viewport,
            supports_2d: true,
        }
    }

    /// Returns a provider whose surfaces cannot supply a 2D context.
    #[must_use]
    pub const fn without_context(self) -> Self {
        Self {
            supports_2d: false,
            ..self
        }
    }
}

impl SurfaceProvider for RecordingProvider {
    type Surface = RecordingSurface;

    fn open(&self, id: &str) -> Result<RecordingSurface, SurfaceError> {
        if !self.supports_2d {
            return Err(SurfaceError::ContextUnavailable { id: id.to_string() });
        }
        Ok(RecordingSurface::new(self.viewport))
    }
}
