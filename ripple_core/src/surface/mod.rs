// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-surface contract for platform integrations.
//!
//! The scene never talks to a platform API directly. A backend provides:
//!
//! - A [`SurfaceProvider`] that resolves a string identifier (for the web
//!   backend, a DOM element id) into a [`Surface`]. Resolution is the only
//!   fallible step in the whole pipeline; it fails with [`SurfaceError`].
//! - A [`Surface`], the backing element. It reports the current viewport size,
//!   accepts pixel-size assignments, and hands out its [`DrawContext`].
//! - A [`DrawContext`], the immediate-mode 2D API display objects draw
//!   through.
//!
//! [`recording`] contains an in-memory implementation that records every call,
//! used by tests and headless runs.

pub mod recording;

use alloc::string::String;

use kurbo::{Circle, Rect, Size};

/// An sRGB colour with 8-bit channels and a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `0.0..=1.0`.
    pub a: f64,
}

impl Rgba {
    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns the same colour with alpha replaced, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Outline settings for a stroked shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke colour.
    pub color: Rgba,
    /// Line width in pixels.
    pub width: f64,
}

/// How a circle is painted. Fill is applied before stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle {
    /// Fill colour, if any.
    pub fill: Option<Rgba>,
    /// Outline, if any.
    pub stroke: Option<Stroke>,
}

/// Immediate-mode 2D drawing API.
pub trait DrawContext {
    /// Clears `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Paints a full circle.
    fn draw_circle(&mut self, circle: Circle, style: &CircleStyle);
}

/// A backing element that display objects are drawn onto.
pub trait Surface {
    /// The drawing context type handed out by this surface.
    type Context: DrawContext;

    /// Returns the surface's drawing context.
    fn context(&mut self) -> &mut Self::Context;

    /// Returns the current size of the hosting viewport (for the web backend,
    /// the window's inner size).
    fn viewport_size(&self) -> Size;

    /// Assigns the backing store's pixel dimensions.
    ///
    /// On canvas-like surfaces this also clears the backing store.
    fn set_pixel_size(&mut self, size: Size);
}

/// Resolves surface identifiers into surfaces.
pub trait SurfaceProvider {
    /// The surface type produced.
    type Surface: Surface;

    /// Resolves `id` into a surface with a usable 2D context.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the identifier does not name an element,
    /// the element cannot be drawn on, or it cannot supply a 2D context.
    fn open(&self, id: &str) -> Result<Self::Surface, SurfaceError>;
}

/// Failure to obtain a drawable surface.
///
/// There is no recovery from any of these: without a surface the application
/// cannot start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// No element carries the requested identifier.
    #[error("no element with id `{id}`")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },
    /// The element exists but is not a canvas.
    #[error("element `{id}` is not a canvas")]
    NotCanvas {
        /// The identifier that was looked up.
        id: String,
    },
    /// The canvas cannot supply a 2D drawing context.
    #[error("canvas `{id}` does not support a 2d context")]
    ContextUnavailable {
        /// The identifier that was looked up.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn with_alpha_clamps() {
        let c = Rgba::rgb(48, 38, 28);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.with_alpha(0.25).a, 0.25);
        assert_eq!(
            c.with_alpha(-0.5).a,
            0.0,
            "tween overshoot must not go negative"
        );
        assert_eq!(c.with_alpha(3.0).a, 1.0);
    }

    #[test]
    fn error_messages_name_the_surface() {
        let err = SurfaceError::ContextUnavailable {
            id: "viewport".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "canvas `viewport` does not support a 2d context"
        );
    }
}
