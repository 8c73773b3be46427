// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `<canvas>` surfaces with a 2D rendering context.

use alloc::format;
use alloc::string::{String, ToString};
use core::f64::consts::TAU;

use kurbo::{Circle, Rect, Size};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use ripple_core::surface::{
    CircleStyle, DrawContext, Rgba, Surface, SurfaceError, SurfaceProvider,
};

/// Resolves element ids in a document into [`CanvasSurface`]s.
#[derive(Clone, Debug)]
pub struct CanvasProvider {
    window: Window,
    document: Document,
}

impl CanvasProvider {
    /// Creates a provider over `window` and its document.
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Creates a provider over the global window, if there is one with a
    /// document.
    #[must_use]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    /// Returns the window whose inner size the surfaces report.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl SurfaceProvider for CanvasProvider {
    type Surface = CanvasSurface;

    fn open(&self, id: &str) -> Result<CanvasSurface, SurfaceError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::NotFound { id: id.to_string() })?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotCanvas { id: id.to_string() })?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| SurfaceError::ContextUnavailable { id: id.to_string() })?;
        Ok(CanvasSurface {
            window: self.window.clone(),
            canvas,
            context: CanvasContext(context),
        })
    }
}

/// A canvas element sized to the window.
#[derive(Debug)]
pub struct CanvasSurface {
    window: Window,
    canvas: HtmlCanvasElement,
    context: CanvasContext,
}

impl CanvasSurface {
    /// Returns the canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    type Context = CanvasContext;

    fn context(&mut self) -> &mut CanvasContext {
        &mut self.context
    }

    fn viewport_size(&self) -> Size {
        let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(read(self.window.inner_width()), read(self.window.inner_height()))
    }

    fn set_pixel_size(&mut self, size: Size) {
        self.canvas.set_width(pixels(size.width));
        self.canvas.set_height(pixels(size.height));
    }
}

/// A [`DrawContext`] over a `CanvasRenderingContext2d`.
#[derive(Debug)]
pub struct CanvasContext(CanvasRenderingContext2d);

impl DrawContext for CanvasContext {
    fn clear_rect(&mut self, rect: Rect) {
        self.0
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn draw_circle(&mut self, circle: Circle, style: &CircleStyle) {
        let ctx = &self.0;
        ctx.begin_path();
        // Only fails for a negative radius, which display objects never produce.
        _ = ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
        if let Some(fill) = style.fill {
            ctx.set_fill_style_str(&css_color(fill));
            ctx.fill();
        }
        if let Some(stroke) = style.stroke {
            ctx.set_stroke_style_str(&css_color(stroke.color));
            ctx.set_line_width(stroke.width);
            ctx.stroke();
        }
    }
}

/// Formats a colour as a CSS `rgba()` string.
#[must_use]
pub fn css_color(color: Rgba) -> String {
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, color.a)
}

fn pixels(logical: f64) -> u32 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "window sizes are small non-negative values; the cast saturates"
    )]
    let px = logical.max(0.0) as u32;
    px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_color_formats_alpha() {
        assert_eq!(css_color(Rgba::rgb(11, 129, 133)), "rgba(11, 129, 133, 1)");
        assert_eq!(
            css_color(Rgba::rgb(48, 38, 28).with_alpha(0.5)),
            "rgba(48, 38, 28, 0.5)"
        );
    }

    #[test]
    fn pixels_truncates_and_clamps() {
        assert_eq!(pixels(1024.7), 1024);
        assert_eq!(pixels(-3.0), 0);
    }
}
