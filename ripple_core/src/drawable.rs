// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A display list bound to a drawing surface.
//!
//! [`Drawable`] owns the [`Scene`], the root display list and the surface the
//! list is drawn onto. It keeps the list's `width`/`height` in step with the
//! hosting viewport and pushes the size to the surface's backing store at most
//! once per resize, tracked by the [`SIZE`] validation key.

use kurbo::{Point, Rect, Size};

use crate::scene::{ObjectId, Scene};
use crate::surface::{DrawContext as _, Surface, SurfaceError, SurfaceProvider};
use crate::validation::SIZE;

/// Optional initial attributes of a drawable's root list.
///
/// `width` and `height` are overwritten by the initial resize; they only
/// matter for drawables built with [`Drawable::with_surface`] and never
/// resized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawableConfig {
    /// Initial x.
    pub x: Option<f64>,
    /// Initial y.
    pub y: Option<f64>,
    /// Initial width.
    pub width: Option<f64>,
    /// Initial height.
    pub height: Option<f64>,
}

/// A root display list drawn onto a [`Surface`].
#[derive(Debug)]
pub struct Drawable<S: Surface> {
    scene: Scene,
    root: ObjectId,
    surface: S,
}

impl<S: Surface> Drawable<S> {
    /// Resolves `id` through `provider`, then performs the initial resize and
    /// render.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`SurfaceError`] if `id` cannot be resolved to a
    /// surface with a 2D context.
    pub fn open<P>(provider: &P, id: &str, config: DrawableConfig) -> Result<Self, SurfaceError>
    where
        P: SurfaceProvider<Surface = S>,
    {
        let surface = provider.open(id)?;
        let mut drawable = Self::with_surface(surface, config);
        drawable.resize();
        drawable.render();
        Ok(drawable)
    }

    /// Wraps an already opened surface without resizing or rendering.
    pub fn with_surface(surface: S, config: DrawableConfig) -> Self {
        let mut scene = Scene::new();
        let root = scene.create_group();
        if let Some(obj) = scene.get_mut(root) {
            obj.x = config.x.unwrap_or(obj.x);
            obj.y = config.y.unwrap_or(obj.y);
            obj.width = config.width.unwrap_or(obj.width);
            obj.height = config.height.unwrap_or(obj.height);
        }
        Self {
            scene,
            root,
            surface,
        }
    }

    /// Reads the viewport size into the root list and marks the surface size
    /// stale. Returns the new size.
    pub fn resize(&mut self) -> Size {
        let size = self.surface.viewport_size();
        if let Some(obj) = self.scene.get_mut(self.root) {
            obj.width = size.width;
            obj.height = size.height;
        }
        self.scene.invalidate(self.root, &SIZE);
        size
    }

    /// Clears the surface, renders the root list and, if the size is stale,
    /// applies it to the backing store.
    pub fn render(&mut self) {
        let size = self.size();
        self.surface
            .context()
            .clear_rect(Rect::from_origin_size(Point::ZERO, size));
        self.scene.render(self.root, self.surface.context());
        if !self.scene.is_valid(self.root, &SIZE) {
            self.surface.set_pixel_size(size);
            self.scene.validate(self.root, &SIZE);
        }
    }

    /// Resizes, then renders.
    pub fn on_resize(&mut self) {
        self.resize();
        self.render();
    }

    /// Returns the root list's current size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.scene
            .get(self.root)
            .map_or(Size::ZERO, |obj| obj.size())
    }

    /// Returns the root display list.
    #[must_use]
    pub fn root(&self) -> ObjectId {
        self.root
    }

    /// Returns the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the scene mutably.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Returns the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::node::{Node, NodeOptions};
    use crate::surface::recording::{DrawCommand, RecordingProvider, RecordingSurface};

    fn open(width: f64, height: f64) -> Drawable<RecordingSurface> {
        Drawable::open(
            &RecordingProvider::new(Size::new(width, height)),
            "canvas",
            DrawableConfig::default(),
        )
        .expect("recording surfaces always open")
    }

    #[test]
    fn open_sizes_and_renders_once() {
        let drawable = open(640.0, 480.0);
        assert_eq!(drawable.size(), Size::new(640.0, 480.0));
        assert_eq!(
            drawable.surface().pixel_size_writes,
            [Size::new(640.0, 480.0)]
        );
        assert_eq!(
            drawable.surface().context.commands,
            [DrawCommand::Clear(Rect::new(0.0, 0.0, 640.0, 480.0))]
        );
    }

    #[test]
    fn pixel_size_applied_once_per_resize() {
        let mut drawable = open(100.0, 100.0);
        drawable.render();
        drawable.render();
        assert_eq!(drawable.surface().pixel_size_writes.len(), 1);

        drawable
            .surface_mut()
            .set_viewport_size(Size::new(300.0, 200.0));
        drawable.on_resize();
        drawable.render();
        assert_eq!(
            drawable.surface().pixel_size_writes,
            [Size::new(100.0, 100.0), Size::new(300.0, 200.0)]
        );
        assert_eq!(drawable.size(), Size::new(300.0, 200.0));
    }

    #[test]
    fn clear_precedes_children() {
        let mut drawable = open(50.0, 50.0);
        let root = drawable.root();
        let node = Node::create(drawable.scene_mut(), NodeOptions::default());
        drawable.scene_mut().append(root, node.id());
        drawable.surface_mut().context.clear();

        drawable.render();
        let commands = &drawable.surface().context.commands;
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::Clear(_)));
        assert!(matches!(commands[1], DrawCommand::Circle(..)));
    }

    #[test]
    fn config_initializes_root() {
        let drawable = Drawable::with_surface(
            RecordingSurface::new(Size::new(10.0, 10.0)),
            DrawableConfig {
                x: Some(4.0),
                y: Some(5.0),
                width: Some(60.0),
                height: None,
            },
        );
        let root = drawable.scene().get(drawable.root()).expect("root alive");
        assert_eq!(root.position(), Point::new(4.0, 5.0));
        assert_eq!(root.width, 60.0);
        assert_eq!(root.height, 0.0);
        assert!(drawable.surface().pixel_size_writes.is_empty());
    }

    #[test]
    fn missing_context_is_fatal() {
        let provider = RecordingProvider::new(Size::new(1.0, 1.0)).without_context();
        let err = Drawable::open(&provider, "viewport", DrawableConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SurfaceError::ContextUnavailable {
                id: "viewport".to_string()
            }
        );
    }
}
