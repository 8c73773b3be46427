// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive drawable hosting the scene.

use crate::drawable::{Drawable, DrawableConfig};
use crate::indicator::ClickIndicator;
use crate::input::{InputConfig, InputDecision, PointerEvent, ViewportEvents};
use crate::scene::{ObjectId, Scene};
use crate::surface::{Surface, SurfaceError, SurfaceProvider};
use crate::time::HostTime;
use crate::trace::{
    DropReason, IndicatorSpawnedEvent, InputDroppedEvent, SurfaceResizedEvent, Tracer,
};
use crate::tween::Tweener;
use crate::validation::CHILDREN;

/// What the platform layer should do after a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerOutcome {
    /// Whether to prevent the platform's default action.
    pub prevent_default: bool,
    /// The indicator spawned by the event, if any.
    pub indicator: Option<ClickIndicator>,
}

/// A [`Drawable`] that re-walks its children every frame and turns pointer
/// input into click indicators.
#[derive(Debug)]
pub struct Viewport<S: Surface> {
    drawable: Drawable<S>,
    events: ViewportEvents,
}

impl<S: Surface> Viewport<S> {
    /// Opens the drawable on `id` and binds the input policy to it.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`SurfaceError`] if `id` cannot be resolved.
    pub fn open<P>(
        provider: &P,
        id: &str,
        config: DrawableConfig,
        input: InputConfig,
    ) -> Result<Self, SurfaceError>
    where
        P: SurfaceProvider<Surface = S>,
    {
        Ok(Self {
            drawable: Drawable::open(provider, id, config)?,
            events: ViewportEvents::new(input),
        })
    }

    /// Renders the whole tree, forcing the root's child pass.
    pub fn render(&mut self) {
        let root = self.drawable.root();
        self.drawable.scene_mut().invalidate(root, &CHILDREN);
        self.drawable.render();
    }

    /// Re-reads the viewport size and renders.
    pub fn on_resize(&mut self, tracer: &mut Tracer<'_>) {
        let size = self.drawable.resize();
        tracer.surface_resized(&SurfaceResizedEvent { size });
        self.render();
    }

    /// Applies the input policy to `event`, spawning and starting an
    /// indicator at the front of the root list when it calls for one.
    pub fn handle_pointer(
        &mut self,
        now: HostTime,
        event: &PointerEvent,
        tweens: &mut Tweener,
        tracer: &mut Tracer<'_>,
    ) -> PointerOutcome {
        let decision = self.events.handle(now, event);
        let kind = event.kind();
        let reason = match decision {
            InputDecision::Spawn(position) => {
                let root = self.drawable.root();
                let scene = self.drawable.scene_mut();
                let indicator = ClickIndicator::spawn(scene, position);
                scene.append_at(root, indicator.id(), 0);
                indicator.start(tweens);
                tracer.indicator_spawned(&IndicatorSpawnedEvent {
                    object: indicator.id(),
                    position,
                    kind,
                    now,
                });
                return PointerOutcome {
                    prevent_default: decision.prevents_default(),
                    indicator: Some(indicator),
                };
            }
            InputDecision::Throttled => DropReason::Throttled,
            InputDecision::Suppressed => DropReason::Suppressed,
            InputDecision::NoTouchPoint => DropReason::NoTouchPoint,
        };
        tracer.input_dropped(&InputDroppedEvent { kind, reason, now });
        PointerOutcome {
            prevent_default: decision.prevents_default(),
            indicator: None,
        }
    }

    /// Returns the input policy.
    #[must_use]
    pub fn events(&self) -> &ViewportEvents {
        &self.events
    }

    /// Returns the underlying drawable.
    #[must_use]
    pub fn drawable(&self) -> &Drawable<S> {
        &self.drawable
    }

    /// Returns the underlying drawable mutably.
    pub fn drawable_mut(&mut self) -> &mut Drawable<S> {
        &mut self.drawable
    }

    /// Returns the root display list.
    #[must_use]
    pub fn root(&self) -> ObjectId {
        self.drawable.root()
    }

    /// Returns the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.drawable.scene()
    }

    /// Returns the scene mutably.
    pub fn scene_mut(&mut self) -> &mut Scene {
        self.drawable.scene_mut()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::*;
    use crate::node::{Node, NodeOptions};
    use crate::surface::recording::{RecordingProvider, RecordingSurface};

    const MS: u64 = 1_000;

    fn open() -> Viewport<RecordingSurface> {
        Viewport::open(
            &RecordingProvider::new(Size::new(400.0, 300.0)),
            "viewport",
            DrawableConfig::default(),
            InputConfig::default(),
        )
        .expect("recording surfaces always open")
    }

    fn click(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Click {
            position: Point::new(x, y),
        }
    }

    fn touch(x: f64, y: f64) -> PointerEvent {
        PointerEvent::TouchStart {
            first_touch: Some(Point::new(x, y)),
        }
    }

    #[test]
    fn every_frame_walks_children() {
        let mut viewport = open();
        let root = viewport.root();
        let node = Node::create(viewport.scene_mut(), NodeOptions::default());
        viewport.scene_mut().append(root, node.id());
        viewport.scene_mut().take_stats();

        viewport.render();
        viewport.render();
        let stats = viewport.scene_mut().take_stats();
        assert_eq!(stats.child_passes, 2);
        assert_eq!(stats.children_visited, 2);
    }

    #[test]
    fn click_inserts_indicator_at_front() {
        let mut viewport = open();
        let mut tweens = Tweener::new();
        let root = viewport.root();
        let node = Node::create(viewport.scene_mut(), NodeOptions::default());
        viewport.scene_mut().append(root, node.id());

        let outcome = viewport.handle_pointer(
            HostTime(0),
            &click(10.0, 20.0),
            &mut tweens,
            &mut Tracer::none(),
        );
        let indicator = outcome.indicator.expect("click spawns");
        assert!(outcome.prevent_default);
        assert_eq!(
            viewport.scene().children(root),
            &[indicator.id(), node.id()]
        );
        assert_eq!(tweens.len(), 1, "indicator was started");
        assert_eq!(
            viewport.scene().get(indicator.id()).map(|o| o.position()),
            Some(Point::new(10.0, 20.0))
        );
    }

    #[test]
    fn two_touches_within_window_spawn_one() {
        let mut viewport = open();
        let mut tweens = Tweener::new();
        let root = viewport.root();

        let first = viewport.handle_pointer(
            HostTime(0),
            &touch(1.0, 1.0),
            &mut tweens,
            &mut Tracer::none(),
        );
        let second = viewport.handle_pointer(
            HostTime(300 * MS),
            &touch(2.0, 2.0),
            &mut tweens,
            &mut Tracer::none(),
        );
        assert!(first.indicator.is_some());
        assert_eq!(second.indicator, None);
        assert!(
            !second.prevent_default,
            "throttled events never reach the handler"
        );
        assert_eq!(viewport.scene().children(root).len(), 1);
    }

    #[test]
    fn click_after_touch_is_swallowed() {
        let mut viewport = open();
        let mut tweens = Tweener::new();
        let root = viewport.root();

        viewport.handle_pointer(
            HostTime(0),
            &touch(5.0, 5.0),
            &mut tweens,
            &mut Tracer::none(),
        );
        let synthesized = viewport.handle_pointer(
            HostTime(20 * MS),
            &click(5.0, 5.0),
            &mut tweens,
            &mut Tracer::none(),
        );
        assert_eq!(synthesized.indicator, None);
        assert!(synthesized.prevent_default);
        assert_eq!(viewport.scene().children(root).len(), 1);

        let later = viewport.handle_pointer(
            HostTime(1_000 * MS),
            &click(9.0, 9.0),
            &mut tweens,
            &mut Tracer::none(),
        );
        assert!(later.indicator.is_some());
        assert_eq!(viewport.scene().children(root).len(), 2);
    }

    #[test]
    fn resize_reapplies_pixel_size() {
        let mut viewport = open();
        viewport
            .drawable_mut()
            .surface_mut()
            .set_viewport_size(Size::new(800.0, 600.0));
        viewport.on_resize(&mut Tracer::none());
        assert_eq!(
            viewport.drawable().surface().pixel_size(),
            Some(Size::new(800.0, 600.0))
        );
        assert_eq!(viewport.drawable().size(), Size::new(800.0, 600.0));
    }
}
