// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient expanding rings marking where the viewport was clicked.

use kurbo::{Circle, Point};

use crate::scene::{DisplayObject, ObjectId, Property, Scene, Visual};
use crate::surface::{CircleStyle, DrawContext, Rgba, Stroke};
use crate::time::Duration;
use crate::tween::{Easing, TweenId, Tweener};

/// Diameter the ring grows to.
pub const RING_TARGET_WIDTH: f64 = 300.0;

/// How long the ring takes to expand and fade, in seconds.
pub const RING_DURATION: f64 = 2.0;

const RING_COLOR: Rgba = Rgba::rgb(48, 38, 28);
const RING_LINE_WIDTH: f64 = 2.0;

/// Handle to a click indicator display object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClickIndicator(ObjectId);

impl ClickIndicator {
    /// Creates a zero-width, fully opaque ring centred at `at`.
    ///
    /// The ring is not attached to any list.
    pub fn spawn(scene: &mut Scene, at: Point) -> Self {
        let mut obj = DisplayObject::new(Visual::Indicator);
        obj.x = at.x;
        obj.y = at.y;
        obj.width = 0.0;
        obj.opacity = 1.0;
        Self(scene.insert(obj))
    }

    /// Returns the underlying display object handle.
    #[must_use]
    pub const fn id(self) -> ObjectId {
        self.0
    }

    /// Starts the expand-and-fade animation. When it finishes, the ring
    /// destroys itself, which also detaches it from its list.
    pub fn start(self, tweens: &mut Tweener) -> TweenId {
        tweens
            .to(self.0, Duration::from_secs_f64(RING_DURATION))
            .animate(Property::Width, RING_TARGET_WIDTH)
            .animate(Property::Opacity, 0.0)
            .ease(Easing::ExpoOut)
            .on_complete(|scene, id| {
                scene.destroy(id);
            })
            .start()
    }
}

/// Strokes a ring of diameter `width` centred at `(x, y)`, faded by `opacity`.
pub(crate) fn draw<C: DrawContext + ?Sized>(obj: &DisplayObject, ctx: &mut C) {
    let circle = Circle::new(obj.position(), (obj.width / 2.0).max(0.0));
    ctx.draw_circle(
        circle,
        &CircleStyle {
            fill: None,
            stroke: Some(Stroke {
                color: RING_COLOR.with_alpha(obj.opacity),
                width: RING_LINE_WIDTH,
            }),
        },
    );
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;
    use crate::surface::Surface as _;
    use crate::surface::recording::RecordingSurface;
    use crate::time::HostTime;

    #[test]
    fn spawns_opaque_and_empty() {
        let mut scene = Scene::new();
        let ring = ClickIndicator::spawn(&mut scene, Point::new(100.0, 200.0));
        let obj = scene.get(ring.id()).expect("alive");
        assert_eq!(obj.position(), Point::new(100.0, 200.0));
        assert_eq!(obj.width, 0.0);
        assert_eq!(obj.opacity, 1.0);
        assert_eq!(obj.parent(), None);
    }

    #[test]
    fn completion_removes_from_parent() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        let mut tweens = Tweener::new();
        let ring = ClickIndicator::spawn(&mut scene, Point::new(100.0, 200.0));
        scene.append(list, ring.id());
        ring.start(&mut tweens);

        tweens.tick(&mut scene, HostTime(0));
        tweens.tick(&mut scene, HostTime(1_000_000));
        assert!(scene.contains_child(list, ring.id()), "still expanding");
        let width = scene.property(ring.id(), Property::Width).expect("alive");
        assert!(
            width > 290.0,
            "expo ease-out is nearly done halfway: {width}"
        );

        tweens.tick(&mut scene, HostTime(2_000_000));
        assert!(!scene.contains_child(list, ring.id()));
        assert!(!scene.is_alive(ring.id()));
    }

    #[test]
    fn draws_faded_stroke_only() {
        let mut scene = Scene::new();
        let ring = ClickIndicator::spawn(&mut scene, Point::new(5.0, 6.0));
        scene.set_property(ring.id(), Property::Width, 40.0);
        scene.set_property(ring.id(), Property::Opacity, 0.25);

        let mut surface = RecordingSurface::new(Size::new(10.0, 10.0));
        scene.render(ring.id(), surface.context());

        let circles = surface.context.circles();
        let (circle, style) = circles.first().expect("one circle");
        assert_eq!(circle.radius, 20.0);
        assert_eq!(style.fill, None);
        let stroke = style.stroke.expect("stroked");
        assert_eq!(stroke.width, RING_LINE_WIDTH);
        assert_eq!(stroke.color, Rgba::rgb(48, 38, 28).with_alpha(0.25));
    }
}
