// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persistent avatar node and its registry.

use alloc::vec::Vec;

use kurbo::Circle;

use crate::scene::{DisplayObject, ObjectId, Property, Scene, Visual};
use crate::surface::{CircleStyle, DrawContext, Rgba, Stroke};
use crate::time::Duration;
use crate::tween::{Easing, TweenId, Tweener};

/// Natural width and height of a node.
pub const NODE_SIZE: f64 = 50.0;

/// Default duration of node animations, in seconds.
pub const NODE_SPEED: f64 = 0.5;

const FILL: Rgba = Rgba::rgb(0x0B, 0x81, 0x85);
const OUTLINE: Stroke = Stroke {
    color: Rgba::rgb(0x36, 0x54, 0x4F),
    width: 5.0,
};

/// Initial attributes of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeOptions {
    /// Centre x.
    pub x: f64,
    /// Centre y.
    pub y: f64,
    /// Diameter the node grows to.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Animation duration in seconds.
    pub speed: f64,
}

impl Default for NodeOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: NODE_SIZE,
            height: NODE_SIZE,
            speed: NODE_SPEED,
        }
    }
}

/// Handle to a node display object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node(ObjectId);

impl Node {
    /// Creates a node in `scene`. It is not attached to any list.
    pub fn create(scene: &mut Scene, options: NodeOptions) -> Self {
        let mut obj = DisplayObject::new(Visual::Node);
        obj.x = options.x;
        obj.y = options.y;
        obj.width = options.width;
        obj.height = options.height;
        obj.speed = options.speed;
        Self(scene.insert(obj))
    }

    /// Returns the underlying display object handle.
    #[must_use]
    pub const fn id(self) -> ObjectId {
        self.0
    }

    /// Plays the grow-in entrance: the width drops to zero and tweens back to
    /// its current value over the node's speed.
    ///
    /// Returns `None` if the node has been destroyed.
    pub fn start(self, scene: &mut Scene, tweens: &mut Tweener) -> Option<TweenId> {
        let width = scene.property(self.0, Property::Width)?;
        scene.set_property(self.0, Property::Width, 0.0);
        self.animate(scene, tweens, Property::Width, width)
    }

    /// Tweens `property` to `value` over the node's speed with the default
    /// easing.
    pub fn animate(
        self,
        scene: &Scene,
        tweens: &mut Tweener,
        property: Property,
        value: f64,
    ) -> Option<TweenId> {
        let speed = scene.property(self.0, Property::Speed)?;
        Some(
            tweens
                .to(self.0, Duration::from_secs_f64(speed))
                .animate(property, value)
                .ease(Easing::default())
                .start(),
        )
    }
}

/// Draws a filled, outlined circle of diameter `width` centred at `(x, y)`.
pub(crate) fn draw<C: DrawContext + ?Sized>(obj: &DisplayObject, ctx: &mut C) {
    let circle = Circle::new(obj.position(), (obj.width / 2.0).max(0.0));
    ctx.draw_circle(
        circle,
        &CircleStyle {
            fill: Some(FILL),
            stroke: Some(OUTLINE),
        },
    );
}

/// Registry of every node created through it.
///
/// The registry is append-only. The application owns exactly one and passes
/// it where needed.
#[derive(Clone, Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node in `scene`, records it and returns it.
    pub fn create_node(&mut self, scene: &mut Scene, options: NodeOptions) -> Node {
        let node = Node::create(scene, options);
        self.append(node);
        node
    }

    /// Records `node` unless it is already recorded. Returns whether it was
    /// added.
    pub fn append(&mut self, node: Node) -> bool {
        if self.nodes.contains(&node) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Returns the recorded nodes in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns whether `node` is recorded.
    #[must_use]
    pub fn contains(&self, node: Node) -> bool {
        self.nodes.contains(&node)
    }

    /// Returns the number of recorded nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether no node has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;
    use crate::surface::Surface as _;
    use crate::surface::recording::RecordingSurface;
    use crate::time::HostTime;

    #[test]
    fn create_node_returns_distinct_registered_nodes() {
        let mut scene = Scene::new();
        let mut registry = NodeRegistry::new();
        let a = registry.create_node(&mut scene, NodeOptions::default());
        let b = registry.create_node(&mut scene, NodeOptions::default());

        assert_ne!(a, b);
        assert_eq!(registry.nodes(), &[a, b]);
        assert!(registry.contains(a) && registry.contains(b));
        assert!(!registry.append(a), "duplicates are not recorded twice");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn defaults_match_natural_size() {
        let mut scene = Scene::new();
        let node = Node::create(&mut scene, NodeOptions::default());
        let obj = scene.get(node.id()).expect("alive");
        assert_eq!(obj.size(), Size::new(NODE_SIZE, NODE_SIZE));
        assert_eq!(obj.speed, NODE_SPEED);
        assert_eq!(obj.visual(), Visual::Node);
    }

    #[test]
    fn start_grows_width_from_zero() {
        let mut scene = Scene::new();
        let mut tweens = Tweener::new();
        let node = Node::create(&mut scene, NodeOptions::default());

        let tween = node.start(&mut scene, &mut tweens).expect("node alive");
        assert_eq!(scene.property(node.id(), Property::Width), Some(0.0));

        tweens.tick(&mut scene, HostTime(0));
        tweens.tick(&mut scene, HostTime(250_000));
        let mid = scene.property(node.id(), Property::Width).expect("alive");
        assert!(
            mid > 25.0 && mid < NODE_SIZE,
            "ease-out is past halfway at t/2: {mid}"
        );

        tweens.tick(&mut scene, HostTime(500_000));
        assert_eq!(scene.property(node.id(), Property::Width), Some(NODE_SIZE));
        assert!(!tweens.is_active(tween));
    }

    #[test]
    fn animate_uses_node_speed() {
        let mut scene = Scene::new();
        let mut tweens = Tweener::new();
        let node = Node::create(
            &mut scene,
            NodeOptions {
                speed: 1.0,
                ..NodeOptions::default()
            },
        );
        node.animate(&scene, &mut tweens, Property::X, 100.0);
        tweens.tick(&mut scene, HostTime(0));
        tweens.tick(&mut scene, HostTime(500_000));
        assert!(tweens.len() == 1, "still running at half its speed");
        tweens.tick(&mut scene, HostTime(1_000_000));
        assert_eq!(scene.property(node.id(), Property::X), Some(100.0));
    }

    #[test]
    fn draws_filled_and_outlined_circle() {
        let mut scene = Scene::new();
        let node = Node::create(
            &mut scene,
            NodeOptions {
                x: 30.0,
                y: 40.0,
                ..NodeOptions::default()
            },
        );
        let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
        scene.render(node.id(), surface.context());

        let circles = surface.context.circles();
        let (circle, style) = circles.first().expect("one circle");
        assert_eq!(circle.center, kurbo::Point::new(30.0, 40.0));
        assert_eq!(circle.radius, 25.0);
        assert_eq!(style.fill, Some(FILL));
        assert_eq!(style.stroke, Some(OUTLINE));
    }

    #[test]
    fn start_on_destroyed_node_is_none() {
        let mut scene = Scene::new();
        let mut tweens = Tweener::new();
        let node = Node::create(&mut scene, NodeOptions::default());
        scene.destroy(node.id());
        assert!(node.start(&mut scene, &mut tweens).is_none());
        assert!(tweens.is_empty());
    }
}
