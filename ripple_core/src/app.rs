// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Application wiring: one viewport, one centred node, one frame loop.
//!
//! The platform layer constructs an [`Application`] through a
//! [`SurfaceProvider`], then forwards three kinds of callbacks to it:
//! animation frames to [`Application::on_play`], pointer input to
//! [`Application::on_pointer`] and window resizes to
//! [`Application::on_resize`].

use crate::drawable::DrawableConfig;
use crate::input::{InputConfig, PointerEvent};
use crate::node::{Node, NodeOptions, NodeRegistry};
use crate::scene::Scene;
use crate::surface::{Surface, SurfaceError, SurfaceProvider};
use crate::time::{FrameTick, HostTime};
use crate::trace::{FrameEvent, Tracer};
use crate::tween::Tweener;
use crate::viewport::{PointerOutcome, Viewport};

/// Identifier of the surface the application draws on.
pub const VIEWPORT_ID: &str = "viewport";

/// Start-up settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AppConfig {
    /// Initial attributes of the viewport's root list.
    pub viewport: DrawableConfig,
    /// Pointer throttle windows.
    pub input: InputConfig,
    /// Attributes of the node; its position is replaced by the viewport
    /// centre.
    pub node: NodeOptions,
}

/// The running demo.
#[derive(Debug)]
pub struct Application<S: Surface> {
    viewport: Viewport<S>,
    tweens: Tweener,
    nodes: NodeRegistry,
    node: Node,
}

impl<S: Surface> Application<S> {
    /// Opens the application on [`VIEWPORT_ID`] with the default settings.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`SurfaceError`] if the viewport surface cannot
    /// be resolved.
    pub fn open<P>(provider: &P) -> Result<Self, SurfaceError>
    where
        P: SurfaceProvider<Surface = S>,
    {
        Self::open_with(provider, AppConfig::default())
    }

    /// Opens the application on [`VIEWPORT_ID`].
    ///
    /// The node is appended to the viewport, centred, and its grow-in
    /// animation is started.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`SurfaceError`] if the viewport surface cannot
    /// be resolved.
    pub fn open_with<P>(provider: &P, config: AppConfig) -> Result<Self, SurfaceError>
    where
        P: SurfaceProvider<Surface = S>,
    {
        let mut viewport = Viewport::open(provider, VIEWPORT_ID, config.viewport, config.input)?;
        let mut tweens = Tweener::new();
        let mut nodes = NodeRegistry::new();

        let centre = viewport.drawable().size().to_vec2() / 2.0;
        let root = viewport.root();
        let scene = viewport.scene_mut();
        let node = nodes.create_node(
            scene,
            NodeOptions {
                x: centre.x,
                y: centre.y,
                ..config.node
            },
        );
        scene.append(root, node.id());
        node.start(scene, &mut tweens);

        Ok(Self {
            viewport,
            tweens,
            nodes,
            node,
        })
    }

    /// Advances every tween to the frame time, then renders.
    pub fn on_play(&mut self, tick: &FrameTick, tracer: &mut Tracer<'_>) {
        let tweens = self.tweens.tick(self.viewport.scene_mut(), tick.now);
        self.viewport.render();
        let render = self.viewport.scene_mut().take_stats();
        tracer.frame(&FrameEvent {
            frame_index: tick.frame_index,
            now: tick.now,
            tweens,
            render,
        });
    }

    /// Forwards pointer input to the viewport.
    pub fn on_pointer(
        &mut self,
        now: HostTime,
        event: &PointerEvent,
        tracer: &mut Tracer<'_>,
    ) -> PointerOutcome {
        self.viewport
            .handle_pointer(now, event, &mut self.tweens, tracer)
    }

    /// Forwards a window resize to the viewport.
    pub fn on_resize(&mut self, tracer: &mut Tracer<'_>) {
        self.viewport.on_resize(tracer);
    }

    /// Returns the node created at start-up.
    #[must_use]
    pub fn node(&self) -> Node {
        self.node
    }

    /// Returns the node registry.
    #[must_use]
    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    /// Returns the node registry mutably.
    pub fn nodes_mut(&mut self) -> &mut NodeRegistry {
        &mut self.nodes
    }

    /// Returns the tweener.
    #[must_use]
    pub fn tweens(&self) -> &Tweener {
        &self.tweens
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport<S> {
        &self.viewport
    }

    /// Returns the viewport mutably.
    pub fn viewport_mut(&mut self) -> &mut Viewport<S> {
        &mut self.viewport
    }

    /// Returns the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.viewport.scene()
    }
}
