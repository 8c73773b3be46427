// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering and the child-pass cache.
//!
//! Rendering an object first draws the object's own visual, then, for display
//! lists, performs a *child pass*: every child is rendered in insertion order
//! and the list's [`CHILDREN`] key is validated. While that key stays valid,
//! later renders of the same list skip the child pass entirely. Appending a
//! child invalidates the key; anything else that should cause a redraw must
//! invalidate it explicitly (the viewport does so every frame).

use super::id::ObjectId;
use super::object::Visual;
use super::store::Scene;
use crate::indicator;
use crate::node;
use crate::surface::DrawContext;
use crate::validation::CHILDREN;

/// Counters accumulated by [`Scene::render`] since the last
/// [`Scene::take_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Objects whose own render hook ran.
    pub objects_rendered: u64,
    /// Child passes performed by display lists.
    pub child_passes: u64,
    /// Children visited across all child passes.
    pub children_visited: u64,
}

impl Scene {
    /// Renders `id` and, if its child pass is stale, its subtree.
    ///
    /// Rendering a stale handle does nothing, so destroyed objects are inert.
    pub fn render<C: DrawContext + ?Sized>(&mut self, id: ObjectId, ctx: &mut C) {
        let Some(obj) = self.get(id) else {
            return;
        };
        match obj.visual {
            Visual::Group => {}
            Visual::Node => node::draw(obj, ctx),
            Visual::Indicator => indicator::draw(obj, ctx),
        }
        let walk = obj.visual.has_children() && !obj.validations.is_valid(&CHILDREN);
        self.stats.objects_rendered += 1;

        if walk {
            self.stats.child_passes += 1;
            let mut i = 0;
            while let Some(&child) = self.children(id).get(i) {
                self.stats.children_visited += 1;
                self.render(child, ctx);
                i += 1;
            }
            self.validate(id, &CHILDREN);
        }
    }

    /// Returns the counters accumulated since the last reset.
    #[must_use]
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Returns the counters and resets them to zero.
    pub fn take_stats(&mut self) -> RenderStats {
        core::mem::take(&mut self.stats)
    }
}
