// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display object data.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use super::id::ObjectId;
use crate::validation::Validations;

/// What a display object draws and which capabilities it has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visual {
    /// Draws nothing itself; renders its children in order.
    Group,
    /// The persistent filled circle (see [`Node`](crate::node::Node)).
    Node,
    /// An expanding ring (see [`ClickIndicator`](crate::indicator::ClickIndicator)).
    Indicator,
}

impl Visual {
    /// Returns whether objects of this kind hold children.
    #[must_use]
    pub const fn has_children(self) -> bool {
        matches!(self, Self::Group)
    }
}

/// A numeric property that can be read, written and tweened by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// [`DisplayObject::x`].
    X,
    /// [`DisplayObject::y`].
    Y,
    /// [`DisplayObject::width`].
    Width,
    /// [`DisplayObject::height`].
    Height,
    /// [`DisplayObject::opacity`].
    Opacity,
    /// [`DisplayObject::speed`].
    Speed,
}

/// A single node of the display tree.
///
/// Geometry and animated values are plain public fields, so animation code
/// and callers mutate them directly. Structure (parent, children) and
/// validation state are only changed through [`Scene`](super::Scene).
#[derive(Clone, Debug)]
pub struct DisplayObject {
    /// Horizontal position in screen space.
    pub x: f64,
    /// Vertical position in screen space.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Default animation duration in seconds.
    pub speed: f64,
    pub(crate) visual: Visual,
    pub(crate) parent: Option<ObjectId>,
    pub(crate) children: Vec<ObjectId>,
    pub(crate) validations: Validations,
}

impl DisplayObject {
    /// Creates an object of the given kind at the origin with zero size,
    /// full opacity and a one-second speed.
    #[must_use]
    pub fn new(visual: Visual) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            opacity: 1.0,
            speed: 1.0,
            visual,
            parent: None,
            children: Vec::new(),
            validations: Validations::new(),
        }
    }

    /// Returns the object's kind.
    #[must_use]
    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// Returns the list this object was last attached to, if any.
    #[must_use]
    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    /// Returns the children in render order. Empty for non-list objects.
    #[must_use]
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    /// Returns the validation flags.
    #[must_use]
    pub fn validations(&self) -> &Validations {
        &self.validations
    }

    /// Returns `(x, y)` as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns `(width, height)` as a size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Reads a property by name.
    #[must_use]
    pub fn property(&self, property: Property) -> f64 {
        match property {
            Property::X => self.x,
            Property::Y => self.y,
            Property::Width => self.width,
            Property::Height => self.height,
            Property::Opacity => self.opacity,
            Property::Speed => self.speed,
        }
    }

    /// Writes a property by name.
    pub fn set_property(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::X => &mut self.x,
            Property::Y => &mut self.y,
            Property::Width => &mut self.width,
            Property::Height => &mut self.height,
            Property::Opacity => &mut self.opacity,
            Property::Speed => &mut self.speed,
        };
        *slot = value;
    }
}
