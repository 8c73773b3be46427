// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display tree data model.
//!
//! A *display object* is a node of the scene. Each object has:
//!
//! - An identity ([`ObjectId`]), a generational handle that goes stale when
//!   the object is destroyed.
//! - Geometry and animated values (`x`, `y`, `width`, `height`, `opacity`,
//!   `speed`) readable and writable by [`Property`] name.
//! - A [`Visual`] kind that selects what it draws and whether it is a
//!   *display list* holding ordered children.
//! - A non-owning parent back-reference and a set of
//!   [validation](crate::validation) flags.
//!
//! All objects are owned by a [`Scene`]. Lists refer to their children by
//! handle and children refer back to their list by handle; neither keeps the
//! other alive.

mod id;
mod object;
mod render;
mod store;

pub use id::ObjectId;
pub use object::{DisplayObject, Property, Visual};
pub use render::RenderStats;
pub use store::Scene;
