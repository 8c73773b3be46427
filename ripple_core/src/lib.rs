// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained-mode display list, tweening and pointer input for an interactive
//! canvas.
//!
//! `ripple_core` holds everything that does not touch a platform API. It is
//! `no_std` compatible (with `alloc`); display objects live in an arena
//! addressed by generational handles, and drawing goes through the
//! [`surface`] traits that a backend implements.
//!
//! # Architecture
//!
//! ```text
//!   Backend (tick source, input, resize)
//!       │
//!       ▼
//!   Application::on_play ──► Tweener::tick ──► Viewport::render
//!                                                   │
//!                 ┌─────────────────────────────────┘
//!                 ▼
//!   Drawable::render ──► Scene::render ──► DrawContext
//!
//!   Application::on_pointer ──► ViewportEvents ──► ClickIndicator
//! ```
//!
//! **[`scene`]**: Arena of display objects with generational handles,
//! display-list topology (append, insert, remove, destroy) and the
//! validation-gated render walk.
//!
//! **[`validation`]**: Named validity flags. A list skips its child pass
//! while its `children` key is valid; a drawable pushes its size to the
//! surface only while its `size` key is invalid.
//!
//! **[`drawable`]** / **[`viewport`]**: A root list bound to a surface, and
//! the interactive specialization that redraws every frame and spawns
//! indicators from input.
//!
//! **[`input`]** / **[`throttle`]**: Click and touch policy: per-kind
//! leading-edge throttling and suppression of the click a touch synthesizes.
//!
//! **[`node`]** / **[`indicator`]**: The two visuals: the persistent avatar
//! with its registry, and the transient expanding ring.
//!
//! **[`tween`]**: Eased property animation with completion callbacks.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! frame-loop and input instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod app;
pub mod drawable;
pub mod indicator;
pub mod input;
pub mod node;
pub mod scene;
pub mod surface;
pub mod throttle;
pub mod time;
pub mod trace;
pub mod tween;
pub mod validation;
pub mod viewport;
