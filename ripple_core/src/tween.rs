// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tweening.
//!
//! A [`Tweener`] interpolates numeric [`Property`] values of scene objects
//! toward end values over a [`Duration`], shaped by an [`Easing`] curve.
//!
//! Start values are captured the first time a tween is ticked, not when it is
//! created, so a caller may reset a property right after starting a tween
//! (the node's grow-in does exactly that). Each [`tick`](Tweener::tick)
//! writes interpolated values straight into the objects; rendering afterwards
//! always sees the latest values.
//!
//! ```rust
//! use ripple_core::scene::{Property, Scene};
//! use ripple_core::time::{Duration, HostTime};
//! use ripple_core::tween::{Easing, Tweener};
//!
//! let mut scene = Scene::new();
//! let id = scene.create_group();
//! let mut tweens = Tweener::new();
//! tweens
//!     .to(id, Duration::from_millis(1000))
//!     .animate(Property::Opacity, 0.0)
//!     .ease(Easing::Linear)
//!     .start();
//!
//! tweens.tick(&mut scene, HostTime(0));
//! tweens.tick(&mut scene, HostTime(500_000));
//! assert_eq!(scene.property(id, Property::Opacity), Some(0.5));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::scene::{ObjectId, Property, Scene};
use crate::time::{Duration, HostTime};

/// Shape of the progress curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic ease-out: fast start, gentle stop.
    #[default]
    QuadOut,
    /// Exponential ease-out: very fast start, long gentle tail.
    ExpoOut,
}

impl Easing {
    /// Maps linear progress in `0.0..=1.0` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadOut => t * (2.0 - t),
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - libm::pow(2.0, -10.0 * t)
                }
            }
        }
    }
}

/// Identifies a tween registered with a [`Tweener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TweenId(u64);

/// Callback run once when a tween reaches its end.
type Completion = Box<dyn FnOnce(&mut Scene, ObjectId)>;

#[derive(Clone, Copy, Debug)]
struct Track {
    property: Property,
    from: f64,
    to: f64,
}

struct Tween {
    id: TweenId,
    target: ObjectId,
    tracks: Vec<Track>,
    duration: Duration,
    easing: Easing,
    started: Option<HostTime>,
    on_complete: Option<Completion>,
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("tracks", &self.tracks)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("started", &self.started)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// What a single [`Tweener::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Tweens still running after the tick.
    pub active: usize,
    /// Tweens that reached their end during the tick.
    pub completed: usize,
    /// Tweens dropped because their target no longer exists.
    pub orphaned: usize,
}

/// Owner and driver of all running tweens.
#[derive(Debug, Default)]
pub struct Tweener {
    tweens: Vec<Tween>,
    next_id: u64,
}

impl Tweener {
    /// Creates a tweener with nothing running.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins describing a tween of `target` lasting `duration`.
    ///
    /// Nothing is registered until [`TweenBuilder::start`] is called.
    pub fn to(&mut self, target: ObjectId, duration: Duration) -> TweenBuilder<'_> {
        TweenBuilder {
            tweener: self,
            target,
            duration,
            tracks: Vec::new(),
            easing: Easing::default(),
            on_complete: None,
        }
    }

    /// Advances every tween to `now`.
    ///
    /// Writes eased values into the targets, then runs the completion
    /// callbacks of tweens that finished, in registration order. Tweens whose
    /// target has been destroyed are dropped without running their callback.
    pub fn tick(&mut self, scene: &mut Scene, now: HostTime) -> TickSummary {
        let mut summary = TickSummary::default();
        let mut finished: Vec<(ObjectId, Option<Completion>)> = Vec::new();

        self.tweens.retain_mut(|tween| {
            let Some(obj) = scene.get_mut(tween.target) else {
                summary.orphaned += 1;
                return false;
            };

            let started = *tween.started.get_or_insert_with(|| {
                for track in &mut tween.tracks {
                    track.from = obj.property(track.property);
                }
                now
            });

            let elapsed = now.saturating_duration_since(started);
            let progress = if tween.duration == Duration::ZERO || elapsed >= tween.duration {
                1.0
            } else {
                elapsed.as_secs_f64() / tween.duration.as_secs_f64()
            };

            if progress >= 1.0 {
                for track in &tween.tracks {
                    obj.set_property(track.property, track.to);
                }
                finished.push((tween.target, tween.on_complete.take()));
                summary.completed += 1;
                return false;
            }

            let eased = tween.easing.apply(progress);
            for track in &tween.tracks {
                obj.set_property(track.property, track.from + (track.to - track.from) * eased);
            }
            true
        });

        summary.active = self.tweens.len();
        for (target, on_complete) in finished {
            if let Some(on_complete) = on_complete {
                on_complete(scene, target);
            }
        }
        summary
    }

    /// Returns whether the tween is still running.
    #[must_use]
    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|t| t.id == id)
    }

    /// Stops a tween where it is, without running its callback. Returns
    /// whether it was running.
    pub fn kill(&mut self, id: TweenId) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.id != id);
        before != self.tweens.len()
    }

    /// Stops every tween of `target`, without running callbacks. Returns how
    /// many were stopped.
    pub fn kill_tweens_of(&mut self, target: ObjectId) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.target != target);
        before - self.tweens.len()
    }

    /// Returns the number of running tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Returns whether nothing is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

/// Describes a tween before it is registered. Created by [`Tweener::to`].
#[must_use = "a tween does nothing until `start` is called"]
pub struct TweenBuilder<'a> {
    tweener: &'a mut Tweener,
    target: ObjectId,
    duration: Duration,
    tracks: Vec<Track>,
    easing: Easing,
    on_complete: Option<Completion>,
}

impl fmt::Debug for TweenBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenBuilder")
            .field("target", &self.target)
            .field("duration", &self.duration)
            .field("tracks", &self.tracks)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}

impl TweenBuilder<'_> {
    /// Animates `property` toward `value`. A later call for the same property
    /// replaces the earlier end value.
    pub fn animate(mut self, property: Property, value: f64) -> Self {
        match self.tracks.iter_mut().find(|t| t.property == property) {
            Some(track) => track.to = value,
            None => self.tracks.push(Track {
                property,
                from: 0.0,
                to: value,
            }),
        }
        self
    }

    /// Sets the easing curve. Defaults to [`Easing::QuadOut`].
    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Runs `f` with the scene and the target once the tween finishes.
    pub fn on_complete(mut self, f: impl FnOnce(&mut Scene, ObjectId) + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Registers the tween; it starts on the next tick.
    pub fn start(self) -> TweenId {
        let id = TweenId(self.tweener.next_id);
        self.tweener.next_id += 1;
        self.tweener.tweens.push(Tween {
            id,
            target: self.target,
            tracks: self.tracks,
            duration: self.duration,
            easing: self.easing,
            started: None,
            on_complete: self.on_complete,
        });
        id
    }
}
