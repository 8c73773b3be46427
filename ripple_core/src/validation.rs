// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation keys and per-object validation state.
//!
//! Each display object carries a small map from [`ValidationKey`] to a
//! boolean. A key that was never set reads as **invalid**, so freshly created
//! objects always do their first pass of work.
//!
//! The scene uses two well-known keys:
//!
//! - [`CHILDREN`]: a display list's child pass is up to date. Appending a
//!   child invalidates it; rendering the list validates it again. While valid,
//!   the list skips walking its children entirely.
//! - [`SIZE`]: a drawable's logical size has been pushed to the backing
//!   surface. Resizing invalidates it; the next render applies the new pixel
//!   size once and validates it.
//!
//! Any other key can be used by callers for their own cached aspects.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

/// The name of one cached aspect of a display object.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidationKey(Cow<'static, str>);

impl ValidationKey {
    /// Creates a key from a static name.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a key from an owned name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the key's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ValidationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValidationKey({:?})", self.as_str())
    }
}

impl From<&'static str> for ValidationKey {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// A display list's child pass is up to date.
pub const CHILDREN: ValidationKey = ValidationKey::from_static("children");

/// A drawable's size has been applied to its backing surface.
pub const SIZE: ValidationKey = ValidationKey::from_static("size");

/// Validation flags of a single display object.
#[derive(Clone, Debug, Default)]
pub struct Validations {
    flags: BTreeMap<ValidationKey, bool>,
}

impl Validations {
    /// Creates an empty map; every key reads as invalid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: BTreeMap::new(),
        }
    }

    /// Marks `key` as needing re-derivation.
    pub fn invalidate(&mut self, key: &ValidationKey) {
        self.flags.insert(key.clone(), false);
    }

    /// Marks `key` as current.
    pub fn validate(&mut self, key: &ValidationKey) {
        self.flags.insert(key.clone(), true);
    }

    /// Returns whether `key` is current. Keys never set are invalid.
    #[must_use]
    pub fn is_valid(&self, key: &ValidationKey) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Forgets every key.
    pub fn clear(&mut self) {
        self.flags.clear();
    }

    /// Returns the number of keys that have been set either way.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns whether no key has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
