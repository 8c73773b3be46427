// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot storage for display objects, with topology and validation management.

use alloc::vec::Vec;

use super::id::ObjectId;
use super::object::{DisplayObject, Property, Visual};
use super::render::RenderStats;
use crate::validation::{self, ValidationKey};

/// Owner of every display object.
///
/// Objects are addressed by [`ObjectId`] handles. Destroyed objects free their
/// slot for reuse and bump its generation, so stale handles are detected
/// instead of aliasing a newer object. Every operation accepts stale handles
/// and treats them as a no-op (queries return `None`, `false` or an empty
/// slice).
#[derive(Debug, Default)]
pub struct Scene {
    pub(crate) objects: Vec<Option<DisplayObject>>,
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) stats: RenderStats,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Allocation API --

    /// Moves `object` into the scene and returns its handle.
    ///
    /// Any parent or children the value carries are discarded; topology is
    /// only established through [`append_at`](Self::append_at).
    pub fn insert(&mut self, mut object: DisplayObject) -> ObjectId {
        object.parent = None;
        object.children.clear();
        let idx = if let Some(idx) = self.free_list.pop() {
            self.objects[idx as usize] = Some(object);
            idx
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "slot count never exceeds u32::MAX"
            )]
            let idx = self.objects.len() as u32;
            self.objects.push(Some(object));
            self.generation.push(0);
            idx
        };
        ObjectId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Creates an empty display list.
    pub fn create_group(&mut self) -> ObjectId {
        self.insert(DisplayObject::new(Visual::Group))
    }

    /// Returns whether the handle refers to a live object.
    #[must_use]
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of live objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len() - self.free_list.len()
    }

    /// Returns whether the scene holds no live objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns handles to every live object, in slot order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .zip(&self.generation)
            .enumerate()
            .filter(|(_, (obj, _))| obj.is_some())
            .map(|(idx, (_, &generation))| {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "slot count never exceeds u32::MAX"
                )]
                let idx = idx as u32;
                ObjectId { idx, generation }
            })
    }

    /// Returns the object behind `id`, if it is alive.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&DisplayObject> {
        if self.generation.get(id.idx as usize) != Some(&id.generation) {
            return None;
        }
        self.objects[id.idx as usize].as_ref()
    }

    /// Returns the object behind `id` mutably, if it is alive.
    #[must_use]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut DisplayObject> {
        if self.generation.get(id.idx as usize) != Some(&id.generation) {
            return None;
        }
        self.objects[id.idx as usize].as_mut()
    }

    // -- Topology API --

    /// Returns the list `id` was last attached to.
    ///
    /// This is a non-owning back-reference. It is set by
    /// [`append_at`](Self::append_at) and cleared by [`remove`](Self::remove)
    /// and [`destroy`](Self::destroy), but *not* by
    /// [`remove_child`](Self::remove_child).
    #[must_use]
    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.get(id).and_then(|o| o.parent)
    }

    /// Returns the children of `id` in render order.
    #[must_use]
    pub fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.get(id).map_or(&[], |o| &o.children)
    }

    /// Returns whether `child` is currently listed among the children of `list`.
    #[must_use]
    pub fn contains_child(&self, list: ObjectId, child: ObjectId) -> bool {
        self.children(list).contains(&child)
    }

    /// Appends `child` at the end of `list`. See [`append_at`](Self::append_at).
    pub fn append(&mut self, list: ObjectId, child: ObjectId) -> bool {
        self.append_at(list, child, usize::MAX)
    }

    /// Inserts `child` into `list` at `index`, clamped to the list length.
    ///
    /// On insertion the child's parent becomes `list` and the list's
    /// [`CHILDREN`](validation::CHILDREN) key is invalidated so the next
    /// render walks its children again.
    ///
    /// Returns `false` without changing anything if either handle is stale,
    /// `list` cannot hold children, `child` is already in `list`, `child` is
    /// still listed by another list (remove it there first), or inserting
    /// would make `child` its own ancestor.
    pub fn append_at(&mut self, list: ObjectId, child: ObjectId, index: usize) -> bool {
        let Some(list_obj) = self.get(list) else {
            return false;
        };
        if !list_obj.visual.has_children() || list_obj.children.contains(&child) {
            return false;
        }
        let Some(child_obj) = self.get(child) else {
            return false;
        };
        if let Some(old) = child_obj.parent
            && old != list
            && self.contains_child(old, child)
        {
            return false;
        }
        if self.is_ancestor_or_self(child, list) {
            return false;
        }

        if let Some(list_obj) = self.get_mut(list) {
            let index = index.min(list_obj.children.len());
            list_obj.children.insert(index, child);
            list_obj.validations.invalidate(&validation::CHILDREN);
        }
        if let Some(child_obj) = self.get_mut(child) {
            child_obj.parent = Some(list);
        }
        true
    }

    /// Removes the first occurrence of `child` from `list`.
    ///
    /// The child's parent reference is left as is. Returns whether anything
    /// was removed.
    pub fn remove_child(&mut self, list: ObjectId, child: ObjectId) -> bool {
        let Some(list_obj) = self.get_mut(list) else {
            return false;
        };
        match list_obj.children.iter().position(|&c| c == child) {
            Some(pos) => {
                list_obj.children.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Detaches `id` from its parent list, if any, and clears its parent
    /// reference.
    pub fn remove(&mut self, id: ObjectId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        self.remove_child(parent, id);
        if let Some(obj) = self.get_mut(id) {
            obj.parent = None;
        }
    }

    /// Tears `id` down: detaches it, destroys all of its children, clears its
    /// validation state and frees its slot.
    ///
    /// Every handle to the object (and to its descendants) becomes stale.
    /// Returns `false` if the handle was already stale.
    pub fn destroy(&mut self, id: ObjectId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.remove(id);

        let children = self.get(id).map(|o| o.children.clone()).unwrap_or_default();
        for child in children {
            // Detaches from `id` first, then destroys its own subtree.
            self.destroy(child);
        }

        // Dropping the object discards its children and validation state.
        self.objects[id.idx as usize] = None;
        self.generation[id.idx as usize] += 1;
        self.free_list.push(id.idx);
        true
    }

    // -- Validation API --

    /// Marks `key` of `id` as needing re-derivation.
    pub fn invalidate(&mut self, id: ObjectId, key: &ValidationKey) {
        if let Some(obj) = self.get_mut(id) {
            obj.validations.invalidate(key);
        }
    }

    /// Marks `key` of `id` as current.
    pub fn validate(&mut self, id: ObjectId, key: &ValidationKey) {
        if let Some(obj) = self.get_mut(id) {
            obj.validations.validate(key);
        }
    }

    /// Returns whether `key` of `id` is current. Stale handles and unset keys
    /// read as invalid.
    #[must_use]
    pub fn is_valid(&self, id: ObjectId, key: &ValidationKey) -> bool {
        self.get(id).is_some_and(|o| o.validations.is_valid(key))
    }

    // -- Property API --

    /// Reads a numeric property of `id`.
    #[must_use]
    pub fn property(&self, id: ObjectId, property: Property) -> Option<f64> {
        self.get(id).map(|o| o.property(property))
    }

    /// Writes a numeric property of `id`. Returns whether the object was alive.
    pub fn set_property(&mut self, id: ObjectId, property: Property, value: f64) -> bool {
        match self.get_mut(id) {
            Some(obj) => {
                obj.set_property(property, value);
                true
            }
            None => false,
        }
    }

    // -- Internal helpers --

    /// Returns whether `ancestor` is `id` or one of the lists above it.
    fn is_ancestor_or_self(&self, ancestor: ObjectId, id: ObjectId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            // Only follow parents that still list `c`; stale back-references
            // left by `remove_child` do not count as ancestry.
            current = self.parent(c).filter(|&p| self.contains_child(p, c));
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::validation::CHILDREN;

    fn leaf(scene: &mut Scene) -> ObjectId {
        scene.insert(DisplayObject::new(Visual::Node))
    }

    #[test]
    fn insert_and_destroy() {
        let mut scene = Scene::new();
        let id = scene.create_group();
        assert!(scene.is_alive(id));
        assert_eq!(scene.len(), 1);
        assert!(scene.destroy(id));
        assert!(!scene.is_alive(id));
        assert!(scene.is_empty());
        assert!(!scene.destroy(id), "second destroy is a no-op");
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut scene = Scene::new();
        let a = scene.create_group();
        scene.destroy(a);
        let b = scene.create_group();
        assert_eq!(a.index(), b.index(), "slot is reused");
        assert_ne!(a.generation(), b.generation());
        assert!(scene.get(a).is_none());
        assert!(scene.get(b).is_some());
        assert!(!scene.set_property(a, Property::X, 1.0));
    }

    #[test]
    fn append_sets_parent_and_membership() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        let child = leaf(&mut scene);

        assert!(scene.append(list, child));
        assert_eq!(scene.parent(child), Some(list));
        assert_eq!(scene.children(list), &[child]);
    }

    #[test]
    fn append_invalidates_children() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        scene.validate(list, &CHILDREN);
        let child = leaf(&mut scene);
        scene.append(list, child);
        assert!(!scene.is_valid(list, &CHILDREN));
    }

    #[test]
    fn append_at_orders_children() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        let a = leaf(&mut scene);
        let b = leaf(&mut scene);
        let c = leaf(&mut scene);

        scene.append(list, a);
        scene.append(list, b);
        scene.append_at(list, c, 0);
        assert_eq!(scene.children(list), &[c, a, b]);

        let d = leaf(&mut scene);
        scene.append_at(list, d, 99);
        assert_eq!(scene.children(list), &[c, a, b, d], "index clamps to end");
    }

    #[test]
    fn append_rejects_duplicates() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        let child = leaf(&mut scene);
        assert!(scene.append(list, child));
        assert!(!scene.append(list, child));
        assert!(!scene.append_at(list, child, 0));
        assert_eq!(scene.children(list).len(), 1);
    }

    #[test]
    fn append_requires_explicit_reparenting() {
        let mut scene = Scene::new();
        let first = scene.create_group();
        let second = scene.create_group();
        let child = leaf(&mut scene);

        scene.append(first, child);
        assert!(!scene.append(second, child), "still listed by `first`");

        scene.remove(child);
        assert!(scene.append(second, child));
        assert_eq!(scene.parent(child), Some(second));
        assert!(scene.children(first).is_empty());
    }

    #[test]
    fn append_rejects_cycles_and_leaf_lists() {
        let mut scene = Scene::new();
        let outer = scene.create_group();
        let inner = scene.create_group();
        let node = leaf(&mut scene);
        let other = leaf(&mut scene);

        assert!(scene.append(outer, inner));
        assert!(!scene.append(inner, outer), "would create a cycle");
        assert!(!scene.append(inner, inner), "cannot contain itself");
        assert!(!scene.append(node, other), "nodes are not lists");
    }

    #[test]
    fn remove_child_keeps_parent_reference() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        let child = leaf(&mut scene);
        scene.append(list, child);

        assert!(scene.remove_child(list, child));
        assert!(!scene.contains_child(list, child));
        assert_eq!(
            scene.parent(child),
            Some(list),
            "remove_child leaves parent as is"
        );
        assert!(!scene.remove_child(list, child), "absent child is a no-op");
    }

    #[test]
    fn remove_detaches_and_clears_parent() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        let child = leaf(&mut scene);
        scene.append(list, child);

        scene.remove(child);
        assert!(scene.children(list).is_empty());
        assert_eq!(scene.parent(child), None);
        scene.remove(child);
    }

    #[test]
    fn destroy_detaches_from_parent() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        let a = leaf(&mut scene);
        let b = leaf(&mut scene);
        scene.append(list, a);
        scene.append(list, b);

        scene.destroy(a);
        assert_eq!(scene.children(list), &[b]);
    }

    #[test]
    fn destroy_list_destroys_every_child() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let inner = scene.create_group();
        let a = leaf(&mut scene);
        let b = leaf(&mut scene);
        scene.append(root, inner);
        scene.append(inner, a);
        scene.append(inner, b);

        scene.destroy(inner);
        for id in [inner, a, b] {
            assert!(!scene.is_alive(id), "{id:?} should be destroyed");
        }
        assert!(scene.children(root).is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn destroy_clears_validations() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        scene.validate(list, &CHILDREN);
        scene.destroy(list);
        assert!(!scene.is_valid(list, &CHILDREN));
        let reused = scene.create_group();
        assert!(
            scene
                .get(reused)
                .is_some_and(|o| o.validations().is_empty()),
            "reused slot starts fresh"
        );
    }

    #[test]
    fn insert_discards_foreign_topology() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        let child = leaf(&mut scene);
        scene.append(list, child);

        let copy = scene.get(list).cloned().expect("alive");
        let clone_id = scene.insert(copy);
        assert!(scene.children(clone_id).is_empty());
        assert_eq!(scene.parent(child), Some(list));
    }

    #[test]
    fn properties_round_trip() {
        let mut scene = Scene::new();
        let id = leaf(&mut scene);
        assert_eq!(scene.property(id, Property::Opacity), Some(1.0));
        scene.set_property(id, Property::Width, 42.0);
        assert_eq!(scene.property(id, Property::Width), Some(42.0));
        assert_eq!(scene.get(id).map(|o| o.size().width), Some(42.0));
    }

    #[test]
    fn stale_handles_are_total() {
        let mut scene = Scene::new();
        let list = scene.create_group();
        let gone = leaf(&mut scene);
        scene.destroy(gone);

        assert!(!scene.append(list, gone));
        assert!(!scene.remove_child(gone, list));
        scene.remove(gone);
        scene.invalidate(gone, &CHILDREN);
        scene.validate(gone, &CHILDREN);
        assert_eq!(scene.children(gone), &[] as &[ObjectId]);
        assert_eq!(scene.property(gone, Property::X), None);
        assert_eq!(scene.ids().collect::<Vec<_>>(), vec![list]);
    }
}
