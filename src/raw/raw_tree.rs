use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::borrow::Borrow;

use tracing::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::compare::Compare;

/// The point where a missing key would be attached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Slot {
    parent: Option<Handle>,
    side: Side,
}

/// The unbalanced binary search tree backing `OrderedMap`.
///
/// The tree is the sole owner of every node and value. Erasing rewires links
/// but never moves a surviving node, so handles held elsewhere stay valid
/// unless their own node is erased.
pub(crate) struct RawTree<K, V, C> {
    /// Arena storing all tree nodes (keys and links).
    nodes: Arena<Node<K>>,
    /// Arena storing all values, kept apart from the links iterators keep reading.
    values: Arena<V>,
    /// Handle to the root node, if the tree is non-empty. The root has no parent.
    root: Option<Handle>,
    comp: C,
}

// Navigation only needs the links, so it lives on the node arena itself.
impl<K> Arena<Node<K>> {
    /// Returns the minimum node of the subtree rooted at `handle`.
    pub(crate) fn min_from(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.get(handle).left() {
            handle = left;
        }
        handle
    }

    /// Returns the maximum node of the subtree rooted at `handle`.
    pub(crate) fn max_from(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.get(handle).right() {
            handle = right;
        }
        handle
    }

    /// Returns the in-order successor of `handle`, or `None` if it is the maximum.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        let node = self.get(handle);
        if let Some(right) = node.right() {
            return Some(self.min_from(right));
        }

        // Climb while we are a right child; the first parent reached from its
        // left side is the successor.
        let mut child = handle;
        let mut parent = node.parent();
        while let Some(p) = parent {
            let parent_node = self.get(p);
            if parent_node.left() == Some(child) {
                return Some(p);
            }
            child = p;
            parent = parent_node.parent();
        }
        None
    }

    /// Returns the in-order predecessor of `handle`, or `None` if it is the minimum.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        let node = self.get(handle);
        if let Some(left) = node.left() {
            return Some(self.max_from(left));
        }

        let mut child = handle;
        let mut parent = node.parent();
        while let Some(p) = parent {
            let parent_node = self.get(p);
            if parent_node.right() == Some(child) {
                return Some(p);
            }
            child = p;
            parent = parent_node.parent();
        }
        None
    }
}

impl<K, V, C> RawTree<K, V, C> {
    /// Creates a new, empty tree ordered by `comp`.
    pub(crate) const fn new(comp: C) -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            root: None,
            comp,
        }
    }

    /// Creates a new tree with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize, comp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            values: Arena::with_capacity(capacity),
            root: None,
            comp,
        }
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.comp
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity().min(self.values.capacity())
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        self.values.reserve(additional);
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.nodes.try_reserve(additional)?;
        self.values.try_reserve(additional)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the entries by walking from the minimum to past-the-end.
    pub(crate) fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.first();
        while let Some(handle) = current {
            count += 1;
            current = self.nodes.successor(handle);
        }
        count
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    /// Returns `true` if `handle` names a node currently in the tree.
    pub(crate) fn is_live(&self, handle: Handle) -> bool {
        self.nodes.try_get(handle).is_some()
    }

    pub(crate) fn nodes(&self) -> &Arena<Node<K>> {
        &self.nodes
    }

    pub(crate) fn values(&self) -> &Arena<V> {
        &self.values
    }

    /// Borrows the link arena shared and the value arena exclusively at once.
    pub(crate) fn split_mut(&mut self) -> (&Arena<Node<K>>, &mut Arena<V>) {
        (&self.nodes, &mut self.values)
    }

    pub(crate) fn key_value(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get(node.value()))
    }

    pub(crate) fn key_value_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get_mut(node.value()))
    }

    pub(crate) fn value_mut(&mut self, handle: Handle) -> &mut V {
        self.key_value_mut(handle).1
    }

    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.nodes.min_from(root))
    }

    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.nodes.max_from(root))
    }

    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        self.nodes.successor(handle)
    }

    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        self.nodes.predecessor(handle)
    }

    /// Links a new node at `slot`, which must come from [`locate`](Self::locate)
    /// on this tree with no mutation in between.
    pub(crate) fn attach(&mut self, slot: Slot, key: K, value: V) -> Handle {
        let value = self.values.alloc(value);
        let mut node = Node::new(key, value);
        node.set_parent(slot.parent);
        let handle = self.nodes.alloc(node);

        match slot.parent {
            Some(parent) => self.nodes.get_mut(parent).set_child(slot.side, Some(handle)),
            None => {
                debug_assert!(self.root.is_none(), "`RawTree::attach()` - root slot is occupied!");
                self.root = Some(handle);
            }
        }

        trace!(handle = handle.to_index(), side = ?slot.side, root = slot.parent.is_none(), "attached node");
        handle
    }

    /// Like [`attach`](Self::attach), but reserves storage first so that an
    /// allocation failure leaves the tree untouched.
    pub(crate) fn try_attach(&mut self, slot: Slot, key: K, value: V) -> Result<Handle, TryReserveError> {
        self.try_reserve(1)?;
        Ok(self.attach(slot, key, value))
    }

    /// Unlinks and destroys the node at `target`, returning its entry.
    ///
    /// With two children, the right child is promoted into `target`'s slot and
    /// `target`'s left subtree is hung from the minimum of the right subtree.
    pub(crate) fn erase(&mut self, target: Handle) -> (K, V) {
        let node = self.nodes.get(target);
        let was_root = node.parent().is_none();

        let case = match (node.left(), node.right()) {
            (None, None) => {
                self.replace_in_parent(target, None);
                "leaf"
            }
            (Some(child), None) | (None, Some(child)) => {
                self.replace_in_parent(target, Some(child));
                "one-child"
            }
            (Some(left), Some(right)) => {
                let successor = self.nodes.min_from(right);
                self.replace_in_parent(target, Some(right));
                self.nodes.get_mut(successor).set_child(Side::Left, Some(left));
                self.nodes.get_mut(left).set_parent(Some(successor));
                "two-children"
            }
        };

        trace!(handle = target.to_index(), case, was_root, "erased node");

        let (key, value) = self.nodes.take(target).into_parts();
        (key, self.values.take(value))
    }

    /// Puts `replacement` where `target` hangs: its parent's child slot, or the root.
    fn replace_in_parent(&mut self, target: Handle, replacement: Option<Handle>) {
        let parent = self.nodes.get(target).parent();
        if let Some(replacement) = replacement {
            self.nodes.get_mut(replacement).set_parent(parent);
        }

        match parent {
            Some(parent) => {
                let parent_node = self.nodes.get_mut(parent);
                let side = parent_node.side_of(target);
                parent_node.set_child(side, replacement);
            }
            None => self.root = replacement,
        }
    }

    /// Destroys every entry in post-order and leaves the tree empty.
    pub(crate) fn clear(&mut self) {
        let mut destroyed = 0_usize;
        let mut current = self.root.take();

        // Descend to a leaf, destroy it, then resume from its parent. A parent
        // becomes a leaf once both of its subtrees are gone.
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if !node.is_leaf() {
                current = node.left().or(node.right());
                continue;
            }

            let parent = node.parent();
            if let Some(parent) = parent {
                let parent_node = self.nodes.get_mut(parent);
                let side = parent_node.side_of(handle);
                parent_node.set_child(side, None);
            }

            let (key, value) = self.nodes.take(handle).into_parts();
            drop(key);
            drop(self.values.take(value));
            destroyed += 1;
            current = parent;
        }

        self.nodes.clear();
        self.values.clear();
        if destroyed > 0 {
            trace!(destroyed, "tree torn down");
        }
    }

    /// Removes every entry, returning them in key order.
    pub(crate) fn drain_in_order(&mut self) -> Vec<(K, V)> {
        let mut handles = Vec::with_capacity(self.nodes.len());
        let mut current = self.first();
        while let Some(handle) = current {
            handles.push(handle);
            current = self.nodes.successor(handle);
        }

        let entries = handles
            .into_iter()
            .map(|handle| {
                let (key, value) = self.nodes.take(handle).into_parts();
                (key, self.values.take(value))
            })
            .collect();

        self.root = None;
        self.nodes.clear();
        self.values.clear();
        entries
    }
}

impl<K, V, C> RawTree<K, V, C> {
    /// Walks from the root toward `key`.
    ///
    /// Returns the matching node, or the empty child slot where `key` belongs.
    pub(crate) fn locate<Q>(&self, key: &Q) -> Result<Handle, Slot>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let Some(mut current) = self.root else {
            return Err(Slot {
                parent: None,
                side: Side::Left,
            });
        };

        loop {
            let node = self.nodes.get(current);
            let side = if self.comp.less(node.key().borrow(), key) {
                Side::Right
            } else if self.comp.less(key, node.key().borrow()) {
                Side::Left
            } else {
                return Ok(current);
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    return Err(Slot {
                        parent: Some(current),
                        side,
                    });
                }
            }
        }
    }

    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.locate(key).ok()
    }

    /// Inserts `key` unless an equivalent key is present.
    ///
    /// Returns the node holding the key and whether a node was created. An
    /// existing entry is left untouched and `value` is dropped.
    pub(crate) fn insert(&mut self, key: K, value: V) -> (Handle, bool)
    where
        C: Compare<K>,
    {
        match self.locate(&key) {
            Ok(handle) => (handle, false),
            Err(slot) => (self.attach(slot, key, value), true),
        }
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let handle = self.search(key)?;
        Some(self.erase(handle))
    }

    /// Returns the first node, in order, whose key is not ordered before `key`.
    ///
    /// This scans from the minimum rather than descending.
    pub(crate) fn lower_bound<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.scan(|node_key| !self.comp.less(node_key, key))
    }

    /// Returns the first node, in order, whose key is ordered after `key`.
    pub(crate) fn upper_bound<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.scan(|node_key| self.comp.less(key, node_key))
    }

    fn scan<Q, F>(&self, mut found: F) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        F: FnMut(&Q) -> bool,
    {
        let mut current = self.first();
        while let Some(handle) = current {
            if found(self.nodes.get(handle).key().borrow()) {
                return Some(handle);
            }
            current = self.nodes.successor(handle);
        }
        None
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for RawTree<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            values: self.values.clone(),
            root: self.root,
            comp: self.comp.clone(),
        }
    }
}

impl<K, V, C> Drop for RawTree<K, V, C> {
    fn drop(&mut self) {
        self.clear();
    }
}
