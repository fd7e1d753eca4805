// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered element sequence shared by one fixed-position view.
//!
//! [`ElementStack`] owns the view's elements in stacking order: index 0 is
//! the back, the last index is the front. Mutating operations are guarded:
//! every entry gets an [`ElementId`] on insertion, callers record
//! [`ElementHandle`]s (index + id), and a mutator acts only when the
//! handle's id still sits at the handle's index. A handle gone stale
//! through some other actor's splice silently no-ops instead of corrupting
//! an unrelated entry.

use alloc::vec::Vec;

use crate::config::ElementConfig;

/// Identity of one stack entry.
///
/// Ids are assigned on insertion, monotonically, and never reused, so a
/// stale handle can never alias a later entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

/// A recorded position in an [`ElementStack`]: an index plus the id that
/// occupied it when the handle was minted.
///
/// Handles are cheap and copyable, and they are what a containing view
/// keeps across render passes. They go stale whenever a structural
/// mutation (insert, remove, reorder) moves the entry; guarded stack
/// operations detect this and decline to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementHandle {
    index: usize,
    id: ElementId,
}

impl ElementHandle {
    pub(crate) const fn new(index: usize, id: ElementId) -> Self {
        Self { index, id }
    }

    /// The recorded index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The recorded entry identity.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }
}

/// Where to move an element in the stacking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderDirection {
    /// To the front (last index).
    Top,
    /// One step toward the front.
    Up,
    /// One step toward the back.
    Down,
    /// To the back (index 0).
    Bottom,
}

impl OrderDirection {
    /// The index `index` maps to in a sequence of `len` entries, clamped to
    /// the valid range.
    fn target(self, index: usize, len: usize) -> usize {
        match self {
            Self::Top => len - 1,
            Self::Up => (index + 1).min(len - 1),
            Self::Down => index.saturating_sub(1),
            Self::Bottom => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    id: ElementId,
    config: ElementConfig,
}

/// The ordered sequence of element configurations owned by one view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStack {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ElementStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `config` at the front of the stacking order and returns its
    /// handle.
    pub fn push(&mut self, config: ElementConfig) -> ElementHandle {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, config });
        ElementHandle::new(self.entries.len() - 1, id)
    }

    /// Returns the configuration at `index`, back-to-front.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ElementConfig> {
        self.entries.get(index).map(|entry| &entry.config)
    }

    /// Returns a handle for the entry currently at `index`.
    #[must_use]
    pub fn handle_at(&self, index: usize) -> Option<ElementHandle> {
        self.entries
            .get(index)
            .map(|entry| ElementHandle::new(index, entry.id))
    }

    /// Returns the current index of the entry with identity `id`.
    #[must_use]
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Returns `true` if `handle`'s id still sits at `handle`'s index.
    ///
    /// This is the precondition every guarded mutator checks before acting.
    #[must_use]
    pub fn is_current(&self, handle: ElementHandle) -> bool {
        self.entries
            .get(handle.index)
            .is_some_and(|entry| entry.id == handle.id)
    }

    /// Returns the configuration `handle` points at, if it is still current.
    #[must_use]
    pub fn config(&self, handle: ElementHandle) -> Option<&ElementConfig> {
        self.is_current(handle)
            .then(|| &self.entries[handle.index].config)
    }

    /// Returns the configuration `handle` points at mutably, if it is still
    /// current.
    pub fn config_mut(&mut self, handle: ElementHandle) -> Option<&mut ElementConfig> {
        if self.is_current(handle) {
            Some(&mut self.entries[handle.index].config)
        } else {
            None
        }
    }

    /// Iterates the configurations back-to-front.
    pub fn iter(&self) -> impl Iterator<Item = &ElementConfig> {
        self.entries.iter().map(|entry| &entry.config)
    }

    /// Moves the entry `handle` points at in the given direction.
    ///
    /// The entry is spliced out of its current index and back in at the
    /// clamped target index, so the relative order of every other entry is
    /// preserved. Returns the new index, or `None` without touching the
    /// sequence when the move would not change anything (already at the
    /// boundary) or the handle is stale.
    pub fn reorder(&mut self, handle: ElementHandle, direction: OrderDirection) -> Option<usize> {
        if !self.is_current(handle) {
            return None;
        }
        let desired = direction.target(handle.index, self.entries.len());
        if desired == handle.index {
            return None;
        }
        let entry = self.entries.remove(handle.index);
        self.entries.insert(desired, entry);
        Some(desired)
    }

    /// Removes the entry `handle` points at and returns its configuration.
    ///
    /// Returns `None` without touching the sequence when the handle is
    /// stale.
    pub fn remove(&mut self, handle: ElementHandle) -> Option<ElementConfig> {
        self.is_current(handle)
            .then(|| self.entries.remove(handle.index).config)
    }

    /// Unguarded accessor for a known-live index.
    ///
    /// Only [`ElementProxy`](crate::ElementProxy) uses this; a proxy
    /// validates its handle at construction and holds the stack exclusively
    /// afterward.
    pub(crate) fn config_at(&self, index: usize) -> &ElementConfig {
        &self.entries[index].config
    }

    pub(crate) fn config_at_mut(&mut self, index: usize) -> &mut ElementConfig {
        &mut self.entries[index].config
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> ElementConfig {
        self.entries.remove(index).config
    }
}
