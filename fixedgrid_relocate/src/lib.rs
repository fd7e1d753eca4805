// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixedgrid Relocate: move-an-object-between-containers bookkeeping.
//!
//! Relocating an object in a containment tree is mostly UI (pick a target,
//! confirm, persist); the part worth getting right is the rule set deciding
//! whether a move is legal and the composition updates once it is. This
//! crate owns exactly that part:
//!
//! - [`check_relocation`] evaluates a proposed move and reports the first
//!   [`Denial`] that applies, or `Ok` when the move is legal.
//! - [`relocate`] performs the bookkeeping for a legal move: append the
//!   child's key to the new parent's composition, drop it from the old
//!   parent's, and update the child's recorded home location, honoring the
//!   alias rule (moving a *linked* occurrence of an object does not change
//!   where the object lives).
//!
//! Everything is generic over a key type `K: PartialEq`, so it composes with
//! whatever identifier scheme the application uses; no hashing or ordering
//! is required. Dialogs, navigation, policy definitions, and persistence
//! stay with the caller; type-specific placement policies plug in as a
//! closure.
//!
//! ## Example
//!
//! ```rust
//! use fixedgrid_relocate::{Container, ObjectRecord, relocate};
//!
//! let mut child = ObjectRecord::new("clock", Some("folder-a"));
//!
//! let mut old_parent = Container::new("folder-a");
//! old_parent.composition.push("clock");
//!
//! let mut new_parent = Container::new("folder-b");
//!
//! relocate(&mut child, &mut old_parent, &mut new_parent, |_, _| true).unwrap();
//!
//! assert!(old_parent.composition.is_empty());
//! assert_eq!(new_parent.composition, ["clock"]);
//! assert_eq!(child.location, Some("folder-b"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::error::Error;
use core::fmt;

/// The moved object's own record: identity, home location, and lock state.
///
/// `location` names the container the object truly lives in; any other
/// container listing the object in its composition holds an alias (a link).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRecord<K> {
    /// The object's key.
    pub id: K,
    /// The container the object lives in, if it has a home at all.
    pub location: Option<K>,
    /// Locked objects cannot be moved.
    pub locked: bool,
}

impl<K> ObjectRecord<K> {
    /// Creates an unlocked record with the given home location.
    #[must_use]
    pub const fn new(id: K, location: Option<K>) -> Self {
        Self {
            id,
            location,
            locked: false,
        }
    }
}

/// A container an object can be moved out of or into.
#[derive(Clone, Debug, PartialEq)]
pub struct Container<K> {
    /// The container's key.
    pub id: K,
    /// Keys of the contained objects, in display order.
    pub composition: Vec<K>,
    /// Locked containers cannot have children moved out of them.
    pub locked: bool,
    /// Whether users may place new children here at all.
    pub creatable: bool,
}

impl<K> Container<K> {
    /// Creates an empty, unlocked, creatable container.
    #[must_use]
    pub const fn new(id: K) -> Self {
        Self {
            id,
            composition: Vec::new(),
            locked: false,
            creatable: true,
        }
    }
}

/// Why a proposed relocation is not allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// The object or its current parent is locked.
    Locked,
    /// The target container does not accept new children.
    TargetNotCreatable,
    /// The target is the container the object is already in.
    TargetIsCurrentParent,
    /// The target is the object being moved.
    TargetIsSelf,
    /// The target's composition already lists the object.
    AlreadyContained,
    /// The caller-supplied placement policy rejected the pairing.
    PolicyRejected,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Locked => "the object or its current parent is locked",
            Self::TargetNotCreatable => "the target container does not accept new children",
            Self::TargetIsCurrentParent => "the object is already in the target container",
            Self::TargetIsSelf => "an object cannot be moved into itself",
            Self::AlreadyContained => "the target container already lists the object",
            Self::PolicyRejected => "the placement policy rejected the move",
        };
        f.write_str(reason)
    }
}

impl Error for Denial {}

/// Checks whether moving `child` from `current_parent` into `target` is
/// legal.
///
/// Checks run cheapest-first and the first failure wins. The `policy`
/// closure is consulted last and answers "may an object like this be placed
/// in a container like that" — the type-system/composition-policy hook of
/// the host application.
pub fn check_relocation<K, P>(
    child: &ObjectRecord<K>,
    current_parent: &Container<K>,
    target: &Container<K>,
    policy: P,
) -> Result<(), Denial>
where
    K: PartialEq,
    P: FnOnce(&Container<K>, &ObjectRecord<K>) -> bool,
{
    if child.locked || current_parent.locked {
        return Err(Denial::Locked);
    }
    if !target.creatable {
        return Err(Denial::TargetNotCreatable);
    }
    if target.id == current_parent.id {
        return Err(Denial::TargetIsCurrentParent);
    }
    if target.id == child.id {
        return Err(Denial::TargetIsSelf);
    }
    if target.composition.contains(&child.id) {
        return Err(Denial::AlreadyContained);
    }
    if !policy(target, child) {
        return Err(Denial::PolicyRejected);
    }
    Ok(())
}

/// Moves `child` from `old_parent` into `new_parent` after validating with
/// [`check_relocation`].
///
/// On success:
/// - `new_parent.composition` gains the child's key at the end.
/// - `old_parent.composition` loses every occurrence of the key.
/// - If `old_parent` was the child's true location, the child now lives in
///   `new_parent`. If the child was reached through an alias, its home
///   location is left alone — moving a link moves only the link.
///
/// Persisting all three records afterward is the caller's job.
pub fn relocate<K, P>(
    child: &mut ObjectRecord<K>,
    old_parent: &mut Container<K>,
    new_parent: &mut Container<K>,
    policy: P,
) -> Result<(), Denial>
where
    K: PartialEq + Clone,
    P: FnOnce(&Container<K>, &ObjectRecord<K>) -> bool,
{
    check_relocation(child, old_parent, new_parent, policy)?;

    new_parent.composition.push(child.id.clone());
    old_parent.composition.retain(|id| *id != child.id);

    let was_home = child.location.as_ref() == Some(&old_parent.id);
    if was_home {
        child.location = Some(new_parent.id.clone());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Container, Denial, ObjectRecord, check_relocation, relocate};

    fn allow_all(_: &Container<&str>, _: &ObjectRecord<&str>) -> bool {
        true
    }

    fn setup() -> (ObjectRecord<&'static str>, Container<&'static str>, Container<&'static str>) {
        let child = ObjectRecord::new("clock", Some("a"));
        let mut old_parent = Container::new("a");
        old_parent.composition.push("clock");
        let new_parent = Container::new("b");
        (child, old_parent, new_parent)
    }

    #[test]
    fn legal_moves_update_both_compositions_and_the_home() {
        let (mut child, mut old_parent, mut new_parent) = setup();

        relocate(&mut child, &mut old_parent, &mut new_parent, allow_all).unwrap();

        assert!(old_parent.composition.is_empty());
        assert_eq!(new_parent.composition, ["clock"]);
        assert_eq!(child.location, Some("b"));
    }

    #[test]
    fn moving_an_alias_keeps_the_home_location() {
        let (mut child, _, mut new_parent) = setup();
        // The child is listed in "linking", but lives in "a".
        let mut linking = Container::new("linking");
        linking.composition.push("clock");

        relocate(&mut child, &mut linking, &mut new_parent, allow_all).unwrap();

        assert!(linking.composition.is_empty());
        assert_eq!(new_parent.composition, ["clock"]);
        assert_eq!(child.location, Some("a"), "only the link moved");
    }

    #[test]
    fn denials_come_back_in_precedence_order() {
        let (mut child, old_parent, new_parent) = setup();

        child.locked = true;
        assert_eq!(
            check_relocation(&child, &old_parent, &new_parent, allow_all),
            Err(Denial::Locked)
        );
        child.locked = false;

        let mut sealed = Container::new("sealed");
        sealed.creatable = false;
        assert_eq!(
            check_relocation(&child, &old_parent, &sealed, allow_all),
            Err(Denial::TargetNotCreatable)
        );

        assert_eq!(
            check_relocation(&child, &old_parent, &old_parent.clone(), allow_all),
            Err(Denial::TargetIsCurrentParent)
        );

        let itself = Container::new("clock");
        assert_eq!(
            check_relocation(&child, &old_parent, &itself, allow_all),
            Err(Denial::TargetIsSelf)
        );

        let mut holding = Container::new("holding");
        holding.composition.push("clock");
        assert_eq!(
            check_relocation(&child, &old_parent, &holding, allow_all),
            Err(Denial::AlreadyContained)
        );

        assert_eq!(
            check_relocation(&child, &old_parent, &new_parent, |_, _| false),
            Err(Denial::PolicyRejected)
        );
    }

    #[test]
    fn a_locked_parent_blocks_the_move_even_when_the_child_is_free() {
        let (mut child, mut old_parent, mut new_parent) = setup();
        old_parent.locked = true;

        let result = relocate(&mut child, &mut old_parent, &mut new_parent, allow_all);
        assert_eq!(result, Err(Denial::Locked));
        assert_eq!(old_parent.composition, ["clock"], "denied moves change nothing");
        assert!(new_parent.composition.is_empty());
    }

    #[test]
    fn denied_policy_leaves_all_records_untouched() {
        let (mut child, mut old_parent, mut new_parent) = setup();

        let result = relocate(&mut child, &mut old_parent, &mut new_parent, |_, _| false);
        assert_eq!(result, Err(Denial::PolicyRejected));
        assert_eq!(child.location, Some("a"));
        assert_eq!(old_parent.composition, ["clock"]);
        assert!(new_parent.composition.is_empty());
    }
}
