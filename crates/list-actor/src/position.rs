//! # Position Management
//!
//! Ordering support for collection entities. Every entity managed by a
//! [`CollectionActor`](crate::CollectionActor) carries a 1-based `position`
//! field that defines a strict total order over the collection; this module
//! owns the rules that keep that order *dense* (exactly `1..=N`, no
//! duplicates, no gaps).
//!
//! The capability is split into a small trait ([`Positioned`]) plus free
//! functions operating on slices, so the same logic serves the actor's
//! create, delete and reorder paths and stays trivially unit-testable
//! without any async machinery.
//!
//! # Ordering Rules
//!
//! - Positions are rewritten to `1..=N` after every mutation
//!   ([`renormalize`]).
//! - A new item is placed at its requested slot; [`UNPOSITIONED`] or an
//!   out-of-range request appends it at the bottom ([`insert_item`]).
//! - A batch reorder pulls the requested items out and reinserts them at
//!   their target slots in ascending order; the untouched remainder keeps
//!   its relative order and floats up into vacated slots
//!   ([`apply_targets`]).
//! - Two requested items asking for the same slot land adjacent, in their
//!   current relative order.

/// Position value meaning "not placed yet"; such items go to the bottom.
pub const UNPOSITIONED: u32 = 0;

/// Capability trait for entities ordered by an integer position.
///
/// Implement this on the domain struct by exposing its `position` field;
/// the functions in this module do the rest.
pub trait Positioned {
    /// The stored 1-based position (or [`UNPOSITIONED`]).
    fn position(&self) -> u32;

    /// Overwrites the stored position.
    fn set_position(&mut self, position: u32);
}

/// Stable sort of `items` by their stored position.
pub fn sort_by_position<T: Positioned>(items: &mut [T]) {
    items.sort_by_key(|item| item.position());
}

/// Rewrites positions to `1..=N` in slice order.
pub fn renormalize<T: Positioned>(items: &mut [T]) {
    for (rank, item) in items.iter_mut().enumerate() {
        item.set_position(rank as u32 + 1);
    }
}

/// Places `item` into the ordered `items` at the slot named by its own
/// position field, then renormalizes.
///
/// [`UNPOSITIONED`] and any slot past the end both append at the bottom.
pub fn insert_item<T: Positioned>(items: &mut Vec<T>, item: T) {
    let slot = match item.position() {
        UNPOSITIONED => items.len(),
        target => ((target - 1) as usize).min(items.len()),
    };
    items.insert(slot, item);
    renormalize(items);
}

/// Moves the item at `index` so that it lands on the 1-based `target`
/// slot, shifting its neighbors, then renormalizes.
///
/// # Panics
///
/// Panics if `index` is out of bounds, like `Vec::remove`.
pub fn move_to<T: Positioned>(items: &mut Vec<T>, index: usize, target: u32) {
    let item = items.remove(index);
    let slot = match target {
        UNPOSITIONED => items.len(),
        target => ((target - 1) as usize).min(items.len()),
    };
    items.insert(slot, item);
    renormalize(items);
}

/// The batch-reorder core: reorders `items` so that every item for which
/// `requested` returns a target lands at its target slot, then
/// renormalizes.
///
/// Requested items are pulled out of the list and reinserted at their
/// 1-based slots in ascending target order, so the untouched remainder
/// keeps its relative order and floats up into any vacated slots. Two
/// items asking for the same slot land adjacent, in their current
/// relative order. Targets past the end clamp to the bottom.
pub fn apply_targets<T, F>(items: &mut Vec<T>, requested: F)
where
    T: Positioned,
    F: Fn(&T) -> Option<u32>,
{
    let mut moved: Vec<(u32, T)> = Vec::new();
    let mut kept: Vec<T> = Vec::new();
    for item in items.drain(..) {
        match requested(&item) {
            Some(target) => moved.push((target, item)),
            None => kept.push(item),
        }
    }
    moved.sort_by_key(|(target, _)| *target);

    *items = kept;
    let mut prev_target = None;
    let mut stacked = 0;
    for (target, item) in moved {
        // Duplicate targets stack below the slot instead of displacing
        // what this batch already placed there.
        stacked = match prev_target {
            Some(prev) if prev == target => stacked + 1,
            _ => 0,
        };
        prev_target = Some(target);
        let slot = (target.saturating_sub(1) as usize + stacked).min(items.len());
        items.insert(slot, item);
    }
    renormalize(items);
}
