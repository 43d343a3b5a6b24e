// Copyright (c) 2026 the quarters developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Assignment Rendering
//!
//! Turns a chosen room subset plus a guest distribution decision into an
//! [`Assignment`], and provides the greedy leveling step the
//! occupancy-balanced assigner uses to spread guests evenly.

use crate::num::AssignNumeric;
use quarters_core::num::ops::{SaturatingAddVal, SaturatingSubVal};
use quarters_model::{
    index::RoomIndex,
    model::RoomCatalog,
    solution::{Assignment, RoomAllocation},
};
use rustc_hash::FxHashSet;

/// Builds an assignment from catalog positions and per-room guest counts.
///
/// Allocation lines keep the order of `positions`. Prices and identifiers
/// are copied from the catalog at the time of the call.
pub(crate) fn render_assignment<T>(
    catalog: &RoomCatalog<T>,
    positions: &[usize],
    guest_counts: &[T],
) -> Assignment<T>
where
    T: AssignNumeric,
{
    debug_assert_eq!(
        positions.len(),
        guest_counts.len(),
        "called `render_assignment` with inconsistent lengths: positions.len() = {}, guest_counts.len() = {}",
        positions.len(),
        guest_counts.len()
    );

    let allocations: Vec<RoomAllocation<T>> = positions
        .iter()
        .zip(guest_counts.iter())
        .map(|(&position, &guests)| {
            let index = RoomIndex::new(position);
            RoomAllocation::new(index, catalog.room_id(index), guests, catalog.room_price(index))
        })
        .collect();
    Assignment::new(allocations)
}

/// Levels `guests` across rooms with the given capacities.
///
/// Every room starts at full capacity; the overcount is then worked off by
/// repeatedly decrementing the currently largest count, re-identifying the
/// largest after each step. Ties go to the earliest room so the result is
/// deterministic. For a fixed guest total this converges toward an even
/// split.
///
/// The capacities must sum to at least `guests`.
pub(crate) fn level_occupancies<T>(capacities: &[T], guests: T) -> Vec<T>
where
    T: AssignNumeric,
{
    let mut counts: Vec<T> = capacities.to_vec();
    let total = counts
        .iter()
        .fold(T::zero(), |acc, &c| acc.saturating_add_val(c));
    debug_assert!(
        total >= guests,
        "called `level_occupancies` with insufficient capacity: the total is {} but {} guests are required",
        total,
        guests
    );

    let mut overcount = total.saturating_sub_val(guests);
    while overcount > T::zero() {
        let mut largest = 0;
        for i in 1..counts.len() {
            if counts[i] > counts[largest] {
                largest = i;
            }
        }
        counts[largest] = counts[largest] - T::one();
        overcount = overcount - T::one();
    }
    counts
}

/// Returns `true` if no two assignments use the same set of rooms.
///
/// Used from debug assertions to validate the dedup invariant of a result
/// set before it is handed back to the caller.
pub(crate) fn distinct_room_sets<T>(assignments: &[Assignment<T>]) -> bool
where
    T: AssignNumeric,
{
    let mut seen: FxHashSet<Vec<usize>> = FxHashSet::default();
    for assignment in assignments {
        let mut key: Vec<usize> = assignment.room_indices().map(|r| r.get()).collect();
        key.sort_unstable();
        if !seen.insert(key) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarters_model::model::{Room, RoomId};

    fn catalog() -> RoomCatalog<i64> {
        RoomCatalog::from_rooms(vec![
            Room::new(RoomId::new(1), 10, 4),
            Room::new(RoomId::new(2), 20, 3),
            Room::new(RoomId::new(3), 30, 5),
        ])
    }

    #[test]
    fn test_render_assignment_copies_catalog_data() {
        let assignment = render_assignment(&catalog(), &[0, 2], &[4i64, 2]);
        assert_eq!(assignment.num_rooms(), 2);
        assert_eq!(assignment.total_guests(), 6);
        assert_eq!(assignment.total_price(), 4 * 10 + 2 * 30);

        let lines = assignment.allocations();
        assert_eq!(lines[0].id(), RoomId::new(1));
        assert_eq!(lines[0].guests(), 4);
        assert_eq!(lines[0].unit_price(), 10);
        assert_eq!(lines[1].id(), RoomId::new(3));
        assert_eq!(lines[1].guests(), 2);
        assert_eq!(lines[1].unit_price(), 30);
    }

    #[test]
    fn test_level_single_decrement() {
        assert_eq!(level_occupancies(&[5i64, 4], 8), vec![4, 4]);
    }

    #[test]
    fn test_level_converges_toward_even_split() {
        assert_eq!(level_occupancies(&[5i64, 4, 4], 8), vec![2, 3, 3]);
    }

    #[test]
    fn test_level_no_overcount_keeps_capacities() {
        assert_eq!(level_occupancies(&[3i64, 2], 5), vec![3, 2]);
    }

    #[test]
    fn test_level_can_empty_a_room() {
        // Two large rooms forced onto a single guest.
        assert_eq!(level_occupancies(&[5i64, 5], 1), vec![0, 1]);
    }

    #[test]
    fn test_level_conserves_guests() {
        let counts = level_occupancies(&[7i64, 6, 3, 2], 11);
        assert_eq!(counts.iter().sum::<i64>(), 11);
        for (count, capacity) in counts.iter().zip([7i64, 6, 3, 2]) {
            assert!(*count <= capacity);
        }
    }

    #[test]
    fn test_distinct_room_sets() {
        let c = catalog();
        let a = render_assignment(&c, &[0, 1], &[4i64, 2]);
        let b = render_assignment(&c, &[0, 2], &[4i64, 2]);
        // Same rooms in a different order count as the same set.
        let a_reversed = render_assignment(&c, &[1, 0], &[2i64, 4]);

        assert!(distinct_room_sets(&[a.clone(), b.clone()]));
        assert!(!distinct_room_sets(&[a, b, a_reversed]));
    }
}
