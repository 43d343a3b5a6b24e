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

//! # Subset Enumeration
//!
//! Two stateful walkers over index subsets of a room list, shared by both
//! assigners. Both operate on positions into a caller-sorted view of the
//! catalog and never revisit an index vector. Each advance either emits a
//! new vector or strictly increases it in lexicographic order, so
//! termination is guaranteed on the finite vector space.
//!
//! - [`CombinationCursor`] walks fixed-size combinations in lexicographic
//!   order (the classic "choose m of n" cursor) and additionally supports a
//!   prefix jump that skips the remaining subsets sharing an insufficient
//!   prefix instead of incrementing one position at a time.
//! - [`GrowingDfs`] performs a growing-size depth-first search that appends
//!   strictly increasing positions until a capacity target is met, emits the
//!   selection, and backtracks to the nearest position with an untried
//!   sibling.

use crate::num::AssignNumeric;
use quarters_core::num::ops::SaturatingAddVal;
use smallvec::SmallVec;

/// Inline capacity for index vectors. Subsets larger than this spill to the
/// heap, which only happens for unusually large queries.
type IndexVec = SmallVec<[usize; 8]>;

/// A lexicographic cursor over fixed-size index combinations.
///
/// The state is a strictly increasing index vector of length `subset_size`
/// with values in `0..num_items`. The cursor starts at the first combination
/// `[0, 1, .., subset_size - 1]`.
///
/// # Examples
///
/// ```rust
/// # use quarters_solver::combination::CombinationCursor;
///
/// let mut cursor = CombinationCursor::new(4, 2);
/// assert_eq!(cursor.indices(), &[0, 1]);
/// assert!(cursor.advance());
/// assert_eq!(cursor.indices(), &[0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationCursor {
    indices: IndexVec,
    num_items: usize,
}

impl CombinationCursor {
    /// Creates a cursor positioned at the first combination.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `subset_size` is zero or exceeds `num_items`.
    pub fn new(num_items: usize, subset_size: usize) -> Self {
        debug_assert!(
            subset_size >= 1,
            "called `CombinationCursor::new` with subset size 0"
        );
        debug_assert!(
            subset_size <= num_items,
            "called `CombinationCursor::new` with subset size out of bounds: the number of items is {} but the subset size is {}",
            num_items,
            subset_size
        );

        Self {
            indices: (0..subset_size).collect(),
            num_items,
        }
    }

    /// Returns the current index vector.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Moves to the next combination in lexicographic order.
    ///
    /// Returns `false` when the cursor was already at the last combination,
    /// leaving the state unchanged.
    pub fn advance(&mut self) -> bool {
        let m = self.indices.len();
        let n = self.num_items;
        let mut i = m;
        while i > 0 {
            i -= 1;
            if self.indices[i] < n - m + i {
                self.indices[i] += 1;
                self.reset_tail_after(i);
                return true;
            }
        }
        false
    }

    /// Jumps past the remaining combinations that share the current
    /// insufficient prefix.
    ///
    /// The jump bumps the lowest position whose index is not adjacent to its
    /// left neighbor and resets the tail, skipping every combination that
    /// keeps the prefix left of that position. When no such position exists,
    /// or the position is already at its bound, this falls back to a plain
    /// [`advance`](Self::advance).
    ///
    /// Callers invoke this after observing that the current subset's combined
    /// capacity falls short; over a capacity-descending ordering the skipped
    /// family is dominated by the current subset.
    pub fn skip_past_prefix(&mut self) -> bool {
        let m = self.indices.len();
        let n = self.num_items;
        for j in 1..m {
            if self.indices[j] > self.indices[j - 1] + 1 {
                if self.indices[j] < n - m + j {
                    self.indices[j] += 1;
                    self.reset_tail_after(j);
                    return true;
                }
                // The gap position is at its bound, so every position to its
                // right is as well. A plain advance bumps left of the gap.
                break;
            }
        }
        self.advance()
    }

    #[inline(always)]
    fn reset_tail_after(&mut self, position: usize) {
        for j in position + 1..self.indices.len() {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

/// A growing-size depth-first search over index selections.
///
/// The search appends strictly increasing positions to the selection while
/// the selected capacity stays below `required`. As soon as the capacity
/// suffices the selection is emitted, then the search retracts to the
/// nearest position with an untried sibling and continues there. Every
/// emitted selection is minimal along its own path: removing its last
/// element would drop the capacity below `required`.
///
/// # Examples
///
/// ```rust
/// # use quarters_solver::combination::GrowingDfs;
///
/// let capacities = [4i64, 3, 5];
/// let mut dfs = GrowingDfs::new(&capacities, 6);
/// assert_eq!(dfs.next_feasible(), Some(&[0, 1][..]));
/// assert_eq!(dfs.next_feasible(), Some(&[0, 2][..]));
/// assert_eq!(dfs.next_feasible(), Some(&[1, 2][..]));
/// assert_eq!(dfs.next_feasible(), None);
/// ```
#[derive(Debug, Clone)]
pub struct GrowingDfs<'a, T>
where
    T: AssignNumeric,
{
    capacities: &'a [T],
    required: T,
    selection: IndexVec,
    selected_capacity: T,
    next: usize,
    needs_retract: bool,
    done: bool,
}

impl<'a, T> GrowingDfs<'a, T>
where
    T: AssignNumeric,
{
    /// Creates a search over `capacities` targeting `required`.
    pub fn new(capacities: &'a [T], required: T) -> Self {
        Self {
            capacities,
            required,
            selection: IndexVec::new(),
            selected_capacity: T::zero(),
            next: 0,
            needs_retract: false,
            done: false,
        }
    }

    /// Returns the next selection whose capacity reaches the target, or
    /// `None` when the search space is exhausted.
    pub fn next_feasible(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if self.needs_retract {
            self.needs_retract = false;
            if !self.retract() {
                self.done = true;
                return None;
            }
        }
        loop {
            if !self.selection.is_empty() && self.selected_capacity >= self.required {
                self.needs_retract = true;
                return Some(&self.selection);
            }
            if self.next < self.capacities.len() {
                self.selected_capacity = self
                    .selected_capacity
                    .saturating_add_val(self.capacities[self.next]);
                self.selection.push(self.next);
                self.next += 1;
            } else if !self.retract() {
                self.done = true;
                return None;
            }
        }
    }

    /// Pops positions until one has an untried sibling, then aims `next` at
    /// that sibling. Returns `false` when the selection empties out.
    fn retract(&mut self) -> bool {
        while let Some(last) = self.selection.pop() {
            self.selected_capacity = self.selected_capacity - self.capacities[last];
            if last + 1 < self.capacities.len() {
                self.next = last + 1;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_all(mut cursor: CombinationCursor) -> Vec<Vec<usize>> {
        let mut out = vec![cursor.indices().to_vec()];
        while cursor.advance() {
            out.push(cursor.indices().to_vec());
        }
        out
    }

    #[test]
    fn test_cursor_enumerates_all_choose_3_of_5() {
        let all = collect_all(CombinationCursor::new(5, 3));
        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1, 2],
            vec![0, 1, 3],
            vec![0, 1, 4],
            vec![0, 2, 3],
            vec![0, 2, 4],
            vec![0, 3, 4],
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![2, 3, 4],
        ];
        assert_eq!(all, expected);
    }

    #[test]
    fn test_cursor_full_size_is_single_combination() {
        let mut cursor = CombinationCursor::new(3, 3);
        assert_eq!(cursor.indices(), &[0, 1, 2]);
        assert!(!cursor.advance());
        assert_eq!(cursor.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_cursor_size_one_walks_every_item() {
        let all = collect_all(CombinationCursor::new(4, 1));
        assert_eq!(all, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_skip_bumps_lowest_gap_and_resets_tail() {
        let mut cursor = CombinationCursor::new(10, 3);
        while cursor.indices() != [0, 2, 3] {
            assert!(cursor.advance());
        }
        assert!(cursor.skip_past_prefix());
        // Gap at position 1, bumped from 2 to 3, tail reset.
        assert_eq!(cursor.indices(), &[0, 3, 4]);
        assert!(cursor.skip_past_prefix());
        assert_eq!(cursor.indices(), &[0, 4, 5]);
    }

    #[test]
    fn test_skip_on_adjacent_vector_falls_back_to_advance() {
        let mut cursor = CombinationCursor::new(5, 3);
        assert_eq!(cursor.indices(), &[0, 1, 2]);
        assert!(cursor.skip_past_prefix());
        assert_eq!(cursor.indices(), &[0, 1, 3]);
    }

    #[test]
    fn test_skip_at_bounded_gap_falls_back_to_advance() {
        let mut cursor = CombinationCursor::new(5, 3);
        // Walk to [0, 3, 4]: the gap position 1 holds 3, its bound.
        while cursor.indices() != [0, 3, 4] {
            assert!(cursor.advance());
        }
        assert!(cursor.skip_past_prefix());
        assert_eq!(cursor.indices(), &[1, 2, 3]);
    }

    #[test]
    fn test_skip_is_strictly_increasing_until_exhausted() {
        let mut cursor = CombinationCursor::new(7, 3);
        let mut previous = cursor.indices().to_vec();
        let mut steps = 0;
        while cursor.skip_past_prefix() {
            let current = cursor.indices().to_vec();
            assert!(current > previous, "cursor regressed: {:?} after {:?}", current, previous);
            previous = current;
            steps += 1;
            assert!(steps <= 35, "cursor failed to terminate");
        }
    }

    #[test]
    fn test_dfs_emits_minimal_prefix_subsets_in_order() {
        let capacities = [4i64, 3, 5];
        let mut dfs = GrowingDfs::new(&capacities, 6);
        assert_eq!(dfs.next_feasible(), Some(&[0, 1][..]));
        assert_eq!(dfs.next_feasible(), Some(&[0, 2][..]));
        assert_eq!(dfs.next_feasible(), Some(&[1, 2][..]));
        assert_eq!(dfs.next_feasible(), None);
        assert_eq!(dfs.next_feasible(), None);
    }

    #[test]
    fn test_dfs_only_full_set_feasible() {
        let capacities = [4i64, 3, 5];
        let mut dfs = GrowingDfs::new(&capacities, 11);
        assert_eq!(dfs.next_feasible(), Some(&[0, 1, 2][..]));
        assert_eq!(dfs.next_feasible(), None);
    }

    #[test]
    fn test_dfs_single_rooms_suffice() {
        let capacities = [5i64, 5, 5];
        let mut dfs = GrowingDfs::new(&capacities, 5);
        assert_eq!(dfs.next_feasible(), Some(&[0][..]));
        assert_eq!(dfs.next_feasible(), Some(&[1][..]));
        assert_eq!(dfs.next_feasible(), Some(&[2][..]));
        assert_eq!(dfs.next_feasible(), None);
    }

    #[test]
    fn test_dfs_emissions_are_distinct_and_increasing() {
        let capacities = [9i64, 7, 5, 3, 2, 1];
        let mut dfs = GrowingDfs::new(&capacities, 12);
        let mut seen: Vec<Vec<usize>> = Vec::new();
        while let Some(selection) = dfs.next_feasible() {
            let selection = selection.to_vec();
            assert!(selection.windows(2).all(|w| w[0] < w[1]));
            assert!(!seen.contains(&selection), "duplicate selection {:?}", selection);
            let total: i64 = selection.iter().map(|&i| capacities[i]).sum();
            assert!(total >= 12);
            seen.push(selection);
        }
        assert!(!seen.is_empty());
    }

    #[test]
    fn test_dfs_infeasible_space_yields_nothing() {
        let capacities = [1i64, 1];
        let mut dfs = GrowingDfs::new(&capacities, 10);
        assert_eq!(dfs.next_feasible(), None);
    }
}
