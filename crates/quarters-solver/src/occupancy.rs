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

//! # Occupancy-Balanced Assigner
//!
//! Finds room sets whose guests can be spread as evenly as possible. The
//! search runs in two passes. The first pass collects every room that can
//! hold the whole party on its own, tightest fit first. The second pass
//! enumerates multi-room subsets over a capacity-descending ordering with a
//! [`CombinationCursor`], starting at the smallest subset size a greedy
//! largest-first fill can justify, and levels the guests across each
//! feasible subset. Multi-room results are ranked by room count ascending,
//! then occupancy spread (the product of the per-room guest counts)
//! descending, then total price descending.

use crate::{
    combination::CombinationCursor,
    error::SolveError,
    monitor::{SearchCommand, SearchMonitor},
    num::AssignNumeric,
    render::{distinct_room_sets, level_occupancies, render_assignment},
    result::{AssignerOutcome, TerminationReason},
    stats::AssignerStatistics,
};
use quarters_core::num::ops::SaturatingAddVal;
use quarters_model::{
    model::{Demand, RoomCatalog},
    solution::Assignment,
};
use std::time::Instant;

/// Assigner producing evenly occupied room sets, fewest rooms first.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupancyAssigner;

impl OccupancyAssigner {
    /// Creates a new `OccupancyAssigner`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the search and returns up to `demand.query_count()` assignments.
    ///
    /// Single-room fits lead the result set in ascending capacity order, so
    /// the tightest room that still holds everyone ranks first. Multi-room
    /// results follow, ranked by room count, occupancy spread and price.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::InsufficientCapacity` when the catalog cannot
    /// hold the requested guests even with every room filled.
    pub fn solve<T, S>(
        &self,
        catalog: &RoomCatalog<T>,
        demand: &Demand<T>,
        mut monitor: S,
    ) -> Result<AssignerOutcome<T>, SolveError<T>>
    where
        T: AssignNumeric,
        S: SearchMonitor<T>,
    {
        let guests = demand.guests();
        if !catalog.can_accommodate(guests) {
            return Err(SolveError::InsufficientCapacity {
                required: guests,
                available: catalog.total_capacity(),
            });
        }

        let start = Instant::now();
        let mut stats = AssignerStatistics::default();
        monitor.on_enter_search(catalog, demand);

        let query_count = demand.query_count();
        if query_count == 0 {
            stats.set_total_time(start.elapsed());
            monitor.on_exit_search(&stats);
            return Ok(AssignerOutcome::new(
                Vec::new(),
                TerminationReason::QueryCountReached,
                stats,
            ));
        }
        if guests <= T::zero() {
            let assignment = Assignment::empty();
            stats.on_assignment_found();
            monitor.on_assignment_found(&assignment);
            stats.set_total_time(start.elapsed());
            monitor.on_exit_search(&stats);
            return Ok(AssignerOutcome::new(
                vec![assignment],
                TerminationReason::Exhausted,
                stats,
            ));
        }

        // Single-room pass: every room that holds the whole party, tightest
        // fit first. The stable sort keeps equal capacities in catalog order.
        let capacities = catalog.capacities();
        let mut singles_order: Vec<usize> = (0..catalog.num_rooms())
            .filter(|&p| capacities[p] >= guests)
            .collect();
        singles_order.sort_by(|&a, &b| capacities[a].cmp(&capacities[b]));

        let mut results: Vec<Assignment<T>> = Vec::with_capacity(query_count.min(64));
        for &position in &singles_order {
            let assignment = render_assignment(catalog, &[position], &[guests]);
            stats.on_assignment_found();
            monitor.on_assignment_found(&assignment);
            results.push(assignment);
            if results.len() >= query_count {
                stats.set_total_time(start.elapsed());
                monitor.on_exit_search(&stats);
                return Ok(AssignerOutcome::new(
                    results,
                    TerminationReason::QueryCountReached,
                    stats,
                ));
            }
        }

        // Multi-room pass over a capacity-descending view of the catalog.
        let num_rooms = catalog.num_rooms();
        let mut order: Vec<usize> = (0..num_rooms).collect();
        order.sort_by(|&a, &b| capacities[b].cmp(&capacities[a]));
        let sorted_capacities: Vec<T> = order.iter().map(|&p| capacities[p]).collect();

        // Smallest subset size worth enumerating, from a greedy largest-first
        // fill. A single room never counts as a multi-room result.
        let mut min_rooms = 0usize;
        let mut accumulated = T::zero();
        for &capacity in &sorted_capacities {
            if accumulated >= guests {
                break;
            }
            accumulated = accumulated.saturating_add_val(capacity);
            min_rooms += 1;
        }
        min_rooms = min_rooms.max(2);

        let mut multis: Vec<Assignment<T>> = Vec::new();
        let mut reason = TerminationReason::Exhausted;

        'sizes: for size in min_rooms..=num_rooms {
            let mut cursor = CombinationCursor::new(num_rooms, size);
            loop {
                stats.on_candidate_examined();
                monitor.on_step(&stats);
                if let SearchCommand::Terminate(why) = monitor.search_command() {
                    reason = TerminationReason::Aborted(why);
                    break 'sizes;
                }

                let subset = cursor.indices();
                let subset_capacity = subset
                    .iter()
                    .fold(T::zero(), |sum, &i| sum.saturating_add_val(sorted_capacities[i]));

                if subset_capacity >= guests {
                    let subset_capacities: Vec<T> =
                        subset.iter().map(|&i| sorted_capacities[i]).collect();
                    let positions: Vec<usize> = subset.iter().map(|&i| order[i]).collect();
                    let counts = level_occupancies(&subset_capacities, guests);

                    let assignment = render_assignment(catalog, &positions, &counts);
                    stats.on_assignment_found();
                    monitor.on_assignment_found(&assignment);
                    multis.push(assignment);

                    if results.len() + multis.len() >= query_count {
                        reason = TerminationReason::QueryCountReached;
                        break 'sizes;
                    }
                    if !cursor.advance() {
                        break;
                    }
                } else {
                    stats.on_pruning_capacity();
                    if has_jumpable_gap(subset, num_rooms) {
                        stats.on_pruning_prefix();
                    }
                    if !cursor.skip_past_prefix() {
                        break;
                    }
                }
            }
        }

        multis.sort_by(|a, b| {
            a.num_rooms()
                .cmp(&b.num_rooms())
                .then_with(|| b.occupancy_product().cmp(&a.occupancy_product()))
                .then_with(|| b.total_price().cmp(&a.total_price()))
        });
        results.extend(multis);
        results.truncate(query_count);
        debug_assert!(
            distinct_room_sets(&results),
            "occupancy search produced duplicate room sets"
        );

        stats.set_total_time(start.elapsed());
        monitor.on_exit_search(&stats);
        Ok(AssignerOutcome::new(results, reason, stats))
    }
}

/// Whether the prefix jump will fire for this subset rather than falling
/// back to a plain advance.
#[inline]
fn has_jumpable_gap(indices: &[usize], num_items: usize) -> bool {
    let m = indices.len();
    (1..m)
        .find(|&j| indices[j] > indices[j - 1] + 1)
        .is_some_and(|j| indices[j] < num_items - m + j)
}
