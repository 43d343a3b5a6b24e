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

//! # Price-Optimal Assigner
//!
//! Finds the cheapest distinct room sets for a guest count. The rooms are
//! viewed in ascending price order and a growing-size depth-first search
//! ([`GrowingDfs`]) emits every subset that first reaches the required
//! capacity along its path. Within an emitted subset every room is filled
//! to capacity except the last-added, most expensive one, which absorbs the
//! remainder. That distribution maximizes the guest count in the priciest
//! selected room and keeps totals deterministic and reproducible.

use crate::{
    combination::GrowingDfs,
    error::SolveError,
    monitor::{SearchCommand, SearchMonitor},
    num::AssignNumeric,
    render::{distinct_room_sets, render_assignment},
    result::{AssignerOutcome, TerminationReason},
    stats::AssignerStatistics,
};
use quarters_core::num::ops::{SaturatingAddVal, SaturatingSubVal};
use quarters_model::{
    model::{Demand, RoomCatalog},
    solution::Assignment,
};
use std::time::Instant;

/// Assigner producing the cheapest distinct room sets, ascending by total
/// price.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceAssigner;

impl PriceAssigner {
    /// Creates a new `PriceAssigner`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the search and returns up to `demand.query_count()` assignments,
    /// sorted ascending by total price with ties kept in search order.
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

        if demand.query_count() == 0 {
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

        // View of the catalog in ascending price order. The stable sort keeps
        // equally priced rooms in catalog order.
        let mut order: Vec<usize> = (0..catalog.num_rooms()).collect();
        order.sort_by(|&a, &b| catalog.prices()[a].cmp(&catalog.prices()[b]));
        let sorted_capacities: Vec<T> = order.iter().map(|&p| catalog.capacities()[p]).collect();

        let mut dfs = GrowingDfs::new(&sorted_capacities, guests);
        let mut results: Vec<Assignment<T>> = Vec::new();
        let mut reason = TerminationReason::Exhausted;

        loop {
            monitor.on_step(&stats);
            if let SearchCommand::Terminate(why) = monitor.search_command() {
                reason = TerminationReason::Aborted(why);
                break;
            }
            let Some(selection) = dfs.next_feasible() else {
                break;
            };
            stats.on_candidate_examined();

            // Fill every room except the last-added one, which takes the
            // remainder. The selection was insufficient before that room was
            // added, so the remainder is positive and within its capacity.
            debug_assert!(!selection.is_empty(), "feasible selections are never empty");
            let last = selection[selection.len() - 1];
            let rest = &selection[..selection.len() - 1];
            let mut positions: Vec<usize> = Vec::with_capacity(selection.len());
            let mut counts: Vec<T> = Vec::with_capacity(selection.len());
            let mut placed = T::zero();
            for &i in rest {
                positions.push(order[i]);
                counts.push(sorted_capacities[i]);
                placed = placed.saturating_add_val(sorted_capacities[i]);
            }
            positions.push(order[last]);
            counts.push(guests.saturating_sub_val(placed));

            let assignment = render_assignment(catalog, &positions, &counts);
            stats.on_assignment_found();
            monitor.on_assignment_found(&assignment);
            results.push(assignment);

            if results.len() >= demand.query_count() {
                reason = TerminationReason::QueryCountReached;
                break;
            }
        }

        results.sort_by(|a, b| a.total_price().cmp(&b.total_price()));
        debug_assert!(
            distinct_room_sets(&results),
            "price search produced duplicate room sets"
        );

        stats.set_total_time(start.elapsed());
        monitor.on_exit_search(&stats);
        Ok(AssignerOutcome::new(results, reason, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{NoOperationMonitor, StepLimitMonitor};
    use quarters_model::model::{Room, RoomId};

    fn catalog() -> RoomCatalog<i64> {
        // Unsorted on purpose: the assigner must sort by price itself.
        RoomCatalog::from_rooms(vec![
            Room::new(RoomId::new(3), 30, 5),
            Room::new(RoomId::new(1), 10, 4),
            Room::new(RoomId::new(2), 20, 3),
        ])
    }

    fn solve(catalog: &RoomCatalog<i64>, guests: i64, k: usize) -> AssignerOutcome<i64> {
        PriceAssigner::new()
            .solve(catalog, &Demand::new(guests, k), NoOperationMonitor::new())
            .expect("catalog has enough capacity")
    }

    #[test]
    fn test_three_rooms_six_guests_all_pairs() {
        let outcome = solve(&catalog(), 6, 10);
        let results = outcome.assignments();
        assert_eq!(results.len(), 3);

        // Cheapest pair: room 1 full (4 guests), room 2 takes the rest.
        assert_eq!(results[0].total_price(), 4 * 10 + 2 * 20);
        assert_eq!(results[1].total_price(), 4 * 10 + 2 * 30);
        assert_eq!(results[2].total_price(), 3 * 20 + 3 * 30);
        assert_eq!(outcome.termination_reason(), &TerminationReason::Exhausted);
    }

    #[test]
    fn test_remainder_goes_to_most_expensive_room() {
        let outcome = solve(&catalog(), 6, 1);
        let top = &outcome.assignments()[0];
        let lines = top.allocations();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].id(), RoomId::new(1));
        assert_eq!(lines[0].guests(), 4);
        assert_eq!(lines[1].id(), RoomId::new(2));
        assert_eq!(lines[1].guests(), 2);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::QueryCountReached
        );
    }

    #[test]
    fn test_only_full_set_feasible() {
        let outcome = solve(&catalog(), 11, 10);
        let results = outcome.assignments();
        assert_eq!(results.len(), 1);
        // Rooms 1 and 2 full, room 3 absorbs the remaining 4 guests.
        assert_eq!(results[0].total_price(), 4 * 10 + 3 * 20 + 4 * 30);
        assert_eq!(results[0].total_guests(), 11);
    }

    #[test]
    fn test_single_room_exact_fit() {
        let catalog = RoomCatalog::from_rooms(vec![Room::new(RoomId::new(7), 10i64, 10)]);
        let outcome = solve(&catalog, 10, 10);
        let results = outcome.assignments();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].num_rooms(), 1);
        assert_eq!(results[0].allocations()[0].guests(), 10);
        assert_eq!(results[0].total_price(), 100);
    }

    #[test]
    fn test_insufficient_capacity() {
        let rooms: Vec<Room<i64>> = (0..4).map(|i| Room::new(RoomId::new(i), 10, 10)).collect();
        let catalog = RoomCatalog::from_rooms(rooms);
        let err = PriceAssigner::new()
            .solve(&catalog, &Demand::new(41, 5), NoOperationMonitor::new())
            .unwrap_err();
        assert_eq!(
            err,
            SolveError::InsufficientCapacity {
                required: 41,
                available: 40
            }
        );
    }

    #[test]
    fn test_query_count_zero_yields_empty_set() {
        let outcome = solve(&catalog(), 6, 0);
        assert!(outcome.assignments().is_empty());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::QueryCountReached
        );
    }

    #[test]
    fn test_zero_guests_yields_empty_assignment() {
        let outcome = solve(&catalog(), 0, 3);
        let results = outcome.assignments();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].num_rooms(), 0);
        assert_eq!(results[0].total_price(), 0);
    }

    #[test]
    fn test_results_are_price_sorted_and_conserve_guests() {
        let rooms: Vec<Room<i64>> = vec![
            Room::new(RoomId::new(1), 12, 2),
            Room::new(RoomId::new(2), 9, 5),
            Room::new(RoomId::new(3), 14, 3),
            Room::new(RoomId::new(4), 9, 4),
            Room::new(RoomId::new(5), 21, 6),
        ];
        let catalog = RoomCatalog::from_rooms(rooms);
        let outcome = solve(&catalog, 9, 20);
        let results = outcome.assignments();
        assert!(!results.is_empty());
        for window in results.windows(2) {
            assert!(window[0].total_price() <= window[1].total_price());
        }
        for assignment in results {
            assert_eq!(assignment.total_guests(), 9);
            let recomputed: i64 = assignment
                .allocations()
                .iter()
                .map(|a| a.guests() * a.unit_price())
                .sum();
            assert_eq!(assignment.total_price(), recomputed);
        }
    }

    #[test]
    fn test_step_limit_monitor_aborts() {
        let outcome = PriceAssigner::new()
            .solve(&catalog(), &Demand::new(6, 10), StepLimitMonitor::new(1))
            .expect("catalog has enough capacity");
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
        // The partial result set is still ranked and valid.
        assert!(outcome.assignments().len() <= 1);
    }
}
