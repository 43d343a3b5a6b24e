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

//! Quarters‑Solver: top‑K room assignment search
//!
//! High‑level crate that answers assignment queries over a room catalog:
//! given a number of guests and a result budget, produce the best distinct
//! room sets under a chosen strategy, each with a concrete per‑room guest
//! distribution.
//!
//! Core flow
//! - Provide a `quarters_model::model::RoomCatalog<T>` and a
//!   `quarters_model::model::Demand<T>`.
//! - Choose an assigner: `price::PriceAssigner` for the cheapest sets,
//!   `occupancy::OccupancyAssigner` for the most evenly filled ones.
//! - Optionally attach a `monitor::SearchMonitor` to observe or bound the
//!   enumeration.
//! - Run `solve`, or use the convenience functions below with a no-op
//!   monitor.
//!
//! Design highlights
//! - Separation of concerns: subset walkers enumerate, assigners decide
//!   feasibility and distribution, monitors observe/control, outcomes carry
//!   stats.
//! - Deterministic: stable sorts everywhere, so equal rooms keep catalog
//!   order and reruns reproduce the same ranking.
//! - Result sets are duplicate-free by construction; each room set appears
//!   at most once per query.
//!
//! Module map
//! - `combination`: lexicographic subset cursor and growing-size DFS.
//! - `price`: cheapest-first assigner.
//! - `occupancy`: evenly-filled assigner.
//! - `monitor`: search monitors (no-op, step limit, log).
//! - `result`: assigner outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.
//! - `error`: the query error type.
//!
//! # Examples
//!
//! ```rust
//! use quarters_model::model::{Demand, Room, RoomCatalog, RoomId};
//! use quarters_solver::assign_by_price;
//!
//! let catalog = RoomCatalog::from_rooms(vec![
//!     Room::new(RoomId::new(1), 10i64, 4),
//!     Room::new(RoomId::new(2), 20, 3),
//! ]);
//! let assignments = assign_by_price(&catalog, 6, 5).unwrap();
//! assert_eq!(assignments[0].total_price(), 4 * 10 + 2 * 20);
//! ```

pub mod combination;
pub mod error;
pub mod monitor;
pub mod num;
pub mod occupancy;
pub mod price;
mod render;
pub mod result;
pub mod stats;

pub use error::SolveError;
pub use num::AssignNumeric;
pub use result::{AssignerOutcome, TerminationReason};

use monitor::NoOperationMonitor;
use occupancy::OccupancyAssigner;
use price::PriceAssigner;
use quarters_model::{
    model::{Demand, RoomCatalog},
    solution::Assignment,
};

/// Returns whether the catalog can hold `guests` with every room filled to
/// capacity.
///
/// # Examples
///
/// ```rust
/// use quarters_model::model::{Room, RoomCatalog, RoomId};
/// use quarters_solver::check_capacity;
///
/// let catalog = RoomCatalog::from_rooms(vec![Room::new(RoomId::new(1), 10i64, 4)]);
/// assert!(check_capacity(&catalog, 4));
/// assert!(!check_capacity(&catalog, 5));
/// ```
#[inline]
pub fn check_capacity<T>(catalog: &RoomCatalog<T>, guests: T) -> bool
where
    T: AssignNumeric,
{
    catalog.can_accommodate(guests)
}

/// Returns up to `query_count` assignments for `guests`, cheapest first.
///
/// Convenience wrapper around [`PriceAssigner`] with a no-op monitor.
///
/// # Errors
///
/// Returns `SolveError::InsufficientCapacity` when the catalog cannot hold
/// the requested guests.
pub fn assign_by_price<T>(
    catalog: &RoomCatalog<T>,
    guests: T,
    query_count: usize,
) -> Result<Vec<Assignment<T>>, SolveError<T>>
where
    T: AssignNumeric,
{
    let demand = Demand::new(guests, query_count);
    PriceAssigner::new()
        .solve(catalog, &demand, NoOperationMonitor::new())
        .map(AssignerOutcome::into_assignments)
}

/// Returns up to `query_count` assignments for `guests`, ranked by how
/// evenly the guests spread across the rooms.
///
/// Convenience wrapper around [`OccupancyAssigner`] with a no-op monitor.
///
/// # Errors
///
/// Returns `SolveError::InsufficientCapacity` when the catalog cannot hold
/// the requested guests.
pub fn assign_by_occupancy<T>(
    catalog: &RoomCatalog<T>,
    guests: T,
    query_count: usize,
) -> Result<Vec<Assignment<T>>, SolveError<T>>
where
    T: AssignNumeric,
{
    let demand = Demand::new(guests, query_count);
    OccupancyAssigner::new()
        .solve(catalog, &demand, NoOperationMonitor::new())
        .map(AssignerOutcome::into_assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarters_model::model::{Room, RoomId};

    fn catalog() -> RoomCatalog<i64> {
        RoomCatalog::from_rooms(vec![
            Room::new(RoomId::new(1), 10i64, 4),
            Room::new(RoomId::new(2), 20, 3),
            Room::new(RoomId::new(3), 30, 5),
        ])
    }

    #[test]
    fn test_check_capacity() {
        assert!(check_capacity(&catalog(), 12));
        assert!(!check_capacity(&catalog(), 13));
    }

    #[test]
    fn test_assign_by_price_convenience() {
        let assignments = assign_by_price(&catalog(), 6, 2).unwrap();
        assert_eq!(assignments.len(), 2);
        assert!(assignments[0].total_price() <= assignments[1].total_price());
    }

    #[test]
    fn test_assign_by_occupancy_convenience() {
        let assignments = assign_by_occupancy(&catalog(), 6, 10).unwrap();
        assert!(!assignments.is_empty());
        for assignment in &assignments {
            assert_eq!(assignment.total_guests(), 6);
        }
    }

    #[test]
    fn test_strategies_agree_on_infeasibility() {
        let price_err = assign_by_price(&catalog(), 13, 1).unwrap_err();
        let occupancy_err = assign_by_occupancy(&catalog(), 13, 1).unwrap_err();
        assert_eq!(price_err, occupancy_err);
    }
}
