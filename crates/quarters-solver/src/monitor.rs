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

//! # Search Monitors
//!
//! Monitors observe an assigner run and can cut it short. The assigners call
//! `on_step` once per subset candidate they examine and query
//! `search_command` at the same cadence, so a monitor can bound long
//! enumerations over large catalogs. Assignments are reported through
//! `on_assignment_found` as they are collected, before ranking.

use crate::stats::AssignerStatistics;
use num_traits::{PrimInt, Signed};
use quarters_model::{
    model::{Demand, RoomCatalog},
    solution::Assignment,
};
use std::time::{Duration, Instant};

/// Command returned by a monitor to control the search process.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    /// Keep searching.
    #[default]
    Continue,
    /// Stop the search, carrying a human-readable reason.
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Trait for observing and controlling an assigner run.
pub trait SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the search begins.
    fn on_enter_search(&mut self, catalog: &RoomCatalog<T>, demand: &Demand<T>);

    /// Called once after the search finishes.
    fn on_exit_search(&mut self, stats: &AssignerStatistics);

    /// Called whenever the assigner collects a feasible assignment.
    fn on_assignment_found(&mut self, assignment: &Assignment<T>);

    /// Called once per subset candidate the assigner examines.
    fn on_step(&mut self, stats: &AssignerStatistics);

    /// Queried at the `on_step` cadence to decide whether to keep going.
    fn search_command(&self) -> SearchCommand;
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// A monitor that does nothing and never terminates the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> SearchMonitor<T> for NoOperationMonitor
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    fn on_enter_search(&mut self, _catalog: &RoomCatalog<T>, _demand: &Demand<T>) {}

    fn on_exit_search(&mut self, _stats: &AssignerStatistics) {}

    fn on_assignment_found(&mut self, _assignment: &Assignment<T>) {}

    fn on_step(&mut self, _stats: &AssignerStatistics) {}

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

/// A monitor that terminates the search after a fixed number of examined
/// subset candidates.
///
/// Subset enumeration grows combinatorially with the catalog size, so a caller
/// serving interactive queries can use this monitor as a hard ceiling on work.
#[derive(Debug, Clone)]
pub struct StepLimitMonitor {
    steps_seen: u64,
    step_limit: u64,
}

impl StepLimitMonitor {
    /// Creates a new `StepLimitMonitor` with the given candidate budget.
    #[inline]
    pub fn new(step_limit: u64) -> Self {
        Self {
            steps_seen: 0,
            step_limit,
        }
    }

    #[inline]
    fn reached_limit(&self) -> bool {
        self.steps_seen >= self.step_limit
    }
}

impl<T> SearchMonitor<T> for StepLimitMonitor
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "StepLimitMonitor"
    }

    fn on_enter_search(&mut self, _catalog: &RoomCatalog<T>, _demand: &Demand<T>) {
        self.steps_seen = 0;
    }

    fn on_exit_search(&mut self, _stats: &AssignerStatistics) {}

    fn on_assignment_found(&mut self, _assignment: &Assignment<T>) {}

    fn on_step(&mut self, _stats: &AssignerStatistics) {
        self.steps_seen = self.steps_seen.saturating_add(1);
    }

    fn search_command(&self) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("step limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}

/// A monitor that periodically prints search progress to stdout.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    header_printed: bool,
}

impl LogMonitor {
    /// Creates a new `LogMonitor` that logs at most once per `log_interval`.
    pub fn new(log_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
            header_printed: false,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<14} | {:<12}",
            "Elapsed", "Candidates", "Feasible", "Pruned (Cap)"
        );
        println!("{}", "-".repeat(57));
    }

    #[inline(always)]
    fn log_line(&mut self, stats: &AssignerStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<14} | {:<12}",
            elapsed_field,
            stats.candidates_examined,
            stats.assignments_found,
            stats.prunings_capacity
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, _catalog: &RoomCatalog<T>, _demand: &Demand<T>) {
        let now = Instant::now();
        self.start_time = now;
        self.last_log_time = now;
        self.header_printed = false;
    }

    fn on_exit_search(&mut self, stats: &AssignerStatistics) {
        if self.header_printed {
            self.log_line(stats);
        }
    }

    fn on_assignment_found(&mut self, _assignment: &Assignment<T>) {}

    fn on_step(&mut self, stats: &AssignerStatistics) {
        if self.last_log_time.elapsed() < self.log_interval {
            return;
        }
        if !self.header_printed {
            self.print_header();
            self.header_printed = true;
        }
        self.log_line(stats);
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarters_model::model::{Demand, RoomCatalog};

    fn empty_catalog() -> RoomCatalog<i64> {
        RoomCatalog::from_rooms(Vec::new())
    }

    #[test]
    fn test_no_operation_monitor_always_continues() {
        let mut monitor = NoOperationMonitor::new();
        let stats = AssignerStatistics::default();
        SearchMonitor::<i64>::on_enter_search(&mut monitor, &empty_catalog(), &Demand::new(0, 1));
        SearchMonitor::<i64>::on_step(&mut monitor, &stats);
        assert!(matches!(
            SearchMonitor::<i64>::search_command(&monitor),
            SearchCommand::Continue
        ));
    }

    #[test]
    fn test_step_limit_monitor_terminates_at_limit() {
        let mut monitor = StepLimitMonitor::new(3);
        let stats = AssignerStatistics::default();
        SearchMonitor::<i64>::on_enter_search(&mut monitor, &empty_catalog(), &Demand::new(0, 1));

        SearchMonitor::<i64>::on_step(&mut monitor, &stats);
        SearchMonitor::<i64>::on_step(&mut monitor, &stats);
        assert!(matches!(
            SearchMonitor::<i64>::search_command(&monitor),
            SearchCommand::Continue
        ));

        SearchMonitor::<i64>::on_step(&mut monitor, &stats);
        assert!(matches!(
            SearchMonitor::<i64>::search_command(&monitor),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_step_limit_monitor_resets_on_enter() {
        let mut monitor = StepLimitMonitor::new(1);
        let stats = AssignerStatistics::default();
        SearchMonitor::<i64>::on_enter_search(&mut monitor, &empty_catalog(), &Demand::new(0, 1));
        SearchMonitor::<i64>::on_step(&mut monitor, &stats);
        assert!(matches!(
            SearchMonitor::<i64>::search_command(&monitor),
            SearchCommand::Terminate(_)
        ));

        SearchMonitor::<i64>::on_enter_search(&mut monitor, &empty_catalog(), &Demand::new(0, 1));
        assert!(matches!(
            SearchMonitor::<i64>::search_command(&monitor),
            SearchCommand::Continue
        ));
    }

    #[test]
    fn test_search_command_display() {
        assert_eq!(format!("{}", SearchCommand::Continue), "Continue");
        assert_eq!(
            format!("{}", SearchCommand::Terminate("step limit reached".to_string())),
            "Terminate: step limit reached"
        );
    }
}
