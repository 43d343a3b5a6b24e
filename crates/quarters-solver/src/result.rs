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

use crate::stats::AssignerStatistics;
use num_traits::{PrimInt, Signed};
use quarters_model::solution::Assignment;

/// Why an assigner run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The requested number of assignments was collected.
    QueryCountReached,
    /// Every candidate subset was examined.
    Exhausted,
    /// A monitor terminated the run, carrying its reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::QueryCountReached => write!(f, "QueryCountReached"),
            TerminationReason::Exhausted => write!(f, "Exhausted"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of an assigner run after termination.
///
/// Carries the ranked assignments together with the termination reason and
/// the statistics of the run. An aborted run still returns the assignments
/// collected up to that point, ranked and truncated the same way a completed
/// run would be.
#[derive(Debug, Clone)]
pub struct AssignerOutcome<T>
where
    T: PrimInt + Signed,
{
    assignments: Vec<Assignment<T>>,
    termination_reason: TerminationReason,
    statistics: AssignerStatistics,
}

impl<T> AssignerOutcome<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new outcome.
    #[inline]
    pub fn new(
        assignments: Vec<Assignment<T>>,
        termination_reason: TerminationReason,
        statistics: AssignerStatistics,
    ) -> Self {
        Self {
            assignments,
            termination_reason,
            statistics,
        }
    }

    /// Returns the ranked assignments.
    #[inline]
    pub fn assignments(&self) -> &[Assignment<T>] {
        &self.assignments
    }

    /// Consumes the outcome and returns the ranked assignments.
    #[inline]
    pub fn into_assignments(self) -> Vec<Assignment<T>> {
        self.assignments
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the statistics of the run.
    #[inline]
    pub fn statistics(&self) -> &AssignerStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let outcome: AssignerOutcome<i64> = AssignerOutcome::new(
            vec![Assignment::empty()],
            TerminationReason::Exhausted,
            AssignerStatistics::default(),
        );
        assert_eq!(outcome.assignments().len(), 1);
        assert_eq!(outcome.termination_reason(), &TerminationReason::Exhausted);
        assert_eq!(outcome.statistics().candidates_examined, 0);
        assert_eq!(outcome.into_assignments().len(), 1);
    }

    #[test]
    fn test_termination_reason_display() {
        assert_eq!(
            format!("{}", TerminationReason::QueryCountReached),
            "QueryCountReached"
        );
        assert_eq!(format!("{}", TerminationReason::Exhausted), "Exhausted");
        assert_eq!(
            format!("{}", TerminationReason::Aborted("step limit reached".to_string())),
            "Aborted: step limit reached"
        );
    }
}
