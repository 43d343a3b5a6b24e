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

use quarters_core::num::ops::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected during an assigner run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignerStatistics {
    /// Total subset candidates examined.
    pub candidates_examined: u64,
    /// Candidates rejected because their combined capacity fell short.
    pub prunings_capacity: u64,
    /// Candidate families skipped wholesale by the back-pruning jump.
    pub prunings_prefix: u64,
    /// Feasible assignments collected before ranking and truncation.
    pub assignments_found: u64,
    /// Total time spent in the assigner.
    pub time_total: Duration,
}

impl AssignerStatistics {
    #[inline]
    pub fn on_candidate_examined(&mut self) {
        self.candidates_examined = self.candidates_examined.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_capacity(&mut self) {
        self.prunings_capacity = self.prunings_capacity.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_prefix(&mut self) {
        self.prunings_prefix = self.prunings_prefix.saturating_add_val(1);
    }

    #[inline]
    pub fn on_assignment_found(&mut self) {
        self.assignments_found = self.assignments_found.saturating_add_val(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for AssignerStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assigner Statistics:")?;
        writeln!(f, "  Candidates examined:  {}", self.candidates_examined)?;
        writeln!(f, "  Prunings (capacity):  {}", self.prunings_capacity)?;
        writeln!(f, "  Prunings (prefix):    {}", self.prunings_prefix)?;
        writeln!(f, "  Assignments found:    {}", self.assignments_found)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
