//! Depth-first search shared by the backtracking and constraint solvers.

use crate::{board::Assignment, PartialAssignment};

/// The result of searching below a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every row below was filled without conflicts.
    Solved(Assignment),
    /// No column in this row leads to a solution.
    Exhausted,
}

/// Counters describing the work done by a [`DepthFirst`] search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of queens committed to the board.
    pub commits: u64,
    /// Number of committed queens that were removed again.
    pub backtracks: u64,
}

/// Depth-first search that fills the board one row at a time.
///
/// Columns are tried in increasing order and the first complete placement is
/// returned without exploring its siblings, so the solution found is the
/// lexicographically smallest one.
#[derive(Debug)]
pub struct DepthFirst<P> {
    side_length: usize,

    // Values used to track the state of solving
    partial: P,
    stats: SearchStats,
}

impl<P> DepthFirst<P>
where
    P: PartialAssignment,
{
    /// Create a new search over an empty board with the given side length.
    pub fn new(side_length: usize) -> Self {
        DepthFirst {
            side_length,
            partial: P::with_side_length(side_length),
            stats: SearchStats::default(),
        }
    }

    /// Reset all search state.
    pub fn reset(&mut self) {
        self.partial = P::with_side_length(self.side_length);
        self.stats = SearchStats::default();
    }

    /// Return the counters collected so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run the search from the first row, returning the first solution.
    pub fn first_solution(&mut self) -> Option<Assignment> {
        match self.place_from(0) {
            Outcome::Solved(assignment) => {
                log::debug!(
                    "Solved [{}] queens after [{:?}].",
                    self.side_length,
                    self.stats
                );
                Some(assignment)
            }
            Outcome::Exhausted => {
                log::debug!(
                    "No placement of [{}] queens exists, searched [{:?}].",
                    self.side_length,
                    self.stats
                );
                None
            }
        }
    }

    /// Fill rows `row..side_length`, assuming rows above are committed.
    fn place_from(&mut self, row: usize) -> Outcome {
        if row == self.side_length {
            return match self.partial.to_assignment() {
                Some(assignment) => Outcome::Solved(assignment),
                None => Outcome::Exhausted,
            };
        }

        for column in 0..self.side_length {
            if !self.partial.is_safe(row, column) {
                continue;
            }

            self.partial.commit(row, column);
            self.stats.commits += 1;

            if let solved @ Outcome::Solved(_) = self.place_from(row + 1) {
                return solved;
            }

            self.partial.uncommit(row);
            self.stats.backtracks += 1;
        }

        Outcome::Exhausted
    }
}
