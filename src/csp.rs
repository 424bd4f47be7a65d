//! Constraint-satisfaction search over a growable list of placements.
//!
//! Each row is a variable whose domain is the board's columns, and the
//! constraints are that no two queens share a column or diagonal. Values are
//! assigned in row order and checked against the placements committed so far.
//! The search visits placements in the same order as
//! [`solve_backtracking`](crate::backtracking::solve_backtracking), so both
//! return the same solution.

use crate::{board::Placements, search::DepthFirst, Assignment};

/// Return the first consistent assignment of `side_length` queens, or `None`
/// if the constraints cannot be satisfied.
pub fn solve_csp(side_length: usize) -> Option<Assignment> {
    DepthFirst::<Placements>::new(side_length).first_solution()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtracking::solve_backtracking;

    #[test]
    fn check_tiny_boards() {
        assert_eq!(solve_csp(0), Some(Assignment::default()));
        assert_eq!(solve_csp(1), Some(Assignment::new(vec![0])));
        assert_eq!(solve_csp(2), None);
        assert_eq!(solve_csp(3), None);
    }

    #[test]
    fn matches_backtracking() {
        for side_length in 0..=12 {
            assert_eq!(solve_csp(side_length), solve_backtracking(side_length));
        }
    }
}
