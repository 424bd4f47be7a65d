//! Backtracking over a fixed-size board.
//!
//! Queens are written into a [`Board`] indexed by row, and a row is reset to
//! unplaced when the search backs out of it.

use crate::{board::Board, search::DepthFirst, Assignment};

/// Return the first placement of `side_length` queens found by backtracking,
/// or `None` if the board has no solution.
///
/// Rows are filled top to bottom and columns are tried left to right, so for
/// `side_length = 4` the result is always `[1, 3, 0, 2]`.
pub fn solve_backtracking(side_length: usize) -> Option<Assignment> {
    DepthFirst::<Board>::new(side_length).first_solution()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_tiny_boards() {
        assert_eq!(solve_backtracking(0), Some(Assignment::default()));
        assert_eq!(solve_backtracking(1), Some(Assignment::new(vec![0])));
        assert_eq!(solve_backtracking(2), None);
        assert_eq!(solve_backtracking(3), None);
    }

    #[test]
    fn check_small_board() {
        assert_eq!(
            solve_backtracking(4),
            Some(Assignment::new(vec![1, 3, 0, 2]))
        );
        assert_eq!(
            solve_backtracking(5),
            Some(Assignment::new(vec![0, 2, 4, 1, 3]))
        );
    }

    #[test]
    fn check_medium_board() {
        let solution = solve_backtracking(8).unwrap();

        assert_eq!(solution.columns(), &[0, 4, 7, 5, 2, 6, 1, 3]);
        assert!(solution.is_solution());
    }
}
