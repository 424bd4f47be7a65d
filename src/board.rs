//! Board representations for the [`n` queens
//! puzzle](https://en.wikipedia.org/wiki/Eight_queens_puzzle).
//!
//! Every representation places at most one queen per row, so a board is a
//! mapping from row index to the column holding that row's queen.
//!
//!  - [`Assignment`] is a complete mapping, the artifact returned by every
//!    solver.
//!  - [`Board`] is a fixed-size partial mapping where unplaced rows are
//!    `None`.
//!  - [`Placements`] is a growable partial mapping covering only the rows that
//!    have been committed so far.

use crate::{fitness, safety, PartialAssignment};
use std::{fmt, ops::Deref};

/// A complete placement of queens, one per row.
///
/// The value at index `row` is the column of the queen in that row. An
/// `Assignment` produced by the genetic solver's population is not guaranteed
/// to be conflict free; one returned from a solver always is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Assignment(Vec<usize>);

impl Assignment {
    /// Create a new assignment from a list of columns, indexed by row.
    pub fn new(columns: Vec<usize>) -> Self {
        Assignment(columns)
    }

    /// Return the length of the chess board side, equal to `n`.
    pub fn side_length(&self) -> usize {
        self.0.len()
    }

    /// Return the columns of this assignment, indexed by row.
    pub fn columns(&self) -> &[usize] {
        &self.0
    }

    /// Return an iterator over the `(row, column)` position of every queen.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// Return the number of attacking pairs of queens.
    pub fn conflicts(&self) -> usize {
        fitness::conflicts(&self.0)
    }

    /// Return true if no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// Consume the assignment and return the underlying list of columns.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }
}

impl Deref for Assignment {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(columns: Vec<usize>) -> Self {
        Assignment(columns)
    }
}

impl FromIterator<usize> for Assignment {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

impl fmt::Display for Assignment {
    /// Draw the board as a grid, with a `Q` in every cell holding a queen.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_length = self.side_length();
        let row_separator = format!("{}+", "+---".repeat(side_length));

        for &queen_column in &self.0 {
            writeln!(f, "{row_separator}")?;
            for column in 0..side_length {
                let cell = if column == queen_column { "| Q " } else { "|   " };
                f.write_str(cell)?;
            }
            writeln!(f, "|")?;
        }

        write!(f, "{row_separator}")
    }
}

/// A fixed-size board where each row either holds a queen or is unplaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<usize>>,
}

impl Board {
    /// Create an empty board with the given side length.
    pub fn new(side_length: usize) -> Self {
        Board {
            cells: vec![None; side_length],
        }
    }

    /// Return the column of the queen in the given row, if one is placed.
    pub fn get(&self, row: usize) -> Option<usize> {
        self.cells.get(row).copied().flatten()
    }

    /// Return the length of the chess board side.
    pub fn side_length(&self) -> usize {
        self.cells.len()
    }
}

impl PartialAssignment for Board {
    fn with_side_length(side_length: usize) -> Self {
        Board::new(side_length)
    }

    fn commit(&mut self, row: usize, column: usize) {
        debug_assert!(self.cells[row].is_none(), "row [{row}] is already placed");
        self.cells[row] = Some(column);
    }

    fn uncommit(&mut self, row: usize) {
        self.cells[row] = None;
    }

    fn is_safe(&self, row: usize, column: usize) -> bool {
        // Only rows above the candidate can hold a committed queen.
        let above = self.cells[..row]
            .iter()
            .enumerate()
            .filter_map(|(row, cell)| cell.map(|column| (row, column)));

        safety::is_safe(above, row, column)
    }

    fn to_assignment(&self) -> Option<Assignment> {
        self.cells.iter().copied().collect::<Option<Assignment>>()
    }
}

/// A growable list of committed queens, covering rows `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placements {
    columns: Vec<usize>,
    side_length: usize,
}

impl Placements {
    /// Create an empty list of placements for a board of the given side
    /// length.
    pub fn new(side_length: usize) -> Self {
        Placements {
            columns: Vec::with_capacity(side_length),
            side_length,
        }
    }

    /// Return the number of committed rows.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Return true if no row has been committed.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl PartialAssignment for Placements {
    fn with_side_length(side_length: usize) -> Self {
        Placements::new(side_length)
    }

    fn commit(&mut self, row: usize, column: usize) {
        debug_assert_eq!(row, self.columns.len(), "rows must be committed in order");
        self.columns.push(column);
    }

    fn uncommit(&mut self, row: usize) {
        debug_assert_eq!(row + 1, self.columns.len(), "only the last row can be removed");
        self.columns.pop();
    }

    fn is_safe(&self, row: usize, column: usize) -> bool {
        safety::is_safe(self.columns.iter().copied().enumerate(), row, column)
    }

    fn to_assignment(&self) -> Option<Assignment> {
        if self.columns.len() == self.side_length {
            Some(Assignment::new(self.columns.clone()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_small_board() {
        let assignment = Assignment::new(vec![1, 3, 0, 2]);

        assert_eq!(
            assignment.to_string(),
            "+---+---+---+---+\n\
             |   | Q |   |   |\n\
             +---+---+---+---+\n\
             |   |   |   | Q |\n\
             +---+---+---+---+\n\
             | Q |   |   |   |\n\
             +---+---+---+---+\n\
             |   |   | Q |   |\n\
             +---+---+---+---+"
        );
    }

    #[test]
    fn render_empty_board() {
        assert_eq!(Assignment::default().to_string(), "+");
    }

    #[test]
    fn board_skips_unplaced_rows() {
        let mut board = Board::new(4);
        board.commit(0, 1);

        // Row 1 is unplaced, so row 2 is only checked against row 0.
        assert!(board.is_safe(2, 0));
        assert!(!board.is_safe(2, 1));
        assert!(!board.is_safe(2, 3));
        assert_eq!(board.to_assignment(), None);

        board.uncommit(0);
        assert_eq!(board.get(0), None);
        assert_eq!(board, Board::new(4));
    }

    #[test]
    fn complete_board_converts_to_assignment() {
        let mut board = Board::new(4);
        for (row, column) in [1, 3, 0, 2].into_iter().enumerate() {
            assert!(board.is_safe(row, column));
            board.commit(row, column);
        }

        assert_eq!(board.to_assignment(), Some(Assignment::new(vec![1, 3, 0, 2])));
    }

    #[test]
    fn placements_grow_and_shrink_at_the_tail() {
        let mut placements = Placements::new(4);
        assert!(placements.is_empty());

        placements.commit(0, 1);
        placements.commit(1, 3);
        assert_eq!(placements.len(), 2);
        assert!(placements.is_safe(2, 0));
        assert!(!placements.is_safe(2, 2));
        assert_eq!(placements.to_assignment(), None);

        placements.uncommit(1);
        assert_eq!(placements.len(), 1);
        assert!(placements.is_safe(1, 3));
    }

    #[test]
    fn assignment_exposes_positions() {
        let assignment: Assignment = [2, 0, 3, 1].into_iter().collect();

        assert_eq!(assignment.side_length(), 4);
        assert_eq!(
            assignment.positions().collect::<Vec<_>>(),
            vec![(0, 2), (1, 0), (2, 3), (3, 1)]
        );
        assert!(assignment.is_solution());
        assert_eq!(assignment.into_inner(), vec![2, 0, 3, 1]);
    }
}
