//! Check whether a queen can be placed without being attacked.

/// Return true if a queen at (`row`, `column`) is not attacked by any of the
/// given committed placements.
///
/// Placements are `(row, column)` pairs. A placement attacks the candidate if
/// it shares the column, or if it lies on one of the candidate's diagonals.
/// Rows are not compared, callers never commit two queens to the same row.
pub fn is_safe(
    placements: impl IntoIterator<Item = (usize, usize)>,
    row: usize,
    column: usize,
) -> bool {
    placements.into_iter().all(|(placed_row, placed_column)| {
        placed_column != column && placed_row.abs_diff(row) != placed_column.abs_diff(column)
    })
}
