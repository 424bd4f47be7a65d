//! Pairwise conflict counting, used as the fitness of a genetic individual.

/// Return the number of pairs of rows whose queens attack each other.
///
/// A pair `i < j` is counted once if the queens share a column or a diagonal,
/// so the result is zero exactly when `columns` is a solution.
pub fn conflicts(columns: &[usize]) -> usize {
    columns
        .iter()
        .enumerate()
        .map(|(i, &column_i)| {
            columns[i + 1..]
                .iter()
                .enumerate()
                .filter(|&(offset, &column_j)| {
                    column_i == column_j || column_i.abs_diff(column_j) == offset + 1
                })
                .count()
        })
        .sum()
}
