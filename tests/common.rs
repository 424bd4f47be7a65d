use nqueens::{safety, Assignment};

/// Check a placement of queens by placing them one row at a time.
///
/// This is independent of the conflict counter, so the two can be compared.
#[allow(dead_code)]
pub fn is_valid_placement(columns: &[usize]) -> bool {
    let side_length = columns.len();

    columns.iter().enumerate().all(|(row, &column)| {
        column < side_length
            && safety::is_safe(columns[..row].iter().copied().enumerate(), row, column)
    })
}

/// Assert that `solution` places `side_length` queens without conflicts.
///
/// # Panics
///  - If the solution has the wrong length.
///  - If any queen is off the board, or attacked by another queen.
#[allow(dead_code)]
pub fn assert_solves(solution: &Assignment, side_length: usize) {
    log::debug!("Checking solution [{:?}] for [{}] queens.", solution, side_length);

    assert_eq!(
        solution.side_length(),
        side_length,
        "Solution needs one queen per row."
    );
    assert!(
        is_valid_placement(solution.columns()),
        "Queens attack each other in [{:?}].",
        solution
    );
    assert_eq!(solution.conflicts(), 0);
}

/// Return every permutation of `0..side_length` in lexicographic order.
#[allow(dead_code)]
pub fn permutations(side_length: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut [bool], output: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            output.push(prefix.clone());
            return;
        }

        for column in 0..used.len() {
            if !used[column] {
                used[column] = true;
                prefix.push(column);
                extend(prefix, used, output);
                prefix.pop();
                used[column] = false;
            }
        }
    }

    let mut output = Vec::new();
    extend(
        &mut Vec::with_capacity(side_length),
        &mut vec![false; side_length],
        &mut output,
    );
    output
}
