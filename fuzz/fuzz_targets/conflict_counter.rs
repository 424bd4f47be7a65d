#![no_main]

use libfuzzer_sys::fuzz_target;
use nqueens::{safety, Assignment};

#[derive(Debug)]
struct BoardInput {
    assignment: Assignment,
}

impl<'a> arbitrary::Arbitrary<'a> for BoardInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let side_length = u.int_in_range(0..=12)?;
        let assignment = (0..side_length)
            .map(|_| u.int_in_range(0..=side_length - 1))
            .collect::<arbitrary::Result<Assignment>>()?;

        Ok(BoardInput { assignment })
    }
}

fuzz_target!(|data: BoardInput| {
    let columns = data.assignment.columns();
    let placed_safely = columns
        .iter()
        .enumerate()
        .all(|(row, &column)| safety::is_safe(columns[..row].iter().copied().enumerate(), row, column));

    assert_eq!(data.assignment.is_solution(), placed_safely);
});
