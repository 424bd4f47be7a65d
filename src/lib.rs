#![deny(missing_docs)]

//! Solvers for the [`n` queens puzzle](https://en.wikipedia.org/wiki/Eight_queens_puzzle):
//! place `n` chess queens on an `n`×`n` board so that no two queens threaten
//! each other.
//!
//! Three interchangeable strategies are provided:
//!
//!  - [backtracking](backtracking::solve_backtracking), a depth-first search
//!    over a fixed-size board,
//!  - [constraint search](csp::solve_csp), the same depth-first search over a
//!    growable list of placements,
//!  - [genetic search](genetic::GeneticSolver), an evolutionary heuristic that
//!    may give up before finding a solution.
//!
//! Every strategy returns an [`Assignment`] holding the column of the queen in
//! each row, or `None` when no solution was found.
//!
//! ```
//! use nqueens::{solve, Strategy};
//!
//! let solution = solve(4, Strategy::Backtracking).unwrap();
//! assert_eq!(solution.columns(), &[1, 3, 0, 2]);
//!
//! assert!(solve(3, Strategy::Csp).is_none());
//! ```

pub mod backtracking;
pub mod board;
pub mod config;
pub mod csp;
mod error;
pub mod fitness;
pub mod genetic;
pub mod safety;
pub mod search;
mod strategy;

pub use board::Assignment;
pub use config::SolverConfig;
pub use error::Error;
pub use strategy::Strategy;

/// A board that is filled one row at a time, top to bottom.
///
/// Implementations differ in how they store the rows that have not been
/// committed yet, but must agree on which placements are safe.
pub trait PartialAssignment {
    /// Create an empty partial assignment for a board with the given side
    /// length.
    fn with_side_length(side_length: usize) -> Self;

    /// Place a queen at (`row`, `column`).
    ///
    /// Rows are committed in increasing order, each row at most once until it
    /// is uncommitted.
    fn commit(&mut self, row: usize, column: usize);

    /// Remove the queen placed in `row`, which is always the most recently
    /// committed row.
    fn uncommit(&mut self, row: usize);

    /// Return true if a queen at (`row`, `column`) would not be attacked by
    /// any committed queen.
    fn is_safe(&self, row: usize, column: usize) -> bool;

    /// Return the complete assignment, or `None` if some row is not committed.
    fn to_assignment(&self) -> Option<Assignment>;
}

/// Solve a board of size `n` with the given strategy and the default
/// configuration.
///
/// The genetic strategy draws a fresh seed from the operating system, so
/// repeated calls may return different solutions, or none at all.
pub fn solve(n: usize, strategy: Strategy) -> Option<Assignment> {
    match strategy {
        Strategy::Backtracking => backtracking::solve_backtracking(n),
        Strategy::Csp => csp::solve_csp(n),
        Strategy::Genetic => genetic::solve_genetic(n, &mut SolverConfig::default().rng()),
    }
}

/// Solve a board of size `n` with the given strategy and configuration.
///
/// The board size is not checked against
/// [`max_board_size`](SolverConfig::max_board_size), callers taking the size
/// from a user should call [`SolverConfig::check_board_size`] first.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the genetic parameters are invalid.
pub fn solve_with(
    n: usize,
    strategy: Strategy,
    config: &SolverConfig,
) -> Result<Option<Assignment>, Error> {
    let solution = match strategy {
        Strategy::Backtracking => backtracking::solve_backtracking(n),
        Strategy::Csp => csp::solve_csp(n),
        Strategy::Genetic => {
            let solver = genetic::GeneticSolver::new(n, config.genetic.clone())?;
            let evolution = solver.evolve(&mut config.rng());
            log::debug!(
                "Genetic search on [{}] queens ran [{}] of [{}] generations.",
                n,
                evolution.generations,
                solver.config().max_generations
            );

            evolution.into_solution()
        }
    };

    // Complete strategies have already searched the whole board.
    if solution.is_none() && !strategy.is_complete() && config.fallback_to_backtracking {
        log::warn!(
            "[{}] search gave up on [{}] queens, falling back to backtracking.",
            strategy,
            n
        );
        return Ok(backtracking::solve_backtracking(n));
    }

    Ok(solution)
}
