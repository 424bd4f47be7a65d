use crate::config::ConfigError;
use thiserror::Error;

/// Errors reported before a solver runs.
///
/// A board without a solution is not an error, solvers return `None` for it.
#[derive(Debug, Error)]
pub enum Error {
    /// The board size is outside the accepted range `1..=max`.
    #[error("board size {n} is outside the accepted range 1..={max}")]
    BoardSize {
        /// The rejected board size.
        n: usize,
        /// The largest accepted board size.
        max: usize,
    },

    /// The strategy name does not match any solver.
    #[error("unknown strategy `{0}`, expected one of: backtracking, csp, genetic")]
    UnknownStrategy(String),

    /// Solver parameters are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
