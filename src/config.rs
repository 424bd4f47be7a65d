//! Solver configuration.
//!
//! Load configuration from TOML files to choose the default strategy, bound
//! the accepted board size, and tune the genetic search without code changes.
//!
//! # Examples
//!
//! ```
//! use nqueens::{config::SolverConfig, Strategy};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     strategy = "genetic"
//!     random_seed = 7
//!
//!     [genetic]
//!     max_generations = 500
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, Strategy::Genetic);
//! assert_eq!(config.genetic.max_generations, 500);
//! assert_eq!(config.genetic.population_size, 100);
//! ```

use crate::{genetic::GeneticConfig, Error, Strategy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The largest board accepted by default.
pub const DEFAULT_MAX_BOARD_SIZE: usize = 30;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML, or does not match the expected layout.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Strategy used when the caller does not choose one.
    pub strategy: Strategy,

    /// Largest board size accepted by [`SolverConfig::check_board_size`].
    pub max_board_size: usize,

    /// Random seed for reproducible genetic searches.
    pub random_seed: Option<u64>,

    /// Run the backtracking solver when the genetic search gives up.
    pub fallback_to_backtracking: bool,

    /// Genetic search parameters.
    pub genetic: GeneticConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            strategy: Strategy::default(),
            max_board_size: DEFAULT_MAX_BOARD_SIZE,
            random_seed: None,
            fallback_to_backtracking: false,
            genetic: GeneticConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the default strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the largest accepted board size.
    pub fn with_max_board_size(mut self, max_board_size: usize) -> Self {
        self.max_board_size = max_board_size;
        self
    }

    /// Enables or disables the backtracking fallback for genetic searches.
    pub fn with_fallback_to_backtracking(mut self, fallback: bool) -> Self {
        self.fallback_to_backtracking = fallback;
        self
    }

    /// Sets the genetic search parameters.
    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Check that a board size is within `1..=max_board_size`.
    ///
    /// Solvers accept any size, this check is for callers that take the size
    /// from a user.
    pub fn check_board_size(&self, n: usize) -> Result<(), Error> {
        if (1..=self.max_board_size).contains(&n) {
            Ok(())
        } else {
            Err(Error::BoardSize {
                n,
                max: self.max_board_size,
            })
        }
    }

    /// Create the random number generator for one solver call.
    ///
    /// The generator is seeded from `random_seed` when set, and from the
    /// operating system otherwise.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            strategy = "csp"
            max_board_size = 12
            random_seed = 42
            fallback_to_backtracking = true

            [genetic]
            max_generations = 200
            population_size = 60
            mutation_rate = 0.25
            elite_count = 6
            mating_pool_size = 30
        "#;

        let config = SolverConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.strategy, Strategy::Csp);
        assert_eq!(config.max_board_size, 12);
        assert_eq!(config.random_seed, Some(42));
        assert!(config.fallback_to_backtracking);
        assert_eq!(
            config.genetic,
            GeneticConfig {
                max_generations: 200,
                population_size: 60,
                mutation_rate: 0.25,
                elite_count: 6,
                mating_pool_size: 30,
            }
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = SolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, SolverConfig::default());

        let config = SolverConfig::from_toml_str("[genetic]\nmutation_rate = 0.5").unwrap();
        assert_eq!(config.genetic.mutation_rate, 0.5);
        assert_eq!(config.genetic.max_generations, 1000);
        assert_eq!(config.max_board_size, DEFAULT_MAX_BOARD_SIZE);
    }

    #[test]
    fn test_unknown_strategy_is_a_parse_error() {
        let err = SolverConfig::from_toml_str(r#"strategy = "tabu""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SolverConfig::load("/nonexistent/nqueens.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::new()
            .with_strategy(Strategy::Genetic)
            .with_random_seed(123)
            .with_max_board_size(8)
            .with_fallback_to_backtracking(true)
            .with_genetic(GeneticConfig::new().with_max_generations(10));

        assert_eq!(config.strategy, Strategy::Genetic);
        assert_eq!(config.random_seed, Some(123));
        assert_eq!(config.max_board_size, 8);
        assert!(config.fallback_to_backtracking);
        assert_eq!(config.genetic.max_generations, 10);
    }

    #[test]
    fn test_board_size_bounds() {
        let config = SolverConfig::default();

        assert!(config.check_board_size(1).is_ok());
        assert!(config.check_board_size(30).is_ok());
        assert!(matches!(
            config.check_board_size(0),
            Err(Error::BoardSize { n: 0, max: 30 })
        ));
        assert!(matches!(
            config.check_board_size(31),
            Err(Error::BoardSize { n: 31, max: 30 })
        ));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SolverConfig::new().with_random_seed(5);

        let first: u64 = config.rng().random();
        let second: u64 = config.rng().random();
        assert_eq!(first, second);
    }
}
