//! Genetic search for a placement of queens.
//!
//! Every individual is an [`Assignment`] holding one queen per row, and its
//! fitness is the number of attacking pairs (lower is better). Each
//! generation keeps the best individuals unchanged and fills the rest of the
//! population with children bred from the top of the ranking. The search is
//! a heuristic: it gives up after a fixed number of generations, even on
//! boards that have a solution.

use crate::{Assignment, Error};
use rand::{
    seq::{index, SliceRandom},
    Rng,
};
use serde::{Deserialize, Serialize};

/// Parameters of the genetic search.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GeneticConfig {
    /// Number of generations evaluated before giving up.
    pub max_generations: usize,

    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Probability that a newly bred child is mutated.
    pub mutation_rate: f64,

    /// Number of best individuals carried unchanged into the next generation.
    pub elite_count: usize,

    /// Number of best individuals that parents are drawn from.
    pub mating_pool_size: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        GeneticConfig {
            max_generations: 1000,
            population_size: 100,
            mutation_rate: 0.1,
            elite_count: 10,
            mating_pool_size: 50,
        }
    }
}

impl GeneticConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, elite_count: usize) -> Self {
        self.elite_count = elite_count;
        self
    }

    /// Sets the size of the mating pool.
    pub fn with_mating_pool_size(mut self, mating_pool_size: usize) -> Self {
        self.mating_pool_size = mating_pool_size;
        self
    }

    /// Check that the parameters describe a runnable search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if there are not enough individuals to
    /// pick two distinct parents, if the elites or the mating pool are larger
    /// than the population, or if the mutation rate is not a probability.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.mating_pool_size < 2 {
            return Err(invalid("mating_pool_size must be at least 2"));
        }
        if self.mating_pool_size > self.population_size {
            return Err(invalid("mating_pool_size must not exceed population_size"));
        }
        if self.elite_count > self.population_size {
            return Err(invalid("elite_count must not exceed population_size"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be between 0 and 1"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> Error {
    Error::InvalidConfig(reason.to_owned())
}

/// Summary of a finished genetic search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evolution {
    /// The best individual of the last generation that was evaluated.
    pub best: Assignment,
    /// The number of attacking pairs in `best`.
    pub conflicts: usize,
    /// The number of generations that were evaluated.
    pub generations: usize,
}

impl Evolution {
    /// Return true if the search found a solution.
    pub fn is_solved(&self) -> bool {
        self.conflicts == 0
    }

    /// Return the best individual if it is a solution.
    pub fn into_solution(self) -> Option<Assignment> {
        if self.is_solved() {
            Some(self.best)
        } else {
            None
        }
    }
}

/// A genetic search for a single board size.
#[derive(Debug, Clone)]
pub struct GeneticSolver {
    side_length: usize,
    config: GeneticConfig,
}

impl GeneticSolver {
    /// Create a new genetic search for a board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not pass
    /// [`GeneticConfig::validate`].
    pub fn new(side_length: usize, config: GeneticConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(GeneticSolver {
            side_length,
            config,
        })
    }

    /// Return the configuration of this search.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Evolve a population until an individual without conflicts appears, or
    /// the generation budget runs out.
    pub fn evolve<R: Rng>(&self, rng: &mut R) -> Evolution {
        let mut population: Vec<Assignment> = (0..self.config.population_size)
            .map(|_| random_individual(self.side_length, rng))
            .collect();
        let mut ranked_best = (usize::MAX, Assignment::default());

        for generation in 0..self.config.max_generations {
            population.sort_by_cached_key(Assignment::conflicts);

            let best_conflicts = population[0].conflicts();
            if best_conflicts == 0 {
                log::debug!(
                    "Solved [{}] queens in generation [{}].",
                    self.side_length,
                    generation
                );

                return Evolution {
                    best: population.swap_remove(0),
                    conflicts: 0,
                    generations: generation + 1,
                };
            }

            log::trace!(
                "Generation [{}] best individual has [{}] conflicts.",
                generation,
                best_conflicts
            );
            ranked_best = (best_conflicts, population[0].clone());

            population = self.next_generation(&population, rng);
        }

        let (conflicts, best) = ranked_best;
        log::debug!(
            "Gave up on [{}] queens after [{}] generations, best individual has [{}] conflicts.",
            self.side_length,
            self.config.max_generations,
            conflicts
        );

        Evolution {
            best,
            conflicts,
            generations: self.config.max_generations,
        }
    }

    /// Breed the next generation from a population sorted best first.
    fn next_generation<R: Rng>(&self, ranked: &[Assignment], rng: &mut R) -> Vec<Assignment> {
        let elite_count = self.config.elite_count.min(ranked.len());
        let mating_pool = &ranked[..self.config.mating_pool_size.min(ranked.len())];

        let mut next = Vec::with_capacity(self.config.population_size);
        next.extend_from_slice(&ranked[..elite_count]);

        while next.len() < self.config.population_size {
            let parents = index::sample(rng, mating_pool.len(), 2);
            let mut child = crossover(
                &mating_pool[parents.index(0)],
                &mating_pool[parents.index(1)],
                rng,
            );

            if rng.random::<f64>() < self.config.mutation_rate {
                mutate(&mut child, rng);
            }

            next.push(child);
        }

        next
    }
}

/// Run a genetic search with the default configuration, returning a
/// solution if one was found within the generation budget.
pub fn solve_genetic<R: Rng>(side_length: usize, rng: &mut R) -> Option<Assignment> {
    GeneticSolver {
        side_length,
        config: GeneticConfig::default(),
    }
    .evolve(rng)
    .into_solution()
}

/// Return a random permutation of the columns, so that no two queens share a
/// column initially.
pub fn random_individual<R: Rng>(side_length: usize, rng: &mut R) -> Assignment {
    let mut columns: Vec<usize> = (0..side_length).collect();
    columns.shuffle(rng);

    Assignment::new(columns)
}

/// Combine two parents at a random cut point.
///
/// The child takes the rows above the cut from `first` and the rest from
/// `second`. The cut is drawn from `0..side_length`, so the child always
/// inherits at least one row from `second`.
///
/// # Panics
///
/// Panics if the parents have different lengths.
pub fn crossover<R: Rng>(first: &Assignment, second: &Assignment, rng: &mut R) -> Assignment {
    assert_eq!(
        first.side_length(),
        second.side_length(),
        "parents must describe the same board"
    );

    if first.is_empty() {
        return Assignment::default();
    }

    let cut = rng.random_range(0..first.side_length());
    first[..cut].iter().chain(&second[cut..]).copied().collect()
}

/// Move the queen of one random row to a random column.
pub fn mutate<R: Rng>(individual: &mut Assignment, rng: &mut R) {
    let side_length = individual.side_length();
    if side_length == 0 {
        return;
    }

    let row = rng.random_range(0..side_length);
    individual.columns_mut()[row] = rng.random_range(0..side_length);
}
