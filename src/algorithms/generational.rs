//! Generational color GA
//!
//! One generation applies the operator batches in a fixed order (crossover,
//! mutation, retention, new blood) and then sorts the population best first.
//! A run repeats this for a fixed number of generations; there is no early stop.

use std::time::Instant;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::Target;
use crate::operators::crossover::SinglePointCrossover;
use crate::operators::mutation::{BitFlipMutation, NewBlood};
use crate::operators::selection::RetentionSelection;
use crate::operators::traits::PopulationOperator;
use crate::population::population::Population;

/// How many times each operator runs per generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorCounts {
    /// Retention steps
    pub selection: usize,
    /// Single bit-flip mutations
    pub mutation: usize,
    /// Full complements
    pub new_blood: usize,
    /// Crossover pairs
    pub crossover: usize,
}

impl OperatorCounts {
    /// Create a new set of counts
    pub fn new(selection: usize, mutation: usize, new_blood: usize, crossover: usize) -> Self {
        Self {
            selection,
            mutation,
            new_blood,
            crossover,
        }
    }

    /// Total operator applications per generation
    ///
    /// Saturates at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.as_array()
            .iter()
            .fold(0usize, |acc, &n| acc.saturating_add(n))
    }

    /// Whether any operator runs at all
    pub fn any(&self) -> bool {
        self.as_array().iter().any(|&n| n > 0)
    }

    fn as_array(&self) -> [usize; 4] {
        [self.selection, self.mutation, self.new_blood, self.crossover]
    }
}

/// Configuration for the color GA
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorGAConfig {
    /// Population size
    pub population_size: usize,
    /// Operator applications per generation
    pub counts: OperatorCounts,
    /// Number of generations to run
    pub generations: usize,
}

impl Default for ColorGAConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            counts: OperatorCounts::new(10, 10, 2, 10),
            generations: 100,
        }
    }
}

impl ColorGAConfig {
    /// Reject configurations that would fail on the first generation
    pub fn validate(&self) -> EvoResult<()> {
        if self.generations == 0 {
            return Ok(());
        }
        if self.counts.crossover > 0 && self.population_size < 2 {
            return Err(EvolutionError::Configuration(format!(
                "crossover needs a population of at least 2, got {}",
                self.population_size
            )));
        }
        if self.counts.any() && self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "operators cannot run on an empty population".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for ColorGA
#[derive(Clone, Debug, Default)]
pub struct ColorGABuilder {
    config: ColorGAConfig,
    target: Option<Target>,
}

impl ColorGABuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: ColorGAConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the target color
    pub fn target(mut self, target: impl Into<Target>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set all operator counts at once
    pub fn counts(mut self, counts: OperatorCounts) -> Self {
        self.config.counts = counts;
        self
    }

    /// Set the number of retention steps per generation
    pub fn selection_count(mut self, count: usize) -> Self {
        self.config.counts.selection = count;
        self
    }

    /// Set the number of mutations per generation
    pub fn mutation_count(mut self, count: usize) -> Self {
        self.config.counts.mutation = count;
        self
    }

    /// Set the number of new-blood applications per generation
    pub fn new_blood_count(mut self, count: usize) -> Self {
        self.config.counts.new_blood = count;
        self
    }

    /// Set the number of crossover pairs per generation
    pub fn crossover_count(mut self, count: usize) -> Self {
        self.config.counts.crossover = count;
        self
    }

    /// Set the number of generations
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Build the ColorGA instance
    pub fn build(self) -> EvoResult<ColorGA> {
        let target = self
            .target
            .ok_or_else(|| EvolutionError::Configuration("Target must be specified".to_string()))?;
        self.config.validate()?;

        Ok(ColorGA {
            config: self.config,
            target,
            crossover: SinglePointCrossover::new(),
            mutation: BitFlipMutation::new(),
            retention: RetentionSelection::new(),
            new_blood: NewBlood::new(),
        })
    }
}

/// Generational genetic algorithm evolving chromosomes toward a target color
#[derive(Clone, Debug)]
pub struct ColorGA {
    config: ColorGAConfig,
    target: Target,
    crossover: SinglePointCrossover,
    mutation: BitFlipMutation,
    retention: RetentionSelection,
    new_blood: NewBlood,
}

impl ColorGA {
    /// Create a builder for ColorGA
    pub fn builder() -> ColorGABuilder {
        ColorGABuilder::new()
    }

    /// The run configuration
    pub fn config(&self) -> &ColorGAConfig {
        &self.config
    }

    /// The target color
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Random initial population of the configured size
    pub fn initial_population<R: Rng>(&self, rng: &mut R) -> Population {
        Population::random(self.config.population_size, &self.target, rng)
    }

    /// Apply one generation transition in place
    ///
    /// Works on any population handed in, so operator errors (such as crossover on a
    /// single chromosome) surface here rather than at build time.
    pub fn generation<R: Rng>(&self, population: &mut Population, rng: &mut R) -> EvoResult<()> {
        let counts = &self.config.counts;
        let target = &self.target;

        self.crossover
            .apply_n(counts.crossover, population, target, rng)?;
        self.mutation
            .apply_n(counts.mutation, population, target, rng)?;
        self.retention
            .apply_n(counts.selection, population, target, rng)?;
        self.new_blood
            .apply_n(counts.new_blood, population, target, rng)?;

        population.sort_by_fitness();
        population.increment_generation();
        Ok(())
    }

    /// Run the configured number of generations from a random population
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult> {
        let population = self.initial_population(rng);
        self.evolve(population, rng, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `observer` with the generation number and the
    /// sorted population after every generation
    pub fn run_with<R, O>(&self, rng: &mut R, observer: O) -> EvoResult<EvolutionResult>
    where
        R: Rng,
        O: FnMut(usize, &Population),
    {
        let population = self.initial_population(rng);
        self.evolve(population, rng, observer)
    }

    /// Run the configured number of generations starting from `population`
    pub fn evolve<R, O>(
        &self,
        mut population: Population,
        rng: &mut R,
        mut observer: O,
    ) -> EvoResult<EvolutionResult>
    where
        R: Rng,
        O: FnMut(usize, &Population),
    {
        let start_time = Instant::now();
        info!(
            "evolving {} chromosomes toward {} ({}) for {} generations",
            population.len(),
            self.target.bits(),
            self.target.color(),
            self.config.generations
        );

        let mut stats = EvolutionStats::new();
        stats.record(GenerationStats::from_population(&population, 0));

        for generation in 1..=self.config.generations {
            let gen_start = Instant::now();
            self.generation(&mut population, rng)?;

            let gen_stats = GenerationStats::from_population(&population, generation)
                .with_elapsed(gen_start.elapsed());
            debug!(
                "generation {}: best {:.4}, mean {:.4}, diversity {:.2}",
                generation, gen_stats.best_fitness, gen_stats.mean_fitness, gen_stats.diversity
            );
            stats.record(gen_stats);

            observer(generation, &population);
        }

        // No-op after a transition; orders the initial population when no generation ran
        population.sort_by_fitness();
        stats.set_runtime(start_time.elapsed());

        let best = population.get(0).copied();
        match &best {
            Some(best) => info!(
                "best after {} generations: {} ({}), fitness {:.4}",
                self.config.generations,
                best.genome(),
                best.rgb(),
                best.fitness()
            ),
            None => info!("population is empty, nothing evolved"),
        }

        Ok(EvolutionResult {
            best,
            generations: self.config.generations,
            population,
            stats,
        })
    }
}
