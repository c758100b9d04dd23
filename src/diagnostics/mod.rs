//! Diagnostics and statistics
//!
//! This module provides statistics collection for evolutionary runs. Fitness is a
//! distance, so "best" always means lowest.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::population::individual::Chromosome;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (0 is the initial population)
    pub generation: usize,
    /// Lowest fitness in this generation
    pub best_fitness: f64,
    /// Highest fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Median fitness
    pub median_fitness: f64,
    /// Fitness standard deviation
    pub fitness_std: f64,
    /// Mean pairwise Hamming distance
    pub diversity: f64,
    /// Best chromosome, as its bit string
    pub best_chromosome: Option<String>,
    /// Time spent on this generation (ms)
    pub elapsed_ms: f64,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population(population: &Population, generation: usize) -> Self {
        let mut fitnesses: Vec<f64> = population.iter().map(Chromosome::fitness).collect();

        if fitnesses.is_empty() {
            return Self {
                generation,
                best_fitness: f64::INFINITY,
                worst_fitness: f64::NEG_INFINITY,
                mean_fitness: 0.0,
                median_fitness: 0.0,
                fitness_std: 0.0,
                diversity: 0.0,
                best_chromosome: None,
                elapsed_ms: 0.0,
            };
        }

        fitnesses.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = fitnesses.len();
        let median = if n % 2 == 0 {
            (fitnesses[n / 2 - 1] + fitnesses[n / 2]) / 2.0
        } else {
            fitnesses[n / 2]
        };

        Self {
            generation,
            best_fitness: fitnesses[0],
            worst_fitness: fitnesses[n - 1],
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            median_fitness: median,
            fitness_std: population.fitness_std().unwrap_or(0.0),
            diversity: population.diversity(),
            best_chromosome: population.best().map(|c| c.genome().to_string()),
            elapsed_ms: 0.0,
        }
    }

    /// Set the time spent on this generation
    pub fn with_elapsed(mut self, duration: Duration) -> Self {
        self.elapsed_ms = duration.as_secs_f64() * 1000.0;
        self
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Lowest fitness seen anywhere in the run
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations
            .iter()
            .map(|g| g.best_fitness)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the final best fitness
    pub fn final_best_fitness(&self) -> Option<f64> {
        self.generations.last().map(|g| g.best_fitness)
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Get the history of diversity values
    pub fn diversity_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.diversity).collect()
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        let best = self.best_fitness().unwrap_or(f64::INFINITY);
        let final_best = self.final_best_fitness().unwrap_or(f64::INFINITY);

        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Best fitness: {:.6}\n\
             - Final best: {:.6}\n\
             - Runtime: {:.2}ms",
            self.num_generations().saturating_sub(1),
            best,
            final_best,
            self.total_runtime_ms,
        )
    }
}

/// Result of an evolution run
#[derive(Clone, Debug)]
pub struct EvolutionResult {
    /// Element 0 of the final sorted population, `None` for an empty population
    pub best: Option<Chromosome>,
    /// Number of generations completed
    pub generations: usize,
    /// The final population, sorted best first
    pub population: Population,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl EvolutionResult {
    /// Fitness of the best chromosome
    pub fn best_fitness(&self) -> Option<f64> {
        self.best.map(|c| c.fitness())
    }
}

pub mod prelude {
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::Target;
    use crate::genome::bit_string::ColorBits;
    use crate::genome::rgb::Rgb;

    fn create_test_population() -> Population {
        let target = Target::new(ColorBits::zeros());
        // Fitnesses 5, 10, 15, 20, 25
        (1..=5u8)
            .map(|k| Chromosome::new(ColorBits::from_rgb(Rgb::new(3 * k, 4 * k, 0)), &target))
            .collect()
    }

    fn stats_with_best(generation: usize, best: f64) -> GenerationStats {
        GenerationStats {
            generation,
            best_fitness: best,
            worst_fitness: best * 2.0,
            mean_fitness: best * 1.5,
            median_fitness: best * 1.5,
            fitness_std: 0.0,
            diversity: 1.0,
            best_chromosome: None,
            elapsed_ms: 0.0,
        }
    }

    #[test]
    fn test_generation_stats_from_population() {
        let pop = create_test_population();
        let stats = GenerationStats::from_population(&pop, 10);

        assert_eq!(stats.generation, 10);
        assert_eq!(stats.best_fitness, 5.0);
        assert_eq!(stats.worst_fitness, 25.0);
        assert_eq!(stats.mean_fitness, 15.0);
        assert_eq!(stats.median_fitness, 15.0);
        assert!(stats.fitness_std > 7.9 && stats.fitness_std < 8.0);
        assert_eq!(
            stats.best_chromosome.as_deref(),
            Some("000000110000010000000000")
        );
    }

    #[test]
    fn test_generation_stats_empty_population() {
        let stats = GenerationStats::from_population(&Population::new(), 0);

        assert_eq!(stats.best_fitness, f64::INFINITY);
        assert_eq!(stats.worst_fitness, f64::NEG_INFINITY);
        assert!(stats.best_chromosome.is_none());
    }

    #[test]
    fn test_evolution_stats_best_is_minimum() {
        let mut stats = EvolutionStats::new();
        for (i, best) in [30.0, 12.0, 18.0, 14.0].into_iter().enumerate() {
            stats.record(stats_with_best(i, best));
        }

        assert_eq!(stats.num_generations(), 4);
        assert_eq!(stats.best_fitness(), Some(12.0));
        assert_eq!(stats.final_best_fitness(), Some(14.0));
        assert_eq!(stats.best_fitness_history(), vec![30.0, 12.0, 18.0, 14.0]);
        assert_eq!(stats.mean_fitness_history(), vec![45.0, 18.0, 27.0, 21.0]);
        assert_eq!(stats.diversity_history(), vec![1.0; 4]);
    }

    #[test]
    fn test_evolution_stats_summary() {
        let mut stats = EvolutionStats::new();
        stats.record(stats_with_best(0, 50.0));
        stats.record(stats_with_best(1, 20.0));
        stats.set_runtime(Duration::from_millis(1234));

        let summary = stats.summary();
        assert!(summary.contains("Generations: 1"));
        assert!(summary.contains("Best fitness: 20"));
        assert!(summary.contains("Runtime: 1234.00ms"));
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = EvolutionStats::new();
        stats.record(GenerationStats::from_population(&create_test_population(), 0));

        let json = serde_json::to_string(&stats).unwrap();
        let restored: EvolutionStats = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.num_generations(), 1);
        assert_eq!(restored.generations[0].best_fitness, 5.0);
        assert_eq!(
            restored.generations[0].best_chromosome,
            stats.generations[0].best_chromosome
        );
    }
}
