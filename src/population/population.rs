//! Population type
//!
//! This module provides the Population container type. Its size is fixed once
//! created; operators overwrite slots by index.

use rand::Rng;

use crate::fitness::Target;
use crate::population::individual::Chromosome;

/// A population of chromosomes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    /// The chromosomes in this population
    chromosomes: Vec<Chromosome>,
    /// Number of generation transitions applied so far
    generation: usize,
}

/// Create `size` random chromosomes evaluated against `target`
pub fn generate_population<R: Rng>(size: usize, target: &Target, rng: &mut R) -> Population {
    Population::random(size, target, rng)
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population from existing chromosomes
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        Self {
            chromosomes,
            generation: 0,
        }
    }

    /// Create a random population
    ///
    /// Every bit of every chromosome is an independent fair coin; duplicates are allowed.
    pub fn random<R: Rng>(size: usize, target: &Target, rng: &mut R) -> Self {
        let chromosomes = (0..size).map(|_| Chromosome::random(target, rng)).collect();
        Self::from_chromosomes(chromosomes)
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Get a chromosome by index
    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.chromosomes.get(index)
    }

    /// Overwrite the slot at `index`, returning its previous occupant
    ///
    /// Returns `None` and leaves the population untouched if `index` is out of range.
    pub fn replace(&mut self, index: usize, chromosome: Chromosome) -> Option<Chromosome> {
        self.chromosomes
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, chromosome))
    }

    /// Get an iterator over the chromosomes
    pub fn iter(&self) -> impl Iterator<Item = &Chromosome> {
        self.chromosomes.iter()
    }

    /// Get the underlying chromosomes
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Take the chromosomes out of this population
    pub fn into_chromosomes(self) -> Vec<Chromosome> {
        self.chromosomes
    }

    /// Get the best chromosome (lowest fitness), first one wins on ties
    pub fn best(&self) -> Option<&Chromosome> {
        self.chromosomes
            .iter()
            .reduce(|best, c| if c.is_better_than(best) { c } else { best })
    }

    /// Get the worst chromosome (highest fitness)
    pub fn worst(&self) -> Option<&Chromosome> {
        self.chromosomes
            .iter()
            .reduce(|worst, c| if worst.is_better_than(c) { c } else { worst })
    }

    /// Sort ascending by fitness, best first. Equal fitnesses keep their relative order.
    pub fn sort_by_fitness(&mut self) {
        self.chromosomes.sort_by(|a, b| a.cmp_fitness(b));
    }

    /// Check whether the population is in ascending fitness order
    pub fn is_sorted_by_fitness(&self) -> bool {
        self.chromosomes
            .windows(2)
            .all(|pair| pair[0].fitness() <= pair[1].fitness())
    }

    /// Compute mean fitness
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.chromosomes.iter().map(|c| c.fitness()).sum::<f64>() / self.len() as f64)
    }

    /// Compute fitness standard deviation
    pub fn fitness_std(&self) -> Option<f64> {
        let mean = self.mean_fitness()?;
        if self.len() < 2 {
            return None;
        }

        let variance = self
            .chromosomes
            .iter()
            .map(|c| (c.fitness() - mean).powi(2))
            .sum::<f64>()
            / (self.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// Compute population diversity (average pairwise Hamming distance)
    pub fn diversity(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }

        let mut total_distance = 0usize;
        let mut count = 0usize;

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total_distance += self.chromosomes[i]
                    .genome()
                    .hamming_distance(self.chromosomes[j].genome());
                count += 1;
            }
        }

        total_distance as f64 / count as f64
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Chromosome;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chromosomes[index]
    }
}

impl FromIterator<Chromosome> for Population {
    fn from_iter<I: IntoIterator<Item = Chromosome>>(iter: I) -> Self {
        Self::from_chromosomes(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}
