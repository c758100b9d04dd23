//! Chromosome type
//!
//! This module provides the Chromosome type that pairs a 24-bit genome with its fitness.

use std::cmp::Ordering;

use serde::Serialize;

use crate::fitness::Target;
use crate::genome::bit_string::ColorBits;
use crate::genome::rgb::Rgb;

/// A candidate solution in the population
///
/// The fitness is computed when the chromosome is built and the bits cannot be
/// changed afterwards, so the cached score always matches the bits.
/// Serializes for reporting; there is no deserialization, since a decoded score
/// could disagree with its bits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Chromosome {
    genome: ColorBits,
    fitness: f64,
}

impl Chromosome {
    /// Create a chromosome, evaluating it against `target`
    pub fn new(genome: ColorBits, target: &Target) -> Self {
        Self {
            genome,
            fitness: target.evaluate(&genome),
        }
    }

    /// A random chromosome evaluated against `target`
    pub fn random<R: rand::Rng>(target: &Target, rng: &mut R) -> Self {
        Self::new(ColorBits::random(rng), target)
    }

    /// The chromosome's bits
    pub fn genome(&self) -> &ColorBits {
        &self.genome
    }

    /// Distance to the target (lower is better)
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The decoded color
    pub fn rgb(&self) -> Rgb {
        self.genome.to_rgb()
    }

    /// Check if this chromosome is strictly fitter than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.fitness < other.fitness
    }

    /// Ascending fitness order
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        self.fitness
            .partial_cmp(&other.fitness)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.4})", self.genome, self.fitness)
    }
}
