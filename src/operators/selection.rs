//! Selection operators
//!
//! Binary tournament selection is the single source of selection pressure; every
//! population operator picks its slot through it.

use log::trace;
use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::Target;
use crate::operators::traits::{require_population, PopulationOperator, SelectionOperator};
use crate::population::individual::Chromosome;
use crate::population::population::Population;

/// Binary tournament selection
///
/// Draws two indices uniformly with replacement and keeps the one with the lower
/// (or equal) fitness. When both draws hit the same slot that slot wins outright.
#[derive(Clone, Copy, Debug, Default)]
pub struct TournamentSelection;

impl TournamentSelection {
    /// Create a new binary tournament selection
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(
        &self,
        population: &[Chromosome],
        rng: &mut R,
    ) -> Result<usize, OperatorError> {
        if population.is_empty() {
            return Err(OperatorError::EmptyPopulation {
                operator: "tournament selection",
            });
        }

        let first = rng.gen_range(0..population.len());
        let second = rng.gen_range(0..population.len());

        if first == second || population[first].fitness() <= population[second].fitness() {
            Ok(first)
        } else {
            Ok(second)
        }
    }
}

/// Tournament-based retention
///
/// Selects a slot by tournament and writes its chromosome back into the same slot,
/// so the population is left exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct RetentionSelection {
    selection: TournamentSelection,
}

impl RetentionSelection {
    /// Create a retention step driven by binary tournament
    pub fn new() -> Self {
        Self {
            selection: TournamentSelection,
        }
    }
}

impl PopulationOperator for RetentionSelection {
    /// Index of the retained slot
    type Outcome = usize;

    fn name(&self) -> &'static str {
        "selection"
    }

    fn apply<R: Rng>(
        &self,
        population: &mut Population,
        _target: &Target,
        rng: &mut R,
    ) -> Result<usize, OperatorError> {
        require_population(population, self.name(), 1)?;

        let index = self.selection.select(population.chromosomes(), rng)?;
        let retained = population[index];
        population.replace(index, retained);

        trace!("selection retained slot {}", index);
        Ok(index)
    }
}
