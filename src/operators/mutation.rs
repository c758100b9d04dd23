//! Mutation operators
//!
//! Both operators pick one slot by tournament and overwrite it with a perturbed copy:
//! a single flipped bit for [`BitFlipMutation`], every bit flipped for [`NewBlood`].

use log::trace;
use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::Target;
use crate::genome::bit_string::CHROMOSOME_LEN;
use crate::operators::selection::TournamentSelection;
use crate::operators::traits::{require_population, PopulationOperator, SelectionOperator};
use crate::population::individual::Chromosome;
use crate::population::population::Population;

/// What a single mutation did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationRecord {
    /// The mutated slot
    pub index: usize,
    /// The flipped bit
    pub point: usize,
}

/// Single bit-flip mutation
///
/// Flips exactly one bit, chosen uniformly over the whole chromosome.
#[derive(Clone, Debug, Default)]
pub struct BitFlipMutation {
    selection: TournamentSelection,
}

impl BitFlipMutation {
    /// Create a bit-flip mutation driven by binary tournament
    pub fn new() -> Self {
        Self {
            selection: TournamentSelection,
        }
    }
}

impl PopulationOperator for BitFlipMutation {
    type Outcome = MutationRecord;

    fn name(&self) -> &'static str {
        "mutation"
    }

    fn apply<R: Rng>(
        &self,
        population: &mut Population,
        target: &Target,
        rng: &mut R,
    ) -> Result<MutationRecord, OperatorError> {
        require_population(population, self.name(), 1)?;

        let index = self.selection.select(population.chromosomes(), rng)?;
        let point = rng.gen_range(0..CHROMOSOME_LEN);
        let mutated = Chromosome::new(population[index].genome().flipped(point), target);
        population.replace(index, mutated);

        trace!("mutation flipped bit {} of slot {}", point, index);
        Ok(MutationRecord { index, point })
    }
}

/// New blood
///
/// Replaces a tournament-selected chromosome with its bitwise complement, the
/// chromosome at maximal Hamming distance from it.
#[derive(Clone, Debug, Default)]
pub struct NewBlood {
    selection: TournamentSelection,
}

impl NewBlood {
    /// Create a new-blood operator driven by binary tournament
    pub fn new() -> Self {
        Self {
            selection: TournamentSelection,
        }
    }
}

impl PopulationOperator for NewBlood {
    /// Index of the complemented slot
    type Outcome = usize;

    fn name(&self) -> &'static str {
        "new blood"
    }

    fn apply<R: Rng>(
        &self,
        population: &mut Population,
        target: &Target,
        rng: &mut R,
    ) -> Result<usize, OperatorError> {
        require_population(population, self.name(), 1)?;

        let index = self.selection.select(population.chromosomes(), rng)?;
        let inverted = Chromosome::new(population[index].genome().complement(), target);
        population.replace(index, inverted);

        trace!("new blood complemented slot {}", index);
        Ok(index)
    }
}
