//! Crossover operators
//!
//! This module provides single-point crossover over two tournament-selected parents.

use log::trace;
use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::Target;
use crate::genome::bit_string::CHROMOSOME_LEN;
use crate::operators::selection::TournamentSelection;
use crate::operators::traits::{require_population, PopulationOperator, SelectionOperator};
use crate::population::individual::Chromosome;
use crate::population::population::Population;

/// Smallest crossover point; both parents always contribute at least one bit
pub const MIN_CROSSPOINT: usize = 1;

/// Largest crossover point
pub const MAX_CROSSPOINT: usize = CHROMOSOME_LEN - 2;

/// What a single crossover did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossoverRecord {
    /// Slot of the first parent, now holding the first child
    pub first: usize,
    /// Slot of the second parent, now holding the second child
    pub second: usize,
    /// Bits before this point come from the slot's own parent
    pub crosspoint: usize,
}

/// Single-point crossover
///
/// Picks two distinct parents by tournament and a crosspoint in
/// `[MIN_CROSSPOINT, MAX_CROSSPOINT]`. The first child takes the first parent's
/// prefix and the second parent's suffix, the second child the reverse. Each child
/// overwrites its parent's slot.
#[derive(Clone, Debug, Default)]
pub struct SinglePointCrossover {
    selection: TournamentSelection,
}

impl SinglePointCrossover {
    /// Create a crossover driven by binary tournament
    pub fn new() -> Self {
        Self {
            selection: TournamentSelection,
        }
    }
}

/// Recombine two parents at `crosspoint`, evaluating both children
pub fn recombine(
    parent1: &Chromosome,
    parent2: &Chromosome,
    crosspoint: usize,
    target: &Target,
) -> (Chromosome, Chromosome) {
    let child1 = parent1.genome().splice(parent2.genome(), crosspoint);
    let child2 = parent2.genome().splice(parent1.genome(), crosspoint);
    (
        Chromosome::new(child1, target),
        Chromosome::new(child2, target),
    )
}

impl PopulationOperator for SinglePointCrossover {
    type Outcome = CrossoverRecord;

    fn name(&self) -> &'static str {
        "crossover"
    }

    fn apply<R: Rng>(
        &self,
        population: &mut Population,
        target: &Target,
        rng: &mut R,
    ) -> Result<CrossoverRecord, OperatorError> {
        // Two distinct slots are needed or the redraw below never ends
        require_population(population, self.name(), 2)?;

        let first = self.selection.select(population.chromosomes(), rng)?;
        let mut second = self.selection.select(population.chromosomes(), rng)?;
        while second == first {
            second = self.selection.select(population.chromosomes(), rng)?;
        }

        let crosspoint = rng.gen_range(MIN_CROSSPOINT..=MAX_CROSSPOINT);
        let (child1, child2) =
            recombine(&population[first], &population[second], crosspoint, target);

        population.replace(first, child1);
        population.replace(second, child2);

        trace!(
            "crossover of slots {} and {} at bit {}",
            first,
            second,
            crosspoint
        );
        Ok(CrossoverRecord {
            first,
            second,
            crosspoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::bit_string::ColorBits;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_parents(target: &Target) -> Population {
        Population::from_chromosomes(vec![
            Chromosome::new(ColorBits::ones(), target),
            Chromosome::new(ColorBits::zeros(), target),
        ])
    }

    #[test]
    fn test_recombine() {
        let target = Target::new(ColorBits::zeros());
        let ones = Chromosome::new(ColorBits::ones(), &target);
        let zeros = Chromosome::new(ColorBits::zeros(), &target);

        let (child1, child2) = recombine(&ones, &zeros, 10, &target);
        assert_eq!(child1.genome().to_string(), "111111111100000000000000");
        assert_eq!(child2.genome().to_string(), "000000000011111111111111");
        assert_eq!(child1.fitness(), target.evaluate(child1.genome()));
        assert_eq!(child2.fitness(), target.evaluate(child2.genome()));
    }

    #[test]
    fn test_crossover_overwrites_both_parents() {
        let mut rng = StdRng::seed_from_u64(5);
        let target = Target::new(ColorBits::zeros());
        let mut pop = two_parents(&target);
        let before = pop.clone();

        let record = SinglePointCrossover::new()
            .apply(&mut pop, &target, &mut rng)
            .unwrap();

        assert_ne!(record.first, record.second);
        assert!((MIN_CROSSPOINT..=MAX_CROSSPOINT).contains(&record.crosspoint));
        assert_eq!(pop.len(), 2);

        let p1 = before[record.first].genome();
        let p2 = before[record.second].genome();
        let c1 = pop[record.first].genome();
        let c2 = pop[record.second].genome();
        for i in 0..CHROMOSOME_LEN {
            if i < record.crosspoint {
                assert_eq!(c1[i], p1[i]);
                assert_eq!(c2[i], p2[i]);
            } else {
                assert_eq!(c1[i], p2[i]);
                assert_eq!(c2[i], p1[i]);
            }
        }
    }

    #[test]
    fn test_crosspoint_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        let target = Target::new(ColorBits::zeros());
        let crossover = SinglePointCrossover::new();

        for _ in 0..500 {
            let mut pop = two_parents(&target);
            let record = crossover.apply(&mut pop, &target, &mut rng).unwrap();
            // Both children mix ones and zeros
            assert!(pop[0].genome().count_ones() > 0);
            assert!(pop[0].genome().count_ones() < CHROMOSOME_LEN);
            assert!(record.crosspoint >= 1 && record.crosspoint <= 22);
        }
    }

    #[test]
    fn test_crossover_rejects_single_chromosome() {
        let mut rng = StdRng::seed_from_u64(0);
        let target = Target::new(ColorBits::zeros());
        let mut pop =
            Population::from_chromosomes(vec![Chromosome::new(ColorBits::ones(), &target)]);

        let err = SinglePointCrossover::new()
            .apply(&mut pop, &target, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            OperatorError::PopulationTooSmall {
                operator: "crossover",
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_crossover_rejects_empty_population() {
        let mut rng = StdRng::seed_from_u64(0);
        let target = Target::new(ColorBits::zeros());
        let mut pop = Population::new();
        assert!(SinglePointCrossover::new()
            .apply(&mut pop, &target, &mut rng)
            .is_err());
    }
}
