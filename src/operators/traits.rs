//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.

use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::Target;
use crate::population::individual::Chromosome;
use crate::population::population::Population;

/// Selection operator trait
///
/// Picks one slot of a population for an operator to work on.
pub trait SelectionOperator {
    /// Select a single chromosome from the population
    ///
    /// Returns the index of the selected chromosome.
    fn select<R: Rng>(&self, population: &[Chromosome], rng: &mut R)
        -> Result<usize, OperatorError>;
}

/// An operator that rewrites population slots in place
///
/// Every replaced slot receives a freshly evaluated chromosome; the previous
/// occupant is discarded.
pub trait PopulationOperator {
    /// What the operator reports about a single application
    type Outcome;

    /// Short name used in errors and logs
    fn name(&self) -> &'static str;

    /// Apply the operator once
    fn apply<R: Rng>(
        &self,
        population: &mut Population,
        target: &Target,
        rng: &mut R,
    ) -> Result<Self::Outcome, OperatorError>;

    /// Apply the operator `count` times in sequence, each time on the current state
    fn apply_n<R: Rng>(
        &self,
        count: usize,
        population: &mut Population,
        target: &Target,
        rng: &mut R,
    ) -> Result<(), OperatorError> {
        for _ in 0..count {
            self.apply(population, target, rng)?;
        }
        Ok(())
    }
}

/// Fail unless the population holds at least `required` chromosomes
pub(crate) fn require_population(
    population: &Population,
    operator: &'static str,
    required: usize,
) -> Result<(), OperatorError> {
    match population.len() {
        0 if required == 1 => Err(OperatorError::EmptyPopulation { operator }),
        actual if actual < required => Err(OperatorError::PopulationTooSmall {
            operator,
            required,
            actual,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::bit_string::ColorBits;

    // Mock selection operator for testing
    struct FirstSlot;

    impl SelectionOperator for FirstSlot {
        fn select<R: Rng>(
            &self,
            population: &[Chromosome],
            _rng: &mut R,
        ) -> Result<usize, OperatorError> {
            if population.is_empty() {
                Err(OperatorError::EmptyPopulation { operator: "mock" })
            } else {
                Ok(0)
            }
        }
    }

    // Mock operator that complements slot 0
    struct InvertFirst;

    impl PopulationOperator for InvertFirst {
        type Outcome = ();

        fn name(&self) -> &'static str {
            "invert first"
        }

        fn apply<R: Rng>(
            &self,
            population: &mut Population,
            target: &Target,
            rng: &mut R,
        ) -> Result<(), OperatorError> {
            let index = FirstSlot.select(population.chromosomes(), rng)?;
            let inverted = Chromosome::new(population[index].genome().complement(), target);
            population.replace(index, inverted);
            Ok(())
        }
    }

    #[test]
    fn test_apply_n_is_sequential() {
        let mut rng = rand::thread_rng();
        let target = Target::new(ColorBits::zeros());
        let mut pop =
            Population::from_chromosomes(vec![Chromosome::new(ColorBits::zeros(), &target)]);

        InvertFirst.apply_n(3, &mut pop, &target, &mut rng).unwrap();
        assert_eq!(*pop[0].genome(), ColorBits::ones());

        InvertFirst.apply_n(1, &mut pop, &target, &mut rng).unwrap();
        assert_eq!(*pop[0].genome(), ColorBits::zeros());
    }

    #[test]
    fn test_apply_n_zero_times_on_empty_population() {
        let mut rng = rand::thread_rng();
        let target = Target::new(ColorBits::zeros());
        let mut pop = Population::new();
        assert!(InvertFirst.apply_n(0, &mut pop, &target, &mut rng).is_ok());
        assert!(InvertFirst.apply_n(1, &mut pop, &target, &mut rng).is_err());
    }

    #[test]
    fn test_require_population() {
        let target = Target::new(ColorBits::zeros());
        let empty = Population::new();
        let single =
            Population::from_chromosomes(vec![Chromosome::new(ColorBits::zeros(), &target)]);

        assert_eq!(
            require_population(&empty, "mutation", 1),
            Err(OperatorError::EmptyPopulation { operator: "mutation" })
        );
        assert_eq!(
            require_population(&single, "crossover", 2),
            Err(OperatorError::PopulationTooSmall {
                operator: "crossover",
                required: 2,
                actual: 1
            })
        );
        assert!(require_population(&single, "mutation", 1).is_ok());
    }
}
