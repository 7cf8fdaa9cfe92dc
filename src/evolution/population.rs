//! The current generation and the operators that replace it.
//!
//! A search run moves through `initialized -> (select -> reproduce ->
//! mutate)* -> converged`. Each operator builds a new [`Generation`] and
//! swaps it into the population, so snapshots handed out earlier stay valid.

use std::sync::Arc;

use crate::schema::{IndividualReport, Sampling};

use super::fitness::FitnessEvaluator;
use super::individual::Individual;
use super::rng::DnaRng;

/// Immutable snapshot of one generation's individuals.
pub type Generation = Arc<[Individual]>;

/// Invalid population or operator parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PopulationError {
    #[error("Population size must be at least 1")]
    EmptyPopulation,
    #[error("Invalid bounds: low ({low}) must be <= high ({high}) with a finite range")]
    InvalidBounds { low: f64, high: f64 },
    #[error("At least one mating partner is required")]
    NoMatingPartners,
    #[error("Mating pool must keep at least one individual")]
    EmptyMatingPool,
    #[error("Mating pool of {requested} exceeds population of {available}")]
    MatingPoolTooLarge { requested: usize, available: usize },
    #[error("Offspring size must be at least 1")]
    EmptyOffspring,
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
}

/// A population of scalar individuals searching for a target value.
pub struct Population {
    individuals: Generation,
    evaluator: FitnessEvaluator,
    low_bound: f64,
    high_bound: f64,
    sampling: Sampling,
    found: bool,
    rng: DnaRng,
}

impl Population {
    /// Create `size` individuals drawn uniformly from `[low_bound, high_bound]`.
    pub fn new(
        size: usize,
        low_bound: f64,
        high_bound: f64,
        rng: DnaRng,
    ) -> Result<Self, PopulationError> {
        Self::with_sampling(size, low_bound, high_bound, Sampling::Continuous, rng)
    }

    /// Like [`Population::new`], choosing how bound samples are drawn.
    pub fn with_sampling(
        size: usize,
        low_bound: f64,
        high_bound: f64,
        sampling: Sampling,
        mut rng: DnaRng,
    ) -> Result<Self, PopulationError> {
        if size < 1 {
            return Err(PopulationError::EmptyPopulation);
        }
        validate_bounds(low_bound, high_bound)?;

        let individuals = (0..size)
            .map(|_| Individual::new(rng.sample_value(low_bound, high_bound, sampling)))
            .collect();

        Ok(Self {
            individuals,
            evaluator: FitnessEvaluator::new(0.0),
            low_bound,
            high_bound,
            sampling,
            found: false,
            rng,
        })
    }

    /// Replace the search target.
    ///
    /// The found flag is kept: it records that this run has converged.
    pub fn set_target(&mut self, target: f64) {
        self.evaluator = FitnessEvaluator::new(target);
    }

    pub fn target(&self) -> f64 {
        self.evaluator.target()
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.low_bound, self.high_bound)
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Snapshot of the current generation.
    pub fn individuals(&self) -> Generation {
        Arc::clone(&self.individuals)
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Distance of `individual` from the target.
    pub fn absolute_fitness(&self, individual: &Individual) -> f64 {
        self.evaluator.absolute_fitness(individual)
    }

    /// Smallest distance to the target in the current generation.
    pub fn lowest_fitness(&self) -> f64 {
        self.evaluator.lowest_fitness(&self.individuals)
    }

    /// Fitness of `individual` relative to the current generation's best.
    pub fn relative_fitness(&self, individual: &Individual) -> f64 {
        self.evaluator.relative_fitness(individual, &self.individuals)
    }

    /// Current individuals ordered from most to least fit.
    pub fn rank_by_fitness(&self) -> Vec<Individual> {
        self.evaluator.rank(&self.individuals)
    }

    /// Keep only the `size` fittest individuals.
    pub fn generate_mating_pool(&mut self, size: usize) -> Result<Generation, PopulationError> {
        if size < 1 {
            return Err(PopulationError::EmptyMatingPool);
        }
        if size > self.individuals.len() {
            return Err(PopulationError::MatingPoolTooLarge {
                requested: size,
                available: self.individuals.len(),
            });
        }

        let mut pool = self.rank_by_fitness();
        pool.truncate(size);
        self.individuals = pool.into();
        Ok(self.individuals())
    }

    /// Replace the population with `offspring_size` children.
    ///
    /// Each child's value is the mean of `mating_partners` parents drawn
    /// uniformly with replacement from the current population.
    pub fn reproduce(
        &mut self,
        offspring_size: usize,
        mating_partners: usize,
    ) -> Result<Generation, PopulationError> {
        if mating_partners < 1 {
            return Err(PopulationError::NoMatingPartners);
        }
        if offspring_size < 1 {
            return Err(PopulationError::EmptyOffspring);
        }

        let parents = &self.individuals;
        let rng = &mut self.rng;
        let offspring: Vec<Individual> = (0..offspring_size)
            .map(|_| {
                let sum: f64 = (0..mating_partners)
                    .map(|_| parents[rng.pick_index(parents.len())].value())
                    .sum();
                Individual::new(sum / mating_partners as f64)
            })
            .collect();

        self.individuals = offspring.into();
        self.has_found();
        Ok(self.individuals())
    }

    /// Randomly perturb every individual.
    ///
    /// Three independent checks run per individual, in order: reset to a
    /// fresh bound sample with `random_chance`, add 1 with
    /// `increment_chance`, subtract 1 with `increment_chance`.
    pub fn mutate(
        &mut self,
        random_chance: f64,
        increment_chance: f64,
    ) -> Result<Generation, PopulationError> {
        validate_probability("random_chance", random_chance)?;
        validate_probability("increment_chance", increment_chance)?;

        let (low, high, sampling) = (self.low_bound, self.high_bound, self.sampling);
        let rng = &mut self.rng;
        let mutated: Vec<Individual> = self
            .individuals
            .iter()
            .map(|individual| {
                let mut value = individual.value();
                if rng.chance(random_chance) {
                    value = rng.sample_value(low, high, sampling);
                }
                if rng.chance(increment_chance) {
                    value += 1.0;
                }
                if rng.chance(increment_chance) {
                    value -= 1.0;
                }
                Individual::new(value)
            })
            .collect();

        self.individuals = mutated.into();
        self.has_found();
        Ok(self.individuals())
    }

    /// Whether any generation of this run has held an exact match.
    ///
    /// Scans the current generation and latches the flag; once set it never
    /// clears.
    pub fn has_found(&mut self) -> bool {
        if !self.found {
            let target = self.evaluator.target();
            if self.individuals.iter().any(|i| i.value() == target) {
                log::info!("Target {} reached", target);
                self.found = true;
            }
        }
        self.found
    }

    /// The found flag as of the last scan.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Value and fitness metrics for every individual, in current order.
    pub fn report(&self) -> Vec<IndividualReport> {
        let lowest = self.lowest_fitness();
        self.individuals
            .iter()
            .enumerate()
            .map(|(index, individual)| IndividualReport {
                index,
                value: individual.value(),
                absolute_fitness: self.absolute_fitness(individual),
                relative_fitness: self.evaluator.relative_to_lowest(individual, lowest),
            })
            .collect()
    }

    /// Individual closest to the target, earliest wins ties.
    pub fn best(&self) -> Individual {
        let mut best = self.individuals[0];
        for individual in self.individuals.iter().skip(1) {
            if self.absolute_fitness(individual) < self.absolute_fitness(&best) {
                best = *individual;
            }
        }
        best
    }
}

pub(crate) fn validate_bounds(low: f64, high: f64) -> Result<(), PopulationError> {
    if !low.is_finite() || !high.is_finite() || low > high || !(high - low).is_finite() {
        return Err(PopulationError::InvalidBounds { low, high });
    }
    Ok(())
}

pub(crate) fn validate_probability(name: &'static str, value: f64) -> Result<(), PopulationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(PopulationError::InvalidProbability { name, value });
    }
    Ok(())
}
