//! Fitness evaluation against a target value.
//!
//! Absolute fitness is the raw distance to the target (lower is better).
//! Relative fitness normalizes the population's best distance by an
//! individual's distance, so the fittest individuals score 1 and everything
//! else falls in `[0, 1)`.

use super::Individual;

/// Relative fitness reported for an individual that matches the target
/// exactly, where the ratio would otherwise divide by zero.
pub const MAX_RELATIVE_FITNESS: f64 = f64::MAX;

/// Evaluates individuals against a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessEvaluator {
    target: f64,
}

impl FitnessEvaluator {
    /// Create a new fitness evaluator.
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Distance from the target. Zero only on an exact match.
    #[inline]
    pub fn absolute_fitness(&self, individual: &Individual) -> f64 {
        (self.target - individual.value()).abs()
    }

    /// Smallest absolute fitness in `individuals`, or `f64::MAX` if empty.
    pub fn lowest_fitness(&self, individuals: &[Individual]) -> f64 {
        individuals
            .iter()
            .map(|i| self.absolute_fitness(i))
            .fold(f64::MAX, f64::min)
    }

    /// Fitness of `individual` relative to the best in `individuals`.
    pub fn relative_fitness(&self, individual: &Individual, individuals: &[Individual]) -> f64 {
        relative(self.lowest_fitness(individuals), self.absolute_fitness(individual))
    }

    /// Relative fitness given a precomputed population best.
    pub fn relative_to_lowest(&self, individual: &Individual, lowest: f64) -> f64 {
        relative(lowest, self.absolute_fitness(individual))
    }

    /// Order `individuals` from highest to lowest relative fitness.
    ///
    /// Equal-fitness individuals keep their original relative order.
    pub fn rank(&self, individuals: &[Individual]) -> Vec<Individual> {
        let lowest = self.lowest_fitness(individuals);
        let mut keyed: Vec<(f64, Individual)> = individuals
            .iter()
            .map(|i| (self.relative_to_lowest(i, lowest), *i))
            .collect();

        // Vec::sort_by is stable
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        keyed.into_iter().map(|(_, i)| i).collect()
    }
}

fn relative(lowest: f64, absolute: f64) -> f64 {
    if absolute == 0.0 {
        MAX_RELATIVE_FITNESS
    } else {
        lowest / absolute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn individuals(values: &[f64]) -> Vec<Individual> {
        values.iter().copied().map(Individual::new).collect()
    }

    #[test]
    fn test_absolute_fitness() {
        let eval = FitnessEvaluator::new(254.0);
        assert_eq!(eval.absolute_fitness(&Individual::new(250.0)), 4.0);
        assert_eq!(eval.absolute_fitness(&Individual::new(260.5)), 6.5);
        assert_eq!(eval.absolute_fitness(&Individual::new(254.0)), 0.0);
    }

    #[test]
    fn test_lowest_fitness() {
        let eval = FitnessEvaluator::new(10.0);
        assert_eq!(eval.lowest_fitness(&individuals(&[0.0, 13.0, 8.0])), 2.0);
        assert_eq!(eval.lowest_fitness(&[]), f64::MAX);
    }

    #[test]
    fn test_relative_fitness() {
        let eval = FitnessEvaluator::new(10.0);
        let pop = individuals(&[6.0, 12.0, 18.0]);
        assert_eq!(eval.relative_fitness(&pop[1], &pop), 1.0);
        assert_eq!(eval.relative_fitness(&pop[0], &pop), 0.5);
        assert_eq!(eval.relative_fitness(&pop[2], &pop), 0.25);
    }

    #[test]
    fn test_exact_match_is_sentinel() {
        let eval = FitnessEvaluator::new(10.0);
        let pop = individuals(&[10.0, 12.0]);
        assert_eq!(eval.relative_fitness(&pop[0], &pop), MAX_RELATIVE_FITNESS);
        assert_eq!(eval.relative_fitness(&pop[1], &pop), 0.0);
    }

    #[test]
    fn test_rank_orders_most_fit_first() {
        let eval = FitnessEvaluator::new(100.0);
        let ranked = eval.rank(&individuals(&[0.0, 100.0, 90.0, 150.0]));
        let values: Vec<f64> = ranked.iter().map(Individual::value).collect();
        assert_eq!(values, vec![100.0, 90.0, 150.0, 0.0]);
    }

    #[test]
    fn test_rank_is_stable() {
        let eval = FitnessEvaluator::new(0.0);
        let ranked = eval.rank(&individuals(&[5.0, -3.0, 3.0, -5.0, 1.0]));
        let values: Vec<f64> = ranked.iter().map(Individual::value).collect();
        assert_eq!(values, vec![1.0, -3.0, 3.0, 5.0, -5.0]);
    }
}
