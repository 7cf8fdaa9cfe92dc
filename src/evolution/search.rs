//! Generational search loop.

use std::time::Instant;

use crate::schema::{
    ConfigError, GenerationReport, SearchConfig, SearchHistory, SearchResult, SearchStats,
    StopReason,
};

use super::population::{Population, PopulationError};
use super::rng::DnaRng;

/// Runs select, reproduce and mutate until the target is found.
pub struct SearchEngine {
    config: SearchConfig,
    population: Population,
    history: SearchHistory,
    generation: usize,
}

impl SearchEngine {
    /// Validate `config` and build the initial population.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.random_seed {
            Some(seed) => DnaRng::new(seed),
            None => DnaRng::random(),
        };
        let pop = &config.population;
        let mut population =
            Population::with_sampling(pop.size, pop.low_bound, pop.high_bound, pop.sampling, rng)?;
        population.set_target(config.target);

        Ok(Self {
            config,
            population,
            history: SearchHistory::default(),
            generation: 0,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Snapshot of the current population.
    pub fn progress(&self) -> GenerationReport {
        let individuals = self.population.report();
        let mean_value =
            individuals.iter().map(|i| i.value).sum::<f64>() / individuals.len() as f64;

        GenerationReport {
            generation: self.generation,
            best_fitness: self.population.lowest_fitness(),
            mean_value,
            found: self.population.found(),
            individuals,
        }
    }

    /// Run one select, reproduce, mutate cycle.
    pub fn step(&mut self) -> Result<(), PopulationError> {
        let ga = &self.config.generation;
        self.population.generate_mating_pool(ga.pool_size)?;
        self.population.reproduce(ga.offspring_size, ga.mating_partners)?;
        self.population.mutate(ga.random_chance, ga.increment_chance)?;
        self.generation += 1;
        Ok(())
    }

    fn record(&mut self, report: &GenerationReport) {
        self.history.best_fitness.push(report.best_fitness);
        self.history.mean_value.push(report.mean_value);
    }

    /// Run the search with a progress callback.
    ///
    /// The callback sees the initial population and every generation after.
    /// A later call resumes from the current generation with a fresh history.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<SearchResult, PopulationError>
    where
        F: FnMut(&GenerationReport),
    {
        let start_time = Instant::now();
        self.history = SearchHistory::default();

        self.population.has_found();
        let report = self.progress();
        self.record(&report);
        callback(&report);

        let stop_reason = loop {
            if self.population.has_found() {
                break StopReason::Converged;
            }
            if self.generation >= self.config.max_generations {
                log::warn!(
                    "No exact match for {} after {} generations",
                    self.config.target,
                    self.generation
                );
                break StopReason::MaxGenerations;
            }

            self.step()?;

            let report = self.progress();
            log::debug!(
                "Generation {}: best fitness = {:.3}",
                report.generation,
                report.best_fitness
            );
            self.record(&report);
            callback(&report);
        };

        let best = self.population.best();
        let stats = SearchStats {
            generations: self.generation,
            found: stop_reason == StopReason::Converged,
            best_value: best.value(),
            best_fitness: self.population.absolute_fitness(&best),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
            stop_reason,
        };
        log::info!(
            "Search stopped after {} generations ({:?})",
            stats.generations,
            stats.stop_reason
        );

        Ok(SearchResult {
            stats,
            history: self.history.clone(),
        })
    }

    /// Run the search (blocking).
    pub fn run(&mut self) -> Result<SearchResult, PopulationError> {
        self.run_with_callback(|_| {})
    }
}
