//! Configuration types for a numeric search run.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::evolution::{PopulationError, validate_bounds, validate_probability};

fn default_max_generations() -> usize {
    10_000
}

/// Top-level search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Initial population settings.
    #[serde(default)]
    pub population: PopulationConfig,
    /// Value the search converges on.
    pub target: f64,
    /// Per-generation operator settings.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Stop after this many generations without convergence.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population: PopulationConfig::default(),
            target: 254.0,
            generation: GenerationConfig::default(),
            max_generations: default_max_generations(),
            random_seed: None,
        }
    }
}

/// How values are drawn from the population bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Any real value in `[low, high]`.
    Continuous,
    /// Whole numbers in `[low, high]`.
    #[default]
    Integral,
}

/// Initial population settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Number of individuals.
    pub size: usize,
    /// Smallest value drawn for a fresh individual.
    pub low_bound: f64,
    /// Largest value drawn for a fresh individual.
    pub high_bound: f64,
    #[serde(default)]
    pub sampling: Sampling,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 10,
            low_bound: 0.0,
            high_bound: 1000.0,
            sampling: Sampling::default(),
        }
    }
}

/// Operator settings applied every generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Fittest individuals kept for mating.
    pub pool_size: usize,
    /// Children produced from the mating pool.
    pub offspring_size: usize,
    /// Parents averaged into each child.
    pub mating_partners: usize,
    /// Chance (0-1) to reset an individual to a fresh bound sample.
    pub random_chance: f64,
    /// Chance (0-1), checked twice, to step an individual by +1 and by -1.
    pub increment_chance: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            pool_size: 6,
            offspring_size: 10,
            mating_partners: 2,
            random_chance: 0.1,
            increment_chance: 0.2,
        }
    }
}

/// Search configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid population configuration: {0}")]
    Population(#[from] PopulationError),
    #[error("Target must be finite, got {0}")]
    InvalidTarget(f64),
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SearchConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Validate every parameter before a run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pop = &self.population;
        let generation = &self.generation;

        if pop.size < 1 {
            return Err(PopulationError::EmptyPopulation.into());
        }
        validate_bounds(pop.low_bound, pop.high_bound)?;
        if !self.target.is_finite() {
            return Err(ConfigError::InvalidTarget(self.target));
        }
        if generation.pool_size < 1 {
            return Err(PopulationError::EmptyMatingPool.into());
        }
        if generation.offspring_size < 1 {
            return Err(PopulationError::EmptyOffspring.into());
        }
        // The first pool is cut from the initial population, later ones from offspring
        let available = pop.size.min(generation.offspring_size);
        if generation.pool_size > available {
            return Err(PopulationError::MatingPoolTooLarge {
                requested: generation.pool_size,
                available,
            }
            .into());
        }
        if generation.mating_partners < 1 {
            return Err(PopulationError::NoMatingPartners.into());
        }
        validate_probability("random_chance", generation.random_chance)?;
        validate_probability("increment_chance", generation.increment_chance)?;

        Ok(())
    }
}
