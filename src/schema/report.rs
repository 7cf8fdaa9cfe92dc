//! Progress and result types reported by a search run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::evolution::MAX_RELATIVE_FITNESS;

/// Value and fitness of one individual.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndividualReport {
    pub index: usize,
    pub value: f64,
    /// Distance from the target.
    pub absolute_fitness: f64,
    /// Population best distance divided by this individual's distance.
    pub relative_fitness: f64,
}

/// State of the population after a generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generations completed so far (0 for the initial population).
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_value: f64,
    pub found: bool,
    pub individuals: Vec<IndividualReport>,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*****LISTING POPULATION ELEMENTS*****")?;
        for individual in &self.individuals {
            write!(
                f,
                "Value #{}\t|Value: {:06.3}\t|Fitness: {:06.3}\t|Rel Fitness: ",
                individual.index, individual.value, individual.absolute_fitness
            )?;
            // Exact matches carry the sentinel, printed by name
            if individual.relative_fitness == MAX_RELATIVE_FITNESS {
                writeln!(f, "MAX")?;
            } else {
                writeln!(f, "{:06.3}", individual.relative_fitness)?;
            }
        }
        write!(f, "*****END LISTING POPULATION*****")
    }
}

/// History for plotting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchHistory {
    /// Best absolute fitness per generation.
    pub best_fitness: Vec<f64>,
    /// Mean DNA value per generation.
    pub mean_value: Vec<f64>,
}

/// Reason the search stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// An individual matched the target exactly.
    Converged,
    /// Reached the generation cap.
    MaxGenerations,
}

/// Statistics from a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    /// Generations run before stopping.
    pub generations: usize,
    pub found: bool,
    /// Closest value in the final population.
    pub best_value: f64,
    pub best_fitness: f64,
    pub elapsed_seconds: f64,
    pub stop_reason: StopReason,
}

/// Final result of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub stats: SearchStats,
    pub history: SearchHistory,
}
