//! Numeric GA - evolve scalar individuals toward an exact target value.
//!
//! A population of numbers is repeatedly narrowed to its fittest members,
//! recombined by averaging parents, and perturbed by random resets and unit
//! steps until some individual equals the target exactly.
//!
//! # Architecture
//!
//! - `schema`: Configuration and reporting types
//! - `evolution`: Individuals, fitness, population operators and the search loop
//!
//! # Example
//!
//! ```rust
//! use numeric_ga::{SearchConfig, SearchEngine, StopReason};
//!
//! let config = SearchConfig {
//!     random_seed: Some(42),
//!     max_generations: 50_000,
//!     ..Default::default()
//! };
//!
//! let mut engine = SearchEngine::new(config).unwrap();
//! let result = engine.run().unwrap();
//!
//! if result.stats.stop_reason == StopReason::Converged {
//!     println!("Iterations: {}", result.stats.generations);
//! }
//! ```

pub mod evolution;
pub mod schema;

// Re-export commonly used types
pub use evolution::{DnaRng, Individual, Population, PopulationError, SearchEngine};
pub use schema::{ConfigError, SearchConfig, SearchResult, StopReason};
