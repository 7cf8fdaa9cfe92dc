//! Evolutionary search for a scalar target value.
//!
//! # Overview
//!
//! - **Individuals** (`individual`): immutable carriers of one DNA value
//! - **Fitness** (`fitness`): absolute and relative fitness against the target
//! - **Population** (`population`): selection, reproduction and mutation
//! - **Search** (`search`): the generational loop with a generation cap
//!
//! # Example
//!
//! ```rust
//! use numeric_ga::evolution::{DnaRng, Population};
//! use numeric_ga::schema::Sampling;
//!
//! let mut population =
//!     Population::with_sampling(10, 0.0, 1000.0, Sampling::Integral, DnaRng::new(42)).unwrap();
//! population.set_target(254.0);
//!
//! let mut generations = 0;
//! while !population.has_found() && generations < 50_000 {
//!     population.generate_mating_pool(6).unwrap();
//!     population.reproduce(10, 2).unwrap();
//!     population.mutate(0.1, 0.2).unwrap();
//!     generations += 1;
//! }
//! ```

mod fitness;
mod individual;
mod population;
mod rng;
mod search;

pub use fitness::{FitnessEvaluator, MAX_RELATIVE_FITNESS};
pub use individual::Individual;
pub use population::{Generation, Population, PopulationError};
pub(crate) use population::{validate_bounds, validate_probability};
pub use rng::DnaRng;
pub use search::SearchEngine;
