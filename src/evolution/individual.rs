//! A single member of the population.

use serde::{Deserialize, Serialize};

/// Immutable carrier of one scalar value (its "DNA").
///
/// Individuals are never changed in place; operations that alter DNA
/// produce a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    value: f64,
}

impl Individual {
    /// Create an individual carrying `value`.
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// The DNA value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl From<f64> for Individual {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
