//! Random source owned by a population.

use rand::prelude::*;

use crate::schema::Sampling;

/// 2^63: integers at or beyond this magnitude do not fit in an i64.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Random number generator wrapper for DNA operations.
pub struct DnaRng {
    rng: StdRng,
}

impl DnaRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw a value uniformly from `[low, high]`.
    ///
    /// Callers guarantee `low <= high`, both finite, with a finite width.
    pub fn sample_value(&mut self, low: f64, high: f64, sampling: Sampling) -> f64 {
        match sampling {
            Sampling::Integral => {
                let (min, max) = (low.ceil(), high.floor());
                if min <= max && min >= -I64_LIMIT && max < I64_LIMIT {
                    self.rng.gen_range(min as i64..=max as i64) as f64
                } else if min <= max {
                    self.rng.gen_range(min..=max).round().clamp(min, max)
                } else {
                    // No integer inside the bounds
                    self.rng.gen_range(low..=high)
                }
            }
            Sampling::Continuous => self.rng.gen_range(low..=high),
        }
    }

    /// Returns true with probability `p`.
    ///
    /// `p = 0` never fires and `p = 1` always fires.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.r#gen::<f64>() < p
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_reproducible() {
        let mut a = DnaRng::new(42);
        let mut b = DnaRng::new(42);
        for _ in 0..16 {
            assert_eq!(
                a.sample_value(0.0, 1000.0, Sampling::Continuous),
                b.sample_value(0.0, 1000.0, Sampling::Continuous)
            );
        }
    }

    #[test]
    fn test_integral_sampling() {
        let mut rng = DnaRng::new(7);
        for _ in 0..200 {
            let v = rng.sample_value(-2.5, 3.5, Sampling::Integral);
            assert_eq!(v.fract(), 0.0);
            assert!((-2.0..=3.0).contains(&v));
        }
    }

    #[test]
    fn test_integral_sampling_without_integers() {
        let mut rng = DnaRng::new(7);
        let v = rng.sample_value(0.25, 0.75, Sampling::Integral);
        assert!((0.25..=0.75).contains(&v));
    }

    #[test]
    fn test_integral_sampling_beyond_i64() {
        let mut rng = DnaRng::new(1);
        for _ in 0..100 {
            let v = rng.sample_value(1e19, 2e19, Sampling::Integral);
            assert!((1e19..=2e19).contains(&v));
            assert_eq!(v.fract(), 0.0);

            let v = rng.sample_value(-2e19, -1e19, Sampling::Integral);
            assert!((-2e19..=-1e19).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_bounds() {
        let mut rng = DnaRng::new(1);
        assert_eq!(rng.sample_value(5.0, 5.0, Sampling::Continuous), 5.0);
        assert_eq!(rng.sample_value(5.0, 5.0, Sampling::Integral), 5.0);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = DnaRng::new(3);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }
}
