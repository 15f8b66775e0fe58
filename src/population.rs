//! Gaussian population synthesis.
//!
//! A [`PopulationSpec`] describes one generator; [`generate`] realizes it
//! into a [`Sample`] using a caller-supplied RNG, and [`combine`] merges
//! two samples into the [`CombinedSample`] every downstream statistic is
//! computed on.

use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};

use crate::distributions::Normal;
use crate::error::MixerError;

/// Realized draws from a single population.
pub type Sample = Vec<f64>;

/// Parameters of one Gaussian generator: N(mean, std_dev²) drawn `size` times.
///
/// Construct through [`PopulationSpec::new`] (or deserialize), both of
/// which reject non-positive spreads and empty populations. A value of
/// this type always satisfies those invariants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPopulationSpec")]
pub struct PopulationSpec {
    mean: f64,
    std_dev: f64,
    size: usize,
}

#[derive(Deserialize)]
struct RawPopulationSpec {
    mean: f64,
    std_dev: f64,
    size: usize,
}

impl TryFrom<RawPopulationSpec> for PopulationSpec {
    type Error = MixerError;

    fn try_from(raw: RawPopulationSpec) -> Result<Self, Self::Error> {
        Self::new(raw.mean, raw.std_dev, raw.size)
    }
}

impl PopulationSpec {
    /// Creates a validated population spec.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `std_dev ≤ 0`, `size == 0`, or either
    /// real parameter is not finite.
    ///
    /// # Examples
    /// ```
    /// use u_mixstat::population::PopulationSpec;
    /// assert!(PopulationSpec::new(40.0, 10.0, 1000).is_ok());
    /// assert!(PopulationSpec::new(40.0, 0.0, 1000).is_err());
    /// assert!(PopulationSpec::new(40.0, 10.0, 0).is_err());
    /// ```
    pub fn new(mean: f64, std_dev: f64, size: usize) -> Result<Self, MixerError> {
        let spec = Self {
            mean,
            std_dev,
            size,
        };
        spec.validate()?;
        Ok(spec)
    }

    fn validate(&self) -> Result<(), MixerError> {
        if !self.mean.is_finite() {
            return Err(MixerError::invalid(
                "mean",
                format!("must be finite, got {}", self.mean),
            ));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(MixerError::invalid(
                "std_dev",
                format!("must be finite and > 0, got {}", self.std_dev),
            ));
        }
        if self.size == 0 {
            return Err(MixerError::invalid("size", "must be > 0, got 0"));
        }
        Ok(())
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Analytical distribution of this population.
    pub fn normal(&self) -> Normal {
        Normal::new(self.mean, self.std_dev).expect("validated in PopulationSpec::new")
    }
}

/// Draws `spec.size()` independent values from N(mean, std_dev²).
///
/// The generator is threaded through explicitly; pass
/// [`create_rng`](crate::random::create_rng) for reproducible output.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Examples
/// ```
/// use u_mixstat::population::{generate, PopulationSpec};
/// use u_mixstat::random::create_rng;
/// let spec = PopulationSpec::new(70.0, 10.0, 500).unwrap();
/// let a = generate(&spec, &mut create_rng(7));
/// let b = generate(&spec, &mut create_rng(7));
/// assert_eq!(a.len(), 500);
/// assert_eq!(a, b);
/// ```
pub fn generate<R: Rng + ?Sized>(spec: &PopulationSpec, rng: &mut R) -> Sample {
    let normal = rand_distr::Normal::new(spec.mean, spec.std_dev)
        .expect("validated in PopulationSpec::new");
    (0..spec.size).map(|_| normal.sample(rng)).collect()
}

/// Two samples concatenated, first population first.
///
/// Element order does not affect any statistic; the split point is kept
/// so each population can still be viewed on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedSample {
    values: Vec<f64>,
    split: usize,
}

impl CombinedSample {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Draws belonging to the first population.
    pub fn first(&self) -> &[f64] {
        &self.values[..self.split]
    }

    /// Draws belonging to the second population.
    pub fn second(&self) -> &[f64] {
        &self.values[self.split..]
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for CombinedSample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Concatenates two samples without modifying any element.
///
/// # Examples
/// ```
/// use u_mixstat::population::combine;
/// let c = combine(vec![1.0, 2.0], vec![3.0]);
/// assert_eq!(c.values(), &[1.0, 2.0, 3.0]);
/// assert_eq!(c.second(), &[3.0]);
/// ```
pub fn combine(first: Sample, second: Sample) -> CombinedSample {
    let split = first.len();
    let mut values = first;
    values.extend(second);
    CombinedSample { values, split }
}

// ============================================================================
// Tests
// ============================================================================
