//! Gaussian densities for the two-population mixture.
//!
//! The sampler draws through `rand_distr`; the types here provide the
//! analytical side (the CDF) so a renderer can overlay the expected
//! shape of the mixture on top of the realized histogram.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | [`Normal`] | μ, σ | μ | σ² |
//! | [`Mixture`] | two weighted `Normal`s | Σwᵢμᵢ | Σwᵢ(σᵢ²+μᵢ²) − mean² |

use crate::error::MixerError;
use crate::population::PopulationSpec;

/// 1/√(2π) ≈ 0.3989422804014327
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal PDF φ(z) = (1/√(2π)) exp(−z²/2).
fn standard_normal_pdf(z: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal CDF Φ(z).
///
/// # Algorithm
/// Abramowitz & Stegun formula 26.2.17, Horner-evaluated polynomial.
///
/// # Accuracy
/// Maximum absolute error < 7.5 × 10⁻⁸.
fn standard_normal_cdf(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z.is_infinite() {
        return if z > 0.0 { 1.0 } else { 0.0 };
    }
    let a = z.abs();
    let k = 1.0 / (1.0 + 0.231_641_9 * a);
    let poly = k
        * (0.319_381_530
            + k * (-0.356_563_782 + k * (1.781_477_937 + k * (-1.821_255_978 + k * 1.330_274_429))));
    let upper = standard_normal_pdf(a) * poly;
    if z >= 0.0 {
        1.0 - upper
    } else {
        upper
    }
}

// ============================================================================
// Normal Distribution
// ============================================================================

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Mathematical Definition
/// - CDF: Φ((x−μ)/σ)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Creates a new normal distribution N(μ, σ).
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `sigma ≤ 0` or a parameter is not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, MixerError> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(MixerError::invalid(
                "sigma",
                format!("Normal requires finite μ and σ > 0, got μ={mu}, σ={sigma}"),
            ));
        }
        Ok(Self { mu, sigma })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn cdf(&self, x: f64) -> f64 {
        standard_normal_cdf((x - self.mu) / self.sigma)
    }
}

// ============================================================================
// Two-component mixture
// ============================================================================

/// Size-weighted mixture of two normal populations.
///
/// The weights are the population sizes, so [`Mixture::expected_count`]
/// answers "how many of the `n₁ + n₂` draws should land in `[lo, hi)`".
///
/// # Examples
/// ```
/// use u_mixstat::distributions::Mixture;
/// use u_mixstat::population::PopulationSpec;
/// let a = PopulationSpec::new(40.0, 10.0, 1000).unwrap();
/// let b = PopulationSpec::new(70.0, 10.0, 500).unwrap();
/// let mix = Mixture::from_specs(&a, &b);
/// assert!((mix.mean() - 50.0).abs() < 1e-12);
/// let all = mix.expected_count(f64::NEG_INFINITY, f64::INFINITY);
/// assert!((all - 1500.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mixture {
    components: [(Normal, f64); 2],
}

impl Mixture {
    pub fn from_specs(first: &PopulationSpec, second: &PopulationSpec) -> Self {
        Self {
            components: [
                (first.normal(), first.size() as f64),
                (second.normal(), second.size() as f64),
            ],
        }
    }

    /// Total weight (the combined sample size).
    pub fn total(&self) -> f64 {
        self.components.iter().map(|(_, w)| w).sum()
    }

    /// Analytical mean Σwᵢμᵢ / Σwᵢ.
    pub fn mean(&self) -> f64 {
        let weighted: f64 = self.components.iter().map(|(n, w)| n.mu() * w).sum();
        weighted / self.total()
    }

    /// Expected number of draws falling in `[lo, hi)`.
    pub fn expected_count(&self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return 0.0;
        }
        self.components
            .iter()
            .map(|(n, w)| w * (n.cdf(hi) - n.cdf(lo)))
            .sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
