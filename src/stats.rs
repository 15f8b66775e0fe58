//! Summary statistics of the combined sample.
//!
//! All functions in this module handle edge cases explicitly; none of them
//! panic on empty, constant, or non-finite input.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation for O(ε) error independent of n.
//! - **Median**: order-statistic median on a sorted copy.
//! - **Mode estimate**: histogram-peak heuristic. Continuous draws never
//!   repeat, so the "mode" reported here is the **left edge** of the
//!   fullest equal-width bin over `[min, max]`. It is not a density
//!   maximum.

use serde::Serialize;

use crate::error::MixerError;

/// Number of histogram bins used for the mode estimate unless overridden.
pub const DEFAULT_BIN_COUNT: usize = 100;

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_mixstat::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter()
        .copied()
        .try_fold(f64::INFINITY, |acc, x| (!x.is_nan()).then(|| acc.min(x)))
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter()
        .copied()
        .try_fold(f64::NEG_INFINITY, |acc, x| (!x.is_nan()).then(|| acc.max(x)))
}

/// Computes the median of `data` without mutating the input.
///
/// Sorts a copy ascending, then returns the middle element (odd length)
/// or the average of the two middle elements (even length).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_mixstat::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Neumaier compensated summation.
///
/// Improved Kahan summation that also handles an addend larger in
/// magnitude than the running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
/// und Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let (sum, compensation) = data.iter().fold((0.0_f64, 0.0_f64), |(sum, c), &x| {
        let t = sum + x;
        let lost = if sum.abs() >= x.abs() {
            (sum - t) + x
        } else {
            (x - t) + sum
        };
        (t, c + lost)
    });
    sum + compensation
}

// ============================================================================
// Histogram
// ============================================================================

/// Equal-width histogram over `[min, max]` of a sample.
///
/// Bins are left-inclusive and right-exclusive, except the last bin which
/// also includes `max`. When every value is identical the histogram
/// collapses to a single bin of width zero holding all values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    lower: f64,
    upper: f64,
    width: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Left edge of the first bin (the sample minimum).
    pub fn lower_edge(&self) -> f64 {
        self.lower
    }

    pub fn bin_width(&self) -> f64 {
        self.width
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Left edge of bin `i`; `edge(bin_count())` is the right edge of the
    /// last bin.
    pub fn edge(&self, i: usize) -> f64 {
        if i >= self.counts.len() {
            self.upper
        } else {
            self.lower + i as f64 * self.width
        }
    }

    /// All `bin_count() + 1` bin edges.
    pub fn edges(&self) -> Vec<f64> {
        (0..=self.counts.len()).map(|i| self.edge(i)).collect()
    }

    /// Bin holding `x`, or `None` if `x` is outside `[lower, upper]`.
    pub fn bin_of(&self, x: f64) -> Option<usize> {
        if !(self.lower..=self.upper).contains(&x) {
            return None;
        }
        let last = self.counts.len() - 1;
        if last == 0 || self.width == 0.0 {
            return Some(0);
        }
        let mut idx = (((x - self.lower) / self.width) as usize).min(last);
        // The division can land one bin off near an edge.
        if x < self.edge(idx) {
            idx -= 1;
        } else if idx < last && x >= self.edge(idx + 1) {
            idx += 1;
        }
        Some(idx)
    }

    /// Index of the fullest bin; ties resolve to the lowest index.
    pub fn peak_bin(&self) -> usize {
        let mut best = 0;
        for (i, &c) in self.counts.iter().enumerate() {
            if c > self.counts[best] {
                best = i;
            }
        }
        best
    }

    /// Left edge of the fullest bin.
    pub fn peak_left_edge(&self) -> f64 {
        self.edge(self.peak_bin())
    }
}

/// Bins `data` into `bin_count` equal-width bins over `[min, max]`.
///
/// # Errors
/// - `EmptySample` if `data` is empty.
/// - `NonFiniteSample` if any value is NaN/Inf.
/// - `InvalidParameter` if `bin_count == 0` or `max − min` overflows.
///
/// # Examples
/// ```
/// use u_mixstat::stats::histogram;
/// let h = histogram(&[0.0, 1.0, 1.5, 2.0], 2).unwrap();
/// assert_eq!(h.counts(), &[1, 3]);
/// assert_eq!(h.edges(), vec![0.0, 1.0, 2.0]);
/// ```
pub fn histogram(data: &[f64], bin_count: usize) -> Result<Histogram, MixerError> {
    if bin_count == 0 {
        return Err(MixerError::invalid("bin_count", "must be > 0, got 0"));
    }
    let (lower, upper) = finite_range(data)?;
    let span = upper - lower;
    if !span.is_finite() {
        return Err(MixerError::invalid(
            "sample",
            format!("range [{lower}, {upper}] overflows f64"),
        ));
    }
    let width = span / bin_count as f64;

    if width == 0.0 {
        return Ok(Histogram {
            lower,
            upper,
            width: 0.0,
            counts: vec![data.len()],
        });
    }

    let mut hist = Histogram {
        lower,
        upper,
        width,
        counts: vec![0; bin_count],
    };
    for &x in data {
        let idx = hist.bin_of(x).expect("value lies within [min, max]");
        hist.counts[idx] += 1;
    }
    Ok(hist)
}

fn finite_range(data: &[f64]) -> Result<(f64, f64), MixerError> {
    if data.is_empty() {
        return Err(MixerError::EmptySample);
    }
    if let Some(index) = data.iter().position(|x| !x.is_finite()) {
        return Err(MixerError::NonFiniteSample { index });
    }
    let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((lo, hi))
}

// ============================================================================
// Summary
// ============================================================================

/// Mean, median and histogram-peak mode estimate of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub mode_estimate: f64,
    /// Width of the bins behind `mode_estimate`; zero for a constant sample.
    pub histogram_bin_width: f64,
}

/// Summarizes a sample with `bin_count` histogram bins for the mode.
///
/// A constant sample is not an error: its histogram is a single
/// zero-width bin, so mean, median and mode all equal that value.
///
/// # Errors
/// - `EmptySample` if `data` is empty.
/// - `NonFiniteSample` if any value is NaN/Inf.
/// - `InvalidParameter` if `bin_count == 0`.
///
/// # Examples
/// ```
/// use u_mixstat::stats::summarize;
/// let s = summarize(&[5.0; 8], 100).unwrap();
/// assert_eq!((s.mean, s.median, s.mode_estimate), (5.0, 5.0, 5.0));
/// assert_eq!(s.histogram_bin_width, 0.0);
/// ```
pub fn summarize(data: &[f64], bin_count: usize) -> Result<SummaryStats, MixerError> {
    let hist = histogram(data, bin_count)?;
    let mean = kahan_sum(data) / data.len() as f64;
    let median = median(data).ok_or(MixerError::EmptySample)?;
    Ok(SummaryStats {
        mean,
        median,
        mode_estimate: hist.peak_left_edge(),
        histogram_bin_width: hist.bin_width(),
    })
}

// ============================================================================
// Tests
// ============================================================================
