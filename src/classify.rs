//! Ordering of mean, median and mode, and the "mode trapped" verdict.
//!
//! The classifier is total: any three reals, ties and equal values
//! included, produce a well-defined ordering.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::stats::SummaryStats;

/// One of the three central-tendency statistics.
///
/// Declaration order is the tie-break priority when two values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Statistic {
    Mean,
    Median,
    Mode,
}

impl Statistic {
    pub fn label(self) -> &'static str {
        match self {
            Statistic::Mean => "Mean",
            Statistic::Median => "Median",
            Statistic::Mode => "Mode",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome shown to the user after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Mode strictly between mean and median.
    ModeTrapped,
    /// Any other arrangement.
    StandardSkew,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::ModeTrapped => "You've trapped the Mode in the middle!",
            Verdict::StandardSkew => "The Median is currently in the middle (Standard Skew).",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The three statistics sorted ascending, plus the betweenness flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderingResult {
    pub order: [(Statistic, f64); 3],
    pub mode_is_middle: bool,
}

impl OrderingResult {
    /// Labels joined with `" < "`, e.g. `"Mean < Median < Mode"`.
    pub fn order_string(&self) -> String {
        self.order
            .iter()
            .map(|(stat, _)| stat.label())
            .collect::<Vec<_>>()
            .join(" < ")
    }

    pub fn labels(&self) -> [Statistic; 3] {
        self.order.map(|(stat, _)| stat)
    }

    pub fn verdict(&self) -> Verdict {
        if self.mode_is_middle {
            Verdict::ModeTrapped
        } else {
            Verdict::StandardSkew
        }
    }
}

/// True iff `median < mode < mean` or `mean < mode < median`.
///
/// Strict on both sides: any equality yields `false`.
pub fn mode_is_middle(mean: f64, median: f64, mode: f64) -> bool {
    (median < mode && mode < mean) || (mean < mode && mode < median)
}

/// Orders the three statistics of `stats` ascending.
///
/// Equal values keep the fixed priority Mean, Median, Mode.
///
/// # Examples
/// ```
/// use u_mixstat::classify::{classify, Statistic};
/// use u_mixstat::stats::SummaryStats;
/// let stats = SummaryStats {
///     mean: 10.0,
///     median: 20.0,
///     mode_estimate: 15.0,
///     histogram_bin_width: 1.0,
/// };
/// let result = classify(&stats);
/// assert!(result.mode_is_middle);
/// assert_eq!(result.labels(), [Statistic::Mean, Statistic::Mode, Statistic::Median]);
/// assert_eq!(result.order_string(), "Mean < Mode < Median");
/// ```
pub fn classify(stats: &SummaryStats) -> OrderingResult {
    let mut order = [
        (Statistic::Mean, stats.mean),
        (Statistic::Median, stats.median),
        (Statistic::Mode, stats.mode_estimate),
    ];
    order.sort_by(|a, b| match a.1.total_cmp(&b.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        unequal => unequal,
    });
    OrderingResult {
        order,
        mode_is_middle: mode_is_middle(stats.mean, stats.median, stats.mode_estimate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn stats(mean: f64, median: f64, mode: f64) -> SummaryStats {
        SummaryStats {
            mean,
            median,
            mode_estimate: mode,
            histogram_bin_width: 1.0,
        }
    }

    #[test]
    fn test_mode_between_mean_and_median() {
        let r = classify(&stats(10.0, 20.0, 15.0));
        assert!(r.mode_is_middle);
        assert_eq!(r.order_string(), "Mean < Mode < Median");
        assert_eq!(r.verdict(), Verdict::ModeTrapped);
        assert_eq!(r.order[1], (Statistic::Mode, 15.0));
    }

    #[test]
    fn test_mode_between_median_and_mean() {
        let r = classify(&stats(20.0, 10.0, 15.0));
        assert!(r.mode_is_middle);
        assert_eq!(r.order_string(), "Median < Mode < Mean");
    }

    #[test]
    fn test_mode_on_the_outside() {
        let r = classify(&stats(10.0, 15.0, 20.0));
        assert!(!r.mode_is_middle);
        assert_eq!(r.order_string(), "Mean < Median < Mode");
        assert_eq!(r.verdict(), Verdict::StandardSkew);
    }

    #[test]
    fn test_equalities_are_not_middle() {
        assert!(!classify(&stats(10.0, 20.0, 10.0)).mode_is_middle);
        assert!(!classify(&stats(10.0, 20.0, 20.0)).mode_is_middle);
        assert!(!classify(&stats(15.0, 15.0, 15.0)).mode_is_middle);
    }

    #[test]
    fn test_all_equal_uses_priority_order() {
        let r = classify(&stats(5.0, 5.0, 5.0));
        assert_eq!(r.labels(), [Statistic::Mean, Statistic::Median, Statistic::Mode]);
        assert!(!r.mode_is_middle);
    }

    #[test]
    fn test_partial_tie_uses_priority_order() {
        let r = classify(&stats(7.0, 3.0, 3.0));
        assert_eq!(r.order_string(), "Median < Mode < Mean");
        let r = classify(&stats(3.0, 7.0, 3.0));
        assert_eq!(r.order_string(), "Mean < Mode < Median");
        assert!(!r.mode_is_middle);
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(
            Verdict::ModeTrapped.to_string(),
            "You've trapped the Mode in the middle!"
        );
        assert_eq!(
            Verdict::StandardSkew.to_string(),
            "The Median is currently in the middle (Standard Skew)."
        );
    }
}
