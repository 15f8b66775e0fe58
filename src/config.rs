//! Mixer parameters: the six population controls plus the bin count.
//!
//! Parameters arrive from a front end (CLI flags or a JSON document) and
//! are checked against the control ranges before any sampling happens.
//!
//! # Ranges
//!
//! | Parameter | Range |
//! |---|---|
//! | `mean` (both) | [0, 100] |
//! | `std_dev` (both) | [1, 30] |
//! | `first.size` | [100, 5000] |
//! | `second.size` | [10, 5000] |
//! | `bin_count` | [1, 10000] |

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::MixerError;
use crate::population::PopulationSpec;
use crate::stats::DEFAULT_BIN_COUNT;

pub const MEAN_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const STD_DEV_RANGE: RangeInclusive<f64> = 1.0..=30.0;
pub const FIRST_SIZE_RANGE: RangeInclusive<usize> = 100..=5000;
pub const SECOND_SIZE_RANGE: RangeInclusive<usize> = 10..=5000;
pub const BIN_COUNT_RANGE: RangeInclusive<usize> = 1..=10_000;

/// Everything one pipeline invocation needs besides its RNG.
///
/// Missing fields in a JSON document take the defaults: the base
/// population N(40, 10²) × 1000, the challenger N(70, 10²) × 500, and
/// 100 histogram bins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MixerParams {
    pub first: PopulationSpec,
    pub second: PopulationSpec,
    pub bin_count: usize,
}

impl Default for MixerParams {
    fn default() -> Self {
        Self {
            first: PopulationSpec::new(40.0, 10.0, 1000).expect("default is in range"),
            second: PopulationSpec::new(70.0, 10.0, 500).expect("default is in range"),
            bin_count: DEFAULT_BIN_COUNT,
        }
    }
}

impl MixerParams {
    /// Parses and validates a JSON parameter document.
    ///
    /// # Examples
    /// ```
    /// use u_mixstat::config::MixerParams;
    /// let p = MixerParams::from_json_str(r#"{"second": {"mean": 20, "std_dev": 5, "size": 300}}"#).unwrap();
    /// assert_eq!(p.second.mean(), 20.0);
    /// assert_eq!(p.first, MixerParams::default().first);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, MixerError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks every parameter against its control range.
    ///
    /// # Errors
    /// Returns `InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<(), MixerError> {
        check_population(
            ["first.mean", "first.std_dev", "first.size"],
            &self.first,
            &FIRST_SIZE_RANGE,
        )?;
        check_population(
            ["second.mean", "second.std_dev", "second.size"],
            &self.second,
            &SECOND_SIZE_RANGE,
        )?;
        check_range("bin_count", self.bin_count, &BIN_COUNT_RANGE)
    }
}

fn check_population(
    [mean, std_dev, size]: [&'static str; 3],
    spec: &PopulationSpec,
    size_range: &RangeInclusive<usize>,
) -> Result<(), MixerError> {
    check_range(mean, spec.mean(), &MEAN_RANGE)?;
    check_range(std_dev, spec.std_dev(), &STD_DEV_RANGE)?;
    check_range(size, spec.size(), size_range)
}

pub(crate) fn check_range<T>(name: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), MixerError>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(MixerError::invalid(
            name,
            format!(
                "{value} is outside [{}, {}]",
                range.start(),
                range.end()
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(mean: f64, std_dev: f64, size: usize) -> PopulationSpec {
        PopulationSpec::new(mean, std_dev, size).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        let p = MixerParams::default();
        assert!(p.validate().is_ok());
        assert_eq!(p.first, spec(40.0, 10.0, 1000));
        assert_eq!(p.second, spec(70.0, 10.0, 500));
        assert_eq!(p.bin_count, 100);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let p = MixerParams {
            first: spec(0.0, 1.0, 100),
            second: spec(100.0, 30.0, 10),
            bin_count: 1,
        };
        assert!(p.validate().is_ok());
        let p = MixerParams {
            first: spec(100.0, 30.0, 5000),
            second: spec(0.0, 1.0, 5000),
            bin_count: 10_000,
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_names_field() {
        let cases = [
            (
                MixerParams {
                    first: spec(101.0, 10.0, 1000),
                    ..MixerParams::default()
                },
                "first.mean",
            ),
            (
                MixerParams {
                    first: spec(40.0, 0.5, 1000),
                    ..MixerParams::default()
                },
                "first.std_dev",
            ),
            (
                MixerParams {
                    first: spec(40.0, 10.0, 99),
                    ..MixerParams::default()
                },
                "first.size",
            ),
            (
                MixerParams {
                    second: spec(-1.0, 10.0, 500),
                    ..MixerParams::default()
                },
                "second.mean",
            ),
            (
                MixerParams {
                    second: spec(70.0, 31.0, 500),
                    ..MixerParams::default()
                },
                "second.std_dev",
            ),
            (
                MixerParams {
                    second: spec(70.0, 10.0, 9),
                    ..MixerParams::default()
                },
                "second.size",
            ),
            (
                MixerParams {
                    bin_count: 0,
                    ..MixerParams::default()
                },
                "bin_count",
            ),
        ];
        for (params, field) in cases {
            match params.validate() {
                Err(MixerError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("expected {field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_second_population_allows_smaller_size() {
        let p = MixerParams {
            second: spec(70.0, 10.0, 10),
            ..MixerParams::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_document() {
        let p = MixerParams::from_json_str(r#"{"bin_count": 50}"#).unwrap();
        assert_eq!(p.bin_count, 50);
        assert_eq!(p.first, MixerParams::default().first);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = MixerParams::from_json_str(
            r#"{"first": {"mean": 40, "std_dev": 10, "size": 20000}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MixerError::InvalidParameter { name: "first.size", .. }));

        let err = MixerParams::from_json_str(r#"{"first": {"mean": 40, "std_dev": 0, "size": 200}}"#)
            .unwrap_err();
        assert!(matches!(err, MixerError::Config(_)));

        let err = MixerParams::from_json_str(r#"{"third": {}}"#).unwrap_err();
        assert!(matches!(err, MixerError::Config(_)));
    }

    #[test]
    fn test_json_round_trip_shape() {
        let json = serde_json::to_value(MixerParams::default()).unwrap();
        assert_eq!(json["first"]["mean"], 40.0);
        assert_eq!(json["second"]["size"], 500);
        assert_eq!(json["bin_count"], 100);
    }
}
