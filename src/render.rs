//! Plain-text rendering of a [`MixerReport`].
//!
//! The chart is a sideways histogram: one row per display bin, a `#` bar
//! for the observed count, a `*` where the two-population mixture predicts
//! the count should be, and the statistics annotated on the rows they
//! fall in. Every statistic is printed with two decimals.

use crate::config::{check_range, BIN_COUNT_RANGE};
use crate::distributions::Mixture;
use crate::error::MixerError;
use crate::pipeline::MixerReport;
use crate::stats::{histogram, SummaryStats};

/// Layout of the text chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Rows in the chart; independent of the bins behind the mode estimate.
    pub display_bins: usize,
    /// Characters available for the longest bar.
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            display_bins: 30,
            bar_width: 50,
        }
    }
}

/// The three statistics, one per line, two decimals each.
///
/// # Examples
/// ```
/// use u_mixstat::render::summary_text;
/// use u_mixstat::stats::SummaryStats;
/// let s = SummaryStats { mean: 50.0, median: 46.556, mode_estimate: 40.1, histogram_bin_width: 1.0 };
/// assert_eq!(summary_text(&s), "Mean: 50.00\nMedian: 46.56\nMode: 40.10");
/// ```
pub fn summary_text(stats: &SummaryStats) -> String {
    format!(
        "Mean: {:.2}\nMedian: {:.2}\nMode: {:.2}",
        stats.mean, stats.median, stats.mode_estimate
    )
}

/// Chart, summary, ordering and verdict as one block of text.
///
/// # Errors
/// Returns `InvalidParameter` if `options.display_bins` is outside
/// [`BIN_COUNT_RANGE`] or `options.bar_width` is zero.
pub fn render_report(report: &MixerReport, options: &RenderOptions) -> Result<String, MixerError> {
    check_range("display_bins", options.display_bins, &BIN_COUNT_RANGE)?;
    if options.bar_width == 0 {
        return Err(MixerError::invalid("bar_width", "must be > 0, got 0"));
    }
    let mut lines = vec![format!(
        "Combined Population Distribution (n = {})",
        report.sample.len()
    )];
    let mixture = Mixture::from_specs(&report.params.first, &report.params.second);
    lines.extend(chart_rows(report, &mixture, options)?);
    lines.push(format!(
        "  # observed   * expected from the two populations (mean {:.2})",
        mixture.mean()
    ));
    lines.push(String::new());
    lines.push("Stats Summary".to_string());
    lines.push(summary_text(&report.stats));
    lines.push(String::new());
    lines.push(format!("Current Order: {}", report.ordering.order_string()));
    lines.push(report.verdict.message().to_string());
    Ok(lines.join("\n"))
}

fn chart_rows(
    report: &MixerReport,
    mixture: &Mixture,
    options: &RenderOptions,
) -> Result<Vec<String>, MixerError> {
    let hist = histogram(report.sample.values(), options.display_bins)?;

    let expected: Vec<f64> = (0..hist.bin_count())
        .map(|i| mixture.expected_count(hist.edge(i), hist.edge(i + 1)))
        .collect();
    let tallest = hist
        .counts()
        .iter()
        .map(|&c| c as f64)
        .chain(expected.iter().copied())
        .fold(1.0_f64, f64::max);
    let scale = |v: f64| ((v / tallest) * options.bar_width as f64).round() as usize;

    let markers = [
        ("Mean", report.stats.mean),
        ("Median", report.stats.median),
        ("Mode", report.stats.mode_estimate),
    ];

    let rows = hist
        .counts()
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let mut bar = vec![' '; options.bar_width];
            let filled = scale(count as f64).min(options.bar_width);
            bar[..filled].fill('#');
            if let Some(slot) = scale(expected[i]).checked_sub(1) {
                bar[slot.min(options.bar_width - 1)] = '*';
            }
            let bar: String = bar.into_iter().collect();

            let notes: Vec<String> = markers
                .iter()
                .filter(|(_, value)| hist.bin_of(*value) == Some(i))
                .map(|(label, value)| format!("{label} {value:.2}"))
                .collect();
            let suffix = if notes.is_empty() {
                String::new()
            } else {
                format!("  <- {}", notes.join(", "))
            };
            format!("{:>8.2} |{bar}| {count:>5}{suffix}", hist.edge(i))
        })
        .collect();
    Ok(rows)
}
