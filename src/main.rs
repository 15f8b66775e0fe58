//! u-mixstat CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use u_mixstat::config::MixerParams;
use u_mixstat::pipeline::{run_seeded, run_with_entropy};
use u_mixstat::population::PopulationSpec;
use u_mixstat::render::{render_report, RenderOptions};

#[derive(Parser)]
#[command(name = "u-mixstat")]
#[command(about = "Mix two Gaussian populations and compare mean, median and mode")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// JSON parameter file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mean of population 1 (the base)
    #[arg(long)]
    mean1: Option<f64>,

    /// Std dev of population 1
    #[arg(long)]
    std_dev1: Option<f64>,

    /// Size of population 1
    #[arg(long)]
    size1: Option<usize>,

    /// Mean of population 2 (the challenger)
    #[arg(long)]
    mean2: Option<f64>,

    /// Std dev of population 2
    #[arg(long)]
    std_dev2: Option<f64>,

    /// Size of population 2
    #[arg(long)]
    size2: Option<usize>,

    /// Histogram bins behind the mode estimate
    #[arg(long)]
    bins: Option<usize>,

    /// Seed for reproducible output. Omit for fresh entropy on every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Rows in the text chart
    #[arg(long, default_value_t = RenderOptions::default().display_bins)]
    display_bins: usize,

    /// Print the report as pretty JSON instead of the text chart.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let params = resolve_params(&cli)?;
    tracing::info!(
        seed = ?cli.seed,
        bins = params.bin_count,
        "running mixer"
    );

    let report = match cli.seed {
        Some(seed) => run_seeded(&params, seed),
        None => run_with_entropy(&params),
    }
    .context("mixer run failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let options = RenderOptions {
            display_bins: cli.display_bins,
            ..RenderOptions::default()
        };
        println!("{}", render_report(&report, &options)?);
    }
    Ok(())
}

fn resolve_params(cli: &Cli) -> Result<MixerParams> {
    let base = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            MixerParams::from_json_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => MixerParams::default(),
    };

    let first = override_spec(&base.first, cli.mean1, cli.std_dev1, cli.size1)
        .context("invalid population 1")?;
    let second = override_spec(&base.second, cli.mean2, cli.std_dev2, cli.size2)
        .context("invalid population 2")?;
    let params = MixerParams {
        first,
        second,
        bin_count: cli.bins.unwrap_or(base.bin_count),
    };
    params.validate()?;
    Ok(params)
}

fn override_spec(
    base: &PopulationSpec,
    mean: Option<f64>,
    std_dev: Option<f64>,
    size: Option<usize>,
) -> Result<PopulationSpec, u_mixstat::MixerError> {
    PopulationSpec::new(
        mean.unwrap_or(base.mean()),
        std_dev.unwrap_or(base.std_dev()),
        size.unwrap_or(base.size()),
    )
}
