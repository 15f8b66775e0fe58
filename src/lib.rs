//! # u-mixstat
//!
//! Mixes two Gaussian populations and reports where the combined sample's
//! mean, median and histogram-peak mode land relative to one another.
//!
//! The interesting case is a mixture whose peak estimate sits strictly
//! between the mean and the median; most skewed mixtures put the median
//! in the middle instead.
//!
//! ## Modules
//!
//! - [`population`] — Gaussian population specs, sampling, concatenation
//! - [`stats`] — mean, median, histogram and the histogram-peak mode
//! - [`classify`] — ordering of the three statistics and the verdict
//! - [`pipeline`] — one full invocation from parameters to report
//! - [`render`] — text chart and two-decimal summary
//! - [`config`] — the six parameters, their ranges, JSON loading
//! - [`distributions`] — analytical normal and mixture densities
//! - [`random`] — seeded and entropy-seeded generators
//!
//! ## Design Philosophy
//!
//! - **Injected randomness**: every sampler takes `&mut impl Rng`; a fixed
//!   seed reproduces a run exactly
//! - **Explicit edge cases**: constant samples, ties and empty input all
//!   have a defined, tested outcome
//! - **Property-based testing**: invariants verified via proptest

pub mod classify;
pub mod config;
pub mod distributions;
pub mod error;
pub mod pipeline;
pub mod population;
pub mod random;
pub mod render;
pub mod stats;

pub use error::MixerError;
