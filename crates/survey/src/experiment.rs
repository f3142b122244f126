//! Experiment driver: independent trials, averaged hit rates.

use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use catalog::PopulationRecord;
use population::{generate_population, GenerationError, PopulationConfig};
use selection::{cutoff_grid, evaluate_cutoffs, ConfigurationError, CutoffSweep};

/// Parameters for a repeated-trial experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentConfig {
    /// Independent populations to generate and sweep.
    pub trials: usize,
    /// Number of evenly spaced cutoffs on [0, 1].
    pub cutoff_count: usize,
    /// Enable fractional-increase tracking in each sweep.
    pub fractional_increase: bool,
    pub population: PopulationConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 10,
            cutoff_count: 100,
            fractional_increase: false,
            population: PopulationConfig::default(),
        }
    }
}

/// One trial: the persisted population and its cutoff sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome {
    pub record: PopulationRecord,
    pub sweep: CutoffSweep,
}

/// Aggregate over all trials.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentSummary {
    /// The cutoff grid shared by every trial.
    pub cutoffs: Vec<f64>,
    /// Per-cutoff hit rate averaged over trials.
    pub mean_hit_rates: Vec<f64>,
    pub trials: Vec<TrialOutcome>,
}

/// Generate one population and sweep it across the cutoff grid.
///
/// The population crosses the catalog boundary first: the sweep consumes
/// the persisted record's columns, exactly what a later re-analysis of the
/// stored record would see.
pub fn run_trial(
    rng: &mut ChaChaRng,
    cutoffs: &[f64],
    config: &PopulationConfig,
    fractional_increase: bool,
) -> Result<TrialOutcome, GenerationError> {
    let population = generate_population(rng, config)?;
    let record = PopulationRecord::from_population(&population);
    let sweep = evaluate_cutoffs(
        cutoffs,
        &record.sin_is(),
        &record.sin_i_uncertainties(),
        &record.transit_indices,
        fractional_increase,
        config.top_quantile,
    )?;
    Ok(TrialOutcome { record, sweep })
}

/// Run the full experiment: `trials` independent populations, each swept
/// over the same cutoff grid, hit rates averaged per cutoff.
///
/// Trials share no mutable state; each consumes only the RNG stream.
pub fn run_experiment(
    rng: &mut ChaChaRng,
    config: &ExperimentConfig,
) -> Result<ExperimentSummary, GenerationError> {
    if config.trials == 0 {
        return Err(ConfigurationError::NoTrials.into());
    }
    let cutoffs = cutoff_grid(config.cutoff_count)?;
    tracing::debug!(
        trials = config.trials,
        cutoffs = cutoffs.len(),
        "running experiment"
    );

    let mut mean_hit_rates = vec![0.0; cutoffs.len()];
    let mut trials = Vec::with_capacity(config.trials);
    for trial in 0..config.trials {
        tracing::trace!(trial, "generating trial population");
        let outcome = run_trial(rng, &cutoffs, &config.population, config.fractional_increase)?;
        for (mean, rate) in mean_hit_rates.iter_mut().zip(&outcome.sweep.hit_rates) {
            *mean += rate;
        }
        trials.push(outcome);
    }
    for mean in &mut mean_hit_rates {
        *mean /= config.trials as f64;
    }

    Ok(ExperimentSummary {
        cutoffs,
        mean_hit_rates,
        trials,
    })
}
