//! Repeated-trial transit-bias experiments.
//!
//! Ties the pipeline together: generate a fresh population per trial, hand
//! it across the catalog boundary, sweep the cutoff grid, and average hit
//! rates over independent trials.

pub mod experiment;


pub use experiment::{run_experiment, run_trial, ExperimentConfig, ExperimentSummary, TrialOutcome};
