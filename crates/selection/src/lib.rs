//! Survey selection under a sin(i) cutoff.
//!
//! The bias engine decides which objects a survey would flag as highly
//! inclined from their measured sin(i) values, reinterpreting noise-invalid
//! measurements through the lower-limit correction. The cutoff evaluator
//! sweeps that decision across a grid of cutoffs to find the one that
//! maximizes the transit hit rate.

pub mod bias;
pub mod cutoff;
pub mod error;

#[cfg(test)]
mod bias_test;
#[cfg(test)]
mod cutoff_test;

pub use bias::{assess, bias, Assessment, Selection, TOP_QUANTILE};
pub use cutoff::{cutoff_grid, evaluate_cutoffs, CutoffSweep, FractionalSweep, TransitYield};
pub use error::ConfigurationError;
