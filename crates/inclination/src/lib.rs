//! Inclination geometry for spectroscopic rotation measurements.
//!
//! Derives sin(i) and inclination from (vsini, period, radius) triples,
//! propagates measurement uncertainty in quadrature, and applies the 1-sigma
//! lower-limit correction used when noise pushes sin(i) past the physical
//! ceiling of 1.0.

pub mod error;
pub mod geometry;
pub mod lower_limit;


pub use error::DomainError;
pub use geometry::{inclination, sin_inclination, sin_uncertainty};
pub use lower_limit::{corrected_sin_i, lower_limit, lower_limit_inclination};
