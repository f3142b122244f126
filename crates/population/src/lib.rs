//! Synthetic populations of rapidly rotating dwarfs.
//!
//! Generates brown-dwarf and M-dwarf populations with isotropically
//! distributed inclinations, attaches simulated planets with geometrically
//! determined transit visibility, and derives the noisy "measured" sin(i)
//! values a spectroscopic survey would work from.

pub mod generation;
pub mod mdwarf;
pub mod observable;
pub mod sampling;


pub use generation::{generate_population, GenerationError, PopulationConfig};
pub use mdwarf::{a_over_r, MdwarfPlanetTable};
pub use observable::{PlanetAssignment, Population, StellarObservable};
pub use sampling::{
    sample_period, sample_radius, DwarfMode, InclinationCdf, JUPITER_RADIUS_KM, MDWARF_RADIUS_KM,
    SOLAR_RADIUS_KM,
};
