use population::{Population, StellarObservable};

use crate::dump::PopulationDump;
use crate::error::FormatError;
use crate::record::{PopulationRecord, StarRecord, CATALOG_VERSION};

fn star(measured_sin_i: f64, sin_i_uncertainty: f64) -> StellarObservable {
    StellarObservable {
        true_inclination: 1.2,
        true_vsini: 25.0,
        true_period: 14400.0,
        true_radius: 71492.0,
        true_sin_i: 0.932,
        measured_inclination: 1.3,
        measured_vsini: 27.5,
        measured_period: 15120.0,
        measured_radius: 71492.0,
        measured_sin_i,
        sin_i_uncertainty,
        planets: vec![],
        has_transit: false,
        recovered: true,
        selected: false,
        transit_detected: false,
    }
}

fn sample_population() -> Population {
    Population {
        stars: vec![star(0.93, 0.12), star(1.0908342487974698, 0.12651281002313186)],
        transit_indices: vec![1],
    }
}

#[test]
fn record_captures_corrected_sin_i_values() {
    let record = PopulationRecord::from_population(&sample_population());

    assert_eq!(record.version, CATALOG_VERSION);
    assert_eq!(record.stars.len(), 2);
    // Valid measurement passes through untouched.
    assert_eq!(record.stars[0].sin_i, 0.93);
    // Invalid measurement is stored as its lower limit.
    assert!((record.stars[1].sin_i - 0.9643214387743379).abs() < 1e-12);
    assert_eq!(record.transit_indices, vec![1]);
}

#[test]
fn record_columns_preserve_star_order() {
    let record = PopulationRecord::from_population(&sample_population());
    assert_eq!(record.sin_is().len(), 2);
    assert_eq!(record.sin_i_uncertainties(), vec![0.12, 0.12651281002313186]);
}

#[test]
fn record_round_trips_through_json() {
    let record = PopulationRecord::from_population(&sample_population());
    let json = record.to_json().unwrap();
    let parsed = PopulationRecord::from_json(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn malformed_json_is_a_format_error_not_an_empty_record() {
    let result = PopulationRecord::from_json("{ this is not json");
    assert!(matches!(result, Err(FormatError::Json(_))));

    // A structurally valid but schema-less document must also fail.
    let result = PopulationRecord::from_json("{}");
    assert!(matches!(result, Err(FormatError::Json(_))));
}

#[test]
fn future_versions_are_rejected() {
    let record = PopulationRecord {
        version: CATALOG_VERSION + 1,
        generated_at: 0,
        stars: vec![StarRecord {
            sin_i: 0.5,
            sin_i_uncertainty: 0.1,
        }],
        transit_indices: vec![],
    };
    let json = record.to_json().unwrap();
    let result = PopulationRecord::from_json(&json);
    assert!(matches!(
        result,
        Err(FormatError::UnsupportedVersion { found, expected })
            if found == CATALOG_VERSION + 1 && expected == CATALOG_VERSION
    ));
}

#[test]
fn dump_round_trips_the_full_population() {
    let dump = PopulationDump::new(sample_population());
    let json = dump.to_json().unwrap();
    let parsed = PopulationDump::from_json(&json).unwrap();
    assert_eq!(parsed.population, dump.population);
    assert_eq!(parsed.version, CATALOG_VERSION);
}

#[test]
fn dump_keeps_every_star_attribute() {
    let dump = PopulationDump::new(sample_population());
    let json = dump.to_json().unwrap();
    // Spot-check that fields are keyed by name, not position.
    assert!(json.contains("\"trueSinI\""));
    assert!(json.contains("\"sinIUncertainty\""));
    assert!(json.contains("\"transitIndices\""));
}
