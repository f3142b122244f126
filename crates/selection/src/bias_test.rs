use crate::bias::{assess, bias};
use crate::error::ConfigurationError;

#[test]
fn assess_leaves_a_valid_measurement_below_the_cutoff_alone() {
    let res = assess(0.8338721104131719, 0.11948557079946316, 0.95);
    assert!(!res.lower_limit_used);
    assert!(!res.selected);
    assert_eq!(res.sin_i, 0.8338721104131719);
}

#[test]
fn assess_flags_nothing_when_the_lower_limit_cannot_help() {
    // 1.1994 - 0.1719 = 1.0275 is still above 1.0, so the correction does
    // not change the value and the used flag stays false.
    let res = assess(1.199411835930064, 0.1718637738930092, 0.95);
    assert!(!res.lower_limit_used);
    assert!(!res.selected);
    assert_eq!(res.sin_i, 1.199411835930064);
}

#[test]
fn assess_substitutes_the_lower_limit_and_selects() {
    let res = assess(1.0908342487974698, 0.12651281002313186, 0.95);
    assert!(res.lower_limit_used);
    assert!(res.selected, "corrected sin(i) {} should pass 0.95", res.sin_i);
    assert!((res.sin_i - 0.9643214387743379).abs() < 1e-12);
}

#[test]
fn assess_selects_valid_values_at_or_above_the_cutoff() {
    assert!(assess(0.95, 0.01, 0.95).selected);
    assert!(assess(1.0, 0.01, 0.95).selected);
    assert!(!assess(0.9499, 0.01, 0.95).selected);
}

#[test]
fn bias_selects_nothing_when_no_measurement_is_usable() {
    let mut sin_is = vec![0.83, 1.20];
    let uncs = vec![0.12, 0.17];
    let selection = bias(&mut sin_is, &uncs, 0.95, &[], false).unwrap();
    // First object is below the cutoff; second triggers the lower-limit
    // path but 1.20 - 0.17 = 1.03 stays invalid.
    assert!(selection.selected.is_empty());
    assert_eq!(selection.observed_count, 0);
    assert_eq!(sin_is, vec![0.83, 1.20]);
}

#[test]
fn bias_replaces_corrected_values_in_place() {
    let mut sin_is = vec![0.96, 1.0908342487974698, 0.5];
    let uncs = vec![0.01, 0.12651281002313186, 0.01];
    let transits = vec![1, 2];

    let selection = bias(&mut sin_is, &uncs, 0.95, &transits, false).unwrap();

    assert_eq!(selection.selected, vec![0, 1]);
    assert_eq!(selection.detected, vec![1]);
    assert_eq!(selection.observed_count, 2);
    // Only the invalid measurement was rewritten.
    assert_eq!(sin_is[0], 0.96);
    assert!((sin_is[1] - 0.9643214387743379).abs() < 1e-12);
    assert_eq!(sin_is[2], 0.5);
}

#[test]
fn bias_detected_is_a_subset_of_selected() {
    let mut sin_is = vec![0.99, 0.97, 0.2, 0.96, 0.5];
    let uncs = vec![0.01; 5];
    let transits = vec![0, 2, 3];

    let selection = bias(&mut sin_is, &uncs, 0.95, &transits, false).unwrap();

    assert!(selection.selected.len() <= sin_is.len());
    for idx in &selection.detected {
        assert!(
            selection.selected.contains(idx),
            "detected index {} not in selected set",
            idx
        );
    }
}

#[test]
fn top_quantile_keeps_the_highest_fifth_of_the_population() {
    // 10 stars, 5 above the cutoff; only floor(0.2 * 10) = 2 survive,
    // ordered by descending sin(i).
    let mut sin_is = vec![0.91, 0.99, 0.93, 0.96, 0.98, 0.1, 0.2, 0.3, 0.4, 0.5];
    let uncs = vec![0.01; 10];

    let selection = bias(&mut sin_is, &uncs, 0.9, &[], true).unwrap();

    assert_eq!(selection.selected, vec![1, 4]);
    // The count of objects passing the cutoff is reported unrestricted.
    assert_eq!(selection.observed_count, 5);
}

#[test]
fn top_quantile_breaks_ties_toward_the_higher_index() {
    let mut sin_is = vec![0.97, 0.99, 0.97, 0.96, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1];
    let uncs = vec![0.01; 10];

    let selection = bias(&mut sin_is, &uncs, 0.9, &[], true).unwrap();

    // Equal 0.97 values at indices 0 and 2: index 2 wins the second slot.
    assert_eq!(selection.selected, vec![1, 2]);
}

#[test]
fn bias_rejects_mismatched_inputs() {
    let mut sin_is = vec![0.9, 0.8];
    let uncs = vec![0.1];
    assert_eq!(
        bias(&mut sin_is, &uncs, 0.95, &[], false),
        Err(ConfigurationError::LengthMismatch { left: 2, right: 1 })
    );
}

#[test]
fn bias_rejects_an_empty_population() {
    let mut sin_is: Vec<f64> = vec![];
    assert_eq!(
        bias(&mut sin_is, &[], 0.95, &[], false),
        Err(ConfigurationError::EmptyPopulation)
    );
}
