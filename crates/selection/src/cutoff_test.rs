use crate::cutoff::{cutoff_grid, evaluate_cutoffs, TransitYield};
use crate::error::ConfigurationError;

#[test]
fn cutoff_grid_spans_zero_to_one_inclusive() {
    let grid = cutoff_grid(5).unwrap();
    assert_eq!(grid.len(), 5);
    assert_eq!(grid[0], 0.0);
    assert_eq!(grid[4], 1.0);
    assert!((grid[2] - 0.5).abs() < 1e-15);
}

#[test]
fn cutoff_grid_of_one_is_just_zero() {
    assert_eq!(cutoff_grid(1).unwrap(), vec![0.0]);
}

#[test]
fn cutoff_grid_rejects_zero_count() {
    assert_eq!(cutoff_grid(0), Err(ConfigurationError::NoCutoffs));
}

#[test]
fn zero_transit_population_sweeps_to_all_zero_rates() {
    let sin_is = vec![0.5, 0.96, 0.99];
    let uncs = vec![0.01; 3];

    let sweep = evaluate_cutoffs(&[0.0, 0.5, 1.0], &sin_is, &uncs, &[], false, false).unwrap();

    assert_eq!(sweep.hit_rates, vec![0.0, 0.0, 0.0]);
    assert_eq!(sweep.ideal_cutoff, 0.0);
    assert_eq!(sweep.best, TransitYield::default());
    assert!(sweep.fractional.is_none());
}

#[test]
fn sweep_tracks_hit_rates_and_best_yield() {
    let sin_is = vec![0.99, 0.97, 0.5, 1.0908342487974698];
    let uncs = vec![0.01, 0.01, 0.01, 0.12651281002313186];
    let transits = vec![0, 3];

    let sweep =
        evaluate_cutoffs(&[0.0, 0.5, 1.0], &sin_is, &uncs, &transits, false, false).unwrap();

    // The invalid fourth measurement corrects to 0.9643 and stays
    // selectable at cutoffs 0.0 and 0.5; nothing survives cutoff 1.0.
    assert_eq!(sweep.hit_rates, vec![0.5, 0.5, 0.0]);
    assert_eq!(sweep.ideal_cutoff, 0.0);
    assert_eq!(
        sweep.best,
        TransitYield {
            detected: 2,
            observed: 4
        }
    );
}

#[test]
fn fractional_sweep_covers_every_cutoff() {
    let sin_is = vec![0.99, 0.98, 0.1, 0.1, 0.1];
    let uncs = vec![0.01; 5];
    let transits = vec![0];

    let sweep =
        evaluate_cutoffs(&[0.0, 0.5, 1.0], &sin_is, &uncs, &transits, true, false).unwrap();

    // The sweep must not stop after the first cutoff when fractional
    // tracking is on; every cutoff contributes an entry.
    assert_eq!(sweep.hit_rates.len(), 3);
    let fractional = sweep.fractional.unwrap();
    assert_eq!(fractional.increases.len(), 3);

    // Baseline transit fraction is 1/5. At cutoff 0.5 the hit rate is
    // 1/2, so the increase is 0.3 and that cutoff is the fractional ideal.
    assert!((fractional.increases[1] - 0.3).abs() < 1e-12);
    assert_eq!(fractional.ideal_cutoff, 0.5);
    assert_eq!(sweep.ideal_cutoff, 0.5);
}

#[test]
fn fractional_increase_is_zero_when_either_term_is_zero() {
    let sin_is = vec![0.5, 0.6];
    let uncs = vec![0.01; 2];

    // No ground-truth transits: baseline is zero, so every increase is
    // exactly zero regardless of the hit rate.
    let sweep = evaluate_cutoffs(&[0.0, 1.0], &sin_is, &uncs, &[], true, false).unwrap();
    let fractional = sweep.fractional.unwrap();
    assert_eq!(fractional.increases, vec![0.0, 0.0]);
    assert_eq!(fractional.ideal_cutoff, 0.0);
}

#[test]
fn quantile_mode_divides_by_the_retained_selection() {
    // 10 stars, 4 above cutoff 0.9, quantile keeps floor(0.2 * 10) = 2.
    let sin_is = vec![0.95, 0.99, 0.93, 0.98, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1];
    let uncs = vec![0.01; 10];
    // Index 1 is retained (0.99) and carries a transit.
    let transits = vec![1, 4];

    let sweep = evaluate_cutoffs(&[0.9], &sin_is, &uncs, &transits, false, true).unwrap();

    assert_eq!(sweep.hit_rates, vec![0.5]);
    assert_eq!(
        sweep.best,
        TransitYield {
            detected: 1,
            observed: 4
        }
    );
}

#[test]
fn corrections_persist_across_the_sweep() {
    // At cutoff 0.0 the invalid value is corrected; later cutoffs then see
    // the corrected value rather than re-deriving a fresh lower limit.
    let sin_is = vec![1.0908342487974698];
    let uncs = vec![0.12651281002313186];

    let sweep = evaluate_cutoffs(&[0.0, 0.95], &sin_is, &uncs, &[0], false, false).unwrap();

    // 0.9643 passes both cutoffs.
    assert_eq!(sweep.hit_rates, vec![1.0, 1.0]);
}

#[test]
fn sweep_rejects_empty_inputs() {
    let sin_is = vec![0.5];
    let uncs = vec![0.01];
    assert_eq!(
        evaluate_cutoffs(&[], &sin_is, &uncs, &[], false, false),
        Err(ConfigurationError::NoCutoffs)
    );
    assert_eq!(
        evaluate_cutoffs(&[0.5], &[], &[], &[], false, false),
        Err(ConfigurationError::EmptyPopulation)
    );
    assert_eq!(
        evaluate_cutoffs(&[0.5], &sin_is, &[], &[], false, false),
        Err(ConfigurationError::LengthMismatch { left: 1, right: 0 })
    );
}
