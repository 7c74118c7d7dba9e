//! End-to-end association runs on small hand-checked series.

use approx::assert_relative_eq;
use lagassoc_assoc::{
    AssocConfig, EventSeries, LagSet, PointProcess, compute_association, count_overlaps,
};

fn series(t: &[f64]) -> EventSeries {
    EventSeries::new(t.to_vec()).unwrap()
}

fn config(lags: &[f64], halfwidth: f64) -> AssocConfig {
    AssocConfig::new()
        .with_lags(LagSet::new(lags.to_vec()).unwrap())
        .with_halfwidth(halfwidth)
}

#[test]
fn minutes_example_with_boundary_inclusion() {
    // Onsets at 0, 10, 20 minutes; triggers at 1, 11, 22; window ±2 minutes.
    let s1 = series(&[0.0, 10.0, 20.0]);
    let s2 = series(&[1.0, 11.0, 22.0]);
    let r = compute_association(&s1, &s2, &config(&[-2.0, 0.0, 2.0], 2.0)).unwrap();

    // Lag 0: 0→1 and 10→11 are inside; 20→22 sits exactly on the closed
    // boundary and is counted.
    assert_eq!(r.counts().column(1), vec![1.0, 1.0, 1.0]);
    // Lag -2: windows [-4,0], [6,10], [16,20] are all empty.
    assert_eq!(r.counts().column(0), vec![0.0, 0.0, 0.0]);
    // Lag +2: windows [0,4], [10,14], [20,24] each catch one trigger.
    assert_eq!(r.counts().column(2), vec![1.0, 1.0, 1.0]);

    assert_eq!(r.curve(), &[0, 3, 3]);
    // Low tail = lag -2 (0), high tail = lag +2 (3).
    assert_relative_eq!(r.asymptotic(), 1.5);
}

#[test]
fn single_point_pair_at_zero_lag() {
    let s = series(&[42.0]);
    let counts = count_overlaps(&s, &s, &config(&[0.0], 0.5)).unwrap();
    assert_eq!(counts.n_rows(), 1);
    assert_eq!(counts.n_cols(), 1);
    assert_eq!(counts.get(0, 0), Some(1));
    assert_eq!(counts.column_sums(), vec![1]);
}

#[test]
fn empty_first_series_gives_zero_curve() {
    let s1 = series(&[]);
    let s2 = series(&[1.0, 2.0, 3.0]);
    let r = compute_association(&s1, &s2, &config(&[-1.0, 0.0, 1.0, 2.0], 1.0)).unwrap();
    assert_eq!(r.counts().n_rows(), 0);
    assert_eq!(r.counts().n_cols(), 4);
    assert_eq!(r.curve(), &[0, 0, 0, 0]);
    assert_eq!(r.asymptotic(), 0.0);
    assert!(r.normalized_curve().is_none());
}

#[test]
fn empty_second_series_gives_zero_counts() {
    let s1 = series(&[1.0, 2.0]);
    let s2 = series(&[]);
    let r = compute_association(&s1, &s2, &config(&[-1.0, 0.0, 1.0], 1.0)).unwrap();
    assert_eq!(r.counts().n_rows(), 2);
    assert!(r.counts().rows().all(|row| row.iter().all(|&c| c == 0)));
}

#[test]
fn curve_is_exact_column_sum() {
    let s1: Vec<f64> = (0..50).map(|i| (i * 37 % 101) as f64 * 1.5).collect();
    let s2: Vec<f64> = (0..80).map(|i| (i * 53 % 127) as f64).collect();
    let lags = LagSet::range(-30.0, 30.0, 3.0).unwrap();
    let cfg = AssocConfig::new().with_lags(lags).with_halfwidth(2.5);
    let r = compute_association(&series(&s1), &series(&s2), &cfg).unwrap();

    for j in 0..r.n_lags() {
        let col_sum: u64 = r.counts().rows().map(|row| row[j] as u64).sum();
        assert_eq!(r.curve()[j], col_sum, "lag index {j}");
    }
}

#[test]
fn counts_match_linear_scan() {
    let s1 = [3.0, 17.5, 40.0, 41.0, 90.0];
    let s2 = [0.0, 4.0, 5.0, 18.0, 39.0, 42.0, 88.5, 91.0, 91.0];
    let lags = [-5.0, -1.0, 0.0, 1.0, 5.0];
    let h = 1.5;
    let r = compute_association(&series(&s1), &series(&s2), &config(&lags, h)).unwrap();

    for (i, &t) in s1.iter().enumerate() {
        for (j, &lag) in lags.iter().enumerate() {
            let lo = t + lag - h;
            let hi = t + lag + h;
            let expected = s2.iter().filter(|&&x| lo <= x && x <= hi).count();
            assert_eq!(r.counts().get(i, j), Some(expected), "point {i}, lag {lag}");
        }
    }
}

#[test]
fn result_does_not_depend_on_lag_order() {
    let s1 = series(&[0.0, 7.0, 13.0, 21.0]);
    let s2 = series(&[1.0, 6.0, 14.0, 22.0, 30.0]);
    let forward = compute_association(&s1, &s2, &config(&[-3.0, -1.0, 1.0, 3.0], 1.0)).unwrap();
    let reversed = compute_association(&s1, &s2, &config(&[3.0, 1.0, -1.0, -3.0], 1.0)).unwrap();

    let mut rev_curve = reversed.curve().to_vec();
    rev_curve.reverse();
    assert_eq!(forward.curve(), rev_curve.as_slice());
    assert_relative_eq!(forward.asymptotic(), reversed.asymptotic());
}

#[test]
fn swap_mirrors_lags_rather_than_preserving_the_curve() {
    // Triggers follow the first onset by 2-3 units; the second onset and the
    // third trigger are isolated.
    let onsets = series(&[0.0, 100.0]);
    let triggers = series(&[2.0, 3.0, 50.0]);
    let cfg = config(&[-2.0, 0.0, 2.0], 1.5);

    let mut pp = PointProcess::new(onsets, triggers).with_config(cfg);
    let forward = pp.assoc(&AssocConfig::new()).unwrap();
    pp.swap();
    let swapped = pp.assoc(&AssocConfig::new()).unwrap();

    // Windows now centre on the other series, so the matrix shape changes.
    assert_eq!(forward.counts().n_rows(), 2);
    assert_eq!(swapped.counts().n_rows(), 3);

    // The association shows up at +2 one way round and at -2 the other.
    assert_eq!(forward.curve(), &[0, 0, 2]);
    assert_eq!(swapped.curve(), &[2, 0, 0]);
    assert_ne!(forward.curve(), swapped.curve());
}

#[test]
fn summary_reports_peak_and_baseline() {
    let s1 = series(&[0.0, 50.0, 100.0]);
    let s2 = series(&[5.0, 55.0, 105.0, 300.0]);
    let lags = LagSet::range(-10.0, 10.0, 5.0).unwrap();
    let r = compute_association(
        &s1,
        &s2,
        &AssocConfig::new().with_lags(lags).with_halfwidth(1.0),
    )
    .unwrap();
    let summary = r.summary();
    assert_eq!(summary.peak, 3);
    assert_eq!(summary.peak_lag, 5.0);
    assert_eq!(summary.n_series1, 3);
    assert_eq!(summary.n_series2, 4);
    // Tails are lag -10 and lag 10, neither catching a trigger.
    assert_relative_eq!(summary.asymptotic, 0.0);
}
