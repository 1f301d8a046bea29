use crate::st::smoothing::DEFAULT_RADIUS;
use crate::st::{Histogram1D, Smoother};
use crate::tests::util::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::tests::consts::SEED;

fn single_spike(bins: usize, bin: usize, count: u64) -> Vec<u64> {
    let mut counts = vec![0; bins];
    counts[bin] = count;
    counts
}

#[test]
fn taps_shrink_with_the_fourth_root_of_the_count() {
    let smoother = Smoother::default();
    assert_eq!(DEFAULT_RADIUS, smoother.radius());
    assert_eq!(0, smoother.taps_for(0.0));
    assert_eq!(10, smoother.taps_for(1.0));
    assert_eq!(5, smoother.taps_for(16.0));
    assert_eq!(4, smoother.taps_for(81.0));
    assert_eq!(1, smoother.taps_for(10_000.0));
    assert_eq!(1, smoother.taps_for(1.0e8));
}

#[test]
fn kernel_is_normalized_and_decreasing() {
    let smoother = Smoother::default();
    for count in [1.0, 3.0, 16.0, 500.0, 1.0e6].iter() {
        let kernel = smoother.kernel(*count);
        let mass = kernel[0] + 2.0 * kernel[1..].iter().sum::<f64>();
        assert_approx_eq!(mass, 1.0, 1e-12);
        for pair in kernel.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }
}

#[test]
fn output_has_the_input_length() {
    let smoother = Smoother::default();
    for bins in [1_usize, 2, 3, 21, 256].iter() {
        let counts = single_spike(*bins, bins / 2, 3);
        assert_eq!(*bins, smoother.smooth(&counts).len());
    }
    assert!(smoother.smooth::<u64>(&[]).is_empty());
}

#[test]
fn zero_radius_is_identity() {
    let counts: Vec<u64> = vec![0, 4, 9, 1, 0, 7];
    let smoothed = Smoother::new(0).smooth(&counts);
    let expected: Vec<f64> = counts.iter().map(|c| *c as f64).collect();
    assert_eq!(expected, smoothed);
}

#[test]
fn spike_spreads_symmetrically() {
    let counts = single_spike(101, 50, 1);
    let smoothed = Smoother::default().smooth(&counts);
    for i in 1..=DEFAULT_RADIUS {
        assert_eq!(smoothed[50 - i], smoothed[50 + i]);
        assert!(smoothed[50 + i] > 0.0);
    }
    assert_eq!(0.0, smoothed[50 + DEFAULT_RADIUS + 1]);
    assert_eq!(0.0, smoothed[50 - DEFAULT_RADIUS - 1]);
    assert_approx_eq!(smoothed.iter().sum::<f64>(), 1.0, 1e-12);
}

#[test]
fn full_bins_barely_spread() {
    let counts = single_spike(101, 50, 1_000_000);
    let smoothed = Smoother::default().smooth(&counts);
    // a million counts gets a single tap each side
    assert!(smoothed[50] > smoothed[49]);
    assert!(smoothed[49] > 0.0);
    assert_eq!(0.0, smoothed[48]);
}

#[test]
fn mass_past_the_edge_is_reflected() {
    let smoother = Smoother::default();
    let counts = single_spike(30, 0, 1);
    let smoothed = smoother.smooth(&counts);
    let kernel = smoother.kernel(1.0);
    assert_approx_eq!(smoothed[0], kernel[0], 1e-15);
    for i in 1..=DEFAULT_RADIUS {
        assert_approx_eq!(smoothed[i], 2.0 * kernel[i], 1e-15);
    }
    assert_approx_eq!(smoothed.iter().sum::<f64>(), 1.0, 1e-12);
}

#[test]
fn mass_is_conserved_at_the_upper_edge() {
    let counts = single_spike(30, 29, 7);
    let smoothed = Smoother::default().smooth(&counts);
    assert_approx_eq!(smoothed.iter().sum::<f64>(), 7.0, 1e-9);
}

#[test]
fn narrow_histograms_fold_repeatedly() {
    for bins in 1..=4 {
        for bin in 0..bins {
            let counts = single_spike(bins, bin, 2);
            let smoothed = Smoother::default().smooth(&counts);
            assert_approx_eq!(smoothed.iter().sum::<f64>(), 2.0, 1e-9);
        }
    }
}

#[test]
fn random_histogram_keeps_its_area() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut histogram = Histogram1D::<u64>::new("random", 128, percent_range()).unwrap();
    for _ in 0..5_000 {
        let value: f64 = rng.gen_range(0.0..100.0);
        histogram.count(value * value / 100.0);
    }
    let smoothed = histogram.smooth();
    assert_approx_eq!(smoothed.iter().sum::<f64>(), histogram.total_area(), 1e-6);
    assert!(smoothed.iter().all(|v| *v >= 0.0));
}

#[test]
fn smoothing_leaves_counts_untouched() {
    let histogram = scenario_histo();
    let before = histogram.counts().to_vec();
    let curve = histogram.smoothed(&Smoother::default());
    assert_eq!(before.as_slice(), histogram.counts());
    assert_eq!(histogram.bin_count(), curve.values().len());
    assert_approx_eq!(curve.series().map(|p| p.y).sum::<f64>(), 3.0, 1e-12);
    assert_eq!(histogram.smooth(), curve.into_values());
}
