use crate::st::peak::{negative_peak, positive_peak};
use crate::st::{PeakFinder, Smoother};
use crate::tests::consts::*;
use crate::tests::util::*;

#[test]
fn empty_bins_split_populations() {
    let histogram = histo_from_bins("split", &[0, 2, 4, 0, 0, 3, 1]);
    assert_eq!(vec![(1, 3), (5, 7)], PeakFinder::default().populations(&histogram));
}

#[test]
fn valleys_split_populations() {
    let histogram = histo_from_bins("valley", &[0, 5, 3, 1, 4, 6, 2, 0]);
    assert_eq!(vec![(1, 3), (3, 7)], PeakFinder::default().populations(&histogram));
}

#[test]
fn plateaus_do_not_split() {
    let histogram = histo_from_bins("plateau", &[2, 2, 2, 2]);
    assert_eq!(vec![(0, 4)], PeakFinder::default().populations(&histogram));
}

#[test]
fn small_populations_are_discarded() {
    let histogram = histo_from_bins("noise", &[0, 100, 0, 1, 0]);
    let peaks = PeakFinder::new(0.05).find(&histogram);
    assert_eq!(1, peaks.len());
    assert_eq!(1, peaks[0].min());
    assert_eq!(1, peaks[0].max());
    assert_eq!(100.0, peaks[0].area());

    let peaks = PeakFinder::new(0.0).find(&histogram);
    assert_eq!(2, peaks.len());
}

#[test]
fn empty_histogram_has_no_peaks() {
    let histogram = histo_from_bins("empty", &[0, 0, 0, 0]);
    assert!(PeakFinder::default().find(&histogram).is_empty());
}

#[test]
fn bimodal_histogram_yields_two_gated_peaks() {
    init_logging();
    let histogram = bimodal_histo();
    let curve = histogram.smoothed(&Smoother::default());
    let peaks = PeakFinder::default().find(&curve);
    assert_eq!(2, peaks.len());

    let negative = negative_peak(&peaks).unwrap();
    let positive = positive_peak(&peaks).unwrap();
    assert_approx_eq!(negative.mean(), 20.0, 1e-9);
    assert_approx_eq!(positive.mean(), 70.0, 1e-9);
    assert_approx_eq!(negative.area(), NEGATIVE_POPULATION_SIZE as f64, 1e-6);
    assert_approx_eq!(positive.area(), POSITIVE_POPULATION_SIZE as f64, 1e-6);
    assert_eq!(17, negative.min());
    assert_eq!(23, negative.max());
    assert_eq!(67, positive.min());
    assert_eq!(73, positive.max());
}

#[test]
fn found_peaks_are_sorted_and_have_stats() {
    let histogram = histo_from_bins("three", &[0, 4, 9, 4, 0, 0, 2, 0, 7, 12, 7, 0]);
    let peaks = PeakFinder::new(0.0).find(&histogram);
    assert_eq!(3, peaks.len());
    for pair in peaks.windows(2) {
        assert!(pair[0].mean() <= pair[1].mean());
    }
    for peak in peaks.iter() {
        let before = (peak.amplitude(), peak.stdev());
        let mut again = peak.clone();
        again.calc_stats();
        assert_eq!(before, (again.amplitude(), again.stdev()));
    }
    assert_approx_eq!(peaks[0].mean(), 2.0, 1e-12);
    assert_approx_eq!(peaks[2].mean(), 9.0, 1e-12);
}
