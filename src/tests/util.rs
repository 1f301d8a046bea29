use crate::core::Range;
use crate::st::Histogram1D;
use crate::tests::consts::*;

macro_rules! succ {
    ($e:expr) => {
        assert!($e.is_ok());
    }
}

macro_rules! assert_approx_eq {
    ($e:expr, $v:expr, $t:expr) => {
        assert!(($e as f64 - $v as f64).abs() <= $t as f64, "{} !~= {} within {}", $e, $v, $t)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn percent_range() -> Range {
    Range::new(0.0, 100.0).unwrap()
}

/// The `count(5), count(5), count(95)` histogram over ten bins of `[0, 100]`.
pub fn scenario_histo() -> Histogram1D<u64> {
    let mut histogram = Histogram1D::<u64>::new("h", SCENARIO_BINS, percent_range()).unwrap();
    histogram.count(5.0);
    histogram.count(5.0);
    histogram.count(95.0);
    histogram
}

/// One bin per unit over `[0, bins]`, with `values[b]` counted into bin `b`.
pub fn histo_from_bins(name: &str, values: &[u64]) -> Histogram1D<u64> {
    let range = Range::new(0.0, values.len() as f64).unwrap();
    let mut histogram = Histogram1D::<u64>::new(name, values.len(), range).unwrap();
    for (bin, value) in values.iter().enumerate() {
        if *value > 0 {
            histogram.count_n(bin as f64 + 0.5, *value);
        }
    }
    histogram
}

/// Two well separated populations centred on bins 20 and 70 of a `[0, 100]` histogram.
pub fn bimodal_histo() -> Histogram1D<u64> {
    let mut histogram = Histogram1D::<u64>::new("bimodal", 100, percent_range()).unwrap();
    histogram.count_n(NEGATIVE_POPULATION_VALUE, NEGATIVE_POPULATION_SIZE);
    histogram.count_n(POSITIVE_POPULATION_VALUE, POSITIVE_POPULATION_SIZE);
    histogram
}
