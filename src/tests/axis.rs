use crate::core::{Axis, BinFormula, Binning, CreationError, Placement, Range};
use crate::tests::util::percent_range;

fn legacy_linear(bin_count: usize) -> Axis {
    Axis::new(percent_range(), bin_count, Binning::Linear, BinFormula::Legacy).unwrap()
}

#[test]
fn zero_bins_is_rejected() {
    assert_eq!(Err(CreationError::ZeroBinCount), Axis::linear(percent_range(), 0));
}

#[test]
fn zero_width_range_is_rejected() {
    let range = Range::new(3.0, 3.0).unwrap();
    assert_eq!(Err(CreationError::ZeroWidthRange), Axis::linear(range, 10));
}

#[test]
fn log_axis_needs_positive_range() {
    let range = Range::new(0.0, 10.0).unwrap();
    assert_eq!(Err(CreationError::NonPositiveLogRange), Axis::logarithmic(range, 10));
    let range = Range::new(-5.0, 10.0).unwrap();
    assert_eq!(Err(CreationError::NonPositiveLogRange), Axis::logarithmic(range, 10));
}

#[test]
fn linear_placement() {
    let axis = Axis::linear(percent_range(), 10).unwrap();
    assert_eq!(Placement::Bin(0), axis.place(0.0));
    assert_eq!(Placement::Bin(0), axis.place(5.0));
    assert_eq!(Placement::Bin(4), axis.place(49.9));
    assert_eq!(Placement::Bin(9), axis.place(95.0));
    assert_eq!(Placement::Bin(9), axis.place(100.0));
    assert_eq!(Placement::Below, axis.place(-0.1));
    assert_eq!(Placement::Above, axis.place(100.5));
    assert_eq!(Placement::Invalid, axis.place(f64::NAN));
}

#[test]
fn infinities_fall_into_the_gutter() {
    let axis = Axis::linear(percent_range(), 10).unwrap();
    assert_eq!(Placement::Below, axis.place(f64::NEG_INFINITY));
    assert_eq!(Placement::Above, axis.place(f64::INFINITY));
}

#[test]
fn logarithmic_placement() {
    let axis = Axis::logarithmic(Range::new(1.0, 1000.0).unwrap(), 3).unwrap();
    assert!(axis.is_log());
    assert_eq!(Placement::Bin(0), axis.place(1.0));
    assert_eq!(Placement::Bin(0), axis.place(5.0));
    assert_eq!(Placement::Bin(1), axis.place(50.0));
    assert_eq!(Placement::Bin(2), axis.place(500.0));
    assert_eq!(Placement::Bin(2), axis.place(1000.0));
    assert_eq!(Placement::Below, axis.place(0.5));
    assert_eq!(Placement::Below, axis.place(0.0));
    assert_eq!(Placement::Below, axis.place(-3.0));
    assert_eq!(Placement::Above, axis.place(2000.0));
}

#[test]
fn legacy_formula_scales_by_range_width() {
    let axis = legacy_linear(10_000);
    assert_eq!(Placement::Bin(1), axis.place(0.0));
    assert_eq!(Placement::Bin(1), axis.place(5.0));
    assert_eq!(Placement::Bin(2), axis.place(150.0));
    assert_eq!(Placement::Below, axis.place(-150.0));
}

#[test]
fn legacy_formula_sends_small_histograms_above() {
    let axis = legacy_linear(10);
    assert_eq!(Placement::Above, axis.place(5.0));
    assert_eq!(Placement::Above, axis.place(95.0));
}

#[test]
fn legacy_log_formula_uses_log_units() {
    // range [0, 10] in ln units
    let axis = Axis::new(Range::new(0.0, 10.0).unwrap(), 100, Binning::Logarithmic, BinFormula::Legacy).unwrap();
    // ln(1) = 0 -> round(0.5) = 1
    assert_eq!(Placement::Bin(1), axis.place(1.0));
    // ln(e^5) = 5 -> round(0.5 + 0.5) = 1
    assert_eq!(Placement::Bin(1), axis.place(5.0_f64.exp()));
    assert_eq!(Placement::Invalid, axis.place(0.0));
}

#[test]
fn linear_bin_centers() {
    let axis = Axis::linear(percent_range(), 10).unwrap();
    assert_approx_eq!(axis.bin_center(0), 5.0, 1e-12);
    assert_approx_eq!(axis.bin_center(9), 95.0, 1e-12);
}

#[test]
fn bin_center_maps_back_to_its_bin() {
    let axes = vec![
        Axis::linear(percent_range(), 37).unwrap(),
        Axis::logarithmic(Range::new(1.0, 1000.0).unwrap(), 3).unwrap(),
        Axis::logarithmic(Range::new(0.5, 262_144.0).unwrap(), 256).unwrap(),
        legacy_linear(10_000),
    ];
    for axis in axes.iter() {
        for bin in 0..axis.bin_count() {
            if axis.formula() == BinFormula::Legacy && bin == 0 {
                // nothing at or above min lands in legacy bin 0
                continue;
            }
            assert_eq!(Placement::Bin(bin), axis.place(axis.bin_center(bin)), "{:?} bin {}", axis, bin);
        }
    }
}

#[test]
fn log_bin_centers_are_geometric() {
    let axis = Axis::logarithmic(Range::new(1.0, 1000.0).unwrap(), 3).unwrap();
    assert_approx_eq!(axis.bin_center(0), 1000.0_f64.powf(1.0 / 6.0), 1e-9);
    assert_approx_eq!(axis.bin_center(1), 1000.0_f64.powf(0.5), 1e-9);
}

#[test]
fn compatibility() {
    let axis = Axis::linear(percent_range(), 10).unwrap();
    assert!(axis.is_compatible_with(&Axis::linear(percent_range(), 10).unwrap()));
    assert!(!axis.is_compatible_with(&Axis::linear(percent_range(), 11).unwrap()));
    assert!(!axis.is_compatible_with(&legacy_linear(10)));
    assert!(!axis.is_compatible_with(&Axis::linear(Range::new(0.0, 50.0).unwrap(), 10).unwrap()));
}
