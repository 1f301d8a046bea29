use std::f64::consts::PI;

/// Rounds halves towards positive infinity, the rounding the legacy bin formula was defined with.
#[inline(always)]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Gaussian density at `x` scaled by `amplitude`.
///
/// A non-positive or non-finite `stdev` has no density and yields 0.
#[inline]
pub fn gauss(x: f64, mean: f64, stdev: f64, amplitude: f64) -> f64 {
    if !(stdev > 0.0) || !stdev.is_finite() {
        return 0.0;
    }
    let z = (x - mean) / stdev;
    amplitude * (-0.5 * z * z).exp() / (stdev * (2.0 * PI).sqrt())
}

/// Folds an index that fell off either end of `[0, length)` back in by mirroring
/// about the centre of the edge bin, as often as needed.
pub fn reflect_index(index: isize, length: usize) -> usize {
    if length <= 1 {
        return 0;
    }
    let last = length as isize - 1;
    let period = 2 * last;
    let mut folded = index.rem_euclid(period);
    if folded > last {
        folded = period - folded;
    }
    folded as usize
}

#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr) => {
        if $left != $right { return false; }
    }
}
