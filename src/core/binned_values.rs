use crate::core::Axis;

/// Read access to per-bin values of a one dimensional histogram or smoothed curve.
pub trait BinnedValues {
    fn axis(&self) -> &Axis;

    fn value_at(&self, bin: usize) -> f64;

    /// Sum of all bin values.
    fn total_area(&self) -> f64;

    #[inline(always)]
    fn bin_count(&self) -> usize {
        self.axis().bin_count()
    }
}
