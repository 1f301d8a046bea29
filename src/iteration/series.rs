use crate::core::BinnedValues;
use crate::st::Peak;

/// One chart point: the bin, the value it represents on the axis and its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub bin: usize,
    pub center: f64,
    pub y: f64,
}

impl SeriesPoint {
    /// The point as plotted against the bin index.
    pub fn xy(&self) -> (f64, f64) {
        (self.bin as f64, self.y)
    }
}

/// Walks every bin of a histogram or smoothed curve in ascending order.
pub struct BinSeries<'a, H: 'a + ?Sized> {
    values: &'a H,
    bin: usize,
}

impl<'a, H: BinnedValues + ?Sized> BinSeries<'a, H> {
    pub fn new(values: &'a H) -> BinSeries<'a, H> {
        BinSeries { values, bin: 0 }
    }
}

impl<'a, H: BinnedValues + ?Sized> Iterator for BinSeries<'a, H> {
    type Item = SeriesPoint;

    fn next(&mut self) -> Option<SeriesPoint> {
        if self.bin >= self.values.bin_count() {
            return None;
        }
        let bin = self.bin;
        self.bin += 1;
        Some(SeriesPoint {
            bin,
            center: self.values.axis().bin_center(bin),
            y: self.values.value_at(bin),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.bin_count().saturating_sub(self.bin);
        (remaining, Some(remaining))
    }
}

impl<'a, H: BinnedValues + ?Sized> ExactSizeIterator for BinSeries<'a, H> {}

/// Evaluates a fitted peak at every bin of the histogram it is bound to.
pub struct PeakCurve<'p, 'a: 'p, H: 'a + ?Sized> {
    peak: &'p Peak<'a, H>,
    bin: usize,
}

impl<'p, 'a: 'p, H: BinnedValues + ?Sized> PeakCurve<'p, 'a, H> {
    pub fn new(peak: &'p Peak<'a, H>) -> PeakCurve<'p, 'a, H> {
        PeakCurve { peak, bin: 0 }
    }
}

impl<'p, 'a: 'p, H: BinnedValues + ?Sized> Iterator for PeakCurve<'p, 'a, H> {
    type Item = SeriesPoint;

    fn next(&mut self) -> Option<SeriesPoint> {
        let histogram = self.peak.histogram();
        if self.bin >= histogram.bin_count() {
            return None;
        }
        let bin = self.bin;
        self.bin += 1;
        Some(SeriesPoint {
            bin,
            center: histogram.axis().bin_center(bin),
            y: self.peak.get(bin as f64),
        })
    }
}
