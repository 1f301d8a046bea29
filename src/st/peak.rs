use crate::core::util::gauss;
use crate::core::{BinnedValues, PeakError};
use crate::iteration::PeakCurve;
use std::cmp::Ordering;
use std::fmt;

/// A Gaussian component fitted against the bins `min..=max` of a histogram.
///
/// `mean` and `stdev` are in bin units. The peak borrows the histogram it was fitted
/// against, which stays read-only for as long as the peak lives.
pub struct Peak<'a, H: 'a + ?Sized> {
    mean: f64,
    stdev: f64,
    amplitude: f64,
    area: f64,
    min: usize,
    max: usize,
    histogram: &'a H,
}

impl<'a, H: BinnedValues + ?Sized> Peak<'a, H> {
    pub fn new(histogram: &'a H, mean: f64, stdev: f64, area: f64, min: usize, max: usize) -> Result<Self, PeakError> {
        if min > max {
            return Err(PeakError::BoundsInverted { min, max });
        }
        let bin_count = histogram.bin_count();
        if max >= bin_count {
            return Err(PeakError::BoundsExceedHistogram { max, bin_count });
        }
        if !(area >= 0.0) {
            return Err(PeakError::NegativeArea);
        }
        Ok(Peak {
            mean,
            stdev,
            amplitude: area / (1 + max - min) as f64,
            area,
            min,
            max,
            histogram,
        })
    }

    /// Recomputes `amplitude` as the mean bin height of the area and `stdev` as the
    /// RMS deviation of the bins in `[min, max)` from that amplitude.
    pub fn calc_stats(&mut self) {
        self.amplitude = self.area / (1 + self.max - self.min) as f64;
        let bins = self.max - self.min;
        if bins == 0 {
            self.stdev = 0.0;
            return;
        }
        let sum_of_squares = (self.min..self.max).fold(0.0, |t, bin| {
            let dev = self.histogram.value_at(bin) - self.amplitude;
            t + dev * dev
        });
        self.stdev = (sum_of_squares / bins as f64).sqrt();
    }

    /// Density of this peak at `x`, scaled to its share of the histogram's area.
    pub fn get(&self, x: f64) -> f64 {
        let total_area = self.histogram.total_area();
        if !(total_area > 0.0) {
            return 0.0;
        }
        gauss(x, self.mean, self.stdev, self.amplitude / total_area)
    }

    pub fn curve(&self) -> PeakCurve<'_, 'a, H> {
        PeakCurve::new(self)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn set_area(&mut self, area: f64) -> Result<(), PeakError> {
        if !(area >= 0.0) {
            return Err(PeakError::NegativeArea);
        }
        self.area = area;
        Ok(())
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Coefficient of variation, `stdev / mean`.
    pub fn cv(&self) -> f64 {
        if self.mean == 0.0 {
            return 0.0;
        }
        self.stdev / self.mean
    }

    pub fn histogram(&self) -> &'a H {
        self.histogram
    }
}

impl<'a, H: ?Sized> Clone for Peak<'a, H> {
    fn clone(&self) -> Self {
        Peak {
            mean: self.mean,
            stdev: self.stdev,
            amplitude: self.amplitude,
            area: self.area,
            min: self.min,
            max: self.max,
            histogram: self.histogram,
        }
    }
}

impl<'a, H: ?Sized> fmt::Debug for Peak<'a, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Peak")
            .field("mean", &self.mean)
            .field("stdev", &self.stdev)
            .field("amplitude", &self.amplitude)
            .field("area", &self.area)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

pub fn compare_by_mean<H: ?Sized>(a: &Peak<H>, b: &Peak<H>) -> Ordering {
    a.mean.total_cmp(&b.mean)
}

pub fn sort_by_mean<H: ?Sized>(peaks: &mut [Peak<H>]) {
    peaks.sort_by(compare_by_mean)
}

/// The leftmost peak, the negative population in a two population gate.
pub fn negative_peak<'p, 'a, H: ?Sized>(peaks: &'p [Peak<'a, H>]) -> Option<&'p Peak<'a, H>> {
    peaks.iter().min_by(|a, b| compare_by_mean(a, b))
}

/// The rightmost peak, the positive population in a two population gate.
pub fn positive_peak<'p, 'a, H: ?Sized>(peaks: &'p [Peak<'a, H>]) -> Option<&'p Peak<'a, H>> {
    peaks.iter().max_by(|a, b| compare_by_mean(a, b))
}
