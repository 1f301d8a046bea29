use crate::core::*;
use crate::iteration::BinSeries;
use crate::st::smoothing::{SmoothedCurve, Smoother};
use std::borrow::Borrow;
use std::marker::PhantomData;

/// Fixed bin count frequency counter over one axis.
///
/// Samples are recorded with `count` by a single writer; once recording is done the
/// histogram is only read (smoothing, peak fitting, series export). Peaks and series
/// borrow the histogram, so the borrow checker keeps the two phases apart.
pub struct Histogram1DImpl<T, P: GutterPolicy> {
    name: String,
    axis: Axis,
    counts: Vec<T>,
    total_count: u64,
    gutter: Gutter,
    _policy: PhantomData<P>,
}

pub type Histogram1D<T = u64> = Histogram1DImpl<T, DropOutOfRange>;
pub type ClampingHistogram1D<T = u64> = Histogram1DImpl<T, ClampOutOfRange>;

// read methods
impl<T: Counter, P: GutterPolicy> Histogram1DImpl<T, P> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    pub fn range(&self) -> Range {
        self.axis.range()
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_log(&self) -> bool {
        self.axis.is_log()
    }

    pub fn counts(&self) -> &[T] {
        &self.counts
    }

    pub fn count_at(&self, bin: usize) -> Option<T> {
        self.counts.get(bin).copied()
    }

    /// Samples counted in a bin, clamped ones included.
    pub fn get_total_count(&self) -> u64 {
        self.total_count
    }

    /// Samples that fell outside the axis and were not counted.
    pub fn gutter_count(&self) -> u64 {
        self.gutter.dropped()
    }

    pub fn dropped_count(&self) -> u64 {
        self.gutter_count()
    }

    pub fn gutter(&self) -> &Gutter {
        &self.gutter
    }

    pub fn total_area(&self) -> f64 {
        self.counts.iter().fold(0.0, |t, c| t + c.as_f64())
    }

    /// Index and count of the fullest bin, the lowest index on ties.
    pub fn max_bin(&self) -> Option<(usize, T)> {
        let mut best: Option<(usize, T)> = None;
        for (bin, count) in self.counts.iter().enumerate() {
            match best {
                Some((_, c)) if *count <= c => {}
                _ => best = Some((bin, *count)),
            }
        }
        best.filter(|&(_, c)| c != T::zero())
    }

    pub fn get_mean(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        let total = self.counts.iter().enumerate().fold(0.0, |t, (bin, c)| {
            t + c.as_f64() * self.axis.bin_center(bin)
        });
        total / self.total_count as f64
    }

    pub fn get_std_deviation(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        let mean = self.get_mean();
        let geometric_dev_total = self.counts.iter().enumerate().fold(0.0, |t, (bin, c)| {
            let dev = self.axis.bin_center(bin) - mean;
            t + c.as_f64() * dev * dev
        });
        (geometric_dev_total / self.total_count as f64).sqrt()
    }

    pub fn smooth(&self) -> Vec<f64> {
        self.smooth_with(&Smoother::default())
    }

    pub fn smooth_with(&self, smoother: &Smoother) -> Vec<f64> {
        let smoothed = smoother.smooth(&self.counts);
        debug!(
            "smoothed histogram {} ({} bins, radius {})",
            self.name,
            smoothed.len(),
            smoother.radius()
        );
        smoothed
    }

    /// Smoothed densities paired with this histogram's axis, ready for peak fitting.
    pub fn smoothed(&self, smoother: &Smoother) -> SmoothedCurve {
        SmoothedCurve::new(self.axis.clone(), self.smooth_with(smoother))
    }

    pub fn counts_series(&self) -> BinSeries<'_, Self> {
        BinSeries::new(self)
    }

    pub fn equals(&self, other: &Histogram1DImpl<T, P>) -> bool {
        check_eq!(self.name, other.name);
        check_eq!(self.axis, other.axis);
        check_eq!(self.total_count, other.total_count);
        check_eq!(self.gutter, other.gutter);
        self.counts == other.counts
    }
}

// write methods
impl<T: Counter, P: GutterPolicy> Histogram1DImpl<T, P> {
    /// Linear histogram of `bin_count` bins over `range`.
    pub fn new<S: Into<String>>(name: S, bin_count: usize, range: Range) -> Result<Self, CreationError> {
        Ok(Self::with_axis(name, Axis::linear(range, bin_count)?))
    }

    /// Logarithmic histogram of `bin_count` bins over `range`.
    pub fn log<S: Into<String>>(name: S, bin_count: usize, range: Range) -> Result<Self, CreationError> {
        Ok(Self::with_axis(name, Axis::logarithmic(range, bin_count)?))
    }

    pub fn with_axis<S: Into<String>>(name: S, axis: Axis) -> Self {
        let counts = vec![T::zero(); axis.bin_count()];
        Histogram1DImpl {
            name: name.into(),
            axis,
            counts,
            total_count: 0,
            gutter: Gutter::new(),
            _policy: PhantomData,
        }
    }

    pub(crate) fn from_parts(name: String, axis: Axis, counts: Vec<T>, gutter: Gutter) -> Self {
        let total_count = counts.iter().fold(0, |t, c| t + c.as_u64());
        Histogram1DImpl {
            name,
            axis,
            counts,
            total_count,
            gutter,
            _policy: PhantomData,
        }
    }

    #[inline(always)]
    pub fn count(&mut self, value: f64) {
        self.count_n(value, T::one())
    }

    #[inline]
    pub fn count_n(&mut self, value: f64, count: T) {
        match self.axis.place(value) {
            Placement::Bin(bin) => self.add_to_bin(bin, count),
            placement => self.record_out_of_range(value, placement, count),
        }
    }

    #[inline(always)]
    fn add_to_bin(&mut self, bin: usize, count: T) {
        self.counts[bin] += count;
        self.total_count += count.as_u64();
    }

    #[inline(never)]
    fn record_out_of_range(&mut self, value: f64, placement: Placement, count: T) {
        let edge = match placement {
            Placement::Below => Some(0),
            Placement::Above => Some(self.counts.len() - 1),
            _ => None,
        };
        match edge {
            Some(bin) if P::CLAMP => {
                debug!("histogram {}: clamped {} into bin {}", self.name, value, bin);
                self.gutter.clamped += count.as_u64();
                self.add_to_bin(bin, count);
            }
            _ => {
                trace!("histogram {}: dropped {} ({:?})", self.name, value, placement);
                self.gutter.record_dropped(placement, count.as_u64());
            }
        }
    }

    pub fn add<B: Borrow<Histogram1DImpl<T, P>>>(&mut self, other_histogram: B) -> Result<(), RecordError> {
        let other_histogram = other_histogram.borrow();
        if !self.axis.is_compatible_with(&other_histogram.axis) {
            return Err(RecordError::IncompatibleAxes);
        }
        // nothing is written unless every bin fits
        let merged = self
            .counts
            .iter()
            .zip(other_histogram.counts.iter())
            .map(|(count, other_count)| count.checked_add(other_count))
            .collect::<Option<Vec<T>>>()
            .ok_or(RecordError::CountExceedsTypeMax)?;
        self.counts = merged;
        self.total_count += other_histogram.total_count;
        self.gutter.add(&other_histogram.gutter);
        Ok(())
    }

    pub fn reset(&mut self) {
        for count in self.counts.iter_mut() {
            *count = T::zero();
        }
        self.total_count = 0;
        self.gutter.clear();
    }
}

impl<T: Counter, P: GutterPolicy> BinnedValues for Histogram1DImpl<T, P> {
    fn axis(&self) -> &Axis {
        &self.axis
    }
    #[inline(always)]
    fn value_at(&self, bin: usize) -> f64 {
        self.counts.get(bin).map_or(0.0, |c| c.as_f64())
    }
    fn total_area(&self) -> f64 {
        Histogram1DImpl::<T, P>::total_area(self)
    }
}

impl<T: Counter, P: GutterPolicy> PartialEq for Histogram1DImpl<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Counter, P: GutterPolicy> Clone for Histogram1DImpl<T, P> {
    fn clone(&self) -> Self {
        Histogram1DImpl {
            name: self.name.clone(),
            axis: self.axis.clone(),
            counts: self.counts.clone(),
            total_count: self.total_count,
            gutter: self.gutter,
            _policy: PhantomData,
        }
    }
}
