use crate::core::*;
use std::marker::PhantomData;

/// Two dimensional frequency counter, binned independently along x and y.
///
/// Counts are stored row-major (`y * x_bins + x`). A logarithmic 2D histogram is the
/// same type built over logarithmic axes, see `log_square`.
pub struct Histogram2DImpl<T, P: GutterPolicy> {
    x_axis: Axis,
    y_axis: Axis,
    counts: Vec<T>,
    total_count: u64,
    mode: T,
    gutter: Gutter,
    _policy: PhantomData<P>,
}

pub type Histogram2D<T = u64> = Histogram2DImpl<T, DropOutOfRange>;
pub type ClampingHistogram2D<T = u64> = Histogram2DImpl<T, ClampOutOfRange>;

impl<T: Counter, P: GutterPolicy> Histogram2DImpl<T, P> {
    pub fn new(x_axis: Axis, y_axis: Axis) -> Result<Self, CreationError> {
        let length = x_axis
            .bin_count()
            .checked_mul(y_axis.bin_count())
            .filter(|&l| l <= crate::core::axis::MAX_BIN_COUNT)
            .ok_or(CreationError::BinCountExceedsMax)?;
        Ok(Histogram2DImpl {
            x_axis,
            y_axis,
            counts: vec![T::zero(); length],
            total_count: 0,
            mode: T::zero(),
            gutter: Gutter::new(),
            _policy: PhantomData,
        })
    }

    pub fn square(size: usize, x_range: Range, y_range: Range) -> Result<Self, CreationError> {
        Self::new(Axis::linear(x_range, size)?, Axis::linear(y_range, size)?)
    }

    pub fn log_square(size: usize, x_range: Range, y_range: Range) -> Result<Self, CreationError> {
        Self::new(Axis::logarithmic(x_range, size)?, Axis::logarithmic(y_range, size)?)
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub fn x_bins(&self) -> usize {
        self.x_axis.bin_count()
    }

    pub fn y_bins(&self) -> usize {
        self.y_axis.bin_count()
    }

    pub fn counts(&self) -> &[T] {
        &self.counts
    }

    pub fn count_at(&self, x_bin: usize, y_bin: usize) -> Option<T> {
        if x_bin >= self.x_bins() || y_bin >= self.y_bins() {
            return None;
        }
        Some(self.counts[self.index(x_bin, y_bin)])
    }

    pub fn row(&self, y_bin: usize) -> Option<&[T]> {
        if y_bin >= self.y_bins() {
            return None;
        }
        let start = y_bin * self.x_bins();
        Some(&self.counts[start..start + self.x_bins()])
    }

    pub fn get_total_count(&self) -> u64 {
        self.total_count
    }

    pub fn gutter_count(&self) -> u64 {
        self.gutter.dropped()
    }

    pub fn gutter(&self) -> &Gutter {
        &self.gutter
    }

    /// Highest count held by any single bin.
    pub fn mode(&self) -> T {
        self.mode
    }

    pub fn x_marginal(&self) -> Vec<u64> {
        let mut marginal = vec![0; self.x_bins()];
        for row in self.counts.chunks(self.x_bins()) {
            for (total, count) in marginal.iter_mut().zip(row.iter()) {
                *total += count.as_u64();
            }
        }
        marginal
    }

    pub fn y_marginal(&self) -> Vec<u64> {
        self.counts
            .chunks(self.x_bins())
            .map(|row| row.iter().fold(0, |t, c| t + c.as_u64()))
            .collect()
    }

    /// Bin counts scaled against the mode into `[0, 1]`, row-major.
    pub fn normalized_density(&self) -> Vec<f64> {
        let mode = self.mode.as_f64();
        if mode == 0.0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts.iter().map(|c| c.as_f64() / mode).collect()
    }

    #[inline(always)]
    fn index(&self, x_bin: usize, y_bin: usize) -> usize {
        y_bin * self.x_bins() + x_bin
    }

    #[inline(always)]
    pub fn count(&mut self, x: f64, y: f64) {
        self.count_n(x, y, T::one())
    }

    pub fn count_n(&mut self, x: f64, y: f64, count: T) {
        let x_placement = self.x_axis.place(x);
        let y_placement = self.y_axis.place(y);
        let x_bin = resolve::<P>(x_placement, self.x_bins());
        let y_bin = resolve::<P>(y_placement, self.y_bins());
        match (x_bin, y_bin) {
            (Some(x_bin), Some(y_bin)) => {
                if !matches!(x_placement, Placement::Bin(_)) || !matches!(y_placement, Placement::Bin(_)) {
                    debug!("clamped ({}, {}) into bin ({}, {})", x, y, x_bin, y_bin);
                    self.gutter.clamped += count.as_u64();
                }
                let idx = self.index(x_bin, y_bin);
                self.counts[idx] += count;
                self.total_count += count.as_u64();
                if self.counts[idx] > self.mode {
                    self.mode = self.counts[idx];
                }
            }
            _ => {
                let placement = if x_bin.is_none() { x_placement } else { y_placement };
                trace!("dropped ({}, {}) ({:?})", x, y, placement);
                self.gutter.record_dropped(placement, count.as_u64());
            }
        }
    }

    pub fn reset(&mut self) {
        for count in self.counts.iter_mut() {
            *count = T::zero();
        }
        self.total_count = 0;
        self.mode = T::zero();
        self.gutter.clear();
    }
}

#[inline(always)]
fn resolve<P: GutterPolicy>(placement: Placement, bin_count: usize) -> Option<usize> {
    match placement {
        Placement::Bin(bin) => Some(bin),
        Placement::Below if P::CLAMP => Some(0),
        Placement::Above if P::CLAMP => Some(bin_count - 1),
        _ => None,
    }
}
