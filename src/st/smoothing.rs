//! Adaptive-width Gaussian smoothing of bin counts.
//!
//! Every non-empty bin spreads its count over its neighbours with a normalized
//! Gaussian kernel. The kernel narrows with the fourth root of the count, so well
//! populated bins keep their shape while sparse bins are smoothed over up to
//! `radius` neighbours on each side. Mass pushed past either end of the histogram
//! is mirrored back about the centre of the edge bin, so no count is lost.

use crate::core::util::{gauss, reflect_index};
use crate::core::{Axis, BinnedValues, Counter};
use crate::iteration::BinSeries;

pub const DEFAULT_RADIUS: usize = 10;

// the widest kernel covers +-2 sigma
const KERNEL_SPAN_SIGMAS: f64 = 2.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Smoother {
    radius: usize,
}

impl Default for Smoother {
    fn default() -> Smoother {
        Smoother::new(DEFAULT_RADIUS)
    }
}

impl Smoother {
    pub fn new(radius: usize) -> Smoother {
        Smoother { radius }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Kernel taps on each side of a bin holding `count` samples.
    pub fn taps_for(&self, count: f64) -> usize {
        if self.radius == 0 || count <= 0.0 {
            return 0;
        }
        let taps = (self.radius as f64 / count.sqrt().sqrt()).ceil() as usize;
        taps.max(1).min(self.radius)
    }

    /// One-sided weights `w[0..=taps]`, normalized so that `w[0] + 2 * sum(w[1..])` is 1.
    pub fn kernel(&self, count: f64) -> Vec<f64> {
        let taps = self.taps_for(count);
        if taps == 0 {
            return vec![1.0];
        }
        let sigma = taps as f64 / KERNEL_SPAN_SIGMAS;
        let mut weights: Vec<f64> = (0..=taps).map(|i| gauss(i as f64, 0.0, sigma, 1.0)).collect();
        let norm = weights[0] + 2.0 * weights[1..].iter().sum::<f64>();
        for w in weights.iter_mut() {
            *w /= norm;
        }
        weights
    }

    pub fn smooth<T: Counter>(&self, counts: &[T]) -> Vec<f64> {
        let length = counts.len();
        if length == 0 {
            return Vec::new();
        }
        let radius = self.radius;
        let mut dest = vec![0.0; length + 2 * radius];

        for (bin, count) in counts.iter().enumerate() {
            let count = count.as_f64();
            if count == 0.0 {
                continue;
            }
            let center = bin + radius;
            let weights = self.kernel(count);
            dest[center] += count * weights[0];
            for (i, w) in weights.iter().enumerate().skip(1) {
                let mass = count * w;
                dest[center - i] += mass;
                dest[center + i] += mass;
            }
        }

        let mut smoothed = dest[radius..radius + length].to_vec();
        for i in 1..=radius {
            let left = dest[radius - i];
            if left != 0.0 {
                smoothed[reflect_index(-(i as isize), length)] += left;
            }
            let right = dest[radius + length - 1 + i];
            if right != 0.0 {
                smoothed[reflect_index((length - 1 + i) as isize, length)] += right;
            }
        }
        smoothed
    }
}

/// Smoothed densities of a histogram together with the axis they were binned on.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothedCurve {
    axis: Axis,
    values: Vec<f64>,
    total_area: f64,
}

impl SmoothedCurve {
    pub fn new(axis: Axis, values: Vec<f64>) -> SmoothedCurve {
        let total_area = values.iter().sum();
        SmoothedCurve {
            axis,
            values,
            total_area,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn series(&self) -> BinSeries<'_, Self> {
        BinSeries::new(self)
    }
}

impl BinnedValues for SmoothedCurve {
    fn axis(&self) -> &Axis {
        &self.axis
    }
    #[inline(always)]
    fn value_at(&self, bin: usize) -> f64 {
        self.values.get(bin).copied().unwrap_or(0.0)
    }
    fn total_area(&self) -> f64 {
        self.total_area
    }
}
