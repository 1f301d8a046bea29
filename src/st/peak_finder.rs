use crate::core::BinnedValues;
use crate::st::peak::{sort_by_mean, Peak};

pub const DEFAULT_MIN_AREA_FRACTION: f64 = 0.01;

/// Splits a (smoothed) histogram into contiguous populations and fits a peak to each.
///
/// A population ends at an empty bin or at a valley, a bin lower than its left
/// neighbour and no higher than its right one. The valley bin opens the next
/// population. Populations holding less than `min_area_fraction` of the total area
/// are discarded as noise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakFinder {
    min_area_fraction: f64,
}

impl Default for PeakFinder {
    fn default() -> PeakFinder {
        PeakFinder::new(DEFAULT_MIN_AREA_FRACTION)
    }
}

impl PeakFinder {
    pub fn new(min_area_fraction: f64) -> PeakFinder {
        PeakFinder {
            min_area_fraction: min_area_fraction.max(0.0),
        }
    }

    pub fn min_area_fraction(&self) -> f64 {
        self.min_area_fraction
    }

    /// Half-open bin ranges of the populations, left to right.
    pub fn populations<H: BinnedValues + ?Sized>(&self, values: &H) -> Vec<(usize, usize)> {
        let length = values.bin_count();
        let mut ranges = Vec::new();
        let mut start: Option<usize> = None;
        for bin in 0..length {
            if values.value_at(bin) <= 0.0 {
                if let Some(s) = start.take() {
                    ranges.push((s, bin));
                }
                continue;
            }
            match start {
                None => start = Some(bin),
                Some(s) if is_valley(values, bin) => {
                    ranges.push((s, bin));
                    start = Some(bin);
                }
                Some(_) => {}
            }
        }
        if let Some(s) = start {
            ranges.push((s, length));
        }
        ranges
    }

    pub fn find<'a, H: BinnedValues + ?Sized>(&self, values: &'a H) -> Vec<Peak<'a, H>> {
        let total_area = values.total_area();
        if !(total_area > 0.0) {
            return Vec::new();
        }
        let threshold = self.min_area_fraction * total_area;

        let mut peaks = Vec::new();
        for (start, end) in self.populations(values) {
            let area = (start..end).fold(0.0, |t, bin| t + values.value_at(bin));
            if area <= 0.0 || area < threshold {
                trace!("discarding population [{}, {}) with area {}", start, end, area);
                continue;
            }
            let mean = (start..end).fold(0.0, |t, bin| t + bin as f64 * values.value_at(bin)) / area;
            let variance = (start..end).fold(0.0, |t, bin| {
                let dev = bin as f64 - mean;
                t + values.value_at(bin) * dev * dev
            }) / area;
            // populations are non-empty and in range, so the bounds always hold
            if let Ok(mut peak) = Peak::new(values, mean, variance.sqrt(), area, start, end - 1) {
                peak.calc_stats();
                peaks.push(peak);
            }
        }
        sort_by_mean(&mut peaks);
        debug!("found {} peaks", peaks.len());
        peaks
    }
}

fn is_valley<H: BinnedValues + ?Sized>(values: &H, bin: usize) -> bool {
    if bin == 0 || bin + 1 >= values.bin_count() {
        return false;
    }
    let value = values.value_at(bin);
    value < values.value_at(bin - 1) && value <= values.value_at(bin + 1)
}
