use crate::core::util::round_half_up;
use crate::core::{CreationError, Range};

pub const MAX_BIN_COUNT: usize = i32::MAX as usize;

/// How sample values are spread over the bins of an axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Binning {
    Linear,
    Logarithmic,
}

/// Which bin index formula an axis uses.
///
/// `Proportional` maps the range onto `[0, bin_count)` in equal steps (of value or of
/// log value). `Legacy` is the formula older saved analyses were binned with,
/// `round(0.5 + ((x - min) * width) / bin_count)`, which scales by the range width
/// instead of dividing by it. For `Legacy` logarithmic axes the range is given in log
/// units and `x` is replaced by `ln(x)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinFormula {
    Proportional,
    Legacy,
}

/// Where a sample lands on an axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Placement {
    Bin(usize),
    Below,
    Above,
    Invalid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    range: Range,
    bin_count: usize,
    binning: Binning,
    formula: BinFormula,
    log_span: f64,
}

macro_rules! expect {
    ($t:expr, $e:expr) => {
        if $t { return Err($e); }
    };
}

impl Axis {
    pub fn new(range: Range, bin_count: usize, binning: Binning, formula: BinFormula) -> Result<Axis, CreationError> {
        expect!(bin_count == 0, CreationError::ZeroBinCount);
        expect!(bin_count > MAX_BIN_COUNT, CreationError::BinCountExceedsMax);
        expect!(range.width() == 0.0, CreationError::ZeroWidthRange);

        let log_span = if binning == Binning::Logarithmic && formula == BinFormula::Proportional {
            expect!(range.min() <= 0.0, CreationError::NonPositiveLogRange);
            (range.max() / range.min()).ln()
        } else {
            0.0
        };

        Ok(Axis {
            range,
            bin_count,
            binning,
            formula,
            log_span,
        })
    }

    pub fn linear(range: Range, bin_count: usize) -> Result<Axis, CreationError> {
        Axis::new(range, bin_count, Binning::Linear, BinFormula::Proportional)
    }

    pub fn logarithmic(range: Range, bin_count: usize) -> Result<Axis, CreationError> {
        Axis::new(range, bin_count, Binning::Logarithmic, BinFormula::Proportional)
    }

    #[inline(always)]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline(always)]
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    #[inline(always)]
    pub fn binning(&self) -> Binning {
        self.binning
    }

    #[inline(always)]
    pub fn formula(&self) -> BinFormula {
        self.formula
    }

    #[inline(always)]
    pub fn is_log(&self) -> bool {
        self.binning == Binning::Logarithmic
    }

    /// Unrounded bin coordinate of `value`, NaN when it has none.
    #[inline]
    fn position(&self, value: f64) -> f64 {
        let n = self.bin_count as f64;
        let min = self.range.min();
        let width = self.range.width();
        match (self.formula, self.binning) {
            (BinFormula::Proportional, Binning::Linear) => (value - min) / width * n,
            (BinFormula::Proportional, Binning::Logarithmic) => {
                if value <= 0.0 {
                    f64::NEG_INFINITY
                } else {
                    (value / min).ln() / self.log_span * n
                }
            }
            (BinFormula::Legacy, Binning::Linear) => round_half_up(0.5 + ((value - min) * width) / n),
            (BinFormula::Legacy, Binning::Logarithmic) => {
                if value <= 0.0 {
                    f64::NAN
                } else {
                    round_half_up(0.5 + ((value.ln() - min) * width) / n)
                }
            }
        }
    }

    #[inline]
    pub fn place(&self, value: f64) -> Placement {
        if value.is_nan() {
            return Placement::Invalid;
        }
        let bin = self.position(value).floor();
        if bin.is_nan() {
            Placement::Invalid
        } else if bin < 0.0 {
            Placement::Below
        } else if bin >= self.bin_count as f64 {
            // the upper edge of a proportional axis is closed
            if self.formula == BinFormula::Proportional && value <= self.range.max() {
                Placement::Bin(self.bin_count - 1)
            } else {
                Placement::Above
            }
        } else {
            Placement::Bin(bin as usize)
        }
    }

    /// Representative value of `bin`, the inverse of `place` at the bin centre.
    pub fn bin_center(&self, bin: usize) -> f64 {
        let n = self.bin_count as f64;
        let min = self.range.min();
        let width = self.range.width();
        let b = bin as f64;
        match (self.formula, self.binning) {
            (BinFormula::Proportional, Binning::Linear) => min + (b + 0.5) * width / n,
            (BinFormula::Proportional, Binning::Logarithmic) => min * (self.log_span * (b + 0.5) / n).exp(),
            // legacy bin b holds (x - min) * width / n in [b - 1, b)
            (BinFormula::Legacy, Binning::Linear) => min + (b - 0.5) * n / width,
            (BinFormula::Legacy, Binning::Logarithmic) => (min + (b - 0.5) * n / width).exp(),
        }
    }

    pub fn is_compatible_with(&self, other: &Axis) -> bool {
        check_eq!(self.bin_count, other.bin_count);
        check_eq!(self.binning, other.binning);
        check_eq!(self.formula, other.formula);
        self.range == other.range
    }
}
