//! Histogram core for cytometry data: fixed-bin linear and logarithmic
//! histograms in one and two dimensions, adaptive Gaussian smoothing and
//! Gaussian peak fitting over the smoothed curve.

extern crate base64;
extern crate bytes;
extern crate lazycell;
#[macro_use]
extern crate log;
extern crate miniz_oxide;
extern crate num_traits;
extern crate parking_lot;

#[macro_use]
mod core;
pub mod st;
pub mod iteration;
pub mod concurrent;
pub mod serialization;
pub mod logging;

pub use crate::core::errors::*;
pub use crate::core::util::gauss;
pub use crate::core::{Axis, BinFormula, BinnedValues, Binning, ClampOutOfRange, Counter, DropOutOfRange, Gutter,
                      GutterPolicy, Placement, Range};
pub use crate::st::{ClampingHistogram1D, ClampingHistogram2D, Histogram1D, Histogram2D, Peak, PeakFinder,
                    SmoothedCurve, Smoother};

#[cfg(test)]
pub mod tests;
