pub mod histogram;
pub mod histogram_2d;
pub mod smoothing;
pub mod peak;
pub mod peak_finder;

pub use self::histogram::{ClampingHistogram1D, Histogram1D, Histogram1DImpl};
pub use self::histogram_2d::{ClampingHistogram2D, Histogram2D, Histogram2DImpl};
pub use self::peak::{compare_by_mean, negative_peak, positive_peak, sort_by_mean, Peak};
pub use self::peak_finder::PeakFinder;
pub use self::smoothing::{SmoothedCurve, Smoother};
