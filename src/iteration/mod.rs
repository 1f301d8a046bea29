pub mod series;

pub use self::series::{BinSeries, PeakCurve, SeriesPoint};
