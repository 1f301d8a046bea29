pub mod shared_histogram;

pub use self::shared_histogram::SharedHistogram;
