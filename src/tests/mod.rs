#[macro_use]
pub mod util;
mod axis;
mod smoothing;
mod peak_finder;
