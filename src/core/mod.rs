#[macro_use]
pub mod util;
pub mod errors;
pub mod range;
pub mod axis;
pub mod counter;
pub mod gutter;
pub mod gutter_policy;
pub mod binned_values;

pub use self::axis::{Axis, BinFormula, Binning, Placement};
pub use self::binned_values::BinnedValues;
pub use self::counter::Counter;
pub use self::errors::*;
pub use self::gutter::Gutter;
pub use self::gutter_policy::{ClampOutOfRange, DropOutOfRange, GutterPolicy};
pub use self::range::Range;
