/// Decides what happens to a sample whose bin falls outside the axis.
pub trait GutterPolicy {
    const CLAMP: bool;
}

/// Out-of-range samples are dropped and tallied in the gutter.
#[derive(Clone, Copy, Debug)]
pub struct DropOutOfRange;

impl GutterPolicy for DropOutOfRange {
    const CLAMP: bool = false;
}

/// Out-of-range samples are added to the nearest edge bin and tallied as clamped.
#[derive(Clone, Copy, Debug)]
pub struct ClampOutOfRange;

impl GutterPolicy for ClampOutOfRange {
    const CLAMP: bool = true;
}
