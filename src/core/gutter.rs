use crate::core::Placement;

/// Tally of samples that did not land in the bin their value maps to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Gutter {
    pub below: u64,
    pub above: u64,
    pub invalid: u64,
    pub clamped: u64,
}

impl Gutter {
    pub fn new() -> Gutter {
        Gutter::default()
    }

    /// Samples that were not counted in any bin.
    pub fn dropped(&self) -> u64 {
        self.below + self.above + self.invalid
    }

    pub(crate) fn record_dropped(&mut self, placement: Placement, count: u64) {
        match placement {
            Placement::Below => self.below += count,
            Placement::Above => self.above += count,
            Placement::Invalid => self.invalid += count,
            Placement::Bin(_) => {}
        }
    }

    pub(crate) fn add(&mut self, other: &Gutter) {
        self.below += other.below;
        self.above += other.above;
        self.invalid += other.invalid;
        self.clamped += other.clamped;
    }

    pub fn clear(&mut self) {
        *self = Gutter::default();
    }
}
