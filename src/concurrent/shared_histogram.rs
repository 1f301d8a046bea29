//! Guarded histogram for the record-then-read lifecycle.
//!
//! Ingestion threads call `record` while the histogram is in the recording phase.
//! `seal` ends that phase; from then on only `read` is accepted. Calls made in the
//! wrong phase fail with a `PhaseError` instead of racing with the other side.

use crate::core::{Counter, PhaseError};
use crate::st::Histogram1D;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::atomic::{AtomicBool, Ordering};

pub struct SharedHistogram<T: Counter = u64> {
    sealed: AtomicBool,
    histogram: RwLock<Histogram1D<T>>,
}

impl<T: Counter> SharedHistogram<T> {
    pub fn new(histogram: Histogram1D<T>) -> SharedHistogram<T> {
        SharedHistogram {
            sealed: AtomicBool::new(false),
            histogram: RwLock::new(histogram),
        }
    }

    pub fn record(&self, value: f64) -> Result<(), PhaseError> {
        self.record_all(Some(value))
    }

    pub fn record_all<I: IntoIterator<Item = f64>>(&self, values: I) -> Result<(), PhaseError> {
        if self.is_sealed() {
            return Err(PhaseError::Sealed);
        }
        let mut histogram = self.histogram.write();
        // seal takes the write lock, so this is stable while we hold it
        if self.sealed.load(Ordering::Acquire) {
            return Err(PhaseError::Sealed);
        }
        for value in values {
            histogram.count(value);
        }
        Ok(())
    }

    /// Ends the recording phase. Sealing twice is a no-op.
    pub fn seal(&self) {
        let _guard = self.histogram.write();
        self.sealed.store(true, Ordering::Release);
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Histogram1D<T>>, PhaseError> {
        if !self.is_sealed() {
            return Err(PhaseError::StillRecording);
        }
        Ok(self.histogram.read())
    }

    pub fn into_inner(self) -> Histogram1D<T> {
        self.histogram.into_inner()
    }
}
