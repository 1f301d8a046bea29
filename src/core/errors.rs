use std::error::Error;
use std::fmt;
use std::io;

#[derive(Clone, Debug, PartialEq)]
pub enum RangeError {
    Inverted { min: f64, max: f64 },
    NotFinite,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CreationError {
    ZeroBinCount,
    ZeroWidthRange,
    NonPositiveLogRange,
    BinCountExceedsMax,
    Range(RangeError),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordError {
    IncompatibleAxes,
    CountExceedsTypeMax,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PeakError {
    BoundsInverted { min: usize, max: usize },
    BoundsExceedHistogram { max: usize, bin_count: usize },
    NegativeArea,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PhaseError {
    Sealed,
    StillRecording,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EncodeError {
    NameTooLong,
    ValueNotLEBEncodable,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DecodeError {
    UnexpectedEnd,
    EncodingFormatNotRecognized(u32),
    PayloadLengthMismatch { declared: u32, actual: u32 },
    PayloadExceededCountsArrayLength,
    BinCountExceedsLimit { bin_count: usize, limit: usize },
    CountExceedsTypeMax,
    InvalidName,
    DecompressionFailed,
    HistogramCreationFailed(CreationError),
}

#[derive(Debug)]
pub enum LogError {
    Io(io::Error),
    Encode(EncodeError),
    Decode(DecodeError),
    Base64(base64::DecodeError),
    MalformedLine(String),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RangeError::Inverted { min, max } => write!(f, "range max {} is below min {}", max, min),
            RangeError::NotFinite => write!(f, "range endpoints must be finite"),
        }
    }
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CreationError::ZeroBinCount => write!(f, "a histogram needs at least one bin"),
            CreationError::ZeroWidthRange => write!(f, "cannot bin over a zero-width range"),
            CreationError::NonPositiveLogRange => write!(f, "logarithmic axes need a range above zero"),
            CreationError::BinCountExceedsMax => write!(f, "bin count exceeds the supported maximum"),
            CreationError::Range(ref e) => write!(f, "invalid range: {}", e),
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordError::IncompatibleAxes => write!(f, "histograms do not share the same axes"),
            RecordError::CountExceedsTypeMax => write!(f, "count does not fit the counter type"),
        }
    }
}

impl fmt::Display for PeakError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PeakError::BoundsInverted { min, max } => write!(f, "peak bounds inverted: [{}, {})", min, max),
            PeakError::BoundsExceedHistogram { max, bin_count } => {
                write!(f, "peak bound {} exceeds histogram of {} bins", max, bin_count)
            }
            PeakError::NegativeArea => write!(f, "peak area must not be negative"),
        }
    }
}

impl fmt::Display for PhaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PhaseError::Sealed => write!(f, "histogram is sealed, no more samples can be recorded"),
            PhaseError::StillRecording => write!(f, "histogram is still recording"),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EncodeError::NameTooLong => write!(f, "histogram name is too long to encode"),
            EncodeError::ValueNotLEBEncodable => write!(f, "count cannot be LEB128 encoded"),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::UnexpectedEnd => write!(f, "buffer ended before the histogram was complete"),
            DecodeError::EncodingFormatNotRecognized(c) => write!(f, "unknown encoding cookie {:#x}", c),
            DecodeError::PayloadLengthMismatch { declared, actual } => {
                write!(f, "payload declared {} bytes but {} are available", declared, actual)
            }
            DecodeError::PayloadExceededCountsArrayLength => write!(f, "payload holds more bins than declared"),
            DecodeError::BinCountExceedsLimit { bin_count, limit } => {
                write!(f, "encoded histogram has {} bins, the decode limit is {}", bin_count, limit)
            }
            DecodeError::CountExceedsTypeMax => write!(f, "count does not fit the counter type"),
            DecodeError::InvalidName => write!(f, "histogram name is not valid UTF-8"),
            DecodeError::DecompressionFailed => write!(f, "decompression failed"),
            DecodeError::HistogramCreationFailed(ref e) => write!(f, "cannot rebuild histogram: {}", e),
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LogError::Io(ref e) => write!(f, "i/o error: {}", e),
            LogError::Encode(ref e) => write!(f, "{}", e),
            LogError::Decode(ref e) => write!(f, "{}", e),
            LogError::Base64(ref e) => write!(f, "base64: {}", e),
            LogError::MalformedLine(ref line) => write!(f, "malformed log line: {}", line),
        }
    }
}

impl Error for RangeError {}
impl Error for CreationError {}
impl Error for RecordError {}
impl Error for PeakError {}
impl Error for PhaseError {}
impl Error for EncodeError {}
impl Error for DecodeError {}
impl Error for LogError {}

impl From<RangeError> for CreationError {
    fn from(e: RangeError) -> Self {
        CreationError::Range(e)
    }
}

impl From<CreationError> for DecodeError {
    fn from(e: CreationError) -> Self {
        DecodeError::HistogramCreationFailed(e)
    }
}

impl From<RangeError> for DecodeError {
    fn from(e: RangeError) -> Self {
        DecodeError::HistogramCreationFailed(CreationError::Range(e))
    }
}

impl From<io::Error> for LogError {
    fn from(e: io::Error) -> Self {
        LogError::Io(e)
    }
}

impl From<EncodeError> for LogError {
    fn from(e: EncodeError) -> Self {
        LogError::Encode(e)
    }
}

impl From<DecodeError> for LogError {
    fn from(e: DecodeError) -> Self {
        LogError::Decode(e)
    }
}

impl From<base64::DecodeError> for LogError {
    fn from(e: base64::DecodeError) -> Self {
        LogError::Base64(e)
    }
}
