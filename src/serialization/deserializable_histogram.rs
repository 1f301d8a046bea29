use bytes::Buf;
use crate::core::{Axis, BinFormula, Binning, Counter, DecodeError, GutterPolicy, Gutter, Range};
use crate::serialization::compression::{Decompressor, ZlibDecompressor};
use crate::serialization::constants::*;
use crate::serialization::cookie::Encoding;
use crate::serialization::zigzag;
use crate::st::Histogram1DImpl;

/// Largest bin count accepted from an encoded header by default.
pub const DEFAULT_MAX_DECODED_BIN_COUNT: usize = 1 << 24;

pub trait DeserializableHistogram: Sized {
    fn deserialize_from<T: Buf>(buf: &mut T) -> Result<Self, DecodeError> {
        Self::deserialize_from_with_limit(buf, DEFAULT_MAX_DECODED_BIN_COUNT)
    }

    /// Decodes, refusing headers that declare more than `max_bin_count` bins
    /// before anything is allocated for them.
    fn deserialize_from_with_limit<T: Buf>(buf: &mut T, max_bin_count: usize) -> Result<Self, DecodeError>;

    fn deserialize_from_compressed<T: Buf>(buf: &mut T) -> Result<Self, DecodeError> {
        let mut decompressor = ZlibDecompressor::default();
        Self::deserialize_from_custom_compressed(buf, &mut decompressor)
    }

    fn deserialize_from_custom_compressed<T: Buf, S: Decompressor>(
        buf: &mut T,
        decompressor: &mut S,
    ) -> Result<Self, DecodeError> {
        ensure_remaining(buf, COMPRESSED_HEADER_SIZE)?;
        let cookie = buf.get_u32();
        let length_of_compressed = buf.get_u32();

        match Encoding::from_cookie(cookie) {
            Some(Encoding::Compressed) => {
                let available = buf.remaining();
                if available < length_of_compressed as usize {
                    return Err(DecodeError::PayloadLengthMismatch {
                        declared: length_of_compressed,
                        actual: available as u32,
                    });
                }
                let compressed = buf.copy_to_bytes(length_of_compressed as usize);
                let decompressed = decompressor.decompress(&compressed)?;
                Self::deserialize_from(&mut decompressed.as_slice())
            }
            _ => Err(DecodeError::EncodingFormatNotRecognized(cookie)),
        }
    }

    /// Accepts either encoding, dispatching on the cookie.
    fn deserialize_any(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut peek = bytes;
        ensure_remaining(&peek, 4)?;
        let cookie = peek.get_u32();
        if Encoding::from_cookie(cookie) == Some(Encoding::Compressed) {
            Self::deserialize_from_compressed(&mut &bytes[..])
        } else {
            Self::deserialize_from(&mut &bytes[..])
        }
    }
}

#[inline(always)]
fn ensure_remaining<T: Buf>(buf: &T, needed: usize) -> Result<(), DecodeError> {
    if buf.remaining() < needed {
        Err(DecodeError::UnexpectedEnd)
    } else {
        Ok(())
    }
}

fn fill_counts_from_buffer<T: Buf, C: Counter>(counts: &mut [C], mut buf: T) -> Result<(), DecodeError> {
    let length = counts.len();
    let mut idx = 0_usize;
    while buf.has_remaining() {
        let count = zigzag::get_i64(&mut buf)?;
        if count < 0 {
            idx = idx
                .checked_add(count.unsigned_abs() as usize)
                .filter(|&i| i <= length)
                .ok_or(DecodeError::PayloadExceededCountsArrayLength)?;
        } else {
            let slot = counts
                .get_mut(idx)
                .ok_or(DecodeError::PayloadExceededCountsArrayLength)?;
            *slot = C::from_i64(count).ok_or(DecodeError::CountExceedsTypeMax)?;
            idx += 1;
        }
    }
    Ok(())
}

impl<C: Counter, P: GutterPolicy> DeserializableHistogram for Histogram1DImpl<C, P> {
    fn deserialize_from_with_limit<T: Buf>(buf: &mut T, max_bin_count: usize) -> Result<Self, DecodeError> {
        ensure_remaining(buf, ENCODING_HEADER_SIZE)?;
        let cookie = buf.get_u32();
        if Encoding::from_cookie(cookie) != Some(Encoding::Plain) {
            return Err(DecodeError::EncodingFormatNotRecognized(cookie));
        }
        let payload_length = buf.get_u32();
        let bin_count = buf.get_u32() as usize;
        if bin_count > max_bin_count {
            return Err(DecodeError::BinCountExceedsLimit {
                bin_count,
                limit: max_bin_count,
            });
        }
        let flags = buf.get_u8();
        let min = buf.get_f64();
        let max = buf.get_f64();
        let gutter = Gutter {
            below: buf.get_u64(),
            above: buf.get_u64(),
            invalid: buf.get_u64(),
            clamped: buf.get_u64(),
        };
        let name_length = buf.get_u16() as usize;

        ensure_remaining(buf, name_length)?;
        let name_bytes = buf.copy_to_bytes(name_length);
        let name = String::from_utf8(name_bytes.to_vec()).map_err(|_| DecodeError::InvalidName)?;

        let binning = if flags & FLAG_LOG != 0 { Binning::Logarithmic } else { Binning::Linear };
        let formula = if flags & FLAG_LEGACY_FORMULA != 0 { BinFormula::Legacy } else { BinFormula::Proportional };
        let axis = Axis::new(Range::new(min, max)?, bin_count, binning, formula)?;

        let available = buf.remaining();
        if available < payload_length as usize {
            return Err(DecodeError::PayloadLengthMismatch {
                declared: payload_length,
                actual: available as u32,
            });
        }
        let payload = buf.copy_to_bytes(payload_length as usize);

        let mut counts = vec![C::zero(); bin_count];
        fill_counts_from_buffer(&mut counts, payload)?;

        Ok(Histogram1DImpl::from_parts(name, axis, counts, gutter))
    }
}
