use bytes::{BufMut, BytesMut};
use crate::core::{BinFormula, Counter, EncodeError, GutterPolicy};
use crate::serialization::compression::{Compressor, ZlibCompressor};
use crate::serialization::constants::*;
use crate::serialization::cookie::Encoding;
use crate::serialization::zigzag;
use crate::st::Histogram1DImpl;

pub trait SerializableHistogram {
    /// Writes the uncompressed encoding, returning the number of bytes written.
    fn serialize_into<T: BufMut>(&self, buf: &mut T) -> Result<usize, EncodeError>;

    fn serialize_into_custom_compressed<T: BufMut, S: Compressor>(
        &self,
        buf: &mut T,
        compressor: &mut S,
    ) -> Result<usize, EncodeError>;

    fn serialize(&self) -> Result<BytesMut, EncodeError> {
        let mut buffer = BytesMut::with_capacity(ENCODING_HEADER_SIZE);
        self.serialize_into(&mut buffer)?;
        Ok(buffer)
    }

    fn serialize_compressed(&self) -> Result<BytesMut, EncodeError> {
        let mut buffer = BytesMut::with_capacity(COMPRESSED_HEADER_SIZE);
        self.serialize_into_compressed(&mut buffer)?;
        Ok(buffer)
    }

    fn serialize_into_compressed<T: BufMut>(&self, buf: &mut T) -> Result<usize, EncodeError> {
        let mut compressor = ZlibCompressor::default();
        self.serialize_into_custom_compressed(buf, &mut compressor)
    }
}

// zero bins are run-length encoded as a negative count
fn fill_buffer_from_counts_slice<T: BufMut, C: Counter>(buf: &mut T, counts_slice: &[C]) -> Result<(), EncodeError> {
    let mut zeroes_count = 0_i64;
    for count in counts_slice.iter() {
        if *count == C::zero() {
            zeroes_count += 1;
        } else {
            if zeroes_count != 0 {
                zigzag::put_i64(buf, -zeroes_count);
                zeroes_count = 0;
            }
            zigzag::put_u64(buf, count.as_u64())?;
        }
    }
    Ok(())
}

impl<C: Counter, P: GutterPolicy> SerializableHistogram for Histogram1DImpl<C, P> {
    fn serialize_into<T: BufMut>(&self, buf: &mut T) -> Result<usize, EncodeError> {
        let name = self.name().as_bytes();
        if name.len() > u16::MAX as usize {
            return Err(EncodeError::NameTooLong);
        }

        let mut payload = BytesMut::with_capacity(self.bin_count());
        fill_buffer_from_counts_slice(&mut payload, self.counts())?;

        let axis = self.axis();
        let mut flags = 0_u8;
        if axis.is_log() {
            flags |= FLAG_LOG;
        }
        if axis.formula() == BinFormula::Legacy {
            flags |= FLAG_LEGACY_FORMULA;
        }
        let gutter = self.gutter();

        buf.put_u32(Encoding::Plain.cookie());
        buf.put_u32(payload.len() as u32);
        buf.put_u32(self.bin_count() as u32);
        buf.put_u8(flags);
        buf.put_f64(axis.range().min());
        buf.put_f64(axis.range().max());
        buf.put_u64(gutter.below);
        buf.put_u64(gutter.above);
        buf.put_u64(gutter.invalid);
        buf.put_u64(gutter.clamped);
        buf.put_u16(name.len() as u16);
        buf.put_slice(name);
        buf.put_slice(&payload);

        Ok(ENCODING_HEADER_SIZE + name.len() + payload.len())
    }

    fn serialize_into_custom_compressed<T: BufMut, S: Compressor>(
        &self,
        buf: &mut T,
        compressor: &mut S,
    ) -> Result<usize, EncodeError> {
        let uncompressed = self.serialize()?;
        let compressed = compressor.compress(&uncompressed);

        buf.put_u32(Encoding::Compressed.cookie());
        buf.put_u32(compressed.len() as u32);
        buf.put_slice(&compressed);

        Ok(COMPRESSED_HEADER_SIZE + compressed.len())
    }
}
