//! ZigZag LEB128 varints, at most nine bytes with the ninth carrying a full eight bits.

use crate::core::{DecodeError, EncodeError};
use bytes::{Buf, BufMut};

const MAX_SEVEN_BIT_CHUNKS: usize = 8;

pub fn put_u64<T: BufMut>(buffer: &mut T, value: u64) -> Result<(), EncodeError> {
    if value >> 63 == 1 {
        Err(EncodeError::ValueNotLEBEncodable)
    } else {
        put_i64(buffer, value as i64);
        Ok(())
    }
}

pub fn put_i64<T: BufMut>(buffer: &mut T, value: i64) {
    let mut value = ((value << 1) ^ (value >> 63)) as u64;
    for _ in 0..MAX_SEVEN_BIT_CHUNKS {
        if value >> 7 == 0 {
            buffer.put_u8(value as u8);
            return;
        }
        buffer.put_u8(((value & 0x7F) | 0x80) as u8);
        value >>= 7;
    }
    buffer.put_u8(value as u8);
}

pub fn get_i64<T: Buf>(buffer: &mut T) -> Result<i64, DecodeError> {
    let mut value = 0_u64;
    let mut complete = false;
    for factor in 0..MAX_SEVEN_BIT_CHUNKS {
        let byte = next_byte(buffer)?;
        value |= ((byte & 0x7F) as u64) << (7 * factor);
        if byte & 0x80 == 0 {
            complete = true;
            break;
        }
    }
    if !complete {
        value |= (next_byte(buffer)? as u64) << (7 * MAX_SEVEN_BIT_CHUNKS);
    }
    Ok(((value >> 1) as i64) ^ -((value & 1) as i64))
}

#[inline(always)]
fn next_byte<T: Buf>(buffer: &mut T) -> Result<u8, DecodeError> {
    if !buffer.has_remaining() {
        return Err(DecodeError::UnexpectedEnd);
    }
    Ok(buffer.get_u8())
}
