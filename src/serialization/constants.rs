pub const V1_ENCODING_COOKIE_BASE: u32 = 0x3c58_9c00;
pub const V1_COMPRESSED_ENCODING_COOKIE_BASE: u32 = 0x3c58_9d00;

// cookie, payload length, bin count, flags, range, gutter, name length
pub const ENCODING_HEADER_SIZE: usize = 4 + 4 + 4 + 1 + 2 * 8 + 4 * 8 + 2;
pub const COMPRESSED_HEADER_SIZE: usize = 4 + 4;

pub const FLAG_LOG: u8 = 0x01;
pub const FLAG_LEGACY_FORMULA: u8 = 0x02;
