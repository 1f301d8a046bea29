use crate::serialization::constants::*;

const VERSION_NIBBLE: u32 = 0x10;

/// The framing an encoded histogram starts with, announced by its leading cookie.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Encoding {
    Plain,
    Compressed,
}

impl Encoding {
    pub fn cookie(self) -> u32 {
        let base = match self {
            Encoding::Plain => V1_ENCODING_COOKIE_BASE,
            Encoding::Compressed => V1_COMPRESSED_ENCODING_COOKIE_BASE,
        };
        base | VERSION_NIBBLE
    }

    /// Version nibble is ignored, any other difference is an unknown cookie.
    pub fn from_cookie(cookie: u32) -> Option<Encoding> {
        match cookie & !0xf0 {
            V1_ENCODING_COOKIE_BASE => Some(Encoding::Plain),
            V1_COMPRESSED_ENCODING_COOKIE_BASE => Some(Encoding::Compressed),
            _ => None,
        }
    }
}
