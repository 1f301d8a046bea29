pub mod zigzag;
pub mod serializable_histogram;
pub mod deserializable_histogram;
pub mod compression;
pub mod constants;
pub mod cookie;

pub use self::compression::{Compressor, Decompressor, ZlibCompressor, ZlibDecompressor};
pub use self::cookie::Encoding;
pub use self::deserializable_histogram::{DeserializableHistogram, DEFAULT_MAX_DECODED_BIN_COUNT};
pub use self::serializable_histogram::SerializableHistogram;
