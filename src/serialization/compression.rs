use crate::core::DecodeError;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use miniz_oxide::inflate::decompress_to_vec_zlib_with_limit;

pub const DEFAULT_DECOMPRESSION_LIMIT: usize = 1 << 30;

pub trait Compressor {
    fn compress(&mut self, src: &[u8]) -> Vec<u8>;
}

pub trait Decompressor {
    fn decompress(&mut self, src: &[u8]) -> Result<Vec<u8>, DecodeError>;
}

/// zlib framed deflate.
pub struct ZlibCompressor {
    level: u8,
}

impl ZlibCompressor {
    pub fn new(level: CompressionLevel) -> ZlibCompressor {
        ZlibCompressor { level: level as u8 }
    }
}

impl Default for ZlibCompressor {
    fn default() -> ZlibCompressor {
        ZlibCompressor::new(CompressionLevel::DefaultLevel)
    }
}

impl Compressor for ZlibCompressor {
    fn compress(&mut self, src: &[u8]) -> Vec<u8> {
        compress_to_vec_zlib(src, self.level)
    }
}

pub struct ZlibDecompressor {
    max_output: usize,
}

impl ZlibDecompressor {
    pub fn with_limit(max_output: usize) -> ZlibDecompressor {
        ZlibDecompressor { max_output }
    }
}

impl Default for ZlibDecompressor {
    fn default() -> ZlibDecompressor {
        ZlibDecompressor::with_limit(DEFAULT_DECOMPRESSION_LIMIT)
    }
}

impl Decompressor for ZlibDecompressor {
    fn decompress(&mut self, src: &[u8]) -> Result<Vec<u8>, DecodeError> {
        decompress_to_vec_zlib_with_limit(src, self.max_output).map_err(|_| DecodeError::DecompressionFailed)
    }
}
