//! A compact decompressor for the DEFLATE bitstream (RFC 1951) and its two
//! standard framing envelopes, zlib (RFC 1950) and gzip (RFC 1952).
//!
//! The whole compressed stream is presented at once, into a caller-provided
//! output buffer of known capacity; there is no streaming (push/pull) API,
//! no compressor, and no support for zlib preset dictionaries or
//! multi-member gzip concatenation. This mirrors the scope of the
//! single-shot `libdeflate_*_decompress()` family this crate descends from.

pub mod bitstream;
pub mod checksum;
mod constants;
mod decode_blocks;
pub mod decompress_deflate;
pub mod decompress_gzip;
pub mod decompress_zlib;
pub mod error;
pub mod ffi;
pub mod huffman;

#[macro_use]
extern crate static_assertions;

pub use decompress_deflate::deflate_decompress;
pub use decompress_gzip::gzip_decompress;
pub use decompress_zlib::zlib_decompress;
pub use error::DeflateError;

const_assert!(constants::DEFLATE_NUM_LITLEN_SYMS == 288);
const_assert!(constants::DEFLATE_NUM_OFFSET_SYMS == 32);
const_assert!(constants::DEFLATE_NUM_PRECODE_SYMS == 19);

/// Adler-32 checksum of an arbitrary buffer (RFC 1950 §9). Empty input
/// yields 1.
pub fn adler32(data: &[u8]) -> u32 {
    checksum::adler32(data)
}

/// CRC-32 checksum of an arbitrary buffer (ISO 3309). Empty input yields 0.
pub fn crc32(data: &[u8]) -> u32 {
    checksum::crc32(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_entry_points_agree_on_a_plain_byte() {
        let _ = env_logger::try_init();

        let raw = [0x63, 0x00, 0x00];
        let zlib = [0x78, 0x9C, 0x63, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01];
        let gzip = [
            0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x0B, 0x63, 0x00, 0x00, 0x8D,
            0xEF, 0x02, 0xD2, 0x01, 0x00, 0x00, 0x00,
        ];

        let mut out_raw = [0u8; 4];
        let mut out_zlib = [0u8; 4];
        let mut out_gzip = [0u8; 4];

        let n_raw = deflate_decompress(&raw, &mut out_raw).unwrap();
        let n_zlib = zlib_decompress(&zlib, &mut out_zlib).unwrap();
        let n_gzip = gzip_decompress(&gzip, &mut out_gzip).unwrap();

        assert_eq!(&out_raw[..n_raw], &out_zlib[..n_zlib]);
        assert_eq!(&out_zlib[..n_zlib], &out_gzip[..n_gzip]);
    }

    #[test]
    fn checksums_of_empty_input() {
        assert_eq!(adler32(&[]), 1);
        assert_eq!(crc32(&[]), 0);
    }
}
