/*
 * deflate_constants.h / gzip_constants.h
 *
 * Constant tables for the DEFLATE bitstream (RFC 1951) and its zlib
 * (RFC 1950) and gzip (RFC 1952) framings.
 */

/// Number of symbols in the literal/length alphabet (0..255 literals, 256 EOB,
/// 257..285 length codes, plus two reserved codes some encoders still emit).
pub const DEFLATE_NUM_LITLEN_SYMS: usize = 288;

/// Number of symbols in the distance alphabet.
pub const DEFLATE_NUM_OFFSET_SYMS: usize = 32;

/// Number of symbols in the code-length ("precode") alphabet used to compress
/// the literal/length and distance code-length vectors in a dynamic header.
pub const DEFLATE_NUM_PRECODE_SYMS: usize = 19;

/// Longest codeword length allowed anywhere in DEFLATE.
pub const DEFLATE_MAX_CODEWORD_LEN: usize = 15;

/// Longest codeword length allowed in the precode alphabet.
pub const DEFLATE_MAX_PRE_CODEWORD_LEN: usize = 7;

/// Longest match length a length code can produce.
pub const DEFLATE_MAX_MATCH_LEN: usize = 258;

/// Shortest match length a length code can produce.
pub const DEFLATE_MIN_MATCH_LEN: usize = 3;

/// Block type codes, as read from BTYPE.
pub const DEFLATE_BLOCKTYPE_UNCOMPRESSED: u32 = 0;
pub const DEFLATE_BLOCKTYPE_STATIC_HUFFMAN: u32 = 1;
pub const DEFLATE_BLOCKTYPE_DYNAMIC_HUFFMAN: u32 = 2;
pub const DEFLATE_BLOCKTYPE_RESERVED: u32 = 3;

/// End-of-block symbol in the literal/length alphabet.
pub const DEFLATE_END_OF_BLOCK: u16 = 256;

/// The order in which precode codeword lengths are stored in a dynamic
/// header (RFC 1951 §3.2.7).
pub const DEFLATE_PRECODE_LENS_PERMUTATION: [u8; DEFLATE_NUM_PRECODE_SYMS] = [
    16, 17, 18, 0, 8, 7, 9, 6, 10, 5, 11, 4, 12, 3, 13, 2, 14, 1, 15,
];

/// Extra bits consumed after each length code (symbols 257..287), and the
/// base length each code contributes before those extra bits are added.
/// Only the first 29 entries correspond to real codewords (symbols
/// 257..285); index 29 is a dummy sentinel, never reached because callers
/// reject a length-code index of 29 before indexing these tables.
pub const LENGTH_EXTRA_BITS: [u8; 30] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0, 127,
];

pub const LENGTH_BASE: [u16; 30] = [
    3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 15, 17, 19, 23, 27, 31, 35, 43, 51, 59, 67, 83, 99, 115, 131,
    163, 195, 227, 258, 0,
];

/// Extra bits and base values for the 30 real distance codes.
pub const DIST_EXTRA_BITS: [u8; 30] = [
    0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13,
    13,
];

pub const DIST_BASE: [u16; 30] = [
    1, 2, 3, 4, 5, 7, 9, 13, 17, 25, 33, 49, 65, 97, 129, 193, 257, 385, 513, 769, 1025, 1537,
    2049, 3073, 4097, 6145, 8193, 12289, 16385, 24577,
];

/// zlib (RFC 1950) framing.
pub const ZLIB_MIN_HEADER_SIZE: usize = 2;
pub const ZLIB_FOOTER_SIZE: usize = 4;
pub const ZLIB_CM_DEFLATE: u8 = 8;
pub const ZLIB_FDICT_MASK: u8 = 0x20;

/// gzip (RFC 1952) framing.
pub const GZIP_MIN_HEADER_SIZE: usize = 10;
pub const GZIP_FOOTER_SIZE: usize = 8;
pub const GZIP_ID1: u8 = 0x1F;
pub const GZIP_ID2: u8 = 0x8B;
pub const GZIP_CM_DEFLATE: u8 = 8;

pub const GZIP_FTEXT: u8 = 0x01;
pub const GZIP_FHCRC: u8 = 0x02;
pub const GZIP_FEXTRA: u8 = 0x04;
pub const GZIP_FNAME: u8 = 0x08;
pub const GZIP_FCOMMENT: u8 = 0x10;
pub const GZIP_FRESERVED: u8 = 0xE0;
