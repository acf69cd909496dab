/*
 * decompress_deflate.rs - the stream driver.
 *
 * Repeats the block decoder until a block with BFINAL set has been
 * consumed, then hands back the total number of bytes written.
 */

use crate::decode_blocks::BlockDecoder;
use crate::error::DeflateError;

/// Decompress a raw DEFLATE stream (no zlib or gzip framing) from `src` into
/// `dest`, returning the number of bytes written.
///
/// This is the entry point every framing adapter (zlib, gzip) wraps.
pub fn deflate_decompress(src: &[u8], dest: &mut [u8]) -> Result<usize, DeflateError> {
    let mut decoder = BlockDecoder::new(src, dest);

    loop {
        let is_final = decoder.decode_block()?;
        if is_final {
            break;
        }
    }

    Ok(decoder.written())
}
