/*
 * decompress_zlib.rs - decompress with a zlib wrapper (RFC 1950).
 */

use crate::checksum::adler32;
use crate::constants::{ZLIB_CM_DEFLATE, ZLIB_FDICT_MASK, ZLIB_FOOTER_SIZE, ZLIB_MIN_HEADER_SIZE};
use crate::decompress_deflate::deflate_decompress;
use crate::error::DeflateError;

/// Decompress a zlib-wrapped DEFLATE stream from `src` into `dest`,
/// returning the number of bytes written. Validates the CMF/FLG header and
/// the trailing Adler-32 checksum; rejects preset dictionaries (FDICT).
pub fn zlib_decompress(src: &[u8], dest: &mut [u8]) -> Result<usize, DeflateError> {
    if src.len() < ZLIB_MIN_HEADER_SIZE + ZLIB_FOOTER_SIZE {
        return Err(DeflateError::InvalidZlibHeader);
    }

    let cmf = src[0];
    let flg = src[1];

    let cm = cmf & 0x0F;
    let cinfo = cmf >> 4;
    if cm != ZLIB_CM_DEFLATE || cinfo > 7 {
        return Err(DeflateError::InvalidZlibHeader);
    }
    if (cmf as u16 * 256 + flg as u16) % 31 != 0 {
        return Err(DeflateError::InvalidZlibHeader);
    }
    if flg & ZLIB_FDICT_MASK != 0 {
        return Err(DeflateError::InvalidZlibHeader);
    }
    log::trace!("zlib header ok: cm={cm} cinfo={cinfo} flg={flg:#04x}");

    let body_end = src.len() - ZLIB_FOOTER_SIZE;
    let body = &src[ZLIB_MIN_HEADER_SIZE..body_end];

    let written = deflate_decompress(body, dest)?;

    let expected_adler = u32::from_be_bytes(
        src[body_end..body_end + ZLIB_FOOTER_SIZE]
            .try_into()
            .unwrap(),
    );
    let actual_adler = adler32(&dest[..written]);
    if actual_adler != expected_adler {
        return Err(DeflateError::ChecksumMismatch);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zlib_one_zero_byte() {
        let input = [0x78, 0x9C, 0x63, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01];
        let mut out = [0u8; 8];
        let n = zlib_decompress(&input, &mut out).unwrap();
        assert_eq!(n, 1);
        assert_eq!(out[0], 0);
    }

    #[test]
    fn zlib_rejects_bad_adler() {
        let input = [0x78, 0x9C, 0x63, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02];
        let mut out = [0u8; 8];
        assert_eq!(
            zlib_decompress(&input, &mut out).unwrap_err(),
            DeflateError::ChecksumMismatch
        );
    }

    #[test]
    fn zlib_rejects_fdict() {
        // CMF=0x78, FLG=0x20: (0x78*256 + 0x20) == 30752 == 31*992, so the
        // mod-31 check passes, but bit 5 (FDICT) is set.
        let input = [0x78, 0x20, 0x63, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01];
        let mut out = [0u8; 8];
        assert_eq!(
            zlib_decompress(&input, &mut out).unwrap_err(),
            DeflateError::InvalidZlibHeader
        );
    }

    #[test]
    fn zlib_rejects_truncated_header() {
        let mut out = [0u8; 8];
        assert_eq!(
            zlib_decompress(&[0x78], &mut out).unwrap_err(),
            DeflateError::InvalidZlibHeader
        );
    }
}
