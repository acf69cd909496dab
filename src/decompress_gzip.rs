/*
 * decompress_gzip.rs - decompress with a gzip wrapper (RFC 1952).
 *
 * Structure follows the teacher crate's gzip_decompress.c-derived adapter:
 * fixed fields, then the optional FEXTRA/FNAME/FCOMMENT/FHCRC fields in
 * order, then the DEFLATE body, then the 8-byte trailer.
 */

use crate::checksum::crc32;
use crate::constants::*;
use crate::decompress_deflate::deflate_decompress;
use crate::error::DeflateError;

struct GzipCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> GzipCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_u8(&mut self) -> Result<u8, DeflateError> {
        let b = *self
            .data
            .get(self.pos)
            .ok_or(DeflateError::InvalidGzipHeader)?;
        self.pos += 1;
        Ok(b)
    }

    fn read_u16_le(&mut self) -> Result<u16, DeflateError> {
        let lo = self.read_u8()? as u16;
        let hi = self.read_u8()? as u16;
        Ok(lo | (hi << 8))
    }

    fn skip(&mut self, n: usize) -> Result<(), DeflateError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&e| e <= self.data.len())
            .ok_or(DeflateError::InvalidGzipHeader)?;
        self.pos = end;
        Ok(())
    }

    fn skip_nul_terminated(&mut self) -> Result<(), DeflateError> {
        loop {
            if self.read_u8()? == 0 {
                return Ok(());
            }
        }
    }
}

/// Decompress a gzip-wrapped DEFLATE stream from `src` into `dest`,
/// returning the number of bytes written. Validates the fixed header
/// fields, skips any optional FEXTRA/FNAME/FCOMMENT/FHCRC fields, and
/// checks the trailing CRC-32 and mod-2³² size. Does not support
/// multi-member concatenation.
pub fn gzip_decompress(src: &[u8], dest: &mut [u8]) -> Result<usize, DeflateError> {
    if src.len() < GZIP_MIN_HEADER_SIZE + GZIP_FOOTER_SIZE {
        return Err(DeflateError::InvalidGzipHeader);
    }

    let mut cur = GzipCursor::new(src);

    if cur.read_u8()? != GZIP_ID1 || cur.read_u8()? != GZIP_ID2 {
        return Err(DeflateError::InvalidGzipHeader);
    }
    if cur.read_u8()? != GZIP_CM_DEFLATE {
        return Err(DeflateError::InvalidGzipHeader);
    }
    let flg = cur.read_u8()?;
    if flg & GZIP_FRESERVED != 0 {
        return Err(DeflateError::InvalidGzipHeader);
    }

    /* MTIME (4), XFL (1), OS (1) — not validated. */
    cur.skip(6)?;

    if flg & GZIP_FEXTRA != 0 {
        let xlen = cur.read_u16_le()? as usize;
        cur.skip(xlen)?;
    }
    if flg & GZIP_FNAME != 0 {
        cur.skip_nul_terminated()?;
    }
    if flg & GZIP_FCOMMENT != 0 {
        cur.skip_nul_terminated()?;
    }
    if flg & GZIP_FHCRC != 0 {
        let header_crc = crc32(&src[..cur.pos]) & 0xFFFF;
        let stored_crc16 = cur.read_u16_le()? as u32;
        if header_crc != stored_crc16 {
            return Err(DeflateError::ChecksumMismatch);
        }
    }
    log::trace!("gzip header ok, body starts at byte {}", cur.pos);

    if src.len() < cur.pos + GZIP_FOOTER_SIZE {
        return Err(DeflateError::InvalidGzipHeader);
    }
    let body_end = src.len() - GZIP_FOOTER_SIZE;
    let body = &src[cur.pos..body_end];

    let written = deflate_decompress(body, dest)?;

    let expected_crc = u32::from_le_bytes(src[body_end..body_end + 4].try_into().unwrap());
    let expected_size = u32::from_le_bytes(src[body_end + 4..body_end + 8].try_into().unwrap());

    let actual_crc = crc32(&dest[..written]);
    if actual_crc != expected_crc {
        return Err(DeflateError::ChecksumMismatch);
    }
    if (written as u32) != expected_size {
        return Err(DeflateError::SizeMismatch);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_one_zero_byte() {
        let input = [
            0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x0B, 0x63, 0x00, 0x00, 0x8D,
            0xEF, 0x02, 0xD2, 0x01, 0x00, 0x00, 0x00,
        ];
        let mut out = [0u8; 8];
        let n = gzip_decompress(&input, &mut out).unwrap();
        assert_eq!(n, 1);
        assert_eq!(out[0], 0);
    }

    #[test]
    fn gzip_rejects_size_mismatch() {
        let input = [
            0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x0B, 0x63, 0x00, 0x00, 0x8D,
            0xEF, 0x02, 0xD2, 0x02, 0x00, 0x00, 0x00,
        ];
        let mut out = [0u8; 8];
        assert_eq!(
            gzip_decompress(&input, &mut out).unwrap_err(),
            DeflateError::SizeMismatch
        );
    }

    #[test]
    fn gzip_rejects_bad_magic() {
        let input = [0u8; 18];
        let mut out = [0u8; 8];
        assert_eq!(
            gzip_decompress(&input, &mut out).unwrap_err(),
            DeflateError::InvalidGzipHeader
        );
    }
}
