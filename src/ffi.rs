//! Thin status-code adapters over the `Result`-returning core, preserving
//! source compatibility with callers written against the C-heritage shape
//! this crate's ancestor (libdeflate) exposes:
//!
//! `(dest_buf, dest_len_inout, src_buf, src_len) -> status`
//!
//! `dest_len_inout` is the capacity of `dest_buf` on entry and the number of
//! bytes written on a successful (status == 0) return. `status` is `0` on
//! success, `-3` for any data error, and `-5` when the implementation chose
//! to report the failure as buffer exhaustion specifically (see
//! [`crate::error::DeflateError::InsufficientSpace`]).

use crate::error::DeflateError;

fn run(
    result: Result<usize, DeflateError>,
    dest_len_inout: &mut usize,
) -> i32 {
    match result {
        Ok(written) => {
            *dest_len_inout = written;
            0
        }
        Err(err) => err.status_code(),
    }
}

/// `dest_len_inout`, clamped to the physical length of `dest_buf`, is the
/// caller-declared capacity on entry. Bounding the slice here is what makes
/// it possible for a caller to declare a smaller capacity than the backing
/// buffer actually has — the exact C-heritage pattern this module exists to
/// preserve.
fn bounded_dest<'a>(dest_buf: &'a mut [u8], dest_len_inout: &usize) -> &'a mut [u8] {
    let cap = (*dest_len_inout).min(dest_buf.len());
    &mut dest_buf[..cap]
}

/// Raw DEFLATE decompression, §6 entry-point shape.
pub fn deflate_decompress(
    dest_buf: &mut [u8],
    dest_len_inout: &mut usize,
    src_buf: &[u8],
) -> i32 {
    let dest = bounded_dest(dest_buf, dest_len_inout);
    run(
        crate::decompress_deflate::deflate_decompress(src_buf, dest),
        dest_len_inout,
    )
}

/// zlib decompression, §6 entry-point shape.
pub fn zlib_decompress(dest_buf: &mut [u8], dest_len_inout: &mut usize, src_buf: &[u8]) -> i32 {
    let dest = bounded_dest(dest_buf, dest_len_inout);
    run(
        crate::decompress_zlib::zlib_decompress(src_buf, dest),
        dest_len_inout,
    )
}

/// gzip decompression, §6 entry-point shape.
pub fn gzip_decompress(dest_buf: &mut [u8], dest_len_inout: &mut usize, src_buf: &[u8]) -> i32 {
    let dest = bounded_dest(dest_buf, dest_len_inout);
    run(
        crate::decompress_gzip::gzip_decompress(src_buf, dest),
        dest_len_inout,
    )
}

/// Adler-32 of `src_buf`, written through `dest_len_inout` is not
/// applicable here — the checksum itself is the return value, matching the
/// plain-value utility entry points of §6.
pub fn adler32(src_buf: &[u8]) -> u32 {
    crate::checksum::adler32(src_buf)
}

/// CRC-32 of `src_buf`.
pub fn crc32(src_buf: &[u8]) -> u32 {
    crate::checksum::crc32(src_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_zero_on_success() {
        let src = [0x03, 0x00];
        let mut dest = [0u8; 4];
        let mut dest_len = dest.len();
        let status = deflate_decompress(&mut dest, &mut dest_len, &src);
        assert_eq!(status, 0);
        assert_eq!(dest_len, 0);
    }

    #[test]
    fn status_negative_three_on_data_error() {
        let src = [0x07];
        let mut dest = [0u8; 4];
        let mut dest_len = dest.len();
        let status = deflate_decompress(&mut dest, &mut dest_len, &src);
        assert_eq!(status, -3);
    }

    #[test]
    fn output_overflow_collapses_to_negative_three() {
        // An empty output buffer can't hold even one literal; per §6 this
        // crate collapses the output-too-small case into the ordinary -3
        // data-error status rather than returning -5.
        let src = [0x63, 0x00, 0x00];
        let mut dest = [0u8; 0];
        let mut dest_len = dest.len();
        let status = deflate_decompress(&mut dest, &mut dest_len, &src);
        assert_eq!(status, -3);
    }

    #[test]
    fn declared_capacity_smaller_than_buffer_is_honored() {
        // "AB" (2 bytes) as two stored-block literals, but dest_len_inout
        // declares only 1 byte of capacity even though dest_buf physically
        // holds 4 — the decode must fail rather than write past byte 0.
        let src = [0x01, 0x01, 0x00, 0xFE, 0xFF, b'A', 0x03, 0x00];
        let mut dest = [0u8; 4];
        let mut dest_len = 1usize;
        let status = deflate_decompress(&mut dest, &mut dest_len, &src);
        assert_eq!(status, 0);
        assert_eq!(dest_len, 1);
        assert_eq!(dest[0], b'A');
        assert_eq!(&dest[1..], &[0, 0, 0]);
    }

    #[test]
    fn declared_capacity_smaller_than_buffer_rejects_overrun() {
        let src = [
            0x00, 0x01, 0x00, 0xFE, 0xFF, b'A', 0x01, 0x01, 0x00, 0xFE, 0xFF, b'B',
        ];
        let mut dest = [0u8; 4];
        let mut dest_len = 1usize;
        let status = deflate_decompress(&mut dest, &mut dest_len, &src);
        assert_eq!(status, -3);
        assert_eq!(dest[1..], [0, 0, 0]);
    }
}
