/*
 * Checksums used by the zlib and gzip trailers.
 *
 * Both algorithms are delegated to dedicated crates rather than hand-rolled:
 * `crc32fast` (already part of the teacher crate's dependency stack) for
 * the gzip CRC-32, and `simd-adler32` (used by the sibling `zune-inflate`
 * crate) for the zlib Adler-32.
 */

/// Adler-32 checksum (RFC 1950 §9), base 65521. Empty input yields 1.
pub fn adler32(data: &[u8]) -> u32 {
    simd_adler32::adler32(data)
}

/// CRC-32 (ISO 3309), reflected polynomial 0xEDB88320, initial 0xFFFFFFFF,
/// final XOR 0xFFFFFFFF. Empty input yields 0.
pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_checksums() {
        assert_eq!(adler32(&[]), 1);
        assert_eq!(crc32(&[]), 0);
    }

    #[test]
    fn adler32_single_zero_byte() {
        assert_eq!(adler32(&[0x00]), 0x0001_0001);
    }

    #[test]
    fn crc32_single_zero_byte() {
        assert_eq!(crc32(&[0x00]), 0xD202_EF8D);
    }
}
