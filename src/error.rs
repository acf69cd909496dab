use std::fmt;

/// Result of a call to [`crate::deflate_decompress`], [`crate::zlib_decompress`],
/// or [`crate::gzip_decompress`].
///
/// All variants except [`DeflateError::InsufficientSpace`] correspond to the
/// single "data error" status (-3) of the raw [`crate::ffi`] entry points;
/// they are kept distinct here purely for diagnostics, not for recovery —
/// a caller cannot repair a stream mid-decode and must restart with fresh
/// buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeflateError {
    /// The input ended before a complete bitstream could be read.
    TruncatedInput,
    /// BTYPE was 0b11, which RFC 1951 reserves and never assigns a meaning.
    InvalidBlockType,
    /// A stored block's NLEN was not the one's complement of LEN.
    InvalidStoredBlockLength,
    /// HLIT, HDIST, or HCLEN in a dynamic header were out of their legal range.
    InvalidDynamicHeader,
    /// A Huffman code (precode, literal/length, or distance) was underfull or
    /// overfull outside the two accepted one-code exceptions.
    IncompleteHuffmanCode,
    /// Meta-symbol 16 ("repeat previous length") appeared with no previous
    /// length to repeat, or a run of repeated lengths overran HLIT + HDIST.
    InvalidCodeLengthRepeat,
    /// The literal/length code did not assign a codeword to symbol 256.
    MissingEndOfBlockSymbol,
    /// A decoded length or distance symbol was outside its alphabet.
    InvalidLengthOrDistanceSymbol,
    /// A match's distance would read before the start of the output buffer.
    DistanceTooFar,
    /// Writing a literal or match would exceed the output buffer's capacity.
    OutputOverflow,
    /// A zlib header failed its CMF/FLG checks, or declared a preset dictionary.
    InvalidZlibHeader,
    /// A gzip header failed its magic/method/flags checks.
    InvalidGzipHeader,
    /// A trailer checksum (Adler-32 or CRC-32) did not match the recomputed
    /// value over the decompressed output.
    ChecksumMismatch,
    /// A trailer's declared output size did not match the number of bytes
    /// actually produced.
    SizeMismatch,
    /// The caller's output buffer was too small to hold the decompressed
    /// data; distinguished from [`DeflateError::OutputOverflow`] only at the
    /// [`crate::ffi`] boundary, where it may be reported as status -5
    /// instead of -3.
    InsufficientSpace,
}

impl DeflateError {
    /// The raw status code used by the §6 entry-point contract: 0 success
    /// (never constructed here), -3 for any ordinary data error, -5 for the
    /// output-buffer-too-small case.
    pub const fn status_code(self) -> i32 {
        match self {
            DeflateError::InsufficientSpace => -5,
            _ => -3,
        }
    }
}

impl fmt::Display for DeflateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DeflateError::TruncatedInput => "truncated input",
            DeflateError::InvalidBlockType => "reserved block type (BTYPE == 0b11)",
            DeflateError::InvalidStoredBlockLength => "stored block LEN/NLEN mismatch",
            DeflateError::InvalidDynamicHeader => "invalid dynamic block header",
            DeflateError::IncompleteHuffmanCode => "incomplete or overfull Huffman code",
            DeflateError::InvalidCodeLengthRepeat => "invalid code-length repeat symbol",
            DeflateError::MissingEndOfBlockSymbol => "literal/length code has no symbol 256",
            DeflateError::InvalidLengthOrDistanceSymbol => "invalid length or distance symbol",
            DeflateError::DistanceTooFar => "match distance before start of output",
            DeflateError::OutputOverflow => "write would exceed output buffer capacity",
            DeflateError::InvalidZlibHeader => "invalid zlib header",
            DeflateError::InvalidGzipHeader => "invalid gzip header",
            DeflateError::ChecksumMismatch => "checksum mismatch",
            DeflateError::SizeMismatch => "decompressed size does not match trailer",
            DeflateError::InsufficientSpace => "output buffer too small",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for DeflateError {}
