/*
 * decode_blocks.rs - the DEFLATE block state machine.
 *
 * Drives a single block through header dispatch (stored / fixed / dynamic),
 * builds the Huffman tables a block needs, and runs the literal/match
 * engine that actually produces output bytes.
 */

use crate::bitstream::BitReader;
use crate::constants::*;
use crate::error::DeflateError;
use crate::huffman::HuffmanTable;

macro_rules! data_error {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

/// Combined scratch space for the literal/length + distance codeword
/// lengths read out of a dynamic header, sized for the worst-case overrun
/// of a length-17/18 repeat landing one entry past `HLIT + HDIST`.
const LENS_SCRATCH_SIZE: usize = DEFLATE_NUM_LITLEN_SYMS + DEFLATE_NUM_OFFSET_SYMS;

pub struct BlockDecoder<'a> {
    pub(crate) bits: BitReader<'a>,
    out: &'a mut [u8],
    out_pos: usize,
    litlen_table: HuffmanTable,
    dist_table: HuffmanTable,
}

impl<'a> BlockDecoder<'a> {
    pub fn new(input: &'a [u8], out: &'a mut [u8]) -> Self {
        Self {
            bits: BitReader::new(input),
            out,
            out_pos: 0,
            litlen_table: HuffmanTable::new(),
            dist_table: HuffmanTable::new(),
        }
    }

    pub fn written(&self) -> usize {
        self.out_pos
    }

    /// Read BFINAL (1 bit) and BTYPE (2 bits). Returns `(is_final, btype)`.
    fn decode_header_flags(&mut self) -> Result<(bool, u32), DeflateError> {
        self.bits.refill(1 + 2)?;
        let is_final = self.bits.take(1) != 0;
        let btype = self.bits.take(2);
        Ok((is_final, btype))
    }

    /// Run one block to completion, returning whether BFINAL was set.
    pub fn decode_block(&mut self) -> Result<bool, DeflateError> {
        log::trace!("block starting at input byte {}", self.bits.byte_pos());
        let (is_final, btype) = self.decode_header_flags()?;

        match btype {
            DEFLATE_BLOCKTYPE_UNCOMPRESSED => self.decode_stored_block()?,
            DEFLATE_BLOCKTYPE_STATIC_HUFFMAN => {
                log::trace!("static huffman block");
                self.load_fixed_huffman_tables();
                self.decode_block_data()?;
            }
            DEFLATE_BLOCKTYPE_DYNAMIC_HUFFMAN => {
                log::trace!("dynamic huffman block");
                self.decode_dynamic_huffman_header()?;
                self.decode_block_data()?;
            }
            _ => {
                debug_assert_eq!(btype, DEFLATE_BLOCKTYPE_RESERVED);
                return Err(DeflateError::InvalidBlockType);
            }
        }

        Ok(is_final)
    }

    /* ---------------------- stored blocks ---------------------- */

    fn decode_stored_block(&mut self) -> Result<(), DeflateError> {
        self.bits.align_to_byte();

        let len = self.bits.read_aligned_u16_le()?;
        let nlen = self.bits.read_aligned_u16_le()?;
        data_error!(len == !nlen, DeflateError::InvalidStoredBlockLength);

        let len = len as usize;
        data_error!(
            self.out_pos + len <= self.out.len(),
            DeflateError::OutputOverflow
        );

        self.bits
            .read_aligned_bytes(&mut self.out[self.out_pos..self.out_pos + len])?;
        self.out_pos += len;

        self.bits.align_to_byte();
        Ok(())
    }

    /* ----------------------- fixed blocks ----------------------- */

    fn load_fixed_huffman_tables(&mut self) {
        let mut lens = [0u8; DEFLATE_NUM_LITLEN_SYMS];
        lens[0..144].fill(8);
        lens[144..256].fill(9);
        lens[256..280].fill(7);
        lens[280..288].fill(8);
        self.litlen_table.build(&lens);

        let dist_lens = [5u8; DEFLATE_NUM_OFFSET_SYMS];
        self.dist_table.build(&dist_lens);
    }

    /* ---------------------- dynamic blocks ----------------------- */

    fn decode_dynamic_huffman_header(&mut self) -> Result<(), DeflateError> {
        self.bits.refill(5 + 5 + 4)?;
        let hlit = self.bits.take(5) as usize + 257;
        let hdist = self.bits.take(5) as usize + 1;
        let hclen = self.bits.take(4) as usize + 4;
        log::trace!("dynamic header hlit={hlit} hdist={hdist} hclen={hclen}");

        let mut precode_lens = [0u8; DEFLATE_NUM_PRECODE_SYMS];
        for i in 0..hclen {
            let len = self.bits.take_refill(3)?;
            precode_lens[DEFLATE_PRECODE_LENS_PERMUTATION[i] as usize] = len as u8;
        }

        let mut precode_table = HuffmanTable::new();
        precode_table.build(&precode_lens);
        // A trivial all-zero precode is incomplete (Kraft sum 0) and is
        // rejected by this same check, so it needs no special case.
        data_error!(
            precode_table.kraft_sum() == 1 << 15,
            DeflateError::IncompleteHuffmanCode
        );

        let mut lens = [0u8; LENS_SCRATCH_SIZE];
        let total = hlit + hdist;
        let mut i = 0usize;
        while i < total {
            let presym = precode_table.decode_symbol(&mut self.bits)?;

            let (value, run) = match presym {
                0..=15 => (presym as u8, 1usize),
                16 => {
                    data_error!(i != 0, DeflateError::InvalidCodeLengthRepeat);
                    let prev = lens[i - 1];
                    let run = self.bits.take_base_refill(2, 3)? as usize;
                    (prev, run)
                }
                17 => {
                    let run = self.bits.take_base_refill(3, 3)? as usize;
                    (0, run)
                }
                18 => {
                    let run = self.bits.take_base_refill(7, 11)? as usize;
                    (0, run)
                }
                _ => return Err(DeflateError::InvalidDynamicHeader),
            };

            data_error!(i + run <= total, DeflateError::InvalidCodeLengthRepeat);
            lens[i..i + run].fill(value);
            i += run;
        }

        data_error!(lens[256] != 0, DeflateError::MissingEndOfBlockSymbol);

        self.litlen_table.build(&lens[0..hlit]);
        data_error!(
            self.litlen_table.kraft_sum() == 1 << 15 || self.litlen_table.is_single_code_for(256),
            DeflateError::IncompleteHuffmanCode
        );

        self.dist_table.build(&lens[hlit..hlit + hdist]);
        data_error!(
            self.dist_table.kraft_sum() == 1 << 15 || self.dist_table.has_single_code(),
            DeflateError::IncompleteHuffmanCode
        );

        Ok(())
    }

    /* ------------------------ match engine ------------------------ */

    fn decode_block_data(&mut self) -> Result<(), DeflateError> {
        loop {
            let sym = self.litlen_table.decode_symbol(&mut self.bits)?;

            if sym < 256 {
                data_error!(self.out_pos < self.out.len(), DeflateError::OutputOverflow);
                self.out[self.out_pos] = sym as u8;
                self.out_pos += 1;
                continue;
            }

            if sym == DEFLATE_END_OF_BLOCK {
                return Ok(());
            }

            let k = (sym - 257) as usize;
            data_error!(k < 29, DeflateError::InvalidLengthOrDistanceSymbol);

            let length = self
                .bits
                .take_base_refill(LENGTH_EXTRA_BITS[k] as u32, LENGTH_BASE[k] as u32)?
                .min(DEFLATE_MAX_MATCH_LEN as u32) as usize;

            let dsym = self.dist_table.decode_symbol(&mut self.bits)?;
            data_error!(
                (dsym as usize) < 30,
                DeflateError::InvalidLengthOrDistanceSymbol
            );
            let d = dsym as usize;
            let distance = self
                .bits
                .take_base_refill(DIST_EXTRA_BITS[d] as u32, DIST_BASE[d] as u32)?
                as usize;

            self.copy_match(length, distance)?;
        }
    }

    fn copy_match(&mut self, length: usize, distance: usize) -> Result<(), DeflateError> {
        data_error!(distance <= self.out_pos, DeflateError::DistanceTooFar);
        data_error!(
            self.out_pos + length <= self.out.len(),
            DeflateError::OutputOverflow
        );

        let mut src = self.out_pos - distance;
        let mut dst = self.out_pos;
        for _ in 0..length {
            self.out[dst] = self.out[src];
            src += 1;
            dst += 1;
        }
        self.out_pos = dst;
        Ok(())
    }
}
