// Single and double indirect block resolution
// Triple indirect blocks are not followed.

use super::{Block, FileSink, S5Reader};
use crate::families::s5::core::S5_INDIRECT_ENTRIES;
use byteorder::{BigEndian, ByteOrder};
use s5dump_core::S5Error;
use std::io::{Read, Seek, Write};

/// Decode an indirect block into its 256 big-endian block numbers.
pub fn decode_block_numbers(block: &Block) -> [u32; S5_INDIRECT_ENTRIES] {
    let mut entries = [0u32; S5_INDIRECT_ENTRIES];
    BigEndian::read_u32_into(block, &mut entries);
    entries
}

impl<R: Read + Seek> S5Reader<R> {
    /// Extract every data block listed in a single indirect block, in
    /// stored order. Zero entries are holes and are skipped.
    pub fn resolve_single_indirect<W: Write>(
        &mut self,
        indirect_block: u32,
        sink: &mut FileSink<W>,
    ) -> Result<(), S5Error> {
        let entries = decode_block_numbers(&self.read_block(indirect_block)?);

        for block_num in entries.into_iter().filter(|&b| b != 0) {
            log::debug!("1ind blk {}", block_num);
            self.extract_block(block_num, sink)?;
        }

        Ok(())
    }

    /// Resolve each single indirect block listed in a double indirect block.
    pub fn resolve_double_indirect<W: Write>(
        &mut self,
        double_indirect_block: u32,
        sink: &mut FileSink<W>,
    ) -> Result<(), S5Error> {
        let entries = decode_block_numbers(&self.read_block(double_indirect_block)?);

        for indirect_block in entries.into_iter().filter(|&b| b != 0) {
            log::debug!("2ind blk {}", indirect_block);
            self.resolve_single_indirect(indirect_block, sink)?;
        }

        Ok(())
    }
}
