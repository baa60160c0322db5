// Directory block decoding

use super::{Block, S5Reader};
use crate::families::s5::core::{S5DirEntry, S5_DIRENT_SIZE};
use s5dump_core::S5Error;
use std::io::{Read, Seek};

/// Decode a directory block into its in-use entries, in slot order.
pub fn parse_directory_block(block: &Block) -> Vec<S5DirEntry> {
    block
        .chunks_exact(S5_DIRENT_SIZE)
        .map(S5DirEntry::parse)
        .filter(|entry| !entry.is_free())
        .collect()
}

impl<R: Read + Seek> S5Reader<R> {
    pub fn read_directory_block(&mut self, block_num: u32) -> Result<Vec<S5DirEntry>, S5Error> {
        let block = self.read_block(block_num)?;
        Ok(parse_directory_block(&block))
    }
}
