// S5 filesystem reader
// Random-access reads of inodes and blocks relative to one partition base.

pub mod block;
pub mod directory;
pub mod indirect;

pub use block::FileSink;
pub use directory::parse_directory_block;
pub use indirect::decode_block_numbers;

use super::core::{block_offset, inode_offset, S5Inode, S5_BLOCK_SIZE, S5_INODE_SIZE};
use crate::utils::{open_image, read_exact_at};
use s5dump_core::S5Error;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

pub type Block = [u8; S5_BLOCK_SIZE];

/// Source handle plus the partition base every inode and block number is
/// relative to. The read cursor is repositioned before every read.
pub struct S5Reader<R> {
    source: R,
    partition_base: u64,
}

impl S5Reader<File> {
    pub fn open(path: &Path, partition_base: u64) -> Result<Self, S5Error> {
        let file = open_image(path)?;
        Ok(Self::new(file, partition_base))
    }
}

impl<R: Read + Seek> S5Reader<R> {
    pub fn new(source: R, partition_base: u64) -> Self {
        Self {
            source,
            partition_base,
        }
    }

    /// Read and decode an inode by number
    pub fn read_inode(&mut self, inode_num: u32) -> Result<S5Inode, S5Error> {
        let offset = inode_offset(self.partition_base, inode_num)?;

        let mut buf = [0u8; S5_INODE_SIZE];
        read_exact_at(&mut self.source, offset, &mut buf, "inode")?;

        Ok(S5Inode::parse(&buf))
    }

    /// Read a block by number
    pub fn read_block(&mut self, block_num: u32) -> Result<Block, S5Error> {
        let offset = block_offset(self.partition_base, block_num)?;

        let mut buf = [0u8; S5_BLOCK_SIZE];
        read_exact_at(&mut self.source, offset, &mut buf, "block")?;

        Ok(buf)
    }
}
