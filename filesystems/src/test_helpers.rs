// Test helpers for building synthetic S5 images in memory

use crate::families::s5::core::*;
use byteorder::{BigEndian, ByteOrder};

/// Builds a raw S5 image: `base` bytes of padding followed by a
/// filesystem of `blocks` 1K blocks. The inode table lives at base + 0x800,
/// so data blocks used in tests should start well past block 2.
pub struct S5ImageBuilder {
    image: Vec<u8>,
    base: u64,
}

impl S5ImageBuilder {
    pub fn new(base: u64, blocks: usize) -> Self {
        Self {
            image: vec![0u8; base as usize + blocks * S5_BLOCK_SIZE],
            base,
        }
    }

    /// Write inode `inode_num` with the given mode, size and leading
    /// address slots (remaining slots stay 0).
    pub fn set_inode(&mut self, inode_num: u32, mode: u16, size: u32, addr: &[u32]) {
        let offset = inode_offset(self.base, inode_num).unwrap() as usize;
        let raw = &mut self.image[offset..offset + S5_INODE_SIZE];
        raw.fill(0);

        BigEndian::write_u16(&mut raw[0..2], mode);
        BigEndian::write_i16(&mut raw[2..4], 1);
        BigEndian::write_u32(&mut raw[8..12], size);
        for (slot, &block) in addr.iter().enumerate() {
            let start = S5_ADDR_AREA_OFFSET + slot * S5_ADDR_SLOT_SIZE;
            BigEndian::write_u24(&mut raw[start..start + S5_ADDR_SLOT_SIZE], block);
        }
        BigEndian::write_u32(&mut raw[56..60], 536_457_600);
    }

    pub fn set_block(&mut self, block_num: u32, data: &[u8]) {
        assert!(data.len() <= S5_BLOCK_SIZE);
        let offset = block_offset(self.base, block_num).unwrap() as usize;
        self.image[offset..offset + S5_BLOCK_SIZE].fill(0);
        self.image[offset..offset + data.len()].copy_from_slice(data);
    }

    pub fn set_indirect(&mut self, block_num: u32, entries: &[u32]) {
        let mut block = [0u8; S5_BLOCK_SIZE];
        for (i, &entry) in entries.iter().enumerate() {
            BigEndian::write_u32(&mut block[i * 4..i * 4 + 4], entry);
        }
        self.set_block(block_num, &block);
    }

    /// Fill a directory block; entries go into consecutive slots.
    pub fn set_directory(&mut self, block_num: u32, entries: &[(u16, &[u8])]) {
        let mut block = [0u8; S5_BLOCK_SIZE];
        for (slot, (inode, name)) in entries.iter().enumerate() {
            let at = slot * S5_DIRENT_SIZE;
            BigEndian::write_u16(&mut block[at..at + 2], *inode);
            let len = name.len().min(S5_DIRSIZ);
            block[at + 2..at + 2 + len].copy_from_slice(&name[..len]);
        }
        self.set_block(block_num, &block);
    }

    pub fn build(self) -> Vec<u8> {
        self.image
    }
}
