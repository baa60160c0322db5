// Inode and block number to byte offset translation

use super::constants::*;
use s5dump_core::S5Error;

/// Byte offset of inode `inode_num` within the image. Inodes are numbered
/// from 1; inode 0 does not exist.
pub fn inode_offset(partition_base: u64, inode_num: u32) -> Result<u64, S5Error> {
    if inode_num == 0 {
        return Err(S5Error::InvalidInode(inode_num));
    }

    (inode_num as u64 - 1)
        .checked_mul(S5_INODE_SIZE as u64)
        .and_then(|rel| rel.checked_add(S5_INODE_TABLE_OFFSET))
        .and_then(|rel| rel.checked_add(partition_base))
        .ok_or(S5Error::InvalidInode(inode_num))
}

/// Byte offset of block `block_num` within the image.
pub fn block_offset(partition_base: u64, block_num: u32) -> Result<u64, S5Error> {
    (block_num as u64)
        .checked_mul(S5_BLOCK_SIZE as u64)
        .and_then(|rel| rel.checked_add(partition_base))
        .ok_or_else(|| {
            S5Error::InvalidInput(format!(
                "Block {} overflows partition at 0x{:x}",
                block_num, partition_base
            ))
        })
}
