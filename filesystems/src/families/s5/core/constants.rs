// S5 Filesystem Constants
// System V Release 3 on-disk layout, big-endian throughout

// Geometry
pub const S5_BLOCK_SIZE: usize = 1024;
pub const S5_INODE_SIZE: usize = 64;
pub const S5_INODE_TABLE_OFFSET: u64 = 0x800;  // First inode, relative to partition base

// Block addresses inside the inode
pub const S5_ADDR_AREA_OFFSET: usize = 12;
pub const S5_ADDR_SLOTS: usize = 13;
pub const S5_ADDR_SLOT_SIZE: usize = 3;        // 24-bit block numbers
pub const S5_DIRECT_SLOTS: usize = 10;
pub const S5_SINGLE_INDIRECT_SLOT: usize = 10;
pub const S5_DOUBLE_INDIRECT_SLOT: usize = 11;
pub const S5_TRIPLE_INDIRECT_SLOT: usize = 12;

// Indirect blocks hold 32-bit block numbers
pub const S5_INDIRECT_ENTRIES: usize = S5_BLOCK_SIZE / 4;

// Directories
pub const S5_DIRSIZ: usize = 14;               // Name field width
pub const S5_DIRENT_SIZE: usize = 16;
pub const S5_DIRENTS_PER_BLOCK: usize = S5_BLOCK_SIZE / S5_DIRENT_SIZE;

// Mode: file type
pub const S5_IFMT: u16 = 0o170000;
pub const S5_IFIFO: u16 = 0o010000;
pub const S5_IFCHR: u16 = 0o020000;
pub const S5_IFDIR: u16 = 0o040000;
pub const S5_IFBLK: u16 = 0o060000;
pub const S5_IFREG: u16 = 0o100000;
pub const S5_IFLNK: u16 = 0o120000;
pub const S5_IFSOCK: u16 = 0o140000;

// Mode: flags and permissions
pub const S5_ISUID: u16 = 0o4000;
pub const S5_ISGID: u16 = 0o2000;
pub const S5_ISVTX: u16 = 0o1000;
pub const S5_IPERM: u16 = 0o777;

// Bytes addressable without the triple-indirect slot
pub const S5_MAX_ADDRESSABLE: u64 = ((S5_DIRECT_SLOTS
    + S5_INDIRECT_ENTRIES
    + S5_INDIRECT_ENTRIES * S5_INDIRECT_ENTRIES)
    * S5_BLOCK_SIZE) as u64;
