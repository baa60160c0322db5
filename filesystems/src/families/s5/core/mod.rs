// Core S5 layout model

pub mod address;
pub mod constants;
pub mod names;
pub mod structures;

pub use address::{block_offset, inode_offset};
pub use constants::*;
pub use names::sanitize_name;
pub use structures::{FileType, S5DirEntry, S5Inode};
