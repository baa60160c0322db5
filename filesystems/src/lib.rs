// Filesystem families
pub mod families;

pub mod utils;

#[cfg(test)]
pub mod test_helpers;

// Re-export the S5 reader and extractor
pub use families::s5::{
    extract_image, sanitize_name, FileSink, FileType, S5DirEntry, S5Extractor, S5Inode, S5Reader,
};
