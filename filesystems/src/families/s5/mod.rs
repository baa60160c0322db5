// System V Release 3 S5 filesystem (read only)
//
// Known limitations: triple indirect blocks are not followed, and
// permissions, owners and timestamps are not restored on extracted files.

pub mod core;
pub mod extractor;
pub mod reader;

pub use self::core::{sanitize_name, FileType, S5DirEntry, S5Inode};
pub use extractor::{extract_image, S5Extractor};
pub use reader::{FileSink, S5Reader};
