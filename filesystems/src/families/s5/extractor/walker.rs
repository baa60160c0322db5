// Directory walking

use super::S5Extractor;
use crate::families::s5::core::sanitize_name;
use log::info;
use s5dump_core::S5Error;
use std::io::{self, Read, Seek};
use std::path::Path;

impl<R: Read + Seek> S5Extractor<R> {
    /// Report every in-use entry of a directory block and descend into all of
    /// them except "." and "..", in slot order.
    pub(super) fn walk_directory_block(
        &mut self,
        block_num: u32,
        dir_path: &Path,
        depth: usize,
    ) -> Result<(), S5Error> {
        let entries = self.reader.read_directory_block(block_num)?;

        for entry in entries {
            info!(">>> {:05} {}", entry.inode, entry.display_name());
            self.report.entries_seen += 1;

            if entry.is_dot_or_dotdot() {
                continue;
            }

            let name = sanitize_name(entry.name_bytes());
            if name.is_empty() || name == "." || name == ".." {
                return Err(S5Error::Create {
                    path: dir_path.join(&name),
                    source: io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("entry for inode {} has no usable name", entry.inode),
                    ),
                });
            }

            self.visit(entry.inode as u32, &dir_path.join(name), depth + 1)?;
        }

        Ok(())
    }
}
