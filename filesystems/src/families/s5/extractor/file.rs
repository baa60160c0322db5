// Regular file extraction

use super::S5Extractor;
use crate::families::s5::core::{S5Inode, S5_MAX_ADDRESSABLE};
use crate::families::s5::reader::FileSink;
use log::{debug, info, warn};
use s5dump_core::S5Error;
use std::fs::File;
use std::io::{BufWriter, Read, Seek};
use std::path::Path;

impl<R: Read + Seek> S5Extractor<R> {
    /// Stream a regular file's blocks into a host file: direct blocks, then
    /// the single indirect chain, then the double indirect chain. Content that
    /// would need the triple indirect block is not extracted.
    pub(super) fn extract_regular_file(
        &mut self,
        inode_num: u32,
        inode: &S5Inode,
        path: &Path,
    ) -> Result<(), S5Error> {
        info!("File {} ({} bytes)", path.display(), inode.size);

        let file = File::create(path).map_err(|source| S5Error::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut sink = FileSink::new(BufWriter::new(file), inode.size);

        for &block_num in inode.direct_blocks() {
            if block_num != 0 {
                debug!("0x{:06x}", block_num);
                self.reader.extract_block(block_num, &mut sink)?;
            }
        }

        let single = inode.single_indirect();
        if single != 0 {
            debug!("1x ind block: {:06x}", single);
            self.reader.resolve_single_indirect(single, &mut sink)?;
        }

        let double = inode.double_indirect();
        if double != 0 {
            debug!("2x ind block: {:06x}", double);
            self.reader.resolve_double_indirect(double, &mut sink)?;
        }

        if inode.triple_indirect() != 0 {
            warn!(
                "Inode {} ({}) uses a triple indirect block; content past {} bytes not extracted ({} of {} written)",
                inode_num,
                path.display(),
                S5_MAX_ADDRESSABLE,
                sink.written(),
                inode.size
            );
            self.report.truncated.push(path.to_path_buf());
        }

        let written = sink.written();
        sink.finish()?;

        self.report.files += 1;
        self.report.bytes_written += written;
        Ok(())
    }
}
