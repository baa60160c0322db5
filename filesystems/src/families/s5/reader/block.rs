// Streaming file blocks into an output sink

use super::{Block, S5Reader};
use crate::families::s5::core::S5_BLOCK_SIZE;
use s5dump_core::S5Error;
use std::io::{Read, Seek, Write};

/// Destination of one regular file plus the live count of bytes the inode
/// still declares. `remaining` drops by a whole block per extracted block
/// and may go negative; once it does, further blocks write nothing.
pub struct FileSink<W: Write> {
    writer: W,
    remaining: i64,
    written: u64,
}

impl<W: Write> FileSink<W> {
    pub fn new(writer: W, size: u32) -> Self {
        Self {
            writer,
            remaining: size as i64,
            written: 0,
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Write `block` clipped to what is left of the file.
    pub fn write_block(&mut self, block: &Block) -> std::io::Result<()> {
        let len = self.remaining.clamp(0, S5_BLOCK_SIZE as i64) as usize;
        if len > 0 {
            self.writer.write_all(&block[..len])?;
            self.written += len as u64;
        }
        self.remaining -= S5_BLOCK_SIZE as i64;
        Ok(())
    }

    pub fn finish(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<R: Read + Seek> S5Reader<R> {
    /// Copy one data block to `sink`. Block 0 means "no block" and must be
    /// filtered out by the caller.
    pub fn extract_block<W: Write>(
        &mut self,
        block_num: u32,
        sink: &mut FileSink<W>,
    ) -> Result<(), S5Error> {
        debug_assert_ne!(block_num, 0, "block 0 is never a data block");

        let block = self.read_block(block_num)?;
        sink.write_block(&block)?;
        Ok(())
    }
}
