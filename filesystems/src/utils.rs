// Common utilities for reading raw disk images

use s5dump_core::S5Error;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

/// Open a disk image for reading
pub fn open_image(path: &Path) -> Result<File, S5Error> {
    log::info!("Opening image for reading: {}", path.display());

    File::open(path).map_err(|source| {
        log::error!(
            "Failed to open image {}: {} (OS error code: {:?})",
            path.display(),
            source,
            source.raw_os_error()
        );
        S5Error::Open {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Fill as much of `buf` as the source can supply, returning the byte count.
/// Unlike `read_exact` this keeps the count so a short read can be reported.
pub fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read a fixed-size record at an absolute offset. `what` names the record
/// in the error when the source ends early.
pub fn read_exact_at<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    buf: &mut [u8],
    what: &'static str,
) -> Result<(), S5Error> {
    reader.seek(SeekFrom::Start(offset))?;

    let got = read_full(reader, buf)?;
    if got < buf.len() {
        return Err(S5Error::ShortRead {
            what,
            offset,
            expected: buf.len(),
            got,
        });
    }

    Ok(())
}
