// Host-side file names for S5 directory entries

use super::constants::S5_DIRSIZ;

/// Turn a raw directory-entry name into a name that is safe to create on
/// the host. The name ends at the first NUL and is cut to 14 bytes; bytes
/// outside printable ASCII and `/` become `.`.
pub fn sanitize_name(raw: &[u8]) -> String {
    raw.iter()
        .take(S5_DIRSIZ)
        .take_while(|&&b| b != 0)
        .map(|&b| {
            if !(0x20..=0x7e).contains(&b) || b == b'/' {
                '.'
            } else {
                b as char
            }
        })
        .collect()
}
