// S5 on-disk structures
// Decoded from raw bytes with explicit big-endian conversion, never by
// casting a buffer to a packed struct.

use super::constants::*;
use byteorder::{BigEndian, ByteOrder};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Fifo,
    CharDevice,
    Directory,
    BlockDevice,
    Regular,
    Symlink,
    Socket,
    Unknown,
}

impl FileType {
    pub fn from_mode(mode: u16) -> Self {
        match mode & S5_IFMT {
            S5_IFIFO => FileType::Fifo,
            S5_IFCHR => FileType::CharDevice,
            S5_IFDIR => FileType::Directory,
            S5_IFBLK => FileType::BlockDevice,
            S5_IFREG => FileType::Regular,
            S5_IFLNK => FileType::Symlink,
            S5_IFSOCK => FileType::Socket,
            _ => FileType::Unknown,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            FileType::Fifo => "fifo",
            FileType::CharDevice => "character special",
            FileType::Directory => "directory",
            FileType::BlockDevice => "block special",
            FileType::Regular => "regular file",
            FileType::Symlink => "symbolic link",
            FileType::Socket => "socket",
            FileType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A decoded 64-byte disk inode.
///
/// Layout (big-endian):
/// `mode:2 nlink:2 uid:2 gid:2 size:4 addr:39 gen:1 atime:4 mtime:4 ctime:4`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct S5Inode {
    pub mode: u16,
    pub nlink: i16,
    pub uid: u16,
    pub gid: u16,
    pub size: u32,
    pub addr: [u32; S5_ADDR_SLOTS],
    pub atime: u32,
    pub mtime: u32,
    pub ctime: u32,
}

impl S5Inode {
    pub fn parse(buf: &[u8; S5_INODE_SIZE]) -> Self {
        let mut addr = [0u32; S5_ADDR_SLOTS];
        for (slot, value) in addr.iter_mut().enumerate() {
            let start = S5_ADDR_AREA_OFFSET + slot * S5_ADDR_SLOT_SIZE;
            *value = BigEndian::read_u24(&buf[start..start + S5_ADDR_SLOT_SIZE]);
        }

        Self {
            mode: BigEndian::read_u16(&buf[0..2]),
            nlink: BigEndian::read_i16(&buf[2..4]),
            uid: BigEndian::read_u16(&buf[4..6]),
            gid: BigEndian::read_u16(&buf[6..8]),
            size: BigEndian::read_u32(&buf[8..12]),
            addr,
            atime: BigEndian::read_u32(&buf[52..56]),
            mtime: BigEndian::read_u32(&buf[56..60]),
            ctime: BigEndian::read_u32(&buf[60..64]),
        }
    }

    pub fn file_type(&self) -> FileType {
        FileType::from_mode(self.mode)
    }

    pub fn permissions(&self) -> u16 {
        self.mode & S5_IPERM
    }

    pub fn is_setuid(&self) -> bool {
        self.mode & S5_ISUID != 0
    }

    pub fn is_setgid(&self) -> bool {
        self.mode & S5_ISGID != 0
    }

    pub fn is_sticky(&self) -> bool {
        self.mode & S5_ISVTX != 0
    }

    pub fn direct_blocks(&self) -> &[u32] {
        &self.addr[..S5_DIRECT_SLOTS]
    }

    pub fn single_indirect(&self) -> u32 {
        self.addr[S5_SINGLE_INDIRECT_SLOT]
    }

    pub fn double_indirect(&self) -> u32 {
        self.addr[S5_DOUBLE_INDIRECT_SLOT]
    }

    pub fn triple_indirect(&self) -> u32 {
        self.addr[S5_TRIPLE_INDIRECT_SLOT]
    }

    pub fn accessed(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.atime as i64, 0)
    }

    pub fn modified(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.mtime as i64, 0)
    }

    pub fn changed(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.ctime as i64, 0)
    }

    /// Dump every decoded field at debug level.
    pub fn log_details(&self, inode_num: u32) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }

        let fmt_time = |t: Option<DateTime<Utc>>| {
            t.map(|t| t.to_rfc3339()).unwrap_or_else(|| "invalid".to_string())
        };

        log::debug!("Inode {}:", inode_num);
        log::debug!("  mode: 0x{:04x} ({})", self.mode, self.file_type());
        if self.is_setuid() {
            log::debug!("  setuid");
        }
        if self.is_setgid() {
            log::debug!("  setgid");
        }
        if self.is_sticky() {
            log::debug!("  sticky");
        }
        log::debug!("  access permissions: {:03o}", self.permissions());
        log::debug!("  nlnk: {}", self.nlink);
        log::debug!("  uid:  {}", self.uid);
        log::debug!("  gid:  {}", self.gid);
        log::debug!("  size: {}", self.size);
        log::debug!("  atim: {}", fmt_time(self.accessed()));
        log::debug!("  mtim: {}", fmt_time(self.modified()));
        log::debug!("  ctim: {}", fmt_time(self.changed()));
    }
}

/// A 16-byte directory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct S5DirEntry {
    pub inode: u16,
    pub name: [u8; S5_DIRSIZ],
}

impl S5DirEntry {
    pub fn parse(record: &[u8]) -> Self {
        let mut name = [0u8; S5_DIRSIZ];
        name.copy_from_slice(&record[2..S5_DIRENT_SIZE]);

        Self {
            inode: BigEndian::read_u16(&record[0..2]),
            name,
        }
    }

    pub fn is_free(&self) -> bool {
        self.inode == 0
    }

    /// The name up to the first NUL; a full 14-byte name has no terminator.
    pub fn name_bytes(&self) -> &[u8] {
        let len = self.name.iter().position(|&b| b == 0).unwrap_or(S5_DIRSIZ);
        &self.name[..len]
    }

    pub fn display_name(&self) -> String {
        String::from_utf8_lossy(self.name_bytes()).into_owned()
    }

    pub fn is_dot_or_dotdot(&self) -> bool {
        matches!(self.name_bytes(), b"." | b"..")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_inode() -> [u8; S5_INODE_SIZE] {
        let mut buf = [0u8; S5_INODE_SIZE];
        buf[0..2].copy_from_slice(&(S5_IFREG | S5_ISUID | 0o755).to_be_bytes());
        buf[2..4].copy_from_slice(&(-1i16).to_be_bytes());
        buf[4..6].copy_from_slice(&100u16.to_be_bytes());
        buf[6..8].copy_from_slice(&3u16.to_be_bytes());
        buf[8..12].copy_from_slice(&70_000u32.to_be_bytes());
        // slot 0 = 0x0102_03, slot 10 = 0xfffffe, slot 12 = 0x000001
        buf[12..15].copy_from_slice(&[0x01, 0x02, 0x03]);
        buf[42..45].copy_from_slice(&[0xff, 0xff, 0xfe]);
        buf[48..51].copy_from_slice(&[0x00, 0x00, 0x01]);
        buf[51] = 0xaa;
        buf[52..56].copy_from_slice(&1u32.to_be_bytes());
        buf[56..60].copy_from_slice(&2u32.to_be_bytes());
        buf[60..64].copy_from_slice(&536_457_600u32.to_be_bytes());
        buf
    }

    #[test]
    fn test_parse_inode_fields_are_big_endian() {
        let inode = S5Inode::parse(&raw_inode());
        assert_eq!(inode.file_type(), FileType::Regular);
        assert_eq!(inode.permissions(), 0o755);
        assert!(inode.is_setuid());
        assert!(!inode.is_setgid());
        assert_eq!(inode.nlink, -1);
        assert_eq!(inode.uid, 100);
        assert_eq!(inode.gid, 3);
        assert_eq!(inode.size, 70_000);
        assert_eq!(inode.atime, 1);
        assert_eq!(inode.mtime, 2);
        assert_eq!(inode.changed().unwrap().to_rfc3339(), "1987-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_address_slots_are_unsigned_24_bit() {
        let inode = S5Inode::parse(&raw_inode());
        assert_eq!(inode.direct_blocks()[0], 0x010203);
        assert!(inode.direct_blocks()[1..].iter().all(|&b| b == 0));
        assert_eq!(inode.single_indirect(), 0xfffffe);
        assert_eq!(inode.double_indirect(), 0);
        assert_eq!(inode.triple_indirect(), 1);
    }

    #[test]
    fn test_file_type_from_mode() {
        assert_eq!(FileType::from_mode(0o040755), FileType::Directory);
        assert_eq!(FileType::from_mode(0o020666), FileType::CharDevice);
        assert_eq!(FileType::from_mode(0o060600), FileType::BlockDevice);
        assert_eq!(FileType::from_mode(0o120777), FileType::Symlink);
        assert_eq!(FileType::from_mode(0o140777), FileType::Socket);
        assert_eq!(FileType::from_mode(0o010644), FileType::Fifo);
        assert_eq!(FileType::from_mode(0o000644), FileType::Unknown);
    }

    #[test]
    fn test_dir_entry_name_ends_at_nul() {
        let mut record = [0u8; S5_DIRENT_SIZE];
        record[0..2].copy_from_slice(&3u16.to_be_bytes());
        record[2..11].copy_from_slice(b"hello.txt");
        let entry = S5DirEntry::parse(&record);
        assert_eq!(entry.inode, 3);
        assert_eq!(entry.name_bytes(), b"hello.txt");
        assert!(!entry.is_dot_or_dotdot());
    }

    #[test]
    fn test_dir_entry_full_width_name_has_no_terminator() {
        let mut record = [0u8; S5_DIRENT_SIZE];
        record[0..2].copy_from_slice(&0x1234u16.to_be_bytes());
        record[2..16].copy_from_slice(b"fourteen_chars");
        let entry = S5DirEntry::parse(&record);
        assert_eq!(entry.inode, 0x1234);
        assert_eq!(entry.display_name(), "fourteen_chars");
    }

    #[test]
    fn test_dot_entries_detected_by_exact_name() {
        let mut record = [0u8; S5_DIRENT_SIZE];
        record[1] = 2;
        record[2] = b'.';
        assert!(S5DirEntry::parse(&record).is_dot_or_dotdot());
        record[3] = b'.';
        assert!(S5DirEntry::parse(&record).is_dot_or_dotdot());
        record[4] = b'.';
        assert!(!S5DirEntry::parse(&record).is_dot_or_dotdot());
    }
}
