use crate::S5Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A node that was recognised but not materialised.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnsupportedNode {
    pub inode: u32,
    pub path: PathBuf,
    pub kind: String,
}

/// A node abandoned under the skip-node policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedNode {
    pub inode: u32,
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub image: PathBuf,
    pub partition: u32,
    pub partition_offset: u64,
    pub start_inode: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub directories: u64,
    pub files: u64,
    pub entries_seen: u64,
    pub bytes_written: u64,
    pub unsupported: Vec<UnsupportedNode>,
    /// Regular files carrying a triple-indirect pointer, truncated at the
    /// double-indirect boundary.
    pub truncated: Vec<PathBuf>,
    pub skipped: Vec<SkippedNode>,
}

impl ExtractionReport {
    pub fn new(image: &Path, partition: u32, partition_offset: u64, start_inode: u32) -> Self {
        Self {
            image: image.to_path_buf(),
            partition,
            partition_offset,
            start_inode,
            started_at: Utc::now(),
            finished_at: None,
            directories: 0,
            files: 0,
            entries_seen: 0,
            bytes_written: 0,
            unsupported: Vec::new(),
            truncated: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn write_json(&self, path: &Path) -> Result<(), S5Error> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| S5Error::Create {
            path: path.to_path_buf(),
            source,
        })
    }

    /// One-line human summary for the end of a run.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} directories, {} files, {} bytes written",
            self.directories, self.files, self.bytes_written
        );
        if !self.unsupported.is_empty() {
            summary.push_str(&format!(", {} unsupported nodes", self.unsupported.len()));
        }
        if !self.truncated.is_empty() {
            summary.push_str(&format!(", {} truncated files", self.truncated.len()));
        }
        if !self.skipped.is_empty() {
            summary.push_str(&format!(", {} skipped nodes", self.skipped.len()));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionReport {
        ExtractionReport::new(Path::new("disk.img"), 0, 0, 2)
    }

    #[test]
    fn test_summary_only_mentions_problems_when_present() {
        let mut report = sample();
        report.directories = 1;
        report.files = 2;
        report.bytes_written = 10;
        assert_eq!(report.summary(), "1 directories, 2 files, 10 bytes written");

        report.skipped.push(SkippedNode {
            inode: 9,
            path: PathBuf::from("dump/root/bad"),
            error: "short read".to_string(),
        });
        assert!(report.summary().ends_with(", 1 skipped nodes"));
        assert!(!report.is_complete());
    }

    #[test]
    fn test_write_json_round_trips_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut report = sample();
        report.files = 3;
        report.unsupported.push(UnsupportedNode {
            inode: 7,
            path: PathBuf::from("dump/root/tty"),
            kind: "character special".to_string(),
        });
        report.finish();
        report.write_json(&path).unwrap();

        let loaded: ExtractionReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.files, 3);
        assert_eq!(loaded.unsupported, report.unsupported);
        assert!(loaded.finished_at.is_some());
    }
}
