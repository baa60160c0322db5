use crate::S5Error;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One filesystem instance inside an image. Only the base offset matters to
/// the extractor; the partition map on the disk itself is never parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Partition {
    pub index: u32,
    pub offset: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartitionTable {
    pub partitions: Vec<Partition>,
}

impl PartitionTable {
    /// Offsets known for the images this tool was written against. Images
    /// dumped from a single partition start their filesystem at byte 0.
    pub fn builtin() -> Self {
        Self {
            partitions: vec![Partition {
                index: 0,
                offset: 0,
                label: Some("whole image".to_string()),
            }],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, S5Error> {
        let table: PartitionTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, S5Error> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            S5Error::InvalidInput(format!(
                "Failed to read partition table {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<(), S5Error> {
        if self.partitions.is_empty() {
            return Err(S5Error::InvalidInput("Partition table is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for partition in &self.partitions {
            if !seen.insert(partition.index) {
                return Err(S5Error::InvalidInput(format!(
                    "Partition {} listed more than once",
                    partition.index
                )));
            }
        }

        Ok(())
    }

    pub fn get(&self, index: u32) -> Option<&Partition> {
        self.partitions.iter().find(|p| p.index == index)
    }

    /// Look up the partition a run was asked for.
    pub fn resolve(&self, index: u32) -> Result<&Partition, S5Error> {
        self.get(index).ok_or_else(|| {
            let known: Vec<String> = self.partitions.iter().map(|p| p.index.to_string()).collect();
            S5Error::InvalidInput(format!(
                "No partition {} (known partitions: {})",
                index,
                known.join(", ")
            ))
        })
    }
}

impl Default for PartitionTable {
    fn default() -> Self {
        Self::builtin()
    }
}
