use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum S5Error {
    #[error("Failed to open image {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Short read of {what} at offset 0x{offset:x}: expected {expected} bytes, got {got}")]
    ShortRead {
        what: &'static str,
        offset: u64,
        expected: usize,
        got: usize,
    },

    #[error("Invalid inode number: {0}")]
    InvalidInode(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Traversal limit: {0}")]
    TraversalLimit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl S5Error {
    /// Errors that only concern the node being decoded. Under the skip-node
    /// policy these abort that node and traversal continues with its siblings.
    pub fn is_node_local(&self) -> bool {
        matches!(
            self,
            S5Error::ShortRead { .. } | S5Error::InvalidInode(_) | S5Error::TraversalLimit(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_read_message_names_record() {
        let err = S5Error::ShortRead {
            what: "inode",
            offset: 0x840,
            expected: 64,
            got: 10,
        };
        assert_eq!(
            err.to_string(),
            "Short read of inode at offset 0x840: expected 64 bytes, got 10"
        );
    }

    #[test]
    fn test_node_local_classification() {
        assert!(S5Error::InvalidInode(0).is_node_local());
        assert!(S5Error::TraversalLimit("cycle".into()).is_node_local());

        let create = S5Error::Create {
            path: PathBuf::from("dump/root"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!create.is_node_local());
        assert!(!S5Error::InvalidInput("partition 3".into()).is_node_local());
    }
}
