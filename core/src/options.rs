use std::path::PathBuf;

/// What to do when a single node cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole run on the first error.
    #[default]
    FailFast,
    /// Abandon the offending node, record it and carry on with its siblings.
    SkipNode,
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory the tree is reconstructed under.
    pub output_dir: PathBuf,
    /// Name given to the starting inode inside `output_dir`.
    pub root_name: String,
    pub error_policy: ErrorPolicy,
    pub max_depth: usize,
}

impl ExtractOptions {
    pub const DEFAULT_OUTPUT_DIR: &'static str = "dump";
    pub const DEFAULT_ROOT_NAME: &'static str = "root";
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(Self::DEFAULT_OUTPUT_DIR),
            root_name: Self::DEFAULT_ROOT_NAME.to_string(),
            error_policy: ErrorPolicy::FailFast,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
