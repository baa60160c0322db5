pub mod error;
pub mod options;
pub mod partition;
pub mod report;

pub use error::S5Error;
pub use options::{ErrorPolicy, ExtractOptions};
pub use partition::{Partition, PartitionTable};
pub use report::{ExtractionReport, SkippedNode, UnsupportedNode};
