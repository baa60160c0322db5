// S5 tree extractor
// Rebuilds the directory tree below a starting inode on the host. The output
// location is passed down the recursion as a path; the process working
// directory is never touched.

mod file;
mod walker;

use super::core::{FileType, S5Inode};
use super::reader::S5Reader;
use log::{error, info, warn};
use s5dump_core::{
    ErrorPolicy, ExtractOptions, ExtractionReport, Partition, S5Error, SkippedNode,
    UnsupportedNode,
};
use std::fs;
use std::io::{ErrorKind, Read, Seek};
use std::path::Path;

pub struct S5Extractor<R> {
    reader: S5Reader<R>,
    options: ExtractOptions,
    report: ExtractionReport,
    /// Directory inodes on the current descent path
    ancestors: Vec<u32>,
}

/// Extract the tree rooted at `start_inode` from one partition of an image.
pub fn extract_image(
    image: &Path,
    partition: &Partition,
    start_inode: u32,
    options: ExtractOptions,
) -> Result<ExtractionReport, S5Error> {
    info!(
        "Extracting inode {} from partition {} (offset 0x{:x}) of {}",
        start_inode,
        partition.index,
        partition.offset,
        image.display()
    );

    let reader = S5Reader::open(image, partition.offset)?;
    let report = ExtractionReport::new(image, partition.index, partition.offset, start_inode);
    S5Extractor::new(reader, options, report).run(start_inode)
}

impl<R: Read + Seek> S5Extractor<R> {
    pub fn new(reader: S5Reader<R>, options: ExtractOptions, report: ExtractionReport) -> Self {
        Self {
            reader,
            options,
            report,
            ancestors: Vec::new(),
        }
    }

    /// Create the output directory and reconstruct `start_inode` inside it
    /// under the configured root name.
    pub fn run(mut self, start_inode: u32) -> Result<ExtractionReport, S5Error> {
        let output_dir = self.options.output_dir.clone();
        create_dir_reuse(&output_dir)?;

        let root = output_dir.join(&self.options.root_name);
        self.visit(start_inode, &root, 0)?;

        self.report.finish();
        info!("Extraction finished: {}", self.report.summary());
        Ok(self.report)
    }

    /// Extract one inode, applying the error policy to failures that only
    /// concern this node.
    fn visit(&mut self, inode_num: u32, path: &Path, depth: usize) -> Result<(), S5Error> {
        match self.extract_inode(inode_num, path, depth) {
            Err(e) if self.options.error_policy == ErrorPolicy::SkipNode && e.is_node_local() => {
                error!("Skipping inode {} ({}): {}", inode_num, path.display(), e);
                self.report.skipped.push(SkippedNode {
                    inode: inode_num,
                    path: path.to_path_buf(),
                    error: e.to_string(),
                });
                Ok(())
            }
            result => result,
        }
    }

    fn extract_inode(&mut self, inode_num: u32, path: &Path, depth: usize) -> Result<(), S5Error> {
        let inode = self.reader.read_inode(inode_num)?;
        inode.log_details(inode_num);

        match inode.file_type() {
            FileType::Directory => self.extract_directory(inode_num, &inode, path, depth),
            FileType::Regular => self.extract_regular_file(inode_num, &inode, path),
            other => {
                warn!(
                    "Unsupported node: inode {} ({}) is a {}, not extracted",
                    inode_num,
                    path.display(),
                    other
                );
                self.report.unsupported.push(UnsupportedNode {
                    inode: inode_num,
                    path: path.to_path_buf(),
                    kind: other.describe().to_string(),
                });
                Ok(())
            }
        }
    }

    fn extract_directory(
        &mut self,
        inode_num: u32,
        inode: &S5Inode,
        path: &Path,
        depth: usize,
    ) -> Result<(), S5Error> {
        if depth > self.options.max_depth {
            return Err(S5Error::TraversalLimit(format!(
                "{} is deeper than {} directories",
                path.display(),
                self.options.max_depth
            )));
        }
        if self.ancestors.contains(&inode_num) {
            return Err(S5Error::TraversalLimit(format!(
                "directory inode {} at {} is its own ancestor",
                inode_num,
                path.display()
            )));
        }

        info!("Dir {}", path.display());
        create_dir_reuse(path)?;
        self.report.directories += 1;

        self.ancestors.push(inode_num);
        let result = self.walk_directory(inode, path, depth);
        self.ancestors.pop();
        result
    }

    fn walk_directory(&mut self, inode: &S5Inode, path: &Path, depth: usize) -> Result<(), S5Error> {
        for &block_num in inode.direct_blocks() {
            if block_num == 0 {
                continue;
            }
            log::debug!("Block: {:06x}", block_num);
            self.walk_directory_block(block_num, path, depth)?;
        }
        Ok(())
    }
}

/// Create a directory, or reuse it when it already exists.
fn create_dir_reuse(path: &Path) -> Result<(), S5Error> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => Err(S5Error::Create {
            path: path.to_path_buf(),
            source,
        }),
    }
}
