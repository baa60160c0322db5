use anyhow::Context;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use s5dump_core::{ErrorPolicy, ExtractOptions, PartitionTable};
use s5dump_filesystems::extract_image;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "s5dump", version)]
#[command(about = "Dump System V Release 3 S5 file systems from raw disk images", long_about = None)]
struct Cli {
    /// Raw disk image to read
    image: PathBuf,
    /// Partition number in the partition table
    partition: u32,
    /// Inode to start from (2 is the root directory)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    inode: u32,
    /// Directory to reconstruct the tree under
    #[arg(short, long, default_value = ExtractOptions::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
    /// JSON partition table replacing the built-in offsets
    #[arg(long)]
    partition_table: Option<PathBuf>,
    /// Skip nodes that cannot be read instead of aborting
    #[arg(long)]
    keep_going: bool,
    /// Maximum directory depth to descend
    #[arg(long, default_value_t = ExtractOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Write a JSON extraction report to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// More output (-v inode details, -vv everything)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            output_dir: self.output.clone(),
            error_policy: if self.keep_going {
                ErrorPolicy::SkipNode
            } else {
                ErrorPolicy::FailFast
            },
            max_depth: self.max_depth,
            ..ExtractOptions::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let table = match &cli.partition_table {
        Some(path) => PartitionTable::from_json_file(path)
            .with_context(|| format!("Failed to load partition table {}", path.display()))?,
        None => PartitionTable::builtin(),
    };
    let partition = table.resolve(cli.partition)?;

    let report = extract_image(&cli.image, partition, cli.inode, cli.extract_options())
        .with_context(|| {
            format!(
                "Failed to extract inode {} from partition {} of {}",
                cli.inode,
                cli.partition,
                cli.image.display()
            )
        })?;

    if let Some(path) = &cli.report {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
    }

    println!("{}", report.summary());
    for node in &report.skipped {
        eprintln!("  skipped inode {} ({}): {}", node.inode, node.path.display(), node.error);
    }

    Ok(())
}
