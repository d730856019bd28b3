use crate::restamp_core::metadata::DEFAULT_VIDEO_TOOL;
use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version)]
#[command(about = "Recovers capture timestamps from media metadata and rebuilds a renamed, re-dated archive")]
pub struct Cli {
    /// Directory tree containing the media files to recover
    #[arg(required = true)]
    pub source_dir: PathBuf,

    /// Flat directory receiving the renamed, re-dated copies
    #[arg(required = true)]
    pub dest_dir: PathBuf,

    /// Show what would be recovered without copying anything
    #[arg(long)]
    pub dry_run: bool,

    /// External tag dumper used to read video metadata
    #[arg(long, default_value = DEFAULT_VIDEO_TOOL)]
    pub video_tool: String,

    /// Run-summary output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Enable file logging to restamp.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON summary
    Json,
}
