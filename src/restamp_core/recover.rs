use crate::restamp_core::archive::{ArchiveEntry, ArchiveWriter, CopyService, TimestampService};
use crate::restamp_core::error::{RestampError, Result};
use crate::restamp_core::media::{classify, MediaKind};
use crate::restamp_core::metadata::{
    ExifReader, ImageExtractor, TagDumper, TimestampExtractor, VideoExtractor,
};
use crate::restamp_core::scan::list_files;
use crate::restamp_core::timestamp::CaptureTimestamp;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for one recovery run.
#[derive(Debug, Clone)]
pub struct RecoverOptions {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub video_tool: String,
    pub dry_run: bool,
}

/// Counters reported at the end of a run.
#[derive(Debug, Default, Serialize)]
pub struct RecoverStats {
    pub images_recovered: usize,
    pub videos_recovered: usize,
    pub skipped_unsupported: usize,
    pub failed: usize,
}

/// Recover capture timestamps for every media file under the source root,
/// materializing renamed, re-dated copies in the destination root.
///
/// Per-file failures are logged and counted; only enumeration failure (or an
/// unusable source directory) aborts the run.
pub fn recover(options: &RecoverOptions) -> Result<RecoverStats> {
    if !options.source_dir.is_dir() {
        return Err(RestampError::Usage(format!(
            "source is not a directory: {}",
            options.source_dir.display()
        )));
    }

    // Destination must exist before enumeration begins.
    fs::create_dir_all(&options.dest_dir)?;

    let files = list_files(&options.source_dir)?;
    log::info!(
        "Found {} files under {}",
        files.len(),
        options.source_dir.display()
    );

    let image_extractor = ImageExtractor::new(ExifReader);
    let video_extractor = VideoExtractor::new(TagDumper::new(&options.video_tool));
    let writer = ArchiveWriter::native();

    let bar_style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .unwrap();
    let bar = ProgressBar::new(files.len() as u64).with_style(bar_style);
    bar.set_message("Recovering timestamps");

    let mut stats = RecoverStats::default();

    for path in &files {
        let kind = classify(path);

        // Select the strategy once; everything downstream is kind-agnostic.
        let extractor: &dyn TimestampExtractor = match kind {
            MediaKind::Image => &image_extractor,
            MediaKind::Video => &video_extractor,
            MediaKind::Unsupported => {
                log::debug!("Skipping unsupported file {}", path.display());
                stats.skipped_unsupported += 1;
                bar.inc(1);
                continue;
            }
        };

        match recover_file(path, &options.dest_dir, extractor, &writer, options.dry_run) {
            Ok(_) => {
                if kind == MediaKind::Image {
                    stats.images_recovered += 1;
                } else {
                    stats.videos_recovered += 1;
                }
            }
            Err(e) => {
                log::warn!("{}: {}", path.display(), e);
                stats.failed += 1;
            }
        }
        bar.inc(1);
    }

    bar.finish_with_message("Recovery complete");

    Ok(stats)
}

/// Process one classified file: extract, normalize, name, write.
///
/// The first failing step wins; nothing is written for a failed file.
fn recover_file<C: CopyService, T: TimestampService>(
    path: &Path,
    dest_dir: &Path,
    extractor: &dyn TimestampExtractor,
    writer: &ArchiveWriter<C, T>,
    dry_run: bool,
) -> Result<ArchiveEntry> {
    let raw = extractor.extract(path)?;
    let timestamp = CaptureTimestamp::from_raw(&raw)?;
    let entry = ArchiveEntry::new(dest_dir, extractor.prefix(), path, timestamp);

    println!(
        "cp {} -> {}",
        entry.source.display(),
        entry.destination.display()
    );

    if !dry_run {
        writer.write(&entry)?;
    }

    Ok(entry)
}
