use crate::restamp_core::error::{RestampError, Result};
use crate::restamp_core::timestamp::CaptureTimestamp;
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies file bytes between explicit paths.
pub trait CopyService {
    fn copy(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// Applies a capture timestamp to a file's filesystem times.
pub trait TimestampService {
    fn set_times(&self, path: &Path, timestamp: &CaptureTimestamp) -> Result<()>;
}

/// Native copy via std::fs. Overwrites an existing destination.
pub struct FsCopy;

impl CopyService for FsCopy {
    fn copy(&self, source: &Path, destination: &Path) -> Result<()> {
        fs::copy(source, destination)
            .map(drop)
            .map_err(|e| RestampError::Copy {
                src: source.to_path_buf(),
                dest: destination.to_path_buf(),
                cause: e,
            })
    }
}

/// Native touch: sets both access and modification time.
pub struct FsTouch;

impl TimestampService for FsTouch {
    fn set_times(&self, path: &Path, timestamp: &CaptureTimestamp) -> Result<()> {
        let ft = FileTime::from_unix_time(timestamp.to_instant().unix_timestamp(), 0);
        filetime::set_file_times(path, ft, ft).map_err(|e| RestampError::TimestampSet {
            path: path.to_path_buf(),
            cause: e,
        })
    }
}

/// A planned copy of one source file into the archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub timestamp: CaptureTimestamp,
}

impl ArchiveEntry {
    /// Derive the canonical destination for `source` under `dest_root`.
    ///
    /// The filename is `<prefix>_<YYYYMMDD_HHMMSS>.jpg`. Recovered files
    /// always carry a `.jpg` suffix regardless of kind. Two sources with
    /// the same prefix and capture second map to the same destination.
    pub fn new(
        dest_root: &Path,
        prefix: &str,
        source: &Path,
        timestamp: CaptureTimestamp,
    ) -> Self {
        let filename = format!("{}_{}.jpg", prefix, timestamp.compact());

        ArchiveEntry {
            source: source.to_path_buf(),
            destination: dest_root.join(filename),
            timestamp,
        }
    }
}

/// Executes archive entries: copy first, then re-date the copy.
pub struct ArchiveWriter<C, T> {
    copier: C,
    toucher: T,
}

impl ArchiveWriter<FsCopy, FsTouch> {
    /// Writer backed by native filesystem calls.
    pub fn native() -> Self {
        ArchiveWriter::new(FsCopy, FsTouch)
    }
}

impl<C: CopyService, T: TimestampService> ArchiveWriter<C, T> {
    pub fn new(copier: C, toucher: T) -> Self {
        ArchiveWriter { copier, toucher }
    }

    /// Copy the entry into place and stamp it. The timestamp step only runs
    /// once the destination has been written.
    pub fn write(&self, entry: &ArchiveEntry) -> Result<()> {
        self.copier.copy(&entry.source, &entry.destination)?;
        log::debug!(
            "Re-dating {} to {}",
            entry.destination.display(),
            entry.timestamp.tool_form()
        );
        self.toucher.set_times(&entry.destination, &entry.timestamp)
    }
}
