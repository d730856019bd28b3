use crate::restamp_core::error::{RestampError, Result};
use crate::restamp_core::timestamp::RawTimestamp;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::Command;

/// Capture-timestamp tag names, most specific first.
const EXIF_DATE_TAGS: &[&str] = &["DateTimeOriginal", "DateTimeDigitized", "DateTime"];

/// Label of the output line holding the capture time in tag-dumper output.
const VIDEO_DATE_LABEL: &str = "Creation time";

/// External tag dumper invoked for video files unless overridden.
pub const DEFAULT_VIDEO_TOOL: &str = "tageditor";

/// Reads the embedded tags of an image file as a name -> value map.
///
/// "No metadata present" is reported as `MetadataNotFound`, distinct from a
/// hard parse failure (`MetadataRead`).
pub trait ImageMetadataService {
    fn read_tags(&self, path: &Path) -> Result<BTreeMap<String, String>>;
}

/// Dumps a video file's tags as text via an external tool.
pub trait VideoMetadataService {
    fn dump_tags(&self, path: &Path) -> Result<String>;
}

/// Recovers a raw capture-timestamp string for one media kind.
///
/// One strategy object is selected per file after classification; pipeline
/// stages never re-branch on the media kind.
pub trait TimestampExtractor {
    /// Archive filename prefix for files handled by this strategy.
    fn prefix(&self) -> &'static str;

    /// Pull the raw capture-timestamp string out of `path`'s metadata.
    fn extract(&self, path: &Path) -> Result<RawTimestamp>;
}

/// In-process EXIF reader.
pub struct ExifReader;

impl ImageMetadataService for ExifReader {
    fn read_tags(&self, path: &Path) -> Result<BTreeMap<String, String>> {
        let file = File::open(path).map_err(|e| RestampError::MetadataRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut reader = BufReader::new(file);

        let exif = exif::Reader::new()
            .read_from_container(&mut reader)
            .map_err(|e| match e {
                exif::Error::NotFound(_) => RestampError::MetadataNotFound(path.to_path_buf()),
                other => RestampError::MetadataRead {
                    path: path.to_path_buf(),
                    reason: other.to_string(),
                },
            })?;

        let mut tags = BTreeMap::new();
        for field in exif.fields() {
            // Primary-image fields come first; keep the first value seen for
            // a tag so thumbnail duplicates do not shadow it.
            tags.entry(format!("{:?}", field.tag))
                .or_insert_with(|| field.display_value().to_string());
        }

        Ok(tags)
    }
}

/// Strategy for image files: embedded tag lookup over a priority list.
pub struct ImageExtractor<S> {
    service: S,
}

impl<S: ImageMetadataService> ImageExtractor<S> {
    pub fn new(service: S) -> Self {
        ImageExtractor { service }
    }
}

impl<S: ImageMetadataService> TimestampExtractor for ImageExtractor<S> {
    fn prefix(&self) -> &'static str {
        "IMG"
    }

    fn extract(&self, path: &Path) -> Result<RawTimestamp> {
        let tags = self.service.read_tags(path)?;

        let raw = EXIF_DATE_TAGS
            .iter()
            .find_map(|name| tags.get(*name).map(|v| v.trim()).filter(|v| !v.is_empty()))
            .ok_or_else(|| RestampError::MetadataNotFound(path.to_path_buf()))?;

        Ok(RawTimestamp::exif(raw))
    }
}

/// Strategy for video files: scan tag-dumper output for the creation line.
pub struct VideoExtractor<S> {
    service: S,
}

impl<S: VideoMetadataService> VideoExtractor<S> {
    pub fn new(service: S) -> Self {
        VideoExtractor { service }
    }
}

impl<S: VideoMetadataService> TimestampExtractor for VideoExtractor<S> {
    fn prefix(&self) -> &'static str {
        "VID"
    }

    fn extract(&self, path: &Path) -> Result<RawTimestamp> {
        let output = self.service.dump_tags(path)?;

        let raw = find_labeled_value(&output, VIDEO_DATE_LABEL)
            .ok_or_else(|| RestampError::MetadataNotFound(path.to_path_buf()))?;

        Ok(RawTimestamp::canonical(raw))
    }
}

/// Find the first line containing `label` and return the trimmed remainder
/// of that line after it (a separating colon is consumed as well).
fn find_labeled_value<'a>(output: &'a str, label: &str) -> Option<&'a str> {
    output.lines().find_map(|line| {
        line.find(label).map(|idx| {
            line[idx + label.len()..]
                .trim_start_matches([':', ' ', '\t'])
                .trim_end()
        })
    })
}

/// Tag dumper invoked as a subprocess: `<program> -i -f <path>`.
pub struct TagDumper {
    program: String,
}

impl TagDumper {
    pub fn new(program: impl Into<String>) -> Self {
        TagDumper {
            program: program.into(),
        }
    }
}

impl VideoMetadataService for TagDumper {
    fn dump_tags(&self, path: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("-i")
            .arg("-f")
            .arg(path)
            .output()
            .map_err(|e| RestampError::ToolInvocation {
                tool: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(RestampError::ToolInvocation {
                tool: self.program.clone(),
                reason: format!("exited with {}", output.status),
            });
        }

        // The tool may report on either channel; scan both.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}
