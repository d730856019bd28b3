use std::path::Path;

/// Image file extensions eligible for recovery (exact match).
const IMAGE_EXTENSIONS: &[&str] = &["jpg"];

/// Video file extensions eligible for recovery (exact match).
const VIDEO_EXTENSIONS: &[&str] = &["mp4"];

/// Coarse classification of a source file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Unsupported,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a file by its extension.
///
/// Matching is exact and case-sensitive: `photo.jpg` is an image,
/// `photo.JPG` is not recovered. No I/O is performed.
pub fn classify(path: &Path) -> MediaKind {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => MediaKind::Image,
        Some(ext) if VIDEO_EXTENSIONS.contains(&ext) => MediaKind::Video,
        _ => MediaKind::Unsupported,
    }
}
