use crate::restamp_core::error::{RestampError, Result};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Canonical date-time layout, shared by parsing and the tool-consumable form.
const CANONICAL_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Separator-free layout used in archive filenames.
const COMPACT_FORMAT: &[FormatItem] =
    format_description!("[year][month][day]_[hour][minute][second]");

/// Layout of a raw timestamp string as it came out of metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLayout {
    /// EXIF style, colon-separated date components (`2022:05:10 14:30:00`).
    ExifColons,
    /// Tag-dumper style, canonical apart from surrounding whitespace.
    Canonical,
}

/// A raw timestamp string paired with the layout it was extracted in.
#[derive(Debug, Clone)]
pub struct RawTimestamp {
    pub text: String,
    pub layout: RawLayout,
}

impl RawTimestamp {
    pub fn exif(text: impl Into<String>) -> Self {
        RawTimestamp {
            text: text.into(),
            layout: RawLayout::ExifColons,
        }
    }

    pub fn canonical(text: impl Into<String>) -> Self {
        RawTimestamp {
            text: text.into(),
            layout: RawLayout::Canonical,
        }
    }
}

/// A recovered capture time. Local wall-clock; no timezone is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTimestamp(PrimitiveDateTime);

impl CaptureTimestamp {
    /// Normalize a raw metadata string into a capture timestamp.
    ///
    /// EXIF-layout input has exactly its first two colons (the date
    /// separators) rewritten to hyphens; tool-layout input is trimmed.
    /// Both funnel into the single canonical parse, so six numeric
    /// components in the expected positions are enforced in one place.
    pub fn from_raw(raw: &RawTimestamp) -> Result<Self> {
        let text = match raw.layout {
            RawLayout::ExifColons => raw.text.trim().replacen(':', "-", 2),
            RawLayout::Canonical => raw.text.trim().to_string(),
        };

        let parsed = PrimitiveDateTime::parse(&text, CANONICAL_FORMAT)
            .map_err(|_| RestampError::TimestampParse(raw.text.clone()))?;

        Ok(CaptureTimestamp(parsed))
    }

    /// Filename fragment: digits plus one underscore (`YYYYMMDD_HHMMSS`).
    pub fn compact(&self) -> String {
        self.0.format(COMPACT_FORMAT).unwrap()
    }

    /// Tool-consumable form with separators (`YYYY-MM-DD HH:MM:SS`).
    pub fn tool_form(&self) -> String {
        self.0.format(CANONICAL_FORMAT).unwrap()
    }

    /// The instant this wall-clock time names in the local zone.
    pub fn to_instant(&self) -> OffsetDateTime {
        self.0.assume_offset(local_offset())
    }
}

impl std::fmt::Display for CaptureTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tool_form())
    }
}

/// Get the local timezone offset, falling back to UTC if unavailable.
fn local_offset() -> UtcOffset {
    OffsetDateTime::now_local()
        .map(|dt| dt.offset())
        .unwrap_or(UtcOffset::UTC)
}
