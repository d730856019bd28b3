use assert_fs::prelude::*;
use std::path::PathBuf;

/// Minimal JPEG carrying an EXIF block with `DateTimeOriginal` set to
/// `datetime` (must be the 19-byte `YYYY:MM:DD HH:MM:SS` form).
pub fn exif_jpeg_bytes(datetime: &str) -> Vec<u8> {
    assert_eq!(datetime.len(), 19, "EXIF datetime must be YYYY:MM:DD HH:MM:SS");

    let mut tiff = tiff_header();

    // IFD0: a single pointer to the Exif IFD, which starts right after it.
    let exif_ifd_offset: u32 = 8 + ifd_len(1);
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, 0x8769, 4, 1, exif_ifd_offset); // ExifIFDPointer, LONG
    tiff.extend_from_slice(&0u32.to_le_bytes());

    // Exif IFD: DateTimeOriginal as a 20-byte ASCII value stored after it.
    let value_offset: u32 = exif_ifd_offset + ifd_len(1);
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, 0x9003, 2, 20, value_offset); // DateTimeOriginal, ASCII
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(datetime.as_bytes());
    tiff.push(0);

    jpeg_with_exif(&tiff)
}

/// Minimal JPEG whose EXIF block carries no date tag at all.
pub fn exif_jpeg_bytes_without_date() -> Vec<u8> {
    let make = b"ACME Imaging\0";

    let mut tiff = tiff_header();

    let value_offset: u32 = 8 + ifd_len(1);
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, 0x010F, 2, make.len() as u32, value_offset); // Make, ASCII
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(make);

    jpeg_with_exif(&tiff)
}

fn tiff_header() -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&0x2Au16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff
}

/// Byte length of an IFD with `entries` entries, including the next-IFD link.
fn ifd_len(entries: u32) -> u32 {
    2 + entries * 12 + 4
}

fn push_entry(tiff: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: u32) {
    tiff.extend_from_slice(&tag.to_le_bytes());
    tiff.extend_from_slice(&kind.to_le_bytes());
    tiff.extend_from_slice(&count.to_le_bytes());
    tiff.extend_from_slice(&value.to_le_bytes());
}

fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8]; // SOI
    out.extend_from_slice(&[0xFF, 0xE1]); // APP1
    out.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&[0xFF, 0xD9]); // EOI
    out
}

/// Executable stub standing in for the external video tag dumper; prints a
/// header line plus `line` and exits 0.
#[cfg(unix)]
pub fn fake_video_tool(temp: &assert_fs::TempDir, line: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = temp.child("fake-tagdump");
    script
        .write_str(&format!(
            "#!/bin/sh\necho \"Container format: MPEG-4\"\necho \"{}\"\n",
            line
        ))
        .unwrap();

    let mut perms = std::fs::metadata(script.path()).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(script.path(), perms).unwrap();

    script.path().to_path_buf()
}
