// SPDX-License-Identifier: MPL-2.0
//! Library enumeration and creation-date ordering.

use chrono::{DateTime, Local, NaiveDateTime};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File extensions (lowercase) recognized as photos.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp", "ico",
];

const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Returns `true` if the path has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Lists every photo under `root`, newest first.
///
/// Unreadable subdirectories are skipped; only a failure to read `root`
/// itself is reported. Symlinked directories are never entered.
///
/// # Errors
///
/// Returns the I/O error raised while reading `root`.
pub fn scan_library(root: &Path, recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut dated = Vec::new();
    collect(root, recursive, &mut dated)?;
    Ok(sort_newest_first(dated))
}

fn collect(dir: &Path, recursive: bool, out: &mut Vec<(NaiveDateTime, PathBuf)>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }

        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            if recursive {
                // Nested failures must not hide the rest of the library.
                let _ = collect(&path, recursive, out);
            }
        } else if path.is_file() && is_supported_image(&path) {
            out.push((creation_date(&path), path));
        }
    }
    Ok(())
}

/// Orders photos by creation date descending, then by path ascending.
#[must_use]
pub fn sort_newest_first(mut dated: Vec<(NaiveDateTime, PathBuf)>) -> Vec<PathBuf> {
    dated.sort_by(|(a_date, a_path), (b_date, b_path)| {
        b_date.cmp(a_date).then_with(|| a_path.cmp(b_path))
    });
    dated.into_iter().map(|(_, path)| path).collect()
}

/// Determines when a photo was taken, as local wall-clock time.
///
/// Falls back from EXIF capture time to filesystem timestamps, and to the
/// Unix epoch if nothing is available. EXIF `DateTimeOriginal` carries no
/// zone, so file times are converted to the local zone to share its scale.
#[must_use]
pub fn creation_date(path: &Path) -> NaiveDateTime {
    if let Some(date) = exif_creation_date(path) {
        return date;
    }

    let metadata = fs::metadata(path).ok();
    let file_time = metadata
        .as_ref()
        .and_then(|m| m.created().ok())
        .or_else(|| metadata.as_ref().and_then(|m| m.modified().ok()))
        .unwrap_or(SystemTime::UNIX_EPOCH);

    DateTime::<Local>::from(file_time).naive_local()
}

fn exif_creation_date(path: &Path) -> Option<NaiveDateTime> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;

    [exif::Tag::DateTimeOriginal, exif::Tag::DateTime]
        .into_iter()
        .filter_map(|tag| exif.get_field(tag, exif::In::PRIMARY))
        .find_map(|field| match &field.value {
            exif::Value::Ascii(values) => values
                .first()
                .and_then(|raw| std::str::from_utf8(raw).ok())
                .and_then(parse_exif_datetime),
            _ => None,
        })
}

/// Parses an EXIF `YYYY:MM:DD HH:MM:SS` timestamp.
#[must_use]
pub fn parse_exif_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim_end_matches('\0').trim(), EXIF_DATE_FORMAT).ok()
}
