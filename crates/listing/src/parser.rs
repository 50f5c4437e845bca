//! Text parsers for candidate metadata.
//!
//! Nothing here inspects image bytes: the file type and the local file
//! name come from the URL, the resolution from the post title.

use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::types::Resolution;

/// Last `name.ext` of a URL, optionally followed by a query or fragment.
static FILE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([\w,\s-]+)\.(\w+)(?:[?#].*)?$").expect("file name pattern is valid")
});

/// `[1920x1080]`, `[1920 × 1080]`, `[1920*1080]`, ...
static RESOLUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[\s*(\d+)\s*[×x*]\s*(\d+)\s*\]").expect("resolution pattern is valid")
});

fn file_name_captures(url: &str) -> Option<Captures<'_>> {
    FILE_NAME_RE.captures(url)
}

/// Extract the lower-cased file extension from a URL.
///
/// Returns an empty string when the URL has no `name.ext` suffix; that is a
/// filter input, not an error.
pub fn parse_file_type(url: &str) -> String {
    file_name_captures(url)
        .map(|caps| caps[2].to_lowercase())
        .unwrap_or_default()
}

/// The `name.ext` part of a URL, as it would be saved locally.
pub fn url_file_name(url: &str) -> Option<String> {
    file_name_captures(url).map(|caps| format!("{}.{}", &caps[1], &caps[2]))
}

/// Where the image at `url` would be stored inside `directory`.
///
/// `None` for URLs without a file name; such candidates never count as
/// already downloaded.
pub fn url_file_path(directory: &Path, url: &str) -> Option<PathBuf> {
    url_file_name(url).map(|name| directory.join(name))
}

/// Parse the first bracketed resolution in a title.
pub fn parse_resolution(title: &str) -> Option<Resolution> {
    let caps = RESOLUTION_RE.captures(title)?;
    let width: u32 = caps[1].parse().ok()?;
    let height: u32 = caps[2].parse().ok()?;

    if width == 0 || height == 0 {
        return None;
    }
    Some(Resolution::new(width, height))
}
