//! Run configuration.
//!
//! Configuration is assembled from layers: built-in defaults, an optional
//! JSON file and command-line overrides. Each layer is a [`PartialConfig`];
//! [`Config::from_partial`] validates the merged result into an immutable
//! [`Config`]. Nothing here mutates a caller's value.

use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{Result, WallpaperError};
use crate::types::Resolution;

pub const APP_NAME: &str = "wallfetch";
pub const DEFAULT_SCORE_THRESHOLD: i64 = 100;

/// How a feed is ranked, and how the winner is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Top,
    Hot,
    Controversial,
    New,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Top => "top",
            SortMode::Hot => "hot",
            SortMode::Controversial => "controversial",
            SortMode::New => "new",
        }
    }
}

impl FromStr for SortMode {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(SortMode::Top),
            "hot" => Ok(SortMode::Hot),
            "controversial" => Ok(SortMode::Controversial),
            "new" => Ok(SortMode::New),
            other => Err(WallpaperError::configuration(format!(
                "unknown sort mode '{other}' (expected top, hot, controversial or new)"
            ))),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time window for `top` and `controversial` listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
            TimeWindow::All => "all",
        }
    }
}

impl FromStr for TimeWindow {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hour" => Ok(TimeWindow::Hour),
            "day" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            "month" => Ok(TimeWindow::Month),
            "year" => Ok(TimeWindow::Year),
            "all" => Ok(TimeWindow::All),
            other => Err(WallpaperError::configuration(format!(
                "unknown time window '{other}' (expected hour, day, week, month, year or all)"
            ))),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configuration layer. Every field is optional; `None` defers to the
/// layer below.
///
/// `sort` and `from` stay strings here so that an unknown value is reported
/// as a configuration error when the layers are validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub subreddits: Option<Vec<String>>,
    pub sort: Option<String>,
    pub from: Option<String>,
    pub score: Option<i64>,
    pub domains: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
    pub shuffle: Option<bool>,
    pub directory: Option<PathBuf>,
    pub resolution: Option<Resolution>,
}

impl PartialConfig {
    /// Layer `overrides` on top of `self`, returning a new value.
    pub fn merge(&self, overrides: &PartialConfig) -> PartialConfig {
        PartialConfig {
            subreddits: overrides.subreddits.clone().or_else(|| self.subreddits.clone()),
            sort: overrides.sort.clone().or_else(|| self.sort.clone()),
            from: overrides.from.clone().or_else(|| self.from.clone()),
            score: overrides.score.or(self.score),
            domains: overrides.domains.clone().or_else(|| self.domains.clone()),
            types: overrides.types.clone().or_else(|| self.types.clone()),
            shuffle: overrides.shuffle.or(self.shuffle),
            directory: overrides.directory.clone().or_else(|| self.directory.clone()),
            resolution: overrides.resolution.or(self.resolution),
        }
    }

    /// Read a layer from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path).map_err(|e| {
            WallpaperError::configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&body).map_err(|e| {
            WallpaperError::configuration(format!("invalid config {}: {}", path.display(), e))
        })
    }

    /// Read the layer at the default location, if there is one.
    ///
    /// A missing file is not an error: the defaults apply.
    pub fn load_default_file() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Validated, immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub subreddits: Vec<String>,
    pub sort: SortMode,
    pub from: TimeWindow,
    pub score: i64,
    /// Lower-cased domain allow-list; empty allows every domain
    pub domains: Vec<String>,
    /// Lower-cased file type allow-list; empty allows every type
    pub types: Vec<String>,
    pub shuffle: bool,
    pub directory: PathBuf,
    pub resolution: Option<Resolution>,
}

/// The part of [`Config`] the selection pipeline reads.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    pub score_threshold: i64,
    pub domains: Vec<String>,
    pub types: Vec<String>,
    pub resolution: Option<Resolution>,
    pub sort: SortMode,
    pub shuffle: bool,
    pub directory: PathBuf,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            domains: Vec::new(),
            types: Vec::new(),
            resolution: None,
            sort: SortMode::Top,
            shuffle: false,
            directory: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Built-in defaults as a configuration layer.
    pub fn defaults() -> PartialConfig {
        PartialConfig {
            subreddits: Some(vec!["wallpapers".to_string()]),
            sort: Some(SortMode::Top.as_str().to_string()),
            from: Some(TimeWindow::Day.as_str().to_string()),
            score: Some(DEFAULT_SCORE_THRESHOLD),
            domains: Some(Vec::new()),
            types: Some(Vec::new()),
            shuffle: Some(false),
            directory: Some(default_wallpaper_dir()),
            resolution: None,
        }
    }

    /// Merge `partial` over the defaults and validate the result.
    pub fn from_partial(partial: &PartialConfig) -> Result<Self> {
        let merged = Self::defaults().merge(partial);

        let subreddits: Vec<String> = merged
            .subreddits
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.trim().trim_start_matches("r/").to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if subreddits.is_empty() {
            return Err(WallpaperError::configuration("at least one subreddit is required"));
        }

        let sort = merged.sort.as_deref().unwrap_or("top").parse::<SortMode>()?;
        let from = merged.from.as_deref().unwrap_or("day").parse::<TimeWindow>()?;

        if let Some(resolution) = merged.resolution {
            if resolution.width == 0 || resolution.height == 0 {
                return Err(WallpaperError::configuration(format!(
                    "minimum resolution must be positive, got {resolution}"
                )));
            }
        }

        Ok(Self {
            subreddits,
            sort,
            from,
            score: merged.score.unwrap_or(DEFAULT_SCORE_THRESHOLD),
            domains: lowercase_all(merged.domains.unwrap_or_default()),
            types: lowercase_all(merged.types.unwrap_or_default()),
            shuffle: merged.shuffle.unwrap_or(false),
            directory: merged.directory.unwrap_or_else(default_wallpaper_dir),
            resolution: merged.resolution,
        })
    }

    pub fn selection(&self) -> SelectionConfig {
        SelectionConfig {
            score_threshold: self.score,
            domains: self.domains.clone(),
            types: self.types.clone(),
            resolution: self.resolution,
            sort: self.sort,
            shuffle: self.shuffle,
            directory: self.directory.clone(),
        }
    }
}

fn lowercase_all(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().trim_start_matches('.').to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// `<config dir>/wallfetch/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join("config.json"))
}

/// `<Pictures>/wallfetch`, falling back to the home directory.
pub fn default_wallpaper_dir() -> PathBuf {
    match UserDirs::new() {
        Some(dirs) => dirs
            .picture_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dirs.home_dir().join("Pictures"))
            .join(APP_NAME),
        None => PathBuf::from(".").join(APP_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        let config = Config::from_partial(&PartialConfig::default()).unwrap();
        assert_eq!(config.subreddits, vec!["wallpapers"]);
        assert_eq!(config.sort, SortMode::Top);
        assert_eq!(config.from, TimeWindow::Day);
        assert_eq!(config.score, 100);
        assert!(config.domains.is_empty());
        assert!(config.types.is_empty());
        assert!(!config.shuffle);
        assert!(config.resolution.is_none());
    }

    #[test]
    fn test_unknown_sort_mode_fails_fast() {
        let partial = PartialConfig {
            sort: Some("best".to_string()),
            ..PartialConfig::default()
        };
        let err = Config::from_partial(&partial).unwrap_err();
        assert!(matches!(err, WallpaperError::Configuration(_)));
        assert!(err.to_string().contains("best"));
    }

    #[test]
    fn test_unknown_time_window_fails() {
        let partial = PartialConfig {
            from: Some("decade".to_string()),
            ..PartialConfig::default()
        };
        assert!(Config::from_partial(&partial).is_err());
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let file = PartialConfig {
            subreddits: Some(vec!["earthporn".to_string()]),
            score: Some(500),
            ..PartialConfig::default()
        };
        let cli = PartialConfig {
            score: Some(10),
            shuffle: Some(true),
            ..PartialConfig::default()
        };

        let merged = file.merge(&cli);

        assert_eq!(merged.score, Some(10));
        assert_eq!(merged.shuffle, Some(true));
        assert_eq!(merged.subreddits, Some(vec!["earthporn".to_string()]));
        assert_eq!(file.score, Some(500));
        assert_eq!(cli.subreddits, None);
    }

    #[test]
    fn test_allow_lists_are_normalized() {
        let partial = PartialConfig {
            subreddits: Some(vec!["r/EarthPorn".to_string(), " ".to_string()]),
            domains: Some(vec!["I.Redd.IT".to_string()]),
            types: Some(vec![".JPG".to_string(), "Png".to_string()]),
            ..PartialConfig::default()
        };
        let config = Config::from_partial(&partial).unwrap();
        assert_eq!(config.subreddits, vec!["EarthPorn"]);
        assert_eq!(config.domains, vec!["i.redd.it"]);
        assert_eq!(config.types, vec!["jpg", "png"]);
    }

    #[test]
    fn test_empty_subreddits_rejected() {
        let partial = PartialConfig {
            subreddits: Some(vec![]),
            ..PartialConfig::default()
        };
        assert!(Config::from_partial(&partial).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"subreddits": ["wallpaper"], "sort": "new", "resolution": {{"width": 2560, "height": 1440}}}}"#
        )
        .unwrap();

        let partial = PartialConfig::load_from_file(file.path()).unwrap();
        let config = Config::from_partial(&partial).unwrap();

        assert_eq!(config.sort, SortMode::New);
        assert_eq!(config.resolution, Some(Resolution::new(2560, 1440)));
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"subreddit": "typo"}}"#).unwrap();

        let err = PartialConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, WallpaperError::Configuration(_)));
    }

    #[test]
    fn test_selection_view() {
        let config = Config::from_partial(&PartialConfig {
            score: Some(42),
            shuffle: Some(true),
            ..PartialConfig::default()
        })
        .unwrap();
        let selection = config.selection();
        assert_eq!(selection.score_threshold, 42);
        assert!(selection.shuffle);
        assert_eq!(selection.directory, config.directory);
    }
}
