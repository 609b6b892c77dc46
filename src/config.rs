use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "smallcal.toml";

/// Top-level smallcal configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmallcalConfig {
    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Per-glyph overrides applied on top of the preset.
    #[serde(default)]
    pub glyphs: GlyphsToml,

    /// Accepted year range.
    #[serde(default)]
    pub bounds: BoundsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_glyphs")]
    pub glyphs: String,
    #[serde(default = "default_border")]
    pub border: String,
    #[serde(default = "default_first_weekday")]
    pub first_weekday: String,
    #[serde(default = "default_orientation")]
    pub orientation: String,
    #[serde(default = "default_true")]
    pub highlight_today: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            glyphs: default_glyphs(),
            border: default_border(),
            first_weekday: default_first_weekday(),
            orientation: default_orientation(),
            highlight_today: true,
        }
    }
}

fn default_glyphs() -> String {
    "letters".to_string()
}
fn default_border() -> String {
    "single".to_string()
}
fn default_first_weekday() -> String {
    "sunday".to_string()
}
fn default_orientation() -> String {
    "horizontal".to_string()
}
fn default_true() -> bool {
    true
}

/// Single-character glyph overrides. `first_of_month` also accepts
/// `"initial"` for month initials.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlyphsToml {
    pub first_of_month: Option<String>,
    pub marked: Option<String>,
    pub regular: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsToml {
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

impl Default for BoundsToml {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}

fn default_min_year() -> i32 {
    smallcal_calendar::YearBounds::DEFAULT_MIN
}
fn default_max_year() -> i32 {
    smallcal_calendar::YearBounds::DEFAULT_MAX
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG`] is read if
/// present, otherwise every setting takes its default.
pub fn load(path: Option<&Path>) -> Result<SmallcalConfig> {
    match path {
        Some(p) => read(p),
        None if Path::new(DEFAULT_CONFIG).is_file() => read(Path::new(DEFAULT_CONFIG)),
        None => {
            debug!("no config file, using defaults");
            Ok(SmallcalConfig::default())
        }
    }
}

fn read(path: &Path) -> Result<SmallcalConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: SmallcalConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
