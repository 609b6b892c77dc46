//! Pure conversion functions: TOML config structs and CLI overrides -> crate
//! API option types.

use anyhow::{Context, Result, bail};

use smallcal_calendar::{Weekday, YearBounds};
use smallcal_grid::{FirstGlyph, GlyphPreset, GlyphSet};
use smallcal_render::{BorderStyle, MonthOptions, Orientation, YearOptions};

use crate::cli::Cli;
use crate::config::*;

/// Parses a glyph preset name into the corresponding enum variant.
pub fn parse_glyph_preset(s: &str) -> Result<GlyphPreset> {
    let name = s.to_lowercase();
    match GlyphPreset::ALL.into_iter().find(|p| p.name() == name) {
        Some(preset) => Ok(preset),
        None => bail!("unknown glyph set: {s:?}"),
    }
}

/// Parses a border style name into the corresponding enum variant.
pub fn parse_border(s: &str) -> Result<BorderStyle> {
    let name = s.to_lowercase();
    match BorderStyle::ALL.into_iter().find(|b| b.name() == name) {
        Some(style) => Ok(style),
        None => bail!("unknown border style: {s:?}"),
    }
}

/// Parses a weekday name, full or abbreviated, case-insensitively.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.trim().parse::<Weekday>() {
        Ok(wd) => Ok(wd),
        Err(_) => bail!("unknown weekday: {s:?}"),
    }
}

/// Parses an orientation name into the corresponding enum variant.
pub fn parse_orientation(s: &str) -> Result<Orientation> {
    match s.to_lowercase().as_str() {
        "horizontal" => Ok(Orientation::Horizontal),
        "vertical" => Ok(Orientation::Vertical),
        other => bail!("unknown orientation: {other:?}"),
    }
}

/// Parses a glyph override that must be exactly one character.
pub fn parse_glyph_char(field: &str, s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("glyphs.{field} must be a single character, got {s:?}"),
    }
}

/// Parses the first-of-month override: `"initial"` selects month initials,
/// anything else must be one character.
pub fn parse_first_glyph(s: &str) -> Result<FirstGlyph> {
    if s.eq_ignore_ascii_case("initial") {
        return Ok(FirstGlyph::MonthInitial);
    }
    parse_glyph_char("first_of_month", s).map(FirstGlyph::Fixed)
}

/// Builds the [`GlyphSet`]: the preset (CLI over config) with the config's
/// per-glyph overrides applied.
pub fn build_glyph_set(preset: Option<&str>, display: &DisplayToml, glyphs: &GlyphsToml) -> Result<GlyphSet> {
    let preset = parse_glyph_preset(preset.unwrap_or(&display.glyphs))?;
    let mut set = GlyphSet::preset(preset);
    if let Some(ref s) = glyphs.first_of_month {
        set = set.with_first_of_month(parse_first_glyph(s)?);
    }
    if let Some(ref s) = glyphs.marked {
        set = set.with_marked(parse_glyph_char("marked", s)?);
    }
    if let Some(ref s) = glyphs.regular {
        set = set.with_regular(parse_glyph_char("regular", s)?);
    }
    Ok(set)
}

/// Builds [`YearBounds`] from the TOML bounds section.
pub fn build_bounds(bounds: &BoundsToml) -> Result<YearBounds> {
    YearBounds::new(bounds.min_year, bounds.max_year).context("invalid [bounds] section")
}

/// The first weekday: CLI over config.
pub fn first_weekday(cli: &Cli, display: &DisplayToml) -> Result<Weekday> {
    parse_weekday(cli.first_weekday.as_deref().unwrap_or(&display.first_weekday))
}

/// Builds [`MonthOptions`] from CLI overrides and the display section.
pub fn build_month_options(cli: &Cli, display: &DisplayToml) -> Result<MonthOptions> {
    let border = parse_border(cli.border.as_deref().unwrap_or(&display.border))?;
    Ok(MonthOptions::new()
        .with_first_weekday(first_weekday(cli, display)?)
        .with_border(border))
}

/// Builds [`YearOptions`] (without the mark or block splitting) from CLI
/// overrides and config.
pub fn build_year_options(cli: &Cli, config: &SmallcalConfig) -> Result<YearOptions> {
    let orientation = if cli.vertical {
        Orientation::Vertical
    } else {
        parse_orientation(&config.display.orientation)?
    };
    let glyphs = build_glyph_set(cli.glyphs.as_deref(), &config.display, &config.glyphs)?;
    Ok(YearOptions::new()
        .with_first_weekday(first_weekday(cli, &config.display)?)
        .with_orientation(orientation)
        .with_glyphs(glyphs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use smallcal_grid::MarkerKind;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("smallcal").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn glyph_presets_case_insensitive() {
        assert_eq!(parse_glyph_preset("Blocks").unwrap(), GlyphPreset::Blocks);
        assert_eq!(parse_glyph_preset("minimal").unwrap(), GlyphPreset::Minimal);
        let err = parse_glyph_preset("emoji").unwrap_err();
        assert_eq!(err.to_string(), "unknown glyph set: \"emoji\"");
    }

    #[test]
    fn every_name_round_trips() {
        for p in GlyphPreset::ALL {
            assert_eq!(parse_glyph_preset(p.name()).unwrap(), p);
        }
        for b in BorderStyle::ALL {
            assert_eq!(parse_border(b.name()).unwrap(), b);
        }
        assert!(parse_border("dotted").is_err());
    }

    #[test]
    fn weekdays() {
        assert_eq!(parse_weekday("sunday").unwrap(), Weekday::Sun);
        assert_eq!(parse_weekday("Mon").unwrap(), Weekday::Mon);
        assert!(parse_weekday("funday").is_err());
    }

    #[test]
    fn orientations() {
        assert_eq!(parse_orientation("VERTICAL").unwrap(), Orientation::Vertical);
        assert!(parse_orientation("diagonal").is_err());
    }

    #[test]
    fn glyph_chars() {
        assert_eq!(parse_glyph_char("marked", "@").unwrap(), '@');
        assert_eq!(parse_glyph_char("marked", "█").unwrap(), '█');
        assert!(parse_glyph_char("marked", "").is_err());
        assert!(parse_glyph_char("marked", "ab").is_err());
        assert_eq!(parse_first_glyph("initial").unwrap(), FirstGlyph::MonthInitial);
        assert_eq!(parse_first_glyph("#").unwrap(), FirstGlyph::Fixed('#'));
    }

    #[test]
    fn glyph_overrides_apply_over_preset() {
        let display = DisplayToml::default();
        let glyphs = GlyphsToml {
            marked: Some("@".to_string()),
            ..Default::default()
        };
        let set = build_glyph_set(Some("blocks"), &display, &glyphs).unwrap();
        assert_eq!(set.glyph(MarkerKind::Marked, 1), '@');
        assert_eq!(set.glyph(MarkerKind::Regular, 1), '░');
    }

    #[test]
    fn bad_bounds() {
        let bounds = BoundsToml {
            min_year: 2100,
            max_year: 1900,
        };
        let err = build_bounds(&bounds).unwrap_err();
        assert!(format!("{err:#}").starts_with("invalid [bounds] section"));
    }

    #[test]
    fn cli_overrides_config() {
        let mut config = SmallcalConfig::default();
        config.display.border = "double".to_string();
        config.display.first_weekday = "monday".to_string();

        let opts = build_month_options(&cli(&[]), &config.display).unwrap();
        assert_eq!(opts.border(), BorderStyle::Double);
        assert_eq!(opts.first_weekday(), Weekday::Mon);

        let opts = build_month_options(&cli(&["-b", "ascii", "-w", "sat"]), &config.display).unwrap();
        assert_eq!(opts.border(), BorderStyle::Ascii);
        assert_eq!(opts.first_weekday(), Weekday::Sat);
    }

    #[test]
    fn vertical_flag_wins() {
        let config = SmallcalConfig::default();
        let opts = build_year_options(&cli(&["--vertical"]), &config).unwrap();
        assert_eq!(opts.orientation(), Orientation::Vertical);
        let opts = build_year_options(&cli(&[]), &config).unwrap();
        assert_eq!(opts.orientation(), Orientation::Horizontal);
    }
}
