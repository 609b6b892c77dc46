use std::path::PathBuf;

use clap::Parser;

/// Value clap substitutes when `--mark` is given without a date.
pub const MARK_TODAY: &str = "today";

/// Compact terminal calendar.
#[derive(Parser, Debug)]
#[command(
    name = "smallcal",
    version,
    about = "Compact terminal calendar: monthly tables and condensed yearly grids"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (used only if present unless given).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Year to display (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Show a single month (1-12) as a bordered table.
    #[arg(short, long, conflicts_with_all = ["number", "years"])]
    pub month: Option<u8>,

    /// Number of consecutive years to show, starting at --year.
    #[arg(short, long, conflicts_with = "years")]
    pub number: Option<u32>,

    /// Explicit years: a list like 2024,2026 or a range like 2020-2023.
    #[arg(short = 'Y', long)]
    pub years: Option<String>,

    /// One line per week instead of one line per weekday.
    #[arg(long)]
    pub vertical: bool,

    /// Render each year as its own block even when the years are consecutive.
    #[arg(long)]
    pub separate: bool,

    /// Highlight a date (YYYY-MM-DD); without a value, highlights today.
    #[arg(
        long,
        value_name = "DATE",
        num_args = 0..=1,
        default_missing_value = MARK_TODAY,
        conflicts_with = "no_mark"
    )]
    pub mark: Option<String>,

    /// Do not highlight any date.
    #[arg(long)]
    pub no_mark: bool,

    /// Glyph set for the yearly view (letters, blocks, geometric, dots, dice,
    /// squares, circles, minimal).
    #[arg(short, long)]
    pub glyphs: Option<String>,

    /// Border style for the monthly view (ascii, single, double, rounded, thick).
    #[arg(short, long)]
    pub border: Option<String>,

    /// First day of the week, e.g. sunday or mon.
    #[arg(short = 'w', long)]
    pub first_weekday: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("smallcal").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_mark_means_today() {
        let cli = parse(&["--mark"]).unwrap();
        assert_eq!(cli.mark.as_deref(), Some(MARK_TODAY));
        let cli = parse(&["--mark", "2023-07-04"]).unwrap();
        assert_eq!(cli.mark.as_deref(), Some("2023-07-04"));
        assert!(parse(&[]).unwrap().mark.is_none());
    }

    #[test]
    fn month_conflicts() {
        assert!(parse(&["-m", "2", "-n", "3"]).is_err());
        assert!(parse(&["-m", "2", "-Y", "2024,2025"]).is_err());
        assert!(parse(&["-n", "2", "-Y", "2024"]).is_err());
        assert!(parse(&["--mark", "--no-mark"]).is_err());
    }

    #[test]
    fn short_flags() {
        let cli = parse(&["-y", "2024", "-m", "2", "-b", "double", "-w", "mon", "-vv"]).unwrap();
        assert_eq!(cli.year, Some(2024));
        assert_eq!(cli.month, Some(2));
        assert_eq!(cli.border.as_deref(), Some("double"));
        assert_eq!(cli.first_weekday.as_deref(), Some("mon"));
        assert_eq!(cli.verbose, 2);
    }
}
