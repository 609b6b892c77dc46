use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use smallcal_render::render_month;

use crate::cli::Cli;
use crate::config::SmallcalConfig;
use crate::convert;

/// Renders the monthly table for `(year, month)`.
pub fn run(
    year: i32,
    month: u8,
    mark: Option<NaiveDate>,
    cli: &Cli,
    config: &SmallcalConfig,
) -> Result<Vec<String>> {
    let _cmd = info_span!("month", year, month).entered();

    let options = convert::build_month_options(cli, &config.display)?;
    info!(border = options.border().name(), first_weekday = %options.first_weekday(), "rendering month");

    render_month(year, month, mark, &options)
        .with_context(|| format!("failed to render {year}-{month:02}"))
}
