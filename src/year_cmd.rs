use anyhow::Result;
use chrono::NaiveDate;
use tracing::{info, info_span};

use smallcal_calendar::YearSpan;
use smallcal_render::render_years;

use crate::cli::Cli;
use crate::config::SmallcalConfig;
use crate::convert;

/// Renders the condensed yearly view for `span`.
pub fn run(
    span: &YearSpan,
    separate: bool,
    mark: Option<NaiveDate>,
    cli: &Cli,
    config: &SmallcalConfig,
) -> Result<Vec<String>> {
    let _cmd = info_span!("years", first = span.first(), last = span.last()).entered();

    let options = convert::build_year_options(cli, config)?
        .with_separate(separate)
        .with_mark(mark);
    info!(
        years = span.len(),
        contiguous = span.is_contiguous(),
        separate,
        orientation = ?options.orientation(),
        "rendering years"
    );

    Ok(render_years(span, &options))
}
