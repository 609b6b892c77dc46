use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Workspace crates whose events reach the terminal.
const CRATE_TARGETS: &[&str] = &[
    "smallcal",
    "smallcal_calendar",
    "smallcal_grid",
    "smallcal_render",
];

/// Log level for a `-v` count: warn by default, then info, debug, trace.
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `EnvFilter` directives enabling `level` for the smallcal crates only, so
/// dependency chatter stays off even at `-vvv`.
fn filter_directives(level: Level) -> String {
    let level = level.to_string().to_lowercase();
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// Events go to stderr; stdout carries nothing but the calendar, so output
/// can be piped even with logging turned up.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .init();
}
