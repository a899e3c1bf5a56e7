//! Stderr logger setup

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Map command-line verbosity to a log level
///
/// `quiet` wins over any number of `-v` flags.
pub const fn level_filter(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the terminal logger on stderr
///
/// Standard output is reserved for the report. A second call is ignored.
pub fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    // Already initialised when several runs share a process (tests)
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
