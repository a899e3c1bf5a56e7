//! CLI entry point for the jigsaw reconstruction tool

use clap::Parser;
use jigsaw::io::cli::{Cli, PuzzleRunner};
use jigsaw::io::logging::{init_logging, level_filter};

// The report is the program's output
#[allow(clippy::print_stdout)]
fn main() -> jigsaw::Result<()> {
    let cli = Cli::parse();
    init_logging(level_filter(cli.quiet, cli.verbose));
    let report = PuzzleRunner::new(cli).run()?;
    print!("{report}");
    Ok(())
}
