//! Command line driver
//!
//! Reads programs from a file or interactively from stdin and prints their
//! tokens or syntax trees. Not part of the stable library API.

pub mod args;
pub mod repl;

pub use args::{Cli, LoggingArgs};
pub use repl::{evaluate, read_input, repl, Options};

use crossterm::tty::IsTty;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Install a compact stderr logger filtered at `level`.
pub fn init_logging(level: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .with_filter(level);

    tracing_subscriber::registry().with(layer).init();
}

pub fn run(cli: &Cli) -> io::Result<ExitCode> {
    let mut out = io::stdout().lock();
    let options = Options {
        rule: cli.rule,
        tokens_only: cli.tokens,
        color: io::stdout().is_tty(),
    };

    if let Some(path) = &cli.file {
        info!(path = %path.display(), rule = %options.rule, "parsing file");
        let source = fs::read_to_string(path)?;
        let ok = evaluate(&source, &options, &mut out)?;
        out.flush()?;
        return Ok(if ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut input = io::stdin().lock();
    repl(&mut input, &mut out, &options)?;
    Ok(ExitCode::SUCCESS)
}
