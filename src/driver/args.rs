//! Command line configuration

use crate::parser::Rule;
use clap::{value_parser, ArgAction, Args, Parser};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Lex and parse DO/END programs, printing the syntax tree
#[derive(Debug, Parser)]
#[command(name = "dolang", version, about)]
pub struct Cli {
    /// Parse this file once and exit instead of reading from stdin
    pub file: Option<PathBuf>,

    /// Grammar rule the input is parsed as (source, stmt or expr)
    #[arg(short, long, default_value_t = Rule::Source)]
    pub rule: Rule,

    /// Stop after lexing and print the tokens
    #[arg(short, long)]
    pub tokens: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// `-v[v]` raises and `-q[q]` lowers the log level
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LoggingArgs {
    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Less log output (-q errors only, -qq nothing)
    #[arg(short = 'q', long = "quiet", value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,
}

impl LoggingArgs {
    pub fn level_filter(&self) -> LevelFilter {
        match self.verbose as i8 - self.quiet as i8 {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            2..=i8::MAX => LevelFilter::TRACE,
        }
    }
}
