// dolang: lexer and parser front end for DO/END programs

use std::process::ExitCode;

use clap::Parser;
use dolang::driver::{self, Cli};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    driver::init_logging(cli.logging.level_filter());

    Ok(driver::run(&cli)?)
}
