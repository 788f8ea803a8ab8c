//! # capsule-hotel Entry Point
//!
//! Parses flags, installs tracing, and runs the console session on the
//! process's stdin and stdout.

use anyhow::Context;
use clap::Parser;

use capsule_cli::config::init_tracing;
use capsule_cli::{Cli, Shell};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let mut shell = Shell::new(std::io::stdin().lock(), std::io::stdout().lock());
    shell.run(cli.capacity).context("console session failed")
}
