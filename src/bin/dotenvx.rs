// src/bin/dotenvx.rs

//! `dotenvx` binary: resolve layered env files, then print them or run a command.

use anyhow::Result;
use clap::Parser;
use colored::*;
use dotenvx::cli::{
    Cli,
    handlers::{self, print::PrintFormat},
    report::Reporter,
};
use std::io;

/// The main entry point of the `dotenvx` application.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    match run_cli(Cli::parse()) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Resolves the environment and hands it to the requested consumer.
///
/// Returns the exit code to terminate with.
fn run_cli(cli: Cli) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);

    let options = handlers::commons::resolve_options(&cli)?;
    log::info!("Loading environment variables from {}", options.file.display());

    if cli.plan {
        handlers::plan::handle(&options.file, &mut io::stdout().lock())?;
        return Ok(0);
    }

    let env_map = handlers::commons::resolve_env(&options, &mut Reporter::new(io::stderr()))?;

    if cli.print || cli.export {
        let format = if cli.export {
            PrintFormat::Export
        } else {
            PrintFormat::Plain
        };
        handlers::print::handle(&env_map, format, &mut io::stdout().lock())?;
    }

    if cli.args.is_empty() {
        return Ok(0);
    }
    handlers::exec::handle(&cli.args, &env_map)
}
