// src/cli/mod.rs

//! Command-line surface of the `dotenvx` binary.

use clap::Parser;
use std::path::PathBuf;

pub mod handlers;
pub mod report;

/// dotenvx: load layered `.env` files and run a command with the result.
///
/// A file named like `app.env.production.api` is applied as a chain:
/// `app.env`, then `app.env.production`, then `app.env.production.api`.
/// An entry directly preceded by a `# LOCK` comment cannot be overridden by
/// a later file in the chain.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(trailing_var_arg = true)]
pub struct Cli {
    /// Path to the env file. Defaults to `file` in config.toml, then `.env`.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Apply the file chain on top of the current environment.
    #[arg(short = 'o', long = "override")]
    pub override_env: bool,

    /// Report every loaded file and its changes on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the files that would be loaded, one per line, and exit.
    #[arg(long)]
    pub plan: bool,

    /// Print the resolved environment as sorted KEY=VALUE lines.
    #[arg(long, conflicts_with = "export")]
    pub print: bool,

    /// Print the resolved environment as `export KEY='VALUE'` lines for `eval`.
    #[arg(long)]
    pub export: bool,

    /// The command to run with the resolved environment, followed by its arguments.
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}
