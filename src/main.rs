//! pystyle CLI binary entry point.
//! Delegates to the engine for analysis and prints results.

mod cli;
mod config;
mod discover;
mod engine;
mod error;
mod lexical;
mod models;
mod output;
mod registry;
mod scan;
mod structural;
mod tree;

use clap::Parser;
use cli::{Cli, Commands};
use owo_colors::OwoColorize;
use std::path::PathBuf;

fn error_prefix() -> String {
    if std::env::var_os("NO_COLOR").is_none() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            path,
            output,
            max_length,
        } => {
            let target = PathBuf::from(&path);
            // Missing input is a configuration error: fail before any file
            // is processed.
            if !target.exists() {
                eprintln!("{} {}", error_prefix(), format!("no such path: {path}"));
                std::process::exit(2);
            }
            let eff = config::resolve_effective(&target, output.as_deref(), max_length);
            let report = engine::run_check(&target, eff.max_length);
            output::print_report(&report, &eff.output);
            if !report.records.is_empty() {
                std::process::exit(1);
            }
        }
    }
}
