//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pystyle",
    version,
    about = "A small static style checker for Python sources",
    long_about = "pystyle — a tiny, fast style checker for Python files.\n\nScans each file line-by-line and as a syntax tree, reporting violations\nS001–S012 (line length, indentation, stray semicolons, comment spacing,\nTODO markers, blank lines, keyword spacing, naming conventions, mutable\ndefaults).\n\nConfiguration precedence: CLI > pystyle.toml > defaults.",
    after_help = "Examples:\n  pystyle check src/\n  pystyle check app.py --output json\n  pystyle check src/ --max-length 99",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current pystyle version.")]
    Version,
    /// Check files for style violations
    #[command(
        about = "Run style checks",
        long_about = "Analyze a Python file, or every .py file directly inside a directory, and report style violations in a stable order.",
        after_help = "Examples:\n  pystyle check src/\n  pystyle check app.py --output json"
    )]
    Check {
        #[arg(help = "File or directory to check")]
        path: String,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Maximum allowed line length (default: 79)")]
        max_length: Option<usize>,
    },
}
