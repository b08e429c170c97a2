//! pystyle core library.
//!
//! This crate exposes programmatic APIs for checking Python source files
//! against a small fixed set of style rules (S001–S012).
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `discover`: File listing and loading.
//! - `scan`: Per-line string/comment boundary scanner.
//! - `lexical`: Line-based checks S001–S007.
//! - `tree`: Python AST lowering into a closed node set.
//! - `structural`: Tree-based checks S008–S012.
//! - `registry`: Per-file and whole-run finding stores.
//! - `engine`: Per-file orchestration and parallel execution.
//! - `models`: Rule codes, issues, records, summaries.
//! - `output`: Human/JSON printers and message templates.
//! - `error`: Per-file diagnostics.
pub mod cli;
pub mod config;
pub mod discover;
pub mod engine;
pub mod error;
pub mod lexical;
pub mod models;
pub mod output;
pub mod registry;
pub mod scan;
pub mod structural;
pub mod tree;
