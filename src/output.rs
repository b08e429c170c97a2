//! Output rendering for the check command.
//!
//! Supports `human` (default) and `json` outputs. Message text templates
//! live here; the engine only supplies code + optional name. The reporter
//! prints the record sequence exactly as ordered by the registry — no
//! re-sorting, no filtering.

use crate::engine::Report;
use crate::error::Diagnostic;
use crate::models::{Record, RuleCode};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Render the message text for one finding.
pub fn message_for(code: RuleCode, name: Option<&str>) -> String {
    let name = name.unwrap_or("");
    match code {
        RuleCode::TooLong => "Too long".to_string(),
        RuleCode::BadIndentation => "Indentation is not a multiple of four".to_string(),
        RuleCode::StraySemicolon => "Unnecessary semicolon".to_string(),
        RuleCode::CommentSpacing => {
            "At least two spaces required before inline comments".to_string()
        }
        RuleCode::TodoFound => "TODO found".to_string(),
        RuleCode::ExcessiveBlankLines => {
            "More than two blank lines used before this line".to_string()
        }
        RuleCode::KeywordSpacing => format!("Too many spaces after '{name}'"),
        RuleCode::BadClassName => format!("Class name '{name}' should use CamelCase"),
        RuleCode::BadFunctionName => format!("Function name '{name}' should use snake_case"),
        RuleCode::BadArgumentName => format!("Argument name '{name}' should be snake_case"),
        RuleCode::BadVariableName => {
            format!("Variable '{name}' in function should be snake_case")
        }
        RuleCode::MutableDefault => "Default argument value is mutable".to_string(),
    }
}

fn render_record(record: &Record) -> String {
    format!(
        "{}: Line {}: {} {}",
        record.file,
        record.line,
        record.code,
        message_for(record.code, record.name.as_deref())
    )
}

/// Print a report in the requested format. Findings go to stdout,
/// diagnostics to stderr.
pub fn print_report(report: &Report, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for diag in &report.diagnostics {
                let prefix = match diag {
                    Diagnostic::Read { .. } => {
                        if color {
                            "error:".red().bold().to_string()
                        } else {
                            "error:".to_string()
                        }
                    }
                    Diagnostic::Parse { .. } => {
                        if color {
                            "note:".yellow().bold().to_string()
                        } else {
                            "note:".to_string()
                        }
                    }
                };
                eprintln!("{} {}", prefix, diag);
            }
            for record in &report.records {
                if color {
                    println!(
                        "{}: Line {}: {} {}",
                        record.file.bold(),
                        record.line,
                        record.code.yellow().bold(),
                        message_for(record.code, record.name.as_deref())
                    );
                } else {
                    println!("{}", render_record(record));
                }
            }
            let summary = format!(
                "— Summary — findings={} files={}",
                report.summary.findings, report.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose the report JSON object (pure) for testing purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    let findings: Vec<_> = report
        .records
        .iter()
        .map(|r| {
            json!({
                "file": r.file,
                "line": r.line,
                "code": r.code,
                "name": r.name,
                "message": message_for(r.code, r.name.as_deref()),
            })
        })
        .collect();
    let diagnostics: Vec<_> = report
        .diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect();
    json!({
        "findings": findings,
        "diagnostics": diagnostics,
        "summary": report.summary,
    })
}
