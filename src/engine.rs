//! Analysis engine: drives all checks over the discovered files.
//!
//! Files are independent, so per-file analysis runs on the rayon pool with
//! each worker owning its exclusive `FileIssues` slice; slices are merged
//! into one ordered registry before the reporter sees anything. A read or
//! parse failure in one file never aborts the others.

use crate::discover;
use crate::error::Diagnostic;
use crate::lexical;
use crate::models::{Record, Summary};
use crate::registry::{FileIssues, IssueRegistry};
use crate::structural;
use crate::tree;
use rayon::prelude::*;
use std::path::Path;

#[derive(Debug, Clone)]
/// Output of one run: ordered findings, per-file diagnostics, and counts.
pub struct Report {
    pub records: Vec<Record>,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: Summary,
}

/// Analyze `path` (one file or a directory) and produce an ordered report.
pub fn run_check(path: &Path, max_length: usize) -> Report {
    let files = match discover::list_files(path) {
        Ok(files) => files,
        Err(err) => {
            let diag = Diagnostic::Read {
                file: path.to_string_lossy().to_string(),
                message: err.to_string(),
            };
            return Report {
                records: Vec::new(),
                diagnostics: vec![diag],
                summary: Summary {
                    findings: 0,
                    files: 0,
                },
            };
        }
    };

    let per_file: Vec<FileOutcome> = files
        .par_iter()
        .map(|file| analyze_file(file, max_length))
        .collect();

    let mut registry = IssueRegistry::new();
    let mut diagnostics = Vec::new();
    for outcome in per_file {
        if let Some(issues) = outcome.issues {
            registry.insert(outcome.file, issues);
        }
        if let Some(diag) = outcome.diagnostic {
            diagnostics.push(diag);
        }
    }

    let records = registry.records();
    let summary = Summary {
        findings: records.len(),
        files: registry.file_count(),
    };
    Report {
        records,
        diagnostics,
        summary,
    }
}

struct FileOutcome {
    file: String,
    issues: Option<FileIssues>,
    diagnostic: Option<Diagnostic>,
}

/// Run all checks over one file, producing its registry slice.
///
/// Lexical checks always run once the file loads; structural checks require
/// a successful parse and degrade to a diagnostic otherwise.
fn analyze_file(path: &Path, max_length: usize) -> FileOutcome {
    let file = path.to_string_lossy().to_string();
    let source = match discover::load_source(path) {
        Ok(source) => source,
        Err(err) => {
            return FileOutcome {
                file: file.clone(),
                issues: None,
                diagnostic: Some(Diagnostic::Read {
                    file,
                    message: err.to_string(),
                }),
            };
        }
    };

    let lines = discover::split_lines(&source);
    let mut issues = FileIssues::new(lines.len());
    lexical::run_all(&lines, max_length, &mut issues);

    let diagnostic = match tree::parse_module(&source, &file) {
        Ok(nodes) => {
            structural::run_all(&nodes, &mut issues);
            None
        }
        Err(message) => Some(Diagnostic::Parse {
            file: file.clone(),
            message,
        }),
    };

    FileOutcome {
        file,
        issues: Some(issues),
        diagnostic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::DEFAULT_MAX_LENGTH;
    use crate::models::RuleCode;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_end_to_end_orders_files_and_lines() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "b.py", "x = 1;\n");
        write(root, "a.py", "def  foo():\n    pass\n");

        let report = run_check(root, DEFAULT_MAX_LENGTH);
        assert!(report.diagnostics.is_empty());
        let keys: Vec<_> = report
            .records
            .iter()
            .map(|r| (r.file.ends_with("a.py"), r.line, r.code))
            .collect();
        assert_eq!(
            keys,
            vec![
                (true, 1, RuleCode::KeywordSpacing),
                (false, 1, RuleCode::StraySemicolon),
            ]
        );
        assert_eq!(report.summary.findings, 2);
        assert_eq!(report.summary.files, 2);
    }

    #[test]
    fn test_parse_failure_keeps_lexical_findings() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "bad.py", "def broken(:\nx = 1;\n");

        let report = run_check(root, DEFAULT_MAX_LENGTH);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(matches!(report.diagnostics[0], Diagnostic::Parse { .. }));
        assert!(report
            .records
            .iter()
            .any(|r| r.code == RuleCode::StraySemicolon && r.line == 2));
    }

    #[test]
    fn test_missing_file_is_a_read_diagnostic() {
        let dir = tempdir().unwrap();
        let ghost = dir.path().join("ghost.py");
        let report = run_check(&ghost, DEFAULT_MAX_LENGTH);
        assert!(report.records.is_empty());
        assert_eq!(report.diagnostics.len(), 1);
        assert!(matches!(report.diagnostics[0], Diagnostic::Read { .. }));
    }

    #[test]
    fn test_one_bad_file_does_not_abort_others() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "bad.py", "def broken(:\n");
        write(root, "good.py", "class fooBar:\n    pass\n");

        let report = run_check(root, DEFAULT_MAX_LENGTH);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report
            .records
            .iter()
            .any(|r| r.code == RuleCode::BadClassName));
    }

    #[test]
    fn test_two_runs_are_identical() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "mix.py",
            "class fooBar:\n    def  get(self, myArg=[]):\n        self.Val = 1;  # TODO later\n",
        );
        write(root, "other.py", "x = 1\n\n\n\n\ny = 2\n");

        let first = run_check(root, DEFAULT_MAX_LENGTH);
        let second = run_check(root, DEFAULT_MAX_LENGTH);
        assert_eq!(first.records, second.records);
        assert!(!first.records.is_empty());
    }

    #[test]
    fn test_max_length_option_applies() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "long.py", &format!("x = \"{}\"\n", "a".repeat(90)));

        let strict = run_check(root, 40);
        assert!(strict
            .records
            .iter()
            .any(|r| r.code == RuleCode::TooLong));
        let relaxed = run_check(root, 120);
        assert!(relaxed
            .records
            .iter()
            .all(|r| r.code != RuleCode::TooLong));
    }
}
