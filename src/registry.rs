//! Accumulating store of findings prior to reporting.
//!
//! `FileIssues` is the per-file mutable context handed to every check; the
//! engine merges one slice per file into an `IssueRegistry` whose iteration
//! order is the reporting order. Both layers are ordinary values so tests can
//! construct isolated instances; there is no process-wide state.

use crate::models::{Issue, Record, RuleCode};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
/// Findings for a single file, keyed by 1-based line number.
///
/// Insertion is idempotent: recording the same (line, code, name) twice is a
/// no-op. Every line of the loaded file gets an entry up front, so lookups
/// during reporting never distinguish "no findings" from "line unseen".
pub struct FileIssues {
    lines: BTreeMap<usize, BTreeSet<Issue>>,
}

impl FileIssues {
    /// Prime entries for lines `1..=line_count`, all initially empty.
    pub fn new(line_count: usize) -> Self {
        let lines = (1..=line_count).map(|n| (n, BTreeSet::new())).collect();
        FileIssues { lines }
    }

    /// Record a bare finding at `line`.
    pub fn record(&mut self, line: usize, code: RuleCode) {
        self.lines.entry(line).or_default().insert(Issue::bare(code));
    }

    /// Record a finding that carries an associated identifier.
    pub fn record_named(&mut self, line: usize, code: RuleCode, name: &str) {
        self.lines
            .entry(line)
            .or_default()
            .insert(Issue::named(code, name));
    }

    /// Findings on one line, in (code, name) order.
    pub fn at_line(&self, line: usize) -> impl Iterator<Item = &Issue> {
        self.lines.get(&line).into_iter().flatten()
    }

    /// Total findings across all lines.
    pub fn count(&self) -> usize {
        self.lines.values().map(BTreeSet::len).sum()
    }

    fn iter(&self) -> impl Iterator<Item = (usize, &Issue)> {
        self.lines
            .iter()
            .flat_map(|(line, set)| set.iter().map(move |issue| (*line, issue)))
    }
}

#[derive(Debug, Clone, Default)]
/// All findings for a run, keyed by file identifier.
pub struct IssueRegistry {
    files: BTreeMap<String, FileIssues>,
}

impl IssueRegistry {
    pub fn new() -> Self {
        IssueRegistry::default()
    }

    /// Merge a completed per-file slice into the registry.
    ///
    /// Inserting the same file twice unions the findings, keeping insertion
    /// idempotent across slices as well.
    pub fn insert(&mut self, file: String, issues: FileIssues) {
        match self.files.get_mut(&file) {
            Some(existing) => {
                for (line, set) in issues.lines {
                    existing.lines.entry(line).or_default().extend(set);
                }
            }
            None => {
                self.files.insert(file, issues);
            }
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Flatten into reporter records: files lexicographic, lines ascending,
    /// issues by code then name. The reporter consumes this order verbatim.
    pub fn records(&self) -> Vec<Record> {
        let mut out = Vec::new();
        for (file, issues) in &self.files {
            for (line, issue) in issues.iter() {
                out.push(Record {
                    file: file.clone(),
                    line,
                    code: issue.code,
                    name: issue.name.clone(),
                });
            }
        }
        out
    }
}
