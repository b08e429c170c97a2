//! Shared data models: rule codes, issues, report records, and summaries.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Closed enumeration of style rule codes.
///
/// Variant order defines the reporting order within a line, so the derived
/// `Ord` is load-bearing: S001 sorts before S002 and so on.
pub enum RuleCode {
    #[serde(rename = "S001")]
    TooLong,
    #[serde(rename = "S002")]
    BadIndentation,
    #[serde(rename = "S003")]
    StraySemicolon,
    #[serde(rename = "S004")]
    CommentSpacing,
    #[serde(rename = "S005")]
    TodoFound,
    #[serde(rename = "S006")]
    ExcessiveBlankLines,
    #[serde(rename = "S007")]
    KeywordSpacing,
    #[serde(rename = "S008")]
    BadClassName,
    #[serde(rename = "S009")]
    BadFunctionName,
    #[serde(rename = "S010")]
    BadArgumentName,
    #[serde(rename = "S011")]
    BadVariableName,
    #[serde(rename = "S012")]
    MutableDefault,
}

impl RuleCode {
    /// Stable short code used in rendered messages and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::TooLong => "S001",
            RuleCode::BadIndentation => "S002",
            RuleCode::StraySemicolon => "S003",
            RuleCode::CommentSpacing => "S004",
            RuleCode::TodoFound => "S005",
            RuleCode::ExcessiveBlankLines => "S006",
            RuleCode::KeywordSpacing => "S007",
            RuleCode::BadClassName => "S008",
            RuleCode::BadFunctionName => "S009",
            RuleCode::BadArgumentName => "S010",
            RuleCode::BadVariableName => "S011",
            RuleCode::MutableDefault => "S012",
        }
    }
}

impl std::fmt::Display for RuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// One finding: a rule code plus an optional associated identifier.
///
/// Two issues are equal iff code and name are equal; the derived `Ord`
/// compares code first and breaks ties by name, which gives the registry its
/// deterministic within-line order for free.
pub struct Issue {
    pub code: RuleCode,
    pub name: Option<String>,
}

impl Issue {
    pub fn bare(code: RuleCode) -> Self {
        Issue { code, name: None }
    }

    pub fn named(code: RuleCode, name: &str) -> Self {
        Issue {
            code,
            name: Some(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
/// One finding resolved to its file and line, as handed to the reporter.
pub struct Record {
    pub file: String,
    pub line: usize,
    pub code: RuleCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub findings: usize,
    pub files: usize,
}
