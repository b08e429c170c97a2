//! Structural rule set: checks S008–S012 over lowered syntax nodes.
//!
//! Each check walks the file's node list and writes into the per-file
//! `FileIssues` context, keyed by the node's own line. Traversal order does
//! not matter: findings are keyed by line and deduplicated by the registry.

use crate::models::RuleCode;
use crate::registry::FileIssues;
use crate::tree::SyntaxNode;
use regex::Regex;
use std::sync::OnceLock;

fn snake_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9_]+$").unwrap())
}

fn camel_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Z][a-z0-9]+)+$").unwrap())
}

/// snake_case: one or more lowercase letters, digits, or underscores.
pub fn is_snake_case(s: &str) -> bool {
    snake_re().is_match(s)
}

/// CamelCase: one or more segments, each an uppercase letter followed by one
/// or more lowercase letters or digits, with no separators.
pub fn is_camel_case(s: &str) -> bool {
    camel_re().is_match(s)
}

/// Run every structural check over `nodes`.
pub fn run_all(nodes: &[SyntaxNode], issues: &mut FileIssues) {
    check_class_names(nodes, issues);
    check_function_names(nodes, issues);
    check_argument_names(nodes, issues);
    check_variable_names(nodes, issues);
    check_mutable_defaults(nodes, issues);
}

/// S008: class name is not CamelCase.
pub fn check_class_names(nodes: &[SyntaxNode], issues: &mut FileIssues) {
    for node in nodes {
        if let SyntaxNode::ClassDef { name, line } = node {
            if !is_camel_case(name) {
                issues.record_named(*line, RuleCode::BadClassName, name);
            }
        }
    }
}

/// S009: function or method name is not snake_case.
pub fn check_function_names(nodes: &[SyntaxNode], issues: &mut FileIssues) {
    for node in nodes {
        if let SyntaxNode::FunctionDef { name, line, .. } = node {
            if !is_snake_case(name) {
                issues.record_named(*line, RuleCode::BadFunctionName, name);
            }
        }
    }
}

/// S010: positional parameter name is not snake_case. One finding per
/// offending parameter, at the parameter's own line.
pub fn check_argument_names(nodes: &[SyntaxNode], issues: &mut FileIssues) {
    for node in nodes {
        if let SyntaxNode::FunctionDef { params, .. } = node {
            for param in params {
                if !is_snake_case(&param.name) {
                    issues.record_named(param.line, RuleCode::BadArgumentName, &param.name);
                }
            }
        }
    }
}

/// S011: bound identifier (plain name or attribute target) is not
/// snake_case.
pub fn check_variable_names(nodes: &[SyntaxNode], issues: &mut FileIssues) {
    for node in nodes {
        match node {
            SyntaxNode::NameBinding { name, line }
            | SyntaxNode::AttributeBinding { name, line } => {
                if !is_snake_case(name) {
                    issues.record_named(*line, RuleCode::BadVariableName, name);
                }
            }
            _ => {}
        }
    }
}

/// S012: positional default value is a list, dict, or set literal, keyed by
/// the default expression's line.
pub fn check_mutable_defaults(nodes: &[SyntaxNode], issues: &mut FileIssues) {
    for node in nodes {
        if let SyntaxNode::FunctionDef { defaults, .. } = node {
            for default in defaults {
                if default.kind.is_mutable() {
                    issues.record(default.line, RuleCode::MutableDefault);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Issue;
    use crate::tree::parse_module;

    fn analyze(src: &str) -> FileIssues {
        let nodes = parse_module(src, "test.py").unwrap();
        let mut issues = FileIssues::new(src.lines().count());
        run_all(&nodes, &mut issues);
        issues
    }

    #[test]
    fn test_snake_case_predicate() {
        assert!(is_snake_case("snake_case"));
        assert!(is_snake_case("x2"));
        assert!(is_snake_case("_private"));
        assert!(!is_snake_case("camelCase"));
        assert!(!is_snake_case("Upper"));
        assert!(!is_snake_case(""));
    }

    #[test]
    fn test_camel_case_predicate() {
        assert!(is_camel_case("CamelCase"));
        assert!(is_camel_case("Foo2Bar"));
        assert!(!is_camel_case("fooBar"));
        assert!(!is_camel_case("Foo_Bar"));
        assert!(!is_camel_case("FOO"));
        assert!(!is_camel_case(""));
    }

    #[test]
    fn test_bad_class_name_flagged() {
        let issues = analyze("class fooBar:\n    pass\n");
        let found: Vec<_> = issues.at_line(1).cloned().collect();
        assert_eq!(found, vec![Issue::named(RuleCode::BadClassName, "fooBar")]);
    }

    #[test]
    fn test_good_class_name_clean() {
        let issues = analyze("class FooBar:\n    pass\n");
        assert_eq!(issues.count(), 0);
    }

    #[test]
    fn test_bad_function_name_flagged() {
        let issues = analyze("def myFunc():\n    pass\n");
        let found: Vec<_> = issues.at_line(1).cloned().collect();
        assert_eq!(
            found,
            vec![Issue::named(RuleCode::BadFunctionName, "myFunc")]
        );
    }

    #[test]
    fn test_bad_argument_name_flags_only_offender() {
        let issues = analyze("def f(a, myArg):\n    pass\n");
        let found: Vec<_> = issues.at_line(1).cloned().collect();
        assert_eq!(
            found,
            vec![Issue::named(RuleCode::BadArgumentName, "myArg")]
        );
    }

    #[test]
    fn test_bad_variable_and_attribute_names() {
        let issues = analyze("def f():\n    badName = 1\n    self.someAttr = 2\n    good = 3\n");
        let l2: Vec<_> = issues.at_line(2).cloned().collect();
        assert_eq!(l2, vec![Issue::named(RuleCode::BadVariableName, "badName")]);
        let l3: Vec<_> = issues.at_line(3).cloned().collect();
        assert_eq!(
            l3,
            vec![Issue::named(RuleCode::BadVariableName, "someAttr")]
        );
        assert!(issues.at_line(4).next().is_none());
    }

    #[test]
    fn test_mutable_default_flagged_none_clean() {
        let issues = analyze("def f(items=[]):\n    pass\n");
        let found: Vec<_> = issues.at_line(1).cloned().collect();
        assert_eq!(found, vec![Issue::bare(RuleCode::MutableDefault)]);

        let clean = analyze("def f(items=None):\n    pass\n");
        assert_eq!(clean.count(), 0);
    }

    #[test]
    fn test_set_and_dict_defaults_flagged() {
        let issues = analyze("def f(a={}, b={1}):\n    pass\n");
        assert_eq!(issues.count(), 1);
        // Both defaults sit on line 1; the bare S012 deduplicates to one.
        let found: Vec<_> = issues.at_line(1).cloned().collect();
        assert_eq!(found, vec![Issue::bare(RuleCode::MutableDefault)]);
    }
}
