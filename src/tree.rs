//! Python syntax-tree lowering.
//!
//! Parses a file's source once with `rustpython-parser` and lowers the AST
//! into a flat list of `SyntaxNode` values — the closed set of node shapes
//! the structural checks care about. Checks pattern-match on these tags and
//! never touch the parser's AST directly, so the parser dependency stays
//! confined to this module.
//!
//! Binding targets are collected from plain/augmented/annotated assignments,
//! `for` targets, and `with ... as` targets, unpacking tuple/list/starred
//! patterns. Names bound inside comprehensions or walrus expressions are not
//! collected.

use rustpython_parser::ast::{self, ExprKind, StmtKind};
use rustpython_parser::parser;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A syntax-tree node relevant to the structural checks. Lines are 1-based.
pub enum SyntaxNode {
    ClassDef {
        name: String,
        line: usize,
    },
    FunctionDef {
        name: String,
        line: usize,
        params: Vec<Param>,
        defaults: Vec<DefaultValue>,
    },
    /// A plain name used as an assignment target.
    NameBinding {
        name: String,
        line: usize,
    },
    /// An attribute access used as an assignment target (`obj.attr = ...`);
    /// `name` is the attribute identifier.
    AttributeBinding {
        name: String,
        line: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A positional parameter of a function definition. Parameters may span
/// multiple lines, so each carries its own line.
pub struct Param {
    pub name: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A positional default value expression, classified by literal shape.
pub struct DefaultValue {
    pub kind: DefaultKind,
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultKind {
    List,
    Dict,
    Set,
    Other,
}

impl DefaultKind {
    /// Whether a default of this shape is a mutable container literal.
    pub fn is_mutable(&self) -> bool {
        matches!(self, DefaultKind::List | DefaultKind::Dict | DefaultKind::Set)
    }
}

/// Parse `source` and lower it into syntax nodes.
///
/// `file` only labels parse errors. A syntactically invalid file yields
/// `Err` with the parser's message; the caller decides how to surface it.
pub fn parse_module(source: &str, file: &str) -> Result<Vec<SyntaxNode>, String> {
    let suite = parser::parse_program(source, file).map_err(|e| e.to_string())?;
    let mut nodes = Vec::new();
    for stmt in &suite {
        lower_stmt(stmt, &mut nodes);
    }
    Ok(nodes)
}

fn lower_stmt(stmt: &ast::Stmt, out: &mut Vec<SyntaxNode>) {
    match &stmt.node {
        StmtKind::FunctionDef { name, args, body, .. }
        | StmtKind::AsyncFunctionDef { name, args, body, .. } => {
            out.push(SyntaxNode::FunctionDef {
                name: name.clone(),
                line: stmt.location.row(),
                params: args
                    .args
                    .iter()
                    .map(|a| Param {
                        name: a.node.arg.clone(),
                        line: a.location.row(),
                    })
                    .collect(),
                defaults: args
                    .defaults
                    .iter()
                    .map(|d| DefaultValue {
                        kind: classify_default(d),
                        line: d.location.row(),
                    })
                    .collect(),
            });
            lower_body(body, out);
        }
        StmtKind::ClassDef { name, body, .. } => {
            out.push(SyntaxNode::ClassDef {
                name: name.clone(),
                line: stmt.location.row(),
            });
            lower_body(body, out);
        }
        StmtKind::Assign { targets, .. } => {
            for target in targets {
                lower_target(target, out);
            }
        }
        StmtKind::AugAssign { target, .. } | StmtKind::AnnAssign { target, .. } => {
            lower_target(target, out);
        }
        StmtKind::For {
            target, body, orelse, ..
        }
        | StmtKind::AsyncFor {
            target, body, orelse, ..
        } => {
            lower_target(target, out);
            lower_body(body, out);
            lower_body(orelse, out);
        }
        StmtKind::While { body, orelse, .. } | StmtKind::If { body, orelse, .. } => {
            lower_body(body, out);
            lower_body(orelse, out);
        }
        StmtKind::With { items, body, .. } | StmtKind::AsyncWith { items, body, .. } => {
            for item in items {
                if let Some(vars) = &item.optional_vars {
                    lower_target(vars, out);
                }
            }
            lower_body(body, out);
        }
        StmtKind::Try {
            body,
            handlers,
            orelse,
            finalbody,
        } => {
            lower_body(body, out);
            for handler in handlers {
                let ast::ExcepthandlerKind::ExceptHandler { body, .. } = &handler.node;
                lower_body(body, out);
            }
            lower_body(orelse, out);
            lower_body(finalbody, out);
        }
        _ => {}
    }
}

fn lower_body(body: &[ast::Stmt], out: &mut Vec<SyntaxNode>) {
    for stmt in body {
        lower_stmt(stmt, out);
    }
}

/// Collect bindings from an assignment-target expression, unpacking nested
/// patterns. Subscript targets bind no identifier and are skipped.
fn lower_target(expr: &ast::Expr, out: &mut Vec<SyntaxNode>) {
    match &expr.node {
        ExprKind::Name { id, .. } => {
            out.push(SyntaxNode::NameBinding {
                name: id.clone(),
                line: expr.location.row(),
            });
        }
        ExprKind::Attribute { attr, .. } => {
            out.push(SyntaxNode::AttributeBinding {
                name: attr.clone(),
                line: expr.location.row(),
            });
        }
        ExprKind::Tuple { elts, .. } | ExprKind::List { elts, .. } => {
            for elt in elts {
                lower_target(elt, out);
            }
        }
        ExprKind::Starred { value, .. } => {
            lower_target(value, out);
        }
        _ => {}
    }
}

fn classify_default(expr: &ast::Expr) -> DefaultKind {
    match &expr.node {
        ExprKind::List { .. } => DefaultKind::List,
        ExprKind::Dict { .. } => DefaultKind::Dict,
        ExprKind::Set { .. } => DefaultKind::Set,
        _ => DefaultKind::Other,
    }
}
