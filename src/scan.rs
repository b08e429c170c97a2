//! Per-line boundary scanner: string-literal spans and trailing comments.
//!
//! Classifies each character position of a single line as code, inside a
//! string literal, or part of a trailing `#` comment. Several lexical checks
//! consume this to avoid flagging characters that only look like code (a `;`
//! inside a string, a `#` inside a string).
//!
//! The scan is stateless across lines: multi-line string literals are not
//! tracked. This mirrors the line-at-a-time model of the lexical checks and
//! is a stated limitation, not an oversight.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// String-span heads/tails and an optional comment offset for one line.
///
/// All positions are character indices (not bytes). `heads` and `tails` pair
/// up positionally; a final unpaired head marks an unterminated string that
/// runs to the end of the line.
pub struct LineBoundaries {
    pub heads: Vec<usize>,
    pub tails: Vec<usize>,
    pub comment: Option<usize>,
}

impl LineBoundaries {
    /// Whether `pos` falls strictly inside a string literal.
    ///
    /// Positions past an unmatched head count as inside: once a quote is left
    /// open, nothing later on the line can be treated as code.
    pub fn in_string(&self, pos: usize) -> bool {
        for (h, t) in self.heads.iter().zip(self.tails.iter()) {
            if *h < pos && pos < *t {
                return true;
            }
        }
        if self.heads.len() > self.tails.len() {
            if let Some(h) = self.heads.last() {
                return pos > *h;
            }
        }
        false
    }

    /// Whether `pos` is plain code: outside every string span and before any
    /// comment marker.
    pub fn is_code(&self, pos: usize) -> bool {
        !self.in_string(pos) && self.comment.map_or(true, |c| pos < c)
    }
}

/// Scan one line left to right and classify its boundaries.
///
/// A `'` or `"` outside a string opens a span; the same quote closes it
/// unless immediately preceded by an unescaped backslash (an even run of
/// backslashes escapes itself, not the quote). A `#` outside a string records
/// the comment offset and terminates the scan: anything after a comment
/// marker is never code, including further quotes.
pub fn scan_line(line: &str) -> LineBoundaries {
    let mut bounds = LineBoundaries::default();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, ch) in line.chars().enumerate() {
        match quote {
            None => match ch {
                '#' => {
                    bounds.comment = Some(i);
                    return bounds;
                }
                '\'' | '"' => {
                    quote = Some(ch);
                    bounds.heads.push(i);
                }
                _ => {}
            },
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == q {
                    quote = None;
                    bounds.tails.push(i);
                }
            }
        }
    }
    bounds
}
