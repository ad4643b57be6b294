//! Comment stripping and whitespace collapsing.
//!
//! A single forward scan turns raw DDL into one buffer where comments are gone
//! and every run of space, tab, CR or LF outside a literal is a single space.
//! Single-quoted literals and quoted identifiers pass through untouched.

use crate::error::DdlError;
use crate::model::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    LineComment,
    BlockComment,
    Literal,
    QuotedIdentifier,
}

#[inline]
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[inline]
fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '#')
}

/// Strip comments and collapse whitespace.
///
/// `--` and `/* */` comments are recognised everywhere; MySQL additionally
/// treats `#` as a line comment. A block comment sitting between two token
/// characters (`CR/*x*/EATE`) is rejected.
pub fn normalize(input: &str, dialect: Dialect) -> Result<String, DdlError> {
    let quote = dialect.quote_char();
    let mut out = String::with_capacity(input.len());
    let mut mode = Mode::Code;
    let mut escape_next = false;
    // Last emitted character when a block comment opened; checked when it closes.
    let mut before_comment: Option<char> = None;
    let mut just_closed = false;

    let mut chars = input.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        match mode {
            Mode::Code => {
                let fused_before = std::mem::take(&mut just_closed);
                if escape_next {
                    escape_next = false;
                    out.push(c);
                    continue;
                }
                let next = chars.peek().map(|&(_, n)| n);
                match c {
                    '-' if next == Some('-') => {
                        chars.next();
                        mode = Mode::LineComment;
                    }
                    '#' if dialect == Dialect::Mysql => {
                        mode = Mode::LineComment;
                    }
                    '/' if next == Some('*') => {
                        chars.next();
                        before_comment = out.chars().last();
                        mode = Mode::BlockComment;
                    }
                    c if is_space(c) => push_space(&mut out),
                    c => {
                        if fused_before
                            && is_token_char(c)
                            && before_comment.is_some_and(is_token_char)
                        {
                            return Err(DdlError::CommentFusesTokens { offset });
                        }
                        if c == '\\' {
                            escape_next = true;
                        } else if c == '\'' {
                            mode = Mode::Literal;
                        } else if c == quote {
                            mode = Mode::QuotedIdentifier;
                        }
                        out.push(c);
                    }
                }
            }
            Mode::LineComment => {
                if c == '\n' {
                    mode = Mode::Code;
                    push_space(&mut out);
                }
            }
            Mode::BlockComment => {
                if c == '*' && chars.peek().map(|&(_, n)| n) == Some('/') {
                    chars.next();
                    mode = Mode::Code;
                    just_closed = true;
                }
            }
            Mode::Literal => {
                out.push(c);
                if escape_next {
                    escape_next = false;
                } else if c == '\\' {
                    escape_next = true;
                } else if c == '\'' {
                    if chars.peek().map(|&(_, n)| n) == Some('\'') {
                        if let Some((_, doubled)) = chars.next() {
                            out.push(doubled);
                        }
                    } else {
                        mode = Mode::Code;
                    }
                }
            }
            Mode::QuotedIdentifier => {
                out.push(c);
                if c == quote {
                    mode = Mode::Code;
                }
            }
        }
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    Ok(out)
}

/// Append a single separating space unless one is already there or nothing was emitted.
fn push_space(out: &mut String) {
    if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
}
