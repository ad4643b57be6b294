//! Position cursor over a normalized DDL buffer.
//!
//! The statement grammar is small enough to scan by hand: a [`Cursor`] walks
//! a window of the normalized text, reading whitespace-delimited words while
//! treating single-quoted literals and dialect-quoted identifiers as opaque,
//! and balancing parentheses when asked for a group.
//!
//! ```ignore
//! let mut cursor = Cursor::new("CREATE TABLE t (a INT)", Dialect::Mysql);
//! cursor.expect_word("CREATE")?;
//! cursor.expect_word("TABLE")?;
//! let name = cursor.require_word("table name")?;
//! let body = cursor.parenthesized()?;
//! ```

use crate::error::DdlError;
use crate::model::Dialect;

/// Characters that end a word in addition to whitespace.
const WORD_STOPS: &[u8] = b",();";

/// Cursor over `src[start..end]`; all offsets are absolute positions in `src`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    end: usize,
    quote: u8,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str, dialect: Dialect) -> Self {
        Self::bounded(src, dialect, 0, src.len())
    }

    pub fn bounded(src: &'a str, dialect: Dialect, start: usize, end: usize) -> Self {
        let end = end.min(src.len());
        Self {
            src,
            pos: start.min(end),
            end,
            quote: dialect.quote_char() as u8,
        }
    }

    /// A cursor over `start..end` of the same buffer.
    pub fn window(&self, start: usize, end: usize) -> Cursor<'a> {
        Cursor {
            src: self.src,
            pos: start,
            end,
            quote: self.quote,
        }
    }

    // ========================================================================
    // Position and state
    // ========================================================================

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.end);
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Raw end check; does not skip whitespace.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Skip whitespace, then report whether nothing remains.
    pub fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.is_at_end()
    }

    /// Text from the current position to the end of the window.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..self.end]
    }

    /// The whole buffer, for helpers that take absolute offsets.
    pub fn source(&self) -> &'a str {
        self.src
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    // ========================================================================
    // Character access
    // ========================================================================

    #[inline]
    pub fn peek_byte(&self) -> Option<u8> {
        if self.is_at_end() {
            None
        } else {
            Some(self.bytes()[self.pos])
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek_byte() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Whether the next non-space character is `b`.
    pub fn check_byte(&mut self, b: u8) -> bool {
        self.skip_whitespace();
        self.peek_byte() == Some(b)
    }

    /// Consume `b` if it is the next non-space character.
    pub fn eat_byte(&mut self, b: u8) -> bool {
        if self.check_byte(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Words
    // ========================================================================

    /// End of the word starting at `from`, honouring quotes.
    fn word_end(&self, from: usize, extra_stops: &[u8]) -> usize {
        let bytes = self.bytes();
        let mut i = from;
        while i < self.end {
            let b = bytes[i];
            if b == b'\'' || b == self.quote {
                i = skip_quoted(bytes, i, self.end, b);
                continue;
            }
            if b.is_ascii_whitespace() || WORD_STOPS.contains(&b) || extra_stops.contains(&b) {
                break;
            }
            i += 1;
        }
        i
    }

    /// Next word without consuming it.
    pub fn peek_word(&self) -> Option<&'a str> {
        let mut probe = self.clone();
        probe.next_word()
    }

    /// Read the next word, stopping at whitespace, `,`, `(`, `)` or `;`.
    ///
    /// Returns `None` at the end of the window or when the next character is
    /// itself a stop character.
    pub fn next_word(&mut self) -> Option<&'a str> {
        self.next_word_until(&[])
    }

    /// Like [`next_word`](Self::next_word) with additional stop characters.
    pub fn next_word_until(&mut self, extra_stops: &[u8]) -> Option<&'a str> {
        self.skip_whitespace();
        let start = self.pos;
        let end = self.word_end(start, extra_stops);
        if end == start {
            return None;
        }
        self.pos = end;
        Some(&self.src[start..end])
    }

    /// Whether the next word equals `word`, ignoring ASCII case.
    pub fn check_word_ci(&self, word: &str) -> bool {
        self.peek_word().is_some_and(|w| w.eq_ignore_ascii_case(word))
    }

    /// Consume the next word if it equals `word`, ignoring ASCII case.
    pub fn eat_word_ci(&mut self, word: &str) -> bool {
        if self.check_word_ci(word) {
            self.next_word();
            true
        } else {
            false
        }
    }

    /// Consume the keyword `expected` or fail with the token actually found.
    pub fn expect_word(&mut self, expected: &str) -> Result<&'a str, DdlError> {
        self.skip_whitespace();
        let offset = self.pos;
        match self.next_word() {
            Some(w) if w.eq_ignore_ascii_case(expected) => Ok(w),
            Some(w) => Err(DdlError::syntax(expected, w, offset)),
            None => Err(self.error_here(expected)),
        }
    }

    /// Read any word, failing if none is left.
    pub fn require_word(&mut self, expected: &str) -> Result<&'a str, DdlError> {
        self.require_word_until(expected, &[])
    }

    pub fn require_word_until(
        &mut self,
        expected: &str,
        extra_stops: &[u8],
    ) -> Result<&'a str, DdlError> {
        match self.next_word_until(extra_stops) {
            Some(w) => Ok(w),
            None => Err(self.error_here(expected)),
        }
    }

    /// Error describing what sits at the current position.
    pub fn error_here(&mut self, expected: &str) -> DdlError {
        self.skip_whitespace();
        match self.peek_byte() {
            None => DdlError::unexpected_end(expected, self.pos),
            Some(b) => {
                let end = self.word_end(self.pos, &[]).max(self.pos + 1);
                let actual = if WORD_STOPS.contains(&b) {
                    (b as char).to_string()
                } else {
                    self.src[self.pos..end].to_string()
                };
                DdlError::syntax(expected, actual, self.pos)
            }
        }
    }

    // ========================================================================
    // Groups and statements
    // ========================================================================

    /// Consume a balanced `( ... )` group and return its contents.
    pub fn parenthesized(&mut self) -> Result<&'a str, DdlError> {
        let (start, end) = self.parenthesized_span()?;
        Ok(&self.src[start..end])
    }

    /// Like [`parenthesized`](Self::parenthesized), returning the absolute
    /// range of the contents.
    pub fn parenthesized_span(&mut self) -> Result<(usize, usize), DdlError> {
        if !self.check_byte(b'(') {
            return Err(self.error_here("("));
        }
        let open = self.pos;
        let bytes = self.bytes();
        let mut depth = 0usize;
        let mut i = open;
        while i < self.end {
            match bytes[i] {
                b'\'' => {
                    i = skip_quoted(bytes, i, self.end, b'\'');
                    continue;
                }
                b if b == self.quote => {
                    i = skip_quoted(bytes, i, self.end, b);
                    continue;
                }
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos = i + 1;
                        return Ok((open + 1, i));
                    }
                }
                _ => {}
            }
            i += 1;
        }
        Err(DdlError::unexpected_end(")", self.end))
    }

    /// Skip a balanced group if one starts here.
    pub fn skip_parenthesized(&mut self) -> Result<(), DdlError> {
        if self.check_byte(b'(') {
            self.parenthesized_span()?;
        }
        Ok(())
    }

    /// Absolute offset of the next `;` outside literals, or the window end.
    pub fn find_terminator(&self) -> usize {
        let bytes = self.bytes();
        let mut i = self.pos;
        while i < self.end {
            let b = bytes[i];
            if b == b'\'' || b == self.quote {
                i = skip_quoted(bytes, i, self.end, b);
                continue;
            }
            if b == b';' {
                return i;
            }
            i += 1;
        }
        self.end
    }

    /// Skip past the current statement and its terminator, returning the skipped text.
    pub fn skip_statement(&mut self) -> &'a str {
        let start = self.pos;
        let terminator = self.find_terminator();
        self.pos = (terminator + 1).min(self.end);
        self.src[start..terminator].trim()
    }

    /// Consume a `;` if it is next.
    pub fn eat_terminator(&mut self) -> bool {
        self.eat_byte(b';')
    }
}

/// Index just past the quoted run opening at `start`.
///
/// Doubled quotes stay inside the run; a backslash escapes the next character
/// in single-quoted literals. An unterminated run extends to `end`.
pub(crate) fn skip_quoted(bytes: &[u8], start: usize, end: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < end {
        let b = bytes[i];
        if quote == b'\'' && b == b'\\' {
            i += 2;
            continue;
        }
        if b == quote {
            if i + 1 < end && bytes[i + 1] == quote {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    end
}

/// Split `src[start..end]` on `separator` at parenthesis depth zero,
/// outside literals and quoted identifiers. Ranges are absolute and
/// untrimmed; empty input yields no ranges.
pub(crate) fn split_top_level(
    src: &str,
    start: usize,
    end: usize,
    separator: u8,
    dialect: Dialect,
) -> Vec<(usize, usize)> {
    let bytes = src.as_bytes();
    let quote = dialect.quote_char() as u8;
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut part_start = start;
    let mut i = start;
    while i < end {
        let b = bytes[i];
        if b == b'\'' || b == quote {
            i = skip_quoted(bytes, i, end, b);
            continue;
        }
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b if b == separator && depth == 0 => {
                parts.push((part_start, i));
                part_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if !src[part_start..end].trim().is_empty() || !parts.is_empty() {
        parts.push((part_start, end));
    }
    parts
}
