//! Source cursor and caret diagnostics.
//!
//! The [`Cursor`] owns a byte-indexed view of the input text and keeps the
//! line number, the byte column and the start of the current line up to date
//! as the lexer advances. Both the lexer and the parser render errors through
//! the same caret formatter: the offending line followed by a pointer line,
//! with the message placed left of the caret when it fits and right of it
//! otherwise.

use crate::error::Error;

/// Byte range of a token in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the token start.
    pub pos: usize,
    /// Byte length. Payload tokens record the payload length, punctuation the
    /// number of bytes advanced.
    pub len: usize,
}

pub(crate) struct Cursor<'a> {
    src: &'a str,
    index: usize,
    line: usize,
    col: usize,
    line_start: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Cursor {
            src,
            index: 0,
            line: 1,
            col: 0,
            line_start: 0,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn eof(&self) -> bool {
        self.index >= self.src.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.index).copied()
    }

    pub(crate) fn peek_at(&self, dist: usize) -> Option<u8> {
        self.src.as_bytes().get(self.index + dist).copied()
    }

    pub(crate) fn starts_with(&self, pat: &str) -> bool {
        self.src[self.index..].starts_with(pat)
    }

    /// Remaining unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.index..]
    }

    pub(crate) fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.src[from..to]
    }

    /// Advances one byte, keeping line/column bookkeeping consistent.
    pub(crate) fn bump(&mut self) {
        if let Some(b) = self.peek() {
            self.index += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 0;
                self.line_start = self.index;
            } else {
                self.col += 1;
            }
        }
    }

    pub(crate) fn bump_by(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Renders a caret diagnostic at the current position.
    pub(crate) fn error(&self, msg: &str) -> Error {
        let line_end = self.src[self.index..]
            .find('\n')
            .map_or(self.src.len(), |i| self.index + i);
        let text = &self.src[self.line_start..line_end];
        Error::parse(
            self.line,
            self.col,
            format!("{text}\n{}", caret_line(self.col, msg)),
        )
    }
}

/// Renders a caret diagnostic at an arbitrary byte position. Used by the
/// parser, which works from token spans rather than a live cursor.
pub(crate) fn diagnose(src: &str, pos: usize, msg: &str) -> Error {
    let pos = pos.min(src.len());
    let line_start = src[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = src[..pos].bytes().filter(|&b| b == b'\n').count() + 1;
    let line_end = src[pos..].find('\n').map_or(src.len(), |i| pos + i);
    let col = pos - line_start;
    let text = &src[line_start..line_end];
    Error::parse(line, col, format!("{text}\n{}", caret_line(col, msg)))
}

fn caret_line(col: usize, msg: &str) -> String {
    if msg.len() + 2 < col {
        format!("{}{msg} ^", " ".repeat(col - msg.len() - 1))
    } else {
        format!("{}^ {msg}", " ".repeat(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_tracks_lines_and_columns() {
        let mut cur = Cursor::new("ab\ncd");
        assert_eq!(cur.peek(), Some(b'a'));
        cur.bump_by(2);
        assert_eq!((cur.line, cur.col), (1, 2));
        cur.bump();
        assert_eq!((cur.line, cur.col), (2, 0));
        assert_eq!(cur.line_start, 3);
        cur.bump_by(2);
        assert!(cur.eof());
    }

    #[test]
    fn caret_goes_right_of_short_columns() {
        let err = diagnose("abc", 1, "expected value");
        let rendered = err.to_string();
        assert!(rendered.contains("abc"));
        assert!(rendered.contains(" ^ expected value"));
    }

    #[test]
    fn message_moves_left_when_it_fits() {
        let src = "                        x";
        let err = diagnose(src, 24, "oops");
        assert!(err.to_string().contains("oops ^"));
    }

    #[test]
    fn diagnose_reports_line_numbers() {
        let err = diagnose("a: 1\nb: ?", 8, "bad");
        match err {
            Error::Parse { line, col, .. } => {
                assert_eq!(line, 2);
                assert_eq!(col, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
