//! Hand-written lexer producing the jon token stream.
//!
//! The lexer is a single-pass, position-tracking scanner. It never backtracks
//! across a token boundary and reports failures as [`Error::Parse`] with a
//! caret excerpt pointing at the offending byte.
//!
//! ## Token shapes
//!
//! - whitespace (space, tab, CR) is skipped; `\n` becomes an [`TokenKind::NL`]
//!   token because newlines act as entry separators;
//! - `//` line comments and nestable `/* */` block comments are skipped;
//! - strings open with `'` or `"`; tripling the quote opens a multi-line
//!   string closed by the same triple;
//! - numbers support `0b`/`0o`/`0x` prefixes with `_` separators, and an
//!   optional sign on plain decimal and float literals;
//! - anything else is scanned as a bare word and matched against the keyword
//!   set (`null`, `true`, `false` and the `nan`/`inf` families); non-keywords
//!   become [`TokenKind::String`] tokens, and a leading `$` produces a
//!   [`TokenKind::Ref`].

use crate::cursor::{Cursor, Span};
use crate::error::Result;
use std::fmt;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Eof,

    /// Newline, significant as an entry separator.
    NL,

    // Punctuation
    Comma,
    Colon,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Null,
    False,
    True,
    NaN,
    PosNaN,
    NegNaN,
    Inf,
    PosInf,
    NegInf,

    // Numbers; the payload holds digits only, without base prefix or `_`
    BinInt,
    HexInt,
    OctoInt,
    DecInt,
    Float,

    /// Quoted string or bare identifier.
    String,

    /// `$`-prefixed reference; the payload is the identifier without `$`.
    Ref,
}

/// A single lexed token: kind, payload (empty for punctuation and keywords)
/// and source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub val: String,
    pub span: Span,
}

impl Token {
    /// Radix for the integer token kinds.
    ///
    /// # Panics
    ///
    /// Panics when called on a non-integer token; that is a bug in the caller.
    #[must_use]
    pub fn int_base(&self) -> u32 {
        match self.kind {
            TokenKind::DecInt => 10,
            TokenKind::HexInt => 16,
            TokenKind::OctoInt => 8,
            TokenKind::BinInt => 2,
            kind => panic!("`Token::int_base` called on {kind:?} token"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "[EOF]"),
            TokenKind::NL => write!(f, "new line"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::LBrace => write!(f, "`{{`"),
            TokenKind::RBrace => write!(f, "`}}`"),
            TokenKind::LBracket => write!(f, "`[`"),
            TokenKind::RBracket => write!(f, "`]`"),
            TokenKind::Null => write!(f, "`null`"),
            TokenKind::False => write!(f, "`false`"),
            TokenKind::True => write!(f, "`true`"),
            TokenKind::NaN => write!(f, "`nan`"),
            TokenKind::PosNaN => write!(f, "`+nan`"),
            TokenKind::NegNaN => write!(f, "`-nan`"),
            TokenKind::Inf => write!(f, "`inf`"),
            TokenKind::PosInf => write!(f, "`+inf`"),
            TokenKind::NegInf => write!(f, "`-inf`"),
            TokenKind::BinInt => write!(f, "number `0b{}`", self.val),
            TokenKind::HexInt => write!(f, "number `0x{}`", self.val),
            TokenKind::OctoInt => write!(f, "number `0o{}`", self.val),
            TokenKind::DecInt | TokenKind::Float => write!(f, "number `{}`", self.val),
            TokenKind::String => write!(f, "string '{}'", self.val.escape_debug()),
            TokenKind::Ref => write!(f, "`${}`", self.val),
        }
    }
}

/// Lexes a full source text into a token stream terminated by a single
/// [`TokenKind::Eof`] token.
pub fn lex(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    cur: Cursor<'a>,
    tokens: Vec<Token>,
    token_pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Lexer {
            cur: Cursor::new(source),
            tokens: Vec::new(),
            token_pos: 0,
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while let Some(b) = self.cur.peek() {
            self.token_pos = self.cur.index();
            self.lex_current(b)?;
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            val: String::new(),
            span: Span {
                pos: self.cur.index(),
                len: 0,
            },
        });

        trace!(tokens = self.tokens.len(), "lexed token stream");
        Ok(self.tokens)
    }

    fn push_punct(&mut self, kind: TokenKind, len: usize) {
        self.cur.bump_by(len);
        self.tokens.push(Token {
            kind,
            val: String::new(),
            span: Span {
                pos: self.token_pos,
                len,
            },
        });
    }

    fn push_payload(&mut self, kind: TokenKind, val: String) {
        let len = val.len();
        self.tokens.push(Token {
            kind,
            val,
            span: Span {
                pos: self.token_pos,
                len,
            },
        });
    }

    fn lex_current(&mut self, b: u8) -> Result<()> {
        match b {
            b'/' => self.lex_comment(),
            b'\'' | b'"' => self.lex_string(b),
            b',' => {
                self.push_punct(TokenKind::Comma, 1);
                Ok(())
            }
            b':' => {
                self.push_punct(TokenKind::Colon, 1);
                Ok(())
            }
            b'{' => {
                self.push_punct(TokenKind::LBrace, 1);
                Ok(())
            }
            b'}' => {
                self.push_punct(TokenKind::RBrace, 1);
                Ok(())
            }
            b'[' => {
                self.push_punct(TokenKind::LBracket, 1);
                Ok(())
            }
            b']' => {
                self.push_punct(TokenKind::RBracket, 1);
                Ok(())
            }
            b'\n' => {
                self.push_punct(TokenKind::NL, 1);
                Ok(())
            }
            b' ' | b'\t' | b'\r' => {
                self.cur.bump();
                Ok(())
            }
            b'$' => {
                self.lex_ref();
                Ok(())
            }
            b'0'..=b'9' => self.lex_number(false),
            b'+' | b'-' if matches!(self.cur.peek_at(1), Some(b'0'..=b'9')) => {
                self.lex_number(true)
            }
            _ => {
                self.lex_word();
                Ok(())
            }
        }
    }

    fn lex_comment(&mut self) -> Result<()> {
        match self.cur.peek_at(1) {
            Some(b'*') => {
                self.cur.bump_by(2);
                let mut depth = 1usize;
                while depth > 0 {
                    if self.cur.starts_with("/*") {
                        depth += 1;
                        self.cur.bump_by(2);
                    } else if self.cur.starts_with("*/") {
                        depth -= 1;
                        self.cur.bump_by(2);
                    } else if self.cur.eof() {
                        return Err(self.cur.error("expected `*/`"));
                    } else {
                        self.cur.bump();
                    }
                }
                Ok(())
            }
            Some(b'/') => {
                while let Some(b) = self.cur.peek() {
                    if b == b'\n' {
                        break;
                    }
                    self.cur.bump();
                }
                Ok(())
            }
            _ => Err(self.cur.error("expected `//` or `/*` to start a comment")),
        }
    }

    /// Scans a bare word up to the next structural character, right-trims it
    /// and matches it against the keyword set.
    fn lex_word(&mut self) {
        let start = self.cur.index();
        while let Some(b) = self.cur.peek() {
            if is_word_end(b) {
                break;
            }
            self.cur.bump();
        }
        let word = self.cur.slice(start, self.cur.index()).trim_end();

        let kind = match word {
            "null" => TokenKind::Null,
            "false" => TokenKind::False,
            "true" => TokenKind::True,
            "nan" => TokenKind::NaN,
            "+nan" => TokenKind::PosNaN,
            "-nan" => TokenKind::NegNaN,
            "inf" => TokenKind::Inf,
            "+inf" => TokenKind::PosInf,
            "-inf" => TokenKind::NegInf,
            _ => {
                self.push_payload(TokenKind::String, word.to_string());
                return;
            }
        };

        self.tokens.push(Token {
            kind,
            val: String::new(),
            span: Span {
                pos: self.token_pos,
                len: word.len(),
            },
        });
    }

    fn lex_ref(&mut self) {
        self.cur.bump(); // `$`
        let start = self.cur.index();
        while let Some(b) = self.cur.peek() {
            if is_word_end(b) {
                break;
            }
            self.cur.bump();
        }
        let name = self.cur.slice(start, self.cur.index()).trim_end();
        self.push_payload(TokenKind::Ref, name.to_string());
    }

    fn lex_number(&mut self, signed: bool) -> Result<()> {
        let mut val = String::new();
        if signed {
            if let Some(sign) = self.cur.peek() {
                val.push(sign as char);
                self.cur.bump();
            }
        }

        if self.cur.peek() == Some(b'0') {
            let kind = match self.cur.peek_at(1) {
                Some(b'b' | b'B') => Some(TokenKind::BinInt),
                Some(b'o' | b'O') => Some(TokenKind::OctoInt),
                Some(b'x' | b'X') => Some(TokenKind::HexInt),
                _ => None,
            };
            if let Some(kind) = kind {
                if signed {
                    return Err(self
                        .cur
                        .error("sign is not allowed on base-prefixed literals"));
                }
                self.cur.bump_by(2);
                let digits = self.lex_base_digits(kind)?;
                self.push_payload(kind, digits);
                return Ok(());
            }
        }

        let mut kind = TokenKind::DecInt;
        self.lex_dec_digits(&mut val);

        if self.cur.peek() == Some(b'.') {
            val.push('.');
            self.cur.bump();
            if !matches!(self.cur.peek(), Some(b'0'..=b'9')) {
                return Err(self.cur.error("expected fractional part of number"));
            }
            self.lex_dec_digits(&mut val);
            kind = TokenKind::Float;
        }

        self.push_payload(kind, val);
        Ok(())
    }

    fn lex_dec_digits(&mut self, val: &mut String) {
        loop {
            if self.cur.peek() == Some(b'_') {
                self.cur.bump();
            }
            match self.cur.peek() {
                Some(b @ b'0'..=b'9') => {
                    val.push(b as char);
                    self.cur.bump();
                }
                _ => break,
            }
        }
    }

    fn lex_base_digits(&mut self, kind: TokenKind) -> Result<String> {
        let (desc, accepts): (&str, fn(u8) -> bool) = match kind {
            TokenKind::BinInt => ("binary digit", |b| matches!(b, b'0' | b'1')),
            TokenKind::OctoInt => ("octal digit", |b| matches!(b, b'0'..=b'7')),
            _ => ("hexadecimal digit", |b: u8| b.is_ascii_hexdigit()),
        };

        match self.cur.peek() {
            Some(b) if accepts(b) => {}
            _ => return Err(self.cur.error(&format!("expected {desc}"))),
        }

        let mut val = String::new();
        loop {
            if self.cur.peek() == Some(b'_') {
                self.cur.bump();
            }
            match self.cur.peek() {
                Some(b) if accepts(b) => {
                    val.push(b as char);
                    self.cur.bump();
                }
                _ => break,
            }
        }
        Ok(val)
    }

    fn lex_string(&mut self, quote: u8) -> Result<()> {
        if self.cur.peek_at(1) == Some(quote) && self.cur.peek_at(2) == Some(quote) {
            self.lex_multiline_string(quote)
        } else {
            self.lex_line_string(quote)
        }
    }

    fn lex_line_string(&mut self, quote: u8) -> Result<()> {
        self.cur.bump();
        let mut val = String::new();
        let mut seg = self.cur.index();
        loop {
            match self.cur.peek() {
                None => {
                    return Err(self
                        .cur
                        .error(&format!("expected closing `{}`", quote as char)))
                }
                Some(b'\n') => {
                    return Err(self
                        .cur
                        .error("new line is not allowed inside a single-line string"))
                }
                Some(b'\\') => {
                    val.push_str(self.cur.slice(seg, self.cur.index()));
                    self.lex_escape(&mut val)?;
                    seg = self.cur.index();
                }
                Some(b) if b == quote => break,
                Some(_) => self.cur.bump(),
            }
        }
        val.push_str(self.cur.slice(seg, self.cur.index()));
        self.cur.bump(); // closing quote
        self.push_payload(TokenKind::String, val);
        Ok(())
    }

    fn lex_multiline_string(&mut self, quote: u8) -> Result<()> {
        self.cur.bump_by(3);
        let q = quote as char;
        let mut val = String::new();
        let mut seg = self.cur.index();
        loop {
            if self.cur.eof() {
                return Err(self.cur.error(&format!("expected closing `{q}{q}{q}`")));
            }
            if self.cur.peek() == Some(quote)
                && self.cur.peek_at(1) == Some(quote)
                && self.cur.peek_at(2) == Some(quote)
            {
                break;
            }
            if self.cur.peek() == Some(b'\\') {
                val.push_str(self.cur.slice(seg, self.cur.index()));
                self.lex_escape(&mut val)?;
                seg = self.cur.index();
            } else {
                self.cur.bump();
            }
        }
        val.push_str(self.cur.slice(seg, self.cur.index()));
        self.cur.bump_by(3);
        self.push_payload(TokenKind::String, val);
        Ok(())
    }

    /// Decodes one escape sequence; the cursor sits on the backslash.
    /// Unrecognised escapes take the following character verbatim.
    fn lex_escape(&mut self, val: &mut String) -> Result<()> {
        self.cur.bump(); // backslash
        let Some(b) = self.cur.peek() else {
            return Err(self.cur.error("unterminated escape sequence"));
        };
        match b {
            b'\'' | b'"' | b'\\' => {
                val.push(b as char);
                self.cur.bump();
            }
            b'n' => {
                val.push('\n');
                self.cur.bump();
            }
            b'r' => {
                val.push('\r');
                self.cur.bump();
            }
            b't' => {
                val.push('\t');
                self.cur.bump();
            }
            b'b' => {
                val.push('\u{0008}');
                self.cur.bump();
            }
            b'f' => {
                val.push('\u{000C}');
                self.cur.bump();
            }
            b'v' => {
                val.push('\u{000B}');
                self.cur.bump();
            }
            b'0'..=b'7' => {
                // \NNN: exactly three octal digits, a byte value
                let mut code = 0u32;
                for _ in 0..3 {
                    match self.cur.peek() {
                        Some(d @ b'0'..=b'7') => {
                            code = code * 8 + u32::from(d - b'0');
                            self.cur.bump();
                        }
                        _ => {
                            return Err(self
                                .cur
                                .error("expected three octal digits in escape sequence"))
                        }
                    }
                }
                if code > 0xFF {
                    return Err(self.cur.error("octal escape exceeds a byte value"));
                }
                val.push(char::from(code as u8));
            }
            b'x' => {
                self.cur.bump();
                let code = self.lex_hex_digits(2)?;
                val.push(char::from(code as u8));
            }
            b'u' => {
                self.cur.bump();
                let code = self.lex_hex_digits(4)?;
                val.push(self.unicode_char(code)?);
            }
            b'U' => {
                self.cur.bump();
                let code = self.lex_hex_digits(8)?;
                val.push(self.unicode_char(code)?);
            }
            _ => {
                if let Some(ch) = self.cur.rest().chars().next() {
                    val.push(ch);
                    self.cur.bump_by(ch.len_utf8());
                }
            }
        }
        Ok(())
    }

    fn lex_hex_digits(&mut self, count: usize) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..count {
            match self.cur.peek().and_then(hex_value) {
                Some(v) => {
                    code = code * 16 + v;
                    self.cur.bump();
                }
                None => {
                    return Err(self
                        .cur
                        .error(&format!("expected {count} hexadecimal digits in escape")))
                }
            }
        }
        Ok(code)
    }

    fn unicode_char(&self, code: u32) -> Result<char> {
        char::from_u32(code).ok_or_else(|| self.cur.error("invalid unicode code point"))
    }
}

/// Bytes that terminate a bare word, a reference name or a numeric literal.
fn is_word_end(b: u8) -> bool {
    matches!(
        b,
        b',' | b':' | b'{' | b'}' | b'[' | b']' | b'\'' | b'"' | b'\n'
    )
}

fn hex_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'a'..=b'f' => Some(u32::from(b - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(b - b'A') + 10),
        _ => None,
    }
}
