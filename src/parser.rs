//! Recursive descent parser over the token stream.
//!
//! The parser recognises three root forms: an array, a braced object, and a
//! *bare object* — `key: value` entries without enclosing braces, selected
//! when the first meaningful token is a valid key immediately followed by a
//! colon. One separator rule applies everywhere lists appear: any number of
//! newlines and/or a single comma, trailing separators allowed before the
//! closing bracket.

use crate::ast::Ast;
use crate::cursor::diagnose;
use crate::error::{Error, Result};
use crate::lexer::{lex, Token, TokenKind};
use tracing::debug;

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    index: usize,
}

impl<'a> Parser<'a> {
    /// Lexes and parses a full document into an [`Ast`].
    ///
    /// A document is a single root value; anything but trailing newlines
    /// after it is a parse error, so a bare-object document cannot also
    /// carry stray braces.
    pub fn parse(source: &'a str) -> Result<Ast> {
        let tokens = lex(source)?;
        let mut parser = Parser {
            source,
            tokens,
            index: 0,
        };

        parser.skip_nls();
        let root = parser.parse_root()?;
        parser.skip_nls();
        if !parser.eof() {
            return Err(parser.expected_error("end of input"));
        }
        Ok(root)
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.index]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.index].clone();
        if token.kind != TokenKind::Eof {
            self.index += 1;
        }
        token
    }

    fn eof(&self) -> bool {
        self.is(TokenKind::Eof)
    }

    fn is(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn lookup_is(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.index + 1)
            .is_some_and(|t| t.kind == kind)
    }

    fn is_key(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Null
                | TokenKind::False
                | TokenKind::True
                | TokenKind::NaN
                | TokenKind::PosNaN
                | TokenKind::NegNaN
                | TokenKind::Inf
                | TokenKind::PosInf
                | TokenKind::NegInf
                | TokenKind::BinInt
                | TokenKind::HexInt
                | TokenKind::OctoInt
                | TokenKind::DecInt
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Ref
        )
    }

    fn skip_nls(&mut self) -> bool {
        let mut skipped = false;
        while self.is(TokenKind::NL) {
            self.index += 1;
            skipped = true;
        }
        skipped
    }

    fn skip(&mut self, kind: TokenKind, expected: &str, right_nls: bool) -> Result<Token> {
        if self.is(kind) {
            let token = self.advance();
            if right_nls {
                self.skip_nls();
            }
            Ok(token)
        } else {
            Err(self.expected_error(expected))
        }
    }

    fn skip_opt(&mut self, kind: TokenKind, right_nls: bool) -> bool {
        if self.is(kind) {
            self.advance();
            if right_nls {
                self.skip_nls();
            }
            true
        } else {
            false
        }
    }

    /// A separator is any number of newlines and/or a single comma, itself
    /// optionally surrounded by newlines.
    fn skip_opt_sep(&mut self) -> bool {
        let nl = self.skip_nls();
        let comma = self.skip_opt(TokenKind::Comma, true);
        nl || comma
    }

    fn skip_sep(&mut self) -> Result<()> {
        if self.skip_opt_sep() {
            Ok(())
        } else {
            Err(self.expected_error("delimiter: `,` or new line"))
        }
    }

    fn parse_root(&mut self) -> Result<Ast> {
        // an empty document is an empty bare object
        if self.eof() {
            return Ok(Ast::Object(Vec::new()));
        }
        if self.is_key() && self.lookup_is(TokenKind::Colon) {
            debug!("parsing bare object root");
            return self.parse_object(true);
        }
        self.parse_value()
    }

    fn parse_value(&mut self) -> Result<Ast> {
        match self.peek().kind {
            TokenKind::LBrace => self.parse_object(false),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::Null => {
                self.advance();
                Ok(Ast::Null)
            }
            TokenKind::True | TokenKind::False => {
                let token = self.advance();
                Ok(Ast::Bool(token.kind == TokenKind::True))
            }
            TokenKind::NaN | TokenKind::PosNaN | TokenKind::NegNaN => {
                self.advance();
                Ok(Ast::Float(f64::NAN))
            }
            TokenKind::Inf | TokenKind::PosInf => {
                self.advance();
                Ok(Ast::Float(f64::INFINITY))
            }
            TokenKind::NegInf => {
                self.advance();
                Ok(Ast::Float(f64::NEG_INFINITY))
            }
            TokenKind::BinInt | TokenKind::OctoInt | TokenKind::HexInt | TokenKind::DecInt => {
                self.parse_int()
            }
            TokenKind::Float => self.parse_float(),
            TokenKind::String => Ok(Ast::String(self.advance().val)),
            TokenKind::Ref => Ok(Ast::Ref(self.advance().val)),
            _ => Err(self.expected_error("value")),
        }
    }

    fn parse_int(&mut self) -> Result<Ast> {
        let token = self.advance();
        match i64::from_str_radix(&token.val, token.int_base()) {
            Ok(value) => Ok(Ast::Int(value)),
            Err(_) => Err(self.error_at(&token, "integer literal out of range")),
        }
    }

    fn parse_float(&mut self) -> Result<Ast> {
        let token = self.advance();
        match token.val.parse::<f64>() {
            Ok(value) => Ok(Ast::Float(value)),
            Err(_) => Err(self.error_at(&token, "malformed float literal")),
        }
    }

    /// Any scalar-looking token may be a key: keywords keep their textual
    /// spelling, numbers their lexeme, refs gain a `$` prefix.
    fn parse_key(&mut self) -> Result<String> {
        let key = match self.peek().kind {
            TokenKind::String => self.advance().val,
            TokenKind::Null => {
                self.advance();
                "null".to_string()
            }
            TokenKind::False => {
                self.advance();
                "false".to_string()
            }
            TokenKind::True => {
                self.advance();
                "true".to_string()
            }
            TokenKind::NaN => {
                self.advance();
                "nan".to_string()
            }
            TokenKind::PosNaN => {
                self.advance();
                "+nan".to_string()
            }
            TokenKind::NegNaN => {
                self.advance();
                "-nan".to_string()
            }
            TokenKind::Inf => {
                self.advance();
                "inf".to_string()
            }
            TokenKind::PosInf => {
                self.advance();
                "+inf".to_string()
            }
            TokenKind::NegInf => {
                self.advance();
                "-inf".to_string()
            }
            TokenKind::BinInt
            | TokenKind::HexInt
            | TokenKind::OctoInt
            | TokenKind::DecInt
            | TokenKind::Float => self.advance().val,
            TokenKind::Ref => format!("${}", self.advance().val),
            _ => return Err(self.expected_error("key")),
        };
        Ok(key)
    }

    /// Parses a braced object, or the braceless entry list of a bare root
    /// when `bare` is set.
    fn parse_object(&mut self, bare: bool) -> Result<Ast> {
        if !bare {
            self.skip(TokenKind::LBrace, "`{`", true)?;
        }

        let mut entries = Vec::new();
        let mut first = true;
        while !self.eof() {
            if self.is(TokenKind::RBrace) {
                break;
            }

            if first {
                first = false;
            } else {
                self.skip_sep()?;
            }

            if self.is(TokenKind::RBrace) || self.eof() {
                break;
            }

            let key = self.parse_key()?;
            self.skip_nls();
            self.skip(TokenKind::Colon, "`:` delimiter", true)?;
            let val = self.parse_value()?;
            entries.push((key, val));
        }

        if !bare {
            self.skip(TokenKind::RBrace, "closing `}`", false)?;
        }

        Ok(Ast::Object(entries))
    }

    fn parse_array(&mut self) -> Result<Ast> {
        self.skip(TokenKind::LBracket, "`[`", true)?;

        let mut values = Vec::new();
        let mut first = true;
        while !self.eof() {
            if self.is(TokenKind::RBracket) {
                break;
            }

            if first {
                first = false;
            } else {
                self.skip_sep()?;
            }

            if self.is(TokenKind::RBracket) || self.eof() {
                break;
            }

            values.push(self.parse_value()?);
        }

        self.skip(TokenKind::RBracket, "closing `]`", false)?;

        Ok(Ast::Array(values))
    }

    fn expected_error(&self, expected: &str) -> Error {
        let token = self.peek();
        diagnose(
            self.source,
            token.span.pos,
            &format!("expected {expected}, got {token}"),
        )
    }

    fn error_at(&self, token: &Token, msg: &str) -> Error {
        diagnose(self.source, token.span.pos, msg)
    }
}
