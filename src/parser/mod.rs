// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Recursive-descent parser with a Pratt expression core (spec.md §4).
//! Productions are split across submodules by the part of the grammar they
//! cover; all of them extend the single [`Parser`] type defined here.

mod ddl;
mod dml;
mod expr;
mod query;
mod statement;

use std::cell::Cell;
use std::rc::Rc;

use crate::ast::*;
use crate::dialect::Dialect;
use crate::error::{ParserError, TokenizerError};
use crate::span::Location;
use crate::tokenizer::{Token, TokenWithSpan, Tokenizer, TokenizerOptions};

pub(crate) use expr::{
    AND_PREC, BETWEEN_PREC, CARET_PREC, CARET_PREC_R, COLLATE_PREC, MUL_PREC, NOT_PREC, OR_PREC,
    PLUS_PREC, UNARY_PREC,
};

/// Parser-wide knobs (spec.md §4.F): how deep expressions/subqueries may
/// nest, whether a trailing comma is tolerated in lists even when the
/// dialect doesn't otherwise allow it, and whether string literal escapes
/// are unescaped eagerly by the tokenizer feeding this parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    pub recursion_limit: usize,
    pub trailing_commas: bool,
    pub unescape: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            recursion_limit: 50,
            trailing_commas: false,
            unescape: true,
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursion_limit(mut self, recursion_limit: usize) -> Self {
        self.recursion_limit = recursion_limit;
        self
    }

    pub fn with_trailing_commas(mut self, trailing_commas: bool) -> Self {
        self.trailing_commas = trailing_commas;
        self
    }

    pub fn with_unescape(mut self, unescape: bool) -> Self {
        self.unescape = unescape;
        self
    }
}

/// RAII recursion guard: increments a shared counter on construction,
/// decrements it on drop. Every production that can recurse into itself
/// (subexpressions, nested queries, nested statements) takes one of these
/// at its single shared entry point so the limit can't be bypassed by a
/// production that forgets to check it explicitly.
struct DepthGuard {
    depth: Rc<Cell<usize>>,
}

impl DepthGuard {
    fn new(depth: Rc<Cell<usize>>, limit: usize, loc: Location) -> Result<Self, ParserError> {
        let next = depth.get() + 1;
        depth.set(next);
        if next > limit {
            depth.set(next - 1);
            return Err(ParserError::RecursionLimitExceeded(loc));
        }
        Ok(DepthGuard { depth })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        let current = self.depth.get();
        self.depth.set(current.saturating_sub(1));
    }
}

/// A single-pass recursive-descent parser over a fixed token buffer. Holds
/// a cursor index rather than an iterator so [`Parser::maybe_parse`] and
/// [`Parser::try_parse`] can snapshot and rewind cheaply.
pub struct Parser<'a> {
    tokens: Vec<TokenWithSpan>,
    index: usize,
    dialect: &'a dyn Dialect,
    options: ParserOptions,
    depth: Rc<Cell<usize>>,
}

impl<'a> Parser<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self::with_options(dialect, ParserOptions::default())
    }

    pub fn with_options(dialect: &'a dyn Dialect, options: ParserOptions) -> Self {
        Parser {
            tokens: vec![TokenWithSpan::eof()],
            index: 0,
            dialect,
            options,
            depth: Rc::new(Cell::new(0)),
        }
    }

    pub fn try_with_sql(self, sql: &str) -> Result<Self, TokenizerError> {
        let tokenizer_options = TokenizerOptions {
            unescape: self.options.unescape,
            ..TokenizerOptions::default()
        };
        let tokens = Tokenizer::with_options(self.dialect, tokenizer_options).tokenize_with_location(sql)?;
        Ok(self.with_tokens(tokens))
    }

    pub fn with_tokens(mut self, mut tokens: Vec<TokenWithSpan>) -> Self {
        if !matches!(tokens.last().map(|t| &t.token), Some(Token::EOF)) {
            tokens.push(TokenWithSpan::eof());
        }
        self.tokens = tokens;
        self.index = 0;
        self
    }

    /// Tokenizes and parses `sql` under `dialect` in one step -- the
    /// library's main entry point (spec.md §4.H).
    pub fn parse_sql(sql: &str, dialect: &dyn Dialect) -> Result<Vec<Statement>, ParserError> {
        let mut parser = Parser::new(dialect).try_with_sql(sql)?;
        parser.parse_statements()
    }

    pub fn parse_statements(&mut self) -> Result<Vec<Statement>, ParserError> {
        let mut statements = Vec::new();
        let mut expecting_statement_delimiter = false;
        loop {
            while self.consume_token(&Token::SemiColon) {
                expecting_statement_delimiter = false;
            }
            if self.peek_token().token == Token::EOF {
                break;
            }
            if expecting_statement_delimiter {
                return self.expected("end of statement", self.peek_token());
            }
            statements.push(self.parse_statement()?);
            expecting_statement_delimiter = true;
        }
        Ok(statements)
    }

    fn depth_guard(&self, loc: Location) -> Result<DepthGuard, ParserError> {
        DepthGuard::new(self.depth.clone(), self.options.recursion_limit, loc)
    }

    /// Runs `f` from the current position, committing the cursor on success
    /// and rewinding to the starting position on *any* error -- including
    /// errors raised after `f` had already consumed tokens. Use only when an
    /// alternate production is always available to try next.
    pub fn maybe_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, ParserError>) -> Option<T> {
        let start = self.index;
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.index = start;
                None
            }
        }
    }

    /// Runs `f` from the current position and propagates whatever it
    /// returns. This differs from [`Self::maybe_parse`] in that a failure
    /// is never swallowed: a "soft" mismatch (the production's first check
    /// didn't match -- `expect_token`/`peek_token` style helpers never
    /// advance the cursor on a failed match) leaves the cursor exactly
    /// where it started, for free, with no explicit rewind needed; a
    /// "hard" mismatch (the production committed past its first token and
    /// then hit malformed input) leaves the cursor wherever `f` stopped and
    /// propagates the error untouched, since papering over it would hide a
    /// genuine syntax error. Call sites that need a full
    /// rewind-and-try-the-next-alternative fallback should use
    /// [`Self::maybe_parse`] instead.
    pub fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, ParserError>) -> Result<T, ParserError> {
        f(self)
    }

    pub fn dialect(&self) -> &'a dyn Dialect {
        self.dialect
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    fn peek_token(&self) -> TokenWithSpan {
        self.peek_nth_token(0)
    }

    fn peek_nth_token(&self, n: usize) -> TokenWithSpan {
        self.tokens
            .get(self.index + n)
            .cloned()
            .unwrap_or_else(TokenWithSpan::eof)
    }

    fn peek_location(&self) -> Location {
        self.peek_token().span.start
    }

    fn next_token(&mut self) -> TokenWithSpan {
        let tok = self.peek_token();
        if self.index < self.tokens.len() {
            self.index += 1;
        }
        tok
    }

    fn prev_token(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    fn consume_token(&mut self, expected: &Token) -> bool {
        if &self.peek_token().token == expected {
            self.next_token();
            true
        } else {
            false
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<TokenWithSpan, ParserError> {
        if self.consume_token(expected) {
            Ok(self.tokens[self.index - 1].clone())
        } else {
            let found = self.peek_token();
            self.expected(&format!("{expected:?}"), found)
        }
    }

    fn expected<T>(&self, expected: &str, found: TokenWithSpan) -> Result<T, ParserError> {
        Err(ParserError::expected(
            format!("Expected {expected}, found: {:?}", found.token),
            found.span.start,
            vec![expected.to_string()],
        ))
    }

    fn parse_keyword(&mut self, kw: crate::keywords::Keyword) -> bool {
        match &self.peek_token().token {
            Token::Word(w) if w.keyword == Some(kw) => {
                self.next_token();
                true
            }
            _ => false,
        }
    }

    fn parse_keywords(&mut self, kws: &[crate::keywords::Keyword]) -> bool {
        let start = self.index;
        for &kw in kws {
            if !self.parse_keyword(kw) {
                self.index = start;
                return false;
            }
        }
        true
    }

    fn parse_one_of_keywords(&mut self, kws: &[crate::keywords::Keyword]) -> Option<crate::keywords::Keyword> {
        match &self.peek_token().token {
            Token::Word(w) => {
                if let Some(k) = w.keyword {
                    if kws.contains(&k) {
                        self.next_token();
                        return Some(k);
                    }
                }
                None
            }
            _ => None,
        }
    }

    fn expect_keyword(&mut self, kw: crate::keywords::Keyword) -> Result<(), ParserError> {
        if self.parse_keyword(kw) {
            Ok(())
        } else {
            self.expected(&format!("{kw:?}"), self.peek_token())
        }
    }

    fn expect_keywords(&mut self, kws: &[crate::keywords::Keyword]) -> Result<(), ParserError> {
        if self.parse_keywords(kws) {
            Ok(())
        } else {
            self.expected(&format!("{kws:?}"), self.peek_token())
        }
    }

    fn expect_one_of_keywords(&mut self, kws: &[crate::keywords::Keyword]) -> Result<crate::keywords::Keyword, ParserError> {
        if let Some(k) = self.parse_one_of_keywords(kws) {
            Ok(k)
        } else {
            self.expected(&format!("one of {kws:?}"), self.peek_token())
        }
    }

    /// Matches an unquoted word by its literal text, case-insensitively.
    /// Used for the handful of contextual keywords that never made it into
    /// the reserved-word table (`SETS`, `CLONE`).
    fn parse_word_matching(&mut self, text: &str) -> bool {
        match &self.peek_token().token {
            Token::Word(w) if w.keyword.is_none() && w.value.eq_ignore_ascii_case(text) => {
                self.next_token();
                true
            }
            _ => false,
        }
    }

    fn expect_word_matching(&mut self, text: &str) -> Result<(), ParserError> {
        if self.parse_word_matching(text) {
            Ok(())
        } else {
            self.expected(text, self.peek_token())
        }
    }

    fn parse_identifier(&mut self) -> Result<Ident, ParserError> {
        let tok = self.next_token();
        match tok.token {
            Token::Word(w) => Ok(Ident {
                value: w.value,
                quote_style: w.quote_style,
            }),
            _ => self.expected("identifier", tok),
        }
    }

    fn parse_object_name(&mut self) -> Result<ObjectName, ParserError> {
        let mut idents = vec![self.parse_identifier()?];
        while self.consume_token(&Token::Period) {
            idents.push(self.parse_identifier()?);
        }
        Ok(ObjectName(idents))
    }

    fn parse_literal_uint(&mut self) -> Result<u64, ParserError> {
        let tok = self.next_token();
        match &tok.token {
            Token::Number(s, _) => s
                .parse::<u64>()
                .map_err(|_| ParserError::new(format!("invalid integer literal: {s}"), tok.span.start)),
            _ => self.expected("a number", tok),
        }
    }

    fn parse_comma_separated<T, F>(&mut self, mut f: F) -> Result<Vec<T>, ParserError>
    where
        F: FnMut(&mut Self) -> Result<T, ParserError>,
    {
        let mut values = vec![f(self)?];
        while self.consume_token(&Token::Comma) {
            if self.options.trailing_commas || self.dialect.supports_trailing_commas() {
                if matches!(
                    self.peek_token().token,
                    Token::RParen | Token::RBracket | Token::EOF
                ) {
                    break;
                }
            }
            values.push(f(self)?);
        }
        Ok(values)
    }

    fn parse_parenthesized_comma_separated<T, F>(&mut self, f: F) -> Result<Vec<T>, ParserError>
    where
        F: FnMut(&mut Self) -> Result<T, ParserError>,
    {
        self.expect_token(&Token::LParen)?;
        let values = self.parse_comma_separated(f)?;
        self.expect_token(&Token::RParen)?;
        Ok(values)
    }

    fn peek_sub_query_start(&self) -> bool {
        matches!(
            &self.peek_token().token,
            Token::Word(w) if matches!(w.keyword, Some(crate::keywords::Keyword::SELECT) | Some(crate::keywords::Keyword::WITH))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    fn parse(sql: &str) -> Vec<Statement> {
        let dialect = GenericDialect {};
        Parser::parse_sql(sql, &dialect).unwrap_or_else(|e| panic!("failed to parse {sql:?}: {e}"))
    }

    #[test]
    fn parses_trivial_select() {
        let stmts = parse("SELECT 1");
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn rejects_junk_after_statement_without_semicolon() {
        let dialect = GenericDialect {};
        let err = Parser::parse_sql("SELECT 1 SELECT 2", &dialect).unwrap_err();
        assert!(matches!(err, ParserError::ParserError { .. }));
    }

    #[test]
    fn recursion_limit_is_enforced() {
        let dialect = GenericDialect {};
        let options = ParserOptions::default().with_recursion_limit(5);
        let sql = format!("SELECT {}1{}", "(".repeat(10), ")".repeat(10));
        let mut parser = Parser::with_options(&dialect, options).try_with_sql(&sql).unwrap();
        let err = parser.parse_statements().unwrap_err();
        assert!(matches!(err, ParserError::RecursionLimitExceeded(_)));
    }

    #[test]
    fn multiple_statements_separated_by_semicolons() {
        let stmts = parse("SELECT 1; SELECT 2;");
        assert_eq!(stmts.len(), 2);
    }
}
