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

//! The dialect-aware tokenizer (spec.md §4.C): a single-pass scanner that
//! turns source text into a finite stream of [`TokenWithSpan`]s, consulting
//! a [`Dialect`] for quoting and identifier rules and the keyword table for
//! classifying word tokens.

use core::iter::Peekable;
use core::str::Chars;

use log::trace;

use crate::dialect::Dialect;
use crate::error::TokenizerError;
use crate::keywords::Keyword;
use crate::span::{Location, Span};

/// A lexeme's kind and literal text, before any source-location wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// An end-of-input marker; never appears in a `Tokenizer::tokenize` result,
    /// only as the `Parser`'s sentinel for "ran off the end".
    EOF,
    /// An identifier or keyword-shaped word, quoted or not.
    Word(Word),
    /// A numeric literal, with an optional trailing `L` "long" marker.
    Number(String, bool),
    /// `'...'`
    SingleQuotedString(String),
    /// `"..."` when the dialect treats double quotes as a string literal
    /// rather than a quoted identifier (rare; most dialects use `"` for
    /// identifiers and this variant is unused by them).
    DoubleQuotedString(String),
    /// `N'...'`
    NationalStringLiteral(String),
    /// `X'...'`
    HexStringLiteral(String),
    /// `E'...'` (Postgres)
    EscapedStringLiteral(String),
    /// `$tag$...$tag$`
    DollarQuotedString(DollarQuotedString),
    /// `?`, `$1`, `:name`, `@var` -- a prepared-statement / host-variable
    /// placeholder, stored with its leading sigil included.
    Placeholder(String),
    Comma,
    /// Whitespace, only ever produced when the tokenizer is configured to
    /// retain it.
    Whitespace(Whitespace),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `:`
    Colon,
    /// `::`
    DoubleColon,
    /// `;`
    SemiColon,
    /// `.`
    Period,
    /// `=`
    Eq,
    /// `<>` or `!=`
    Neq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `<=>` (MySQL null-safe equality)
    Spaceship,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `||`
    StringConcat,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `!`
    ExclamationMark,
    /// `!!` (PG factorial, deprecated but still lexed)
    DoubleExclamationMark,
    /// `|/` (PG square root)
    PGSquareRoot,
    /// `||/` (PG cube root)
    PGCubeRoot,
    /// `@` (PG absolute value prefix)
    AtSign,
    /// `->`
    Arrow,
    /// `->>`
    LongArrow,
    /// `#>`
    HashArrow,
    /// `#>>`
    HashLongArrow,
    /// `@>`
    AtArrow,
    /// `<@`
    ArrowAt,
    /// `#-`
    HashMinus,
    /// `@?`
    AtQuestion,
    /// `@@`
    AtAt,
    /// `?` (JSONB key-exists)
    Question,
    /// `?&`
    QuestionAnd,
    /// `?|`
    QuestionPipe,
    /// `=>`
    RArrow,
    /// `:=`
    Assignment,
    /// `--` line comment or `/* ... */` block comment.
    Comment(CommentToken),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentToken {
    SingleLine(String),
    MultiLine(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Whitespace {
    Space,
    Newline,
    Tab,
}

/// An identifier-shaped word: unquoted, or opened by one of `"`, `` ` ``,
/// `[`. `keyword` is resolved case-insensitively against the dialect's
/// keyword set; it is `None` for any run that is not a recognized keyword,
/// regardless of quoting (a quoted word is never treated as a keyword by
/// the parser, but the tokenizer still records the match so dialect hooks
/// can inspect it).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    pub value: String,
    pub quote_style: Option<char>,
    pub keyword: Option<Keyword>,
}

impl Word {
    fn matching_end_quote(quote_start: char) -> char {
        match quote_start {
            '[' => ']',
            c => c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DollarQuotedString {
    pub value: String,
    pub tag: String,
}

/// A token paired with the source span it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenWithSpan {
    pub token: Token,
    pub span: Span,
}

impl TokenWithSpan {
    pub fn new(token: Token, span: Span) -> Self {
        TokenWithSpan { token, span }
    }

    pub fn eof() -> Self {
        TokenWithSpan::new(Token::EOF, Span::empty())
    }
}

/// Controls whitespace/trivia retention and escape resolution; see
/// SPEC_FULL.md §4.C.
#[derive(Debug, Clone, Copy)]
pub struct TokenizerOptions {
    /// When true, `Token::Whitespace`/`Token::Comment` are emitted inline.
    /// Default `false`: trivia is scanned but dropped, matching "default is
    /// dropped for parser consumption".
    pub with_whitespace: bool,
    /// When true, backslash/doubled-quote escapes inside string literals
    /// are resolved eagerly into the token's stored text.
    pub unescape: bool,
    /// Hard cap on a single token's length (guards pathological
    /// dollar-quoted / block-comment input). `None` disables the guard.
    pub max_token_length: Option<usize>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            with_whitespace: false,
            unescape: true,
            max_token_length: Some(10 * 1024 * 1024),
        }
    }
}

/// The single-pass scanner itself. Holds the dialect, the options, and an
/// exclusive cursor over the character stream for the duration of one
/// `tokenize` call (spec.md §5: "the tokenizer... hold[s] exclusive mutable
/// state... for the duration of one call").
pub struct Tokenizer<'a> {
    dialect: &'a dyn Dialect,
    options: TokenizerOptions,
}

impl<'a> Tokenizer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Tokenizer {
            dialect,
            options: TokenizerOptions::default(),
        }
    }

    pub fn with_options(dialect: &'a dyn Dialect, options: TokenizerOptions) -> Self {
        Tokenizer { dialect, options }
    }

    pub fn with_whitespace(mut self, retain: bool) -> Self {
        self.options.with_whitespace = retain;
        self
    }

    /// Tokenizes `sql` fully, returning the token stream with source spans,
    /// or the first `TokenizerError` encountered. There is no partial
    /// result on failure (spec.md §4.C "no recovery").
    pub fn tokenize_with_location(
        &self,
        sql: &str,
    ) -> Result<Vec<TokenWithSpan>, TokenizerError> {
        let mut state = State {
            peekable: sql.chars().peekable(),
            line: 1,
            col: 1,
        };
        let mut tokens = Vec::new();
        loop {
            let start = state.location();
            let token = self.next_token(&mut state, tokens.last().map(|t: &TokenWithSpan| &t.token))?;
            let Some(token) = token else { break };
            let end = state.location();
            trace!("token {:?} @ {}-{}", token, start, end);
            if !self.options.with_whitespace
                && matches!(token, Token::Whitespace(_) | Token::Comment(_))
            {
                continue;
            }
            tokens.push(TokenWithSpan::new(token, Span::new(start, end)));
        }
        Ok(tokens)
    }

    pub fn tokenize(&self, sql: &str) -> Result<Vec<Token>, TokenizerError> {
        Ok(self
            .tokenize_with_location(sql)?
            .into_iter()
            .map(|t| t.token)
            .collect())
    }

    /// Scans exactly one token (or trivia token) starting at the current
    /// cursor, or `Ok(None)` at end-of-input.
    fn next_token(
        &self,
        chars: &mut State<'_>,
        prev_token: Option<&Token>,
    ) -> Result<Option<Token>, TokenizerError> {
        match chars.peek() {
            Some(&ch) => match ch {
                ' ' => {
                    chars.next();
                    Ok(Some(Token::Whitespace(Whitespace::Space)))
                }
                '\t' => {
                    chars.next();
                    Ok(Some(Token::Whitespace(Whitespace::Tab)))
                }
                '\n' => {
                    chars.next();
                    Ok(Some(Token::Whitespace(Whitespace::Newline)))
                }
                '\r' => {
                    chars.next();
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    Ok(Some(Token::Whitespace(Whitespace::Newline)))
                }
                // Identifiers, keywords, prefixed literals (N'..', X'..', ...).
                ch if self.dialect.is_identifier_start(ch) => {
                    self.tokenize_word_or_prefixed_literal(chars, ch)
                }
                ch if self.dialect.allows_identifier_start_with_digit() && ch.is_ascii_digit() => {
                    self.tokenize_word_or_prefixed_literal(chars, ch)
                }
                '"' | '`' | '[' if self.dialect.is_delimited_identifier_start(ch) => {
                    self.tokenize_quoted_identifier(chars, ch)
                }
                '0'..='9' => self.tokenize_number(chars),
                '.' => {
                    // One char of extra lookahead: `.5` is a number, a bare
                    // `.` followed by anything else is the field-access
                    // operator. Peeking past '.' without consuming it keeps
                    // this branch from needing to push characters back.
                    let mut lookahead = chars.clone_peekable();
                    lookahead.next();
                    if lookahead.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                        chars.next();
                        self.tokenize_number_with_leading_dot(chars)
                    } else {
                        chars.next();
                        Ok(Some(Token::Period))
                    }
                }
                '\'' => self.tokenize_single_quoted_string(chars, '\'').map(|s| {
                    Some(Token::SingleQuotedString(s))
                }),
                '$' => self.tokenize_dollar(chars),
                ',' => {
                    chars.next();
                    Ok(Some(Token::Comma))
                }
                '-' => {
                    chars.next();
                    match chars.peek() {
                        Some('-') => {
                            chars.next();
                            let comment = self.tokenize_single_line_comment(chars);
                            Ok(Some(Token::Comment(CommentToken::SingleLine(comment))))
                        }
                        Some('>') => {
                            chars.next();
                            if chars.peek() == Some(&'>') {
                                chars.next();
                                Ok(Some(Token::LongArrow))
                            } else {
                                Ok(Some(Token::Arrow))
                            }
                        }
                        _ => Ok(Some(Token::Minus)),
                    }
                }
                '/' => {
                    chars.next();
                    match chars.peek() {
                        Some('*') => {
                            chars.next();
                            let comment = self.tokenize_multiline_comment(chars)?;
                            Ok(Some(Token::Comment(CommentToken::MultiLine(comment))))
                        }
                        _ => Ok(Some(Token::Div)),
                    }
                }
                '+' => {
                    chars.next();
                    Ok(Some(Token::Plus))
                }
                '*' => {
                    chars.next();
                    Ok(Some(Token::Mul))
                }
                '%' => {
                    chars.next();
                    Ok(Some(Token::Mod))
                }
                '|' => {
                    chars.next();
                    match chars.peek() {
                        Some('|') => {
                            chars.next();
                            if chars.peek() == Some(&'/') {
                                chars.next();
                                Ok(Some(Token::PGCubeRoot))
                            } else {
                                Ok(Some(Token::StringConcat))
                            }
                        }
                        Some('/') => {
                            chars.next();
                            Ok(Some(Token::PGSquareRoot))
                        }
                        Some('&') => {
                            chars.next();
                            Ok(Some(Token::QuestionPipe))
                        }
                        _ => Ok(Some(Token::Pipe)),
                    }
                }
                '=' => {
                    chars.next();
                    match chars.peek() {
                        Some('>') => {
                            chars.next();
                            Ok(Some(Token::RArrow))
                        }
                        _ => Ok(Some(Token::Eq)),
                    }
                }
                '!' => {
                    chars.next();
                    match chars.peek() {
                        Some('=') => {
                            chars.next();
                            Ok(Some(Token::Neq))
                        }
                        Some('!') => {
                            chars.next();
                            Ok(Some(Token::DoubleExclamationMark))
                        }
                        _ => Ok(Some(Token::ExclamationMark)),
                    }
                }
                '<' => {
                    chars.next();
                    match chars.peek() {
                        Some('>') => {
                            chars.next();
                            Ok(Some(Token::Neq))
                        }
                        Some('=') => {
                            chars.next();
                            if chars.peek() == Some(&'>') {
                                chars.next();
                                Ok(Some(Token::Spaceship))
                            } else {
                                Ok(Some(Token::LtEq))
                            }
                        }
                        Some('<') => {
                            chars.next();
                            Ok(Some(Token::ShiftLeft))
                        }
                        Some('@') => {
                            chars.next();
                            Ok(Some(Token::ArrowAt))
                        }
                        _ => Ok(Some(Token::Lt)),
                    }
                }
                '>' => {
                    chars.next();
                    match chars.peek() {
                        Some('=') => {
                            chars.next();
                            Ok(Some(Token::GtEq))
                        }
                        Some('>') => {
                            chars.next();
                            Ok(Some(Token::ShiftRight))
                        }
                        _ => Ok(Some(Token::Gt)),
                    }
                }
                ':' => {
                    chars.next();
                    match chars.peek() {
                        Some(':') => {
                            chars.next();
                            Ok(Some(Token::DoubleColon))
                        }
                        Some('=') => {
                            chars.next();
                            Ok(Some(Token::Assignment))
                        }
                        Some(c) if c.is_alphabetic() || *c == '_' => {
                            let ident = self.tokenize_identifier_run(chars);
                            Ok(Some(Token::Placeholder(format!(":{ident}"))))
                        }
                        _ => Ok(Some(Token::Colon)),
                    }
                }
                ';' => {
                    chars.next();
                    Ok(Some(Token::SemiColon))
                }
                '(' => {
                    chars.next();
                    Ok(Some(Token::LParen))
                }
                ')' => {
                    chars.next();
                    Ok(Some(Token::RParen))
                }
                '[' => {
                    chars.next();
                    Ok(Some(Token::LBracket))
                }
                ']' => {
                    chars.next();
                    Ok(Some(Token::RBracket))
                }
                '{' => {
                    chars.next();
                    Ok(Some(Token::LBrace))
                }
                '}' => {
                    chars.next();
                    Ok(Some(Token::RBrace))
                }
                '&' => {
                    chars.next();
                    Ok(Some(Token::Ampersand))
                }
                '^' => {
                    chars.next();
                    Ok(Some(Token::Caret))
                }
                '~' => {
                    chars.next();
                    Ok(Some(Token::Tilde))
                }
                '#' => {
                    // Peek past '#' without consuming it: Postgres JSON
                    // operators (`#>`, `#>>`, `#-`) take priority over
                    // treating '#' as an identifier-start character.
                    let mut lookahead = chars.clone_peekable();
                    lookahead.next();
                    match lookahead.peek() {
                        Some('>') => {
                            chars.next();
                            chars.next();
                            if chars.peek() == Some(&'>') {
                                chars.next();
                                Ok(Some(Token::HashLongArrow))
                            } else {
                                Ok(Some(Token::HashArrow))
                            }
                        }
                        Some('-') => {
                            chars.next();
                            chars.next();
                            Ok(Some(Token::HashMinus))
                        }
                        _ => self.tokenize_word_or_prefixed_literal(chars, '#'),
                    }
                }
                '@' => {
                    chars.next();
                    match chars.peek() {
                        Some('>') => {
                            chars.next();
                            Ok(Some(Token::AtArrow))
                        }
                        Some('?') => {
                            chars.next();
                            Ok(Some(Token::AtQuestion))
                        }
                        Some('@') => {
                            chars.next();
                            Ok(Some(Token::AtAt))
                        }
                        _ => Ok(Some(Token::AtSign)),
                    }
                }
                '?' => {
                    chars.next();
                    match chars.peek() {
                        Some('&') => {
                            chars.next();
                            Ok(Some(Token::QuestionAnd))
                        }
                        Some('|') => {
                            chars.next();
                            Ok(Some(Token::QuestionPipe))
                        }
                        Some(c) if c.is_ascii_digit() => {
                            let n = self.tokenize_digits(chars);
                            Ok(Some(Token::Placeholder(format!("?{n}"))))
                        }
                        _ => Ok(Some(Token::Question)),
                    }
                }
                other => Err(TokenizerError::new(
                    format!("unexpected character '{other}'"),
                    chars.location(),
                )),
            },
            None => {
                let _ = prev_token;
                Ok(None)
            }
        }
    }

    fn tokenize_digits(&self, chars: &mut State<'_>) -> String {
        let mut s = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                s.push(c);
                chars.next();
            } else {
                break;
            }
        }
        s
    }

    fn tokenize_identifier_run(&self, chars: &mut State<'_>) -> String {
        let mut s = String::new();
        while let Some(&c) = chars.peek() {
            if self.dialect.is_identifier_part(c) {
                s.push(c);
                chars.next();
            } else {
                break;
            }
        }
        s
    }

    /// Consumes a run beginning with an identifier-start character. Handles
    /// both plain words/keywords and the prefixed literal forms
    /// (`N'...'`, `X'...'`, `B'...'`, `E'...'`, `R'...'`, `U&'...'`) whose
    /// prefix happens to look like an identifier until the following `'`.
    fn tokenize_word_or_prefixed_literal(
        &self,
        chars: &mut State<'_>,
        first: char,
    ) -> Result<Option<Token>, TokenizerError> {
        let mut s = String::new();
        s.push(first);
        chars.next();
        while let Some(&c) = chars.peek() {
            if self.dialect.is_identifier_part(c) {
                s.push(c);
                chars.next();
            } else {
                break;
            }
        }

        // Prefixed string literal? Only single-letter (or `U&`) prefixes
        // immediately followed by `'` qualify.
        if chars.peek() == Some(&'\'') {
            let upper = s.to_uppercase();
            match upper.as_str() {
                "N" => {
                    let val = self.tokenize_single_quoted_string(chars, '\'')?;
                    return Ok(Some(Token::NationalStringLiteral(val)));
                }
                "X" => {
                    let val = self.tokenize_single_quoted_string(chars, '\'')?;
                    return Ok(Some(Token::HexStringLiteral(val)));
                }
                "E" => {
                    let val = self.tokenize_single_quoted_string(chars, '\'')?;
                    return Ok(Some(Token::EscapedStringLiteral(val)));
                }
                "R" | "B" | "U&" => {
                    let val = self.tokenize_single_quoted_string(chars, '\'')?;
                    return Ok(Some(Token::SingleQuotedString(val)));
                }
                _ => {}
            }
        }

        let keyword = Keyword::from_str(&s.to_uppercase());
        Ok(Some(Token::Word(Word {
            value: s,
            quote_style: None,
            keyword,
        })))
    }

    fn tokenize_quoted_identifier(
        &self,
        chars: &mut State<'_>,
        quote_start: char,
    ) -> Result<Option<Token>, TokenizerError> {
        let start_loc = chars.location();
        chars.next();
        let quote_end = Word::matching_end_quote(quote_start);
        let mut s = String::new();
        loop {
            match chars.next() {
                Some(c) if c == quote_end => {
                    // Doubled quote-end escapes a literal quote char.
                    if chars.peek() == Some(&quote_end) {
                        s.push(quote_end);
                        chars.next();
                    } else {
                        return Ok(Some(Token::Word(Word {
                            value: s,
                            quote_style: Some(quote_start),
                            keyword: None,
                        })));
                    }
                }
                Some(c) => s.push(c),
                None => {
                    return Err(TokenizerError::new(
                        "unterminated quoted identifier",
                        start_loc,
                    ))
                }
            }
        }
    }

    fn tokenize_single_quoted_string(
        &self,
        chars: &mut State<'_>,
        quote: char,
    ) -> Result<String, TokenizerError> {
        let start_loc = chars.location();
        chars.next();
        let mut s = String::new();
        loop {
            match chars.next() {
                Some(c) if c == quote => {
                    if chars.peek() == Some(&quote) {
                        s.push(quote);
                        chars.next();
                    } else {
                        return Ok(s);
                    }
                }
                Some('\\') if self.dialect.supports_string_literal_backslash_escape() => {
                    if self.options.unescape {
                        match chars.next() {
                            Some('n') => s.push('\n'),
                            Some('t') => s.push('\t'),
                            Some('r') => s.push('\r'),
                            Some('\\') => s.push('\\'),
                            Some(c) if c == quote => s.push(quote),
                            Some(c) => {
                                s.push('\\');
                                s.push(c);
                            }
                            None => {
                                return Err(TokenizerError::new(
                                    "unterminated string literal",
                                    start_loc,
                                ))
                            }
                        }
                    } else {
                        s.push('\\');
                        if let Some(c) = chars.next() {
                            s.push(c);
                        }
                    }
                }
                Some(c) => s.push(c),
                None => {
                    return Err(TokenizerError::new("unterminated string literal", start_loc))
                }
            }
        }
    }

    fn tokenize_single_line_comment(&self, chars: &mut State<'_>) -> String {
        let mut s = String::new();
        for c in chars.peekable.by_ref() {
            chars.advance_location(c);
            if c == '\n' {
                break;
            }
            s.push(c);
        }
        s
    }

    fn tokenize_multiline_comment(&self, chars: &mut State<'_>) -> Result<String, TokenizerError> {
        let start_loc = chars.location();
        let mut s = String::new();
        let mut depth = 1usize;
        loop {
            match chars.next() {
                Some('*') if chars.peek() == Some(&'/') => {
                    chars.next();
                    depth -= 1;
                    if depth == 0 {
                        return Ok(s);
                    }
                    s.push('*');
                    s.push('/');
                }
                Some('/') if chars.peek() == Some(&'*') => {
                    chars.next();
                    depth += 1;
                    s.push('/');
                    s.push('*');
                }
                Some(c) => s.push(c),
                None => {
                    return Err(TokenizerError::new(
                        "unterminated block comment",
                        start_loc,
                    ))
                }
            }
        }
    }

    /// `$tag$...$tag$` dollar-quoted strings, or a bare `$`/`$digits`
    /// placeholder when what follows doesn't match a tag.
    fn tokenize_dollar(&self, chars: &mut State<'_>) -> Result<Option<Token>, TokenizerError> {
        let start_loc = chars.location();
        let mut lookahead = chars.clone_peekable();
        lookahead.next(); // consume the leading '$' in the lookahead copy

        let mut tag = String::new();
        while let Some(&c) = lookahead.peek() {
            if c.is_alphanumeric() || c == '_' {
                tag.push(c);
                lookahead.next();
            } else {
                break;
            }
        }
        if lookahead.peek() == Some(&'$') {
            // Commit: this is a dollar-quoted string with tag `tag`.
            chars.next(); // '$'
            for _ in 0..tag.chars().count() {
                chars.next();
            }
            chars.next(); // closing '$' of the opening tag delimiter
            let closing = format!("${tag}$");
            let mut s = String::new();
            loop {
                if chars.starts_with(&closing) {
                    for _ in 0..closing.chars().count() {
                        chars.next();
                    }
                    return Ok(Some(Token::DollarQuotedString(DollarQuotedString {
                        value: s,
                        tag,
                    })));
                }
                match chars.next() {
                    Some(c) => s.push(c),
                    None => {
                        return Err(TokenizerError::new(
                            "unterminated dollar-quoted string",
                            start_loc,
                        ))
                    }
                }
            }
        } else {
            chars.next(); // '$'
            if chars.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                let n = self.tokenize_digits(chars);
                Ok(Some(Token::Placeholder(format!("${n}"))))
            } else {
                Ok(Some(Token::Placeholder("$".to_string())))
            }
        }
    }

    fn tokenize_number(&self, chars: &mut State<'_>) -> Result<Option<Token>, TokenizerError> {
        let mut s = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                s.push(c);
                chars.next();
            } else {
                break;
            }
        }
        if chars.peek() == Some(&'.') {
            s.push('.');
            chars.next();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    s.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
        }
        self.finish_number(chars, s)
    }

    /// Continues a number whose leading '.' has already been consumed by
    /// the caller (`.5`-shaped literals).
    fn tokenize_number_with_leading_dot(
        &self,
        chars: &mut State<'_>,
    ) -> Result<Option<Token>, TokenizerError> {
        let mut s = String::from(".");
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                s.push(c);
                chars.next();
            } else {
                break;
            }
        }
        self.finish_number(chars, s)
    }

    /// Scans an optional `e[+-]digits` exponent and trailing `L` marker
    /// onto an already-scanned integer/fraction part `s`.
    fn finish_number(
        &self,
        chars: &mut State<'_>,
        mut s: String,
    ) -> Result<Option<Token>, TokenizerError> {
        if matches!(chars.peek(), Some('e') | Some('E')) {
            let mut lookahead = chars.clone_peekable();
            let mut exp = String::new();
            exp.push(lookahead.next().unwrap());
            if matches!(lookahead.peek(), Some('+') | Some('-')) {
                exp.push(lookahead.next().unwrap());
            }
            let mut has_digits = false;
            while let Some(&c) = lookahead.peek() {
                if c.is_ascii_digit() {
                    exp.push(c);
                    lookahead.next();
                    has_digits = true;
                } else {
                    break;
                }
            }
            if has_digits {
                for _ in 0..exp.chars().count() {
                    chars.next();
                }
                s.push_str(&exp);
            }
        }
        let long = if matches!(chars.peek(), Some('L')) {
            chars.next();
            true
        } else {
            false
        };
        Ok(Some(Token::Number(s, long)))
    }
}

/// Cursor state over the character stream, tracking 1-based line/column.
struct State<'a> {
    peekable: Peekable<Chars<'a>>,
    line: u64,
    col: u64,
}

impl<'a> State<'a> {
    fn location(&self) -> Location {
        Location::new(self.line, self.col)
    }

    fn peek(&mut self) -> Option<&char> {
        self.peekable.peek()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peekable.next()?;
        self.advance_location(c);
        Some(c)
    }

    fn advance_location(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }

    /// Pushes a character back in front of the stream. Used for the
    /// single-character-of-extra-lookahead cases (`.5`, `#` retried as an
    /// identifier start).
    fn clone_peekable(&self) -> Peekable<Chars<'a>> {
        self.peekable.clone()
    }

    fn starts_with(&self, needle: &str) -> bool {
        self.peekable.clone().collect::<String>().starts_with(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    fn tokens(sql: &str) -> Vec<Token> {
        let dialect = GenericDialect {};
        Tokenizer::new(&dialect).tokenize(sql).unwrap()
    }

    #[test]
    fn tokenizes_simple_select() {
        let t = tokens("SELECT a, b FROM t");
        assert_eq!(
            t,
            vec![
                Token::Word(Word {
                    value: "SELECT".into(),
                    quote_style: None,
                    keyword: Some(Keyword::SELECT)
                }),
                Token::Word(Word {
                    value: "a".into(),
                    quote_style: None,
                    keyword: None
                }),
                Token::Comma,
                Token::Word(Word {
                    value: "b".into(),
                    quote_style: None,
                    keyword: None
                }),
                Token::Word(Word {
                    value: "FROM".into(),
                    quote_style: None,
                    keyword: Some(Keyword::FROM)
                }),
                Token::Word(Word {
                    value: "t".into(),
                    quote_style: None,
                    keyword: None
                }),
            ]
        );
    }

    #[test]
    fn tokenizes_quoted_identifier() {
        let t = tokens("\"My Column\"");
        assert_eq!(
            t,
            vec![Token::Word(Word {
                value: "My Column".into(),
                quote_style: Some('"'),
                keyword: None
            })]
        );
    }

    #[test]
    fn tokenizes_doubled_quote_escape() {
        let t = tokens("\"a\"\"b\"");
        assert_eq!(
            t,
            vec![Token::Word(Word {
                value: "a\"b".into(),
                quote_style: Some('"'),
                keyword: None
            })]
        );
    }

    #[test]
    fn tokenizes_single_quoted_string_with_doubled_quote() {
        let t = tokens("'it''s'");
        assert_eq!(t, vec![Token::SingleQuotedString("it's".into())]);
    }

    #[test]
    fn tokenizes_number_forms() {
        assert_eq!(tokens("123"), vec![Token::Number("123".into(), false)]);
        assert_eq!(tokens("1.5"), vec![Token::Number("1.5".into(), false)]);
        assert_eq!(tokens("1.5e10"), vec![Token::Number("1.5e10".into(), false)]);
        assert_eq!(tokens("10L"), vec![Token::Number("10".into(), true)]);
        assert_eq!(
            tokens(".5"),
            vec![Token::Number(".5".into(), false)]
        );
    }

    #[test]
    fn tokenizes_compound_operators() {
        assert_eq!(tokens("::"), vec![Token::DoubleColon]);
        assert_eq!(tokens("->>"), vec![Token::LongArrow]);
        assert_eq!(tokens("<=>"), vec![Token::Spaceship]);
        assert_eq!(tokens("||"), vec![Token::StringConcat]);
        assert_eq!(tokens("@>"), vec![Token::AtArrow]);
        assert_eq!(tokens("?&"), vec![Token::QuestionAnd]);
    }

    #[test]
    fn tokenizes_dollar_quoted_string() {
        let t = tokens("$tag$hello $$ world$tag$");
        assert_eq!(
            t,
            vec![Token::DollarQuotedString(DollarQuotedString {
                value: "hello $$ world".into(),
                tag: "tag".into(),
            })]
        );
    }

    #[test]
    fn tokenizes_placeholders() {
        assert_eq!(tokens("$1"), vec![Token::Placeholder("$1".into())]);
        assert_eq!(tokens("?"), vec![Token::Question]);
        assert_eq!(tokens(":name"), vec![Token::Placeholder(":name".into())]);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let dialect = GenericDialect {};
        let err = Tokenizer::new(&dialect).tokenize("'abc").unwrap_err();
        assert_eq!(err.message, "unterminated string literal");
    }

    #[test]
    fn line_comment_is_dropped_by_default() {
        assert_eq!(
            tokens("SELECT 1 -- comment\nFROM t"),
            vec![
                Token::Word(Word {
                    value: "SELECT".into(),
                    quote_style: None,
                    keyword: Some(Keyword::SELECT)
                }),
                Token::Number("1".into(), false),
                Token::Word(Word {
                    value: "FROM".into(),
                    quote_style: None,
                    keyword: Some(Keyword::FROM)
                }),
                Token::Word(Word {
                    value: "t".into(),
                    quote_style: None,
                    keyword: None
                }),
            ]
        );
    }

    #[test]
    fn block_comment_can_nest() {
        let t = tokens("/* outer /* inner */ still outer */ SELECT 1");
        assert_eq!(
            t,
            vec![
                Token::Word(Word {
                    value: "SELECT".into(),
                    quote_style: None,
                    keyword: Some(Keyword::SELECT)
                }),
                Token::Number("1".into(), false),
            ]
        );
    }

    #[test]
    fn mysql_backtick_identifier() {
        use crate::dialect::MySqlDialect;
        let dialect = MySqlDialect {};
        let t = Tokenizer::new(&dialect).tokenize("`col`").unwrap();
        assert_eq!(
            t,
            vec![Token::Word(Word {
                value: "col".into(),
                quote_style: Some('`'),
                keyword: None
            })]
        );
    }

    #[test]
    fn span_tracks_line_and_column() {
        let dialect = GenericDialect {};
        let out = Tokenizer::new(&dialect)
            .tokenize_with_location("a\nb")
            .unwrap();
        assert_eq!(out[0].span.start, Location::new(1, 1));
        assert_eq!(out[1].span.start, Location::new(2, 1));
    }
}
