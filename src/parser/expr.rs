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

//! The Pratt/precedence-climbing expression parser (spec.md §4.F) and the
//! data type grammar that `CAST`/`::`/column definitions share.
//!
//! Binding powers, as (left, right) pairs consulted by [`super::Parser::parse_subexpr`]:
//! `OR` 5/6, `AND` 10/11, prefix `NOT` 15, postfix `IS` 17, comparisons /
//! `BETWEEN` / `IN` / `LIKE` 20/21, `||`/`+`/`-` 30/31, `*`/`/`/`%` 40/41,
//! prefix unary 50, `^` 55/54 (right-associative), postfix index/field/cast/
//! call 60, `COLLATE`/`AT TIME ZONE` 65/66.

use super::Parser;
use crate::ast::*;
use crate::error::ParserError;
use crate::keywords::Keyword;
use crate::span::Location;
use crate::tokenizer::{Token, TokenWithSpan, Word};

pub(crate) const OR_PREC: u8 = 5;
const OR_PREC_R: u8 = 6;
pub(crate) const AND_PREC: u8 = 10;
const AND_PREC_R: u8 = 11;
pub(crate) const NOT_PREC: u8 = 15;
const IS_PREC: u8 = 17;
pub(crate) const BETWEEN_PREC: u8 = 20;
const COMPARISON_PREC_R: u8 = 21;
pub(crate) const PLUS_PREC: u8 = 30;
const PLUS_PREC_R: u8 = 31;
pub(crate) const MUL_PREC: u8 = 40;
const MUL_PREC_R: u8 = 41;
pub(crate) const UNARY_PREC: u8 = 50;
pub(crate) const CARET_PREC: u8 = 55;
pub(crate) const CARET_PREC_R: u8 = 54;
const POSTFIX_PREC: u8 = 60;
pub(crate) const COLLATE_PREC: u8 = 65;
const COLLATE_PREC_R: u8 = 66;

impl<'a> Parser<'a> {
    pub fn parse_expr(&mut self) -> Result<Expr, ParserError> {
        self.parse_subexpr(0)
    }

    pub(super) fn parse_subexpr(&mut self, min_bp: u8) -> Result<Expr, ParserError> {
        let loc = self.peek_location();
        let _guard = self.depth_guard(loc)?;
        let mut expr = self.parse_prefix()?;
        loop {
            let next_bp = self.get_next_precedence();
            if next_bp == 0 || next_bp <= min_bp {
                break;
            }
            expr = self.parse_infix(expr, next_bp)?;
        }
        Ok(expr)
    }

    fn get_next_precedence(&self) -> u8 {
        match &self.peek_token().token {
            Token::Word(w) => match w.keyword {
                Some(Keyword::OR) => OR_PREC,
                Some(Keyword::AND) => AND_PREC,
                Some(Keyword::XOR) => AND_PREC,
                Some(Keyword::NOT) => match &self.peek_nth_token(1).token {
                    Token::Word(w2)
                        if matches!(
                            w2.keyword,
                            Some(Keyword::BETWEEN)
                                | Some(Keyword::IN)
                                | Some(Keyword::LIKE)
                                | Some(Keyword::ILIKE)
                                | Some(Keyword::SIMILAR)
                                | Some(Keyword::RLIKE)
                                | Some(Keyword::REGEXP)
                        ) =>
                    {
                        BETWEEN_PREC
                    }
                    _ => 0,
                },
                Some(Keyword::BETWEEN)
                | Some(Keyword::IN)
                | Some(Keyword::LIKE)
                | Some(Keyword::ILIKE)
                | Some(Keyword::SIMILAR)
                | Some(Keyword::RLIKE)
                | Some(Keyword::REGEXP) => BETWEEN_PREC,
                Some(Keyword::IS) => IS_PREC,
                Some(Keyword::COLLATE) => COLLATE_PREC,
                Some(Keyword::AT) => COLLATE_PREC,
                _ => 0,
            },
            Token::Eq
            | Token::Neq
            | Token::Lt
            | Token::Gt
            | Token::LtEq
            | Token::GtEq
            | Token::Spaceship => BETWEEN_PREC,
            Token::Plus
            | Token::Minus
            | Token::StringConcat
            | Token::Ampersand
            | Token::Pipe
            | Token::ShiftLeft
            | Token::ShiftRight
            | Token::Arrow
            | Token::LongArrow
            | Token::HashArrow
            | Token::HashLongArrow
            | Token::AtArrow
            | Token::ArrowAt
            | Token::HashMinus
            | Token::AtQuestion
            | Token::AtAt
            | Token::Question
            | Token::QuestionAnd
            | Token::QuestionPipe => PLUS_PREC,
            Token::Mul | Token::Div | Token::Mod => MUL_PREC,
            Token::Caret => CARET_PREC,
            Token::DoubleColon | Token::LBracket | Token::ExclamationMark => POSTFIX_PREC,
            _ => 0,
        }
    }

    fn parse_infix(&mut self, expr: Expr, precedence: u8) -> Result<Expr, ParserError> {
        let tok = self.next_token();
        match &tok.token {
            Token::Word(w) => match w.keyword {
                Some(Keyword::AND) => Ok(self.binop(expr, BinaryOperator::And, AND_PREC_R)?),
                Some(Keyword::OR) => Ok(self.binop(expr, BinaryOperator::Or, OR_PREC_R)?),
                Some(Keyword::XOR) => Ok(self.binop(expr, BinaryOperator::Xor, AND_PREC_R)?),
                Some(Keyword::NOT) => self.parse_negated_infix(expr),
                Some(Keyword::BETWEEN) => self.parse_between(expr, false),
                Some(Keyword::IN) => self.parse_in(expr, false),
                Some(Keyword::LIKE) => self.parse_like(expr, false, false),
                Some(Keyword::ILIKE) => self.parse_like(expr, false, true),
                Some(Keyword::SIMILAR) => self.parse_similar_to(expr, false),
                Some(Keyword::RLIKE) => self.parse_rlike(expr, false, false),
                Some(Keyword::REGEXP) => self.parse_rlike(expr, false, true),
                Some(Keyword::IS) => self.parse_is(expr),
                Some(Keyword::COLLATE) => {
                    let collation = self.parse_object_name()?;
                    Ok(Expr::Collate {
                        expr: Box::new(expr),
                        collation,
                    })
                }
                Some(Keyword::AT) => {
                    self.expect_keywords(&[Keyword::TIME, Keyword::ZONE])?;
                    let time_zone = Box::new(self.parse_subexpr(COLLATE_PREC_R)?);
                    Ok(Expr::AtTimeZone {
                        timestamp: Box::new(expr),
                        time_zone,
                    })
                }
                _ => self.expected("an infix operator", tok),
            },
            Token::Eq => self.parse_comparison_infix(expr, BinaryOperator::Eq),
            Token::Neq => self.parse_comparison_infix(expr, BinaryOperator::NotEq),
            Token::Lt => self.parse_comparison_infix(expr, BinaryOperator::Lt),
            Token::Gt => self.parse_comparison_infix(expr, BinaryOperator::Gt),
            Token::LtEq => self.parse_comparison_infix(expr, BinaryOperator::LtEq),
            Token::GtEq => self.parse_comparison_infix(expr, BinaryOperator::GtEq),
            Token::Spaceship => self.parse_comparison_infix(expr, BinaryOperator::Spaceship),
            Token::Plus => Ok(self.binop(expr, BinaryOperator::Plus, PLUS_PREC_R)?),
            Token::Minus => Ok(self.binop(expr, BinaryOperator::Minus, PLUS_PREC_R)?),
            Token::StringConcat => Ok(self.binop(expr, BinaryOperator::StringConcat, PLUS_PREC_R)?),
            Token::Mul => Ok(self.binop(expr, BinaryOperator::Multiply, MUL_PREC_R)?),
            Token::Div => Ok(self.binop(expr, BinaryOperator::Divide, MUL_PREC_R)?),
            Token::Mod => Ok(self.binop(expr, BinaryOperator::Modulo, MUL_PREC_R)?),
            Token::Caret => Ok(self.binop(expr, BinaryOperator::PGExp, CARET_PREC_R)?),
            Token::Ampersand => Ok(self.binop(expr, BinaryOperator::BitwiseAnd, PLUS_PREC_R)?),
            Token::Pipe => Ok(self.binop(expr, BinaryOperator::BitwiseOr, PLUS_PREC_R)?),
            Token::ShiftLeft => Ok(self.binop(expr, BinaryOperator::PGBitwiseShiftLeft, PLUS_PREC_R)?),
            Token::ShiftRight => Ok(self.binop(expr, BinaryOperator::PGBitwiseShiftRight, PLUS_PREC_R)?),
            Token::Arrow => Ok(self.binop(expr, BinaryOperator::Arrow, PLUS_PREC_R)?),
            Token::LongArrow => Ok(self.binop(expr, BinaryOperator::LongArrow, PLUS_PREC_R)?),
            Token::HashArrow => Ok(self.binop(expr, BinaryOperator::HashArrow, PLUS_PREC_R)?),
            Token::HashLongArrow => Ok(self.binop(expr, BinaryOperator::HashLongArrow, PLUS_PREC_R)?),
            Token::AtArrow => Ok(self.binop(expr, BinaryOperator::AtArrow, PLUS_PREC_R)?),
            Token::ArrowAt => Ok(self.binop(expr, BinaryOperator::ArrowAt, PLUS_PREC_R)?),
            Token::HashMinus => Ok(self.binop(expr, BinaryOperator::HashMinus, PLUS_PREC_R)?),
            Token::AtQuestion => Ok(self.binop(expr, BinaryOperator::AtQuestion, PLUS_PREC_R)?),
            Token::AtAt => Ok(self.binop(expr, BinaryOperator::AtAt, PLUS_PREC_R)?),
            Token::QuestionAnd => Ok(self.binop(expr, BinaryOperator::QuestionAnd, PLUS_PREC_R)?),
            Token::QuestionPipe => Ok(self.binop(expr, BinaryOperator::QuestionPipe, PLUS_PREC_R)?),
            Token::Question => Ok(self.binop(expr, BinaryOperator::Question, PLUS_PREC_R)?),
            Token::DoubleColon => {
                let data_type = self.parse_data_type()?;
                Ok(Expr::Cast {
                    kind: CastKind::DoubleColon,
                    expr: Box::new(expr),
                    data_type,
                    format: None,
                })
            }
            Token::LBracket => {
                let mut keys = vec![self.parse_expr()?];
                self.expect_token(&Token::RBracket)?;
                while self.consume_token(&Token::LBracket) {
                    keys.push(self.parse_expr()?);
                    self.expect_token(&Token::RBracket)?;
                }
                Ok(Expr::MapAccess {
                    column: Box::new(expr),
                    keys,
                })
            }
            Token::ExclamationMark => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGPostfixFactorial,
                expr: Box::new(expr),
            }),
            _ => {
                let _ = precedence;
                self.expected("an infix operator", tok)
            }
        }
    }

    fn binop(&mut self, left: Expr, op: BinaryOperator, right_bp: u8) -> Result<Expr, ParserError> {
        let right = self.parse_subexpr(right_bp)?;
        Ok(Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    fn parse_comparison_infix(&mut self, expr: Expr, op: BinaryOperator) -> Result<Expr, ParserError> {
        if self.parse_keyword(Keyword::ALL) {
            let right = Box::new(self.parse_parenthesized_query()?);
            return Ok(Expr::AllOp {
                left: Box::new(expr),
                compare_op: op,
                right,
            });
        }
        if self.parse_keyword(Keyword::ANY) || self.parse_keyword(Keyword::SOME) {
            let right = Box::new(self.parse_parenthesized_query()?);
            return Ok(Expr::AnyOp {
                left: Box::new(expr),
                compare_op: op,
                right,
            });
        }
        self.binop(expr, op, COMPARISON_PREC_R)
    }

    fn parse_parenthesized_query(&mut self) -> Result<Query, ParserError> {
        self.expect_token(&Token::LParen)?;
        let query = self.parse_query()?;
        self.expect_token(&Token::RParen)?;
        Ok(query)
    }

    fn parse_negated_infix(&mut self, expr: Expr) -> Result<Expr, ParserError> {
        if self.parse_keyword(Keyword::BETWEEN) {
            self.parse_between(expr, true)
        } else if self.parse_keyword(Keyword::IN) {
            self.parse_in(expr, true)
        } else if self.parse_keyword(Keyword::LIKE) {
            self.parse_like(expr, true, false)
        } else if self.parse_keyword(Keyword::ILIKE) {
            self.parse_like(expr, true, true)
        } else if self.parse_keyword(Keyword::SIMILAR) {
            self.parse_similar_to(expr, true)
        } else if self.parse_keyword(Keyword::RLIKE) {
            self.parse_rlike(expr, true, false)
        } else if self.parse_keyword(Keyword::REGEXP) {
            self.parse_rlike(expr, true, true)
        } else {
            self.expected(
                "BETWEEN, IN, LIKE, ILIKE, SIMILAR TO, RLIKE or REGEXP after NOT",
                self.peek_token(),
            )
        }
    }

    fn parse_between(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        let low = Box::new(self.parse_subexpr(BETWEEN_PREC)?);
        self.expect_keyword(Keyword::AND)?;
        let high = Box::new(self.parse_subexpr(BETWEEN_PREC)?);
        Ok(Expr::Between {
            expr: Box::new(expr),
            negated,
            low,
            high,
        })
    }

    fn parse_in(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        if self.parse_keyword(Keyword::UNNEST) {
            self.expect_token(&Token::LParen)?;
            let array_expr = Box::new(self.parse_expr()?);
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::InUnnest {
                expr: Box::new(expr),
                array_expr,
                negated,
            });
        }
        self.expect_token(&Token::LParen)?;
        if self.peek_sub_query_start() {
            let subquery = Box::new(self.parse_query()?);
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::InSubquery {
                expr: Box::new(expr),
                subquery,
                negated,
            });
        }
        let list = self.parse_comma_separated(|p| p.parse_expr())?;
        self.expect_token(&Token::RParen)?;
        Ok(Expr::InList {
            expr: Box::new(expr),
            list,
            negated,
        })
    }

    fn parse_like(&mut self, expr: Expr, negated: bool, case_insensitive: bool) -> Result<Expr, ParserError> {
        let pattern = Box::new(self.parse_subexpr(BETWEEN_PREC)?);
        let escape_char = self.parse_optional_escape_char()?;
        if case_insensitive {
            Ok(Expr::ILike {
                negated,
                expr: Box::new(expr),
                pattern,
                escape_char,
            })
        } else {
            Ok(Expr::Like {
                negated,
                expr: Box::new(expr),
                pattern,
                escape_char,
            })
        }
    }

    fn parse_similar_to(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        self.expect_keyword(Keyword::TO)?;
        let pattern = Box::new(self.parse_subexpr(BETWEEN_PREC)?);
        let escape_char = self.parse_optional_escape_char()?;
        Ok(Expr::SimilarTo {
            negated,
            expr: Box::new(expr),
            pattern,
            escape_char,
        })
    }

    fn parse_rlike(&mut self, expr: Expr, negated: bool, regexp: bool) -> Result<Expr, ParserError> {
        let pattern = Box::new(self.parse_subexpr(BETWEEN_PREC)?);
        Ok(Expr::RLike {
            negated,
            expr: Box::new(expr),
            pattern,
            regexp,
        })
    }

    fn parse_optional_escape_char(&mut self) -> Result<Option<char>, ParserError> {
        if self.parse_keyword(Keyword::ESCAPE) {
            let tok = self.next_token();
            match tok.token {
                Token::SingleQuotedString(ref s) if s.chars().count() == 1 => Ok(Some(s.chars().next().unwrap())),
                _ => self.expected("a single-character escape string", tok),
            }
        } else {
            Ok(None)
        }
    }

    fn parse_is(&mut self, expr: Expr) -> Result<Expr, ParserError> {
        if self.parse_keyword(Keyword::NOT) {
            if self.parse_keyword(Keyword::NULL) {
                Ok(Expr::IsNotNull(Box::new(expr)))
            } else if self.parse_keyword(Keyword::TRUE) {
                Ok(Expr::IsNotTrue(Box::new(expr)))
            } else if self.parse_keyword(Keyword::FALSE) {
                Ok(Expr::IsNotFalse(Box::new(expr)))
            } else if self.parse_keyword(Keyword::UNKNOWN) {
                Ok(Expr::IsNotUnknown(Box::new(expr)))
            } else if self.parse_keywords(&[Keyword::DISTINCT, Keyword::FROM]) {
                let rhs = Box::new(self.parse_subexpr(IS_PREC)?);
                Ok(Expr::IsNotDistinctFrom(Box::new(expr), rhs))
            } else {
                self.expected("NULL, TRUE, FALSE, UNKNOWN or DISTINCT FROM after IS NOT", self.peek_token())
            }
        } else if self.parse_keyword(Keyword::NULL) {
            Ok(Expr::IsNull(Box::new(expr)))
        } else if self.parse_keyword(Keyword::TRUE) {
            Ok(Expr::IsTrue(Box::new(expr)))
        } else if self.parse_keyword(Keyword::FALSE) {
            Ok(Expr::IsFalse(Box::new(expr)))
        } else if self.parse_keyword(Keyword::UNKNOWN) {
            Ok(Expr::IsUnknown(Box::new(expr)))
        } else if self.parse_keywords(&[Keyword::DISTINCT, Keyword::FROM]) {
            let rhs = Box::new(self.parse_subexpr(IS_PREC)?);
            Ok(Expr::IsDistinctFrom(Box::new(expr), rhs))
        } else {
            self.expected("NULL, TRUE, FALSE, UNKNOWN or DISTINCT FROM after IS", self.peek_token())
        }
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParserError> {
        let tok = self.next_token();
        match tok.token.clone() {
            Token::Word(w) => self.parse_prefix_word(w, &tok),
            Token::Number(v, long) => Ok(Expr::Value(self.number_to_value(&v, long, tok.span.start)?)),
            Token::SingleQuotedString(s) => Ok(Expr::Value(Value::SingleQuotedString(s))),
            Token::DoubleQuotedString(s) => Ok(Expr::Value(Value::DoubleQuotedString(s))),
            Token::NationalStringLiteral(s) => Ok(Expr::Value(Value::NationalStringLiteral(s))),
            Token::HexStringLiteral(s) => Ok(Expr::Value(Value::HexStringLiteral(s))),
            Token::EscapedStringLiteral(s) => Ok(Expr::Value(Value::EscapedStringLiteral(s))),
            Token::Placeholder(s) => Ok(Expr::Value(Value::Placeholder(s))),
            Token::LParen => self.parse_paren_expr(),
            Token::LBracket => self.parse_array_literal(),
            Token::Minus => Ok(Expr::UnaryOp {
                op: UnaryOperator::Minus,
                expr: Box::new(self.parse_subexpr(UNARY_PREC)?),
            }),
            Token::Plus => Ok(Expr::UnaryOp {
                op: UnaryOperator::Plus,
                expr: Box::new(self.parse_subexpr(UNARY_PREC)?),
            }),
            Token::Tilde => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGBitwiseNot,
                expr: Box::new(self.parse_subexpr(UNARY_PREC)?),
            }),
            Token::PGSquareRoot => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGSquareRoot,
                expr: Box::new(self.parse_subexpr(UNARY_PREC)?),
            }),
            Token::PGCubeRoot => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGCubeRoot,
                expr: Box::new(self.parse_subexpr(UNARY_PREC)?),
            }),
            Token::DoubleExclamationMark => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGPrefixFactorial,
                expr: Box::new(self.parse_subexpr(UNARY_PREC)?),
            }),
            Token::AtSign => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGAbs,
                expr: Box::new(self.parse_subexpr(UNARY_PREC)?),
            }),
            _ => self.expected("an expression", tok),
        }
    }

    fn parse_prefix_word(&mut self, w: Word, tok: &TokenWithSpan) -> Result<Expr, ParserError> {
        match w.keyword {
            Some(Keyword::NOT) => {
                if self.parse_keyword(Keyword::EXISTS) {
                    self.parse_exists_expr(true)
                } else {
                    Ok(Expr::UnaryOp {
                        op: UnaryOperator::Not,
                        expr: Box::new(self.parse_subexpr(NOT_PREC)?),
                    })
                }
            }
            Some(Keyword::NULL) => Ok(Expr::Value(Value::Null)),
            Some(Keyword::TRUE) => Ok(Expr::Value(Value::Boolean(true))),
            Some(Keyword::FALSE) => Ok(Expr::Value(Value::Boolean(false))),
            Some(Keyword::CASE) => self.parse_case_expr(),
            Some(Keyword::CAST) => self.parse_cast_expr(CastKind::Cast),
            Some(Keyword::TRY_CAST) => self.parse_cast_expr(CastKind::TryCast),
            Some(Keyword::SAFE_CAST) => self.parse_cast_expr(CastKind::SafeCast),
            Some(Keyword::EXTRACT) => self.parse_extract_expr(),
            Some(Keyword::POSITION) if self.peek_token().token == Token::LParen => self.parse_position_expr(),
            Some(Keyword::SUBSTRING) => self.parse_substring_expr(),
            Some(Keyword::TRIM) => self.parse_trim_expr(),
            Some(Keyword::OVERLAY) => self.parse_overlay_expr(),
            Some(Keyword::INTERVAL) => self.parse_interval_expr(),
            Some(Keyword::ARRAY) => self.parse_array_expr(),
            Some(Keyword::EXISTS) => self.parse_exists_expr(false),
            Some(Keyword::ROW) if self.peek_token().token == Token::LParen => self.parse_row_tuple(),
            Some(Keyword::GROUPING) => {
                self.expect_word_matching("SETS")?;
                self.parse_grouping_sets_body(Expr::GroupingSets)
            }
            Some(Keyword::CUBE) if self.peek_token().token == Token::LParen => {
                self.parse_grouping_sets_body(Expr::Cube)
            }
            Some(Keyword::ROLLUP) if self.peek_token().token == Token::LParen => {
                self.parse_grouping_sets_body(Expr::Rollup)
            }
            Some(Keyword::MATCH) => self.parse_match_against(),
            _ => self.parse_identifier_or_function(Ident {
                value: w.value,
                quote_style: w.quote_style,
            }),
        }
        .map_err(|e| {
            let _ = tok;
            e
        })
    }

    fn parse_identifier_or_function(&mut self, ident: Ident) -> Result<Expr, ParserError> {
        if self.peek_token().token == Token::LParen {
            return self.parse_function_call(ObjectName(vec![ident]));
        }
        if self.consume_token(&Token::Period) {
            let mut parts = vec![ident];
            loop {
                if self.consume_token(&Token::Mul) {
                    return Ok(Expr::QualifiedWildcard(ObjectName(parts)));
                }
                parts.push(self.parse_identifier()?);
                if !self.consume_token(&Token::Period) {
                    break;
                }
            }
            if self.peek_token().token == Token::LParen {
                return self.parse_function_call(ObjectName(parts));
            }
            return Ok(Expr::CompoundIdentifier(parts));
        }
        Ok(Expr::Identifier(ident))
    }

    fn parse_function_call(&mut self, name: ObjectName) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        if self.dialect.supports_lambda_functions() {
            if let Some(lambda) = self.maybe_parse(|p| p.parse_lambda_params_and_arrow()) {
                let body = Box::new(self.parse_expr()?);
                self.expect_token(&Token::RParen)?;
                return Ok(Expr::Lambda {
                    params: lambda,
                    body,
                });
            }
        }
        let distinct = self.parse_keyword(Keyword::DISTINCT);
        self.parse_keyword(Keyword::ALL);
        let args = if self.peek_token().token == Token::RParen {
            Vec::new()
        } else {
            self.parse_comma_separated(|p| p.parse_function_arg())?
        };
        self.expect_token(&Token::RParen)?;

        let mut order_by = Vec::new();
        let mut limit = None;
        if self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
            order_by = self.parse_comma_separated(|p| p.parse_order_by_expr())?;
            if self.parse_keyword(Keyword::LIMIT) {
                limit = Some(Box::new(self.parse_expr()?));
            }
        }
        let mut within_group = Vec::new();
        if self.dialect.supports_within_after_array_aggregation() && self.parse_keywords(&[Keyword::WITHIN, Keyword::GROUP]) {
            self.expect_token(&Token::LParen)?;
            self.expect_keywords(&[Keyword::ORDER, Keyword::BY])?;
            within_group = self.parse_comma_separated(|p| p.parse_order_by_expr())?;
            self.expect_token(&Token::RParen)?;
        }
        let filter = if self.dialect.supports_filter_during_aggregation() && self.parse_keyword(Keyword::FILTER) {
            self.expect_token(&Token::LParen)?;
            self.expect_keyword(Keyword::WHERE)?;
            let e = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Some(Box::new(e))
        } else {
            None
        };
        let null_treatment = if !self.dialect.supports_window_function_null_treatment_arg() {
            None
        } else if self.parse_keyword(Keyword::IGNORE) {
            self.expect_keyword(Keyword::NULLS)?;
            Some(NullTreatment::IgnoreNulls)
        } else if self.parse_keyword(Keyword::RESPECT) {
            self.expect_keyword(Keyword::NULLS)?;
            Some(NullTreatment::RespectNulls)
        } else {
            None
        };
        let over = if self.parse_keyword(Keyword::OVER) {
            Some(self.parse_window_type()?)
        } else {
            None
        };
        Ok(Expr::Function(Function {
            name,
            args,
            distinct,
            order_by,
            limit,
            within_group,
            filter,
            null_treatment,
            over,
        }))
    }

    fn parse_lambda_params_and_arrow(&mut self) -> Result<Vec<Ident>, ParserError> {
        let params = if self.consume_token(&Token::RParen) {
            // the caller already consumed the opening paren; an immediate
            // close means zero params, but then we've eaten the call's own
            // `)` too -- lambdas always need at least one param, so treat
            // this as a mismatch instead.
            return Err(ParserError::new("not a lambda".into(), self.peek_location()));
        } else {
            self.parse_comma_separated(|p| p.parse_identifier())?
        };
        if !matches!(self.peek_token().token, Token::RArrow) {
            return Err(ParserError::new("not a lambda".into(), self.peek_location()));
        }
        self.next_token();
        Ok(params)
    }

    pub(super) fn parse_function_arg(&mut self) -> Result<FunctionArg, ParserError> {
        if let Some(arg) = self.maybe_parse(|p| p.parse_named_function_arg()) {
            return Ok(arg);
        }
        Ok(FunctionArg::Unnamed(self.parse_function_arg_expr()?))
    }

    fn parse_named_function_arg(&mut self) -> Result<FunctionArg, ParserError> {
        let name = self.parse_identifier()?;
        let operator = if self.consume_token(&Token::RArrow) {
            FunctionArgOperator::RightArrow
        } else if self.consume_token(&Token::Assignment) {
            FunctionArgOperator::Assignment
        } else if self.consume_token(&Token::Eq) {
            FunctionArgOperator::Equals
        } else {
            return self.expected("=>, := or =", self.peek_token());
        };
        let arg = self.parse_function_arg_expr()?;
        Ok(FunctionArg::Named { name, arg, operator })
    }

    fn parse_function_arg_expr(&mut self) -> Result<FunctionArgExpr, ParserError> {
        if self.consume_token(&Token::Mul) {
            return Ok(FunctionArgExpr::Wildcard);
        }
        if let Some(fae) = self.maybe_parse(|p| p.parse_qualified_wildcard_arg()) {
            return Ok(fae);
        }
        Ok(FunctionArgExpr::Expr(self.parse_expr()?))
    }

    fn parse_qualified_wildcard_arg(&mut self) -> Result<FunctionArgExpr, ParserError> {
        let mut idents = vec![self.parse_identifier()?];
        loop {
            self.expect_token(&Token::Period)?;
            if self.consume_token(&Token::Mul) {
                return Ok(FunctionArgExpr::QualifiedWildcard(ObjectName(idents)));
            }
            idents.push(self.parse_identifier()?);
        }
    }

    pub(super) fn parse_window_type(&mut self) -> Result<WindowType, ParserError> {
        if self.consume_token(&Token::LParen) {
            let spec = self.parse_window_spec()?;
            self.expect_token(&Token::RParen)?;
            Ok(WindowType::WindowSpec(spec))
        } else {
            Ok(WindowType::NamedWindow(self.parse_identifier()?))
        }
    }

    pub(super) fn parse_window_spec(&mut self) -> Result<WindowSpec, ParserError> {
        let window_name = self.maybe_parse(|p| {
            let id = p.parse_identifier()?;
            match &p.peek_token().token {
                Token::RParen => Ok(id),
                Token::Word(w)
                    if matches!(
                        w.keyword,
                        Some(Keyword::PARTITION) | Some(Keyword::ORDER) | Some(Keyword::ROWS) | Some(Keyword::RANGE) | Some(Keyword::GROUPS)
                    ) =>
                {
                    Ok(id)
                }
                _ => Err(ParserError::new("not a window name".into(), p.peek_location())),
            }
        });
        let partition_by = if self.parse_keywords(&[Keyword::PARTITION, Keyword::BY]) {
            self.parse_comma_separated(|p| p.parse_expr())?
        } else {
            Vec::new()
        };
        let order_by = if self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
            self.parse_comma_separated(|p| p.parse_order_by_expr())?
        } else {
            Vec::new()
        };
        let window_frame = if matches!(
            &self.peek_token().token,
            Token::Word(w) if matches!(w.keyword, Some(Keyword::ROWS) | Some(Keyword::RANGE) | Some(Keyword::GROUPS))
        ) {
            Some(self.parse_window_frame()?)
        } else {
            None
        };
        Ok(WindowSpec {
            window_name,
            partition_by,
            order_by,
            window_frame,
        })
    }

    fn parse_window_frame(&mut self) -> Result<WindowFrame, ParserError> {
        let units = if self.parse_keyword(Keyword::ROWS) {
            WindowFrameUnits::Rows
        } else if self.parse_keyword(Keyword::RANGE) {
            WindowFrameUnits::Range
        } else if self.parse_keyword(Keyword::GROUPS) {
            WindowFrameUnits::Groups
        } else {
            return self.expected("ROWS, RANGE or GROUPS", self.peek_token());
        };
        if self.parse_keyword(Keyword::BETWEEN) {
            let start_bound = self.parse_window_frame_bound()?;
            self.expect_keyword(Keyword::AND)?;
            let end_bound = Some(self.parse_window_frame_bound()?);
            Ok(WindowFrame {
                units,
                start_bound,
                end_bound,
            })
        } else {
            let start_bound = self.parse_window_frame_bound()?;
            Ok(WindowFrame {
                units,
                start_bound,
                end_bound: None,
            })
        }
    }

    fn parse_window_frame_bound(&mut self) -> Result<WindowFrameBound, ParserError> {
        if self.parse_keywords(&[Keyword::CURRENT, Keyword::ROW]) {
            Ok(WindowFrameBound::CurrentRow)
        } else if self.parse_keyword(Keyword::UNBOUNDED) {
            if self.parse_keyword(Keyword::PRECEDING) {
                Ok(WindowFrameBound::Preceding(None))
            } else if self.parse_keyword(Keyword::FOLLOWING) {
                Ok(WindowFrameBound::Following(None))
            } else {
                self.expected("PRECEDING or FOLLOWING", self.peek_token())
            }
        } else {
            let value = Box::new(self.parse_expr()?);
            if self.parse_keyword(Keyword::PRECEDING) {
                Ok(WindowFrameBound::Preceding(Some(value)))
            } else if self.parse_keyword(Keyword::FOLLOWING) {
                Ok(WindowFrameBound::Following(Some(value)))
            } else {
                self.expected("PRECEDING or FOLLOWING", self.peek_token())
            }
        }
    }

    pub(super) fn parse_order_by_expr(&mut self) -> Result<OrderByExpr, ParserError> {
        let expr = self.parse_expr()?;
        let asc = if self.parse_keyword(Keyword::ASC) {
            Some(true)
        } else if self.parse_keyword(Keyword::DESC) {
            Some(false)
        } else {
            None
        };
        let nulls_first = if self.parse_keywords(&[Keyword::NULLS, Keyword::FIRST]) {
            Some(true)
        } else if self.parse_keywords(&[Keyword::NULLS, Keyword::LAST]) {
            Some(false)
        } else {
            None
        };
        Ok(OrderByExpr {
            expr,
            asc,
            nulls_first,
        })
    }

    fn parse_case_expr(&mut self) -> Result<Expr, ParserError> {
        let operand = if !self.parse_keyword(Keyword::WHEN) {
            let o = Some(Box::new(self.parse_expr()?));
            self.expect_keyword(Keyword::WHEN)?;
            o
        } else {
            None
        };
        let mut conditions = Vec::new();
        let mut results = Vec::new();
        loop {
            conditions.push(self.parse_expr()?);
            self.expect_keyword(Keyword::THEN)?;
            results.push(self.parse_expr()?);
            if !self.parse_keyword(Keyword::WHEN) {
                break;
            }
        }
        let else_result = if self.parse_keyword(Keyword::ELSE) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::END)?;
        Ok(Expr::Case {
            operand,
            conditions,
            results,
            else_result,
        })
    }

    fn parse_cast_expr(&mut self, kind: CastKind) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = Box::new(self.parse_expr()?);
        self.expect_keyword(Keyword::AS)?;
        let data_type = self.parse_data_type()?;
        let format = if self.parse_keyword(Keyword::FORMAT) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Cast {
            kind,
            expr,
            data_type,
            format,
        })
    }

    fn parse_extract_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let field = self.parse_date_time_field()?;
        self.expect_keyword(Keyword::FROM)?;
        let expr = Box::new(self.parse_expr()?);
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Extract { field, expr })
    }

    fn parse_date_time_field(&mut self) -> Result<DateTimeField, ParserError> {
        let tok = self.next_token();
        if let Token::Word(w) = &tok.token {
            let field = match w.value.to_uppercase().as_str() {
                "YEAR" => DateTimeField::Year,
                "MONTH" => DateTimeField::Month,
                "WEEK" => DateTimeField::Week,
                "DAY" => DateTimeField::Day,
                "HOUR" => DateTimeField::Hour,
                "MINUTE" => DateTimeField::Minute,
                "SECOND" => DateTimeField::Second,
                "CENTURY" => DateTimeField::Century,
                "DECADE" => DateTimeField::Decade,
                "DOW" => DateTimeField::Dow,
                "DOY" => DateTimeField::Doy,
                "EPOCH" => DateTimeField::Epoch,
                "ISODOW" => DateTimeField::Isodow,
                "ISOYEAR" => DateTimeField::Isoyear,
                "JULIAN" => DateTimeField::Julian,
                "MICROSECONDS" => DateTimeField::Microseconds,
                "MILLENIUM" => DateTimeField::Millenium,
                "MILLISECONDS" => DateTimeField::Milliseconds,
                "QUARTER" => DateTimeField::Quarter,
                "TIMEZONE" => DateTimeField::Timezone,
                "TIMEZONE_HOUR" => DateTimeField::TimezoneHour,
                "TIMEZONE_MINUTE" => DateTimeField::TimezoneMinute,
                _ => return self.expected("a date/time field", tok),
            };
            Ok(field)
        } else {
            self.expected("a date/time field", tok)
        }
    }

    fn parse_position_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = Box::new(self.parse_subexpr(BETWEEN_PREC)?);
        self.expect_keyword(Keyword::IN)?;
        let in_expr = Box::new(self.parse_expr()?);
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Position { expr, r#in: in_expr })
    }

    fn parse_substring_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = Box::new(self.parse_expr()?);
        let mut substring_from = None;
        let mut substring_for = None;
        if self.parse_keyword(Keyword::FROM) {
            substring_from = Some(Box::new(self.parse_expr()?));
        }
        if self.parse_keyword(Keyword::FOR) {
            substring_for = Some(Box::new(self.parse_expr()?));
        }
        if substring_from.is_none() && substring_for.is_none() && self.consume_token(&Token::Comma) {
            substring_from = Some(Box::new(self.parse_expr()?));
            if self.consume_token(&Token::Comma) {
                substring_for = Some(Box::new(self.parse_expr()?));
            }
        }
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Substring {
            expr,
            substring_from,
            substring_for,
        })
    }

    fn parse_trim_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let trim_where = if self.parse_keyword(Keyword::BOTH) {
            Some(TrimWhereField::Both)
        } else if self.parse_keyword(Keyword::LEADING) {
            Some(TrimWhereField::Leading)
        } else if self.parse_keyword(Keyword::TRAILING) {
            Some(TrimWhereField::Trailing)
        } else {
            None
        };
        if trim_where.is_some() {
            let trim_what = if !self.parse_keyword(Keyword::FROM) {
                let what = Some(Box::new(self.parse_expr()?));
                self.expect_keyword(Keyword::FROM)?;
                what
            } else {
                None
            };
            let expr = Box::new(self.parse_expr()?);
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::Trim {
                expr,
                trim_where,
                trim_what,
            });
        }
        let first = self.parse_expr()?;
        if self.parse_keyword(Keyword::FROM) {
            let trim_what = Some(Box::new(first));
            let expr = Box::new(self.parse_expr()?);
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Trim {
                expr,
                trim_where: None,
                trim_what,
            })
        } else {
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Trim {
                expr: Box::new(first),
                trim_where: None,
                trim_what: None,
            })
        }
    }

    fn parse_overlay_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = Box::new(self.parse_expr()?);
        self.expect_keyword(Keyword::PLACING)?;
        let overlay_what = Box::new(self.parse_expr()?);
        self.expect_keyword(Keyword::FROM)?;
        let overlay_from = Box::new(self.parse_expr()?);
        let overlay_for = if self.parse_keyword(Keyword::FOR) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Overlay {
            expr,
            overlay_what,
            overlay_from,
            overlay_for,
        })
    }

    fn parse_interval_expr(&mut self) -> Result<Expr, ParserError> {
        let value = Box::new(self.parse_subexpr(UNARY_PREC)?);
        let leading_field = self.maybe_parse(|p| p.parse_date_time_field());
        let (leading_precision, fsp_inline) = if leading_field.is_some() && self.consume_token(&Token::LParen) {
            let p1 = self.parse_literal_uint()?;
            let p2 = if self.consume_token(&Token::Comma) {
                Some(self.parse_literal_uint()?)
            } else {
                None
            };
            self.expect_token(&Token::RParen)?;
            (Some(p1), p2)
        } else {
            (None, None)
        };
        let (last_field, fractional_seconds_precision) = if leading_field.is_some() && self.parse_keyword(Keyword::TO) {
            let lf = self.parse_date_time_field()?;
            let prec = if self.consume_token(&Token::LParen) {
                let n = self.parse_literal_uint()?;
                self.expect_token(&Token::RParen)?;
                Some(n)
            } else {
                None
            };
            (Some(lf), prec)
        } else {
            (None, fsp_inline)
        };
        Ok(Expr::Interval(Box::new(Value::Interval {
            value,
            leading_field,
            leading_precision,
            last_field,
            fractional_seconds_precision,
        })))
    }

    fn parse_array_expr(&mut self) -> Result<Expr, ParserError> {
        if self.consume_token(&Token::LBracket) {
            self.parse_array_literal()
        } else if self.consume_token(&Token::LParen) {
            let query = Box::new(self.parse_query()?);
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Subquery(query))
        } else {
            self.expected("[ or ( after ARRAY", self.peek_token())
        }
    }

    fn parse_array_literal(&mut self) -> Result<Expr, ParserError> {
        if self.consume_token(&Token::RBracket) {
            return Ok(Expr::Array(Vec::new()));
        }
        let items = self.parse_comma_separated(|p| p.parse_expr())?;
        self.expect_token(&Token::RBracket)?;
        Ok(Expr::Array(items))
    }

    fn parse_exists_expr(&mut self, negated: bool) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let subquery = Box::new(self.parse_query()?);
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Exists { subquery, negated })
    }

    fn parse_row_tuple(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let exprs = self.parse_comma_separated(|p| p.parse_expr())?;
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Tuple(exprs))
    }

    fn parse_grouping_sets_body(&mut self, ctor: fn(Vec<Vec<Expr>>) -> Expr) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let sets = self.parse_comma_separated(|p| p.parse_tuple_or_single_expr_list())?;
        self.expect_token(&Token::RParen)?;
        Ok(ctor(sets))
    }

    fn parse_tuple_or_single_expr_list(&mut self) -> Result<Vec<Expr>, ParserError> {
        if self.consume_token(&Token::LParen) {
            if self.consume_token(&Token::RParen) {
                return Ok(Vec::new());
            }
            let list = self.parse_comma_separated(|p| p.parse_expr())?;
            self.expect_token(&Token::RParen)?;
            Ok(list)
        } else {
            Ok(vec![self.parse_expr()?])
        }
    }

    fn parse_match_against(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let columns = self.parse_comma_separated(|p| p.parse_identifier())?;
        self.expect_token(&Token::RParen)?;
        self.expect_keyword(Keyword::AGAINST)?;
        self.expect_token(&Token::LParen)?;
        let match_value = self.parse_value()?;
        let opt_search_modifier = if self.parse_keywords(&[Keyword::IN, Keyword::NATURAL, Keyword::LANGUAGE, Keyword::MODE]) {
            Some("IN NATURAL LANGUAGE MODE".to_string())
        } else if self.parse_keywords(&[Keyword::IN, Keyword::BOOLEAN, Keyword::MODE]) {
            Some("IN BOOLEAN MODE".to_string())
        } else if self.parse_keywords(&[Keyword::WITH, Keyword::QUERY, Keyword::EXPANSION]) {
            Some("WITH QUERY EXPANSION".to_string())
        } else {
            None
        };
        self.expect_token(&Token::RParen)?;
        Ok(Expr::MatchAgainst {
            columns,
            match_value,
            opt_search_modifier,
        })
    }

    fn parse_paren_expr(&mut self) -> Result<Expr, ParserError> {
        if self.peek_sub_query_start() {
            let query = Box::new(self.parse_query()?);
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::Subquery(query));
        }
        let first = self.parse_expr()?;
        if self.consume_token(&Token::Comma) {
            let mut exprs = vec![first];
            exprs.push(self.parse_expr()?);
            while self.consume_token(&Token::Comma) {
                exprs.push(self.parse_expr()?);
            }
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::Tuple(exprs));
        }
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Nested(Box::new(first)))
    }

    pub(super) fn parse_value(&mut self) -> Result<Value, ParserError> {
        let tok = self.next_token();
        match tok.token.clone() {
            Token::Word(w) => match w.keyword {
                Some(Keyword::TRUE) => Ok(Value::Boolean(true)),
                Some(Keyword::FALSE) => Ok(Value::Boolean(false)),
                Some(Keyword::NULL) => Ok(Value::Null),
                _ => self.expected("a value", tok),
            },
            Token::Number(v, long) => self.number_to_value(&v, long, tok.span.start),
            Token::SingleQuotedString(s) => Ok(Value::SingleQuotedString(s)),
            Token::DoubleQuotedString(s) => Ok(Value::DoubleQuotedString(s)),
            Token::NationalStringLiteral(s) => Ok(Value::NationalStringLiteral(s)),
            Token::HexStringLiteral(s) => Ok(Value::HexStringLiteral(s)),
            Token::EscapedStringLiteral(s) => Ok(Value::EscapedStringLiteral(s)),
            Token::Placeholder(s) => Ok(Value::Placeholder(s)),
            _ => self.expected("a value", tok),
        }
    }

    #[cfg(feature = "bigdecimal")]
    fn number_to_value(&self, v: &str, long: bool, loc: Location) -> Result<Value, ParserError> {
        v.parse::<bigdecimal::BigDecimal>()
            .map(|n| Value::Number(n, long))
            .map_err(|_| ParserError::new(format!("invalid number literal: {v}"), loc))
    }

    #[cfg(not(feature = "bigdecimal"))]
    fn number_to_value(&self, v: &str, long: bool, _loc: Location) -> Result<Value, ParserError> {
        Ok(Value::Number(v.to_string(), long))
    }

    // --- data types -----------------------------------------------------

    pub(super) fn parse_data_type(&mut self) -> Result<DataType, ParserError> {
        let tok = self.next_token();
        let dt = match tok.token.clone() {
            Token::Word(w) => self.parse_data_type_word(&w)?,
            _ => return self.expected("a data type", tok),
        };
        self.parse_array_suffix(dt)
    }

    fn parse_array_suffix(&mut self, dt: DataType) -> Result<DataType, ParserError> {
        let mut dt = dt;
        loop {
            if self.consume_token(&Token::LBracket) {
                self.expect_token(&Token::RBracket)?;
                dt = DataType::Array(Some(Box::new(dt)));
            } else if self.parse_keyword(Keyword::ARRAY) {
                dt = DataType::Array(Some(Box::new(dt)));
            } else {
                break;
            }
        }
        Ok(dt)
    }

    fn parse_data_type_word(&mut self, w: &Word) -> Result<DataType, ParserError> {
        let name = w.value.to_uppercase();
        Ok(match name.as_str() {
            "BOOLEAN" | "BOOL" => DataType::Boolean,
            "TINYINT" => {
                let l = self.parse_optional_precision()?;
                if self.parse_keyword(Keyword::UNSIGNED) {
                    DataType::UnsignedTinyInt(l)
                } else {
                    DataType::TinyInt(l)
                }
            }
            "SMALLINT" => {
                let l = self.parse_optional_precision()?;
                if self.parse_keyword(Keyword::UNSIGNED) {
                    DataType::UnsignedSmallInt(l)
                } else {
                    DataType::SmallInt(l)
                }
            }
            "INT" | "INTEGER" => {
                let l = self.parse_optional_precision()?;
                let unsigned = self.parse_keyword(Keyword::UNSIGNED);
                match (name.as_str(), unsigned) {
                    ("INT", false) => DataType::Int(l),
                    ("INT", true) => DataType::UnsignedInt(l),
                    (_, false) => DataType::Integer(l),
                    (_, true) => DataType::UnsignedInteger(l),
                }
            }
            "BIGINT" => {
                let l = self.parse_optional_precision()?;
                if self.parse_keyword(Keyword::UNSIGNED) {
                    DataType::UnsignedBigInt(l)
                } else {
                    DataType::BigInt(l)
                }
            }
            "FLOAT" => DataType::Float(self.parse_optional_precision()?),
            "REAL" => DataType::Real,
            "DOUBLE" => {
                if self.parse_keyword(Keyword::PRECISION) {
                    DataType::DoublePrecision
                } else {
                    DataType::Double
                }
            }
            "DECIMAL" | "DEC" => DataType::Decimal(self.parse_optional_precision_scale()?),
            "NUMERIC" => DataType::Numeric(self.parse_optional_precision_scale()?),
            "CHAR" | "CHARACTER" => {
                if self.parse_keyword(Keyword::VARYING) {
                    DataType::Varchar(self.parse_optional_character_length()?)
                } else {
                    DataType::Char(self.parse_optional_character_length()?)
                }
            }
            "VARCHAR" => DataType::Varchar(self.parse_optional_character_length()?),
            "NVARCHAR" => DataType::Nvarchar(self.parse_optional_precision()?),
            "TEXT" => DataType::Text,
            "MEDIUMTEXT" => DataType::MediumText,
            "LONGTEXT" => DataType::LongText,
            "STRING" => DataType::String(self.parse_optional_precision()?),
            "BYTEA" => DataType::Bytea,
            "BINARY" => DataType::Binary(self.parse_optional_precision()?),
            "VARBINARY" => DataType::Varbinary(self.parse_optional_precision()?),
            "BLOB" => DataType::Blob(self.parse_optional_precision()?),
            "DATE" => DataType::Date,
            "TIME" => {
                let l = self.parse_optional_precision()?;
                let tz = self.parse_timezone_info()?;
                DataType::Time(l, tz)
            }
            "DATETIME" => DataType::Datetime(self.parse_optional_precision()?),
            "TIMESTAMP" => {
                let l = self.parse_optional_precision()?;
                let tz = self.parse_timezone_info()?;
                DataType::Timestamp(l, tz)
            }
            "TIMESTAMPTZ" => DataType::Timestamp(self.parse_optional_precision()?, TimezoneInfo::Tz),
            "INTERVAL" => DataType::Interval,
            "JSON" => DataType::JSON,
            "JSONB" => DataType::JsonB,
            "REGCLASS" => DataType::Regclass,
            "UUID" => DataType::Uuid,
            "ARRAY" => {
                if self.consume_token(&Token::LParen) {
                    let inner = self.parse_data_type()?;
                    self.expect_token(&Token::RParen)?;
                    DataType::Array(Some(Box::new(inner)))
                } else {
                    DataType::Array(None)
                }
            }
            "NULLABLE" => {
                self.expect_token(&Token::LParen)?;
                let inner = self.parse_data_type()?;
                self.expect_token(&Token::RParen)?;
                DataType::Nullable(Box::new(inner))
            }
            "LOWCARDINALITY" => {
                self.expect_token(&Token::LParen)?;
                let inner = self.parse_data_type()?;
                self.expect_token(&Token::RParen)?;
                DataType::LowCardinality(Box::new(inner))
            }
            "FIXEDSTRING" => {
                self.expect_token(&Token::LParen)?;
                let n = self.parse_literal_uint()?;
                self.expect_token(&Token::RParen)?;
                DataType::FixedString(n)
            }
            "ENUM" => {
                self.expect_token(&Token::LParen)?;
                let values = self.parse_comma_separated(|p| p.parse_enum_value())?;
                self.expect_token(&Token::RParen)?;
                DataType::Enum(values)
            }
            "STRUCT" => {
                self.expect_token(&Token::Lt)?;
                let fields = self.parse_comma_separated(|p| p.parse_struct_field())?;
                self.expect_token(&Token::Gt)?;
                DataType::Struct(fields)
            }
            "MAP" => {
                self.expect_token(&Token::Lt)?;
                let k = self.parse_data_type()?;
                self.expect_token(&Token::Comma)?;
                let v = self.parse_data_type()?;
                self.expect_token(&Token::Gt)?;
                DataType::Map(Box::new(k), Box::new(v))
            }
            _ => {
                let mut idents = vec![Ident {
                    value: w.value.clone(),
                    quote_style: w.quote_style,
                }];
                while self.consume_token(&Token::Period) {
                    idents.push(self.parse_identifier()?);
                }
                let modifiers = if self.consume_token(&Token::LParen) {
                    let mods = self.parse_comma_separated(|p| p.parse_data_type_modifier())?;
                    self.expect_token(&Token::RParen)?;
                    mods
                } else {
                    Vec::new()
                };
                DataType::Custom(ObjectName(idents), modifiers)
            }
        })
    }

    fn parse_data_type_modifier(&mut self) -> Result<String, ParserError> {
        let tok = self.next_token();
        Ok(match tok.token {
            Token::Word(w) => w.value,
            Token::Number(v, _) => v,
            Token::SingleQuotedString(s) => s,
            _ => return self.expected("a type modifier", tok),
        })
    }

    fn parse_enum_value(&mut self) -> Result<(String, Option<i64>), ParserError> {
        let tok = self.next_token();
        let name = match tok.token {
            Token::SingleQuotedString(s) => s,
            _ => return self.expected("a quoted enum value", tok),
        };
        let value = if self.consume_token(&Token::Eq) {
            let t = self.next_token();
            match t.token {
                Token::Number(v, _) => Some(
                    v.parse::<i64>()
                        .map_err(|_| ParserError::new(format!("invalid enum value: {v}"), t.span.start))?,
                ),
                _ => return self.expected("a number", t),
            }
        } else {
            None
        };
        Ok((name, value))
    }

    fn parse_struct_field(&mut self) -> Result<StructField, ParserError> {
        let name = self.maybe_parse(|p| {
            let id = p.parse_identifier()?;
            match &p.peek_token().token {
                Token::Comma | Token::Gt => Err(ParserError::new("unnamed struct field".into(), p.peek_location())),
                _ => Ok(id.value),
            }
        });
        let data_type = self.parse_data_type()?;
        Ok(StructField { name, data_type })
    }

    fn parse_optional_precision(&mut self) -> Result<Option<u64>, ParserError> {
        if self.consume_token(&Token::LParen) {
            let n = self.parse_literal_uint()?;
            self.expect_token(&Token::RParen)?;
            Ok(Some(n))
        } else {
            Ok(None)
        }
    }

    fn parse_optional_precision_scale(&mut self) -> Result<Option<(u64, Option<u64>)>, ParserError> {
        if self.consume_token(&Token::LParen) {
            let p = self.parse_literal_uint()?;
            let s = if self.consume_token(&Token::Comma) {
                Some(self.parse_literal_uint()?)
            } else {
                None
            };
            self.expect_token(&Token::RParen)?;
            Ok(Some((p, s)))
        } else {
            Ok(None)
        }
    }

    fn parse_optional_character_length(&mut self) -> Result<Option<CharacterLength>, ParserError> {
        if self.consume_token(&Token::LParen) {
            let length = self.parse_literal_uint()?;
            let unit = if self.parse_keyword(Keyword::CHARACTERS) {
                Some(CharLengthUnit::Characters)
            } else if self.parse_keyword(Keyword::OCTETS) {
                Some(CharLengthUnit::Octets)
            } else {
                None
            };
            self.expect_token(&Token::RParen)?;
            Ok(Some(CharacterLength { length, unit }))
        } else {
            Ok(None)
        }
    }

    fn parse_timezone_info(&mut self) -> Result<TimezoneInfo, ParserError> {
        if self.parse_keyword(Keyword::WITH) {
            self.expect_keywords(&[Keyword::TIME, Keyword::ZONE])?;
            Ok(TimezoneInfo::WithTimeZone)
        } else if self.parse_keyword(Keyword::WITHOUT) {
            self.expect_keywords(&[Keyword::TIME, Keyword::ZONE])?;
            Ok(TimezoneInfo::WithoutTimeZone)
        } else {
            Ok(TimezoneInfo::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    fn parse_expr(sql: &str) -> Expr {
        let dialect = GenericDialect {};
        let mut parser = Parser::new(&dialect).try_with_sql(sql).unwrap();
        parser.parse_expr().unwrap_or_else(|e| panic!("failed to parse {sql:?}: {e}"))
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let expr = parse_expr("a OR b AND c");
        match expr {
            Expr::BinaryOp { op: BinaryOperator::Or, right, .. } => {
                assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::And, .. }));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn caret_is_right_associative() {
        let expr = parse_expr("a ^ b ^ c");
        match expr {
            Expr::BinaryOp { op: BinaryOperator::PGExp, left, right } => {
                assert!(matches!(*left, Expr::Identifier(_)));
                assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::PGExp, .. }));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse_expr("1 + 2 * 3");
        match expr {
            Expr::BinaryOp { op: BinaryOperator::Plus, right, .. } => {
                assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Multiply, .. }));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn not_between_sets_negated_flag() {
        let expr = parse_expr("a NOT BETWEEN 1 AND 10");
        match expr {
            Expr::Between { negated, .. } => assert!(negated),
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn double_colon_cast_binds_as_postfix() {
        let expr = parse_expr("a::INT + 1");
        match expr {
            Expr::BinaryOp { left, op: BinaryOperator::Plus, .. } => {
                assert!(matches!(*left, Expr::Cast { kind: CastKind::DoubleColon, .. }));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn cast_as_int_round_trips() {
        let dialect = GenericDialect {};
        let expr = parse_expr("CAST(a AS INT)");
        assert_eq!(expr.sql(&dialect).unwrap(), "CAST(a AS INT)");
    }
}
