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

//! `SELECT`/`FROM`/`JOIN` and the `WITH`/set-operation scaffolding around
//! them. `INTERSECT` binds tighter than `UNION`/`EXCEPT` (precedence 20 vs
//! 10 below), all three left-associative.

use super::Parser;
use crate::ast::*;
use crate::error::ParserError;
use crate::keywords::{Keyword, RESERVED_FOR_COLUMN_ALIAS, RESERVED_FOR_TABLE_ALIAS};
use crate::tokenizer::Token;

enum JoinKind {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
    LeftSemi,
    RightSemi,
    LeftAnti,
    RightAnti,
    AsOf,
    Cross,
    CrossApply,
    OuterApply,
}

impl<'a> Parser<'a> {
    pub(super) fn parse_query(&mut self) -> Result<Query, ParserError> {
        let loc = self.peek_location();
        let _guard = self.depth_guard(loc)?;

        let with = if self.parse_keyword(Keyword::WITH) {
            let recursive = self.parse_keyword(Keyword::RECURSIVE);
            let cte_tables = self.parse_comma_separated(|p| p.parse_cte())?;
            Some(With { recursive, cte_tables })
        } else {
            None
        };

        let body = Box::new(self.parse_query_body(0)?);

        let order_by = if self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
            self.parse_comma_separated(|p| p.parse_order_by_expr())?
        } else {
            Vec::new()
        };

        let mut limit = None;
        let mut offset = None;
        let mut limit_seen = false;
        let mut offset_seen = false;
        loop {
            if !limit_seen && self.parse_keyword(Keyword::LIMIT) {
                limit_seen = true;
                limit = if self.parse_keyword(Keyword::ALL) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
            } else if !offset_seen && self.parse_keyword(Keyword::OFFSET) {
                offset_seen = true;
                offset = Some(self.parse_offset_clause()?);
            } else {
                break;
            }
        }

        let fetch = if self.parse_keyword(Keyword::FETCH) {
            Some(self.parse_fetch_clause()?)
        } else {
            None
        };

        let lock = if self.parse_keyword(Keyword::FOR) {
            Some(self.parse_lock_type()?)
        } else {
            None
        };

        Ok(Query {
            with,
            body,
            order_by,
            limit,
            offset,
            fetch,
            lock,
        })
    }

    fn parse_cte(&mut self) -> Result<Cte, ParserError> {
        let name = self.parse_identifier()?;
        let columns = if self.consume_token(&Token::LParen) {
            let cols = self.parse_comma_separated(|p| p.parse_identifier())?;
            self.expect_token(&Token::RParen)?;
            cols
        } else {
            Vec::new()
        };
        let alias = TableAlias { name, columns };
        self.expect_keyword(Keyword::AS)?;
        self.expect_token(&Token::LParen)?;
        let query = self.parse_query()?;
        self.expect_token(&Token::RParen)?;
        let from = if self.parse_keyword(Keyword::FROM) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        Ok(Cte { alias, query, from })
    }

    /// Precedence-climbing fold of `SELECT`/`VALUES`/`TABLE`/parenthesized
    /// query terms over `UNION`/`EXCEPT` (10) and `INTERSECT` (20).
    fn parse_query_body(&mut self, precedence: u8) -> Result<SetExpr, ParserError> {
        let loc = self.peek_location();
        let _guard = self.depth_guard(loc)?;

        let mut expr = if self.parse_keyword(Keyword::SELECT) {
            SetExpr::Select(Box::new(self.parse_select()?))
        } else if self.consume_token(&Token::LParen) {
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RParen)?;
            SetExpr::Query(Box::new(subquery))
        } else if self.parse_keyword(Keyword::VALUES) {
            SetExpr::Values(self.parse_values()?)
        } else if self.parse_keyword(Keyword::TABLE) {
            SetExpr::Table(Box::new(self.parse_object_name()?))
        } else {
            return self.expected("SELECT, VALUES, or a subquery in the query body", self.peek_token());
        };

        loop {
            let op = match &self.peek_token().token {
                Token::Word(w) if w.keyword == Some(Keyword::UNION) => SetOperator::Union,
                Token::Word(w) if w.keyword == Some(Keyword::EXCEPT) => SetOperator::Except,
                Token::Word(w) if w.keyword == Some(Keyword::INTERSECT) => SetOperator::Intersect,
                _ => break,
            };
            let next_precedence = match op {
                SetOperator::Union | SetOperator::Except => 10,
                SetOperator::Intersect => 20,
            };
            if precedence >= next_precedence {
                break;
            }
            self.next_token();
            let all = self.parse_keyword(Keyword::ALL);
            if !all {
                self.parse_keyword(Keyword::DISTINCT);
            }
            let right = self.parse_query_body(next_precedence)?;
            expr = SetExpr::SetOperation {
                op,
                all,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn parse_select(&mut self) -> Result<Select, ParserError> {
        let distinct = self.parse_distinct()?;
        let top = if self.parse_keyword(Keyword::TOP) {
            Some(self.parse_top()?)
        } else {
            None
        };
        let projection = self.parse_comma_separated(|p| p.parse_select_item())?;
        let into = if self.parse_keyword(Keyword::INTO) {
            Some(self.parse_select_into()?)
        } else {
            None
        };
        let from = if self.parse_keyword(Keyword::FROM) {
            self.parse_comma_separated(|p| p.parse_table_with_joins())?
        } else {
            Vec::new()
        };

        let mut lateral_views = Vec::new();
        while self.parse_keywords(&[Keyword::LATERAL, Keyword::VIEW]) {
            let outer = self.parse_keyword(Keyword::OUTER);
            let lateral_view = self.parse_expr()?;
            let lateral_view_name = self.parse_object_name()?;
            let lateral_col_alias = if self.parse_keyword(Keyword::AS) {
                self.parse_comma_separated(|p| p.parse_identifier())?
            } else {
                Vec::new()
            };
            lateral_views.push(LateralView {
                lateral_view,
                lateral_view_name,
                lateral_col_alias,
                outer,
            });
        }

        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let group_by = if self.parse_keywords(&[Keyword::GROUP, Keyword::BY]) {
            self.parse_comma_separated(|p| p.parse_expr())?
        } else {
            Vec::new()
        };
        let having = if self.parse_keyword(Keyword::HAVING) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let named_window = if self.parse_keyword(Keyword::WINDOW) {
            self.parse_comma_separated(|p| p.parse_named_window())?
        } else {
            Vec::new()
        };
        let qualify = if self.parse_keyword(Keyword::QUALIFY) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(Select {
            distinct,
            top,
            projection,
            into,
            from,
            lateral_views,
            selection,
            group_by,
            having,
            qualify,
            named_window,
        })
    }

    fn parse_distinct(&mut self) -> Result<Option<Distinct>, ParserError> {
        if self.parse_keyword(Keyword::DISTINCT) {
            if self.parse_keyword(Keyword::ON) {
                self.expect_token(&Token::LParen)?;
                let cols = self.parse_comma_separated(|p| p.parse_expr())?;
                self.expect_token(&Token::RParen)?;
                Ok(Some(Distinct::On(cols)))
            } else {
                Ok(Some(Distinct::Distinct))
            }
        } else {
            self.parse_keyword(Keyword::ALL);
            Ok(None)
        }
    }

    fn parse_top(&mut self) -> Result<Top, ParserError> {
        let quantity = if self.consume_token(&Token::LParen) {
            let e = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Some(e)
        } else {
            Some(self.parse_expr()?)
        };
        let percent = self.parse_keyword(Keyword::PERCENT);
        let with_ties = self.parse_keywords(&[Keyword::WITH, Keyword::TIES]);
        Ok(Top {
            with_ties,
            percent,
            quantity,
        })
    }

    pub(super) fn parse_select_item(&mut self) -> Result<SelectItem, ParserError> {
        if self.consume_token(&Token::Mul) {
            return Ok(SelectItem::Wildcard);
        }
        let expr = self.parse_expr()?;
        if let Expr::QualifiedWildcard(name) = expr {
            return Ok(SelectItem::QualifiedWildcard(name));
        }
        match self.parse_optional_select_alias()? {
            Some(alias) => Ok(SelectItem::ExprWithAlias { expr, alias }),
            None => Ok(SelectItem::UnnamedExpr(expr)),
        }
    }

    fn parse_optional_select_alias(&mut self) -> Result<Option<Ident>, ParserError> {
        if self.parse_keyword(Keyword::AS) {
            return Ok(Some(self.parse_identifier()?));
        }
        if let Token::Word(w) = &self.peek_token().token {
            let blocked = w
                .keyword
                .map(|k| RESERVED_FOR_COLUMN_ALIAS.contains(&k))
                .unwrap_or(false);
            if !blocked {
                return Ok(Some(self.parse_identifier()?));
            }
        }
        Ok(None)
    }

    fn parse_select_into(&mut self) -> Result<SelectInto, ParserError> {
        let temporary = self.parse_keyword(Keyword::TEMPORARY) || self.parse_keyword(Keyword::TEMP);
        let unlogged = self.parse_keyword(Keyword::UNLOGGED);
        let table = self.parse_keyword(Keyword::TABLE);
        let name = self.parse_object_name()?;
        Ok(SelectInto {
            temporary,
            unlogged,
            table,
            name,
        })
    }

    fn parse_named_window(&mut self) -> Result<NamedWindowDefinition, ParserError> {
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::AS)?;
        self.expect_token(&Token::LParen)?;
        let spec = self.parse_window_spec()?;
        self.expect_token(&Token::RParen)?;
        Ok(NamedWindowDefinition(name, spec))
    }

    fn parse_values(&mut self) -> Result<Values, ParserError> {
        let rows = self.parse_comma_separated(|p| p.parse_parenthesized_comma_separated(|p2| p2.parse_expr()))?;
        Ok(Values(rows))
    }

    fn parse_offset_clause(&mut self) -> Result<Offset, ParserError> {
        let value = self.parse_expr()?;
        let rows = if self.parse_keyword(Keyword::ROW) {
            OffsetRows::Row
        } else if self.parse_keyword(Keyword::ROWS) {
            OffsetRows::Rows
        } else {
            OffsetRows::None
        };
        Ok(Offset { value, rows })
    }

    fn parse_fetch_clause(&mut self) -> Result<Fetch, ParserError> {
        self.expect_one_of_keywords(&[Keyword::FIRST, Keyword::NEXT])?;
        let quantity = if matches!(
            &self.peek_token().token,
            Token::Word(w) if matches!(w.keyword, Some(Keyword::ROW) | Some(Keyword::ROWS))
        ) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let percent = self.parse_keyword(Keyword::PERCENT);
        self.expect_one_of_keywords(&[Keyword::ROW, Keyword::ROWS])?;
        let with_ties = if self.parse_keyword(Keyword::ONLY) {
            false
        } else {
            self.expect_keywords(&[Keyword::WITH, Keyword::TIES])?;
            true
        };
        Ok(Fetch {
            with_ties,
            percent,
            quantity,
        })
    }

    fn parse_lock_type(&mut self) -> Result<LockType, ParserError> {
        if self.parse_keyword(Keyword::UPDATE) {
            Ok(LockType::Update)
        } else if self.parse_keyword(Keyword::SHARE) {
            Ok(LockType::Share)
        } else {
            self.expected("UPDATE or SHARE", self.peek_token())
        }
    }

    pub(super) fn parse_table_with_joins(&mut self) -> Result<TableWithJoins, ParserError> {
        let relation = self.parse_table_factor()?;
        let mut joins = Vec::new();
        while let Some((natural, kind)) = self.parse_join_kind()? {
            let relation_factor = self.parse_table_factor()?;
            let join_operator = match kind {
                JoinKind::Cross => JoinOperator::CrossJoin,
                JoinKind::CrossApply => JoinOperator::CrossApply,
                JoinKind::OuterApply => JoinOperator::OuterApply,
                JoinKind::AsOf => {
                    self.expect_word_matching("MATCH_CONDITION")?;
                    self.expect_token(&Token::LParen)?;
                    let match_condition = self.parse_expr()?;
                    self.expect_token(&Token::RParen)?;
                    let constraint = self.parse_join_constraint(natural)?;
                    JoinOperator::AsOf {
                        match_condition,
                        constraint,
                    }
                }
                JoinKind::Inner => JoinOperator::Inner(self.parse_join_constraint(natural)?),
                JoinKind::LeftOuter => JoinOperator::LeftOuter(self.parse_join_constraint(natural)?),
                JoinKind::RightOuter => JoinOperator::RightOuter(self.parse_join_constraint(natural)?),
                JoinKind::FullOuter => JoinOperator::FullOuter(self.parse_join_constraint(natural)?),
                JoinKind::LeftSemi => JoinOperator::LeftSemi(self.parse_join_constraint(natural)?),
                JoinKind::RightSemi => JoinOperator::RightSemi(self.parse_join_constraint(natural)?),
                JoinKind::LeftAnti => JoinOperator::LeftAnti(self.parse_join_constraint(natural)?),
                JoinKind::RightAnti => JoinOperator::RightAnti(self.parse_join_constraint(natural)?),
            };
            joins.push(Join {
                relation: relation_factor,
                join_operator,
            });
        }
        Ok(TableWithJoins { relation, joins })
    }

    fn parse_join_kind(&mut self) -> Result<Option<(bool, JoinKind)>, ParserError> {
        if self.parse_keyword(Keyword::CROSS) {
            if self.parse_keyword(Keyword::JOIN) {
                return Ok(Some((false, JoinKind::Cross)));
            } else if self.parse_keyword(Keyword::APPLY) {
                return Ok(Some((false, JoinKind::CrossApply)));
            }
            return self.expected("JOIN or APPLY after CROSS", self.peek_token());
        }
        if self.parse_keyword(Keyword::OUTER) {
            self.expect_keyword(Keyword::APPLY)?;
            return Ok(Some((false, JoinKind::OuterApply)));
        }
        let natural = self.parse_keyword(Keyword::NATURAL);
        if self.parse_keyword(Keyword::INNER) {
            self.expect_keyword(Keyword::JOIN)?;
            return Ok(Some((natural, JoinKind::Inner)));
        }
        if self.parse_keyword(Keyword::LEFT) {
            let semi = self.parse_keyword(Keyword::SEMI);
            let anti = !semi && self.parse_keyword(Keyword::ANTI);
            self.parse_keyword(Keyword::OUTER);
            self.expect_keyword(Keyword::JOIN)?;
            let kind = if semi {
                JoinKind::LeftSemi
            } else if anti {
                JoinKind::LeftAnti
            } else {
                JoinKind::LeftOuter
            };
            return Ok(Some((natural, kind)));
        }
        if self.parse_keyword(Keyword::RIGHT) {
            let semi = self.parse_keyword(Keyword::SEMI);
            let anti = !semi && self.parse_keyword(Keyword::ANTI);
            self.parse_keyword(Keyword::OUTER);
            self.expect_keyword(Keyword::JOIN)?;
            let kind = if semi {
                JoinKind::RightSemi
            } else if anti {
                JoinKind::RightAnti
            } else {
                JoinKind::RightOuter
            };
            return Ok(Some((natural, kind)));
        }
        if self.parse_keyword(Keyword::FULL) {
            self.parse_keyword(Keyword::OUTER);
            self.expect_keyword(Keyword::JOIN)?;
            return Ok(Some((natural, JoinKind::FullOuter)));
        }
        if self.dialect().supports_asof_join() && self.parse_keyword(Keyword::ASOF) {
            self.expect_keyword(Keyword::JOIN)?;
            return Ok(Some((natural, JoinKind::AsOf)));
        }
        if self.parse_keyword(Keyword::JOIN) {
            return Ok(Some((natural, JoinKind::Inner)));
        }
        if natural {
            return self.expected("a join type after NATURAL", self.peek_token());
        }
        Ok(None)
    }

    fn parse_join_constraint(&mut self, natural: bool) -> Result<JoinConstraint, ParserError> {
        if natural {
            return Ok(JoinConstraint::Natural);
        }
        if self.parse_keyword(Keyword::ON) {
            Ok(JoinConstraint::On(self.parse_expr()?))
        } else if self.parse_keyword(Keyword::USING) {
            let cols = self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?;
            Ok(JoinConstraint::Using(cols))
        } else {
            Ok(JoinConstraint::None)
        }
    }

    pub(super) fn parse_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        if self.parse_keyword(Keyword::LATERAL) {
            self.expect_token(&Token::LParen)?;
            let subquery = Box::new(self.parse_query()?);
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::Derived {
                lateral: true,
                subquery,
                alias,
            });
        }
        if self.parse_keyword(Keyword::UNNEST) {
            self.expect_token(&Token::LParen)?;
            let array_expr = Box::new(self.parse_expr()?);
            self.expect_token(&Token::RParen)?;
            let with_offset = self.parse_keywords(&[Keyword::WITH, Keyword::OFFSET]);
            let with_offset_alias = if with_offset && self.parse_keyword(Keyword::AS) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::UNNEST {
                alias,
                array_expr,
                with_offset,
                with_offset_alias,
            });
        }
        if matches!(&self.peek_token().token, Token::Word(w) if w.keyword == Some(Keyword::TABLE))
            && self.peek_nth_token(1).token == Token::LParen
        {
            self.next_token();
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::TableFunction { expr, alias });
        }
        if self.consume_token(&Token::LParen) {
            if self.peek_sub_query_start() {
                let subquery = Box::new(self.parse_query()?);
                self.expect_token(&Token::RParen)?;
                let alias = self.parse_optional_table_alias()?;
                return Ok(TableFactor::Derived {
                    lateral: false,
                    subquery,
                    alias,
                });
            }
            let table_and_joins = self.parse_table_with_joins()?;
            self.expect_token(&Token::RParen)?;
            return Ok(TableFactor::NestedJoin(Box::new(table_and_joins)));
        }

        let name = self.parse_object_name()?;
        let args = if self.consume_token(&Token::LParen) {
            if self.peek_token().token == Token::RParen {
                self.next_token();
                Some(Vec::new())
            } else {
                let args = self.parse_comma_separated(|p| p.parse_function_arg())?;
                self.expect_token(&Token::RParen)?;
                Some(args)
            }
        } else {
            None
        };
        let with_hints = self
            .maybe_parse(|p| {
                p.expect_keyword(Keyword::WITH)?;
                p.parse_parenthesized_comma_separated(|p2| p2.parse_expr())
            })
            .unwrap_or_default();
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::Table {
            name,
            alias,
            args,
            with_hints,
        })
    }

    fn parse_optional_table_alias(&mut self) -> Result<Option<TableAlias>, ParserError> {
        let name = if self.parse_keyword(Keyword::AS) {
            Some(self.parse_identifier()?)
        } else if let Token::Word(w) = &self.peek_token().token {
            let blocked = w
                .keyword
                .map(|k| RESERVED_FOR_TABLE_ALIAS.contains(&k))
                .unwrap_or(false);
            if blocked {
                None
            } else {
                Some(self.parse_identifier()?)
            }
        } else {
            None
        };
        match name {
            Some(name) => {
                let columns = if self.consume_token(&Token::LParen) {
                    let cols = self.parse_comma_separated(|p| p.parse_identifier())?;
                    self.expect_token(&Token::RParen)?;
                    cols
                } else {
                    Vec::new()
                };
                Ok(Some(TableAlias { name, columns }))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    fn parse_query(sql: &str) -> Query {
        let dialect = GenericDialect {};
        let mut parser = Parser::new(&dialect).try_with_sql(sql).unwrap();
        parser.parse_query().unwrap_or_else(|e| panic!("failed to parse {sql:?}: {e}"))
    }

    #[test]
    fn intersect_binds_tighter_than_union() {
        let query = parse_query("SELECT 1 UNION SELECT 2 INTERSECT SELECT 3");
        match *query.body {
            SetExpr::SetOperation { op: SetOperator::Union, right, .. } => {
                assert!(matches!(
                    *right,
                    SetExpr::SetOperation { op: SetOperator::Intersect, .. }
                ));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn left_semi_join_round_trips() {
        let dialect = GenericDialect {};
        let query = parse_query("SELECT * FROM a LEFT SEMI JOIN b ON a.id = b.id");
        assert_eq!(
            query.sql(&dialect).unwrap(),
            "SELECT * FROM a LEFT SEMI JOIN b ON a.id = b.id"
        );
    }

    #[test]
    fn cte_with_recursive_parses() {
        let query = parse_query("WITH RECURSIVE cte AS (SELECT 1) SELECT * FROM cte");
        let with = query.with.unwrap();
        assert!(with.recursive);
        assert_eq!(with.cte_tables.len(), 1);
    }

    #[test]
    fn fetch_first_with_ties_parses() {
        let query = parse_query("SELECT * FROM t ORDER BY a FETCH FIRST 3 ROWS WITH TIES");
        let fetch = query.fetch.unwrap();
        assert!(fetch.with_ties);
    }

    #[test]
    fn table_alias_not_stolen_by_reserved_word() {
        let query = parse_query("SELECT a FROM t WHERE a = 1");
        assert!(query
            .body
            .sql(&GenericDialect {})
            .unwrap()
            .contains("FROM t"));
    }
}
