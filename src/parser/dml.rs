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

//! `INSERT`/`UPDATE`/`DELETE`/`MERGE`/`COPY` parsing.

use super::Parser;
use crate::ast::*;
use crate::error::ParserError;
use crate::keywords::Keyword;
use crate::tokenizer::Token;

impl<'a> Parser<'a> {
    pub(super) fn parse_insert(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::INSERT)?;
        let or = if self.parse_keyword(Keyword::OR) {
            if self.parse_keyword(Keyword::ABORT) {
                Some(SqliteOnConflict::Abort)
            } else if self.parse_keyword(Keyword::FAIL) {
                Some(SqliteOnConflict::Fail)
            } else if self.parse_keyword(Keyword::IGNORE) {
                Some(SqliteOnConflict::Ignore)
            } else if self.parse_keyword(Keyword::REPLACE) {
                Some(SqliteOnConflict::Replace)
            } else if self.parse_keyword(Keyword::ROLLBACK) {
                Some(SqliteOnConflict::Rollback)
            } else {
                return self.expected("ABORT, FAIL, IGNORE, REPLACE, or ROLLBACK after OR", self.peek_token());
            }
        } else {
            None
        };
        let overwrite = self.parse_keyword(Keyword::OVERWRITE);
        let table = if self.parse_keyword(Keyword::INTO) {
            false
        } else {
            self.expect_keyword(Keyword::TABLE)?;
            true
        };
        let table_name = self.parse_object_name()?;
        let columns = if self.peek_token().token == Token::LParen {
            self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?
        } else {
            Vec::new()
        };
        let partitioned = if self.parse_keyword(Keyword::PARTITION) {
            self.parse_parenthesized_comma_separated(|p| p.parse_expr())?
        } else {
            Vec::new()
        };
        let after_columns = if !partitioned.is_empty() && self.peek_token().token == Token::LParen {
            self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?
        } else {
            Vec::new()
        };
        let default_values = self.parse_keywords(&[Keyword::DEFAULT, Keyword::VALUES]);
        let source = if default_values {
            None
        } else {
            Some(Box::new(self.parse_query()?))
        };
        let on = if !default_values && self.parse_keywords(&[Keyword::ON, Keyword::DUPLICATE, Keyword::KEY, Keyword::UPDATE]) {
            let assignments = self.parse_comma_separated(|p| p.parse_assignment())?;
            Some(OnInsert::DuplicateKeyUpdate(assignments))
        } else if !default_values && self.parse_keyword(Keyword::ON) {
            self.expect_keyword(Keyword::CONFLICT)?;
            let conflict_columns = if self.peek_token().token == Token::LParen {
                self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?
            } else {
                Vec::new()
            };
            self.expect_keyword(Keyword::DO)?;
            let action = if self.parse_keyword(Keyword::NOTHING) {
                OnConflictAction::DoNothing
            } else {
                self.expect_keyword(Keyword::UPDATE)?;
                self.expect_keyword(Keyword::SET)?;
                let assignments = self.parse_comma_separated(|p| p.parse_assignment())?;
                let selection = if self.parse_keyword(Keyword::WHERE) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                OnConflictAction::DoUpdate { assignments, selection }
            };
            Some(OnInsert::OnConflict {
                columns: conflict_columns,
                action,
            })
        } else {
            None
        };
        let returning = if self.parse_keyword(Keyword::RETURNING) {
            self.parse_comma_separated(|p| p.parse_select_item())?
        } else {
            Vec::new()
        };
        Ok(Statement::Insert(Insert {
            or,
            table_name,
            columns,
            overwrite,
            source,
            default_values,
            partitioned,
            after_columns,
            table,
            on,
            returning,
        }))
    }

    fn parse_assignment(&mut self) -> Result<Assignment, ParserError> {
        let id = self.parse_comma_separated_period(|p| p.parse_identifier())?;
        self.expect_token(&Token::Eq)?;
        let value = self.parse_expr()?;
        Ok(Assignment { id, value })
    }

    fn parse_comma_separated_period<T, F>(&mut self, mut f: F) -> Result<Vec<T>, ParserError>
    where
        F: FnMut(&mut Self) -> Result<T, ParserError>,
    {
        let mut parts = vec![f(self)?];
        while self.consume_token(&Token::Period) {
            parts.push(f(self)?);
        }
        Ok(parts)
    }

    pub(super) fn parse_update(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::UPDATE)?;
        let table = self.parse_table_with_joins()?;
        self.expect_keyword(Keyword::SET)?;
        let assignments = self.parse_comma_separated(|p| p.parse_assignment())?;
        let from = if self.parse_keyword(Keyword::FROM) {
            Some(self.parse_table_with_joins()?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = if self.parse_keyword(Keyword::RETURNING) {
            self.parse_comma_separated(|p| p.parse_select_item())?
        } else {
            Vec::new()
        };
        Ok(Statement::Update(Update {
            table,
            assignments,
            from,
            selection,
            returning,
        }))
    }

    pub(super) fn parse_delete(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::DELETE)?;
        self.expect_keyword(Keyword::FROM)?;
        let table_name = self.parse_table_factor()?;
        let using = if self.parse_keyword(Keyword::USING) {
            Some(self.parse_table_factor()?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = if self.parse_keyword(Keyword::RETURNING) {
            self.parse_comma_separated(|p| p.parse_select_item())?
        } else {
            Vec::new()
        };
        Ok(Statement::Delete(Delete {
            table_name,
            using,
            selection,
            returning,
        }))
    }

    pub(super) fn parse_merge(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::MERGE)?;
        let into = self.parse_keyword(Keyword::INTO);
        let table = self.parse_table_factor()?;
        self.expect_keyword(Keyword::USING)?;
        let source = self.parse_table_factor()?;
        self.expect_keyword(Keyword::ON)?;
        let on = Box::new(self.parse_expr()?);
        let mut clauses = Vec::new();
        while self.parse_keyword(Keyword::WHEN) {
            clauses.push(self.parse_merge_clause()?);
        }
        Ok(Statement::Merge(Merge {
            into,
            table,
            source,
            on,
            clauses,
        }))
    }

    fn parse_merge_clause(&mut self) -> Result<MergeClause, ParserError> {
        let not_matched = self.parse_keyword(Keyword::NOT);
        self.expect_keyword(Keyword::MATCHED)?;
        let clause_kind = if not_matched && self.parse_keywords(&[Keyword::BY, Keyword::TARGET]) {
            MergeClauseKind::NotMatchedByTarget
        } else if not_matched && self.parse_keywords(&[Keyword::BY, Keyword::SOURCE]) {
            MergeClauseKind::NotMatchedBySource
        } else if not_matched {
            MergeClauseKind::NotMatched
        } else {
            MergeClauseKind::Matched
        };
        let predicate = if self.parse_keyword(Keyword::AND) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::THEN)?;
        let action = if self.parse_keyword(Keyword::UPDATE) {
            self.expect_keyword(Keyword::SET)?;
            let assignments = self.parse_comma_separated(|p| p.parse_assignment())?;
            MergeAction::Update { assignments }
        } else if self.parse_keyword(Keyword::DELETE) {
            MergeAction::Delete
        } else {
            self.expect_keyword(Keyword::INSERT)?;
            let columns = if self.peek_token().token == Token::LParen {
                self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?
            } else {
                Vec::new()
            };
            let values = if self.parse_keyword(Keyword::VALUES) {
                let exprs = self.parse_parenthesized_comma_separated(|p| p.parse_expr())?;
                MergeInsertValues::Values(exprs)
            } else {
                self.expect_keyword(Keyword::ROW)?;
                MergeInsertValues::Row
            };
            MergeAction::Insert { columns, values }
        };
        Ok(MergeClause {
            clause_kind,
            predicate,
            action,
        })
    }

    pub(super) fn parse_copy(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::COPY)?;
        let source = if self.consume_token(&Token::LParen) {
            let query = Box::new(self.parse_query()?);
            self.expect_token(&Token::RParen)?;
            CopySource::Query(query)
        } else {
            let table_name = self.parse_object_name()?;
            let columns = if self.peek_token().token == Token::LParen {
                self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?
            } else {
                Vec::new()
            };
            CopySource::Table { table_name, columns }
        };
        let to = if self.parse_keyword(Keyword::TO) {
            true
        } else {
            self.expect_keyword(Keyword::FROM)?;
            false
        };
        let target = if self.parse_keyword(Keyword::STDIN) {
            CopyTarget::Stdin
        } else if self.parse_keyword(Keyword::STDOUT) {
            CopyTarget::Stdout
        } else {
            let tok = self.next_token();
            match tok.token {
                Token::SingleQuotedString(s) => CopyTarget::File(s),
                _ => return self.expected("a file path, STDIN, or STDOUT", tok),
            }
        };
        let options = if self.parse_keyword(Keyword::WITH) {
            self.parse_parenthesized_comma_separated(|p| p.parse_sql_option())?
        } else {
            Vec::new()
        };
        Ok(Statement::Copy {
            source,
            to,
            target,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    fn parse(sql: &str) -> Statement {
        let dialect = GenericDialect {};
        Parser::parse_sql(sql, &dialect)
            .unwrap_or_else(|e| panic!("failed to parse {sql:?}: {e}"))
            .remove(0)
    }

    #[test]
    fn parses_insert_values() {
        let stmt = parse("INSERT INTO t (a, b) VALUES (1, 2)");
        match stmt {
            Statement::Insert(insert) => {
                assert_eq!(insert.table_name, ObjectName(vec![Ident::new("t")]));
                assert_eq!(insert.columns.len(), 2);
                assert!(insert.source.is_some());
            }
            other => panic!("expected Insert, got {other:?}"),
        }
    }

    #[test]
    fn parses_insert_on_conflict_do_update() {
        let stmt = parse("INSERT INTO t (a) VALUES (1) ON CONFLICT (a) DO UPDATE SET a = 2");
        match stmt {
            Statement::Insert(insert) => {
                assert!(matches!(insert.on, Some(OnInsert::OnConflict { .. })));
            }
            other => panic!("expected Insert, got {other:?}"),
        }
    }

    #[test]
    fn parses_update_with_from_and_returning() {
        let stmt = parse("UPDATE t SET a = 1 FROM u WHERE t.id = u.id RETURNING a");
        match stmt {
            Statement::Update(update) => {
                assert!(update.from.is_some());
                assert_eq!(update.returning.len(), 1);
            }
            other => panic!("expected Update, got {other:?}"),
        }
    }

    #[test]
    fn parses_delete_with_using() {
        let stmt = parse("DELETE FROM t USING u WHERE t.id = u.id");
        assert!(matches!(stmt, Statement::Delete(_)));
    }

    #[test]
    fn parses_merge_with_matched_and_not_matched() {
        let stmt = parse(
            "MERGE INTO t USING s ON t.k = s.k \
             WHEN MATCHED THEN UPDATE SET t.v = s.v \
             WHEN NOT MATCHED THEN INSERT (k, v) VALUES (s.k, s.v)",
        );
        match stmt {
            Statement::Merge(merge) => {
                assert_eq!(merge.clauses.len(), 2);
                assert_eq!(merge.clauses[0].clause_kind, MergeClauseKind::Matched);
                assert_eq!(merge.clauses[1].clause_kind, MergeClauseKind::NotMatched);
            }
            other => panic!("expected Merge, got {other:?}"),
        }
    }

    #[test]
    fn parses_copy_to_stdout() {
        let stmt = parse("COPY t TO STDOUT");
        match stmt {
            Statement::Copy { to, target, .. } => {
                assert!(to);
                assert_eq!(target, CopyTarget::Stdout);
            }
            other => panic!("expected Copy, got {other:?}"),
        }
    }
}
