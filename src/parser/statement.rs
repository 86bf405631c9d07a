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

//! Top-level statement dispatch (spec.md §4.F point 1), plus the handful of
//! statement forms that don't belong to the query/DDL/DML grammars:
//! transactions, cursors, prepared statements, grants, and the minimal
//! procedural `IF` statement.

use log::trace;

use super::Parser;
use crate::ast::*;
use crate::error::ParserError;
use crate::keywords::Keyword;
use crate::tokenizer::Token;

impl<'a> Parser<'a> {
    pub(super) fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let loc = self.peek_location();
        let _guard = self.depth_guard(loc)?;

        let tok = self.peek_token();
        let keyword = match &tok.token {
            Token::Word(w) => w.keyword,
            _ => None,
        };
        trace!("parse_statement: dispatching on {:?}", keyword);

        match keyword {
            Some(Keyword::SELECT) | Some(Keyword::WITH) | Some(Keyword::VALUES) => {
                Ok(Statement::Query(Box::new(self.parse_query()?)))
            }
            Some(Keyword::INSERT) => self.parse_insert(),
            Some(Keyword::UPDATE) => self.parse_update(),
            Some(Keyword::DELETE) => self.parse_delete(),
            Some(Keyword::MERGE) => self.parse_merge(),
            Some(Keyword::COPY) => self.parse_copy(),
            Some(Keyword::CREATE) => self.parse_create(),
            Some(Keyword::ALTER) => self.parse_alter_table(),
            Some(Keyword::DROP) => self.parse_drop(),
            Some(Keyword::TRUNCATE) => self.parse_truncate(),
            Some(Keyword::EXPLAIN) => self.parse_explain(),
            Some(Keyword::USE) => self.parse_use(),
            Some(Keyword::DECLARE) => self.parse_declare(),
            Some(Keyword::FETCH) => self.parse_fetch_statement(),
            Some(Keyword::CLOSE) => self.parse_close(),
            Some(Keyword::PREPARE) => self.parse_prepare(),
            Some(Keyword::EXECUTE) => self.parse_execute(),
            Some(Keyword::DEALLOCATE) => self.parse_deallocate(),
            Some(Keyword::START) | Some(Keyword::BEGIN) => self.parse_start_transaction(),
            Some(Keyword::COMMIT) => self.parse_commit(),
            Some(Keyword::ROLLBACK) => self.parse_rollback(),
            Some(Keyword::SAVEPOINT) => self.parse_savepoint(),
            Some(Keyword::GRANT) => self.parse_grant(),
            Some(Keyword::REVOKE) => self.parse_revoke(),
            Some(Keyword::IF) => Ok(Statement::If(self.parse_if_statement()?)),
            Some(Keyword::CALL) => self.parse_call(),
            _ => self.expected("a statement", tok),
        }
    }

    fn parse_create(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::CREATE)?;
        let or_replace = self.parse_keywords(&[Keyword::OR, Keyword::REPLACE]);
        let unique = self.parse_keyword(Keyword::UNIQUE);
        if self.parse_keyword(Keyword::TABLE) {
            self.prev_token();
            return self.parse_create_table();
        }
        if matches!(
            &self.peek_token().token,
            Token::Word(w) if w.keyword == Some(Keyword::TEMPORARY) || w.keyword == Some(Keyword::TEMP) || w.keyword == Some(Keyword::EXTERNAL)
        ) {
            return self.parse_create_table();
        }
        if self.parse_keyword(Keyword::VIEW) || self.parse_keyword(Keyword::MATERIALIZED) {
            self.prev_token();
            return self.parse_create_view(or_replace);
        }
        if self.parse_keyword(Keyword::INDEX) {
            self.prev_token();
            return self.parse_create_index(unique);
        }
        if self.parse_keyword(Keyword::FUNCTION) {
            self.prev_token();
            return self.parse_create_function(or_replace);
        }
        if matches!(
            &self.peek_token().token,
            Token::Word(w) if w.keyword == Some(Keyword::TEMPORARY) || w.keyword == Some(Keyword::TEMP)
        ) {
            return self.parse_create_function(or_replace);
        }
        if self.parse_keyword(Keyword::SCHEMA) {
            return self.parse_create_schema();
        }
        if self.parse_keyword(Keyword::SEQUENCE) {
            self.prev_token();
            return self.parse_create_sequence();
        }
        self.expected(
            "TABLE, VIEW, INDEX, FUNCTION, SCHEMA, or SEQUENCE after CREATE",
            self.peek_token(),
        )
    }

    fn parse_explain(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::EXPLAIN)?;
        if self.parse_keyword(Keyword::TABLE) {
            let table_name = self.parse_object_name()?;
            return Ok(Statement::ExplainTable { table_name });
        }
        let analyze = self.parse_keyword(Keyword::ANALYZE);
        let verbose = self.parse_keyword(Keyword::VERBOSE);
        let statement = Box::new(self.parse_statement()?);
        Ok(Statement::Explain {
            analyze,
            verbose,
            statement,
        })
    }

    fn parse_use(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::USE)?;
        Ok(Statement::Use(self.parse_object_name()?))
    }

    fn parse_declare(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::DECLARE)?;
        let name = self.parse_identifier()?;
        let cursor = self.parse_keyword(Keyword::CURSOR);
        self.expect_keyword(Keyword::FOR)?;
        let query = Box::new(self.parse_query()?);
        Ok(Statement::Declare(Declare { name, cursor, query }))
    }

    fn parse_fetch_statement(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::FETCH)?;
        let direction = if self.parse_keyword(Keyword::NEXT) {
            FetchDirection::Next
        } else if self.parse_keyword(Keyword::PRIOR) {
            FetchDirection::Prior
        } else if self.parse_keyword(Keyword::FIRST) {
            FetchDirection::First
        } else if self.parse_keyword(Keyword::LAST) {
            FetchDirection::Last
        } else if self.parse_keyword(Keyword::ABSOLUTE) {
            FetchDirection::Absolute(self.parse_literal_uint()? as i64)
        } else if self.parse_keyword(Keyword::RELATIVE) {
            FetchDirection::Relative(self.parse_literal_uint()? as i64)
        } else if self.parse_keyword(Keyword::ALL) {
            FetchDirection::All
        } else if let Token::Number(_, _) = &self.peek_token().token {
            FetchDirection::Count(self.parse_literal_uint()?)
        } else {
            FetchDirection::Next
        };
        self.parse_keyword(Keyword::FROM);
        self.parse_keyword(Keyword::IN);
        let cursor_name = self.parse_identifier()?;
        let into = if self.parse_keyword(Keyword::INTO) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        Ok(Statement::Fetch(Fetch {
            cursor_name,
            direction,
            into,
        }))
    }

    fn parse_close(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::CLOSE)?;
        let cursor = if self.parse_keyword(Keyword::ALL) {
            CloseCursor::All
        } else {
            CloseCursor::Specific(self.parse_identifier()?)
        };
        Ok(Statement::Close { cursor })
    }

    fn parse_prepare(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::PREPARE)?;
        let name = self.parse_identifier()?;
        let data_types = if self.consume_token(&Token::LParen) {
            let types = self.parse_comma_separated(|p| p.parse_data_type())?;
            self.expect_token(&Token::RParen)?;
            types
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::AS)?;
        let statement = Box::new(self.parse_statement()?);
        Ok(Statement::Prepare {
            name,
            data_types,
            statement,
        })
    }

    fn parse_execute(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::EXECUTE)?;
        let name = self.parse_identifier()?;
        let parameters = if self.consume_token(&Token::LParen) {
            let params = self.parse_comma_separated(|p| p.parse_expr())?;
            self.expect_token(&Token::RParen)?;
            params
        } else {
            Vec::new()
        };
        Ok(Statement::Execute { name, parameters })
    }

    fn parse_deallocate(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::DEALLOCATE)?;
        let prepare = self.parse_keyword(Keyword::PREPARE);
        let name = self.parse_identifier()?;
        Ok(Statement::Deallocate { name, prepare })
    }

    fn parse_start_transaction(&mut self) -> Result<Statement, ParserError> {
        if self.parse_keyword(Keyword::BEGIN) {
            self.parse_keyword(Keyword::WORK);
            self.parse_keyword(Keyword::TRANSACTION);
        } else {
            self.expect_keyword(Keyword::START)?;
            self.expect_keyword(Keyword::TRANSACTION)?;
        }
        let mut modes = Vec::new();
        loop {
            if self.parse_keywords(&[Keyword::ISOLATION, Keyword::LEVEL]) {
                let level = if self.parse_keywords(&[Keyword::READ, Keyword::UNCOMMITTED]) {
                    IsolationLevel::ReadUncommitted
                } else if self.parse_keywords(&[Keyword::READ, Keyword::COMMITTED]) {
                    IsolationLevel::ReadCommitted
                } else if self.parse_keywords(&[Keyword::REPEATABLE, Keyword::READ]) {
                    IsolationLevel::RepeatableRead
                } else if self.parse_keyword(Keyword::SERIALIZABLE) {
                    IsolationLevel::Serializable
                } else {
                    return self.expected("an isolation level", self.peek_token());
                };
                modes.push(TransactionMode::IsolationLevel(level));
            } else if self.parse_keywords(&[Keyword::READ, Keyword::ONLY]) {
                modes.push(TransactionMode::AccessMode(TransactionAccessMode::ReadOnly));
            } else if self.parse_keywords(&[Keyword::READ, Keyword::WRITE]) {
                modes.push(TransactionMode::AccessMode(TransactionAccessMode::ReadWrite));
            } else {
                break;
            }
            if !self.consume_token(&Token::Comma) {
                break;
            }
        }
        Ok(Statement::StartTransaction { modes })
    }

    fn parse_commit(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::COMMIT)?;
        self.parse_keyword(Keyword::WORK);
        let chain = self.parse_keywords(&[Keyword::AND, Keyword::CHAIN]);
        Ok(Statement::Commit { chain })
    }

    fn parse_rollback(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::ROLLBACK)?;
        self.parse_keyword(Keyword::WORK);
        let chain = self.parse_keywords(&[Keyword::AND, Keyword::CHAIN]);
        let savepoint = if self.parse_keyword(Keyword::TO) {
            self.parse_keyword(Keyword::SAVEPOINT);
            Some(self.parse_identifier()?)
        } else {
            None
        };
        Ok(Statement::Rollback { chain, savepoint })
    }

    fn parse_savepoint(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::SAVEPOINT)?;
        let name = self.parse_identifier()?;
        Ok(Statement::Savepoint { name })
    }

    fn parse_action(&mut self) -> Result<Action, ParserError> {
        if self.parse_keywords(&[Keyword::ALL, Keyword::PRIVILEGES]) || self.parse_keyword(Keyword::ALL) {
            Ok(Action::AllPrivileges)
        } else if self.parse_keyword(Keyword::SELECT) {
            Ok(Action::Select)
        } else if self.parse_keyword(Keyword::INSERT) {
            Ok(Action::Insert)
        } else if self.parse_keyword(Keyword::UPDATE) {
            Ok(Action::Update)
        } else if self.parse_keyword(Keyword::DELETE) {
            Ok(Action::Delete)
        } else if self.parse_keyword(Keyword::TRUNCATE) {
            Ok(Action::Truncate)
        } else if self.parse_keyword(Keyword::REFERENCES) {
            Ok(Action::References)
        } else if self.parse_keyword(Keyword::USAGE) {
            Ok(Action::Usage)
        } else {
            self.expected("a grantable action", self.peek_token())
        }
    }

    fn parse_grant_objects(&mut self) -> Result<GrantObjects, ParserError> {
        if self.parse_keywords(&[Keyword::ALL, Keyword::TABLES, Keyword::IN, Keyword::SCHEMA]) {
            let schemas = self.parse_comma_separated(|p| p.parse_object_name())?;
            return Ok(GrantObjects::AllTablesInSchema { schemas });
        }
        if self.parse_keyword(Keyword::SCHEMA) {
            let schemas = self.parse_comma_separated(|p| p.parse_object_name())?;
            return Ok(GrantObjects::Schemas(schemas));
        }
        self.parse_keyword(Keyword::TABLE);
        let tables = self.parse_comma_separated(|p| p.parse_object_name())?;
        Ok(GrantObjects::Tables(tables))
    }

    fn parse_grant(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::GRANT)?;
        let privileges = self.parse_comma_separated(|p| p.parse_action())?;
        self.expect_keyword(Keyword::ON)?;
        let objects = self.parse_grant_objects()?;
        self.expect_keyword(Keyword::TO)?;
        let grantees = self.parse_comma_separated(|p| p.parse_identifier())?;
        let with_grant_option = self.parse_keywords(&[Keyword::WITH, Keyword::GRANT, Keyword::OPTION]);
        Ok(Statement::Grant {
            privileges,
            objects,
            grantees,
            with_grant_option,
        })
    }

    fn parse_revoke(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::REVOKE)?;
        let privileges = self.parse_comma_separated(|p| p.parse_action())?;
        self.expect_keyword(Keyword::ON)?;
        let objects = self.parse_grant_objects()?;
        self.expect_keyword(Keyword::FROM)?;
        let grantees = self.parse_comma_separated(|p| p.parse_identifier())?;
        let cascade = self.parse_keyword(Keyword::CASCADE);
        Ok(Statement::Revoke {
            privileges,
            objects,
            grantees,
            cascade,
        })
    }

    fn parse_if_statement(&mut self) -> Result<IfStatement, ParserError> {
        self.expect_keyword(Keyword::IF)?;
        let condition = self.parse_expr()?;
        self.expect_keyword(Keyword::THEN)?;
        let then = self.parse_statement_block()?;
        let mut elseif = Vec::new();
        while self.parse_word_matching("ELSEIF") {
            let cond = self.parse_expr()?;
            self.expect_keyword(Keyword::THEN)?;
            elseif.push((cond, self.parse_statement_block()?));
        }
        let else_ = if self.parse_keyword(Keyword::ELSE) {
            Some(self.parse_statement_block()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::END)?;
        self.expect_keyword(Keyword::IF)?;
        Ok(IfStatement {
            condition,
            then,
            elseif,
            else_,
        })
    }

    fn parse_statement_block(&mut self) -> Result<Vec<Statement>, ParserError> {
        let mut stmts = vec![self.parse_statement()?];
        while self.consume_token(&Token::SemiColon) {
            if matches!(
                &self.peek_token().token,
                Token::Word(w) if w.keyword == Some(Keyword::ELSE) || w.keyword == Some(Keyword::END)
            ) || self.peek_word_matching("ELSEIF")
            {
                break;
            }
            stmts.push(self.parse_statement()?);
        }
        Ok(stmts)
    }

    fn peek_word_matching(&self, text: &str) -> bool {
        matches!(
            &self.peek_token().token,
            Token::Word(w) if w.keyword.is_none() && w.value.eq_ignore_ascii_case(text)
        )
    }

    fn parse_call(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::CALL)?;
        let name = self.parse_object_name()?;
        let args = if self.consume_token(&Token::LParen) {
            let args = if self.peek_token().token == Token::RParen {
                Vec::new()
            } else {
                self.parse_comma_separated(|p| p.parse_expr())?
            };
            self.expect_token(&Token::RParen)?;
            args
        } else {
            Vec::new()
        };
        Ok(Statement::Call { name, args })
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
    fn dispatches_explain_analyze() {
        let stmt = parse("EXPLAIN ANALYZE SELECT 1");
        assert!(matches!(stmt, Statement::Explain { analyze: true, .. }));
    }

    #[test]
    fn dispatches_start_transaction_with_isolation_level() {
        let stmt = parse("START TRANSACTION ISOLATION LEVEL SERIALIZABLE");
        match stmt {
            Statement::StartTransaction { modes } => {
                assert_eq!(
                    modes,
                    vec![TransactionMode::IsolationLevel(IsolationLevel::Serializable)]
                );
            }
            other => panic!("expected StartTransaction, got {other:?}"),
        }
    }

    #[test]
    fn dispatches_grant_with_grant_option() {
        let stmt = parse("GRANT SELECT, INSERT ON TABLE t TO alice WITH GRANT OPTION");
        match stmt {
            Statement::Grant {
                privileges,
                with_grant_option,
                ..
            } => {
                assert_eq!(privileges, vec![Action::Select, Action::Insert]);
                assert!(with_grant_option);
            }
            other => panic!("expected Grant, got {other:?}"),
        }
    }

    #[test]
    fn parses_if_elseif_else() {
        let stmt = parse("IF a THEN CALL p1(); ELSEIF b THEN CALL p2(); ELSE CALL p3(); END IF");
        assert!(matches!(stmt, Statement::If(_)));
    }

    #[test]
    fn parses_call_with_args() {
        let stmt = parse("CALL my_proc(1, 2)");
        assert!(matches!(stmt, Statement::Call { .. }));
    }

    #[test]
    fn merges_savepoint_and_rollback_to() {
        let stmt = parse("ROLLBACK TO SAVEPOINT sp1");
        assert!(matches!(
            stmt,
            Statement::Rollback {
                savepoint: Some(_),
                ..
            }
        ));
    }
}
