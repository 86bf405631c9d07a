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

//! `CREATE`/`ALTER`/`DROP`/`TRUNCATE` parsing.

use super::Parser;
use crate::ast::*;
use crate::error::ParserError;
use crate::keywords::Keyword;
use crate::tokenizer::Token;

impl<'a> Parser<'a> {
    pub(super) fn parse_create_table(&mut self) -> Result<Statement, ParserError> {
        let temporary = self.parse_keyword(Keyword::TEMPORARY) || self.parse_keyword(Keyword::TEMP);
        let external = self.parse_keyword(Keyword::EXTERNAL);
        self.expect_keyword(Keyword::TABLE)?;
        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;

        let like = if self.parse_keyword(Keyword::LIKE) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let clone = if self.parse_keyword(Keyword::CLONE) {
            Some(self.parse_object_name()?)
        } else {
            None
        };

        let (columns, constraints) = if self.consume_token(&Token::LParen) {
            self.parse_columns_and_constraints()?
        } else {
            (Vec::new(), Vec::new())
        };

        let strict = self.parse_keyword(Keyword::STRICT);

        let engine = if self.parse_keyword(Keyword::ENGINE) {
            self.expect_token(&Token::Eq)?;
            Some(self.parse_table_engine()?)
        } else {
            None
        };

        let with_options = if self.parse_keyword(Keyword::WITH) {
            self.parse_parenthesized_comma_separated(|p| p.parse_sql_option())?
        } else {
            Vec::new()
        };

        let comment = if self.parse_keyword(Keyword::COMMENT) {
            let with_eq = self.consume_token(&Token::Eq);
            let tok = self.next_token();
            let text = match tok.token {
                Token::SingleQuotedString(s) => s,
                _ => return self.expected("a string literal", tok),
            };
            Some(if with_eq {
                CommentDef::WithEq(text)
            } else {
                CommentDef::WithoutEq(text)
            })
        } else {
            None
        };

        let on_commit = if self.parse_keyword(Keyword::ON) {
            self.expect_keyword(Keyword::COMMIT)?;
            if self.parse_keywords(&[Keyword::DELETE, Keyword::ROWS]) {
                Some(OnCommit::DeleteRows)
            } else if self.parse_keywords(&[Keyword::PRESERVE, Keyword::ROWS]) {
                Some(OnCommit::PreserveRows)
            } else {
                self.expect_keyword(Keyword::DROP)?;
                Some(OnCommit::Drop)
            }
        } else {
            None
        };

        let query = if self.parse_keyword(Keyword::AS) {
            Some(Box::new(self.parse_query()?))
        } else {
            None
        };

        Ok(Statement::CreateTable(CreateTable {
            if_not_exists,
            temporary,
            external,
            name,
            columns,
            constraints,
            engine,
            comment,
            on_commit,
            like,
            clone,
            strict,
            with_options,
            query,
        }))
    }

    fn parse_columns_and_constraints(&mut self) -> Result<(Vec<ColumnDef>, Vec<TableConstraint>), ParserError> {
        let mut columns = Vec::new();
        let mut constraints = Vec::new();
        if self.peek_token().token != Token::RParen {
            loop {
                if let Some(constraint) = self.parse_optional_table_constraint()? {
                    constraints.push(constraint);
                } else {
                    columns.push(self.parse_column_def()?);
                }
                if !self.consume_token(&Token::Comma) {
                    break;
                }
                if self.dialect().supports_trailing_commas() && self.peek_token().token == Token::RParen {
                    break;
                }
            }
        }
        self.expect_token(&Token::RParen)?;
        Ok((columns, constraints))
    }

    fn parse_optional_table_constraint(&mut self) -> Result<Option<TableConstraint>, ParserError> {
        let name = if self.parse_keyword(Keyword::CONSTRAINT) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        if self.parse_keyword(Keyword::PRIMARY) {
            self.expect_keyword(Keyword::KEY)?;
            let columns = self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?;
            return Ok(Some(TableConstraint::Unique {
                name,
                columns,
                is_primary: true,
            }));
        }
        if self.parse_keyword(Keyword::UNIQUE) {
            let columns = self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?;
            return Ok(Some(TableConstraint::Unique {
                name,
                columns,
                is_primary: false,
            }));
        }
        if self.parse_keyword(Keyword::FOREIGN) {
            self.expect_keyword(Keyword::KEY)?;
            let columns = self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?;
            self.expect_keyword(Keyword::REFERENCES)?;
            let foreign_table = self.parse_object_name()?;
            let referred_columns = self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?;
            let (on_delete, on_update) = self.parse_referential_actions()?;
            return Ok(Some(TableConstraint::ForeignKey {
                name,
                columns,
                foreign_table,
                referred_columns,
                on_delete,
                on_update,
            }));
        }
        if self.parse_keyword(Keyword::CHECK) {
            self.expect_token(&Token::LParen)?;
            let expr = Box::new(self.parse_expr()?);
            self.expect_token(&Token::RParen)?;
            return Ok(Some(TableConstraint::Check { name, expr }));
        }
        if name.is_none() && self.parse_one_of_keywords(&[Keyword::INDEX, Keyword::KEY]).is_some() {
            let columns = self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?;
            return Ok(Some(TableConstraint::Index { name: None, columns }));
        }
        if name.is_some() {
            return self.expected("PRIMARY KEY, UNIQUE, FOREIGN KEY, or CHECK after CONSTRAINT name", self.peek_token());
        }
        Ok(None)
    }

    fn parse_referential_actions(&mut self) -> Result<(Option<ReferentialAction>, Option<ReferentialAction>), ParserError> {
        let mut on_delete = None;
        let mut on_update = None;
        loop {
            if on_delete.is_none() && self.parse_keywords(&[Keyword::ON, Keyword::DELETE]) {
                on_delete = Some(self.parse_referential_action()?);
            } else if on_update.is_none() && self.parse_keywords(&[Keyword::ON, Keyword::UPDATE]) {
                on_update = Some(self.parse_referential_action()?);
            } else {
                break;
            }
        }
        Ok((on_delete, on_update))
    }

    fn parse_referential_action(&mut self) -> Result<ReferentialAction, ParserError> {
        if self.parse_keyword(Keyword::RESTRICT) {
            Ok(ReferentialAction::Restrict)
        } else if self.parse_keyword(Keyword::CASCADE) {
            Ok(ReferentialAction::Cascade)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::NULL]) {
            Ok(ReferentialAction::SetNull)
        } else if self.parse_keywords(&[Keyword::NO, Keyword::ACTION]) {
            Ok(ReferentialAction::NoAction)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::DEFAULT]) {
            Ok(ReferentialAction::SetDefault)
        } else {
            self.expected("a referential action", self.peek_token())
        }
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef, ParserError> {
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;
        let collation = if self.parse_keyword(Keyword::COLLATE) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let mut options = Vec::new();
        while let Some(option) = self.parse_optional_column_option()? {
            options.push(option);
        }
        Ok(ColumnDef {
            name,
            data_type,
            collation,
            options,
        })
    }

    fn parse_optional_column_option(&mut self) -> Result<Option<ColumnOptionDef>, ParserError> {
        let name = if self.parse_keyword(Keyword::CONSTRAINT) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let option = if self.parse_keyword(Keyword::NOT) {
            self.expect_keyword(Keyword::NULL)?;
            ColumnOption::NotNull
        } else if self.parse_keyword(Keyword::NULL) {
            ColumnOption::Null
        } else if self.parse_keyword(Keyword::DEFAULT) {
            ColumnOption::Default(self.parse_expr()?)
        } else if self.parse_keyword(Keyword::PRIMARY) {
            self.expect_keyword(Keyword::KEY)?;
            ColumnOption::Unique { is_primary: true }
        } else if self.parse_keyword(Keyword::UNIQUE) {
            ColumnOption::Unique { is_primary: false }
        } else if self.parse_keyword(Keyword::REFERENCES) {
            let foreign_table = self.parse_object_name()?;
            let referred_columns = if self.peek_token().token == Token::LParen {
                self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?
            } else {
                Vec::new()
            };
            let (on_delete, on_update) = self.parse_referential_actions()?;
            ColumnOption::ForeignKey {
                foreign_table,
                referred_columns,
                on_delete,
                on_update,
            }
        } else if self.parse_keyword(Keyword::CHECK) {
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            ColumnOption::Check(expr)
        } else if self.parse_keywords(&[Keyword::GENERATED, Keyword::ALWAYS, Keyword::AS]) {
            self.expect_token(&Token::LParen)?;
            let generated_as = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            let stored = if self.parse_keyword(Keyword::STORED) {
                true
            } else {
                self.parse_keyword(Keyword::VIRTUAL);
                false
            };
            ColumnOption::Generated { generated_as, stored }
        } else if self.parse_keyword(Keyword::COMMENT) {
            let tok = self.next_token();
            match tok.token {
                Token::SingleQuotedString(s) => ColumnOption::Comment(s),
                _ => return self.expected("a string literal", tok),
            }
        } else if self.parse_keywords(&[Keyword::ON, Keyword::UPDATE]) {
            ColumnOption::OnUpdate(self.parse_expr()?)
        } else if self.parse_keywords(&[Keyword::CHARACTER, Keyword::SET]) {
            ColumnOption::CharacterSet(self.parse_object_name()?)
        } else if name.is_some() {
            return self.expected("a column option after CONSTRAINT name", self.peek_token());
        } else {
            return Ok(None);
        };
        Ok(Some(ColumnOptionDef { name, option }))
    }

    fn parse_table_engine(&mut self) -> Result<TableEngine, ParserError> {
        let name = self.parse_identifier()?.value;
        let parameters = if self.consume_token(&Token::LParen) {
            let params = self.parse_comma_separated(|p| p.parse_identifier())?;
            self.expect_token(&Token::RParen)?;
            params
        } else {
            Vec::new()
        };
        Ok(TableEngine { name, parameters })
    }

    pub(super) fn parse_sql_option(&mut self) -> Result<SqlOption, ParserError> {
        let name = self.parse_identifier()?;
        self.expect_token(&Token::Eq)?;
        let value = self.parse_expr()?;
        Ok(SqlOption { name, value })
    }

    pub(super) fn parse_create_view(&mut self, or_replace: bool) -> Result<Statement, ParserError> {
        let materialized = self.parse_keyword(Keyword::MATERIALIZED);
        self.expect_keyword(Keyword::VIEW)?;
        let name = self.parse_object_name()?;
        let columns = if self.peek_token().token == Token::LParen {
            self.parse_parenthesized_comma_separated(|p| p.parse_identifier())?
        } else {
            Vec::new()
        };
        let with_options = if self.parse_keyword(Keyword::WITH) {
            self.parse_parenthesized_comma_separated(|p| p.parse_sql_option())?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::AS)?;
        let query = Box::new(self.parse_query()?);
        Ok(Statement::CreateView(CreateView {
            or_replace,
            materialized,
            name,
            columns,
            query,
            with_options,
        }))
    }

    pub(super) fn parse_create_index(&mut self, unique: bool) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::INDEX)?;
        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let starts_with_on = matches!(
            &self.peek_token().token,
            Token::Word(w) if w.keyword == Some(Keyword::ON)
        );
        let name = if starts_with_on {
            self.expect_keyword(Keyword::ON)?;
            None
        } else {
            let name = self.parse_object_name()?;
            self.expect_keyword(Keyword::ON)?;
            Some(name)
        };
        let table_name = self.parse_object_name()?;
        let using = if self.parse_keyword(Keyword::USING) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let columns = self.parse_parenthesized_comma_separated(|p| p.parse_expr())?;
        Ok(Statement::CreateIndex(CreateIndex {
            name,
            table_name,
            using,
            columns,
            unique,
            if_not_exists,
        }))
    }

    pub(super) fn parse_create_function(&mut self, or_replace: bool) -> Result<Statement, ParserError> {
        let temporary = self.parse_keyword(Keyword::TEMPORARY) || self.parse_keyword(Keyword::TEMP);
        self.expect_keyword(Keyword::FUNCTION)?;
        let name = self.parse_object_name()?;
        self.expect_token(&Token::LParen)?;
        let mut args = Vec::new();
        if self.peek_token().token != Token::RParen {
            loop {
                let arg_name = self.parse_identifier()?;
                let arg_type = self.parse_data_type()?;
                args.push((arg_name, arg_type));
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect_token(&Token::RParen)?;
        let return_type = if self.parse_keyword(Keyword::RETURNS) {
            Some(self.parse_data_type()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::AS)?;
        let as_ = self.parse_function_body_text()?;
        Ok(Statement::CreateFunction(CreateFunction {
            or_replace,
            temporary,
            name,
            args,
            return_type,
            as_,
        }))
    }

    /// The function body is kept as its literal source text, so this simply
    /// captures the remaining tokens up to the statement delimiter or a
    /// dollar-quoted blob in one piece.
    fn parse_function_body_text(&mut self) -> Result<String, ParserError> {
        let tok = self.next_token();
        let text = match tok.token {
            Token::DollarQuotedString(s) => s.value,
            Token::SingleQuotedString(s) => s,
            _ => {
                self.prev_token();
                self.parse_expr()?.sql(self.dialect()).map_err(|_| {
                    ParserError::new("could not render function body".to_string(), tok.span.start)
                })?
            }
        };
        Ok(text)
    }

    pub(super) fn parse_create_schema(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        Ok(Statement::CreateSchema(CreateSchema { if_not_exists, name }))
    }

    pub(super) fn parse_create_sequence(&mut self) -> Result<Statement, ParserError> {
        let temporary = self.parse_keyword(Keyword::TEMPORARY) || self.parse_keyword(Keyword::TEMP);
        self.expect_keyword(Keyword::SEQUENCE)?;
        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        let data_type = if self.parse_keyword(Keyword::AS) {
            Some(self.parse_data_type()?)
        } else {
            None
        };
        let mut increment_by = None;
        let mut min_value = None;
        let mut max_value = None;
        let mut start_with = None;
        let mut cycle = false;
        loop {
            if self.parse_keywords(&[Keyword::INCREMENT, Keyword::BY]) {
                increment_by = Some(self.parse_signed_integer()?);
            } else if self.parse_keyword(Keyword::MINVALUE) {
                min_value = Some(self.parse_signed_integer()?);
            } else if self.parse_keyword(Keyword::MAXVALUE) {
                max_value = Some(self.parse_signed_integer()?);
            } else if self.parse_keywords(&[Keyword::START, Keyword::WITH]) {
                start_with = Some(self.parse_signed_integer()?);
            } else if self.parse_keyword(Keyword::CYCLE) {
                cycle = true;
            } else {
                break;
            }
        }
        Ok(Statement::CreateSequence(CreateSequence {
            temporary,
            if_not_exists,
            name,
            data_type,
            increment_by,
            min_value,
            max_value,
            start_with,
            cycle,
        }))
    }

    fn parse_signed_integer(&mut self) -> Result<i64, ParserError> {
        let negative = self.consume_token(&Token::Minus);
        let tok = self.next_token();
        let value = match &tok.token {
            Token::Number(s, _) => s
                .parse::<i64>()
                .map_err(|_| ParserError::new(format!("invalid integer literal: {s}"), tok.span.start))?,
            _ => return self.expected("a number", tok),
        };
        Ok(if negative { -value } else { value })
    }

    pub(super) fn parse_alter_table(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let only = self.parse_keyword(Keyword::ONLY);
        let name = self.parse_object_name()?;
        let operations = self.parse_comma_separated(|p| p.parse_alter_table_operation())?;
        Ok(Statement::AlterTable {
            name,
            if_exists,
            only,
            operations,
        })
    }

    fn parse_alter_table_operation(&mut self) -> Result<AlterTableOperation, ParserError> {
        if self.parse_keyword(Keyword::ADD) {
            if let Some(constraint) = self.parse_optional_table_constraint()? {
                return Ok(AlterTableOperation::AddConstraint(constraint));
            }
            self.parse_keyword(Keyword::COLUMN);
            let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
            let column_def = self.parse_column_def()?;
            return Ok(AlterTableOperation::AddColumn {
                if_not_exists,
                column_def,
            });
        }
        if self.parse_keyword(Keyword::DROP) {
            if self.parse_keywords(&[Keyword::PRIMARY, Keyword::KEY]) {
                return Ok(AlterTableOperation::DropPrimaryKey);
            }
            if self.parse_keyword(Keyword::CONSTRAINT) {
                let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
                let name = self.parse_identifier()?;
                let cascade = self.parse_keyword(Keyword::CASCADE);
                return Ok(AlterTableOperation::DropConstraint {
                    name,
                    if_exists,
                    cascade,
                });
            }
            self.parse_keyword(Keyword::COLUMN);
            let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
            let column_name = self.parse_identifier()?;
            let cascade = self.parse_keyword(Keyword::CASCADE);
            return Ok(AlterTableOperation::DropColumn {
                column_name,
                if_exists,
                cascade,
            });
        }
        if self.parse_keyword(Keyword::RENAME) {
            if self.parse_keyword(Keyword::TO) {
                return Ok(AlterTableOperation::RenameTable {
                    table_name: self.parse_object_name()?,
                });
            }
            if self.parse_keyword(Keyword::CONSTRAINT) {
                let old_name = self.parse_identifier()?;
                self.expect_keyword(Keyword::TO)?;
                let new_name = self.parse_identifier()?;
                return Ok(AlterTableOperation::RenameConstraint { old_name, new_name });
            }
            self.parse_keyword(Keyword::COLUMN);
            let old_column_name = self.parse_identifier()?;
            self.expect_keyword(Keyword::TO)?;
            let new_column_name = self.parse_identifier()?;
            return Ok(AlterTableOperation::RenameColumn {
                old_column_name,
                new_column_name,
            });
        }
        if self.parse_keyword(Keyword::ALTER) {
            self.parse_keyword(Keyword::COLUMN);
            let column_name = self.parse_identifier()?;
            self.parse_keyword(Keyword::SET).then(|| ()); // handled per-branch below
            let op = if self.parse_keywords(&[Keyword::SET, Keyword::NOT, Keyword::NULL]) {
                AlterColumnOperation::SetNotNull
            } else if self.parse_keywords(&[Keyword::DROP, Keyword::NOT, Keyword::NULL]) {
                AlterColumnOperation::DropNotNull
            } else if self.parse_keywords(&[Keyword::SET, Keyword::DEFAULT]) {
                AlterColumnOperation::SetDefault(self.parse_expr()?)
            } else if self.parse_keywords(&[Keyword::DROP, Keyword::DEFAULT]) {
                AlterColumnOperation::DropDefault
            } else {
                self.parse_keywords(&[Keyword::SET, Keyword::DATA, Keyword::TYPE]);
                let data_type = self.parse_data_type()?;
                let using = if self.parse_keyword(Keyword::USING) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                AlterColumnOperation::SetDataType { data_type, using }
            };
            return Ok(AlterTableOperation::AlterColumn { column_name, op });
        }
        if self.parse_keywords(&[Keyword::CHANGE, Keyword::COLUMN]) || self.parse_keyword(Keyword::CHANGE) {
            let old_name = self.parse_identifier()?;
            let new_column_def = self.parse_column_def()?;
            return Ok(AlterTableOperation::ChangeColumn {
                old_name,
                new_column_def,
            });
        }
        if self.parse_keywords(&[Keyword::SWAP, Keyword::WITH]) {
            return Ok(AlterTableOperation::SwapWith {
                table_name: self.parse_object_name()?,
            });
        }
        if self.parse_keywords(&[Keyword::OWNER, Keyword::TO]) {
            return Ok(AlterTableOperation::OwnerTo {
                new_owner: self.parse_identifier()?,
            });
        }
        if self.parse_keywords(&[Keyword::SET, Keyword::TBLPROPERTIES]) {
            let table_properties = self.parse_parenthesized_comma_separated(|p| p.parse_sql_option())?;
            return Ok(AlterTableOperation::SetTblProperties { table_properties });
        }
        self.expected("an ALTER TABLE operation", self.peek_token())
    }

    pub(super) fn parse_drop(&mut self) -> Result<Statement, ParserError> {
        let object_type = if self.parse_keyword(Keyword::TABLE) {
            ObjectType::Table
        } else if self.parse_keyword(Keyword::VIEW) {
            ObjectType::View
        } else if self.parse_keyword(Keyword::INDEX) {
            ObjectType::Index
        } else if self.parse_keyword(Keyword::SCHEMA) {
            ObjectType::Schema
        } else if self.parse_keyword(Keyword::SEQUENCE) {
            ObjectType::Sequence
        } else if self.parse_keyword(Keyword::FUNCTION) {
            ObjectType::Function
        } else {
            return self.expected("a droppable object type", self.peek_token());
        };
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let names = self.parse_comma_separated(|p| p.parse_object_name())?;
        let cascade = self.parse_keyword(Keyword::CASCADE);
        let restrict = !cascade && self.parse_keyword(Keyword::RESTRICT);
        let purge = self.parse_keyword(Keyword::PURGE);
        Ok(Statement::Drop(Drop {
            object_type,
            if_exists,
            names,
            cascade,
            restrict,
            purge,
        }))
    }

    pub(super) fn parse_truncate(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let table_name = self.parse_object_name()?;
        let partitions = if self.parse_keyword(Keyword::PARTITION) {
            self.parse_parenthesized_comma_separated(|p| p.parse_expr())?
        } else {
            Vec::new()
        };
        Ok(Statement::Truncate {
            table_name,
            partitions,
        })
    }
}
