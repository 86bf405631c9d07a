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

//! `CREATE`/`ALTER`/`DROP` record types (spec.md §3's `CreateTable` and
//! friends), including the richer `CreateTable` superset (`engine`,
//! `comment`, `on_commit`, `like`/`clone`, `strict`) settled in DESIGN.md.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::data_type::DataType;
use crate::ast::expr::Expr;
use crate::ast::helpers::display_comma_separated;
use crate::ast::ident::{Ident, ObjectName};
use crate::ast::query::Query;
use crate::dialect::{Dialect, DialectDisplay};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnDef {
    pub name: Ident,
    pub data_type: DataType,
    pub collation: Option<ObjectName>,
    pub options: Vec<ColumnOptionDef>,
}

impl DialectDisplay for ColumnDef {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.name.fmt(f, dialect)?;
        write!(f, " ")?;
        self.data_type.fmt(f, dialect)?;
        if let Some(collation) = &self.collation {
            write!(f, " COLLATE ")?;
            collation.fmt(f, dialect)?;
        }
        for option in &self.options {
            write!(f, " ")?;
            option.fmt(f, dialect)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnOptionDef {
    pub name: Option<Ident>,
    pub option: ColumnOption,
}

impl DialectDisplay for ColumnOptionDef {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "CONSTRAINT ")?;
            name.fmt(f, dialect)?;
            write!(f, " ")?;
        }
        self.option.fmt(f, dialect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnOption {
    Null,
    NotNull,
    Default(Expr),
    Unique { is_primary: bool },
    ForeignKey {
        foreign_table: ObjectName,
        referred_columns: Vec<Ident>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
    },
    Check(Expr),
    /// MySQL's `GENERATED ALWAYS AS (expr) [STORED|VIRTUAL]`.
    Generated {
        generated_as: Expr,
        stored: bool,
    },
    Comment(String),
    /// MySQL `ON UPDATE CURRENT_TIMESTAMP`.
    OnUpdate(Expr),
    /// `CHARACTER SET utf8mb4` (MySQL columns)
    CharacterSet(ObjectName),
}

impl DialectDisplay for ColumnOption {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        use ColumnOption::*;
        match self {
            Null => write!(f, "NULL"),
            NotNull => write!(f, "NOT NULL"),
            Default(expr) => {
                write!(f, "DEFAULT ")?;
                expr.fmt(f, dialect)
            }
            Unique { is_primary } => {
                write!(f, "{}", if *is_primary { "PRIMARY KEY" } else { "UNIQUE" })
            }
            ForeignKey {
                foreign_table,
                referred_columns,
                on_delete,
                on_update,
            } => {
                write!(f, "REFERENCES ")?;
                foreign_table.fmt(f, dialect)?;
                if !referred_columns.is_empty() {
                    write!(f, " (")?;
                    display_comma_separated(referred_columns).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                if let Some(action) = on_delete {
                    write!(f, " ON DELETE ")?;
                    action.fmt(f, dialect)?;
                }
                if let Some(action) = on_update {
                    write!(f, " ON UPDATE ")?;
                    action.fmt(f, dialect)?;
                }
                Ok(())
            }
            Check(expr) => {
                write!(f, "CHECK (")?;
                expr.fmt(f, dialect)?;
                write!(f, ")")
            }
            Generated {
                generated_as,
                stored,
            } => {
                write!(f, "GENERATED ALWAYS AS (")?;
                generated_as.fmt(f, dialect)?;
                write!(f, ") {}", if *stored { "STORED" } else { "VIRTUAL" })
            }
            Comment(s) => write!(f, "COMMENT '{s}'"),
            OnUpdate(expr) => {
                write!(f, "ON UPDATE ")?;
                expr.fmt(f, dialect)
            }
            CharacterSet(name) => {
                write!(f, "CHARACTER SET ")?;
                name.fmt(f, dialect)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReferentialAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

impl DialectDisplay for ReferentialAction {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::SetDefault => "SET DEFAULT",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TableConstraint {
    Unique {
        name: Option<Ident>,
        columns: Vec<Ident>,
        is_primary: bool,
    },
    ForeignKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
        foreign_table: ObjectName,
        referred_columns: Vec<Ident>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
    },
    Check {
        name: Option<Ident>,
        expr: Box<Expr>,
    },
    /// MySQL-style non-unique `INDEX (...)` / `KEY (...)` table option.
    Index {
        name: Option<Ident>,
        columns: Vec<Ident>,
    },
}

impl DialectDisplay for TableConstraint {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        fn name_prefix(
            f: &mut dyn fmt::Write,
            dialect: &dyn Dialect,
            name: &Option<Ident>,
        ) -> fmt::Result {
            if let Some(name) = name {
                write!(f, "CONSTRAINT ")?;
                name.fmt(f, dialect)?;
                write!(f, " ")?;
            }
            Ok(())
        }
        match self {
            TableConstraint::Unique {
                name,
                columns,
                is_primary,
            } => {
                name_prefix(f, dialect, name)?;
                write!(f, "{} (", if *is_primary { "PRIMARY KEY" } else { "UNIQUE" })?;
                display_comma_separated(columns).fmt(f, dialect)?;
                write!(f, ")")
            }
            TableConstraint::ForeignKey {
                name,
                columns,
                foreign_table,
                referred_columns,
                on_delete,
                on_update,
            } => {
                name_prefix(f, dialect, name)?;
                write!(f, "FOREIGN KEY (")?;
                display_comma_separated(columns).fmt(f, dialect)?;
                write!(f, ") REFERENCES ")?;
                foreign_table.fmt(f, dialect)?;
                write!(f, " (")?;
                display_comma_separated(referred_columns).fmt(f, dialect)?;
                write!(f, ")")?;
                if let Some(action) = on_delete {
                    write!(f, " ON DELETE ")?;
                    action.fmt(f, dialect)?;
                }
                if let Some(action) = on_update {
                    write!(f, " ON UPDATE ")?;
                    action.fmt(f, dialect)?;
                }
                Ok(())
            }
            TableConstraint::Check { name, expr } => {
                name_prefix(f, dialect, name)?;
                write!(f, "CHECK (")?;
                expr.fmt(f, dialect)?;
                write!(f, ")")
            }
            TableConstraint::Index { name, columns } => {
                write!(f, "INDEX")?;
                if let Some(name) = name {
                    write!(f, " ")?;
                    name.fmt(f, dialect)?;
                }
                write!(f, " (")?;
                display_comma_separated(columns).fmt(f, dialect)?;
                write!(f, ")")
            }
        }
    }
}

/// `ENGINE = InnoDB` (MySQL) / `ENGINE = MergeTree` (ClickHouse).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableEngine {
    pub name: String,
    pub parameters: Vec<Ident>,
}

impl DialectDisplay for TableEngine {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.parameters.is_empty() {
            write!(f, "(")?;
            display_comma_separated(&self.parameters).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Recovers whether the surface form used `COMMENT = '...'` or `COMMENT '...'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommentDef {
    WithEq(String),
    WithoutEq(String),
}

impl DialectDisplay for CommentDef {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        match self {
            CommentDef::WithEq(s) => write!(f, "COMMENT = '{s}'"),
            CommentDef::WithoutEq(s) => write!(f, "COMMENT '{s}'"),
        }
    }
}

/// `ON COMMIT {DELETE ROWS | PRESERVE ROWS | DROP}` (temporary tables).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OnCommit {
    DeleteRows,
    PreserveRows,
    Drop,
}

impl DialectDisplay for OnCommit {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            OnCommit::DeleteRows => "ON COMMIT DELETE ROWS",
            OnCommit::PreserveRows => "ON COMMIT PRESERVE ROWS",
            OnCommit::Drop => "ON COMMIT DROP",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SqlOption {
    pub name: Ident,
    pub value: Expr,
}

impl DialectDisplay for SqlOption {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.name.fmt(f, dialect)?;
        write!(f, " = ")?;
        self.value.fmt(f, dialect)
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateTable {
    pub if_not_exists: bool,
    pub temporary: bool,
    pub external: bool,
    pub name: ObjectName,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
    pub engine: Option<TableEngine>,
    pub comment: Option<CommentDef>,
    pub on_commit: Option<OnCommit>,
    /// `LIKE other_table` -- copy column definitions only.
    pub like: Option<ObjectName>,
    /// ClickHouse/Snowflake `CLONE other_table`.
    pub clone: Option<ObjectName>,
    /// DuckDB `STRICT` tables.
    pub strict: bool,
    pub with_options: Vec<SqlOption>,
    /// `CREATE TABLE ... AS SELECT ...`
    pub query: Option<Box<Query>>,
}

impl DialectDisplay for CreateTable {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "CREATE ")?;
        if self.temporary {
            write!(f, "TEMPORARY ")?;
        }
        if self.external {
            write!(f, "EXTERNAL ")?;
        }
        write!(f, "TABLE ")?;
        if self.if_not_exists {
            write!(f, "IF NOT EXISTS ")?;
        }
        self.name.fmt(f, dialect)?;

        if let Some(like) = &self.like {
            write!(f, " LIKE ")?;
            like.fmt(f, dialect)?;
        }
        if let Some(clone) = &self.clone {
            write!(f, " CLONE ")?;
            clone.fmt(f, dialect)?;
        }

        if !self.columns.is_empty() || !self.constraints.is_empty() {
            write!(f, " (")?;
            display_comma_separated(&self.columns).fmt(f, dialect)?;
            if !self.columns.is_empty() && !self.constraints.is_empty() {
                write!(f, ", ")?;
            }
            display_comma_separated(&self.constraints).fmt(f, dialect)?;
            write!(f, ")")?;
        }

        if self.strict {
            write!(f, " STRICT")?;
        }
        if let Some(engine) = &self.engine {
            write!(f, " ENGINE = ")?;
            engine.fmt(f, dialect)?;
        }
        if !self.with_options.is_empty() {
            write!(f, " WITH (")?;
            display_comma_separated(&self.with_options).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " ")?;
            comment.fmt(f, dialect)?;
        }
        if let Some(on_commit) = &self.on_commit {
            write!(f, " ")?;
            on_commit.fmt(f, dialect)?;
        }
        if let Some(query) = &self.query {
            write!(f, " AS ")?;
            query.fmt(f, dialect)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterColumnOperation {
    SetNotNull,
    DropNotNull,
    SetDefault(Expr),
    DropDefault,
    SetDataType { data_type: DataType, using: Option<Expr> },
}

impl DialectDisplay for AlterColumnOperation {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            AlterColumnOperation::SetNotNull => write!(f, "SET NOT NULL"),
            AlterColumnOperation::DropNotNull => write!(f, "DROP NOT NULL"),
            AlterColumnOperation::SetDefault(expr) => {
                write!(f, "SET DEFAULT ")?;
                expr.fmt(f, dialect)
            }
            AlterColumnOperation::DropDefault => write!(f, "DROP DEFAULT"),
            AlterColumnOperation::SetDataType { data_type, using } => {
                write!(f, "SET DATA TYPE ")?;
                data_type.fmt(f, dialect)?;
                if let Some(using) = using {
                    write!(f, " USING ")?;
                    using.fmt(f, dialect)?;
                }
                Ok(())
            }
        }
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterTableOperation {
    AddColumn {
        if_not_exists: bool,
        column_def: ColumnDef,
    },
    DropColumn {
        column_name: Ident,
        if_exists: bool,
        cascade: bool,
    },
    RenameColumn {
        old_column_name: Ident,
        new_column_name: Ident,
    },
    RenameTable {
        table_name: ObjectName,
    },
    RenameConstraint {
        old_name: Ident,
        new_name: Ident,
    },
    AddConstraint(TableConstraint),
    DropConstraint {
        name: Ident,
        if_exists: bool,
        cascade: bool,
    },
    AlterColumn {
        column_name: Ident,
        op: AlterColumnOperation,
    },
    DropPrimaryKey,
    ChangeColumn {
        old_name: Ident,
        new_column_def: ColumnDef,
    },
    SwapWith {
        table_name: ObjectName,
    },
    OwnerTo {
        new_owner: Ident,
    },
    SetTblProperties {
        table_properties: Vec<SqlOption>,
    },
}

impl DialectDisplay for AlterTableOperation {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            AlterTableOperation::AddColumn {
                if_not_exists,
                column_def,
            } => {
                write!(f, "ADD COLUMN ")?;
                if *if_not_exists {
                    write!(f, "IF NOT EXISTS ")?;
                }
                column_def.fmt(f, dialect)
            }
            AlterTableOperation::DropColumn {
                column_name,
                if_exists,
                cascade,
            } => {
                write!(f, "DROP COLUMN ")?;
                if *if_exists {
                    write!(f, "IF EXISTS ")?;
                }
                column_name.fmt(f, dialect)?;
                if *cascade {
                    write!(f, " CASCADE")?;
                }
                Ok(())
            }
            AlterTableOperation::RenameColumn {
                old_column_name,
                new_column_name,
            } => {
                write!(f, "RENAME COLUMN ")?;
                old_column_name.fmt(f, dialect)?;
                write!(f, " TO ")?;
                new_column_name.fmt(f, dialect)
            }
            AlterTableOperation::RenameTable { table_name } => {
                write!(f, "RENAME TO ")?;
                table_name.fmt(f, dialect)
            }
            AlterTableOperation::RenameConstraint { old_name, new_name } => {
                write!(f, "RENAME CONSTRAINT ")?;
                old_name.fmt(f, dialect)?;
                write!(f, " TO ")?;
                new_name.fmt(f, dialect)
            }
            AlterTableOperation::AddConstraint(c) => {
                write!(f, "ADD ")?;
                c.fmt(f, dialect)
            }
            AlterTableOperation::DropConstraint {
                name,
                if_exists,
                cascade,
            } => {
                write!(f, "DROP CONSTRAINT ")?;
                if *if_exists {
                    write!(f, "IF EXISTS ")?;
                }
                name.fmt(f, dialect)?;
                if *cascade {
                    write!(f, " CASCADE")?;
                }
                Ok(())
            }
            AlterTableOperation::AlterColumn { column_name, op } => {
                write!(f, "ALTER COLUMN ")?;
                column_name.fmt(f, dialect)?;
                write!(f, " ")?;
                op.fmt(f, dialect)
            }
            AlterTableOperation::DropPrimaryKey => write!(f, "DROP PRIMARY KEY"),
            AlterTableOperation::ChangeColumn {
                old_name,
                new_column_def,
            } => {
                write!(f, "CHANGE COLUMN ")?;
                old_name.fmt(f, dialect)?;
                write!(f, " ")?;
                new_column_def.fmt(f, dialect)
            }
            AlterTableOperation::SwapWith { table_name } => {
                write!(f, "SWAP WITH ")?;
                table_name.fmt(f, dialect)
            }
            AlterTableOperation::OwnerTo { new_owner } => {
                write!(f, "OWNER TO ")?;
                new_owner.fmt(f, dialect)
            }
            AlterTableOperation::SetTblProperties { table_properties } => {
                write!(f, "SET TBLPROPERTIES (")?;
                display_comma_separated(table_properties).fmt(f, dialect)?;
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateView {
    pub or_replace: bool,
    pub materialized: bool,
    pub name: ObjectName,
    pub columns: Vec<Ident>,
    pub query: Box<Query>,
    pub with_options: Vec<SqlOption>,
}

impl DialectDisplay for CreateView {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "CREATE ")?;
        if self.or_replace {
            write!(f, "OR REPLACE ")?;
        }
        if self.materialized {
            write!(f, "MATERIALIZED ")?;
        }
        write!(f, "VIEW ")?;
        self.name.fmt(f, dialect)?;
        if !self.columns.is_empty() {
            write!(f, " (")?;
            display_comma_separated(&self.columns).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        if !self.with_options.is_empty() {
            write!(f, " WITH (")?;
            display_comma_separated(&self.with_options).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        write!(f, " AS ")?;
        self.query.fmt(f, dialect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateIndex {
    pub name: Option<ObjectName>,
    pub table_name: ObjectName,
    pub using: Option<Ident>,
    pub columns: Vec<Expr>,
    pub unique: bool,
    pub if_not_exists: bool,
}

impl DialectDisplay for CreateIndex {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "CREATE ")?;
        if self.unique {
            write!(f, "UNIQUE ")?;
        }
        write!(f, "INDEX ")?;
        if self.if_not_exists {
            write!(f, "IF NOT EXISTS ")?;
        }
        if let Some(name) = &self.name {
            name.fmt(f, dialect)?;
            write!(f, " ")?;
        }
        write!(f, "ON ")?;
        self.table_name.fmt(f, dialect)?;
        if let Some(using) = &self.using {
            write!(f, " USING ")?;
            using.fmt(f, dialect)?;
        }
        write!(f, " (")?;
        display_comma_separated(&self.columns).fmt(f, dialect)?;
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateFunction {
    pub or_replace: bool,
    pub temporary: bool,
    pub name: ObjectName,
    pub args: Vec<(Ident, DataType)>,
    pub return_type: Option<DataType>,
    /// Body as the literal source text of the function-defining expression
    /// or statement; dialects differ too widely (`LANGUAGE plpgsql AS $$...$$`
    /// vs. `RETURN expr`) to model a single structured body.
    pub as_: String,
}

impl DialectDisplay for CreateFunction {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "CREATE ")?;
        if self.or_replace {
            write!(f, "OR REPLACE ")?;
        }
        if self.temporary {
            write!(f, "TEMPORARY ")?;
        }
        write!(f, "FUNCTION ")?;
        self.name.fmt(f, dialect)?;
        write!(f, "(")?;
        let mut delim = "";
        for (name, data_type) in &self.args {
            write!(f, "{delim}")?;
            delim = ", ";
            name.fmt(f, dialect)?;
            write!(f, " ")?;
            data_type.fmt(f, dialect)?;
        }
        write!(f, ")")?;
        if let Some(return_type) = &self.return_type {
            write!(f, " RETURNS ")?;
            return_type.fmt(f, dialect)?;
        }
        write!(f, " AS {}", self.as_)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateSchema {
    pub if_not_exists: bool,
    pub name: ObjectName,
}

impl DialectDisplay for CreateSchema {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "CREATE SCHEMA ")?;
        if self.if_not_exists {
            write!(f, "IF NOT EXISTS ")?;
        }
        self.name.fmt(f, dialect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateSequence {
    pub temporary: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub data_type: Option<DataType>,
    pub increment_by: Option<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub start_with: Option<i64>,
    pub cycle: bool,
}

impl DialectDisplay for CreateSequence {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "CREATE ")?;
        if self.temporary {
            write!(f, "TEMPORARY ")?;
        }
        write!(f, "SEQUENCE ")?;
        if self.if_not_exists {
            write!(f, "IF NOT EXISTS ")?;
        }
        self.name.fmt(f, dialect)?;
        if let Some(data_type) = &self.data_type {
            write!(f, " AS ")?;
            data_type.fmt(f, dialect)?;
        }
        if let Some(v) = self.increment_by {
            write!(f, " INCREMENT BY {v}")?;
        }
        if let Some(v) = self.min_value {
            write!(f, " MINVALUE {v}")?;
        }
        if let Some(v) = self.max_value {
            write!(f, " MAXVALUE {v}")?;
        }
        if let Some(v) = self.start_with {
            write!(f, " START WITH {v}")?;
        }
        if self.cycle {
            write!(f, " CYCLE")?;
        }
        Ok(())
    }
}

/// What kind of object a `DROP`/existence-check statement names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectType {
    Table,
    View,
    Index,
    Schema,
    Sequence,
    Function,
}

impl DialectDisplay for ObjectType {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            ObjectType::Table => "TABLE",
            ObjectType::View => "VIEW",
            ObjectType::Index => "INDEX",
            ObjectType::Schema => "SCHEMA",
            ObjectType::Sequence => "SEQUENCE",
            ObjectType::Function => "FUNCTION",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Drop {
    pub object_type: ObjectType,
    pub if_exists: bool,
    pub names: Vec<ObjectName>,
    pub cascade: bool,
    pub restrict: bool,
    pub purge: bool,
}

impl DialectDisplay for Drop {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "DROP ")?;
        self.object_type.fmt(f, dialect)?;
        write!(f, " ")?;
        if self.if_exists {
            write!(f, "IF EXISTS ")?;
        }
        display_comma_separated(&self.names).fmt(f, dialect)?;
        if self.cascade {
            write!(f, " CASCADE")?;
        }
        if self.restrict {
            write!(f, " RESTRICT")?;
        }
        if self.purge {
            write!(f, " PURGE")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    #[test]
    fn create_table_as_select_renders_query_suffix() {
        use crate::ast::query::{Select, SelectItem, SetExpr, TableFactor, TableWithJoins};

        let dialect = GenericDialect {};
        let query = Query {
            with: None,
            body: Box::new(SetExpr::Select(Box::new(Select {
                distinct: None,
                top: None,
                projection: vec![SelectItem::Wildcard],
                into: None,
                from: vec![TableWithJoins {
                    relation: TableFactor::Table {
                        name: ObjectName(vec![Ident::new("src")]),
                        alias: None,
                        args: None,
                        with_hints: vec![],
                    },
                    joins: vec![],
                }],
                lateral_views: vec![],
                selection: None,
                group_by: vec![],
                having: None,
                qualify: None,
                named_window: vec![],
            }))),
            order_by: vec![],
            limit: None,
            offset: None,
            fetch: None,
            lock: None,
        };
        let create = CreateTable {
            if_not_exists: true,
            temporary: false,
            external: false,
            name: ObjectName(vec![Ident::new("t")]),
            columns: vec![],
            constraints: vec![],
            engine: None,
            comment: None,
            on_commit: None,
            like: None,
            clone: None,
            strict: false,
            with_options: vec![],
            query: Some(Box::new(query)),
        };
        assert_eq!(
            create.sql(&dialect).unwrap(),
            "CREATE TABLE IF NOT EXISTS t AS SELECT * FROM src"
        );
    }

    #[test]
    fn drop_table_with_cascade() {
        let dialect = GenericDialect {};
        let drop = Drop {
            object_type: ObjectType::Table,
            if_exists: true,
            names: vec![ObjectName(vec![Ident::new("t")])],
            cascade: true,
            restrict: false,
            purge: false,
        };
        assert_eq!(
            drop.sql(&dialect).unwrap(),
            "DROP TABLE IF EXISTS t CASCADE"
        );
    }
}
