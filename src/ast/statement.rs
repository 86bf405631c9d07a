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

//! The top-level `Statement` sum type and the handful of records
//! (transactions, cursors, prepared statements, grants) that sit above the
//! query/DDL/DML algebra without belonging in any of those modules.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::ddl::{
    CreateFunction, CreateIndex, CreateSchema, CreateSequence, CreateTable, CreateView, Drop,
    AlterTableOperation,
};
use crate::ast::ddl::SqlOption;
use crate::ast::dml::{CopySource, CopyTarget, Delete, Insert, Merge, Update};
use crate::ast::expr::Expr;
use crate::ast::helpers::display_comma_separated;
use crate::ast::ident::{Ident, ObjectName};
use crate::ast::query::Query;
use crate::dialect::{Dialect, DialectDisplay};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl DialectDisplay for IsolationLevel {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            IsolationLevel::ReadUncommitted => "ISOLATION LEVEL READ UNCOMMITTED",
            IsolationLevel::ReadCommitted => "ISOLATION LEVEL READ COMMITTED",
            IsolationLevel::RepeatableRead => "ISOLATION LEVEL REPEATABLE READ",
            IsolationLevel::Serializable => "ISOLATION LEVEL SERIALIZABLE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransactionAccessMode {
    ReadOnly,
    ReadWrite,
}

impl DialectDisplay for TransactionAccessMode {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            TransactionAccessMode::ReadOnly => "READ ONLY",
            TransactionAccessMode::ReadWrite => "READ WRITE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransactionMode {
    IsolationLevel(IsolationLevel),
    AccessMode(TransactionAccessMode),
}

impl DialectDisplay for TransactionMode {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            TransactionMode::IsolationLevel(l) => l.fmt(f, dialect),
            TransactionMode::AccessMode(a) => a.fmt(f, dialect),
        }
    }
}

/// `FETCH { NEXT | PRIOR | FIRST | LAST | ABSOLUTE n | RELATIVE n | ALL | n }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FetchDirection {
    Next,
    Prior,
    First,
    Last,
    Absolute(i64),
    Relative(i64),
    All,
    Count(u64),
}

impl DialectDisplay for FetchDirection {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        match self {
            FetchDirection::Next => write!(f, "NEXT"),
            FetchDirection::Prior => write!(f, "PRIOR"),
            FetchDirection::First => write!(f, "FIRST"),
            FetchDirection::Last => write!(f, "LAST"),
            FetchDirection::Absolute(n) => write!(f, "ABSOLUTE {n}"),
            FetchDirection::Relative(n) => write!(f, "RELATIVE {n}"),
            FetchDirection::All => write!(f, "ALL"),
            FetchDirection::Count(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Declare {
    pub name: Ident,
    pub cursor: bool,
    pub query: Box<Query>,
}

impl DialectDisplay for Declare {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "DECLARE ")?;
        self.name.fmt(f, dialect)?;
        write!(f, " {}FOR ", if self.cursor { "CURSOR " } else { "" })?;
        self.query.fmt(f, dialect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fetch {
    pub cursor_name: Ident,
    pub direction: FetchDirection,
    pub into: Option<ObjectName>,
}

impl DialectDisplay for Fetch {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "FETCH ")?;
        self.direction.fmt(f, dialect)?;
        write!(f, " FROM ")?;
        self.cursor_name.fmt(f, dialect)?;
        if let Some(into) = &self.into {
            write!(f, " INTO ")?;
            into.fmt(f, dialect)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloseCursor {
    All,
    Specific(Ident),
}

impl DialectDisplay for CloseCursor {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            CloseCursor::All => write!(f, "ALL"),
            CloseCursor::Specific(name) => name.fmt(f, dialect),
        }
    }
}

/// `GRANT`/`REVOKE` target set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrantObjects {
    Tables(Vec<ObjectName>),
    Schemas(Vec<ObjectName>),
    AllTablesInSchema { schemas: Vec<ObjectName> },
}

impl DialectDisplay for GrantObjects {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            GrantObjects::Tables(names) => {
                write!(f, "TABLE ")?;
                display_comma_separated(names).fmt(f, dialect)
            }
            GrantObjects::Schemas(names) => {
                write!(f, "SCHEMA ")?;
                display_comma_separated(names).fmt(f, dialect)
            }
            GrantObjects::AllTablesInSchema { schemas } => {
                write!(f, "ALL TABLES IN SCHEMA ")?;
                display_comma_separated(schemas).fmt(f, dialect)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    Select,
    Insert,
    Update,
    Delete,
    Truncate,
    References,
    Usage,
    AllPrivileges,
}

impl DialectDisplay for Action {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            Action::Select => "SELECT",
            Action::Insert => "INSERT",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
            Action::Truncate => "TRUNCATE",
            Action::References => "REFERENCES",
            Action::Usage => "USAGE",
            Action::AllPrivileges => "ALL PRIVILEGES",
        })
    }
}

/// A minimal generic/MySQL-flavored `IF ... THEN ... ELSEIF ... ELSE ...
/// END IF` procedural statement (spec.md §3's non-exhaustive list names
/// `IfStatement` without pinning a dialect; full stored-procedure bodies
/// are out of scope).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IfStatement {
    pub condition: Expr,
    pub then: Vec<Statement>,
    pub elseif: Vec<(Expr, Vec<Statement>)>,
    pub else_: Option<Vec<Statement>>,
}

impl DialectDisplay for IfStatement {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "IF ")?;
        self.condition.fmt(f, dialect)?;
        write!(f, " THEN ")?;
        fmt_statement_block(f, dialect, &self.then)?;
        for (cond, body) in &self.elseif {
            write!(f, " ELSEIF ")?;
            cond.fmt(f, dialect)?;
            write!(f, " THEN ")?;
            fmt_statement_block(f, dialect, body)?;
        }
        if let Some(else_) = &self.else_ {
            write!(f, " ELSE ")?;
            fmt_statement_block(f, dialect, else_)?;
        }
        write!(f, " END IF")
    }
}

fn fmt_statement_block(
    f: &mut dyn fmt::Write,
    dialect: &dyn Dialect,
    stmts: &[Statement],
) -> fmt::Result {
    let mut delim = "";
    for stmt in stmts {
        write!(f, "{delim}")?;
        delim = "; ";
        stmt.fmt(f, dialect)?;
    }
    Ok(())
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Statement {
    Query(Box<Query>),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Merge(Merge),
    /// `COPY <source> { FROM | TO } <target> [WITH (options)]`.
    Copy {
        source: CopySource,
        to: bool,
        target: CopyTarget,
        options: Vec<SqlOption>,
    },
    CreateTable(CreateTable),
    CreateView(CreateView),
    CreateIndex(CreateIndex),
    CreateFunction(CreateFunction),
    CreateSchema(CreateSchema),
    CreateSequence(CreateSequence),
    AlterTable {
        name: ObjectName,
        if_exists: bool,
        only: bool,
        operations: Vec<AlterTableOperation>,
    },
    Drop(Drop),
    Truncate {
        table_name: ObjectName,
        partitions: Vec<Expr>,
    },
    /// `EXPLAIN [ANALYZE] [VERBOSE] <statement>`
    Explain {
        analyze: bool,
        verbose: bool,
        statement: Box<Statement>,
    },
    /// `EXPLAIN TABLE t` (inspect schema, no plan)
    ExplainTable {
        table_name: ObjectName,
    },
    Use(ObjectName),
    Declare(Declare),
    Fetch(Fetch),
    Close {
        cursor: CloseCursor,
    },
    Prepare {
        name: Ident,
        data_types: Vec<crate::ast::data_type::DataType>,
        statement: Box<Statement>,
    },
    Execute {
        name: Ident,
        parameters: Vec<Expr>,
    },
    Deallocate {
        name: Ident,
        prepare: bool,
    },
    StartTransaction {
        modes: Vec<TransactionMode>,
    },
    Commit {
        chain: bool,
    },
    Rollback {
        chain: bool,
        savepoint: Option<Ident>,
    },
    Savepoint {
        name: Ident,
    },
    Grant {
        privileges: Vec<Action>,
        objects: GrantObjects,
        grantees: Vec<Ident>,
        with_grant_option: bool,
    },
    Revoke {
        privileges: Vec<Action>,
        objects: GrantObjects,
        grantees: Vec<Ident>,
        cascade: bool,
    },
    If(IfStatement),
    /// A bare identifier call, e.g. `CALL procedure_name(args)`.
    Call {
        name: ObjectName,
        args: Vec<Expr>,
    },
}

impl DialectDisplay for Statement {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            Statement::Query(q) => q.fmt(f, dialect),
            Statement::Insert(i) => i.fmt(f, dialect),
            Statement::Update(u) => u.fmt(f, dialect),
            Statement::Delete(d) => d.fmt(f, dialect),
            Statement::Merge(m) => m.fmt(f, dialect),
            Statement::Copy {
                source,
                to,
                target,
                options,
            } => {
                write!(f, "COPY ")?;
                source.fmt(f, dialect)?;
                write!(f, " {} ", if *to { "TO" } else { "FROM" })?;
                target.fmt(f, dialect)?;
                if !options.is_empty() {
                    write!(f, " WITH (")?;
                    display_comma_separated(options).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
            Statement::CreateTable(c) => c.fmt(f, dialect),
            Statement::CreateView(c) => c.fmt(f, dialect),
            Statement::CreateIndex(c) => c.fmt(f, dialect),
            Statement::CreateFunction(c) => c.fmt(f, dialect),
            Statement::CreateSchema(c) => c.fmt(f, dialect),
            Statement::CreateSequence(c) => c.fmt(f, dialect),
            Statement::AlterTable {
                name,
                if_exists,
                only,
                operations,
            } => {
                write!(f, "ALTER TABLE ")?;
                if *if_exists {
                    write!(f, "IF EXISTS ")?;
                }
                if *only {
                    write!(f, "ONLY ")?;
                }
                name.fmt(f, dialect)?;
                write!(f, " ")?;
                display_comma_separated(operations).fmt(f, dialect)
            }
            Statement::Drop(d) => d.fmt(f, dialect),
            Statement::Truncate {
                table_name,
                partitions,
            } => {
                write!(f, "TRUNCATE TABLE ")?;
                table_name.fmt(f, dialect)?;
                if !partitions.is_empty() {
                    write!(f, " PARTITION (")?;
                    display_comma_separated(partitions).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
            Statement::Explain {
                analyze,
                verbose,
                statement,
            } => {
                write!(f, "EXPLAIN ")?;
                if *analyze {
                    write!(f, "ANALYZE ")?;
                }
                if *verbose {
                    write!(f, "VERBOSE ")?;
                }
                statement.fmt(f, dialect)
            }
            Statement::ExplainTable { table_name } => {
                write!(f, "EXPLAIN TABLE ")?;
                table_name.fmt(f, dialect)
            }
            Statement::Use(name) => {
                write!(f, "USE ")?;
                name.fmt(f, dialect)
            }
            Statement::Declare(d) => d.fmt(f, dialect),
            Statement::Fetch(fe) => fe.fmt(f, dialect),
            Statement::Close { cursor } => {
                write!(f, "CLOSE ")?;
                cursor.fmt(f, dialect)
            }
            Statement::Prepare {
                name,
                data_types,
                statement,
            } => {
                write!(f, "PREPARE ")?;
                name.fmt(f, dialect)?;
                if !data_types.is_empty() {
                    write!(f, " (")?;
                    display_comma_separated(data_types).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                write!(f, " AS ")?;
                statement.fmt(f, dialect)
            }
            Statement::Execute { name, parameters } => {
                write!(f, "EXECUTE ")?;
                name.fmt(f, dialect)?;
                if !parameters.is_empty() {
                    write!(f, "(")?;
                    display_comma_separated(parameters).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
            Statement::Deallocate { name, prepare } => {
                write!(f, "DEALLOCATE {}", if *prepare { "PREPARE " } else { "" })?;
                name.fmt(f, dialect)
            }
            Statement::StartTransaction { modes } => {
                write!(f, "START TRANSACTION")?;
                if !modes.is_empty() {
                    write!(f, " ")?;
                    display_comma_separated(modes).fmt(f, dialect)?;
                }
                Ok(())
            }
            Statement::Commit { chain } => {
                write!(f, "COMMIT{}", if *chain { " AND CHAIN" } else { "" })
            }
            Statement::Rollback { chain, savepoint } => {
                write!(f, "ROLLBACK{}", if *chain { " AND CHAIN" } else { "" })?;
                if let Some(savepoint) = savepoint {
                    write!(f, " TO SAVEPOINT ")?;
                    savepoint.fmt(f, dialect)?;
                }
                Ok(())
            }
            Statement::Savepoint { name } => {
                write!(f, "SAVEPOINT ")?;
                name.fmt(f, dialect)
            }
            Statement::Grant {
                privileges,
                objects,
                grantees,
                with_grant_option,
            } => {
                write!(f, "GRANT ")?;
                display_comma_separated(privileges).fmt(f, dialect)?;
                write!(f, " ON ")?;
                objects.fmt(f, dialect)?;
                write!(f, " TO ")?;
                display_comma_separated(grantees).fmt(f, dialect)?;
                if *with_grant_option {
                    write!(f, " WITH GRANT OPTION")?;
                }
                Ok(())
            }
            Statement::Revoke {
                privileges,
                objects,
                grantees,
                cascade,
            } => {
                write!(f, "REVOKE ")?;
                display_comma_separated(privileges).fmt(f, dialect)?;
                write!(f, " ON ")?;
                objects.fmt(f, dialect)?;
                write!(f, " FROM ")?;
                display_comma_separated(grantees).fmt(f, dialect)?;
                if *cascade {
                    write!(f, " CASCADE")?;
                }
                Ok(())
            }
            Statement::If(i) => i.fmt(f, dialect),
            Statement::Call { name, args } => {
                write!(f, "CALL ")?;
                name.fmt(f, dialect)?;
                write!(f, "(")?;
                display_comma_separated(args).fmt(f, dialect)?;
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    #[test]
    fn explain_analyze_wraps_inner_statement() {
        let dialect = GenericDialect {};
        let stmt = Statement::Explain {
            analyze: true,
            verbose: false,
            statement: Box::new(Statement::Use(ObjectName(vec![Ident::new("db")]))),
        };
        assert_eq!(stmt.sql(&dialect).unwrap(), "EXPLAIN ANALYZE USE db");
    }

    #[test]
    fn rollback_to_savepoint() {
        let dialect = GenericDialect {};
        let stmt = Statement::Rollback {
            chain: false,
            savepoint: Some(Ident::new("sp1")),
        };
        assert_eq!(stmt.sql(&dialect).unwrap(), "ROLLBACK TO SAVEPOINT sp1");
    }

    #[test]
    fn if_statement_renders_elseif_and_else() {
        let dialect = GenericDialect {};
        let stmt = Statement::If(IfStatement {
            condition: Expr::Identifier(Ident::new("a")),
            then: vec![Statement::Call {
                name: ObjectName(vec![Ident::new("p1")]),
                args: vec![],
            }],
            elseif: vec![(
                Expr::Identifier(Ident::new("b")),
                vec![Statement::Call {
                    name: ObjectName(vec![Ident::new("p2")]),
                    args: vec![],
                }],
            )],
            else_: None,
        });
        assert_eq!(
            stmt.sql(&dialect).unwrap(),
            "IF a THEN CALL p1() ELSEIF b THEN CALL p2() END IF"
        );
    }
}
