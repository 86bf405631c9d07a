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

//! `INSERT`/`UPDATE`/`DELETE`/`MERGE` record types. `MergeClause` uses the
//! flat `(kind, predicate, action)` shape settled in DESIGN.md so
//! `NotMatchedByTarget`/`NotMatchedBySource` compose without a nested enum.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::expr::Expr;
use crate::ast::helpers::display_comma_separated;
use crate::ast::ident::{Ident, ObjectName};
use crate::ast::query::{Query, TableFactor, TableWithJoins};
use crate::dialect::{Dialect, DialectDisplay};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Insert {
    pub or: Option<SqliteOnConflict>,
    pub table_name: ObjectName,
    pub columns: Vec<Ident>,
    pub overwrite: bool,
    pub source: Option<Box<Query>>,
    /// Bare `INSERT INTO t DEFAULT VALUES` (no source).
    pub default_values: bool,
    pub partitioned: Vec<Expr>,
    pub after_columns: Vec<Ident>,
    pub table: bool,
    pub on: Option<OnInsert>,
    pub returning: Vec<crate::ast::query::SelectItem>,
}

impl DialectDisplay for Insert {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "INSERT ")?;
        if let Some(or) = &self.or {
            or.fmt(f, dialect)?;
            write!(f, " ")?;
        }
        write!(f, "{}", if self.overwrite { "OVERWRITE " } else { "" })?;
        write!(f, "INTO ")?;
        self.table_name.fmt(f, dialect)?;
        if !self.columns.is_empty() {
            write!(f, " (")?;
            display_comma_separated(&self.columns).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        if !self.partitioned.is_empty() {
            write!(f, " PARTITION (")?;
            display_comma_separated(&self.partitioned).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        if !self.after_columns.is_empty() {
            write!(f, " (")?;
            display_comma_separated(&self.after_columns).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        if self.default_values {
            write!(f, " DEFAULT VALUES")?;
        } else if let Some(source) = &self.source {
            write!(f, " ")?;
            source.fmt(f, dialect)?;
        }
        if let Some(on) = &self.on {
            write!(f, " ")?;
            on.fmt(f, dialect)?;
        }
        if !self.returning.is_empty() {
            write!(f, " RETURNING ")?;
            display_comma_separated(&self.returning).fmt(f, dialect)?;
        }
        Ok(())
    }
}

/// `INSERT OR { ABORT | FAIL | IGNORE | REPLACE | ROLLBACK }` (SQLite).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SqliteOnConflict {
    Abort,
    Fail,
    Ignore,
    Replace,
    Rollback,
}

impl DialectDisplay for SqliteOnConflict {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            SqliteOnConflict::Abort => "OR ABORT",
            SqliteOnConflict::Fail => "OR FAIL",
            SqliteOnConflict::Ignore => "OR IGNORE",
            SqliteOnConflict::Replace => "OR REPLACE",
            SqliteOnConflict::Rollback => "OR ROLLBACK",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OnInsert {
    /// MySQL `ON DUPLICATE KEY UPDATE col = val, ...`
    DuplicateKeyUpdate(Vec<Assignment>),
    /// Postgres/SQLite `ON CONFLICT (cols) DO { NOTHING | UPDATE SET ... }`
    OnConflict {
        columns: Vec<Ident>,
        action: OnConflictAction,
    },
}

impl DialectDisplay for OnInsert {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            OnInsert::DuplicateKeyUpdate(assignments) => {
                write!(f, "ON DUPLICATE KEY UPDATE ")?;
                display_comma_separated(assignments).fmt(f, dialect)
            }
            OnInsert::OnConflict { columns, action } => {
                write!(f, "ON CONFLICT")?;
                if !columns.is_empty() {
                    write!(f, " (")?;
                    display_comma_separated(columns).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                write!(f, " ")?;
                action.fmt(f, dialect)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OnConflictAction {
    DoNothing,
    DoUpdate {
        assignments: Vec<Assignment>,
        selection: Option<Expr>,
    },
}

impl DialectDisplay for OnConflictAction {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            OnConflictAction::DoNothing => write!(f, "DO NOTHING"),
            OnConflictAction::DoUpdate {
                assignments,
                selection,
            } => {
                write!(f, "DO UPDATE SET ")?;
                display_comma_separated(assignments).fmt(f, dialect)?;
                if let Some(selection) = selection {
                    write!(f, " WHERE ")?;
                    selection.fmt(f, dialect)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub id: Vec<Ident>,
    pub value: Expr,
}

impl DialectDisplay for Assignment {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        let mut delim = "";
        for part in &self.id {
            write!(f, "{delim}")?;
            delim = ".";
            part.fmt(f, dialect)?;
        }
        write!(f, " = ")?;
        self.value.fmt(f, dialect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Update {
    pub table: TableWithJoins,
    pub assignments: Vec<Assignment>,
    pub from: Option<TableWithJoins>,
    pub selection: Option<Expr>,
    pub returning: Vec<crate::ast::query::SelectItem>,
}

impl DialectDisplay for Update {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "UPDATE ")?;
        self.table.fmt(f, dialect)?;
        write!(f, " SET ")?;
        display_comma_separated(&self.assignments).fmt(f, dialect)?;
        if let Some(from) = &self.from {
            write!(f, " FROM ")?;
            from.fmt(f, dialect)?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE ")?;
            selection.fmt(f, dialect)?;
        }
        if !self.returning.is_empty() {
            write!(f, " RETURNING ")?;
            display_comma_separated(&self.returning).fmt(f, dialect)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delete {
    pub table_name: TableFactor,
    pub using: Option<TableFactor>,
    pub selection: Option<Expr>,
    pub returning: Vec<crate::ast::query::SelectItem>,
}

impl DialectDisplay for Delete {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "DELETE FROM ")?;
        self.table_name.fmt(f, dialect)?;
        if let Some(using) = &self.using {
            write!(f, " USING ")?;
            using.fmt(f, dialect)?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE ")?;
            selection.fmt(f, dialect)?;
        }
        if !self.returning.is_empty() {
            write!(f, " RETURNING ")?;
            display_comma_separated(&self.returning).fmt(f, dialect)?;
        }
        Ok(())
    }
}

/// Which side of the `MERGE` a clause applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MergeClauseKind {
    Matched,
    NotMatched,
    /// Snowflake `WHEN NOT MATCHED BY TARGET`.
    NotMatchedByTarget,
    /// Snowflake `WHEN NOT MATCHED BY SOURCE`.
    NotMatchedBySource,
}

impl DialectDisplay for MergeClauseKind {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            MergeClauseKind::Matched => "WHEN MATCHED",
            MergeClauseKind::NotMatched => "WHEN NOT MATCHED",
            MergeClauseKind::NotMatchedByTarget => "WHEN NOT MATCHED BY TARGET",
            MergeClauseKind::NotMatchedBySource => "WHEN NOT MATCHED BY SOURCE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MergeAction {
    Update { assignments: Vec<Assignment> },
    Delete,
    Insert {
        columns: Vec<Ident>,
        values: MergeInsertValues,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MergeInsertValues {
    Values(Vec<Expr>),
    Row,
}

impl DialectDisplay for MergeAction {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            MergeAction::Update { assignments } => {
                write!(f, "UPDATE SET ")?;
                display_comma_separated(assignments).fmt(f, dialect)
            }
            MergeAction::Delete => write!(f, "DELETE"),
            MergeAction::Insert { columns, values } => {
                write!(f, "INSERT")?;
                if !columns.is_empty() {
                    write!(f, " (")?;
                    display_comma_separated(columns).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                match values {
                    MergeInsertValues::Values(exprs) => {
                        write!(f, " VALUES (")?;
                        display_comma_separated(exprs).fmt(f, dialect)?;
                        write!(f, ")")
                    }
                    MergeInsertValues::Row => write!(f, " ROW"),
                }
            }
        }
    }
}

/// Flat `(kind, optional AND predicate, action)` shape (DESIGN.md §"Open
/// question resolutions" #2) so `NotMatchedByTarget`/`NotMatchedBySource`
/// are just another `MergeClauseKind`, not a nested enum layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeClause {
    pub clause_kind: MergeClauseKind,
    pub predicate: Option<Expr>,
    pub action: MergeAction,
}

impl DialectDisplay for MergeClause {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.clause_kind.fmt(f, dialect)?;
        if let Some(predicate) = &self.predicate {
            write!(f, " AND ")?;
            predicate.fmt(f, dialect)?;
        }
        write!(f, " THEN ")?;
        self.action.fmt(f, dialect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Merge {
    pub into: bool,
    pub table: TableFactor,
    pub source: TableFactor,
    pub on: Box<Expr>,
    pub clauses: Vec<MergeClause>,
}

impl DialectDisplay for Merge {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "MERGE {}", if self.into { "INTO " } else { "" })?;
        self.table.fmt(f, dialect)?;
        write!(f, " USING ")?;
        self.source.fmt(f, dialect)?;
        write!(f, " ON ")?;
        self.on.fmt(f, dialect)?;
        for clause in &self.clauses {
            write!(f, " ")?;
            clause.fmt(f, dialect)?;
        }
        Ok(())
    }
}

/// What `COPY` reads from / writes to: a table (optionally with an
/// explicit column list) or an arbitrary query (`COPY (SELECT ...) TO ...`,
/// Postgres-style).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CopySource {
    Table {
        table_name: ObjectName,
        columns: Vec<Ident>,
    },
    Query(Box<Query>),
}

impl DialectDisplay for CopySource {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            CopySource::Table { table_name, columns } => {
                table_name.fmt(f, dialect)?;
                if !columns.is_empty() {
                    write!(f, " (")?;
                    display_comma_separated(columns).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
            CopySource::Query(query) => {
                write!(f, "(")?;
                query.fmt(f, dialect)?;
                write!(f, ")")
            }
        }
    }
}

/// The file-side endpoint of a `COPY`: a literal path, or the `STDIN`/
/// `STDOUT` pseudo-files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CopyTarget {
    File(String),
    Stdin,
    Stdout,
}

impl DialectDisplay for CopyTarget {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        match self {
            CopyTarget::File(path) => write!(f, "'{}'", path.replace('\'', "''")),
            CopyTarget::Stdin => write!(f, "STDIN"),
            CopyTarget::Stdout => write!(f, "STDOUT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    #[test]
    fn merge_clause_renders_not_matched_by_target() {
        let dialect = GenericDialect {};
        let clause = MergeClause {
            clause_kind: MergeClauseKind::NotMatchedByTarget,
            predicate: None,
            action: MergeAction::Insert {
                columns: vec![Ident::new("id")],
                values: MergeInsertValues::Row,
            },
        };
        assert_eq!(
            clause.sql(&dialect).unwrap(),
            "WHEN NOT MATCHED BY TARGET THEN INSERT (id) ROW"
        );
    }

    #[test]
    fn on_conflict_do_nothing() {
        let dialect = GenericDialect {};
        let on = OnInsert::OnConflict {
            columns: vec![Ident::new("id")],
            action: OnConflictAction::DoNothing,
        };
        assert_eq!(on.sql(&dialect).unwrap(), "ON CONFLICT (id) DO NOTHING");
    }
}
