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

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::expr::{Expr, Function, FunctionArg, WindowSpec};
use crate::ast::helpers::display_comma_separated;
use crate::ast::ident::{Ident, ObjectName};
use crate::dialect::{Dialect, DialectDisplay};

/// The most complete variant of a `SELECT` query expression, optionally
/// including `WITH`, `UNION` / other set operations, and `ORDER BY`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    /// WITH (common table expressions, or CTEs)
    pub with: Option<With>,
    /// SELECT or UNION / EXCEPT / INTERSECT
    pub body: Box<SetExpr>,
    /// ORDER BY
    pub order_by: Vec<OrderByExpr>,
    /// `LIMIT { <N> | ALL }`
    pub limit: Option<Expr>,
    /// `OFFSET <N> [ { ROW | ROWS } ]`
    pub offset: Option<Offset>,
    /// `FETCH { FIRST | NEXT } <N> [ PERCENT ] { ROW | ROWS } | { ONLY | WITH TIES }`
    pub fetch: Option<Fetch>,
    /// `FOR { UPDATE | SHARE }`
    pub lock: Option<LockType>,
}

impl DialectDisplay for Query {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        if let Some(with) = &self.with {
            with.fmt(f, dialect)?;
            write!(f, " ")?;
        }
        self.body.fmt(f, dialect)?;
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY ")?;
            display_comma_separated(&self.order_by).fmt(f, dialect)?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT ")?;
            limit.fmt(f, dialect)?;
        }
        if let Some(offset) = &self.offset {
            write!(f, " ")?;
            offset.fmt(f, dialect)?;
        }
        if let Some(fetch) = &self.fetch {
            write!(f, " ")?;
            fetch.fmt(f, dialect)?;
        }
        if let Some(lock) = &self.lock {
            write!(f, " ")?;
            lock.fmt(f, dialect)?;
        }
        Ok(())
    }
}

/// A node in a tree, representing a "query body" expression, roughly:
/// `SELECT ... [ {UNION|EXCEPT|INTERSECT} SELECT ...]`
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SetExpr {
    /// Restricted SELECT .. FROM .. HAVING (no ORDER BY or set operations)
    Select(Box<Select>),
    /// Parenthesized SELECT subquery, which may include more set operations
    /// in its body and an optional ORDER BY / LIMIT.
    Query(Box<Query>),
    /// UNION/EXCEPT/INTERSECT of two queries
    SetOperation {
        op: SetOperator,
        all: bool,
        left: Box<SetExpr>,
        right: Box<SetExpr>,
    },
    Values(Values),
    Table(Box<ObjectName>),
}

impl DialectDisplay for SetExpr {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            SetExpr::Select(s) => s.fmt(f, dialect),
            SetExpr::Query(q) => {
                write!(f, "(")?;
                q.fmt(f, dialect)?;
                write!(f, ")")
            }
            SetExpr::Values(v) => v.fmt(f, dialect),
            SetExpr::Table(name) => {
                write!(f, "TABLE ")?;
                name.fmt(f, dialect)
            }
            SetExpr::SetOperation {
                left,
                right,
                op,
                all,
            } => {
                left.fmt(f, dialect)?;
                write!(f, " ")?;
                op.fmt(f, dialect)?;
                if *all {
                    write!(f, " ALL")?;
                }
                write!(f, " ")?;
                right.fmt(f, dialect)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SetOperator {
    Union,
    Except,
    Intersect,
}

impl DialectDisplay for SetOperator {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            SetOperator::Union => "UNION",
            SetOperator::Except => "EXCEPT",
            SetOperator::Intersect => "INTERSECT",
        })
    }
}

/// `SELECT DISTINCT` vs `SELECT DISTINCT ON (exprs)` (Postgres).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distinct {
    Distinct,
    On(Vec<Expr>),
}

impl DialectDisplay for Distinct {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            Distinct::Distinct => write!(f, "DISTINCT"),
            Distinct::On(exprs) => {
                write!(f, "DISTINCT ON (")?;
                display_comma_separated(exprs).fmt(f, dialect)?;
                write!(f, ")")
            }
        }
    }
}

/// A `WINDOW name AS (...)` clause entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedWindowDefinition(pub Ident, pub WindowSpec);

impl DialectDisplay for NamedWindowDefinition {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.0.fmt(f, dialect)?;
        write!(f, " AS (")?;
        self.1.fmt(f, dialect)?;
        write!(f, ")")
    }
}

/// A restricted variant of `SELECT` (without CTEs/`ORDER BY`), which may
/// appear either as the only body item of a `Query`, or as an operand
/// to a set operation like `UNION`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Select {
    pub distinct: Option<Distinct>,
    /// MSSQL syntax: `TOP (<N>) [ PERCENT ] [ WITH TIES ]`
    pub top: Option<Top>,
    /// projection expressions
    pub projection: Vec<SelectItem>,
    /// INTO
    pub into: Option<SelectInto>,
    /// FROM
    pub from: Vec<TableWithJoins>,
    /// LATERAL VIEWs
    pub lateral_views: Vec<LateralView>,
    /// WHERE
    pub selection: Option<Expr>,
    /// GROUP BY; `ROLLUP`/`CUBE`/`GROUPING SETS` are `Expr` variants of
    /// their own so no separate field is needed for them.
    pub group_by: Vec<Expr>,
    /// HAVING
    pub having: Option<Expr>,
    /// Snowflake/DuckDB `QUALIFY <expr>`, applied after window functions.
    pub qualify: Option<Expr>,
    /// `WINDOW name AS (...), ...`
    pub named_window: Vec<NamedWindowDefinition>,
}

impl DialectDisplay for Select {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "SELECT")?;
        if let Some(distinct) = &self.distinct {
            write!(f, " ")?;
            distinct.fmt(f, dialect)?;
        }
        if let Some(top) = &self.top {
            write!(f, " ")?;
            top.fmt(f, dialect)?;
        }
        write!(f, " ")?;
        display_comma_separated(&self.projection).fmt(f, dialect)?;

        if let Some(into) = &self.into {
            write!(f, " ")?;
            into.fmt(f, dialect)?;
        }

        if !self.from.is_empty() {
            write!(f, " FROM ")?;
            display_comma_separated(&self.from).fmt(f, dialect)?;
        }
        for lv in &self.lateral_views {
            lv.fmt(f, dialect)?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE ")?;
            selection.fmt(f, dialect)?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY ")?;
            display_comma_separated(&self.group_by).fmt(f, dialect)?;
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING ")?;
            having.fmt(f, dialect)?;
        }
        if !self.named_window.is_empty() {
            write!(f, " WINDOW ")?;
            display_comma_separated(&self.named_window).fmt(f, dialect)?;
        }
        if let Some(qualify) = &self.qualify {
            write!(f, " QUALIFY ")?;
            qualify.fmt(f, dialect)?;
        }
        Ok(())
    }
}

/// A Hive `LATERAL VIEW`, with potential column aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LateralView {
    pub lateral_view: Expr,
    pub lateral_view_name: ObjectName,
    pub lateral_col_alias: Vec<Ident>,
    pub outer: bool,
}

impl DialectDisplay for LateralView {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, " LATERAL VIEW{} ", if self.outer { " OUTER" } else { "" })?;
        self.lateral_view.fmt(f, dialect)?;
        write!(f, " ")?;
        self.lateral_view_name.fmt(f, dialect)?;
        if !self.lateral_col_alias.is_empty() {
            write!(f, " AS ")?;
            display_comma_separated(&self.lateral_col_alias).fmt(f, dialect)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct With {
    pub recursive: bool,
    pub cte_tables: Vec<Cte>,
}

impl DialectDisplay for With {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "WITH {}", if self.recursive { "RECURSIVE " } else { "" })?;
        display_comma_separated(&self.cte_tables).fmt(f, dialect)
    }
}

/// A single CTE (used after `WITH`): `alias [(col1, col2, ...)] AS ( query )`.
/// The parser does not validate that the number of columns named before `AS`
/// matches the number of columns the query actually returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cte {
    pub alias: TableAlias,
    pub query: Query,
    pub from: Option<Ident>,
}

impl DialectDisplay for Cte {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.alias.fmt(f, dialect)?;
        write!(f, " AS (")?;
        self.query.fmt(f, dialect)?;
        write!(f, ")")?;
        if let Some(from) = &self.from {
            write!(f, " FROM ")?;
            from.fmt(f, dialect)?;
        }
        Ok(())
    }
}

/// One item of the comma-separated list following `SELECT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectItem {
    UnnamedExpr(Expr),
    ExprWithAlias { expr: Expr, alias: Ident },
    QualifiedWildcard(ObjectName),
    Wildcard,
}

impl DialectDisplay for SelectItem {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            SelectItem::UnnamedExpr(expr) => expr.fmt(f, dialect),
            SelectItem::ExprWithAlias { expr, alias } => {
                expr.fmt(f, dialect)?;
                write!(f, " AS ")?;
                alias.fmt(f, dialect)
            }
            SelectItem::QualifiedWildcard(prefix) => {
                prefix.fmt(f, dialect)?;
                write!(f, ".*")
            }
            SelectItem::Wildcard => write!(f, "*"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableWithJoins {
    pub relation: TableFactor,
    pub joins: Vec<Join>,
}

impl DialectDisplay for TableWithJoins {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.relation.fmt(f, dialect)?;
        for join in &self.joins {
            join.fmt(f, dialect)?;
        }
        Ok(())
    }
}

/// A table name or a parenthesized subquery with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TableFactor {
    Table {
        name: ObjectName,
        alias: Option<TableAlias>,
        /// Arguments of a table-valued function (Postgres, MSSQL). `Some(v)`
        /// (possibly empty) marks a function call; `None` a plain table.
        args: Option<Vec<FunctionArg>>,
        /// MSSQL `WITH (...)` hints such as `NOLOCK`.
        with_hints: Vec<Expr>,
    },
    Derived {
        lateral: bool,
        subquery: Box<Query>,
        alias: Option<TableAlias>,
    },
    /// `TABLE(<expr>)[ AS <alias> ]`
    TableFunction {
        expr: Expr,
        alias: Option<TableAlias>,
    },
    /// `UNNEST(array_expr) [WITH OFFSET [AS alias]]`
    UNNEST {
        alias: Option<TableAlias>,
        array_expr: Box<Expr>,
        with_offset: bool,
        with_offset_alias: Option<Ident>,
    },
    /// A parenthesized table factor. The grammar only requires this for a
    /// join expression, but some dialects additionally allow nesting bare
    /// tables; that extra nesting is not retained in the AST.
    NestedJoin(Box<TableWithJoins>),
}

impl DialectDisplay for TableFactor {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            TableFactor::Table {
                name,
                alias,
                args,
                with_hints,
            } => {
                name.fmt(f, dialect)?;
                if let Some(args) = args {
                    write!(f, "(")?;
                    display_comma_separated(args).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                if let Some(alias) = alias {
                    write!(f, " AS ")?;
                    alias.fmt(f, dialect)?;
                }
                if !with_hints.is_empty() {
                    write!(f, " WITH (")?;
                    display_comma_separated(with_hints).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
            TableFactor::Derived {
                lateral,
                subquery,
                alias,
            } => {
                if *lateral {
                    write!(f, "LATERAL ")?;
                }
                write!(f, "(")?;
                subquery.fmt(f, dialect)?;
                write!(f, ")")?;
                if let Some(alias) = alias {
                    write!(f, " AS ")?;
                    alias.fmt(f, dialect)?;
                }
                Ok(())
            }
            TableFactor::TableFunction { expr, alias } => {
                write!(f, "TABLE(")?;
                expr.fmt(f, dialect)?;
                write!(f, ")")?;
                if let Some(alias) = alias {
                    write!(f, " AS ")?;
                    alias.fmt(f, dialect)?;
                }
                Ok(())
            }
            TableFactor::UNNEST {
                alias,
                array_expr,
                with_offset,
                with_offset_alias,
            } => {
                write!(f, "UNNEST(")?;
                array_expr.fmt(f, dialect)?;
                write!(f, ")")?;
                if let Some(alias) = alias {
                    write!(f, " AS ")?;
                    alias.fmt(f, dialect)?;
                }
                if *with_offset {
                    write!(f, " WITH OFFSET")?;
                }
                if let Some(alias) = with_offset_alias {
                    write!(f, " AS ")?;
                    alias.fmt(f, dialect)?;
                }
                Ok(())
            }
            TableFactor::NestedJoin(table_reference) => {
                write!(f, "(")?;
                table_reference.fmt(f, dialect)?;
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableAlias {
    pub name: Ident,
    pub columns: Vec<Ident>,
}

impl DialectDisplay for TableAlias {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.name.fmt(f, dialect)?;
        if !self.columns.is_empty() {
            write!(f, " (")?;
            display_comma_separated(&self.columns).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Join {
    pub relation: TableFactor,
    pub join_operator: JoinOperator,
}

impl DialectDisplay for Join {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        fn prefix(constraint: &JoinConstraint) -> &'static str {
            match constraint {
                JoinConstraint::Natural => "NATURAL ",
                _ => "",
            }
        }
        fn suffix(
            f: &mut dyn fmt::Write,
            dialect: &dyn Dialect,
            constraint: &JoinConstraint,
        ) -> fmt::Result {
            match constraint {
                JoinConstraint::On(expr) => {
                    write!(f, " ON ")?;
                    expr.fmt(f, dialect)
                }
                JoinConstraint::Using(attrs) => {
                    write!(f, " USING(")?;
                    display_comma_separated(attrs).fmt(f, dialect)?;
                    write!(f, ")")
                }
                _ => Ok(()),
            }
        }
        match &self.join_operator {
            JoinOperator::Inner(constraint) => {
                write!(f, " {}JOIN ", prefix(constraint))?;
                self.relation.fmt(f, dialect)?;
                suffix(f, dialect, constraint)
            }
            JoinOperator::LeftOuter(constraint) => {
                write!(f, " {}LEFT JOIN ", prefix(constraint))?;
                self.relation.fmt(f, dialect)?;
                suffix(f, dialect, constraint)
            }
            JoinOperator::RightOuter(constraint) => {
                write!(f, " {}RIGHT JOIN ", prefix(constraint))?;
                self.relation.fmt(f, dialect)?;
                suffix(f, dialect, constraint)
            }
            JoinOperator::FullOuter(constraint) => {
                write!(f, " {}FULL JOIN ", prefix(constraint))?;
                self.relation.fmt(f, dialect)?;
                suffix(f, dialect, constraint)
            }
            JoinOperator::LeftSemi(constraint) => {
                write!(f, " {}LEFT SEMI JOIN ", prefix(constraint))?;
                self.relation.fmt(f, dialect)?;
                suffix(f, dialect, constraint)
            }
            JoinOperator::RightSemi(constraint) => {
                write!(f, " {}RIGHT SEMI JOIN ", prefix(constraint))?;
                self.relation.fmt(f, dialect)?;
                suffix(f, dialect, constraint)
            }
            JoinOperator::LeftAnti(constraint) => {
                write!(f, " {}LEFT ANTI JOIN ", prefix(constraint))?;
                self.relation.fmt(f, dialect)?;
                suffix(f, dialect, constraint)
            }
            JoinOperator::RightAnti(constraint) => {
                write!(f, " {}RIGHT ANTI JOIN ", prefix(constraint))?;
                self.relation.fmt(f, dialect)?;
                suffix(f, dialect, constraint)
            }
            JoinOperator::AsOf {
                match_condition,
                constraint,
            } => {
                write!(f, " ASOF JOIN ")?;
                self.relation.fmt(f, dialect)?;
                write!(f, " MATCH_CONDITION (")?;
                match_condition.fmt(f, dialect)?;
                write!(f, ")")?;
                suffix(f, dialect, constraint)
            }
            JoinOperator::CrossJoin => {
                write!(f, " CROSS JOIN ")?;
                self.relation.fmt(f, dialect)
            }
            JoinOperator::CrossApply => {
                write!(f, " CROSS APPLY ")?;
                self.relation.fmt(f, dialect)
            }
            JoinOperator::OuterApply => {
                write!(f, " OUTER APPLY ")?;
                self.relation.fmt(f, dialect)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JoinOperator {
    Inner(JoinConstraint),
    LeftOuter(JoinConstraint),
    RightOuter(JoinConstraint),
    FullOuter(JoinConstraint),
    /// Spark/Databricks `LEFT SEMI JOIN`.
    LeftSemi(JoinConstraint),
    RightSemi(JoinConstraint),
    /// Spark/Databricks `LEFT ANTI JOIN`.
    LeftAnti(JoinConstraint),
    RightAnti(JoinConstraint),
    /// Snowflake `ASOF JOIN ... MATCH_CONDITION (...)`.
    AsOf {
        match_condition: Expr,
        constraint: JoinConstraint,
    },
    CrossJoin,
    /// `CROSS APPLY` (non-standard, MSSQL)
    CrossApply,
    /// `OUTER APPLY` (non-standard, MSSQL)
    OuterApply,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JoinConstraint {
    On(Expr),
    Using(Vec<Ident>),
    Natural,
    None,
}

/// An `ORDER BY` expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderByExpr {
    pub expr: Expr,
    pub asc: Option<bool>,
    pub nulls_first: Option<bool>,
}

impl DialectDisplay for OrderByExpr {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.expr.fmt(f, dialect)?;
        match self.asc {
            Some(true) => write!(f, " ASC")?,
            Some(false) => write!(f, " DESC")?,
            None => (),
        }
        match self.nulls_first {
            Some(true) => write!(f, " NULLS FIRST")?,
            Some(false) => write!(f, " NULLS LAST")?,
            None => (),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    pub value: Expr,
    pub rows: OffsetRows,
}

impl DialectDisplay for Offset {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "OFFSET ")?;
        self.value.fmt(f, dialect)?;
        self.rows.fmt(f, dialect)
    }
}

/// Stores the keyword after `OFFSET <number>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OffsetRows {
    /// Omitting ROW/ROWS is a non-standard MySQL quirk.
    None,
    Row,
    Rows,
}

impl DialectDisplay for OffsetRows {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        match self {
            OffsetRows::None => Ok(()),
            OffsetRows::Row => write!(f, " ROW"),
            OffsetRows::Rows => write!(f, " ROWS"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fetch {
    pub with_ties: bool,
    pub percent: bool,
    pub quantity: Option<Expr>,
}

impl DialectDisplay for Fetch {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        let extension = if self.with_ties { "WITH TIES" } else { "ONLY" };
        if let Some(quantity) = &self.quantity {
            write!(f, "FETCH FIRST ")?;
            quantity.fmt(f, dialect)?;
            write!(f, "{} ROWS {extension}", if self.percent { " PERCENT" } else { "" })
        } else {
            write!(f, "FETCH FIRST ROWS {extension}")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LockType {
    Share,
    Update,
}

impl DialectDisplay for LockType {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            LockType::Share => "FOR SHARE",
            LockType::Update => "FOR UPDATE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Top {
    pub with_ties: bool,
    pub percent: bool,
    pub quantity: Option<Expr>,
}

impl DialectDisplay for Top {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        let extension = if self.with_ties { " WITH TIES" } else { "" };
        if let Some(quantity) = &self.quantity {
            write!(f, "TOP (")?;
            quantity.fmt(f, dialect)?;
            write!(f, "){}{extension}", if self.percent { " PERCENT" } else { "" })
        } else {
            write!(f, "TOP{extension}")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Values(pub Vec<Vec<Expr>>);

impl DialectDisplay for Values {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "VALUES ")?;
        let mut delim = "";
        for row in &self.0 {
            write!(f, "{delim}(")?;
            delim = ", ";
            display_comma_separated(row).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectInto {
    pub temporary: bool,
    pub unlogged: bool,
    pub table: bool,
    pub name: ObjectName,
}

impl DialectDisplay for SelectInto {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(
            f,
            "INTO{}{}{} ",
            if self.temporary { " TEMPORARY" } else { "" },
            if self.unlogged { " UNLOGGED" } else { "" },
            if self.table { " TABLE" } else { "" },
        )?;
        self.name.fmt(f, dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    fn wildcard_select() -> Select {
        Select {
            distinct: None,
            top: None,
            projection: vec![SelectItem::Wildcard],
            into: None,
            from: vec![TableWithJoins {
                relation: TableFactor::Table {
                    name: ObjectName(vec![Ident::new("t")]),
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
        }
    }

    #[test]
    fn select_star_from_table() {
        let dialect = GenericDialect {};
        let select = wildcard_select();
        assert_eq!(select.sql(&dialect).unwrap(), "SELECT * FROM t");
    }

    #[test]
    fn distinct_on_renders_expr_list() {
        let dialect = GenericDialect {};
        let mut select = wildcard_select();
        select.distinct = Some(Distinct::On(vec![Expr::Identifier(Ident::new("a"))]));
        assert_eq!(
            select.sql(&dialect).unwrap(),
            "SELECT DISTINCT ON (a) * FROM t"
        );
    }

    #[test]
    fn asof_join_renders_match_condition() {
        let dialect = GenericDialect {};
        let join = Join {
            relation: TableFactor::Table {
                name: ObjectName(vec![Ident::new("quotes")]),
                alias: None,
                args: None,
                with_hints: vec![],
            },
            join_operator: JoinOperator::AsOf {
                match_condition: Expr::BinaryOp {
                    left: Box::new(Expr::Identifier(Ident::new("a"))),
                    op: crate::ast::operator::BinaryOperator::Lt,
                    right: Box::new(Expr::Identifier(Ident::new("b"))),
                },
                constraint: JoinConstraint::None,
            },
        };
        assert_eq!(
            join.sql(&dialect).unwrap(),
            " ASOF JOIN quotes MATCH_CONDITION (a < b)"
        );
    }
}
