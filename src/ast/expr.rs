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

//! The `Expression` sum type (spec.md §3) and its supporting records:
//! function calls, window specs, `CAST` family, and the handful of
//! keyword-embedded forms (`EXTRACT`, `POSITION`, `SUBSTRING`, `TRIM`,
//! `OVERLAY`).

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::data_type::DataType;
use crate::ast::helpers::display_comma_separated;
use crate::ast::ident::{Ident, ObjectName};
use crate::ast::operator::{BinaryOperator, UnaryOperator};
use crate::ast::query::Query;
use crate::ast::value::{DateTimeField, TrimWhereField, Value};
use crate::dialect::{Dialect, DialectDisplay};

/// Distinguishes the four surface spellings that all produce a `Cast` node
/// (spec.md §3 invariant), so the printer recovers the original form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastKind {
    /// `CAST(expr AS type)`
    Cast,
    /// `TRY_CAST(expr AS type)`
    TryCast,
    /// `SAFE_CAST(expr AS type)` (BigQuery)
    SafeCast,
    /// `expr::type`
    DoubleColon,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Identifier(Ident),
    CompoundIdentifier(Vec<Ident>),
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    UnaryOp {
        op: UnaryOperator,
        expr: Box<Expr>,
    },
    Cast {
        kind: CastKind,
        expr: Box<Expr>,
        data_type: DataType,
        format: Option<Box<Expr>>,
    },
    Case {
        operand: Option<Box<Expr>>,
        conditions: Vec<Expr>,
        results: Vec<Expr>,
        else_result: Option<Box<Expr>>,
    },
    Function(Function),
    Subquery(Box<Query>),
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    InSubquery {
        expr: Box<Expr>,
        subquery: Box<Query>,
        negated: bool,
    },
    /// `expr IN UNNEST(array_expr)` -- parses in preference to the generic
    /// `IN (...)` form when the dialect supports array unnesting (spec.md
    /// §4.F point 11: "the most specific form wins").
    InUnnest {
        expr: Box<Expr>,
        array_expr: Box<Expr>,
        negated: bool,
    },
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    Like {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape_char: Option<char>,
    },
    ILike {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape_char: Option<char>,
    },
    SimilarTo {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape_char: Option<char>,
    },
    RLike {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        /// MySQL spells the case-insensitive variant `REGEXP`.
        regexp: bool,
    },
    IsNull(Box<Expr>),
    IsNotNull(Box<Expr>),
    IsTrue(Box<Expr>),
    IsNotTrue(Box<Expr>),
    IsFalse(Box<Expr>),
    IsNotFalse(Box<Expr>),
    IsUnknown(Box<Expr>),
    IsNotUnknown(Box<Expr>),
    IsDistinctFrom(Box<Expr>, Box<Expr>),
    IsNotDistinctFrom(Box<Expr>, Box<Expr>),
    Extract {
        field: DateTimeField,
        expr: Box<Expr>,
    },
    Position {
        expr: Box<Expr>,
        r#in: Box<Expr>,
    },
    Substring {
        expr: Box<Expr>,
        substring_from: Option<Box<Expr>>,
        substring_for: Option<Box<Expr>>,
    },
    Trim {
        expr: Box<Expr>,
        trim_where: Option<TrimWhereField>,
        trim_what: Option<Box<Expr>>,
    },
    Overlay {
        expr: Box<Expr>,
        overlay_what: Box<Expr>,
        overlay_from: Box<Expr>,
        overlay_for: Option<Box<Expr>>,
    },
    Tuple(Vec<Expr>),
    Array(Vec<Expr>),
    /// `a['k']` / `a[0]`
    MapAccess {
        column: Box<Expr>,
        keys: Vec<Expr>,
    },
    /// A parenthesized expression, inserted only where the printer must
    /// not lose grouping (spec.md §3 invariant).
    Nested(Box<Expr>),
    /// Bare `*`.
    Wildcard,
    /// `alias.*` / `schema.table.*`.
    QualifiedWildcard(ObjectName),
    TypedString {
        data_type: DataType,
        value: String,
    },
    Interval(Box<Value>),
    Lambda {
        params: Vec<Ident>,
        body: Box<Expr>,
    },
    AtTimeZone {
        timestamp: Box<Expr>,
        time_zone: Box<Expr>,
    },
    Collate {
        expr: Box<Expr>,
        collation: ObjectName,
    },
    Exists {
        subquery: Box<Query>,
        negated: bool,
    },
    AllOp {
        left: Box<Expr>,
        compare_op: BinaryOperator,
        right: Box<Query>,
    },
    AnyOp {
        left: Box<Expr>,
        compare_op: BinaryOperator,
        right: Box<Query>,
    },
    MatchAgainst {
        columns: Vec<Ident>,
        match_value: Value,
        opt_search_modifier: Option<String>,
    },
    GroupingSets(Vec<Vec<Expr>>),
    Cube(Vec<Vec<Expr>>),
    Rollup(Vec<Vec<Expr>>),
    Value(Value),
}

impl Expr {
    pub fn value(v: Value) -> Expr {
        Expr::Value(v)
    }
}

impl DialectDisplay for Expr {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            Expr::Identifier(ident) => ident.fmt(f, dialect),
            Expr::CompoundIdentifier(parts) => display_sep_dot(f, parts, dialect),
            Expr::BinaryOp { left, op, right } => {
                left.fmt(f, dialect)?;
                write!(f, " ")?;
                op.fmt(f, dialect)?;
                write!(f, " ")?;
                right.fmt(f, dialect)
            }
            Expr::UnaryOp { op, expr } => match op {
                UnaryOperator::PGPostfixFactorial => {
                    expr.fmt(f, dialect)?;
                    write!(f, "!")
                }
                _ => {
                    op.fmt(f, dialect)?;
                    write!(f, " ")?;
                    expr.fmt(f, dialect)
                }
            },
            Expr::Cast {
                kind,
                expr,
                data_type,
                format,
            } => {
                let name = match kind {
                    CastKind::Cast => "CAST",
                    CastKind::TryCast => "TRY_CAST",
                    CastKind::SafeCast => "SAFE_CAST",
                    CastKind::DoubleColon => {
                        expr.fmt(f, dialect)?;
                        write!(f, "::")?;
                        return data_type.fmt(f, dialect);
                    }
                };
                write!(f, "{name}(")?;
                expr.fmt(f, dialect)?;
                write!(f, " AS ")?;
                data_type.fmt(f, dialect)?;
                if let Some(format) = format {
                    write!(f, " FORMAT ")?;
                    format.fmt(f, dialect)?;
                }
                write!(f, ")")
            }
            Expr::Case {
                operand,
                conditions,
                results,
                else_result,
            } => {
                write!(f, "CASE")?;
                if let Some(operand) = operand {
                    write!(f, " ")?;
                    operand.fmt(f, dialect)?;
                }
                for (c, r) in conditions.iter().zip(results.iter()) {
                    write!(f, " WHEN ")?;
                    c.fmt(f, dialect)?;
                    write!(f, " THEN ")?;
                    r.fmt(f, dialect)?;
                }
                if let Some(else_result) = else_result {
                    write!(f, " ELSE ")?;
                    else_result.fmt(f, dialect)?;
                }
                write!(f, " END")
            }
            Expr::Function(function) => function.fmt(f, dialect),
            Expr::Subquery(query) => {
                write!(f, "(")?;
                query.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::InList {
                expr,
                list,
                negated,
            } => {
                expr.fmt(f, dialect)?;
                write!(f, " {}IN (", neg(*negated))?;
                display_comma_separated(list).fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::InSubquery {
                expr,
                subquery,
                negated,
            } => {
                expr.fmt(f, dialect)?;
                write!(f, " {}IN (", neg(*negated))?;
                subquery.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::InUnnest {
                expr,
                array_expr,
                negated,
            } => {
                expr.fmt(f, dialect)?;
                write!(f, " {}IN UNNEST(", neg(*negated))?;
                array_expr.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::Between {
                expr,
                negated,
                low,
                high,
            } => {
                expr.fmt(f, dialect)?;
                write!(f, " {}BETWEEN ", neg(*negated))?;
                low.fmt(f, dialect)?;
                write!(f, " AND ")?;
                high.fmt(f, dialect)
            }
            Expr::Like {
                negated,
                expr,
                pattern,
                escape_char,
            } => fmt_like(f, dialect, "LIKE", *negated, expr, pattern, *escape_char),
            Expr::ILike {
                negated,
                expr,
                pattern,
                escape_char,
            } => fmt_like(f, dialect, "ILIKE", *negated, expr, pattern, *escape_char),
            Expr::SimilarTo {
                negated,
                expr,
                pattern,
                escape_char,
            } => fmt_like(
                f,
                dialect,
                "SIMILAR TO",
                *negated,
                expr,
                pattern,
                *escape_char,
            ),
            Expr::RLike {
                negated,
                expr,
                pattern,
                regexp,
            } => {
                expr.fmt(f, dialect)?;
                write!(
                    f,
                    " {}{} ",
                    neg(*negated),
                    if *regexp { "REGEXP" } else { "RLIKE" }
                )?;
                pattern.fmt(f, dialect)
            }
            Expr::IsNull(e) => fmt_is(f, dialect, e, "NULL"),
            Expr::IsNotNull(e) => fmt_is(f, dialect, e, "NOT NULL"),
            Expr::IsTrue(e) => fmt_is(f, dialect, e, "TRUE"),
            Expr::IsNotTrue(e) => fmt_is(f, dialect, e, "NOT TRUE"),
            Expr::IsFalse(e) => fmt_is(f, dialect, e, "FALSE"),
            Expr::IsNotFalse(e) => fmt_is(f, dialect, e, "NOT FALSE"),
            Expr::IsUnknown(e) => fmt_is(f, dialect, e, "UNKNOWN"),
            Expr::IsNotUnknown(e) => fmt_is(f, dialect, e, "NOT UNKNOWN"),
            Expr::IsDistinctFrom(l, r) => {
                l.fmt(f, dialect)?;
                write!(f, " IS DISTINCT FROM ")?;
                r.fmt(f, dialect)
            }
            Expr::IsNotDistinctFrom(l, r) => {
                l.fmt(f, dialect)?;
                write!(f, " IS NOT DISTINCT FROM ")?;
                r.fmt(f, dialect)
            }
            Expr::Extract { field, expr } => {
                write!(f, "EXTRACT(")?;
                field.fmt(f, dialect)?;
                write!(f, " FROM ")?;
                expr.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::Position { expr, r#in } => {
                write!(f, "POSITION(")?;
                expr.fmt(f, dialect)?;
                write!(f, " IN ")?;
                r#in.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::Substring {
                expr,
                substring_from,
                substring_for,
            } => {
                write!(f, "SUBSTRING(")?;
                expr.fmt(f, dialect)?;
                if let Some(from) = substring_from {
                    write!(f, " FROM ")?;
                    from.fmt(f, dialect)?;
                }
                if let Some(for_) = substring_for {
                    write!(f, " FOR ")?;
                    for_.fmt(f, dialect)?;
                }
                write!(f, ")")
            }
            Expr::Trim {
                expr,
                trim_where,
                trim_what,
            } => {
                write!(f, "TRIM(")?;
                if let Some(trim_where) = trim_where {
                    trim_where.fmt(f, dialect)?;
                    write!(f, " ")?;
                }
                if let Some(trim_what) = trim_what {
                    trim_what.fmt(f, dialect)?;
                    write!(f, " FROM ")?;
                }
                expr.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::Overlay {
                expr,
                overlay_what,
                overlay_from,
                overlay_for,
            } => {
                write!(f, "OVERLAY(")?;
                expr.fmt(f, dialect)?;
                write!(f, " PLACING ")?;
                overlay_what.fmt(f, dialect)?;
                write!(f, " FROM ")?;
                overlay_from.fmt(f, dialect)?;
                if let Some(for_) = overlay_for {
                    write!(f, " FOR ")?;
                    for_.fmt(f, dialect)?;
                }
                write!(f, ")")
            }
            Expr::Tuple(exprs) => {
                write!(f, "(")?;
                display_comma_separated(exprs).fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::Array(exprs) => {
                write!(f, "[")?;
                display_comma_separated(exprs).fmt(f, dialect)?;
                write!(f, "]")
            }
            Expr::MapAccess { column, keys } => {
                column.fmt(f, dialect)?;
                for key in keys {
                    write!(f, "[")?;
                    key.fmt(f, dialect)?;
                    write!(f, "]")?;
                }
                Ok(())
            }
            Expr::Nested(expr) => {
                write!(f, "(")?;
                expr.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::Wildcard => write!(f, "*"),
            Expr::QualifiedWildcard(name) => {
                name.fmt(f, dialect)?;
                write!(f, ".*")
            }
            Expr::TypedString { data_type, value } => {
                data_type.fmt(f, dialect)?;
                write!(f, " '{value}'")
            }
            Expr::Interval(value) => value.fmt(f, dialect),
            Expr::Lambda { params, body } => {
                if params.len() == 1 {
                    params[0].fmt(f, dialect)?;
                } else {
                    write!(f, "(")?;
                    display_comma_separated(params).fmt(f, dialect)?;
                    write!(f, ")")?;
                }
                write!(f, " -> ")?;
                body.fmt(f, dialect)
            }
            Expr::AtTimeZone {
                timestamp,
                time_zone,
            } => {
                timestamp.fmt(f, dialect)?;
                write!(f, " AT TIME ZONE ")?;
                time_zone.fmt(f, dialect)
            }
            Expr::Collate { expr, collation } => {
                expr.fmt(f, dialect)?;
                write!(f, " COLLATE ")?;
                collation.fmt(f, dialect)
            }
            Expr::Exists { subquery, negated } => {
                write!(f, "{}EXISTS (", neg(*negated))?;
                subquery.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::AllOp {
                left,
                compare_op,
                right,
            } => {
                left.fmt(f, dialect)?;
                write!(f, " ")?;
                compare_op.fmt(f, dialect)?;
                write!(f, " ALL (")?;
                right.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::AnyOp {
                left,
                compare_op,
                right,
            } => {
                left.fmt(f, dialect)?;
                write!(f, " ")?;
                compare_op.fmt(f, dialect)?;
                write!(f, " ANY (")?;
                right.fmt(f, dialect)?;
                write!(f, ")")
            }
            Expr::MatchAgainst {
                columns,
                match_value,
                opt_search_modifier,
            } => {
                write!(f, "MATCH (")?;
                display_comma_separated(columns).fmt(f, dialect)?;
                write!(f, ") AGAINST (")?;
                match_value.fmt(f, dialect)?;
                if let Some(modifier) = opt_search_modifier {
                    write!(f, " {modifier}")?;
                }
                write!(f, ")")
            }
            Expr::GroupingSets(sets) => fmt_grouping(f, dialect, "GROUPING SETS", sets),
            Expr::Cube(sets) => fmt_grouping(f, dialect, "CUBE", sets),
            Expr::Rollup(sets) => fmt_grouping(f, dialect, "ROLLUP", sets),
            Expr::Value(v) => v.fmt(f, dialect),
        }
    }
}

fn neg(negated: bool) -> &'static str {
    if negated {
        "NOT "
    } else {
        ""
    }
}

fn fmt_is(f: &mut dyn fmt::Write, dialect: &dyn Dialect, e: &Expr, suffix: &str) -> fmt::Result {
    e.fmt(f, dialect)?;
    write!(f, " IS {suffix}")
}

#[allow(clippy::too_many_arguments)]
fn fmt_like(
    f: &mut dyn fmt::Write,
    dialect: &dyn Dialect,
    keyword: &str,
    negated: bool,
    expr: &Expr,
    pattern: &Expr,
    escape_char: Option<char>,
) -> fmt::Result {
    expr.fmt(f, dialect)?;
    write!(f, " {}{keyword} ", neg(negated))?;
    pattern.fmt(f, dialect)?;
    if let Some(escape_char) = escape_char {
        write!(f, " ESCAPE '{escape_char}'")?;
    }
    Ok(())
}

fn fmt_grouping(
    f: &mut dyn fmt::Write,
    dialect: &dyn Dialect,
    keyword: &str,
    sets: &[Vec<Expr>],
) -> fmt::Result {
    write!(f, "{keyword} (")?;
    let mut delim = "";
    for set in sets {
        write!(f, "{delim}(")?;
        delim = ", ";
        display_comma_separated(set).fmt(f, dialect)?;
        write!(f, ")")?;
    }
    write!(f, ")")
}

fn display_sep_dot(f: &mut dyn fmt::Write, parts: &[Ident], dialect: &dyn Dialect) -> fmt::Result {
    let mut delim = "";
    for part in parts {
        write!(f, "{delim}")?;
        delim = ".";
        part.fmt(f, dialect)?;
    }
    Ok(())
}

/// `NullTreatment` for `IGNORE NULLS` / `RESPECT NULLS` inside a window
/// function call, gated on `supports_window_function_null_treatment_arg`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NullTreatment {
    IgnoreNulls,
    RespectNulls,
}

impl DialectDisplay for NullTreatment {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            NullTreatment::IgnoreNulls => "IGNORE NULLS",
            NullTreatment::RespectNulls => "RESPECT NULLS",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionArgExpr {
    Expr(Expr),
    Wildcard,
    QualifiedWildcard(ObjectName),
}

impl DialectDisplay for FunctionArgExpr {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            FunctionArgExpr::Expr(e) => e.fmt(f, dialect),
            FunctionArgExpr::Wildcard => write!(f, "*"),
            FunctionArgExpr::QualifiedWildcard(name) => {
                name.fmt(f, dialect)?;
                write!(f, ".*")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionArgOperator {
    /// `name => value`
    RightArrow,
    /// `name := value`
    Assignment,
    /// `name = value`
    Equals,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionArg {
    Unnamed(FunctionArgExpr),
    Named {
        name: Ident,
        arg: FunctionArgExpr,
        operator: FunctionArgOperator,
    },
}

impl DialectDisplay for FunctionArg {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            FunctionArg::Unnamed(arg) => arg.fmt(f, dialect),
            FunctionArg::Named {
                name,
                arg,
                operator,
            } => {
                name.fmt(f, dialect)?;
                write!(
                    f,
                    " {} ",
                    match operator {
                        FunctionArgOperator::RightArrow => "=>",
                        FunctionArgOperator::Assignment => ":=",
                        FunctionArgOperator::Equals => "=",
                    }
                )?;
                arg.fmt(f, dialect)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    pub name: ObjectName,
    pub args: Vec<FunctionArg>,
    pub distinct: bool,
    pub order_by: Vec<crate::ast::query::OrderByExpr>,
    pub limit: Option<Box<Expr>>,
    pub within_group: Vec<crate::ast::query::OrderByExpr>,
    pub filter: Option<Box<Expr>>,
    pub null_treatment: Option<NullTreatment>,
    pub over: Option<WindowType>,
}

impl DialectDisplay for Function {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.name.fmt(f, dialect)?;
        write!(f, "(")?;
        if self.distinct {
            write!(f, "DISTINCT ")?;
        }
        display_comma_separated(&self.args).fmt(f, dialect)?;
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY ")?;
            display_comma_separated(&self.order_by).fmt(f, dialect)?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT ")?;
            limit.fmt(f, dialect)?;
        }
        write!(f, ")")?;
        if !self.within_group.is_empty() {
            write!(f, " WITHIN GROUP (ORDER BY ")?;
            display_comma_separated(&self.within_group).fmt(f, dialect)?;
            write!(f, ")")?;
        }
        if let Some(filter) = &self.filter {
            write!(f, " FILTER (WHERE ")?;
            filter.fmt(f, dialect)?;
            write!(f, ")")?;
        }
        if let Some(nt) = &self.null_treatment {
            write!(f, " ")?;
            nt.fmt(f, dialect)?;
        }
        if let Some(over) = &self.over {
            write!(f, " OVER ")?;
            over.fmt(f, dialect)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowType {
    /// `OVER window_name`
    NamedWindow(Ident),
    /// `OVER (...)`
    WindowSpec(WindowSpec),
}

impl DialectDisplay for WindowType {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            WindowType::NamedWindow(name) => name.fmt(f, dialect),
            WindowType::WindowSpec(spec) => {
                write!(f, "(")?;
                spec.fmt(f, dialect)?;
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowSpec {
    pub window_name: Option<Ident>,
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<crate::ast::query::OrderByExpr>,
    pub window_frame: Option<WindowFrame>,
}

impl DialectDisplay for WindowSpec {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        let mut needs_space = false;
        if let Some(window_name) = &self.window_name {
            window_name.fmt(f, dialect)?;
            needs_space = true;
        }
        if !self.partition_by.is_empty() {
            if needs_space {
                write!(f, " ")?;
            }
            write!(f, "PARTITION BY ")?;
            display_comma_separated(&self.partition_by).fmt(f, dialect)?;
            needs_space = true;
        }
        if !self.order_by.is_empty() {
            if needs_space {
                write!(f, " ")?;
            }
            write!(f, "ORDER BY ")?;
            display_comma_separated(&self.order_by).fmt(f, dialect)?;
            needs_space = true;
        }
        if let Some(window_frame) = &self.window_frame {
            if needs_space {
                write!(f, " ")?;
            }
            window_frame.fmt(f, dialect)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowFrameUnits {
    Rows,
    Range,
    Groups,
}

impl DialectDisplay for WindowFrameUnits {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            WindowFrameUnits::Rows => "ROWS",
            WindowFrameUnits::Range => "RANGE",
            WindowFrameUnits::Groups => "GROUPS",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowFrameBound {
    CurrentRow,
    Preceding(Option<Box<Expr>>),
    Following(Option<Box<Expr>>),
}

impl DialectDisplay for WindowFrameBound {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            WindowFrameBound::CurrentRow => write!(f, "CURRENT ROW"),
            WindowFrameBound::Preceding(None) => write!(f, "UNBOUNDED PRECEDING"),
            WindowFrameBound::Following(None) => write!(f, "UNBOUNDED FOLLOWING"),
            WindowFrameBound::Preceding(Some(e)) => {
                e.fmt(f, dialect)?;
                write!(f, " PRECEDING")
            }
            WindowFrameBound::Following(Some(e)) => {
                e.fmt(f, dialect)?;
                write!(f, " FOLLOWING")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowFrame {
    pub units: WindowFrameUnits,
    pub start_bound: WindowFrameBound,
    pub end_bound: Option<WindowFrameBound>,
}

impl DialectDisplay for WindowFrame {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        self.units.fmt(f, dialect)?;
        if let Some(end_bound) = &self.end_bound {
            write!(f, " BETWEEN ")?;
            self.start_bound.fmt(f, dialect)?;
            write!(f, " AND ")?;
            end_bound.fmt(f, dialect)
        } else {
            write!(f, " ")?;
            self.start_bound.fmt(f, dialect)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    fn id(s: &str) -> Expr {
        Expr::Identifier(Ident::new(s))
    }

    #[test]
    fn negated_like_prints_single_not() {
        let dialect = GenericDialect {};
        let e = Expr::Like {
            negated: true,
            expr: Box::new(id("a")),
            pattern: Box::new(Expr::Value(Value::SingleQuotedString("x%".into()))),
            escape_char: None,
        };
        assert_eq!(e.sql(&dialect).unwrap(), "a NOT LIKE 'x%'");
    }

    #[test]
    fn cast_kinds_print_distinct_surface_forms() {
        let dialect = GenericDialect {};
        let cast = Expr::Cast {
            kind: CastKind::Cast,
            expr: Box::new(id("x")),
            data_type: DataType::Int(None),
            format: None,
        };
        assert_eq!(cast.sql(&dialect).unwrap(), "CAST(x AS INT)");

        let double_colon = Expr::Cast {
            kind: CastKind::DoubleColon,
            expr: Box::new(id("x")),
            data_type: DataType::Int(None),
            format: None,
        };
        assert_eq!(double_colon.sql(&dialect).unwrap(), "x::INT");
    }

    #[test]
    fn window_frame_between_bounds() {
        let dialect = GenericDialect {};
        let frame = WindowFrame {
            units: WindowFrameUnits::Rows,
            start_bound: WindowFrameBound::Preceding(Some(Box::new(Expr::Value(Value::number(
                "3",
            ))))),
            end_bound: Some(WindowFrameBound::CurrentRow),
        };
        assert_eq!(
            frame.sql(&dialect).unwrap(),
            "ROWS BETWEEN 3 PRECEDING AND CURRENT ROW"
        );
    }
}
