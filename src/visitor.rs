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

//! Structural tree-walk over the AST, gated behind the `visitor` feature.
//!
//! `Visit`/`VisitMut` are hand-written per node (no reflection, no derive
//! macro): each impl calls `pre_visit`/`post_visit` on itself and then
//! recurses into its children in source order. The free functions at the
//! bottom (`visit_expressions`, `visit_relations`, and their `_mut`
//! counterparts) cover the common case: walk everything, run a closure at
//! every `Expr`/`ObjectName`, stop early on `ControlFlow::Break`.

use core::ops::ControlFlow;

use crate::ast::*;

/// Implemented by node kinds a [`Visitor`] cares about (`Query`, `Expr`,
/// `ObjectName` currently). Default no-ops mean a `Visitor` only needs to
/// override the hooks it uses.
pub trait Visitor {
    type Break;

    fn pre_visit_query(&mut self, _query: &Query) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn post_visit_query(&mut self, _query: &Query) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn pre_visit_expr(&mut self, _expr: &Expr) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn post_visit_expr(&mut self, _expr: &Expr) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn pre_visit_relation(&mut self, _relation: &ObjectName) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn post_visit_relation(&mut self, _relation: &ObjectName) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

/// Mutable counterpart of [`Visitor`].
pub trait VisitorMut {
    type Break;

    fn pre_visit_query(&mut self, _query: &mut Query) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn post_visit_query(&mut self, _query: &mut Query) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn pre_visit_expr(&mut self, _expr: &mut Expr) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn post_visit_expr(&mut self, _expr: &mut Expr) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn pre_visit_relation(&mut self, _relation: &mut ObjectName) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
    fn post_visit_relation(&mut self, _relation: &mut ObjectName) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

/// A node that knows how to drive a [`Visitor`] over itself and its children.
pub trait Visit {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break>;
}

/// Mutable counterpart of [`Visit`].
pub trait VisitMut {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break>;
}

macro_rules! try_cf {
    ($e:expr) => {
        match $e {
            ControlFlow::Continue(()) => {}
            ControlFlow::Break(b) => return ControlFlow::Break(b),
        }
    };
}

impl<T: Visit> Visit for Option<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            Some(t) => t.visit(visitor),
            None => ControlFlow::Continue(()),
        }
    }
}

impl<T: Visit> Visit for Vec<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        for item in self {
            try_cf!(item.visit(visitor));
        }
        ControlFlow::Continue(())
    }
}

impl<T: Visit> Visit for Box<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        (**self).visit(visitor)
    }
}

impl<T: VisitMut> VisitMut for Option<T> {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            Some(t) => t.visit(visitor),
            None => ControlFlow::Continue(()),
        }
    }
}

impl<T: VisitMut> VisitMut for Vec<T> {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        for item in self {
            try_cf!(item.visit(visitor));
        }
        ControlFlow::Continue(())
    }
}

impl<T: VisitMut> VisitMut for Box<T> {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        (**self).visit(visitor)
    }
}

impl Visit for ObjectName {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        try_cf!(visitor.pre_visit_relation(self));
        visitor.post_visit_relation(self)
    }
}

impl VisitMut for ObjectName {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        try_cf!(visitor.pre_visit_relation(self));
        visitor.post_visit_relation(self)
    }
}

impl Visit for FunctionArgExpr {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            FunctionArgExpr::Expr(e) => e.visit(visitor),
            FunctionArgExpr::Wildcard | FunctionArgExpr::QualifiedWildcard(_) => ControlFlow::Continue(()),
        }
    }
}

impl VisitMut for FunctionArgExpr {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            FunctionArgExpr::Expr(e) => e.visit(visitor),
            FunctionArgExpr::Wildcard | FunctionArgExpr::QualifiedWildcard(_) => ControlFlow::Continue(()),
        }
    }
}

impl Visit for FunctionArg {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            FunctionArg::Unnamed(arg) => arg.visit(visitor),
            FunctionArg::Named { arg, .. } => arg.visit(visitor),
        }
    }
}

impl VisitMut for FunctionArg {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            FunctionArg::Unnamed(arg) => arg.visit(visitor),
            FunctionArg::Named { arg, .. } => arg.visit(visitor),
        }
    }
}

impl Visit for Expr {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        try_cf!(visitor.pre_visit_expr(self));
        match self {
            Expr::Identifier(_)
            | Expr::CompoundIdentifier(_)
            | Expr::Value(_)
            | Expr::Wildcard
            | Expr::QualifiedWildcard(_)
            | Expr::TypedString { .. }
            | Expr::MatchAgainst { .. } => {}
            Expr::BinaryOp { left, right, .. } => {
                try_cf!(left.visit(visitor));
                try_cf!(right.visit(visitor));
            }
            Expr::UnaryOp { expr, .. }
            | Expr::Nested(expr)
            | Expr::Cast { expr, .. }
            | Expr::IsNull(expr)
            | Expr::IsNotNull(expr)
            | Expr::IsTrue(expr)
            | Expr::IsNotTrue(expr)
            | Expr::IsFalse(expr)
            | Expr::IsNotFalse(expr)
            | Expr::IsUnknown(expr)
            | Expr::IsNotUnknown(expr)
            | Expr::Extract { expr, .. }
            | Expr::Collate { expr, .. } => {
                try_cf!(expr.visit(visitor));
            }
            Expr::IsDistinctFrom(a, b) | Expr::IsNotDistinctFrom(a, b) => {
                try_cf!(a.visit(visitor));
                try_cf!(b.visit(visitor));
            }
            Expr::Between { expr, low, high, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(low.visit(visitor));
                try_cf!(high.visit(visitor));
            }
            Expr::InList { expr, list, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(list.visit(visitor));
            }
            Expr::InSubquery { expr, subquery, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(subquery.visit(visitor));
            }
            Expr::InUnnest { expr, array_expr, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(array_expr.visit(visitor));
            }
            Expr::Like { expr, pattern, .. }
            | Expr::ILike { expr, pattern, .. }
            | Expr::SimilarTo { expr, pattern, .. }
            | Expr::RLike { expr, pattern, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(pattern.visit(visitor));
            }
            Expr::Function(f) => {
                try_cf!(f.args.visit(visitor));
            }
            Expr::Case { operand, conditions, results, else_result } => {
                try_cf!(operand.visit(visitor));
                try_cf!(conditions.visit(visitor));
                try_cf!(results.visit(visitor));
                try_cf!(else_result.visit(visitor));
            }
            Expr::Subquery(query) | Expr::Exists { subquery: query, .. } => {
                try_cf!(query.visit(visitor));
            }
            Expr::Tuple(exprs) | Expr::Array(exprs) => {
                try_cf!(exprs.visit(visitor));
            }
            Expr::GroupingSets(groups) | Expr::Cube(groups) | Expr::Rollup(groups) => {
                for group in groups {
                    try_cf!(group.visit(visitor));
                }
            }
            Expr::Position { expr, r#in } => {
                try_cf!(expr.visit(visitor));
                try_cf!(r#in.visit(visitor));
            }
            Expr::Substring { expr, substring_from, substring_for } => {
                try_cf!(expr.visit(visitor));
                try_cf!(substring_from.visit(visitor));
                try_cf!(substring_for.visit(visitor));
            }
            Expr::Trim { expr, trim_what, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(trim_what.visit(visitor));
            }
            Expr::Overlay { expr, overlay_what, overlay_from, overlay_for } => {
                try_cf!(expr.visit(visitor));
                try_cf!(overlay_what.visit(visitor));
                try_cf!(overlay_from.visit(visitor));
                try_cf!(overlay_for.visit(visitor));
            }
            Expr::MapAccess { column, keys } => {
                try_cf!(column.visit(visitor));
                try_cf!(keys.visit(visitor));
            }
            Expr::Interval(_) => {}
            Expr::Lambda { body, .. } => {
                try_cf!(body.visit(visitor));
            }
            Expr::AtTimeZone { timestamp, time_zone } => {
                try_cf!(timestamp.visit(visitor));
                try_cf!(time_zone.visit(visitor));
            }
            Expr::AllOp { left, right, .. } | Expr::AnyOp { left, right, .. } => {
                try_cf!(left.visit(visitor));
                try_cf!(right.visit(visitor));
            }
        }
        visitor.post_visit_expr(self)
    }
}

impl VisitMut for Expr {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        try_cf!(visitor.pre_visit_expr(self));
        match self {
            Expr::Identifier(_)
            | Expr::CompoundIdentifier(_)
            | Expr::Value(_)
            | Expr::Wildcard
            | Expr::QualifiedWildcard(_)
            | Expr::TypedString { .. }
            | Expr::MatchAgainst { .. } => {}
            Expr::BinaryOp { left, right, .. } => {
                try_cf!(left.visit(visitor));
                try_cf!(right.visit(visitor));
            }
            Expr::UnaryOp { expr, .. }
            | Expr::Nested(expr)
            | Expr::Cast { expr, .. }
            | Expr::IsNull(expr)
            | Expr::IsNotNull(expr)
            | Expr::IsTrue(expr)
            | Expr::IsNotTrue(expr)
            | Expr::IsFalse(expr)
            | Expr::IsNotFalse(expr)
            | Expr::IsUnknown(expr)
            | Expr::IsNotUnknown(expr)
            | Expr::Extract { expr, .. }
            | Expr::Collate { expr, .. } => {
                try_cf!(expr.visit(visitor));
            }
            Expr::IsDistinctFrom(a, b) | Expr::IsNotDistinctFrom(a, b) => {
                try_cf!(a.visit(visitor));
                try_cf!(b.visit(visitor));
            }
            Expr::Between { expr, low, high, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(low.visit(visitor));
                try_cf!(high.visit(visitor));
            }
            Expr::InList { expr, list, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(list.visit(visitor));
            }
            Expr::InSubquery { expr, subquery, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(subquery.visit(visitor));
            }
            Expr::InUnnest { expr, array_expr, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(array_expr.visit(visitor));
            }
            Expr::Like { expr, pattern, .. }
            | Expr::ILike { expr, pattern, .. }
            | Expr::SimilarTo { expr, pattern, .. }
            | Expr::RLike { expr, pattern, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(pattern.visit(visitor));
            }
            Expr::Function(f) => {
                try_cf!(f.args.visit(visitor));
            }
            Expr::Case { operand, conditions, results, else_result } => {
                try_cf!(operand.visit(visitor));
                try_cf!(conditions.visit(visitor));
                try_cf!(results.visit(visitor));
                try_cf!(else_result.visit(visitor));
            }
            Expr::Subquery(query) | Expr::Exists { subquery: query, .. } => {
                try_cf!(query.visit(visitor));
            }
            Expr::Tuple(exprs) | Expr::Array(exprs) => {
                try_cf!(exprs.visit(visitor));
            }
            Expr::GroupingSets(groups) | Expr::Cube(groups) | Expr::Rollup(groups) => {
                for group in groups {
                    try_cf!(group.visit(visitor));
                }
            }
            Expr::Position { expr, r#in } => {
                try_cf!(expr.visit(visitor));
                try_cf!(r#in.visit(visitor));
            }
            Expr::Substring { expr, substring_from, substring_for } => {
                try_cf!(expr.visit(visitor));
                try_cf!(substring_from.visit(visitor));
                try_cf!(substring_for.visit(visitor));
            }
            Expr::Trim { expr, trim_what, .. } => {
                try_cf!(expr.visit(visitor));
                try_cf!(trim_what.visit(visitor));
            }
            Expr::Overlay { expr, overlay_what, overlay_from, overlay_for } => {
                try_cf!(expr.visit(visitor));
                try_cf!(overlay_what.visit(visitor));
                try_cf!(overlay_from.visit(visitor));
                try_cf!(overlay_for.visit(visitor));
            }
            Expr::MapAccess { column, keys } => {
                try_cf!(column.visit(visitor));
                try_cf!(keys.visit(visitor));
            }
            Expr::Interval(_) => {}
            Expr::Lambda { body, .. } => {
                try_cf!(body.visit(visitor));
            }
            Expr::AtTimeZone { timestamp, time_zone } => {
                try_cf!(timestamp.visit(visitor));
                try_cf!(time_zone.visit(visitor));
            }
            Expr::AllOp { left, right, .. } | Expr::AnyOp { left, right, .. } => {
                try_cf!(left.visit(visitor));
                try_cf!(right.visit(visitor));
            }
        }
        visitor.post_visit_expr(self)
    }
}

impl Visit for Query {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        try_cf!(visitor.pre_visit_query(self));
        try_cf!(visit_set_expr(&self.body, visitor));
        for ob in &self.order_by {
            try_cf!(ob.expr.visit(visitor));
        }
        try_cf!(self.limit.visit(visitor));
        visitor.post_visit_query(self)
    }
}

impl VisitMut for Query {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        try_cf!(visitor.pre_visit_query(self));
        try_cf!(visit_set_expr_mut(&mut self.body, visitor));
        for ob in &mut self.order_by {
            try_cf!(ob.expr.visit(visitor));
        }
        try_cf!(self.limit.visit(visitor));
        visitor.post_visit_query(self)
    }
}

fn visit_select<V: Visitor>(select: &Select, visitor: &mut V) -> ControlFlow<V::Break> {
    for item in &select.projection {
        match item {
            SelectItem::UnnamedExpr(e) | SelectItem::ExprWithAlias { expr: e, .. } => {
                try_cf!(e.visit(visitor));
            }
            SelectItem::QualifiedWildcard(name) => try_cf!(name.visit(visitor)),
            SelectItem::Wildcard => {}
        }
    }
    for twj in &select.from {
        try_cf!(visit_table_with_joins(twj, visitor));
    }
    try_cf!(select.selection.visit(visitor));
    try_cf!(select.group_by.visit(visitor));
    try_cf!(select.having.visit(visitor));
    try_cf!(select.qualify.visit(visitor));
    ControlFlow::Continue(())
}

fn visit_select_mut<V: VisitorMut>(select: &mut Select, visitor: &mut V) -> ControlFlow<V::Break> {
    for item in &mut select.projection {
        match item {
            SelectItem::UnnamedExpr(e) | SelectItem::ExprWithAlias { expr: e, .. } => {
                try_cf!(e.visit(visitor));
            }
            SelectItem::QualifiedWildcard(name) => try_cf!(name.visit(visitor)),
            SelectItem::Wildcard => {}
        }
    }
    for twj in &mut select.from {
        try_cf!(visit_table_with_joins_mut(twj, visitor));
    }
    try_cf!(select.selection.visit(visitor));
    try_cf!(select.group_by.visit(visitor));
    try_cf!(select.having.visit(visitor));
    try_cf!(select.qualify.visit(visitor));
    ControlFlow::Continue(())
}

fn visit_set_expr<V: Visitor>(set_expr: &SetExpr, visitor: &mut V) -> ControlFlow<V::Break> {
    match set_expr {
        SetExpr::Select(select) => try_cf!(visit_select(select, visitor)),
        SetExpr::Query(q) => try_cf!(q.visit(visitor)),
        SetExpr::SetOperation { left, right, .. } => {
            try_cf!(visit_set_expr(left, visitor));
            try_cf!(visit_set_expr(right, visitor));
        }
        SetExpr::Values(values) => {
            for row in &values.0 {
                try_cf!(row.visit(visitor));
            }
        }
        SetExpr::Table(_) => {}
    }
    ControlFlow::Continue(())
}

fn visit_set_expr_mut<V: VisitorMut>(set_expr: &mut SetExpr, visitor: &mut V) -> ControlFlow<V::Break> {
    match set_expr {
        SetExpr::Select(select) => try_cf!(visit_select_mut(select, visitor)),
        SetExpr::Query(q) => try_cf!(q.visit(visitor)),
        SetExpr::SetOperation { left, right, .. } => {
            try_cf!(visit_set_expr_mut(left, visitor));
            try_cf!(visit_set_expr_mut(right, visitor));
        }
        SetExpr::Values(values) => {
            for row in &mut values.0 {
                try_cf!(row.visit(visitor));
            }
        }
        SetExpr::Table(_) => {}
    }
    ControlFlow::Continue(())
}

fn visit_table_with_joins<V: Visitor>(twj: &TableWithJoins, visitor: &mut V) -> ControlFlow<V::Break> {
    try_cf!(visit_table_factor(&twj.relation, visitor));
    for join in &twj.joins {
        try_cf!(visit_table_factor(&join.relation, visitor));
    }
    ControlFlow::Continue(())
}

fn visit_table_with_joins_mut<V: VisitorMut>(twj: &mut TableWithJoins, visitor: &mut V) -> ControlFlow<V::Break> {
    try_cf!(visit_table_factor_mut(&mut twj.relation, visitor));
    for join in &mut twj.joins {
        try_cf!(visit_table_factor_mut(&mut join.relation, visitor));
    }
    ControlFlow::Continue(())
}

fn visit_table_factor<V: Visitor>(tf: &TableFactor, visitor: &mut V) -> ControlFlow<V::Break> {
    match tf {
        TableFactor::Table { name, .. } => try_cf!(name.visit(visitor)),
        TableFactor::Derived { subquery, .. } => try_cf!(subquery.visit(visitor)),
        TableFactor::TableFunction { expr, .. } => try_cf!(expr.visit(visitor)),
        TableFactor::UNNEST { array_expr, .. } => try_cf!(array_expr.visit(visitor)),
        TableFactor::NestedJoin(table_with_joins) => try_cf!(visit_table_with_joins(table_with_joins, visitor)),
    }
    ControlFlow::Continue(())
}

fn visit_table_factor_mut<V: VisitorMut>(tf: &mut TableFactor, visitor: &mut V) -> ControlFlow<V::Break> {
    match tf {
        TableFactor::Table { name, .. } => try_cf!(name.visit(visitor)),
        TableFactor::Derived { subquery, .. } => try_cf!(subquery.visit(visitor)),
        TableFactor::TableFunction { expr, .. } => try_cf!(expr.visit(visitor)),
        TableFactor::UNNEST { array_expr, .. } => try_cf!(array_expr.visit(visitor)),
        TableFactor::NestedJoin(table_with_joins) => try_cf!(visit_table_with_joins_mut(table_with_joins, visitor)),
    }
    ControlFlow::Continue(())
}

impl Visit for Statement {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        if let Statement::Query(q) = self {
            try_cf!(q.visit(visitor));
        }
        ControlFlow::Continue(())
    }
}

impl VisitMut for Statement {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        if let Statement::Query(q) = self {
            try_cf!(q.visit(visitor));
        }
        ControlFlow::Continue(())
    }
}

struct ClosureVisitor<F, B> {
    f: F,
    _marker: core::marker::PhantomData<B>,
}

impl<F, B> Visitor for ClosureVisitor<F, B>
where
    F: FnMut(&Expr) -> ControlFlow<B>,
{
    type Break = B;
    fn pre_visit_expr(&mut self, expr: &Expr) -> ControlFlow<B> {
        (self.f)(expr)
    }
}

struct ClosureVisitorMut<F, B> {
    f: F,
    _marker: core::marker::PhantomData<B>,
}

impl<F, B> VisitorMut for ClosureVisitorMut<F, B>
where
    F: FnMut(&mut Expr) -> ControlFlow<B>,
{
    type Break = B;
    fn pre_visit_expr(&mut self, expr: &mut Expr) -> ControlFlow<B> {
        (self.f)(expr)
    }
}

/// Run `f` on every [`Expr`] reachable from `node`, stopping early on
/// `ControlFlow::Break`.
pub fn visit_expressions<N, B>(node: &N, f: impl FnMut(&Expr) -> ControlFlow<B>) -> ControlFlow<B>
where
    N: Visit,
{
    let mut visitor = ClosureVisitor { f, _marker: core::marker::PhantomData };
    node.visit(&mut visitor)
}

/// Mutable counterpart of [`visit_expressions`].
pub fn visit_expressions_mut<N, B>(node: &mut N, f: impl FnMut(&mut Expr) -> ControlFlow<B>) -> ControlFlow<B>
where
    N: VisitMut,
{
    let mut visitor = ClosureVisitorMut { f, _marker: core::marker::PhantomData };
    node.visit(&mut visitor)
}

struct RelationClosureVisitor<F, B> {
    f: F,
    _marker: core::marker::PhantomData<B>,
}

impl<F, B> Visitor for RelationClosureVisitor<F, B>
where
    F: FnMut(&ObjectName) -> ControlFlow<B>,
{
    type Break = B;
    fn pre_visit_relation(&mut self, relation: &ObjectName) -> ControlFlow<B> {
        (self.f)(relation)
    }
}

/// Run `f` on every table/relation name reachable from `node`. Note this
/// only visits names threaded through `Expr`/`Query` traversal (table
/// factors), not every `ObjectName` in DDL/DML statements, since
/// `Visit`/`VisitMut` are only wired up for `Query` and `Expr` so far.
pub fn visit_relations<N, B>(node: &N, f: impl FnMut(&ObjectName) -> ControlFlow<B>) -> ControlFlow<B>
where
    N: Visit,
{
    let mut visitor = RelationClosureVisitor { f, _marker: core::marker::PhantomData };
    node.visit(&mut visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{DialectDisplay, GenericDialect};
    use crate::parser::Parser;

    fn parse(sql: &str) -> Statement {
        Parser::parse_sql(sql, &GenericDialect {}).unwrap().remove(0)
    }

    #[test]
    fn visits_every_identifier_in_a_binary_expr() {
        let stmt = parse("SELECT a FROM t WHERE a > 1 AND b < 2");
        let mut idents = Vec::new();
        let _ = visit_expressions(&stmt, |expr: &Expr| {
            if let Expr::Identifier(ident) = expr {
                idents.push(ident.value.clone());
            }
            ControlFlow::<()>::Continue(())
        });
        assert!(idents.contains(&"a".to_string()));
        assert!(idents.contains(&"b".to_string()));
    }

    #[test]
    fn visit_relations_finds_table_name() {
        let stmt = parse("SELECT a FROM my_table");
        let mut names = Vec::new();
        let _ = visit_relations(&stmt, |name: &ObjectName| {
            names.push(name.sql(&GenericDialect {}).unwrap());
            ControlFlow::<()>::Continue(())
        });
        assert_eq!(names, vec!["my_table".to_string()]);
    }

    #[test]
    fn visit_expressions_mut_can_rewrite_values() {
        let mut stmt = parse("SELECT 1");
        let _ = visit_expressions_mut(&mut stmt, |expr: &mut Expr| {
            if matches!(expr, Expr::Value(_)) {
                *expr = Expr::value(Value::number("42"));
            }
            ControlFlow::<()>::Continue(())
        });
        let mut out = String::new();
        stmt.fmt(&mut out, &GenericDialect {}).unwrap();
        assert_eq!(out, "SELECT 42");
    }
}
