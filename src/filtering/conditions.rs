//! Lowering of predicates to Sea-ORM query conditions.
//!
//! The in-memory evaluator in [`super::predicate`] and this module consume
//! the same clause list, so a filter behaves identically whether it runs
//! against a vector or is pushed down to the database.

use sea_orm::{
    Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
    sea_query::{Alias, Expr, Func, Order, SimpleExpr},
};

use crate::fields::FieldValue;
use crate::models::{PaginatedResult, SortDirection, SortOptions};
use crate::traits::{EntityFilter, FilterTarget};

use super::predicate::{Clause, Predicate, build_predicate};

/// Lowers a predicate to a Sea-ORM condition (AND of all clauses; an empty
/// predicate lowers to the always-true condition).
#[must_use]
pub fn to_condition(predicate: &Predicate) -> Condition {
    let mut condition = Condition::all();
    for clause in predicate.clauses() {
        condition = condition.add(clause_expr(clause));
    }
    condition
}

fn clause_expr(clause: &Clause) -> SimpleExpr {
    match clause {
        Clause::Eq { column, value } => Expr::col(Alias::new(*column)).eq(scalar_value(value)),
        Clause::ContainsCi { column, value } => {
            SimpleExpr::FunctionCall(Func::upper(Expr::col(Alias::new(*column))))
                .like(format!("%{}%", value.to_uppercase()))
        }
        Clause::Gte { column, value } => Expr::col(Alias::new(*column)).gte(*value),
        Clause::Lte { column, value } => Expr::col(Alias::new(*column)).lte(*value),
        Clause::In { column, values } => {
            Expr::col(Alias::new(*column)).is_in(values.iter().map(|v| v.ordinal))
        }
    }
}

/// Enum values lower to their ordinal; entities are expected to store enum
/// columns as integers when pushed down to the database.
fn scalar_value(value: &FieldValue) -> sea_orm::Value {
    match value {
        FieldValue::Int(v) => (*v).into(),
        FieldValue::Bool(v) => (*v).into(),
        FieldValue::Double(v) => (*v).into(),
        FieldValue::Decimal(v) => (*v).into(),
        FieldValue::Uuid(v) => (*v).into(),
        FieldValue::Str(v) => v.clone().into(),
        FieldValue::DateTime(v) => (*v).into(),
        FieldValue::Enum(v) => v.ordinal.into(),
        FieldValue::Unset | FieldValue::EnumList(_) => sea_orm::Value::Int(None),
    }
}

/// Resolves sort options against the entity's sortable columns. Returns
/// `None`, leaving the query order untouched, when the column is empty or
/// unknown.
pub fn order_by_options<C>(options: &SortOptions, sortable: &[(&str, C)]) -> Option<(C, Order)>
where
    C: sea_orm::ColumnTrait + Copy,
{
    if options.sort_column.is_empty() {
        return None;
    }
    let Some((_, column)) = sortable
        .iter()
        .find(|(name, _)| *name == options.sort_column)
    else {
        tracing::debug!(column = %options.sort_column, "unknown sort column, leaving order unchanged");
        return None;
    };
    let order = match options.sort_direction {
        SortDirection::Ascending => Order::Asc,
        SortDirection::Descending => Order::Desc,
    };
    Some((*column, order))
}

/// Applies a filter's predicate, ordering and page slice to a select.
/// A `None` filter returns the select unchanged.
#[must_use]
pub fn apply_to_select<E, F, C>(
    select: Select<E>,
    filter: Option<&F>,
    sortable: &[(&str, C)],
) -> Select<E>
where
    E: EntityTrait,
    E::Model: FilterTarget,
    F: EntityFilter,
    C: sea_orm::ColumnTrait + Copy,
{
    let Some(filter) = filter else {
        return select;
    };
    let predicate = build_predicate::<E::Model, F>(Some(filter));
    let mut select = select.filter(to_condition(&predicate));
    if let Some((column, order)) = order_by_options(filter.sort(), sortable) {
        select = select.order_by(column, order);
    }
    let (offset, limit) = filter.pagination().offset_limit();
    select = select.offset(offset);
    if let Some(limit) = limit {
        select = select.limit(limit);
    }
    select
}

/// Runs the full pipeline against the database: counts the filtered set,
/// then fetches the requested page, packaging both into a
/// [`PaginatedResult`].
pub async fn fetch_paginated<E, F, C>(
    db: &DatabaseConnection,
    filter: Option<&F>,
    sortable: &[(&str, C)],
) -> Result<PaginatedResult<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: FilterTarget + sea_orm::FromQueryResult + Send + Sync,
    F: EntityFilter,
    C: sea_orm::ColumnTrait + Copy,
{
    let predicate = build_predicate::<E::Model, F>(filter);
    let condition = to_condition(&predicate);
    let total = E::find().filter(condition.clone()).count(db).await?;

    let mut select = E::find().filter(condition);
    if let Some(filter) = filter {
        if let Some((column, order)) = order_by_options(filter.sort(), sortable) {
            select = select.order_by(column, order);
        }
        let (offset, limit) = filter.pagination().offset_limit();
        select = select.offset(offset);
        if let Some(limit) = limit {
            select = select.limit(limit);
        }
    }
    let list = select.all(db).await?;
    Ok(PaginatedResult::new(list, total))
}
