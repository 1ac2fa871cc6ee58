//! In-memory query pipeline over owned vectors.
//!
//! Mirrors the composable-query contract for plain `Vec<T>` sources: filter,
//! then sort, then slice, each step returning the vector for further
//! chaining. Sorting is stable, so equal keys keep their source order.

use std::cmp::Ordering;

use crate::fields::FieldValue;
use crate::models::{PaginatedResult, PaginationOptions, SortDirection, SortOptions};
use crate::traits::{EntityFilter, FilterTarget};

use super::predicate::build_predicate;

/// Filtering, sorting and pagination for in-memory entity collections.
pub trait QueryableExt<T: FilterTarget>: Sized {
    /// Keeps the entities matching `filter`; `None` keeps everything.
    fn filter_by<F: EntityFilter>(self, filter: Option<&F>) -> Self;

    /// Orders by the named column. Unknown or empty columns leave the input
    /// unchanged.
    fn sort_by_options(self, options: &SortOptions) -> Self;

    /// Takes the page slice: skip `(page_number - 1) * page_size`, then take
    /// `page_size` unless the size is 0 (no limit).
    fn paginate(self, options: &PaginationOptions) -> Self;

    /// Packages a materialized page with a caller-supplied total.
    fn into_paginated(self, total: u64) -> PaginatedResult<T>;

    /// Full pipeline: filter, count, sort, slice.
    fn query<F: EntityFilter>(self, filter: Option<&F>) -> PaginatedResult<T>;
}

impl<T: FilterTarget> QueryableExt<T> for Vec<T> {
    fn filter_by<F: EntityFilter>(self, filter: Option<&F>) -> Self {
        let predicate = build_predicate::<T, F>(filter);
        if predicate.clauses().is_empty() {
            return self;
        }
        self.into_iter()
            .filter(|entity| predicate.matches(entity))
            .collect()
    }

    fn sort_by_options(mut self, options: &SortOptions) -> Self {
        if options.sort_column.is_empty() {
            return self;
        }
        let column = options.sort_column.as_str();
        if !T::columns().contains(&column) {
            tracing::debug!(column, "unknown sort column, leaving order unchanged");
            return self;
        }
        self.sort_by(|a, b| {
            let ordering = compare_values(&a.field_value(column), &b.field_value(column));
            match options.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        self
    }

    fn paginate(self, options: &PaginationOptions) -> Self {
        let (offset, limit) = options.offset_limit();
        let skipped = self.into_iter().skip(usize::try_from(offset).unwrap_or(usize::MAX));
        match limit {
            Some(limit) => skipped
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            None => skipped.collect(),
        }
    }

    fn into_paginated(self, total: u64) -> PaginatedResult<T> {
        PaginatedResult::new(self, total)
    }

    fn query<F: EntityFilter>(self, filter: Option<&F>) -> PaginatedResult<T> {
        let filtered = self.filter_by(filter);
        let total = filtered.len() as u64;
        match filter {
            Some(filter) => filtered
                .sort_by_options(filter.sort())
                .paginate(filter.pagination())
                .into_paginated(total),
            None => filtered.into_paginated(total),
        }
    }
}

/// Ordering across field values of the same kind; unset values sort first
/// and unlike kinds compare equal (the column then behaves as unsorted).
fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
        (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
        (FieldValue::Double(a), FieldValue::Double(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a.cmp(b),
        (FieldValue::Uuid(a), FieldValue::Uuid(b)) => a.cmp(b),
        (FieldValue::Str(a), FieldValue::Str(b)) => a.cmp(b),
        (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
        (FieldValue::Enum(a), FieldValue::Enum(b)) => a.ordinal.cmp(&b.ordinal),
        (FieldValue::Enum(a), FieldValue::Int(b)) => a.ordinal.cmp(b),
        (FieldValue::Int(a), FieldValue::Enum(b)) => a.cmp(&b.ordinal),
        (FieldValue::Unset, FieldValue::Unset) => Ordering::Equal,
        (FieldValue::Unset, _) => Ordering::Less,
        (_, FieldValue::Unset) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
