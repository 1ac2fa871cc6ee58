//! Predicate construction: from a filter's field entries to a flat clause
//! list combined with logical AND.
//!
//! The clause list is the intermediate representation both query backends
//! consume: it is evaluated directly against in-memory entities here, and
//! lowered to a Sea-ORM [`Condition`](sea_orm::Condition) in
//! [`super::conditions`].

use chrono::NaiveDateTime;

use crate::fields::{EnumValue, FieldValue, FilterStrategy};
use crate::traits::{EntityFilter, FilterTarget};

/// One comparison over a single entity column.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Equality against a scalar value. Enum values compare by ordinal when
    /// the entity stores the column as an integer.
    Eq {
        column: &'static str,
        value: FieldValue,
    },
    /// Case-insensitive substring match on a string column.
    ContainsCi {
        column: &'static str,
        value: String,
    },
    /// Inclusive lower bound on a date-time column.
    Gte {
        column: &'static str,
        value: NaiveDateTime,
    },
    /// Inclusive upper bound on a date-time column.
    Lte {
        column: &'static str,
        value: NaiveDateTime,
    },
    /// Membership of the column's enum value in a list.
    In {
        column: &'static str,
        values: Vec<EnumValue>,
    },
}

/// The AND-fold of zero or more clauses. Zero clauses match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// The unconditional predicate.
    #[must_use]
    pub fn match_all() -> Self {
        Self::default()
    }

    /// A predicate assembled directly from clauses, for callers that build
    /// their criteria programmatically instead of through a filter type.
    #[must_use]
    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Evaluates the predicate against one entity.
    #[must_use]
    pub fn matches<T: FilterTarget>(&self, entity: &T) -> bool {
        self.clauses.iter().all(|clause| clause_matches(clause, entity))
    }
}

/// Builds the predicate for `T` from a filter's non-default fields.
///
/// `None` yields the unconditional predicate. Fields whose value is unset,
/// whose resolved column `T` does not have, or whose type/strategy
/// combination has no comparison are skipped silently; shared filter types
/// are expected to carry fields that only apply to some entity shapes.
#[must_use]
pub fn build_predicate<T, F>(filter: Option<&F>) -> Predicate
where
    T: FilterTarget,
    F: EntityFilter,
{
    let Some(filter) = filter else {
        return Predicate::match_all();
    };

    let mut clauses = Vec::new();
    for entry in filter.entries() {
        if entry.value.is_unset() {
            continue;
        }

        let column = entry.field.target_column();
        if !T::columns().contains(&column) {
            tracing::debug!(field = entry.field.name(), column, "no matching entity column, skipping");
            continue;
        }

        let clause = match entry.value {
            FieldValue::Int(_) | FieldValue::Uuid(_) | FieldValue::Enum(_) => Some(Clause::Eq {
                column,
                value: entry.value,
            }),
            FieldValue::EnumList(values) => {
                if values.is_empty() {
                    None
                } else {
                    Some(Clause::In { column, values })
                }
            }
            FieldValue::Str(value) => match entry.field.strategy() {
                FilterStrategy::Contains => Some(Clause::ContainsCi { column, value }),
                FilterStrategy::Equals => Some(Clause::Eq {
                    column,
                    value: FieldValue::Str(value),
                }),
                _ => None,
            },
            FieldValue::DateTime(value) => match entry.field.strategy() {
                FilterStrategy::DateFrom => Some(Clause::Gte { column, value }),
                FilterStrategy::DateTo => Some(Clause::Lte { column, value }),
                _ => None,
            },
            // No comparison strategy exists for these; the values are still
            // bindable and usable by application code.
            FieldValue::Bool(_) | FieldValue::Double(_) | FieldValue::Decimal(_) => None,
            FieldValue::Unset => None,
        };

        if let Some(clause) = clause {
            clauses.push(clause);
        } else {
            tracing::debug!(field = entry.field.name(), "no applicable comparison, skipping");
        }
    }

    Predicate { clauses }
}

fn clause_matches<T: FilterTarget>(clause: &Clause, entity: &T) -> bool {
    match clause {
        Clause::Eq { column, value } => values_equal(&entity.field_value(column), value),
        Clause::ContainsCi { column, value } => match entity.field_value(column) {
            FieldValue::Str(actual) => actual.to_lowercase().contains(&value.to_lowercase()),
            _ => false,
        },
        Clause::Gte { column, value } => match entity.field_value(column) {
            FieldValue::DateTime(actual) => actual >= *value,
            _ => false,
        },
        Clause::Lte { column, value } => match entity.field_value(column) {
            FieldValue::DateTime(actual) => actual <= *value,
            _ => false,
        },
        Clause::In { column, values } => match entity.field_value(column) {
            FieldValue::Enum(actual) => values.iter().any(|v| v.ordinal == actual.ordinal),
            FieldValue::Int(actual) => values.iter().any(|v| v.ordinal == actual),
            _ => false,
        },
    }
}

/// Equality across the representations an entity column may use. An enum
/// filter value matches both enum-typed and integer-typed columns.
fn values_equal(entity: &FieldValue, filter: &FieldValue) -> bool {
    match (entity, filter) {
        (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
        (FieldValue::Uuid(a), FieldValue::Uuid(b)) => a == b,
        (FieldValue::Str(a), FieldValue::Str(b)) => a == b,
        (FieldValue::Enum(a), FieldValue::Enum(b)) => a.ordinal == b.ordinal,
        (FieldValue::Int(a), FieldValue::Enum(b)) => *a == b.ordinal,
        (FieldValue::Enum(a), FieldValue::Int(b)) => a.ordinal == *b,
        _ => false,
    }
}
