//! Declarative entity filtering, sorting and pagination.
//!
//! A filter type describes its fields once (comparison strategy, optional
//! entity-column alias, query-string binding) and this crate turns the
//! filter's current state into a predicate, an ordering and a page slice
//! that can run against an in-memory vector or be lowered to Sea-ORM for
//! database pushdown.
//!
//! ```rust,ignore
//! let page = tickets.query(Some(&filter));           // Vec<Ticket> in memory
//! let page = fetch_paginated::<ticket::Entity, _, _>(db, Some(&filter), SORTABLE).await?;
//! ```
//!
//! Fields that do not apply to an entity shape are skipped, never errors:
//! one filter type is expected to serve several entity types.

pub mod bind;
pub mod errors;
pub mod fields;
pub mod filtering;
pub mod models;
pub mod parse;
pub mod traits;

pub use bind::{bind_filter, filter_params};
pub use errors::ParseError;
pub use fields::{
    EnumBinding, EnumValue, FieldEntry, FieldValue, FilterEnum, FilterField, FilterStrategy,
};
pub use filtering::conditions::{apply_to_select, fetch_paginated, order_by_options, to_condition};
pub use filtering::memory::QueryableExt;
pub use filtering::predicate::{Clause, Predicate, build_predicate};
pub use models::{PaginatedResult, PaginationOptions, SortDirection, SortOptions, TableChanged};
pub use parse::{ParseParam, bind_value};
pub use traits::{EntityFilter, FilterTarget};
