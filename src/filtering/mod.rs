//! The query-shaping engine: predicate construction from filter state, plus
//! the two backends that consume it: an in-memory pipeline over vectors and
//! a Sea-ORM lowering for database pushdown.

pub mod conditions;
pub mod memory;
pub mod predicate;

pub use conditions::{apply_to_select, fetch_paginated, order_by_options, to_condition};
pub use memory::QueryableExt;
pub use predicate::{Clause, Predicate, build_predicate};
