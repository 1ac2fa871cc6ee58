//! Query-string binding: filters to and from `(key, value)` pairs.
//!
//! This sits at the URL boundary but stays transport-agnostic: percent
//! encoding and the surrounding URL belong to the caller. Reserved keys:
//! `p` (page number, default 1), `sc` (sort column) and `sd` (sort
//! direction, default ascending). The binder always pins the page size to 5;
//! the URL never carries it.

use chrono::NaiveTime;

use crate::errors::ParseError;
use crate::fields::{EnumBinding, EnumValue, FieldEntry, FieldValue};
use crate::models::{PaginationOptions, SortDirection, SortOptions};
use crate::parse::ParseParam;
use crate::traits::EntityFilter;

const PAGE_KEY: &str = "p";
const SORT_COLUMN_KEY: &str = "sc";
const SORT_DIRECTION_KEY: &str = "sd";

/// Page size every bound filter gets, regardless of URL content.
const BOUND_PAGE_SIZE: u64 = 5;

/// Serializes a filter's query-tagged fields to `(key, value)` pairs.
///
/// Unset fields, empty strings and empty lists are omitted, as are fields
/// without a query-param tag. Date-times at midnight shorten to the date-only
/// form; enum values follow the field's integer/name binding.
pub fn filter_params<F: EntityFilter>(filter: &F) -> Vec<(String, String)> {
    filter
        .entries()
        .iter()
        .filter_map(|entry| {
            let key = entry.field.query_key()?;
            let value = serialize_value(entry)?;
            Some((key.to_string(), value))
        })
        .collect()
}

/// Rebinds a filter from query pairs.
///
/// Every non-computed field is assigned from its key (the query-param name
/// override when present, the field name otherwise); absent keys reset the
/// field. Pagination and sort state are then bound from the reserved keys.
/// The only failure mode is an unparseable enum value.
pub fn bind_filter<F: EntityFilter>(
    filter: &mut F,
    params: &[(String, String)],
) -> Result<(), ParseError> {
    let lookup =
        |key: &str| params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

    let fields: Vec<_> = filter.entries().iter().map(|entry| entry.field).collect();
    for field in fields {
        if field.is_computed() {
            continue;
        }
        let key = field.query_key().unwrap_or(field.name());
        filter.bind_field(field.name(), lookup(key))?;
    }

    let page_number = lookup(PAGE_KEY)
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(1);
    filter.set_pagination(PaginationOptions::new(page_number, BOUND_PAGE_SIZE));

    if let Some(sort_column) = lookup(SORT_COLUMN_KEY).filter(|column| !column.is_empty()) {
        let sort_direction = match lookup(SORT_DIRECTION_KEY) {
            Some(raw) => Option::<SortDirection>::parse_param(raw)?.unwrap_or_default(),
            None => SortDirection::default(),
        };
        filter.set_sort(SortOptions::new(sort_column, sort_direction));
    }

    Ok(())
}

fn serialize_value(entry: &FieldEntry) -> Option<String> {
    match &entry.value {
        FieldValue::Unset => None,
        FieldValue::Int(value) => Some(value.to_string()),
        FieldValue::Bool(value) => Some(value.to_string()),
        FieldValue::Double(value) => Some(value.to_string()),
        FieldValue::Decimal(value) => Some(value.to_string()),
        FieldValue::Uuid(value) => Some(value.to_string()),
        FieldValue::Str(value) => {
            if value.is_empty() {
                None
            } else {
                Some(value.clone())
            }
        }
        FieldValue::DateTime(value) => {
            let format = if value.time() == NaiveTime::MIN {
                "%Y-%m-%d"
            } else {
                "%Y-%m-%dT%H:%M:%S"
            };
            Some(value.format(format).to_string())
        }
        FieldValue::Enum(value) => Some(serialize_enum(value, entry.field.enum_binding())),
        FieldValue::EnumList(values) => {
            if values.is_empty() {
                None
            } else {
                Some(
                    values
                        .iter()
                        .map(|value| serialize_enum(value, entry.field.enum_binding()))
                        .collect::<Vec<_>>()
                        .join(","),
                )
            }
        }
    }
}

fn serialize_enum(value: &EnumValue, binding: EnumBinding) -> String {
    match binding {
        EnumBinding::Integer => value.ordinal.to_string(),
        EnumBinding::Name => value.name.to_string(),
    }
}
