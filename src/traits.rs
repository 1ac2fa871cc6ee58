use crate::errors::ParseError;
use crate::fields::{FieldEntry, FieldValue};
use crate::models::{PaginationOptions, SortOptions, TableChanged};

/// The base contract every filter type implements.
///
/// A filter carries pagination and sort state plus a set of domain fields,
/// each described by a [`crate::FilterField`] descriptor. `entries()` is the
/// declarative replacement for property reflection: it pairs every domain
/// field's descriptor with its current value, and everything else (predicate
/// building, emptiness, query-string binding) is driven from it.
pub trait EntityFilter {
    fn pagination(&self) -> &PaginationOptions;

    fn set_pagination(&mut self, options: PaginationOptions);

    fn sort(&self) -> &SortOptions;

    fn set_sort(&mut self, options: SortOptions);

    /// Descriptor plus current value for every domain field, excluding the
    /// pagination/sort state above.
    fn entries(&self) -> Vec<FieldEntry>;

    /// Assigns one domain field from a raw query-string value. `None` resets
    /// the field to unset (or empty, for collections). Field names that the
    /// filter does not know are ignored.
    fn bind_field(&mut self, name: &str, raw: Option<&str>) -> Result<(), ParseError>;

    /// True when every domain field is unset, an empty string or an empty
    /// collection. A present date-time always counts as set, whatever its
    /// value. Pagination and sort state are not considered.
    fn is_empty(&self) -> bool {
        self.entries().iter().all(|entry| entry.value.is_blank())
    }

    /// Adopts the paging and sorting state carried by a table-changed event.
    fn set_options(&mut self, event: &TableChanged) {
        self.set_pagination(event.into());
        self.set_sort(event.into());
    }
}

/// Entity side of the filtering contract.
///
/// `columns()` names the filterable/sortable columns; filter fields that
/// resolve to anything else contribute nothing. `field_value` exposes a
/// column's current value for in-memory evaluation and sorting; absent or
/// null columns report [`FieldValue::Unset`], and any comparison against an
/// unset value is false.
pub trait FilterTarget {
    fn columns() -> &'static [&'static str];

    fn field_value(&self, column: &str) -> FieldValue;
}
