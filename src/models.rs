use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::fields::FilterEnum;

/// Direction in which a sortable column is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FilterEnum for SortDirection {
    const ENUM_NAME: &'static str = "SortDirection";

    fn variants() -> &'static [(&'static str, i32, Self)] {
        &[
            ("Ascending", 0, Self::Ascending),
            ("Descending", 1, Self::Descending),
        ]
    }
}

/// Sorting options for a query: the column to order by and the direction.
///
/// An empty `sort_column` means no ordering is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SortOptions {
    pub sort_column: String,
    pub sort_direction: SortDirection,
}

impl SortOptions {
    #[must_use]
    pub fn new(sort_column: impl Into<String>, sort_direction: SortDirection) -> Self {
        Self {
            sort_column: sort_column.into(),
            sort_direction,
        }
    }
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            sort_column: String::new(),
            sort_direction: SortDirection::Ascending,
        }
    }
}

/// Pagination options for a query.
///
/// `page_number` is 1-based. A `page_size` of 0 means "no limit": the page
/// offset is still applied but the result is not truncated. Page numbers
/// below 1 cannot be represented; the offset computation saturates, so page
/// 0 behaves as page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationOptions {
    pub page_number: u64,
    pub page_size: u64,
}

impl PaginationOptions {
    #[must_use]
    pub const fn new(page_number: u64, page_size: u64) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Offset/limit pair for the underlying query. The limit is `None` when
    /// the page size is 0.
    #[must_use]
    pub const fn offset_limit(&self) -> (u64, Option<u64>) {
        let offset = self
            .page_number
            .saturating_sub(1)
            .saturating_mul(self.page_size);
        let limit = if self.page_size > 0 {
            Some(self.page_size)
        } else {
            None
        };
        (offset, limit)
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 5,
        }
    }
}

/// A page of items together with the total count across all pages.
///
/// `total` is the size of the filtered set before the page slice was taken;
/// it is supplied by the caller, never derived from `list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResult<T> {
    pub list: Vec<T>,
    pub total: u64,
}

impl<T> PaginatedResult<T> {
    #[must_use]
    pub fn new(list: Vec<T>, total: u64) -> Self {
        Self { list, total }
    }

    /// Projects each item through `selector`, preserving the total count.
    pub fn map<U>(self, selector: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            list: self.list.into_iter().map(selector).collect(),
            total: self.total,
        }
    }
}

/// State-change event raised by a table view when the user pages or re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableChanged {
    pub page_number: u64,
    pub page_size: u64,
    pub sort_column: String,
    pub sort_direction: SortDirection,
}

impl From<&TableChanged> for PaginationOptions {
    fn from(event: &TableChanged) -> Self {
        Self::new(event.page_number, event.page_size)
    }
}

impl From<&TableChanged> for SortOptions {
    fn from(event: &TableChanged) -> Self {
        Self::new(event.sort_column.clone(), event.sort_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        let options = PaginationOptions::default();
        assert_eq!(options.page_number, 1);
        assert_eq!(options.page_size, 5);
    }

    #[test]
    fn offset_limit_page_two() {
        let (offset, limit) = PaginationOptions::new(2, 5).offset_limit();
        assert_eq!(offset, 5);
        assert_eq!(limit, Some(5));
    }

    #[test]
    fn offset_limit_unlimited_page_size() {
        let (offset, limit) = PaginationOptions::new(3, 0).offset_limit();
        assert_eq!(offset, 0);
        assert_eq!(limit, None);
    }

    #[test]
    fn offset_saturates_below_page_one() {
        // Page 0 is a caller error; the offset saturates instead of wrapping.
        let (offset, _) = PaginationOptions::new(0, 5).offset_limit();
        assert_eq!(offset, 0);
    }

    #[test]
    fn paginated_result_map_preserves_total() {
        let page = PaginatedResult::new(vec![1, 2, 3], 12);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.list, vec!["1", "2", "3"]);
        assert_eq!(mapped.total, 12);
    }

    #[test]
    fn table_changed_conversions() {
        let event = TableChanged {
            page_number: 4,
            page_size: 10,
            sort_column: "name".to_string(),
            sort_direction: SortDirection::Descending,
        };
        assert_eq!(
            PaginationOptions::from(&event),
            PaginationOptions::new(4, 10)
        );
        assert_eq!(
            SortOptions::from(&event),
            SortOptions::new("name", SortDirection::Descending)
        );
    }
}
