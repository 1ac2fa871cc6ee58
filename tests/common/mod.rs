#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use entity_filter::{
    EntityFilter, FieldEntry, FieldValue, FilterField, FilterTarget, PaginationOptions,
    ParseError, SortOptions, bind_value, filter_enum,
};

pub mod ticket_entity;

filter_enum! {
    pub enum TicketStatus {
        Open = 0,
        InProgress = 1,
        Closed = 2,
    }
}

/// In-memory entity shape used by the pure-core suites.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Uuid,
    pub code: i32,
    pub title: String,
    pub status: TicketStatus,
    pub owner_id: Option<Uuid>,
    pub severity: Option<i32>,
    pub created_at: NaiveDateTime,
    pub closed_at: Option<NaiveDateTime>,
}

impl Ticket {
    pub fn new(code: i32, title: &str, status: TicketStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            title: title.to_string(),
            status,
            owner_id: None,
            severity: None,
            created_at: day(code.rem_euclid(28) + 1),
            closed_at: None,
        }
    }
}

/// Midnight on the given day of March 2024.
pub fn day(day: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, u32::try_from(day).unwrap())
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

impl FilterTarget for Ticket {
    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "title",
            "status",
            "owner_id",
            "severity",
            "created_at",
            "closed_at",
        ]
    }

    fn field_value(&self, column: &str) -> FieldValue {
        match column {
            "id" => self.id.into(),
            "code" => self.code.into(),
            "title" => self.title.as_str().into(),
            "status" => FieldValue::from_enum(Some(self.status)),
            "owner_id" => self.owner_id.into(),
            "severity" => self.severity.into(),
            "created_at" => self.created_at.into(),
            "closed_at" => self.closed_at.into(),
            _ => FieldValue::Unset,
        }
    }
}

const CODE: FilterField = FilterField::new("code").query_param();
const TITLE_CONTAINS: FilterField = FilterField::new("title_contains")
    .contains()
    .underlying("title")
    .query_param_named("t");
const TITLE_EXACT: FilterField = FilterField::new("title_exact")
    .equals()
    .underlying("title")
    .query_param_named("te");
const STATUS: FilterField = FilterField::new("status").query_param();
const STATUSES: FilterField = FilterField::new("statuses")
    .underlying("status")
    .query_param();
// Dropdown-style selection: carries a display label, binds by variant name.
const STATUS_PICKS: FilterField = FilterField::new("status_picks")
    .underlying("status")
    .enum_as_name()
    .query_param_named("sn");
const OWNER_ID: FilterField = FilterField::new("owner_id").query_param_named("owner");
const SEVERITY: FilterField = FilterField::new("severity").query_param();
const CREATED_FROM: FilterField = FilterField::new("created_from")
    .date_from()
    .underlying("created_at")
    .query_param_named("from");
const CREATED_TO: FilterField = FilterField::new("created_to")
    .date_to()
    .underlying("created_at")
    .query_param_named("to");
const CLOSED_FROM: FilterField = FilterField::new("closed_from")
    .date_from()
    .underlying("closed_at");
const CLOSED_TO: FilterField = FilterField::new("closed_to")
    .date_to()
    .underlying("closed_at");
// Aliased onto a column no entity has; always skipped.
const LEGACY_CODE: FilterField = FilterField::new("legacy_code")
    .underlying("code_v1")
    .query_param();
const REFRESHED_AT: FilterField = FilterField::new("refreshed_at").computed();

/// Filter shared by the in-memory `Ticket` and the Sea-ORM ticket entity.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub pagination: PaginationOptions,
    pub sort: SortOptions,
    pub code: Option<i32>,
    pub title_contains: Option<String>,
    pub title_exact: Option<String>,
    pub status: Option<TicketStatus>,
    pub statuses: Vec<TicketStatus>,
    pub status_picks: Vec<(TicketStatus, String)>,
    pub owner_id: Option<Uuid>,
    pub severity: Option<i32>,
    pub created_from: Option<NaiveDateTime>,
    pub created_to: Option<NaiveDateTime>,
    pub closed_from: Option<NaiveDateTime>,
    pub closed_to: Option<NaiveDateTime>,
    pub legacy_code: Option<i32>,
    pub refreshed_at: Option<NaiveDateTime>,
}

impl EntityFilter for TicketFilter {
    fn pagination(&self) -> &PaginationOptions {
        &self.pagination
    }

    fn set_pagination(&mut self, options: PaginationOptions) {
        self.pagination = options;
    }

    fn sort(&self) -> &SortOptions {
        &self.sort
    }

    fn set_sort(&mut self, options: SortOptions) {
        self.sort = options;
    }

    fn entries(&self) -> Vec<FieldEntry> {
        vec![
            FieldEntry::new(CODE, self.code),
            FieldEntry::new(TITLE_CONTAINS, self.title_contains.clone()),
            FieldEntry::new(TITLE_EXACT, self.title_exact.clone()),
            FieldEntry::new(STATUS, FieldValue::from_enum(self.status)),
            FieldEntry::new(STATUSES, FieldValue::from_enum_list(&self.statuses)),
            FieldEntry::new(
                STATUS_PICKS,
                FieldValue::from_labeled_enum_list(&self.status_picks),
            ),
            FieldEntry::new(OWNER_ID, self.owner_id),
            FieldEntry::new(SEVERITY, self.severity),
            FieldEntry::new(CREATED_FROM, self.created_from),
            FieldEntry::new(CREATED_TO, self.created_to),
            FieldEntry::new(CLOSED_FROM, self.closed_from),
            FieldEntry::new(CLOSED_TO, self.closed_to),
            FieldEntry::new(LEGACY_CODE, self.legacy_code),
            FieldEntry::new(REFRESHED_AT, self.refreshed_at),
        ]
    }

    fn bind_field(&mut self, name: &str, raw: Option<&str>) -> Result<(), ParseError> {
        match name {
            "code" => self.code = bind_value(raw)?,
            "title_contains" => self.title_contains = bind_value(raw)?,
            "title_exact" => self.title_exact = bind_value(raw)?,
            "status" => self.status = bind_value(raw)?,
            "statuses" => self.statuses = bind_value(raw)?,
            "status_picks" => self.status_picks = bind_value(raw)?,
            "owner_id" => self.owner_id = bind_value(raw)?,
            "severity" => self.severity = bind_value(raw)?,
            "created_from" => self.created_from = bind_value(raw)?,
            "created_to" => self.created_to = bind_value(raw)?,
            "closed_from" => self.closed_from = bind_value(raw)?,
            "closed_to" => self.closed_to = bind_value(raw)?,
            "legacy_code" => self.legacy_code = bind_value(raw)?,
            "refreshed_at" => self.refreshed_at = bind_value(raw)?,
            _ => {}
        }
        Ok(())
    }
}
