//! Sea-ORM ticket entity backing the database-pushdown suite.
//!
//! Mirrors the in-memory `Ticket` shape; `status` is stored as the enum's
//! integer ordinal.

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

use entity_filter::{FieldValue, FilterTarget};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: i32,
    pub title: String,
    pub status: i32,
    pub owner_id: Option<Uuid>,
    pub severity: Option<i32>,
    pub created_at: NaiveDateTime,
    pub closed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl FilterTarget for Model {
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
            "status" => self.status.into(),
            "owner_id" => self.owner_id.into(),
            "severity" => self.severity.into(),
            "created_at" => self.created_at.into(),
            "closed_at" => self.closed_at.into(),
            _ => FieldValue::Unset,
        }
    }
}

/// Columns clients may sort on.
pub const SORTABLE: &[(&str, Column)] = &[
    ("code", Column::Code),
    ("title", Column::Title),
    ("status", Column::Status),
    ("created_at", Column::CreatedAt),
];
