#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One entry in the template catalog: a named body of placeholder markup,
/// grouped by visual category (e.g. "modern", "classic", "compact").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TemplateRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// The placeholder markup the expansion engine consumes.
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Catalog listing shape — the body is omitted, it can be large.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TemplateSummaryRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}
