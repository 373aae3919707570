//! Template catalog — persisted, named placeholder templates grouped by
//! category. The expansion engine never touches this store; handlers fetch
//! a body here and hand it to the engine as an opaque string.

pub mod handlers;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::template::{TemplateRow, TemplateSummaryRow};

/// Lists catalog entries, optionally filtered to one category.
pub async fn list_templates(
    db: &PgPool,
    category: Option<&str>,
) -> Result<Vec<TemplateSummaryRow>, AppError> {
    let rows = match category {
        Some(category) => {
            sqlx::query_as(
                "SELECT id, name, category, created_at FROM templates \
                 WHERE category = $1 ORDER BY name",
            )
            .bind(category)
            .fetch_all(db)
            .await?
        }
        None => {
            sqlx::query_as("SELECT id, name, category, created_at FROM templates ORDER BY name")
                .fetch_all(db)
                .await?
        }
    };
    Ok(rows)
}

/// Fetches one catalog entry including its body.
pub async fn get_template(db: &PgPool, id: Uuid) -> Result<TemplateRow, AppError> {
    let row: Option<TemplateRow> = sqlx::query_as("SELECT * FROM templates WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))
}
