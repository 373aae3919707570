use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::{get_template, list_templates};
use crate::errors::AppError;
use crate::models::template::{TemplateRow, TemplateSummaryRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// GET /api/v1/templates?category=modern
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(params): Query<CategoryQuery>,
) -> Result<Json<Vec<TemplateSummaryRow>>, AppError> {
    let rows = list_templates(&state.db, params.category.as_deref()).await?;
    Ok(Json(rows))
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TemplateRow>, AppError> {
    let row = get_template(&state.db, id).await?;
    Ok(Json(row))
}
