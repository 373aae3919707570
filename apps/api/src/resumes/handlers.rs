use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub title: String,
    /// Structured resume fields: contact object, summary, skills,
    /// experience, education, projects, certifications.
    pub data: Value,
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }
    if !req.data.is_object() {
        return Err(AppError::Validation(
            "data must be a JSON object of resume fields".to_string(),
        ));
    }

    let row: ResumeRow = sqlx::query_as(
        "INSERT INTO resumes (id, user_id, title, data, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, now(), now()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(&req.title)
    .bind(&req.data)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let row: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
    let row = row.ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(row))
}
