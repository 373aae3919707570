use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::catalog::get_template;
use crate::engine;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::render::assemble_record;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RenderRequest {
    pub template_id: Uuid,
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub template_id: Uuid,
    pub resume_id: Uuid,
    pub output: String,
}

/// POST /api/v1/resumes/:id/render
///
/// Fetches the resume and the named catalog template, assembles the
/// expansion record, and returns the fully expanded document.
pub async fn handle_render_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let resume: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(&state.db)
        .await?;
    let resume = resume.ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let template = get_template(&state.db, req.template_id).await?;

    let record = assemble_record(&resume.data);
    let output = engine::render(&template.body, &record);
    debug!(
        resume_id = %resume_id,
        template_id = %req.template_id,
        output_len = output.len(),
        "rendered resume"
    );

    Ok(Json(RenderResponse {
        template_id: req.template_id,
        resume_id,
        output,
    }))
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub template: String,
    pub data: Value,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub output: String,
}

/// POST /api/v1/render/preview
///
/// Stateless expansion of a caller-supplied template and data record.
/// Used by the template editor for live preview; nothing is persisted.
pub async fn handle_preview(
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let record = assemble_record(&req.data);
    let output = engine::render(&req.template, &record);
    Ok(Json(PreviewResponse { output }))
}
