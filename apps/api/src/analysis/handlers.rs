//! Axum route handlers for the Analysis API.

use std::path::Path;

use axum::extract::{Multipart, Path as AxumPath, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::analyzer::{analyze, AnalysisResult, FileMeta};
use crate::analysis::skills;
use crate::errors::AppError;
use crate::extract;
use crate::state::AppState;

const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "txt", "doc", "docx"];

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub skills: Vec<&'static str>,
}

/// POST /api/v1/resumes/analyze
///
/// Multipart fields: `resume` (file, required), `job_description` (text,
/// optional), `target_role` (accepted, currently unused). Validation runs
/// before any analysis; the upload lives in a scoped temp file that is
/// removed on every exit path.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        match field.name().unwrap_or("") {
            "resume" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
                upload = Some((file_name, data));
            }
            "job_description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read job description: {e}"))
                })?;
                if !text.trim().is_empty() {
                    job_description = Some(text);
                }
            }
            // target_role and anything else: drain and ignore
            _ => {
                let _ = field.bytes().await;
            }
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File too large. Maximum size is 5MB".to_string(),
        ));
    }

    let extension = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF, DOC, DOCX, and TXT files are allowed".to_string(),
        ));
    }

    let spooled = extract::spool_to_temp(&data)?;
    let text = extract::extract_text(spooled.path(), &extension)?;

    let meta = FileMeta {
        name: file_name,
        size: data.len() as u64,
    };
    let analysis = analyze(
        state.narrative.as_deref(),
        &text,
        job_description.as_deref(),
        meta,
    )
    .await?;

    info!(
        file = %analysis.file_name,
        score = analysis.resume_score,
        skills = analysis.skills.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
    }))
}

/// GET /api/v1/skills/suggestions/:role
///
/// Static lookup, independent of any analysis. Unknown roles get the
/// generic default list.
pub async fn handle_skill_suggestions(
    AxumPath(role): AxumPath<String>,
) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        skills: skills::suggestions_for_role(&role).to_vec(),
    })
}
