//! Analysis orchestration: runs the extraction pipeline over one document's
//! text and assembles the final result record.
//!
//! Flow: validate text -> {skills, experience, contact, word count} ->
//!       score -> narrative (only async step) -> assemble.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::analysis::contact::{self, ContactInfo};
use crate::analysis::experience;
use crate::analysis::narrative::{self, Narrative, NarrativeBackend};
use crate::analysis::scoring::{compute_score, ScoreInput};
use crate::analysis::skills;
use crate::errors::AppError;

/// Extracted text below this length is treated as an extraction failure.
const MIN_TEXT_LEN: usize = 10;

/// Caller-supplied metadata about the uploaded document.
#[derive(Debug, Clone)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
}

/// The complete analysis record for one document. Built fresh per request,
/// immutable after construction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub contact_info: ContactInfo,
    pub skills: Vec<String>,
    pub experience: u32,
    pub word_count: usize,
    pub resume_score: u8,
    pub narrative: Narrative,
    pub file_name: String,
    pub file_size: u64,
    pub analyzed_at: DateTime<Utc>,
}

/// Analyzes one document's extracted text.
///
/// Rejects text shorter than 10 characters with an extraction failure and
/// produces no partial result. The narrative step may suspend on external
/// I/O but never fails: it falls back deterministically.
pub async fn analyze(
    backend: Option<&dyn NarrativeBackend>,
    text: &str,
    job_description: Option<&str>,
    file: FileMeta,
) -> Result<AnalysisResult, AppError> {
    if text.len() < MIN_TEXT_LEN {
        return Err(AppError::Extraction(
            "Failed to extract meaningful text from the document".to_string(),
        ));
    }

    let contact_info = contact::extract_contact(text);
    let skills = skills::match_skills(text);
    let experience = experience::estimate_years(text);
    let word_count = text.split_whitespace().count();

    let resume_score = compute_score(&ScoreInput {
        contact: &contact_info,
        skill_count: skills.len(),
        experience_years: experience,
        word_count,
        text,
    });

    debug!(
        contact_found = contact_info.name.is_some(),
        skills_count = skills.len(),
        experience_years = experience,
        word_count,
        resume_score,
        "analysis signals extracted"
    );

    let narrative = narrative::generate_with_fallback(backend, text, job_description).await;

    Ok(AnalysisResult {
        contact_info,
        skills,
        experience,
        word_count,
        resume_score,
        narrative,
        file_name: file.name,
        file_size: file.size,
        analyzed_at: Utc::now(),
    })
}
