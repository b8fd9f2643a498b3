//! Narrative assessment: summary, strengths, improvements, missing skills,
//! and an overall verdict.
//!
//! The external language model is a pluggable capability behind
//! `NarrativeBackend`. It can be absent (not configured) or fail at call
//! time; both cases fall back deterministically and are never surfaced to
//! the caller. The two fallbacks are intentionally distinct: the
//! unavailable-backend path inspects the résumé content, the call-failure
//! path returns fixed generic strings.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::prompts::{NARRATIVE_PROMPT_TEMPLATE, NARRATIVE_SYSTEM};
use crate::analysis::skills;
use crate::llm_client::{LlmClient, LlmError};

/// The five-field narrative result. Fallback-produced strengths and
/// improvements always have exactly 3 entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Narrative {
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    pub assessment: String,
}

/// The external narrative capability. Implementations may suspend on I/O;
/// callers must treat every error as a signal to fall back.
#[async_trait]
pub trait NarrativeBackend: Send + Sync {
    async fn generate(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<Narrative, LlmError>;
}

/// Narrative backend over the OpenAI-compatible chat-completions client.
pub struct LlmNarrativeBackend(pub LlmClient);

#[async_trait]
impl NarrativeBackend for LlmNarrativeBackend {
    async fn generate(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<Narrative, LlmError> {
        let prompt = build_narrative_prompt(resume_text, job_description);
        self.0.call_json::<Narrative>(&prompt, NARRATIVE_SYSTEM).await
    }
}

fn build_narrative_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let jd_block = job_description
        .map(|jd| format!("Job Description: {jd}"))
        .unwrap_or_default();
    NARRATIVE_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", &jd_block)
}

/// Obtains a narrative from the backend, falling back deterministically.
/// Never fails: an unconfigured backend yields the content-aware fallback,
/// a failed call yields the generic fallback.
pub async fn generate_with_fallback(
    backend: Option<&dyn NarrativeBackend>,
    resume_text: &str,
    job_description: Option<&str>,
) -> Narrative {
    let Some(backend) = backend else {
        debug!("narrative backend not configured, using content-aware fallback");
        return unavailable_fallback(resume_text);
    };
    match backend.generate(resume_text, job_description).await {
        Ok(narrative) => narrative,
        Err(e) => {
            warn!("narrative generation failed, using generic fallback: {e}");
            failure_fallback()
        }
    }
}

/// Fallback for an unconfigured backend. Keyed on three content signals:
/// mentions of projects, mentions of experience/developer work, and the
/// number of vocabulary skills found.
fn unavailable_fallback(resume_text: &str) -> Narrative {
    let text_lower = resume_text.to_lowercase();
    let has_projects = text_lower.contains("project");
    let has_experience = text_lower.contains("experience") || text_lower.contains("developer");
    let skills_count = skills::match_skills(resume_text).len();

    Narrative {
        summary: format!(
            "Dedicated Full Stack Web Developer with proven experience in modern web \
             technologies. {} with expertise in React, Node.js, and database technologies.",
            if has_projects {
                "Demonstrated project delivery capabilities"
            } else {
                "Strong technical foundation"
            }
        ),
        strengths: vec![
            if skills_count > 8 {
                "Comprehensive technical skill set"
            } else {
                "Solid technical foundation"
            }
            .to_string(),
            if has_experience {
                "Relevant professional experience"
            } else {
                "Strong educational background"
            }
            .to_string(),
            if has_projects {
                "Practical project experience"
            } else {
                "Clear communication skills"
            }
            .to_string(),
        ],
        improvements: vec![
            "Add more quantified achievements (e.g., '40% performance improvement')".to_string(),
            "Include specific project outcomes and metrics".to_string(),
            "Enhance soft skills and leadership examples".to_string(),
        ],
        missing_skills: vec![
            "Docker".to_string(),
            "AWS/Cloud Services".to_string(),
            "Unit Testing".to_string(),
            "CI/CD Pipeline".to_string(),
        ],
        assessment: format!(
            "Strong technical profile {}. The resume demonstrates good technical breadth and \
             would benefit from more quantified achievements and cloud technology exposure.",
            if has_experience {
                "with relevant industry experience"
            } else {
                "ready for professional opportunities"
            }
        ),
    }
}

/// Fallback for a failed backend call. Fixed strings, independent of input.
fn failure_fallback() -> Narrative {
    Narrative {
        summary: "Professional with relevant experience and demonstrated skills in their field."
            .to_string(),
        strengths: vec![
            "Strong technical skills".to_string(),
            "Relevant experience".to_string(),
            "Clear formatting".to_string(),
        ],
        improvements: vec![
            "Add more quantified achievements".to_string(),
            "Include relevant keywords".to_string(),
            "Improve formatting".to_string(),
        ],
        missing_skills: vec![
            "Industry-specific skills".to_string(),
            "Soft skills".to_string(),
            "Certifications".to_string(),
        ],
        assessment: "The resume shows good potential with room for targeted improvements."
            .to_string(),
    }
}
