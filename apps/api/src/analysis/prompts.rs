// LLM prompt constants for narrative generation.
// Each service that needs LLM calls defines its prompts alongside it.

/// System role for the narrative reviewer. Enforces JSON-only output.
pub const NARRATIVE_SYSTEM: &str =
    "You are an expert HR professional and resume analyzer. \
    Provide constructive, specific feedback. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Narrative prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending; `{job_description}` becomes the empty string when no job
/// description was supplied.
pub const NARRATIVE_PROMPT_TEMPLATE: &str = r#"Analyze this resume and provide detailed feedback:

Resume Text: {resume_text}

{job_description}

Please provide:
1. A professional summary (2-3 lines)
2. Top 3 strengths
3. Top 3 areas for improvement
4. Missing keywords or skills for the target role
5. Overall assessment

Format your response as JSON with these keys: summary, strengths, improvements, missingSkills, assessment"#;
