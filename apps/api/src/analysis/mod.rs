// The text-analysis pipeline: raw extracted text in, structured signals,
// a heuristic score, and a narrative assessment out.
// All LLM calls go through llm_client; the narrative backend is pluggable.

pub mod analyzer;
pub mod contact;
pub mod experience;
pub mod handlers;
pub mod narrative;
pub mod prompts;
pub mod scoring;
pub mod skills;
