//! Contact-info extraction: email, phone, and candidate name.
//!
//! Best-effort and lossy. The heuristics assume fairly conventional résumé
//! formatting (name near the top, standard email/phone shapes). Pattern
//! order is load-bearing: first successful pattern wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

/// Loose digit grouping: optional +91 country prefix, optional parenthesized
/// area code, 7-12 digits with embedded spaces/hyphens.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+91[\s-]?)?(?:\(?\d{3}\)?[\s-]?)?[\d\s-]{7,12}").expect("phone pattern is valid")
});

/// Name patterns, tried in order:
/// (a) a line starting with 2-3 capitalized words,
/// (b) an explicit "Name: X Y" label,
/// (c) a standalone all-caps line.
static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // The optional third word stays on the same line; \s here would
        // greedily pull in the first word of the following line.
        r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)?)",
        r"(?i)name\s*:?\s*([A-Z][a-z]+ [A-Z][a-z]+)",
        r"(?m)^([A-Z][A-Z\s]+)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("name pattern is valid"))
    .collect()
});

/// Exact 2-3 capitalized words, used for the first-lines fallback scan.
static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+(?:\s+[A-Z][a-z]+)?$").expect("name-line pattern is valid")
});

/// Extracted contact fields. Absence is an explicit `None`, not a sentinel
/// string; the `"Unknown"` sentinel exists only at the serialization
/// boundary so the wire shape matches the published API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    #[serde(serialize_with = "unknown_if_absent")]
    pub name: Option<String>,
    #[serde(serialize_with = "unknown_if_absent")]
    pub email: Option<String>,
    #[serde(serialize_with = "unknown_if_absent")]
    pub phone: Option<String>,
}

fn unknown_if_absent<S: Serializer>(
    field: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match field {
        Some(value) => serializer.serialize_str(value),
        None => serializer.serialize_str("Unknown"),
    }
}

pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        name: extract_name(text),
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: extract_phone(text),
    }
}

/// First phone-shaped match that actually carries at least 7 digits
/// (the loose pattern would otherwise accept runs of pure whitespace).
/// Embedded whitespace is collapsed to single spaces and trimmed.
fn extract_phone(text: &str) -> Option<String> {
    PHONE
        .find_iter(text)
        .find(|m| m.as_str().chars().filter(char::is_ascii_digit).count() >= 7)
        .map(|m| collapse_whitespace(m.as_str()))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn extract_name(text: &str) -> Option<String> {
    for pattern in NAME_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let name = caps[1].trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    // Last resort: a short 2-3 capitalized-word line among the first 5 lines.
    text.lines()
        .take(5)
        .map(str::trim)
        .find(|line| NAME_LINE.is_match(line) && line.len() < 50)
        .map(|line| line.to_string())
}
