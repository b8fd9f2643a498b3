//! Years-of-experience estimation.
//!
//! Phase 1 takes the maximum N across explicit "N years of experience"
//! phrasings. Phase 2 runs only when no phrase matched and infers a span
//! from work-history date ranges. Explicit self-reported experience is
//! preferred over date-span arithmetic, which is only a proxy.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;

/// Explicit experience phrasings. The captured group is the year count;
/// a trailing "+" after the number is tolerated but not captured.
static PHRASE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(\d+)\+?\s*years?\s*of\s*experience",
        r"(?i)(\d+)\+?\s*years?\s*experience",
        r"(?i)experience\s*:?\s*(\d+)\+?\s*years?",
        r"(?i)(\d+)\+?\s*yrs?\s*experience",
        r"(?i)with\s*(\d+)\+?\s*years?",
        r"(?i)over\s*(\d+)\+?\s*years?",
        r"(?i)more\s*than\s*(\d+)\+?\s*years?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience pattern is valid"))
    .collect()
});

/// Date-range mentions: "Jan 2019 - Present", "2019 - present", "2015 - 2018".
static DATE_RANGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s*\d{4}\s*-\s*(?:present|current)",
        r"(?i)\b(20\d{2})\s*-\s*(?:present|current)",
        r"\b(20\d{2})\s*-\s*(20\d{2})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("date-range pattern is valid"))
    .collect()
});

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20\d{2}").expect("year pattern is valid"));

/// Best-guess years of experience as of now.
pub fn estimate_years(text: &str) -> u32 {
    estimate_years_at(text, Utc::now().year())
}

/// Best-guess years of experience as of `current_year`.
pub fn estimate_years_at(text: &str, current_year: i32) -> u32 {
    if let Some(years) = max_explicit_years(text) {
        tracing::debug!("explicit experience phrase found: {} years", years);
        return years;
    }
    years_from_date_ranges(text, current_year)
}

/// Phase 1: maximum N across all explicit phrase matches, if any matched.
fn max_explicit_years(text: &str) -> Option<u32> {
    let mut max_years: Option<u32> = None;
    for pattern in PHRASE_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Ok(years) = caps[1].parse::<u32>() {
                max_years = Some(max_years.map_or(years, |m| m.max(years)));
            }
        }
    }
    max_years
}

/// Phase 2: earliest year across date-range mentions, counted only when
/// some range is ongoing ("present"/"current").
fn years_from_date_ranges(text: &str, current_year: i32) -> u32 {
    let mut earliest_year = current_year;
    let mut has_current_job = false;

    for pattern in DATE_RANGE_PATTERNS.iter() {
        for matched in pattern.find_iter(text) {
            let span = matched.as_str().to_lowercase();
            if span.contains("present") || span.contains("current") {
                has_current_job = true;
            }
            for year in YEAR.find_iter(&span) {
                if let Ok(year) = year.as_str().parse::<i32>() {
                    earliest_year = earliest_year.min(year);
                }
            }
        }
    }

    if has_current_job && earliest_year < current_year {
        (current_year - earliest_year) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_phrase_returns_stated_years() {
        assert_eq!(estimate_years_at("I have 5 years of experience in backend work", 2024), 5);
    }

    #[test]
    fn test_plus_sign_is_tolerated_not_counted() {
        assert_eq!(estimate_years_at("10+ years experience shipping software", 2024), 10);
    }

    #[test]
    fn test_labelled_phrase_variant() {
        assert_eq!(estimate_years_at("Experience: 7 years", 2024), 7);
    }

    #[test]
    fn test_yrs_abbreviation() {
        assert_eq!(estimate_years_at("3 yrs experience with Rust", 2024), 3);
    }

    #[test]
    fn test_over_and_more_than_variants() {
        assert_eq!(estimate_years_at("over 4 years leading teams", 2024), 4);
        assert_eq!(estimate_years_at("more than 6 years in fintech", 2024), 6);
    }

    #[test]
    fn test_maximum_wins_across_phrases() {
        let text = "2 years of experience in Go, with 9 years in Java overall";
        assert_eq!(estimate_years_at(text, 2024), 9);
    }

    #[test]
    fn test_date_range_fallback_with_ongoing_position() {
        assert_eq!(estimate_years_at("Software Engineer, Jan 2019 - Present", 2024), 5);
    }

    #[test]
    fn test_bare_year_range_to_present() {
        assert_eq!(estimate_years_at("Acme Corp 2020 - current", 2024), 4);
    }

    #[test]
    fn test_closed_ranges_alone_count_for_nothing() {
        // No ongoing position, so span arithmetic does not apply.
        assert_eq!(estimate_years_at("Acme Corp 2015 - 2018", 2024), 0);
    }

    #[test]
    fn test_closed_range_widens_span_when_ongoing_exists() {
        let text = "Intern 2016 - 2017\nEngineer Mar 2021 - Present";
        assert_eq!(estimate_years_at(text, 2024), 8);
    }

    #[test]
    fn test_explicit_phrase_wins_over_date_ranges() {
        let text = "8 years of experience\nEngineer 2022 - Present";
        assert_eq!(estimate_years_at(text, 2024), 8);
    }

    #[test]
    fn test_no_signals_returns_zero() {
        assert_eq!(estimate_years_at("Recent graduate seeking first role", 2024), 0);
    }
}
