//! Heuristic résumé quality score: a pure, deterministic function of the
//! extraction outputs. Independent weighted components, each capped, total
//! capped at 100.

use crate::analysis::contact::ContactInfo;

/// Keyword groups indicating conventional résumé sections. Each group that
/// appears anywhere in the text (case-insensitive substring) is worth 3
/// points, independently of the others.
const SECTION_KEYWORD_GROUPS: [&[&str]; 5] = [
    &["education", "degree", "university", "college"],
    &["experience", "work", "job", "position"],
    &["project", "portfolio"],
    &["skill", "technical", "proficient"],
    &["achievement", "award", "certification"],
];

pub struct ScoreInput<'a> {
    pub contact: &'a ContactInfo,
    pub skill_count: usize,
    pub experience_years: u32,
    pub word_count: usize,
    pub text: &'a str,
}

/// Computes the 0-100 score. No I/O, no randomness.
pub fn compute_score(input: &ScoreInput) -> u8 {
    let mut score: u32 = 0;

    // Contact information (max 20)
    if input.contact.email.is_some() {
        score += 10;
    }
    if input.contact.phone.is_some() {
        score += 10;
    }

    // Skills (max 30)
    score += match input.skill_count {
        n if n >= 10 => 30,
        n if n >= 5 => 20,
        n if n >= 1 => 10,
        _ => 0,
    };

    // Experience (max 25). The `> 0` tier is unreachable for integer years
    // but kept as a distinct tier for score-table compatibility.
    score += match input.experience_years {
        y if y >= 5 => 25,
        y if y >= 3 => 20,
        y if y >= 1 => 15,
        y if y > 0 => 10,
        _ => 0,
    };

    // Resume length (max 10)
    score += match input.word_count {
        n if (300..=800).contains(&n) => 10,
        n if n >= 200 => 7,
        n if n >= 100 => 5,
        _ => 0,
    };

    // Content-section coverage (max 15)
    let text_lower = input.text.to_lowercase();
    for group in SECTION_KEYWORD_GROUPS {
        if group.iter().any(|kw| text_lower.contains(kw)) {
            score += 3;
        }
    }

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(email: bool, phone: bool) -> ContactInfo {
        ContactInfo {
            name: Some("Jane Doe".to_string()),
            email: email.then(|| "jane@example.com".to_string()),
            phone: phone.then(|| "555 123 4567".to_string()),
        }
    }

    #[test]
    fn test_full_score_composite() {
        // 10 (email) + 10 (phone) + 30 (12 skills) + 25 (6 years)
        // + 10 (400 words) + 15 (all five section groups) = 100
        let c = contact(true, true);
        let input = ScoreInput {
            contact: &c,
            skill_count: 12,
            experience_years: 6,
            word_count: 400,
            text: "education experience project skill award",
        };
        assert_eq!(compute_score(&input), 100);
    }

    #[test]
    fn test_empty_everything_scores_zero() {
        let c = ContactInfo {
            name: None,
            email: None,
            phone: None,
        };
        let input = ScoreInput {
            contact: &c,
            skill_count: 0,
            experience_years: 0,
            word_count: 0,
            text: "",
        };
        assert_eq!(compute_score(&input), 0);
    }

    #[test]
    fn test_is_deterministic() {
        let c = contact(true, false);
        let input = ScoreInput {
            contact: &c,
            skill_count: 7,
            experience_years: 2,
            word_count: 250,
            text: "work on a project",
        };
        assert_eq!(compute_score(&input), compute_score(&input));
    }

    #[test]
    fn test_skill_tiers() {
        let c = contact(false, false);
        let base = |n| {
            compute_score(&ScoreInput {
                contact: &c,
                skill_count: n,
                experience_years: 0,
                word_count: 0,
                text: "",
            })
        };
        assert_eq!(base(0), 0);
        assert_eq!(base(1), 10);
        assert_eq!(base(4), 10);
        assert_eq!(base(5), 20);
        assert_eq!(base(9), 20);
        assert_eq!(base(10), 30);
        assert_eq!(base(40), 30);
    }

    #[test]
    fn test_experience_tiers() {
        let c = contact(false, false);
        let base = |y| {
            compute_score(&ScoreInput {
                contact: &c,
                skill_count: 0,
                experience_years: y,
                word_count: 0,
                text: "",
            })
        };
        assert_eq!(base(0), 0);
        assert_eq!(base(1), 15);
        assert_eq!(base(2), 15);
        assert_eq!(base(3), 20);
        assert_eq!(base(4), 20);
        assert_eq!(base(5), 25);
        assert_eq!(base(30), 25);
    }

    #[test]
    fn test_word_count_tiers() {
        let c = contact(false, false);
        let base = |n| {
            compute_score(&ScoreInput {
                contact: &c,
                skill_count: 0,
                experience_years: 0,
                word_count: n,
                text: "",
            })
        };
        assert_eq!(base(99), 0);
        assert_eq!(base(100), 5);
        assert_eq!(base(200), 7);
        assert_eq!(base(299), 7);
        assert_eq!(base(300), 10);
        assert_eq!(base(800), 10);
        // Over-long resumes drop back to the >=200 tier.
        assert_eq!(base(801), 7);
    }

    #[test]
    fn test_section_groups_are_independent() {
        let c = contact(false, false);
        let base = |text| {
            compute_score(&ScoreInput {
                contact: &c,
                skill_count: 0,
                experience_years: 0,
                word_count: 0,
                text,
            })
        };
        assert_eq!(base("university"), 3);
        assert_eq!(base("University DEGREE"), 3); // same group counts once
        assert_eq!(base("university work portfolio"), 9);
        assert_eq!(base("degree job project technical certification"), 15);
    }

    #[test]
    fn test_contact_components() {
        let input = |c: &ContactInfo| {
            compute_score(&ScoreInput {
                contact: c,
                skill_count: 0,
                experience_years: 0,
                word_count: 0,
                text: "",
            })
        };
        assert_eq!(input(&contact(false, false)), 0);
        assert_eq!(input(&contact(true, false)), 10);
        assert_eq!(input(&contact(false, true)), 10);
        assert_eq!(input(&contact(true, true)), 20);
    }

    #[test]
    fn test_score_never_exceeds_100() {
        let c = contact(true, true);
        let input = ScoreInput {
            contact: &c,
            skill_count: 100,
            experience_years: 40,
            word_count: 500,
            text: "education experience project skill award extras",
        };
        assert!(compute_score(&input) <= 100);
    }
}
