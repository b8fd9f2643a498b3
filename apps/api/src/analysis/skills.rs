//! Skill matching against a fixed vocabulary of canonical skill spellings,
//! plus the static role-to-suggested-skills lookup.

use std::sync::LazyLock;

use regex::Regex;

/// Canonical skill vocabulary. The spelling stored here is the spelling
/// reported back, regardless of the case found in the text.
const SKILL_VOCABULARY: &[&str] = &[
    // Frontend
    "React", "React.js", "ReactJS", "Angular", "Vue", "Vue.js", "JavaScript", "TypeScript",
    "HTML", "HTML5", "CSS", "CSS3", "SASS", "SCSS", "Bootstrap", "Tailwind", "Tailwind CSS",
    "jQuery", "Next.js", "NextJS", "Nuxt.js",
    // Backend
    "Node.js", "NodeJS", "Express", "Express.js", "Django", "Flask", "FastAPI", "Spring",
    "Spring Boot", "ASP.NET", ".NET", "PHP", "Laravel", "Symfony", "Ruby on Rails", "Python",
    "Java", "C#", "C++", "Go", "Rust",
    // Databases
    "MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite", "Oracle", "SQL Server", "Cassandra",
    "DynamoDB", "Elasticsearch", "Firebase", "Firestore",
    // Cloud & DevOps
    "AWS", "Azure", "Google Cloud", "GCP", "Docker", "Kubernetes", "Jenkins", "GitLab",
    "GitHub Actions", "Travis CI", "CircleCI", "Terraform", "Ansible",
    // Tools
    "Git", "GitHub", "Bitbucket", "Jira", "Confluence", "Slack", "Figma", "Adobe XD",
    "Photoshop", "VS Code", "IntelliJ", "Postman", "REST API", "REST APIs", "GraphQL",
    "Microservices", "API",
    // Mobile
    "React Native", "Flutter", "iOS", "Android", "Swift", "Kotlin", "Xamarin", "Cordova",
    "Ionic",
    // Data science & AI
    "Machine Learning", "Data Science", "TensorFlow", "PyTorch", "Pandas", "NumPy",
    "Scikit-learn", "Matplotlib", "Seaborn", "Jupyter", "R",
    // Methodologies
    "Agile", "Scrum", "Kanban", "DevOps", "CI/CD", "TDD", "BDD", "Microservices Architecture",
    // Soft skills
    "Leadership", "Project Management", "Team Management", "Communication", "Problem Solving",
    "Critical Thinking",
];

/// Case-insensitive literal patterns, compiled once. Skill strings are
/// regex-escaped so punctuated terms like `C++` and `Node.js` stay literal.
static SKILL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|&skill| {
            let pattern = format!("(?i){}", regex::escape(skill));
            let re = Regex::new(&pattern).expect("escaped literal is a valid pattern");
            (skill, re)
        })
        .collect()
});

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whole-word check on the characters adjacent to a literal match.
///
/// `\b` cannot be used here: it never asserts between two non-word
/// characters, so `\bC\+\+\b` fails to match "C++ and Rust" at all.
fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
    let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

/// Returns every vocabulary skill with at least one whole-word,
/// case-insensitive occurrence in `text`, in vocabulary order, using the
/// canonical spelling. Overlapping synonyms ("React", "React.js") are
/// independent entries and may both be reported.
pub fn match_skills(text: &str) -> Vec<String> {
    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| {
            re.find_iter(text)
                .any(|m| has_word_boundaries(text, m.start(), m.end()))
        })
        .map(|(skill, _)| (*skill).to_string())
        .collect()
}

/// Suggested skills for a role key, case-insensitive. Unknown roles get the
/// generic soft-skills list.
pub fn suggestions_for_role(role: &str) -> &'static [&'static str] {
    match role.to_lowercase().as_str() {
        "software-engineer" => &[
            "JavaScript", "Python", "React", "Node.js", "SQL", "Git", "AWS", "Docker",
        ],
        "data-scientist" => &[
            "Python", "R", "SQL", "Machine Learning", "TensorFlow", "Pandas", "Statistics",
            "Tableau",
        ],
        "product-manager" => &[
            "Agile", "Scrum", "Jira", "Analytics", "A/B Testing", "User Research", "Roadmapping",
        ],
        "designer" => &[
            "Figma", "Photoshop", "Illustrator", "Sketch", "User Research", "Prototyping", "CSS",
        ],
        "marketing" => &[
            "Google Analytics", "SEO", "Social Media", "Content Marketing", "Email Marketing",
            "PPC",
        ],
        _ => &[
            "Communication", "Problem Solving", "Teamwork", "Leadership", "Time Management",
        ],
    }
}
