//! Answer synthesis for the knowledge-store path.
//!
//! Dispatch walks a fixed rule table in order. A rule fires when the
//! query contains one of its trigger keywords *and* an entry of the
//! rule's category is among the retrieved entries; the first firing
//! rule picks a template branch from the query. When no rule fires the
//! answer is a short summary of the best entry, or the topic menu when
//! nothing was retrieved at all.

use crate::{
    knowledge::{Category, KnowledgeEntry},
    templates::{RagTemplate, SUMMARY_PROMPT},
};

/// One row of the dispatch table.
struct DispatchRule {
    category: Category,
    triggers: &'static [&'static str],
    branch: fn(&str) -> RagTemplate,
}

const RULES: &[DispatchRule] = &[
    DispatchRule {
        category: Category::Requirements,
        triggers: &[
            "requirement",
            "requirements",
            "need",
            "eligibility",
            "qualify",
        ],
        branch: requirements_branch,
    },
    DispatchRule {
        category: Category::Deadlines,
        triggers: &["deadline", "due", "when", "date", "apply"],
        branch: deadlines_branch,
    },
    DispatchRule {
        category: Category::Fees,
        triggers: &[
            "fee",
            "cost",
            "tuition",
            "price",
            "money",
            "financial",
            "aid",
            "scholarship",
        ],
        branch: fees_branch,
    },
    DispatchRule {
        category: Category::Programs,
        triggers: &["program", "major", "course", "degree", "study", "school"],
        branch: programs_branch,
    },
    DispatchRule {
        category: Category::Campus,
        triggers: &[
            "campus", "life", "facility", "service", "support", "housing",
            "dorm",
        ],
        branch: campus_branch,
    },
];

const ENGINEERING_KEYWORDS: &[&str] = &["engineering", "computer", "technology"];
const BUSINESS_KEYWORDS: &[&str] = &["business", "mba", "finance", "marketing"];

/// True when `text` contains any of `keywords` as a substring.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// True when a lowercased query asks about graduate study.
///
/// "undergraduate" is removed before checking so that it never counts
/// as a mention of "graduate".
///
/// ```
/// use admitbot::synthesis::mentions_graduate;
///
/// assert!(mentions_graduate("graduate deadlines", &["graduate"]));
/// assert!(!mentions_graduate("undergraduate deadlines", &["graduate"]));
/// ```
pub fn mentions_graduate(query: &str, keywords: &[&str]) -> bool {
    contains_any(&query.replace("undergraduate", " "), keywords)
}

fn requirements_branch(query: &str) -> RagTemplate {
    if mentions_graduate(query, &["graduate", "master", "phd", "mba"]) {
        RagTemplate::GraduateRequirements
    } else {
        RagTemplate::UndergraduateRequirements
    }
}

fn deadlines_branch(query: &str) -> RagTemplate {
    if mentions_graduate(query, &["graduate", "master", "phd"]) {
        RagTemplate::GraduateDeadlines
    } else {
        RagTemplate::UndergraduateDeadlines
    }
}

fn fees_branch(query: &str) -> RagTemplate {
    if mentions_graduate(query, &["graduate", "master", "mba", "phd"]) {
        RagTemplate::GraduateFees
    } else {
        RagTemplate::UndergraduateFees
    }
}

fn programs_branch(query: &str) -> RagTemplate {
    if contains_any(query, ENGINEERING_KEYWORDS) {
        RagTemplate::EngineeringPrograms
    } else if contains_any(query, BUSINESS_KEYWORDS) {
        RagTemplate::BusinessPrograms
    } else {
        RagTemplate::ProgramsOverview
    }
}

fn campus_branch(_query: &str) -> RagTemplate {
    RagTemplate::CampusLife
}

/// Outcome of dispatching a query over retrieved entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// A category rule fired.
    Template(RagTemplate),
    /// No rule fired; summarize this entry.
    Summary(&'a KnowledgeEntry),
    /// Nothing was retrieved.
    Default,
}

/// Decide how to answer `query` from the ranked `entries`.
pub fn select<'a>(query: &str, entries: &[&'a KnowledgeEntry]) -> Selection<'a> {
    let Some(best) = entries.first() else {
        return Selection::Default;
    };

    let query = query.to_lowercase();
    for rule in RULES {
        if !contains_any(&query, rule.triggers) {
            continue;
        }
        if entries.iter().any(|e| e.category == rule.category) {
            let template = (rule.branch)(&query);
            tracing::debug!(
                category = %rule.category,
                ?template,
                "dispatch rule fired"
            );
            return Selection::Template(template);
        }
    }

    Selection::Summary(best)
}

/// Build the answer text for `query` from ranked `entries`.
///
/// Pure: identical input always yields byte-identical output.
pub fn synthesize(query: &str, entries: &[&KnowledgeEntry]) -> String {
    match select(query, entries) {
        Selection::Template(template) => template.text().to_string(),
        Selection::Summary(entry) => extract_summary(&entry.content),
        Selection::Default => default_response().to_string(),
    }
}

/// First three period-delimited fragments of `content`, plus a prompt.
///
/// The split is naive, so decimals such as "3.0" are cut mid-number.
///
/// ```
/// use admitbot::synthesis::extract_summary;
///
/// let summary = extract_summary("One. Two. Three. Four.");
/// assert!(summary.starts_with("One. Two. Three."));
/// ```
pub fn extract_summary(content: &str) -> String {
    let fragments: Vec<&str> = content.split('.').take(3).collect();
    let mut summary = fragments.join(".");
    summary.push('.');
    summary.push_str(SUMMARY_PROMPT);
    summary
}

/// Topic menu returned when no entry matched the query.
pub fn default_response() -> &'static str {
    RagTemplate::Default.text()
}
