//! The FAQ keyword path.
//!
//! A lighter answer source than the knowledge store: five question and
//! answer pairs scored with weighted, bidirectional substring matching,
//! then four keyword-triggered canned answers, then a help message. It
//! never consults the knowledge store.

use serde::{Deserialize, Serialize};

use crate::{
    config::FaqConfig,
    templates::{FaqTemplate, faq_follow_up},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl FaqEntry {
    fn new(question: &str, answer: &str, category: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
        }
    }
}

/// The built-in FAQ set.
pub fn default_faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "What are the admission requirements for undergraduate programs?",
            "For undergraduate programs, you need: High school diploma or equivalent, minimum GPA of 3.0, SAT scores (1200+ recommended), two letters of recommendation, and a personal statement. Some programs may have additional requirements.",
            "Eligibility",
        ),
        FaqEntry::new(
            "What is the application deadline?",
            "Early Decision: November 15th, Regular Decision: February 1st, Late Applications: March 15th (limited availability). International students should apply by January 15th for best consideration.",
            "Deadlines",
        ),
        FaqEntry::new(
            "What are the tuition fees for the academic year?",
            "Undergraduate tuition: $45,000/year, Graduate tuition: $52,000/year. Additional costs include housing ($12,000), meal plans ($4,500), and books/supplies ($1,200). Financial aid is available.",
            "Fees",
        ),
        FaqEntry::new(
            "What programs does the university offer?",
            "We offer 150+ undergraduate programs and 80+ graduate programs across 12 schools including Engineering, Business, Liberal Arts, Medicine, Law, Computer Science, and more.",
            "Programs",
        ),
        FaqEntry::new(
            "How do I apply for financial aid?",
            "Complete the FAFSA by March 1st. Submit CSS Profile for institutional aid. Merit scholarships are automatically considered with admission application. Work-study programs available.",
            "Financial Aid",
        ),
    ]
}

/// True when `word` and any word of `field` contain one another.
fn field_matches(field: &str, word: &str) -> bool {
    field
        .split(' ')
        .any(|w| w.contains(word) || word.contains(w))
}

/// Weighted score of `entry` for the lowercased input `words`.
///
/// Each word contributes independently for the question, answer and
/// category fields. Fields are split on single spaces.
pub fn score_entry(words: &[&str], entry: &FaqEntry, config: &FaqConfig) -> u32 {
    let question = entry.question.to_lowercase();
    let answer = entry.answer.to_lowercase();
    let category = entry.category.to_lowercase();

    words
        .iter()
        .map(|word| {
            let mut score = 0;
            if field_matches(&question, word) {
                score += config.question_weight;
            }
            if field_matches(&answer, word) {
                score += config.answer_weight;
            }
            if field_matches(&category, word) {
                score += config.category_weight;
            }
            score
        })
        .sum()
}

/// The highest scoring FAQ entry, if its score exceeds the threshold.
///
/// Ties keep the earlier entry.
pub fn find_best_faq_match<'a>(
    query: &str,
    faqs: &'a [FaqEntry],
    config: &FaqConfig,
) -> Option<&'a FaqEntry> {
    let input = query.to_lowercase();
    let words: Vec<&str> = input
        .split_whitespace()
        .filter(|w| w.chars().count() > config.min_token_len)
        .collect();

    let mut best: Option<&FaqEntry> = None;
    let mut highest = 0;
    for faq in faqs {
        let score = score_entry(&words, faq, config);
        if score > highest {
            highest = score;
            best = Some(faq);
        }
    }

    tracing::debug!(score = highest, matched = best.is_some(), "faq scoring");

    if highest > config.score_threshold {
        best
    } else {
        None
    }
}

/// Which canned answer a query falls back to when no FAQ matched.
pub fn fallback_template(query: &str) -> FaqTemplate {
    let input = query.to_lowercase();

    if input.contains("deadline") || input.contains("due date") {
        FaqTemplate::Deadlines
    } else if ["fee", "cost", "tuition"].iter().any(|k| input.contains(k)) {
        FaqTemplate::Fees
    } else if ["program", "course", "major"].iter().any(|k| input.contains(k))
    {
        FaqTemplate::Programs
    } else if input.contains("requirement") || input.contains("eligibility") {
        FaqTemplate::Requirements
    } else {
        FaqTemplate::Help
    }
}

pub fn generate_fallback_response(query: &str) -> String {
    fallback_template(query).text().to_string()
}

/// Full FAQ-path answer for `query`.
///
/// ```
/// use admitbot::{config::FaqConfig, faq};
///
/// let faqs = faq::default_faqs();
/// let reply = faq::respond("deadline", &faqs, &FaqConfig::default());
/// assert!(reply.starts_with("Early Decision: November 15th"));
/// ```
pub fn respond(query: &str, faqs: &[FaqEntry], config: &FaqConfig) -> String {
    match find_best_faq_match(query, faqs, config) {
        Some(faq) => faq_follow_up(&faq.answer, &faq.category),
        None => generate_fallback_response(query),
    }
}
