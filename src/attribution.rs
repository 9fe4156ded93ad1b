//! Confidence scoring and source attribution.

use serde::{Deserialize, Serialize};

use crate::{
    config::ConfidenceConfig,
    knowledge::KnowledgeEntry,
    templates::{LOW_CONFIDENCE_NOTICE, SOURCES_PREFIX},
};

/// Answer of one query-response cycle, before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizedAnswer {
    pub answer: String,
    /// Titles of the entries the answer was built from, best first.
    pub sources: Vec<String>,
    /// Heuristic support for the answer, in `[0, 1]`.
    pub confidence: f32,
}

impl ConfidenceConfig {
    /// Confidence for an answer built from `documents` top entries.
    ///
    /// ```
    /// use admitbot::config::ConfidenceConfig;
    ///
    /// let c = ConfidenceConfig::default();
    /// assert_eq!(c.score(0), 0.3);
    /// assert_eq!(c.score(3), 0.9);
    /// ```
    pub fn score(&self, documents: usize) -> f32 {
        if documents == 0 {
            return self.fallback;
        }
        (self.base + self.per_document * documents as f32).min(self.cap)
    }

    pub fn needs_disclaimer(&self, confidence: f32) -> bool {
        confidence < self.disclaimer_below
    }
}

/// Attach sources and confidence to synthesized text.
pub fn attribute(
    answer: String,
    documents: &[&KnowledgeEntry],
    config: &ConfidenceConfig,
) -> SynthesizedAnswer {
    SynthesizedAnswer {
        answer,
        sources: documents.iter().map(|d| d.title.clone()).collect(),
        confidence: config.score(documents.len()),
    }
}

impl SynthesizedAnswer {
    /// Final user-facing text: the answer, then a sources trailer when
    /// any document was used, then the low-confidence notice if needed.
    pub fn render(&self, config: &ConfidenceConfig) -> String {
        let mut text = self.answer.clone();

        if !self.sources.is_empty() {
            text.push_str(&format!(
                "\n\n*{SOURCES_PREFIX}{}*",
                self.sources.join(", ")
            ));
        }

        if config.needs_disclaimer(self.confidence) {
            text.push_str(&format!("\n\n*{LOW_CONFIDENCE_NOTICE}*"));
        }

        text
    }
}
