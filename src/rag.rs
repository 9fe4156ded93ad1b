//! Retrieval and synthesis over the knowledge store.

use std::{sync::Arc, time::Duration};

use crate::{
    attribution::{SynthesizedAnswer, attribute},
    config::{ConfidenceConfig, MatcherConfig},
    knowledge::KnowledgeStore,
    matcher,
    synthesis,
};

/// Knowledge-store question answering.
///
/// Constructed explicitly and shared by handle; there is no global
/// instance.
#[derive(Debug, Clone)]
pub struct RagService {
    store: Arc<KnowledgeStore>,
    matcher: MatcherConfig,
    confidence: ConfidenceConfig,
    delay: Duration,
}

impl RagService {
    pub fn new(
        store: Arc<KnowledgeStore>,
        matcher: MatcherConfig,
        confidence: ConfidenceConfig,
        delay: Duration,
    ) -> Self {
        tracing::info!(entries = store.len(), "knowledge service ready");
        Self {
            store,
            matcher,
            confidence,
            delay,
        }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn matcher_config(&self) -> &MatcherConfig {
        &self.matcher
    }

    pub fn confidence_config(&self) -> &ConfidenceConfig {
        &self.confidence
    }

    /// Retrieve, synthesize and attribute without any delay.
    ///
    /// ```
    /// use std::{sync::Arc, time::Duration};
    ///
    /// use admitbot::{KnowledgeStore, RagService};
    ///
    /// let rag = RagService::new(
    ///     Arc::new(KnowledgeStore::builtin()),
    ///     Default::default(),
    ///     Default::default(),
    ///     Duration::ZERO,
    /// );
    /// let answer = rag.answer("asdkfj qwerty");
    /// assert!(answer.sources.is_empty());
    /// assert_eq!(answer.confidence, 0.3);
    /// ```
    pub fn answer(&self, query: &str) -> SynthesizedAnswer {
        let top = matcher::retrieve(query, &self.store, &self.matcher);
        let text = synthesis::synthesize(query, &top);
        attribute(text, &top, &self.confidence)
    }

    /// [`RagService::answer`] after the configured delay.
    pub async fn generate_response(&self, query: &str) -> SynthesizedAnswer {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.answer(query)
    }

    /// Rendered answer text, with sources and any low-confidence notice.
    pub async fn respond(&self, query: &str) -> String {
        self.generate_response(query)
            .await
            .render(&self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{LOW_CONFIDENCE_NOTICE, RagTemplate};

    fn service() -> RagService {
        RagService::new(
            Arc::new(KnowledgeStore::builtin()),
            MatcherConfig::default(),
            ConfidenceConfig::default(),
            Duration::ZERO,
        )
    }

    #[test]
    fn unmatched_query_gets_default_answer() {
        let answer = service().answer("asdkfj qwerty");
        assert_eq!(answer.answer, RagTemplate::Default.text());
        assert!(answer.sources.is_empty());
        assert_eq!(answer.confidence, 0.3);
    }

    #[test]
    fn undergraduate_requirements_query() {
        let answer = service()
            .answer("What are the admission requirements for undergraduate programs?");
        assert_eq!(answer.answer, RagTemplate::UndergraduateRequirements.text());
        assert_eq!(answer.sources.len(), 3);
        assert_eq!(answer.sources[0], "Undergraduate Admission Requirements");
        assert_eq!(answer.confidence, 0.9);
    }

    #[tokio::test]
    async fn rendered_answer_lists_sources() {
        let text = service()
            .respond("What are the admission requirements for undergraduate programs?")
            .await;
        assert!(text.contains("3.0"));
        assert!(text.contains("SAT"));
        assert!(text.contains("*Sources: Undergraduate Admission Requirements, "));
        assert!(!text.contains(LOW_CONFIDENCE_NOTICE));
    }

    #[tokio::test]
    async fn rendered_default_has_notice_but_no_sources() {
        let text = service().respond("asdkfj qwerty").await;
        assert!(text.starts_with(RagTemplate::Default.text()));
        assert!(!text.contains("*Sources:"));
        assert!(text.ends_with(&format!("*{LOW_CONFIDENCE_NOTICE}*")));
    }

    #[tokio::test]
    async fn single_match_gets_notice() {
        let mut matcher = MatcherConfig::default();
        matcher.top_n = 1;
        let rag = RagService::new(
            Arc::new(KnowledgeStore::builtin()),
            matcher,
            ConfidenceConfig::default(),
            Duration::ZERO,
        );
        let answer = rag.generate_response("Tell me about campus housing").await;
        assert_eq!(answer.sources, vec!["Campus Life and Support Services"]);
        assert!((answer.confidence - 0.65).abs() < 1e-6);
        assert!(
            answer
                .render(rag.confidence_config())
                .contains(LOW_CONFIDENCE_NOTICE)
        );
    }

    #[test]
    fn answers_are_repeatable() {
        let rag = service();
        let query = "graduate tuition and scholarships";
        assert_eq!(rag.answer(query), rag.answer(query));
    }
}
