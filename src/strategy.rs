//! Answer strategies and the assistant that routes queries to them.

use std::{fmt, sync::Arc};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::AssistantConfig,
    error::Result,
    faq::{self, FaqEntry},
    generation::{self, GenerationService, TextGenerator},
    knowledge::KnowledgeStore,
    matcher,
    rag::RagService,
    templates::APOLOGY,
};

/// Which answer source handles a query.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
pub enum Strategy {
    /// Weighted keyword match against the FAQ set.
    #[serde(rename = "faq")]
    #[value(name = "faq")]
    FaqKeyword,
    /// Rank the knowledge store and synthesize a templated answer.
    #[default]
    #[serde(rename = "rag")]
    #[value(name = "rag")]
    KnowledgeStoreRag,
    /// Ask the generation service, using the best entry as context.
    #[serde(rename = "context")]
    #[value(name = "context")]
    ContextDispatch,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::FaqKeyword => "faq",
            Strategy::KnowledgeStoreRag => "rag",
            Strategy::ContextDispatch => "context",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished answer and what it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub strategy: Strategy,
    /// User-facing text, already carrying any sources trailer.
    pub answer: String,
    pub sources: Vec<String>,
    /// Only the knowledge-store path scores its answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl Reply {
    /// The reply substituted for a failed strategy.
    pub fn apology(strategy: Strategy) -> Self {
        Self {
            strategy,
            answer: APOLOGY.to_string(),
            sources: Vec::new(),
            confidence: None,
        }
    }
}

/// Routes queries to a [`Strategy`] and hides their failures.
///
/// Generic over the generation collaborator; see
/// [`Assistant::with_generator`].
#[derive(Debug, Clone)]
pub struct Assistant<G = GenerationService> {
    config: AssistantConfig,
    rag: RagService,
    faqs: Vec<FaqEntry>,
    generator: G,
}

impl Assistant {
    /// Build an assistant from configuration, loading the configured
    /// catalog or falling back to the built-in entries.
    pub fn new(config: AssistantConfig) -> Result<Self> {
        let store = match &config.catalog {
            Some(path) => KnowledgeStore::load(path)?,
            None => KnowledgeStore::builtin(),
        };
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: AssistantConfig, store: KnowledgeStore) -> Self {
        let generator = GenerationService::new(
            config.generation.clone(),
            config.latency.generation(),
        );
        Self::build(config, store, generator)
    }
}

impl<G: TextGenerator> Assistant<G> {
    fn build(
        config: AssistantConfig,
        store: KnowledgeStore,
        generator: G,
    ) -> Self {
        let rag = RagService::new(
            Arc::new(store),
            config.matcher,
            config.confidence,
            config.latency.rag(),
        );
        Self {
            config,
            rag,
            faqs: faq::default_faqs(),
            generator,
        }
    }

    /// Replace the generation collaborator.
    pub fn with_generator<H: TextGenerator>(self, generator: H) -> Assistant<H> {
        Assistant {
            config: self.config,
            rag: self.rag,
            faqs: self.faqs,
            generator,
        }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn store(&self) -> &KnowledgeStore {
        self.rag.store()
    }

    pub fn rag(&self) -> &RagService {
        &self.rag
    }

    pub fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Answer `query` with `strategy`, propagating any failure.
    pub async fn reply(&self, query: &str, strategy: Strategy) -> Result<Reply> {
        tracing::debug!(%strategy, query, "answering");

        match strategy {
            Strategy::FaqKeyword => {
                let delay = self.config.latency.reply();
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(Reply {
                    strategy,
                    answer: faq::respond(query, &self.faqs, &self.config.faq),
                    sources: Vec::new(),
                    confidence: None,
                })
            }
            Strategy::KnowledgeStoreRag => {
                let answered = self.rag.generate_response(query).await;
                Ok(Reply {
                    strategy,
                    answer: answered.render(&self.config.confidence),
                    sources: answered.sources,
                    confidence: Some(answered.confidence),
                })
            }
            Strategy::ContextDispatch => {
                let best = matcher::retrieve(
                    query,
                    self.rag.store(),
                    self.rag.matcher_config(),
                )
                .into_iter()
                .next();
                let context = best.map(|entry| {
                    format!("{} ({})", entry.title, entry.category)
                        .to_lowercase()
                });
                let answer = self.generate(query, context.as_deref()).await?;
                Ok(Reply {
                    strategy,
                    answer,
                    sources: best.map(|e| e.title.clone()).into_iter().collect(),
                    confidence: None,
                })
            }
        }
    }

    /// Ask the generation collaborator directly with an explicit context.
    pub async fn generate(
        &self,
        input: &str,
        context: Option<&str>,
    ) -> Result<String> {
        generation::generate_text(
            &self.generator,
            input,
            context,
            self.config.generation.parameters,
        )
        .await
    }

    /// Answer `query`, substituting a fixed apology for any failure.
    ///
    /// ```
    /// use admitbot::{Assistant, AssistantConfig, LatencyConfig, Strategy};
    ///
    /// let mut config = AssistantConfig::default();
    /// config.latency = LatencyConfig::none();
    /// let assistant = Assistant::new(config).unwrap();
    ///
    /// let rt = tokio::runtime::Runtime::new().unwrap();
    /// let text = rt.block_on(assistant.respond("deadline", Strategy::FaqKeyword));
    /// assert!(text.starts_with("Early Decision: November 15th"));
    /// ```
    pub async fn respond(&self, query: &str, strategy: Strategy) -> String {
        match self.reply(query, strategy).await {
            Ok(reply) => reply.answer,
            Err(e) => {
                tracing::error!(%strategy, error = %e, "answer failed");
                Reply::apology(strategy).answer
            }
        }
    }
}
