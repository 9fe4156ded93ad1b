//! admitbot - a college admissions assistant answering prospective-student
//! questions from a small, static knowledge catalog.
//!
//! Queries are answered by one of three strategies: a weighted keyword
//! match over a fixed FAQ set, lexical retrieval over the knowledge
//! catalog followed by templated synthesis with source attribution, or a
//! simulated text-generation service that dispatches on the best
//! matching entry.
//!
//! # Quick start
//!
//! ```
//! use admitbot::{Assistant, AssistantConfig, LatencyConfig, Strategy};
//!
//! let mut config = AssistantConfig::default();
//! config.latency = LatencyConfig::none();
//! let assistant = Assistant::new(config).unwrap();
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let reply = rt
//!     .block_on(assistant.reply(
//!         "What are the admission requirements for undergraduate programs?",
//!         Strategy::KnowledgeStoreRag,
//!     ))
//!     .unwrap();
//!
//! assert!(reply.answer.contains("3.0"));
//! assert_eq!(reply.sources[0], "Undergraduate Admission Requirements");
//! assert_eq!(reply.confidence, Some(0.9));
//! ```

pub mod attribution;
pub mod chat;
pub mod config;
pub mod error;
pub mod faq;
pub mod generation;
pub mod knowledge;
pub mod matcher;
pub mod mcp;
pub mod rag;
pub mod strategy;
pub mod synthesis;
pub mod templates;

pub use attribution::SynthesizedAnswer;
pub use config::{AssistantConfig, LatencyConfig};
pub use error::{Error, Result};
pub use generation::{GenerationService, TextGenerator};
pub use knowledge::{Category, KnowledgeEntry, KnowledgeStore};
pub use rag::RagService;
pub use strategy::{Assistant, Reply, Strategy};
