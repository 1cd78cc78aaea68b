//! FAQ relevance-ranking engine for an emergency-triage assistant.
//!
//! Ranks a small, immutable question/answer corpus against free-text queries
//! using a five-signal composite score (token overlap, fuzzy question
//! similarity, substring boosts, domain-intent boosts) plus a phrase-based
//! promotion rule that deterministically surfaces canonical entries for
//! high-priority emergency phrasings. No learned model, no external services.

pub mod cli;
pub mod corpus;
pub mod error;
pub mod search;
pub mod tracing;

pub use corpus::{Corpus, FaqEntry};
pub use search::{DEFAULT_LIMIT, FaqSearch, Intent, MAX_LIMIT, ScoredFaq, SignalBreakdown};
