//! FAQ relevance ranking.
//!
//! This module implements the multi-signal ranking pipeline: tokenization and
//! stop-word removal, domain-intent detection, composite scoring, and the
//! phrase-override ranking step.

// Module declarations
pub(crate) mod engine;
pub(crate) mod intent;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use engine::{DEFAULT_LIMIT, FaqSearch, MAX_LIMIT, ScoredFaq};
pub use intent::{Intent, detect_intents};
pub use scoring::SignalBreakdown;
