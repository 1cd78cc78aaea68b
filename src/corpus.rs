//! FAQ corpus loading and the process-wide shared handle.
//!
//! The corpus is an ordered set of question/answer entries loaded from a JSON
//! array exactly once and treated as immutable afterwards. A missing or
//! unreadable source degrades to an empty corpus instead of an error so the
//! engine stays responsive without its data file.

use crate::error::CorpusError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable overriding the corpus file location.
pub const DATA_PATH_ENV: &str = "TRIAGE_FAQ_DATA";

/// Default corpus location, relative to the working directory.
const DEFAULT_DATA_PATH: &str = "data/faq.json";

/// A single question/answer entry.
///
/// Fields beyond `question` and `answer` are captured in `extra` and passed
/// through to search results untouched, so corpus files can carry metadata
/// (category, source, ...) the engine does not consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    /// Opaque metadata carried alongside the entry.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FaqEntry {
    /// Convenience constructor for entries without extra metadata.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            extra: Map::new(),
        }
    }
}

/// An ordered, immutable collection of FAQ entries.
///
/// Entry identity is positional: there is no required unique key, and entries
/// are never modified after load.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<FaqEntry>,
}

impl Corpus {
    pub const fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    /// Load a corpus from a JSON array of entries.
    ///
    /// Never fails: a missing file logs at info and an unreadable or
    /// malformed one logs at warn, both yielding an empty corpus.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(corpus) => {
                tracing::info!(
                    "Loaded {} FAQ entries from {}",
                    corpus.len(),
                    path.display()
                );
                corpus
            }
            Err(e @ CorpusError::NotFound { .. }) => {
                tracing::info!("{}, starting with an empty corpus", e);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{}, starting with an empty corpus", e);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, CorpusError> {
        if !path.exists() {
            return Err(CorpusError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|e| CorpusError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        let entries: Vec<FaqEntry> =
            serde_json::from_str(&raw).map_err(|e| CorpusError::Parse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;
        Ok(Self::new(entries))
    }

    /// Resolve the corpus path: `$TRIAGE_FAQ_DATA` if set, else `data/faq.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(DATA_PATH_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from)
    }

    /// Process-wide corpus handle, loaded once from the default path.
    ///
    /// Concurrent first calls are safe: the `OnceLock` guarantees a single
    /// initialization, and every caller observes the same immutable corpus.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<Corpus> = OnceLock::new();
        SHARED.get_or_init(|| Self::load(&Self::default_path()))
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn missing_file_yields_empty_corpus() {
        let corpus = Corpus::load(Path::new("/nonexistent/faq.json"));
        check!(corpus.is_empty());
    }

    #[test]
    fn extra_fields_round_trip() {
        let raw = r#"[{"question": "Q", "answer": "A", "category": "fire", "priority": 2}]"#;
        let entries: Vec<FaqEntry> = serde_json::from_str(raw).unwrap();
        check!(entries.len() == 1);
        check!(entries[0].extra["category"] == serde_json::json!("fire"));
        check!(entries[0].extra["priority"] == serde_json::json!(2));

        let back = serde_json::to_value(&entries[0]).unwrap();
        check!(back["category"] == serde_json::json!("fire"));
    }

    #[test]
    fn missing_question_and_answer_default_to_empty() {
        let entries: Vec<FaqEntry> = serde_json::from_str(r#"[{"category": "misc"}]"#).unwrap();
        check!(entries[0].question.is_empty());
        check!(entries[0].answer.is_empty());
    }
}
