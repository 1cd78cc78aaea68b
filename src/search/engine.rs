//! Ranking engine: scores the corpus, applies the phrase override, truncates.

use ahash::AHashSet;
use serde::Serialize;

use super::intent::{PHRASE_INTENTS, detect_intents};
use super::scoring::{SignalBreakdown, score_entry};
use super::tokenize::normalize;
use crate::corpus::{Corpus, FaqEntry};

/// Default number of results returned by [`FaqSearch::search`].
pub const DEFAULT_LIMIT: usize = 5;

/// Upper bound on the result count; larger requests are clamped.
pub const MAX_LIMIT: usize = 10;

/// A corpus entry with its relevance score attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredFaq {
    #[serde(flatten)]
    pub entry: FaqEntry,
    /// Composite relevance, rounded to 4 decimal places.
    pub score: f64,
    /// Raw per-signal values. Absent on the empty-query default path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<SignalBreakdown>,
}

/// Relevance-ranking engine over a read-only FAQ corpus.
///
/// Holds no state beyond the borrowed corpus handle; every search is a pure
/// function over immutable data.
pub struct FaqSearch<'a> {
    corpus: &'a Corpus,
}

impl<'a> FaqSearch<'a> {
    pub const fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }

    /// Rank the corpus against `query` and return at most `limit` results.
    ///
    /// `limit` is clamped to `[1, MAX_LIMIT]`. Never fails: an empty corpus
    /// yields an empty vec, and a query that normalizes to no tokens (empty,
    /// whitespace, or all stop words) bypasses scoring and returns the head
    /// of the corpus in its original order with `score == 0.0`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredFaq> {
        let limit = limit.clamp(1, MAX_LIMIT);
        let raw_query = query.trim();
        let entries = self.corpus.entries();
        if entries.is_empty() {
            return Vec::new();
        }

        let query_tokens: AHashSet<String> = normalize(raw_query).into_iter().collect();
        if query_tokens.is_empty() {
            return entries
                .iter()
                .take(limit)
                .map(|entry| ScoredFaq {
                    entry: entry.clone(),
                    score: 0.0,
                    debug: None,
                })
                .collect();
        }

        let intents = detect_intents(raw_query);
        let mut scored: Vec<(f64, ScoredFaq)> = entries
            .iter()
            .map(|entry| {
                let (composite, breakdown) = score_entry(&query_tokens, raw_query, entry, &intents);
                let result = ScoredFaq {
                    entry: entry.clone(),
                    score: round4(composite),
                    debug: Some(breakdown),
                };
                (composite, result)
            })
            .collect();

        // Stable sort on the unrounded composite: ties keep corpus order.
        scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        let mut ranked: Vec<ScoredFaq> = scored.into_iter().map(|(_, item)| item).collect();

        promote_phrase_match(&mut ranked, raw_query);

        tracing::debug!(
            query = raw_query,
            intents = ?intents,
            top_score = ranked.first().map(|r| r.score),
            "ranked {} FAQ entries",
            ranked.len()
        );

        ranked.truncate(limit);
        ranked
    }
}

/// Promote the entry answering a recognized high-priority phrase to rank 1.
///
/// Certain emergency phrasings ("someone is following me", "not breathing")
/// must surface their canonical entry even when token overlap alone would not
/// rank it first. Only the first phrase present in the query is tried; if no
/// ranked entry's question contains it, the ranking is left untouched and
/// later phrases are not considered. Known limitation: a query matching an
/// earlier phrase can mask a later phrase that would have promoted something.
fn promote_phrase_match(ranked: &mut Vec<ScoredFaq>, raw_query: &str) {
    let q = raw_query.to_lowercase();
    for (phrase, _) in PHRASE_INTENTS {
        if !q.contains(phrase) {
            continue;
        }
        if let Some(pos) = ranked
            .iter()
            .position(|r| r.entry.question.to_lowercase().contains(phrase))
        {
            let promoted = ranked.remove(pos);
            ranked.insert(0, promoted);
        }
        break;
    }
}

fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}
