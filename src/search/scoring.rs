//! Composite relevance scoring for FAQ entries.
//!
//! Five independent signals per entry, combined with fixed weights:
//!
//! | Signal    | Weight | Meaning                                           |
//! |-----------|--------|---------------------------------------------------|
//! | `jaccard` | 0.22   | token-set overlap with `question + answer`        |
//! | `contain` | 0.18   | share of query tokens found in the entry          |
//! | `fuzzy_q` | 0.16   | character-level similarity to the question only   |
//! | `sub_q`   | 0.28   | query is a substring of the question (1.2 or 0)   |
//! | `sub_a`   | 0.06   | query is a substring of the answer (0.8 or 0)     |
//! | `intent`  | 0.10   | domain-intent boost, capped at 3.0                |
//!
//! The weights favor exact question-substring matches over fuzzy or token
//! overlap. The composite is deliberately not normalized: stacked boosts can
//! push it past 1.0, and ranking only depends on relative order.

use ahash::AHashSet;
use serde::Serialize;

use super::intent::{Intent, intent_bonus};
use super::tokenize::token_set;
use crate::corpus::FaqEntry;

/// Raw per-signal values, reported in the `debug` breakdown of a result.
/// Observability only: nothing downstream ranks on these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalBreakdown {
    pub jaccard: f64,
    pub contain: f64,
    pub fuzzy_q: f64,
    pub sub_q: f64,
    pub sub_a: f64,
    pub intent: f64,
}

/// Character-level similarity ratio in [0, 1], case-insensitive.
///
/// Normalized Indel similarity: symmetric, 1.0 for identical strings, near 0
/// for disjoint ones.
pub(crate) fn fuzzy(a: &str, b: &str) -> f64 {
    rapidfuzz::fuzz::ratio(a.to_lowercase().chars(), b.to_lowercase().chars())
}

/// Score one entry against a query.
///
/// Token signals run over the entry's `question + " " + answer` text; the
/// fuzzy signal compares the raw query to the question text only. Pure and
/// deterministic, independent per entry.
pub(crate) fn score_entry(
    query_tokens: &AHashSet<String>,
    raw_query: &str,
    entry: &FaqEntry,
    intents: &[Intent],
) -> (f64, SignalBreakdown) {
    let text = format!("{} {}", entry.question, entry.answer);
    let entry_tokens = token_set(&text);

    let inter = query_tokens.intersection(&entry_tokens).count() as f64;
    let union = query_tokens.union(&entry_tokens).count().max(1) as f64;
    let jaccard = inter / union;
    let contain = inter / query_tokens.len().max(1) as f64;

    let fuzzy_q = fuzzy(raw_query, &entry.question);

    let raw = raw_query.trim().to_lowercase();
    let sub_q = if !raw.is_empty() && entry.question.to_lowercase().contains(&raw) {
        1.2
    } else {
        0.0
    };
    let sub_a = if !raw.is_empty() && entry.answer.to_lowercase().contains(&raw) {
        0.8
    } else {
        0.0
    };

    let intent = intent_bonus(intents, &entry.question, &entry.answer);

    let composite = 0.22 * jaccard
        + 0.18 * contain
        + 0.16 * fuzzy_q
        + 0.28 * sub_q
        + 0.06 * sub_a
        + 0.10 * intent;

    let breakdown = SignalBreakdown {
        jaccard,
        contain,
        fuzzy_q,
        sub_q,
        sub_a,
        intent,
    };
    (composite, breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn score(query: &str, entry: &FaqEntry) -> (f64, SignalBreakdown) {
        let tokens = token_set(query);
        let intents = super::super::intent::detect_intents(query);
        score_entry(&tokens, query, entry, &intents)
    }

    #[rstest]
    #[case("stroke", "stroke")]
    #[case("Chest Pain", "chest pain")]
    fn fuzzy_is_one_for_identical_strings(#[case] a: &str, #[case] b: &str) {
        check!((fuzzy(a, b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_is_symmetric() {
        let ab = fuzzy("severe bleeding", "how do I stop bleeding");
        let ba = fuzzy("how do I stop bleeding", "severe bleeding");
        check!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_is_near_zero_for_disjoint_strings() {
        check!(fuzzy("aaaa", "zzzz") == 0.0);
    }

    #[test]
    fn substring_of_question_sets_sub_q() {
        let entry = FaqEntry::new("How do I treat severe bleeding?", "Apply pressure.");
        let (_, breakdown) = score("severe bleeding", &entry);
        check!(breakdown.sub_q == 1.2);
        check!(breakdown.sub_a == 0.0);
    }

    #[test]
    fn substring_of_answer_sets_sub_a() {
        let entry = FaqEntry::new("What helps a bleeding wound?", "Use a tourniquet above the wound.");
        let (_, breakdown) = score("tourniquet", &entry);
        check!(breakdown.sub_a == 0.8);
        check!(breakdown.sub_q == 0.0);
    }

    #[test]
    fn composite_equals_weighted_sum_of_breakdown() {
        let entry = FaqEntry::new(
            "What should I do if someone is not breathing?",
            "Call 911 and start CPR.",
        );
        let (composite, b) = score("my friend is not breathing", &entry);
        let expected = 0.22 * b.jaccard
            + 0.18 * b.contain
            + 0.16 * b.fuzzy_q
            + 0.28 * b.sub_q
            + 0.06 * b.sub_a
            + 0.10 * b.intent;
        check!((composite - expected).abs() < 1e-12);
    }

    #[test]
    fn exact_question_dominates_disjoint_entry() {
        let query = "How do I recognize a stroke?";
        let exact = FaqEntry::new("How do I recognize a stroke?", "Think F.A.S.T.");
        let disjoint = FaqEntry::new("Where is the nearest pharmacy?", "Check the map.");
        let (exact_score, _) = score(query, &exact);
        let (disjoint_score, _) = score(query, &disjoint);
        check!(exact_score > disjoint_score);
    }

    #[test]
    fn signals_stay_in_expected_ranges() {
        let entry = FaqEntry::new(
            "What should I do if someone is not breathing?",
            "Call 911, start CPR, send someone for an AED.",
        );
        let (_, b) = score("not breathing no pulse cardiac arrest", &entry);
        check!((0.0..=1.0).contains(&b.jaccard));
        check!((0.0..=1.0).contains(&b.contain));
        check!((0.0..=1.0).contains(&b.fuzzy_q));
        check!(b.sub_q == 0.0 || b.sub_q == 1.2);
        check!(b.sub_a == 0.0 || b.sub_a == 0.8);
        check!((0.0..=3.0).contains(&b.intent));
    }
}
