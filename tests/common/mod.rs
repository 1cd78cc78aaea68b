//! Shared fixtures and utilities for FAQ search integration tests.
//!
//! Each test loads its corpus from a file written into a private temp
//! directory, so corpus contents are fully controlled and nothing depends on
//! the shipped `data/faq.json`.

use rstest::fixture;
use std::path::PathBuf;
use tempfile::TempDir;
use triage_faq::Corpus;

/// A corpus JSON file in its own temp directory, cleaned up on drop.
pub struct CorpusFile {
    _temp: TempDir,
    pub path: PathBuf,
}

/// Write raw JSON to a fresh temp file usable as a corpus source.
pub fn write_corpus(json: &str) -> CorpusFile {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("faq.json");
    std::fs::write(&path, json).expect("write corpus file");
    CorpusFile { _temp: temp, path }
}

/// A realistic nine-entry emergency FAQ corpus covering the intent domains
/// and the high-priority override phrases.
pub const SAMPLE_CORPUS: &str = r#"[
  {
    "question": "What should I do if someone is not breathing?",
    "answer": "Call 911, start CPR, and send someone for an AED.",
    "category": "cpr"
  },
  {
    "question": "How do I perform CPR on an adult?",
    "answer": "Push hard and fast in the center of the chest, 100-120 compressions per minute, with rescue breaths if trained.",
    "category": "cpr"
  },
  {
    "question": "What should I do if I am having chest pain?",
    "answer": "Call 911, stop all activity, sit down, and chew one adult aspirin unless allergic.",
    "category": "chestpain"
  },
  {
    "question": "How do I stop severe bleeding?",
    "answer": "Apply firm direct pressure; use a tourniquet above a limb wound that will not stop.",
    "category": "bleeding"
  },
  {
    "question": "How do I help someone who is choking?",
    "answer": "Give 5 back blows, then 5 abdominal thrusts (Heimlich maneuver), and repeat.",
    "category": "choking"
  },
  {
    "question": "What should I do if there is a fire in my home?",
    "answer": "Get out, stay out, call 911. Crawl low under smoke and never use an elevator.",
    "category": "fire"
  },
  {
    "question": "How do I recognize the signs of a stroke?",
    "answer": "Think FAST: face drooping, arm weakness, speech difficulty, time to call 911.",
    "category": "stroke"
  },
  {
    "question": "What should I do if I think someone is following me?",
    "answer": "Stay in public, call 911 or a trusted contact, and head to a busy safe place.",
    "category": "safety"
  },
  {
    "question": "How do I handle a panic attack?",
    "answer": "Slow your breathing, ground yourself, and sit somewhere safe until it passes.",
    "category": "safety"
  }
]"#;

/// Number of entries in [`SAMPLE_CORPUS`].
pub const SAMPLE_CORPUS_LEN: usize = 9;

#[fixture]
pub fn sample_corpus() -> Corpus {
    let file = write_corpus(SAMPLE_CORPUS);
    Corpus::load(&file.path)
}
