//! Domain intent detection over raw query text.
//!
//! Intents are matched by substring containment against the lower-cased,
//! unnormalized query so that multi-word and punctuated triggers
//! ("no pulse", "can't breathe") are seen before tokenization discards them.

use serde::Serialize;

/// A fixed domain category used to boost domain-relevant entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Fire,
    Cpr,
    Bleeding,
    Choking,
    Stroke,
    Asthma,
    Respiratory,
    ChestPain,
    Safety,
}

impl Intent {
    /// All intents, in detection order.
    pub(crate) const ALL: [Self; 9] = [
        Self::Fire,
        Self::Cpr,
        Self::Bleeding,
        Self::Choking,
        Self::Stroke,
        Self::Asthma,
        Self::Respiratory,
        Self::ChestPain,
        Self::Safety,
    ];

    /// Trigger substrings for this intent, matched against lower-cased text.
    pub(crate) fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::Fire => &["fire", "smoke", "burn", "burning", "extinguisher"],
            Self::Cpr => &[
                "cpr",
                "cardiac",
                "no pulse",
                "not breathing",
                "cant breathe",
                "can't breathe",
                "cannot breathe",
                "stopped breathing",
                "unresponsive",
                "aed",
                "defibrillator",
                "rescue breaths",
            ],
            Self::Bleeding => &["bleeding", "hemorrhage", "tourniquet", "blood"],
            Self::Choking => &["choke", "choking", "heimlich", "abdominal thrust"],
            Self::Stroke => &["stroke", "fast", "face droop"],
            Self::Asthma => &["asthma", "inhaler", "wheezing", "shortness of breath"],
            Self::Respiratory => &[
                "cold",
                "cough",
                "flu",
                "fever",
                "sore throat",
                "runny nose",
                "congestion",
                "breath",
                "breathing",
            ],
            Self::ChestPain => &["chest pain", "heart pain", "tightness chest", "pressure chest"],
            Self::Safety => &[
                "follow",
                "following",
                "stalk",
                "stalking",
                "unsafe",
                "panic",
                "anxious",
                "threat",
                "self defense",
                "self-defence",
                "self-defense",
                "harass",
                "harassment",
                "fear",
                "afraid",
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Cpr => "cpr",
            Self::Bleeding => "bleeding",
            Self::Choking => "choking",
            Self::Stroke => "stroke",
            Self::Asthma => "asthma",
            Self::Respiratory => "respiratory",
            Self::ChestPain => "chestpain",
            Self::Safety => "safety",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// High-priority phrases, in precedence order.
///
/// A phrase found in the query adds its intent during detection, and the
/// first phrase found drives the ranking override in the engine.
pub(crate) const PHRASE_INTENTS: &[(&str, Intent)] = &[
    ("not breathing", Intent::Cpr),
    ("can't breathe", Intent::Respiratory),
    ("cant breathe", Intent::Respiratory),
    ("cannot breathe", Intent::Respiratory),
    ("stopped breathing", Intent::Cpr),
    ("heart pain", Intent::ChestPain),
    ("chest pain", Intent::ChestPain),
    ("someone is following me", Intent::Safety),
    ("being followed", Intent::Safety),
    ("feel unsafe", Intent::Safety),
    ("panic attack", Intent::Safety),
    ("self defense", Intent::Safety),
];

/// Detect intents in a raw query.
///
/// Keyword sets are checked first in declaration order, then the phrase
/// list. A query can carry several intents at once; duplicates are
/// suppressed and first-match order is kept.
pub fn detect_intents(raw_query: &str) -> Vec<Intent> {
    let q = raw_query.to_lowercase();
    let mut hits = Vec::new();
    for intent in Intent::ALL {
        if intent.triggers().iter().any(|k| q.contains(k)) {
            hits.push(intent);
        }
    }
    for &(phrase, intent) in PHRASE_INTENTS {
        if q.contains(phrase) && !hits.contains(&intent) {
            hits.push(intent);
        }
    }
    hits
}

/// Intent boost for one entry: +1.2 per detected intent whose triggers
/// appear in the entry text, capped at 3.0.
pub(crate) fn intent_bonus(intents: &[Intent], question: &str, answer: &str) -> f64 {
    if intents.is_empty() {
        return 0.0;
    }
    let text = format!("{} {}", question, answer).to_lowercase();
    let mut bonus = 0.0_f64;
    for intent in intents {
        if intent.triggers().iter().any(|k| text.contains(k)) {
            bonus += 1.2;
        }
    }
    bonus.min(3.0)
}
