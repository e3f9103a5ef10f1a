//! Keyword-coverage emotion classifier.
//!
//! A tag's score is the number of *distinct* configured phrases found as
//! substrings of the lower-cased text; repeated occurrences count once.
//! Confidence is that count over the tag's phrase total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lexicon::Lexicon;
use super::tags::{EmotionTag, IntensityLevel};

/// Evidence for one detected emotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub emotion: EmotionTag,
    /// Distinct phrases matched.
    pub matched: usize,
    /// `matched / configured`, never above 1.0.
    pub confidence: f64,
    /// The phrases that matched, in table order.
    pub keywords: Vec<String>,
}

/// Classifier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalProfile {
    /// `None` when no tag scored above zero.
    pub dominant_emotion: Option<EmotionTag>,
    pub intensity: IntensityLevel,
    /// Detected emotions only, by descending score (ties keep table order).
    pub scores: Vec<EmotionScore>,
    /// Input length in characters.
    pub text_length: usize,
    pub analyzed_at: DateTime<Utc>,
}

impl EmotionalProfile {
    /// Profile for empty or unreadable input.
    pub fn none() -> Self {
        Self {
            dominant_emotion: None,
            intensity: IntensityLevel::Low,
            scores: Vec::new(),
            text_length: 0,
            analyzed_at: Utc::now(),
        }
    }

    /// Confidence for one tag, 0.0 if it was not detected.
    pub fn confidence(&self, emotion: EmotionTag) -> f64 {
        self.scores
            .iter()
            .find(|s| s.emotion == emotion)
            .map(|s| s.confidence)
            .unwrap_or(0.0)
    }

    pub fn is_none(&self) -> bool {
        self.dominant_emotion.is_none()
    }
}

/// Stateless classifier over a borrowed lexicon.
#[derive(Debug, Clone, Copy)]
pub struct EmotionClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> EmotionClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classify free text. Never fails: empty input yields [`EmotionalProfile::none`].
    pub fn classify(&self, text: &str) -> EmotionalProfile {
        if text.is_empty() {
            return EmotionalProfile::none();
        }

        let normalized = text.to_lowercase();
        let mut scores = Vec::new();
        let mut best: Option<(EmotionTag, usize)> = None;

        for entry in self.lexicon.emotions() {
            let keywords: Vec<String> = entry
                .phrases
                .iter()
                .filter(|phrase| normalized.contains(phrase.as_str()))
                .cloned()
                .collect();
            let matched = keywords.len();
            if matched == 0 {
                continue;
            }

            let total = entry.phrases.len().max(1);
            let confidence = (matched as f64 / total as f64).min(1.0);

            // Strictly greater: earlier table entries win ties.
            if best.map_or(true, |(_, count)| matched > count) {
                best = Some((entry.emotion, matched));
            }

            scores.push(EmotionScore {
                emotion: entry.emotion,
                matched,
                confidence,
                keywords,
            });
        }

        // Stable sort keeps table order among equal scores.
        scores.sort_by(|a, b| b.matched.cmp(&a.matched));

        let intensity = self.detect_intensity(&normalized);
        let profile = EmotionalProfile {
            dominant_emotion: best.map(|(emotion, _)| emotion),
            intensity,
            scores,
            text_length: text.chars().count(),
            analyzed_at: Utc::now(),
        };

        debug!(
            dominant = ?profile.dominant_emotion,
            intensity = %profile.intensity,
            detected = profile.scores.len(),
            "classified text"
        );
        profile
    }

    /// Classify raw bytes; invalid UTF-8 is treated like empty input.
    pub fn classify_utf8(&self, bytes: &[u8]) -> EmotionalProfile {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.classify(text),
            Err(_) => EmotionalProfile::none(),
        }
    }

    /// First intensity level (in table order) with a matching marker,
    /// `Medium` when none match.
    pub fn detect_intensity(&self, normalized: &str) -> IntensityLevel {
        self.lexicon
            .intensities()
            .iter()
            .find(|entry| {
                entry
                    .phrases
                    .iter()
                    .any(|phrase| normalized.contains(phrase.as_str()))
            })
            .map(|entry| entry.intensity)
            .unwrap_or_default()
    }
}
