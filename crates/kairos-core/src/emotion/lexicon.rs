//! Keyword tables driving the classifier.
//!
//! Table order is significant: emotions are scanned in order (earlier wins
//! ties) and intensity markers are scanned low → medium → high, first match
//! wins.

use serde::{Deserialize, Serialize};

use super::tags::{EmotionTag, IntensityLevel};

const EMOTION_KEYWORDS: &[(EmotionTag, &[&str])] = &[
    (
        EmotionTag::Anxiety,
        &["ansioso", "preocupado", "nervoso", "tenso", "estressado", "inquieto", "apreensivo"],
    ),
    (
        EmotionTag::Sadness,
        &["triste", "melancólico", "deprimido", "desanimado", "abatido", "solitário", "vazio"],
    ),
    (
        EmotionTag::Anger,
        &["irritado", "furioso", "bravo", "zangado", "indignado", "revoltado", "frustrado"],
    ),
    (
        EmotionTag::Joy,
        &["feliz", "alegre", "contente", "animado", "eufórico", "radiante", "satisfeito"],
    ),
    (
        EmotionTag::Fear,
        &["medo", "assustado", "aterrorizado", "amedrontado", "receoso", "temeroso", "inseguro"],
    ),
    (
        EmotionTag::Gratitude,
        &["grato", "agradecido", "reconhecido", "abençoado", "privilegiado", "sortudo"],
    ),
    (
        EmotionTag::Hope,
        &["esperançoso", "otimista", "confiante", "positivo", "animado", "motivado"],
    ),
    (
        EmotionTag::Peace,
        &["calmo", "tranquilo", "sereno", "pacífico", "relaxado", "equilibrado", "centrado"],
    ),
    (
        EmotionTag::Confusion,
        &["confuso", "perdido", "desorientado", "incerto", "indeciso", "atordoado"],
    ),
    (
        EmotionTag::Energy,
        &["energético", "vibrante", "dinâmico", "ativo", "entusiasmado", "vivaz"],
    ),
];

const INTENSITY_MARKERS: &[(IntensityLevel, &[&str])] = &[
    (
        IntensityLevel::Low,
        &["um pouco", "levemente", "meio", "ligeiramente"],
    ),
    (IntensityLevel::Medium, &["bastante", "bem", "muito"]),
    (
        IntensityLevel::High,
        &["extremamente", "profundamente", "intensamente", "completamente"],
    ),
];

/// One emotion and the phrases that signal it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub emotion: EmotionTag,
    pub phrases: Vec<String>,
}

/// One intensity level and its marker phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityEntry {
    pub intensity: IntensityLevel,
    pub phrases: Vec<String>,
}

/// Immutable classification configuration.
///
/// Built once and shared by reference with the classifier. Phrases are
/// stored lower-cased so matching against normalized text is direct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    emotions: Vec<EmotionEntry>,
    intensities: Vec<IntensityEntry>,
}

impl Lexicon {
    /// Build a lexicon from ordered tables.
    pub fn new(emotions: Vec<EmotionEntry>, intensities: Vec<IntensityEntry>) -> Self {
        let lower = |phrases: Vec<String>| phrases.into_iter().map(|p| p.to_lowercase()).collect();
        Self {
            emotions: emotions
                .into_iter()
                .map(|e| EmotionEntry {
                    emotion: e.emotion,
                    phrases: lower(e.phrases),
                })
                .collect(),
            intensities: intensities
                .into_iter()
                .map(|i| IntensityEntry {
                    intensity: i.intensity,
                    phrases: lower(i.phrases),
                })
                .collect(),
        }
    }

    /// The built-in Portuguese vocabulary.
    pub fn builtin() -> Self {
        let emotions = EMOTION_KEYWORDS
            .iter()
            .map(|(emotion, phrases)| EmotionEntry {
                emotion: *emotion,
                phrases: phrases.iter().map(|p| p.to_string()).collect(),
            })
            .collect();
        let intensities = INTENSITY_MARKERS
            .iter()
            .map(|(intensity, phrases)| IntensityEntry {
                intensity: *intensity,
                phrases: phrases.iter().map(|p| p.to_string()).collect(),
            })
            .collect();
        Self::new(emotions, intensities)
    }

    pub fn emotions(&self) -> &[EmotionEntry] {
        &self.emotions
    }

    pub fn intensities(&self) -> &[IntensityEntry] {
        &self.intensities
    }

    /// Configured phrases for one emotion, if it is in the table.
    pub fn phrases_for(&self, emotion: EmotionTag) -> Option<&[String]> {
        self.emotions
            .iter()
            .find(|e| e.emotion == emotion)
            .map(|e| e.phrases.as_slice())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
