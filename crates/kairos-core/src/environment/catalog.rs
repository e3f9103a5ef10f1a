//! Static lookup tables behind the environment composer.
//!
//! Each table is independent. A lookup that misses falls back to that
//! table's peace (and, where keyed by intensity, peace/medium) entry without
//! affecting the other tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::emotion::{EmotionTag, IntensityLevel};

use EmotionTag::*;
use IntensityLevel::*;

/// Inhale / hold / exhale cadence in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingPattern {
    pub inhale_seconds: u32,
    pub hold_seconds: u32,
    pub exhale_seconds: u32,
    pub name: String,
}

impl BreathingPattern {
    pub fn new(inhale: u32, hold: u32, exhale: u32, name: &str) -> Self {
        Self {
            inhale_seconds: inhale,
            hold_seconds: hold,
            exhale_seconds: exhale,
            name: name.to_string(),
        }
    }

    /// Seconds for one full inhale-hold-exhale cycle.
    pub fn cycle_seconds(&self) -> u32 {
        self.inhale_seconds + self.hold_seconds + self.exhale_seconds
    }
}

const FALLBACK_EMOTION: EmotionTag = Peace;
const FALLBACK_INTENSITY: IntensityLevel = Medium;

const DESCRIPTIONS: &[(EmotionTag, [&str; 3])] = &[
    (Anxiety, [
        "Gentle mist clearing in a quiet forest, soft sunlight filtering through leaves",
        "Calm lake with gentle ripples, surrounded by peaceful mountains",
        "Deep breathing space with flowing water sounds and warm, soft lighting",
    ]),
    (Sadness, [
        "Soft rain on a window, cozy indoor space with warm tea",
        "Quiet lakeside at dusk with gentle waves and soft clouds",
        "Healing garden with gentle rain, rainbow appearing through clouds",
    ]),
    (Anger, [
        "Cool breeze through tall grass, distant mountains",
        "Powerful waterfall with mist, surrounded by strong trees",
        "Storm clouds clearing to reveal bright sunshine and open sky",
    ]),
    (Joy, [
        "Sunny meadow with wildflowers and butterflies",
        "Bright beach with gentle waves and seagulls",
        "Vibrant sunrise over blooming fields, birds singing",
    ]),
    (Fear, [
        "Safe cabin with warm firelight and soft blankets",
        "Protected garden with high walls and gentle fountain",
        "Bright lighthouse on a hill, beacon of safety and guidance",
    ]),
    (Gratitude, [
        "Golden hour in a peaceful garden with blooming flowers",
        "Warm sunrise over a fertile valley with abundant harvest",
        "Magnificent cathedral of light with floating golden particles",
    ]),
    (Hope, [
        "Dawn breaking over a quiet hill with morning dew",
        "Rainbow after rain, sun breaking through clouds",
        "Brilliant sunrise over endless possibilities, birds soaring",
    ]),
    (Peace, [
        "Still pond reflecting sky, surrounded by bamboo",
        "Zen garden with raked sand and balanced stones",
        "Infinite starry sky with gentle cosmic sounds and floating meditation",
    ]),
    (Confusion, [
        "Gentle fog slowly clearing to reveal a clear path",
        "Maze garden with clear signs and helpful guides",
        "Lighthouse beam cutting through fog, revealing safe harbor",
    ]),
    (Energy, [
        "Fresh morning air with gentle breeze and bird songs",
        "Dynamic waterfall with rainbow mist and vibrant plants",
        "Electric aurora dancing over snow-capped peaks, pure energy",
    ]),
];

const BASE_MINUTES: &[(EmotionTag, u32)] = &[
    (Anxiety, 5),
    (Sadness, 7),
    (Anger, 3),
    (Joy, 3),
    (Fear, 8),
    (Gratitude, 5),
    (Hope, 4),
    (Peace, 10),
    (Confusion, 6),
    (Energy, 2),
];

const BREATHING: &[(EmotionTag, (u32, u32, u32, &str))] = &[
    (Anxiety, (4, 4, 6, "Respiração Calmante")),
    (Sadness, (4, 2, 4, "Respiração Suave")),
    (Anger, (3, 1, 5, "Respiração Liberadora")),
    (Joy, (3, 1, 3, "Respiração Energizante")),
    (Fear, (4, 4, 4, "Respiração Equilibrante")),
    (Gratitude, (5, 2, 5, "Respiração Expansiva")),
    (Hope, (4, 2, 4, "Respiração Elevadora")),
    (Peace, (6, 2, 6, "Respiração Profunda")),
    (Confusion, (4, 4, 4, "Respiração Clarificadora")),
    (Energy, (3, 1, 2, "Respiração Vitalizante")),
];

const PALETTES: &[(EmotionTag, [&str; 3])] = &[
    (Anxiety, ["#87CEEB", "#E6F3FF", "#B0E0E6"]),
    (Sadness, ["#708090", "#D3D3D3", "#F0F8FF"]),
    (Anger, ["#FF6B6B", "#FFB6C1", "#FFF0F5"]),
    (Joy, ["#FFD700", "#FFA500", "#FFFFE0"]),
    (Fear, ["#DDA0DD", "#E6E6FA", "#F8F8FF"]),
    (Gratitude, ["#32CD32", "#98FB98", "#F0FFF0"]),
    (Hope, ["#87CEFA", "#B0C4DE", "#F0F8FF"]),
    (Peace, ["#F5F5DC", "#FFFAF0", "#FFFFFF"]),
    (Confusion, ["#D2B48C", "#F5DEB3", "#FFF8DC"]),
    (Energy, ["#FF4500", "#FF6347", "#FFE4E1"]),
];

const SOUNDS: &[(EmotionTag, [&str; 3])] = &[
    (Anxiety, ["ocean waves", "gentle rain", "soft wind"]),
    (Sadness, ["light rain", "distant thunder", "soft piano"]),
    (Anger, ["waterfall", "strong wind", "crackling fire"]),
    (Joy, ["birds singing", "children laughing", "gentle breeze"]),
    (Fear, ["heartbeat", "protective sounds", "safe harbor"]),
    (Gratitude, ["temple bells", "nature sounds", "harmonious tones"]),
    (Hope, ["sunrise sounds", "birds chirping", "gentle wind"]),
    (Peace, ["meditation bells", "silence", "soft breathing"]),
    (Confusion, ["clearing sounds", "gentle guidance", "soft chimes"]),
    (Energy, ["energetic music", "dynamic sounds", "uplifting tones"]),
];

const MANTRAS: &[(EmotionTag, [&str; 3])] = &[
    (Anxiety, [
        "Este momento é temporário. Eu respiro e encontro paz.",
        "Eu sou maior que minha ansiedade. Cada respiração me traz calma.",
        "Eu me entrego ao fluxo da vida. Estou seguro neste momento presente.",
    ]),
    (Sadness, [
        "É natural sentir. Eu me permito processar com gentileza.",
        "Esta tristeza também passará. Eu me acolho com compaixão.",
        "Mesmo na tristeza, há beleza. Eu honro meus sentimentos e me curo.",
    ]),
    (Anger, [
        "Eu reconheço minha raiva e escolho responder com sabedoria.",
        "Esta energia pode ser transformada. Eu canalizo minha força para o bem.",
        "Eu sou mais poderoso que minha raiva. Escolho a paz e a compreensão.",
    ]),
    (Joy, [
        "Eu celebro este momento de alegria e gratidão.",
        "Minha alegria é contagiante. Eu compartilho luz com o mundo.",
        "Eu sou pura alegria em movimento. Minha felicidade é um presente.",
    ]),
    (Fear, [
        "Eu reconheço meu medo e escolho a coragem.",
        "Mesmo com medo, eu dou um passo à frente. Sou mais forte do que imagino.",
        "O medo é apenas um sentimento. Eu sou corajoso e protegido.",
    ]),
    (Gratitude, [
        "Eu reconheço as bênçãos em minha vida.",
        "Meu coração transborda de gratidão por tudo que tenho.",
        "Eu sou gratidão pura. Cada momento é um presente sagrado.",
    ]),
    (Hope, [
        "Eu confio que coisas boas estão por vir.",
        "Minha esperança ilumina o caminho à frente.",
        "Eu sou esperança viva. O futuro brilha com possibilidades infinitas.",
    ]),
    (Peace, [
        "Eu encontro paz neste momento presente.",
        "Paz flui através de mim como água cristalina.",
        "Eu sou paz absoluta. Minha serenidade toca tudo ao meu redor.",
    ]),
    (Confusion, [
        "Está tudo bem não saber. Eu confio no processo.",
        "A clareza virá no momento certo. Eu me permito não saber.",
        "Na confusão, encontro oportunidade de crescimento. Eu confio em minha sabedoria interior.",
    ]),
    (Energy, [
        "Eu canalizo minha energia para o que realmente importa.",
        "Minha energia é poderosa e direcionada. Eu crio com propósito.",
        "Eu sou energia pura em movimento. Minha vitalidade transforma o mundo.",
    ]),
];

/// Immutable environment tables, built once and shared by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentCatalog {
    descriptions: BTreeMap<(EmotionTag, IntensityLevel), String>,
    base_minutes: BTreeMap<EmotionTag, u32>,
    breathing: BTreeMap<EmotionTag, BreathingPattern>,
    palettes: BTreeMap<EmotionTag, Vec<String>>,
    sounds: BTreeMap<EmotionTag, Vec<String>>,
    mantras: BTreeMap<(EmotionTag, IntensityLevel), String>,
}

fn by_intensity(table: &[(EmotionTag, [&str; 3])]) -> BTreeMap<(EmotionTag, IntensityLevel), String> {
    table
        .iter()
        .flat_map(|(emotion, texts)| {
            IntensityLevel::ALL
                .iter()
                .zip(texts.iter())
                .map(move |(intensity, text)| ((*emotion, *intensity), text.to_string()))
        })
        .collect()
}

fn lists(table: &[(EmotionTag, [&str; 3])]) -> BTreeMap<EmotionTag, Vec<String>> {
    table
        .iter()
        .map(|(emotion, items)| (*emotion, items.iter().map(|s| s.to_string()).collect()))
        .collect()
}

impl EnvironmentCatalog {
    /// The built-in tables.
    pub fn builtin() -> Self {
        Self {
            descriptions: by_intensity(DESCRIPTIONS),
            base_minutes: BASE_MINUTES.iter().copied().collect(),
            breathing: BREATHING
                .iter()
                .map(|(emotion, (inhale, hold, exhale, name))| {
                    (*emotion, BreathingPattern::new(*inhale, *hold, *exhale, name))
                })
                .collect(),
            palettes: lists(PALETTES),
            sounds: lists(SOUNDS),
            mantras: by_intensity(MANTRAS),
        }
    }

    // ── Table shaping (used to build partial catalogs) ──────────────

    pub fn without_description(mut self, emotion: EmotionTag, intensity: IntensityLevel) -> Self {
        self.descriptions.remove(&(emotion, intensity));
        self
    }

    pub fn without_base_minutes(mut self, emotion: EmotionTag) -> Self {
        self.base_minutes.remove(&emotion);
        self
    }

    pub fn without_breathing(mut self, emotion: EmotionTag) -> Self {
        self.breathing.remove(&emotion);
        self
    }

    pub fn without_palette(mut self, emotion: EmotionTag) -> Self {
        self.palettes.remove(&emotion);
        self
    }

    pub fn without_sounds(mut self, emotion: EmotionTag) -> Self {
        self.sounds.remove(&emotion);
        self
    }

    pub fn without_mantra(mut self, emotion: EmotionTag, intensity: IntensityLevel) -> Self {
        self.mantras.remove(&(emotion, intensity));
        self
    }

    // ── Lookups with per-table fallback ─────────────────────────────

    pub fn description(&self, emotion: EmotionTag, intensity: IntensityLevel) -> &str {
        self.descriptions
            .get(&(emotion, intensity))
            .or_else(|| self.descriptions.get(&(FALLBACK_EMOTION, FALLBACK_INTENSITY)))
            .map(String::as_str)
            .unwrap_or(DESCRIPTIONS[7].1[1])
    }

    pub fn base_minutes(&self, emotion: EmotionTag) -> u32 {
        self.base_minutes
            .get(&emotion)
            .or_else(|| self.base_minutes.get(&FALLBACK_EMOTION))
            .copied()
            .unwrap_or(10)
    }

    pub fn breathing(&self, emotion: EmotionTag) -> BreathingPattern {
        self.breathing
            .get(&emotion)
            .or_else(|| self.breathing.get(&FALLBACK_EMOTION))
            .cloned()
            .unwrap_or_else(|| BreathingPattern::new(6, 2, 6, "Respiração Profunda"))
    }

    pub fn palette(&self, emotion: EmotionTag) -> Vec<String> {
        self.palettes
            .get(&emotion)
            .or_else(|| self.palettes.get(&FALLBACK_EMOTION))
            .cloned()
            .unwrap_or_else(|| PALETTES[7].1.iter().map(|s| s.to_string()).collect())
    }

    pub fn sounds(&self, emotion: EmotionTag) -> Vec<String> {
        self.sounds
            .get(&emotion)
            .or_else(|| self.sounds.get(&FALLBACK_EMOTION))
            .cloned()
            .unwrap_or_else(|| SOUNDS[7].1.iter().map(|s| s.to_string()).collect())
    }

    pub fn mantra(&self, emotion: EmotionTag, intensity: IntensityLevel) -> &str {
        self.mantras
            .get(&(emotion, intensity))
            .or_else(|| self.mantras.get(&(FALLBACK_EMOTION, FALLBACK_INTENSITY)))
            .map(String::as_str)
            .unwrap_or(MANTRAS[7].1[1])
    }
}

impl Default for EnvironmentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
