//! Closed sets of emotion and intensity tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Emotion tags recognized by the classifier.
///
/// Declaration order is the classifier's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTag {
    Anxiety,
    Sadness,
    Anger,
    Joy,
    Fear,
    Gratitude,
    Hope,
    Peace,
    Confusion,
    Energy,
}

impl EmotionTag {
    pub const ALL: [EmotionTag; 10] = [
        EmotionTag::Anxiety,
        EmotionTag::Sadness,
        EmotionTag::Anger,
        EmotionTag::Joy,
        EmotionTag::Fear,
        EmotionTag::Gratitude,
        EmotionTag::Hope,
        EmotionTag::Peace,
        EmotionTag::Confusion,
        EmotionTag::Energy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionTag::Anxiety => "anxiety",
            EmotionTag::Sadness => "sadness",
            EmotionTag::Anger => "anger",
            EmotionTag::Joy => "joy",
            EmotionTag::Fear => "fear",
            EmotionTag::Gratitude => "gratitude",
            EmotionTag::Hope => "hope",
            EmotionTag::Peace => "peace",
            EmotionTag::Confusion => "confusion",
            EmotionTag::Energy => "energy",
        }
    }

    /// Portuguese label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            EmotionTag::Anxiety => "ansiedade",
            EmotionTag::Sadness => "tristeza",
            EmotionTag::Anger => "raiva",
            EmotionTag::Joy => "alegria",
            EmotionTag::Fear => "medo",
            EmotionTag::Gratitude => "gratidão",
            EmotionTag::Hope => "esperança",
            EmotionTag::Peace => "paz",
            EmotionTag::Confusion => "confusão",
            EmotionTag::Energy => "energia",
        }
    }
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionTag {
    type Err = String;

    /// Accepts the English name, the Portuguese label, or the label without
    /// diacritics (`confusao`, `gratidao`, `esperanca`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "anxiety" | "ansiedade" => Ok(EmotionTag::Anxiety),
            "sadness" | "tristeza" => Ok(EmotionTag::Sadness),
            "anger" | "raiva" => Ok(EmotionTag::Anger),
            "joy" | "alegria" => Ok(EmotionTag::Joy),
            "fear" | "medo" => Ok(EmotionTag::Fear),
            "gratitude" | "gratidão" | "gratidao" => Ok(EmotionTag::Gratitude),
            "hope" | "esperança" | "esperanca" => Ok(EmotionTag::Hope),
            "peace" | "paz" => Ok(EmotionTag::Peace),
            "confusion" | "confusão" | "confusao" => Ok(EmotionTag::Confusion),
            "energy" | "energia" => Ok(EmotionTag::Energy),
            _ => Err(format!("unknown emotion: '{s}'")),
        }
    }
}

/// How strongly an emotion is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
}

impl IntensityLevel {
    pub const ALL: [IntensityLevel; 3] = [
        IntensityLevel::Low,
        IntensityLevel::Medium,
        IntensityLevel::High,
    ];

    /// Scale applied to an emotion's base session duration, in tenths.
    pub fn duration_tenths(&self) -> u32 {
        match self {
            IntensityLevel::Low => 7,
            IntensityLevel::Medium => 10,
            IntensityLevel::High => 15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityLevel::Low => "low",
            IntensityLevel::Medium => "medium",
            IntensityLevel::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntensityLevel::Low => "baixa",
            IntensityLevel::Medium => "média",
            IntensityLevel::High => "alta",
        }
    }
}

impl Default for IntensityLevel {
    fn default() -> Self {
        IntensityLevel::Medium
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntensityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "low" | "baixa" => Ok(IntensityLevel::Low),
            "medium" | "média" | "media" => Ok(IntensityLevel::Medium),
            "high" | "alta" => Ok(IntensityLevel::High),
            _ => Err(format!("unknown intensity: '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_portuguese_names() {
        assert_eq!("anxiety".parse::<EmotionTag>().unwrap(), EmotionTag::Anxiety);
        assert_eq!("Confusão".parse::<EmotionTag>().unwrap(), EmotionTag::Confusion);
        assert_eq!("confusao".parse::<EmotionTag>().unwrap(), EmotionTag::Confusion);
        assert!("boredom".parse::<EmotionTag>().is_err());

        assert_eq!("média".parse::<IntensityLevel>().unwrap(), IntensityLevel::Medium);
        assert_eq!("HIGH".parse::<IntensityLevel>().unwrap(), IntensityLevel::High);
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&EmotionTag::Gratitude).unwrap();
        assert_eq!(json, "\"gratitude\"");
        let back: IntensityLevel = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(back, IntensityLevel::Low);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for tag in EmotionTag::ALL {
            assert_eq!(tag.to_string().parse::<EmotionTag>().unwrap(), tag);
            assert_eq!(tag.label().parse::<EmotionTag>().unwrap(), tag);
        }
    }
}
