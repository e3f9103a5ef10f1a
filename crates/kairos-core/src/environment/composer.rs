//! Emotional profile → sensory environment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{BreathingPattern, EnvironmentCatalog};
use crate::emotion::{EmotionTag, EmotionalProfile, IntensityLevel};

/// A fully derived guidance descriptor for one presence session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub emotion: EmotionTag,
    pub intensity: IntensityLevel,
    pub description: String,
    pub suggested_duration_minutes: u32,
    pub breathing_pattern: BreathingPattern,
    pub palette: Vec<String>,
    pub ambient_sounds: Vec<String>,
    pub mantra: String,
}

impl Environment {
    pub fn suggested_duration_seconds(&self) -> u64 {
        u64::from(self.suggested_duration_minutes) * 60
    }
}

/// Stateless composer over a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentComposer<'a> {
    catalog: &'a EnvironmentCatalog,
}

impl<'a> EnvironmentComposer<'a> {
    pub fn new(catalog: &'a EnvironmentCatalog) -> Self {
        Self { catalog }
    }

    /// Build the environment for an emotion at a given intensity.
    ///
    /// Pure: identical inputs always produce identical values.
    pub fn compose(&self, emotion: EmotionTag, intensity: IntensityLevel) -> Environment {
        let environment = Environment {
            emotion,
            intensity,
            description: self.catalog.description(emotion, intensity).to_string(),
            suggested_duration_minutes: self.suggested_duration(emotion, intensity),
            breathing_pattern: self.catalog.breathing(emotion),
            palette: self.catalog.palette(emotion),
            ambient_sounds: self.catalog.sounds(emotion),
            mantra: self.catalog.mantra(emotion, intensity).to_string(),
        };
        debug!(%emotion, %intensity, minutes = environment.suggested_duration_minutes, "composed environment");
        environment
    }

    /// Compose from a classifier result. A profile without a dominant
    /// emotion composes the peace environment at medium intensity.
    pub fn compose_for(&self, profile: &EmotionalProfile) -> Environment {
        match profile.dominant_emotion {
            Some(emotion) => self.compose(emotion, profile.intensity),
            None => self.compose(EmotionTag::Peace, IntensityLevel::Medium),
        }
    }

    /// Base minutes scaled by intensity, rounded to the nearest minute
    /// (halves round up), never below one minute.
    pub fn suggested_duration(&self, emotion: EmotionTag, intensity: IntensityLevel) -> u32 {
        let tenths = self.catalog.base_minutes(emotion) * intensity.duration_tenths();
        ((tenths + 5) / 10).max(1)
    }
}
