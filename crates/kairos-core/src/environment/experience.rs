//! Record of a finished immersive session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::breathing::BreathingGuide;
use super::composer::Environment;
use crate::emotion::{EmotionTag, IntensityLevel};
use crate::progression::{ActivityEvent, ActivityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmersiveExperience {
    pub emotion: EmotionTag,
    pub intensity: IntensityLevel,
    pub duration_minutes: u32,
    pub breathing_cycles: u32,
    pub user_reflection: String,
    /// The text the environment was generated from, if any.
    pub user_input: String,
    pub completed_at: DateTime<Utc>,
}

impl ImmersiveExperience {
    pub fn finish(
        environment: &Environment,
        guide: &BreathingGuide,
        user_input: impl Into<String>,
        user_reflection: impl Into<String>,
    ) -> Self {
        Self {
            emotion: environment.emotion,
            intensity: environment.intensity,
            duration_minutes: environment.suggested_duration_minutes,
            breathing_cycles: guide.cycles(),
            user_reflection: user_reflection.into(),
            user_input: user_input.into(),
            completed_at: Utc::now(),
        }
    }

    /// The progression event this experience earns.
    pub fn activity(&self) -> ActivityEvent {
        ActivityEvent::at(ActivityKind::ImmersiveExperienceCompleted, self.completed_at)
    }
}
