use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::emotion::{EmotionTag, IntensityLevel};
use crate::progression::ActivityKind;
use crate::scenario::PresenceLevel;

/// Every state change in the companion produces an Event.
/// The surrounding application drains them to drive notifications and UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ProfileAnalyzed {
        dominant_emotion: Option<EmotionTag>,
        intensity: IntensityLevel,
        at: DateTime<Utc>,
    },
    PointsAwarded {
        activity: ActivityKind,
        points: u32,
        total: u64,
        at: DateTime<Utc>,
    },
    /// Cumulative points crossed into a higher level.
    LevelUp {
        level: u8,
        level_name: String,
        at: DateTime<Utc>,
    },
    ScenarioPresented {
        scenario_id: String,
        hint: Option<EmotionTag>,
        at: DateTime<Utc>,
    },
    ChoiceSelected {
        scenario_id: String,
        choice_id: String,
        presence_level: PresenceLevel,
        at: DateTime<Utc>,
    },
    ScenarioCompleted {
        scenario_id: String,
        presence_level: PresenceLevel,
        at: DateTime<Utc>,
    },
    /// A scenario was dropped before completion; nothing was recorded.
    ScenarioAbandoned {
        scenario_id: String,
        at: DateTime<Utc>,
    },
    /// The user left the simulator without starting another scenario.
    SimulatorExited {
        completed: usize,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::ProfileAnalyzed { at, .. }
            | Event::PointsAwarded { at, .. }
            | Event::LevelUp { at, .. }
            | Event::ScenarioPresented { at, .. }
            | Event::ChoiceSelected { at, .. }
            | Event::ScenarioCompleted { at, .. }
            | Event::ScenarioAbandoned { at, .. }
            | Event::SimulatorExited { at, .. } => *at,
        }
    }
}
