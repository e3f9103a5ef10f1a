//! Trackable activities and their point values.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of user action that earns presence points.
///
/// Names outside the table are kept verbatim as `Unrecognized` so they
/// round-trip through storage; they earn the tracker's fallback value.
/// Every kind is built from its wire name, so a table name always resolves
/// to its known variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    // Daily reflection
    DailyReflectionBasic,
    DailyReflectionDeep,
    DailyReflectionTransformative,
    // Rituals
    MorningRitualCompleted,
    EveningRitualCompleted,
    CustomRitualCompleted,
    RitualConsistencyBonus,
    // Presence matrix
    TaskCompletedMindfully,
    UrgentImportantHandled,
    PresenceAxisChoice,
    MatrixReviewCompleted,
    // Immersive experiences
    ImmersiveExperienceCompleted,
    BreathingSessionCompleted,
    EmotionalProcessingSession,
    // Personal growth
    InsightRecorded,
    PatternRecognized,
    BreakthroughMoment,
    // Social connection
    GratitudeExpressed,
    CompassionPracticed,
    ConflictResolvedMindfully,
    // Consistency
    WeeklyConsistencyBonus,
    MonthlyMilestone,
    PresenceStreak7Days,
    PresenceStreak30Days,
    // Scenario practice
    ScenarioCompleted,
    Unrecognized(UnknownActivity),
}

/// Wire name of an activity outside the points table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownActivity(String);

impl UnknownActivity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// (kind, wire name, points, description)
const ACTIVITY_TABLE: &[(ActivityKind, &str, u32, &str)] = &[
    (ActivityKind::DailyReflectionBasic, "daily_reflection_basic", 10, "Reflexão diária básica"),
    (ActivityKind::DailyReflectionDeep, "daily_reflection_deep", 25, "Reflexão profunda"),
    (ActivityKind::DailyReflectionTransformative, "daily_reflection_transformative", 50, "Reflexão transformadora"),
    (ActivityKind::MorningRitualCompleted, "morning_ritual_completed", 15, "Ritual matinal concluído"),
    (ActivityKind::EveningRitualCompleted, "evening_ritual_completed", 15, "Ritual noturno concluído"),
    (ActivityKind::CustomRitualCompleted, "custom_ritual_completed", 20, "Ritual personalizado"),
    (ActivityKind::RitualConsistencyBonus, "ritual_consistency_bonus", 30, "Bônus de consistência (7 dias)"),
    (ActivityKind::TaskCompletedMindfully, "task_completed_mindfully", 5, "Tarefa concluída com presença"),
    (ActivityKind::UrgentImportantHandled, "urgent_important_handled", 15, "Crise gerenciada com sabedoria"),
    (ActivityKind::PresenceAxisChoice, "presence_axis_choice", 25, "Escolha consciente no Eixo da Presença"),
    (ActivityKind::MatrixReviewCompleted, "matrix_review_completed", 10, "Revisão da matriz concluída"),
    (ActivityKind::ImmersiveExperienceCompleted, "immersive_experience_completed", 30, "Experiência imersiva concluída"),
    (ActivityKind::BreathingSessionCompleted, "breathing_session_completed", 20, "Sessão de respiração"),
    (ActivityKind::EmotionalProcessingSession, "emotional_processing_session", 35, "Processamento emocional"),
    (ActivityKind::InsightRecorded, "insight_recorded", 15, "Insight registrado"),
    (ActivityKind::PatternRecognized, "pattern_recognized", 20, "Padrão reconhecido"),
    (ActivityKind::BreakthroughMoment, "breakthrough_moment", 50, "Momento de breakthrough"),
    (ActivityKind::GratitudeExpressed, "gratitude_expressed", 10, "Gratidão expressa"),
    (ActivityKind::CompassionPracticed, "compassion_practiced", 15, "Compaixão praticada"),
    (ActivityKind::ConflictResolvedMindfully, "conflict_resolved_mindfully", 25, "Conflito resolvido com consciência"),
    (ActivityKind::WeeklyConsistencyBonus, "weekly_consistency_bonus", 100, "Bônus semanal de consistência"),
    (ActivityKind::MonthlyMilestone, "monthly_milestone", 200, "Marco mensal alcançado"),
    (ActivityKind::PresenceStreak7Days, "presence_streak_7_days", 75, "Sequência de 7 dias de presença"),
    (ActivityKind::PresenceStreak30Days, "presence_streak_30_days", 300, "Sequência de 30 dias de presença"),
    (ActivityKind::ScenarioCompleted, "scenario_completed", 20, "Cenário de presença praticado"),
];

impl ActivityKind {
    fn entry(&self) -> Option<&'static (ActivityKind, &'static str, u32, &'static str)> {
        ACTIVITY_TABLE.iter().find(|(kind, ..)| kind == self)
    }

    /// Every kind in the points table, in table order.
    pub fn known() -> impl Iterator<Item = &'static ActivityKind> {
        ACTIVITY_TABLE.iter().map(|(kind, ..)| kind)
    }

    /// Wire name, e.g. `daily_reflection_deep`.
    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::Unrecognized(name) => name.as_str(),
            known => known.entry().map(|(_, name, ..)| *name).unwrap_or_default(),
        }
    }

    /// Table value, `None` for unrecognized kinds.
    pub fn points(&self) -> Option<u32> {
        self.entry().map(|(_, _, points, _)| *points)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ActivityKind::Unrecognized(_))
    }

    /// User-facing description; unrecognized kinds describe themselves by name.
    pub fn description(&self) -> &str {
        match self.entry() {
            Some((_, _, _, description)) => *description,
            None => self.as_str(),
        }
    }
}

impl From<&str> for ActivityKind {
    fn from(name: &str) -> Self {
        ACTIVITY_TABLE
            .iter()
            .find(|(_, wire, ..)| *wire == name)
            .map(|(kind, ..)| kind.clone())
            .unwrap_or_else(|| ActivityKind::Unrecognized(UnknownActivity(name.to_string())))
    }
}

impl From<String> for ActivityKind {
    fn from(name: String) -> Self {
        ActivityKind::from(name.as_str())
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trackable user action. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub timestamp: DateTime<Utc>,
}

impl ActivityEvent {
    pub fn now(kind: impl Into<ActivityKind>) -> Self {
        Self::at(kind, Utc::now())
    }

    pub fn at(kind: impl Into<ActivityKind>, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: kind.into(),
            timestamp,
        }
    }
}
