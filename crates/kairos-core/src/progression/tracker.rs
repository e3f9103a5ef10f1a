//! Presence point accounting.
//!
//! The tracker owns cumulative points and the recent-activity log. Level and
//! progress are always derived from points, never stored.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::activity::{ActivityEvent, ActivityKind};
use super::levels::tier_for;
use crate::error::Result;
use crate::storage::ProgressStore;

/// Storage key for cumulative points.
pub const POINTS_KEY: &str = "presence_points";
/// Storage key for the recent-activity log.
pub const ACTIVITIES_KEY: &str = "recent_activities";

/// Points awarded for activity kinds outside the table.
pub const DEFAULT_FALLBACK_POINTS: u32 = 5;
/// Maximum length of the recent-activity log.
pub const DEFAULT_RECENT_CAPACITY: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSettings {
    pub fallback_points: u32,
    pub recent_capacity: usize,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            fallback_points: DEFAULT_FALLBACK_POINTS,
            recent_capacity: DEFAULT_RECENT_CAPACITY,
        }
    }
}

/// Snapshot of progression, derived from points and the activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub points: u64,
    pub level: u8,
    pub level_name: String,
    pub level_color: String,
    /// Fraction of the current level covered, in `[0, 1]`.
    pub progress_to_next_level: f64,
    /// `None` at the top level.
    pub points_to_next_level: Option<u64>,
    pub next_level_name: Option<String>,
    /// Most recent first.
    pub recent_activities: Vec<ActivityEvent>,
}

/// Result of one `record` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Award {
    pub points_awarded: u32,
    pub level_before: u8,
    pub state: ProgressionState,
}

impl Award {
    pub fn leveled_up(&self) -> bool {
        self.state.level > self.level_before
    }
}

/// A recent activity with its display details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    pub event: ActivityEvent,
    pub points: u32,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ProgressionTracker {
    settings: TrackerSettings,
    points: u64,
    recent: Vec<ActivityEvent>,
}

impl ProgressionTracker {
    pub fn new() -> Self {
        Self::with_settings(TrackerSettings::default())
    }

    pub fn with_settings(settings: TrackerSettings) -> Self {
        Self {
            settings,
            points: 0,
            recent: Vec::new(),
        }
    }

    /// Resume from previously saved points and activities (most recent first).
    pub fn restore(settings: TrackerSettings, points: u64, mut recent: Vec<ActivityEvent>) -> Self {
        recent.truncate(settings.recent_capacity);
        Self {
            settings,
            points,
            recent,
        }
    }

    /// Load the two persisted records. Missing records start at zero / empty.
    ///
    /// # Errors
    /// Returns an error if the store fails or a record cannot be parsed.
    pub fn load<S: ProgressStore + ?Sized>(store: &S, settings: TrackerSettings) -> Result<Self> {
        let points = match store.load(POINTS_KEY)? {
            Some(raw) => serde_json::from_str::<u64>(&raw)?,
            None => 0,
        };
        let recent = match store.load(ACTIVITIES_KEY)? {
            Some(raw) => serde_json::from_str::<Vec<ActivityEvent>>(&raw)?,
            None => Vec::new(),
        };
        Ok(Self::restore(settings, points, recent))
    }

    /// Write both records.
    ///
    /// # Errors
    /// Returns an error if the store rejects either write.
    pub fn save<S: ProgressStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.save(POINTS_KEY, &serde_json::to_string(&self.points)?)?;
        store.save(ACTIVITIES_KEY, &serde_json::to_string(&self.recent)?)?;
        Ok(())
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    /// Points a kind is worth: the table value, or the fallback.
    pub fn points_for(&self, kind: &ActivityKind) -> u32 {
        kind.points().unwrap_or(self.settings.fallback_points)
    }

    /// Award points for an activity and log it.
    pub fn record(&mut self, activity: ActivityEvent) -> ProgressionState {
        self.award(activity).state
    }

    /// Like [`record`](Self::record), also reporting what changed.
    pub fn award(&mut self, activity: ActivityEvent) -> Award {
        let level_before = tier_for(self.points).level;
        let points_awarded = self.points_for(&activity.kind);
        if !activity.kind.is_recognized() {
            warn!(kind = %activity.kind, fallback = points_awarded, "unrecognized activity type");
        }

        self.points = self.points.saturating_add(u64::from(points_awarded));
        info!(kind = %activity.kind, points_awarded, total = self.points, "presence points awarded");

        self.recent.insert(0, activity);
        self.recent.truncate(self.settings.recent_capacity);

        let state = self.current_state();
        if state.level > level_before {
            info!(level = state.level, name = %state.level_name, "reached new presence level");
        }

        Award {
            points_awarded,
            level_before,
            state,
        }
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn level(&self) -> u8 {
        tier_for(self.points).level
    }

    pub fn current_state(&self) -> ProgressionState {
        let tier = tier_for(self.points);
        let next = tier.next();
        ProgressionState {
            points: self.points,
            level: tier.level,
            level_name: tier.name.to_string(),
            level_color: tier.color.to_string(),
            progress_to_next_level: tier.progress(self.points),
            points_to_next_level: next.map(|n| n.min_points.saturating_sub(self.points)),
            next_level_name: next.map(|n| n.name.to_string()),
            recent_activities: self.recent.clone(),
        }
    }

    /// The first `limit` recent activities with points and descriptions.
    pub fn recent(&self, limit: usize) -> Vec<RecentActivity> {
        self.recent
            .iter()
            .take(limit)
            .map(|event| RecentActivity {
                points: self.points_for(&event.kind),
                description: event.kind.description().to_string(),
                event: event.clone(),
            })
            .collect()
    }
}

impl Default for ProgressionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn record_adds_table_points() {
        let mut tracker = ProgressionTracker::new();
        let state = tracker.record(ActivityEvent::now(ActivityKind::MorningRitualCompleted));
        assert_eq!(state.points, 15);
        assert_eq!(state.level, 1);
        assert_eq!(state.recent_activities.len(), 1);
    }

    #[test]
    fn unrecognized_kind_uses_fallback() {
        let mut tracker = ProgressionTracker::new();
        let state = tracker.record(ActivityEvent::now("made_tea"));
        assert_eq!(state.points, 5);

        let mut generous = ProgressionTracker::with_settings(TrackerSettings {
            fallback_points: 7,
            ..Default::default()
        });
        assert_eq!(generous.record(ActivityEvent::now("made_tea")).points, 7);
    }

    #[test]
    fn deep_reflection_from_ninety_points() {
        let mut tracker = ProgressionTracker::restore(TrackerSettings::default(), 90, vec![]);
        let state = tracker.record(ActivityEvent::now("daily_reflection_deep"));
        assert_eq!(state.points, 115);
        assert_eq!(state.level, 2);
        assert_eq!(state.level_name, "Consciência");
        assert_eq!(state.progress_to_next_level, (115.0 - 100.0) / (300.0 - 100.0));
        assert_eq!(state.points_to_next_level, Some(185));
        assert_eq!(state.next_level_name.as_deref(), Some("Presença"));
    }

    #[test]
    fn award_reports_level_up() {
        let mut tracker = ProgressionTracker::restore(TrackerSettings::default(), 90, vec![]);
        let award = tracker.award(ActivityEvent::now(ActivityKind::GratitudeExpressed));
        assert_eq!(award.points_awarded, 10);
        assert_eq!(award.level_before, 1);
        assert!(award.leveled_up());

        let award = tracker.award(ActivityEvent::now(ActivityKind::GratitudeExpressed));
        assert!(!award.leveled_up());
    }

    #[test]
    fn recent_log_is_capped_and_most_recent_first() {
        let mut tracker = ProgressionTracker::new();
        for i in 0..25 {
            tracker.record(ActivityEvent::now(format!("custom_{i}")));
        }
        let state = tracker.current_state();
        assert_eq!(state.recent_activities.len(), 20);
        assert_eq!(state.recent_activities[0].kind.as_str(), "custom_24");
        assert_eq!(state.recent_activities[19].kind.as_str(), "custom_5");
        assert_eq!(state.points, 125);
    }

    #[test]
    fn top_level_progress_is_one() {
        let tracker = ProgressionTracker::restore(TrackerSettings::default(), 5000, vec![]);
        let state = tracker.current_state();
        assert_eq!(state.level, 8);
        assert_eq!(state.progress_to_next_level, 1.0);
        assert_eq!(state.points_to_next_level, None);
        assert_eq!(state.next_level_name, None);
    }

    #[test]
    fn current_state_is_idempotent() {
        let mut tracker = ProgressionTracker::new();
        tracker.record(ActivityEvent::now(ActivityKind::InsightRecorded));
        assert_eq!(tracker.current_state(), tracker.current_state());
    }

    #[test]
    fn recent_view_carries_points_and_descriptions() {
        let mut tracker = ProgressionTracker::new();
        tracker.record(ActivityEvent::now(ActivityKind::BreathingSessionCompleted));
        tracker.record(ActivityEvent::now("unknown_thing"));
        let recent = tracker.recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].points, 5);
        assert_eq!(recent[0].description, "unknown_thing");
        assert_eq!(recent[1].points, 20);
        assert_eq!(recent[1].description, "Sessão de respiração");
        assert_eq!(tracker.recent(1).len(), 1);
    }

    #[test]
    fn save_then_load_reproduces_state() {
        let mut store = MemoryStore::default();
        let mut tracker = ProgressionTracker::new();
        tracker.record(ActivityEvent::now(ActivityKind::MonthlyMilestone));
        tracker.record(ActivityEvent::now("mystery"));
        tracker.save(&mut store).unwrap();

        let loaded = ProgressionTracker::load(&store, TrackerSettings::default()).unwrap();
        assert_eq!(loaded.current_state(), tracker.current_state());
    }

    #[test]
    fn wire_named_events_earn_table_points_and_round_trip() {
        let mut store = MemoryStore::default();
        let mut tracker = ProgressionTracker::new();
        let state = tracker.record(ActivityEvent::now(String::from("daily_reflection_deep")));
        assert_eq!(state.points, 25);
        tracker.record(ActivityEvent::now("stretching"));
        tracker.save(&mut store).unwrap();

        let loaded = ProgressionTracker::load(&store, TrackerSettings::default()).unwrap();
        assert_eq!(loaded.current_state(), tracker.current_state());
        assert_eq!(loaded.recent(1)[0].points, 5);
        assert_eq!(loaded.recent(2)[1].points, 25);
    }

    #[test]
    fn load_from_empty_store_starts_fresh() {
        let store = MemoryStore::default();
        let tracker = ProgressionTracker::load(&store, TrackerSettings::default()).unwrap();
        assert_eq!(tracker.points(), 0);
        assert_eq!(tracker.level(), 1);
        assert!(tracker.current_state().recent_activities.is_empty());
    }

    #[test]
    fn restore_enforces_capacity() {
        let events: Vec<_> = (0..30).map(|i| ActivityEvent::now(format!("e{i}"))).collect();
        let tracker = ProgressionTracker::restore(TrackerSettings::default(), 0, events);
        assert_eq!(tracker.current_state().recent_activities.len(), 20);
    }
}
