//! Integration tests for presence progression.

use kairos_core::progression::{tier_for, TrackerSettings, LEVELS};
use kairos_core::{ActivityEvent, ActivityKind, MemoryStore, ProgressionTracker};
use proptest::prelude::*;

fn activity_name() -> impl Strategy<Value = String> {
    let known: Vec<String> = ActivityKind::known().map(|k| k.as_str().to_string()).collect();
    prop_oneof![
        3 => prop::sample::select(known),
        1 => "[a-z_]{3,12}",
    ]
}

proptest! {
    #[test]
    fn points_are_sum_of_resolved_values(names in prop::collection::vec(activity_name(), 0..60)) {
        let mut tracker = ProgressionTracker::new();
        let mut expected = 0u64;
        for name in &names {
            let kind = ActivityKind::from(name.as_str());
            expected += u64::from(kind.points().unwrap_or(5));
            tracker.record(ActivityEvent::now(kind));
        }
        let state = tracker.current_state();
        prop_assert_eq!(state.points, expected);
        prop_assert!(state.recent_activities.len() <= 20);
        prop_assert_eq!(state.recent_activities.len(), names.len().min(20));

        // Most recent first.
        for (entry, name) in state.recent_activities.iter().zip(names.iter().rev()) {
            prop_assert_eq!(entry.kind.as_str(), name.as_str());
        }
    }

    #[test]
    fn level_never_decreases_with_points(a in 0u64..20_000, b in 0u64..20_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tier_for(lo).level <= tier_for(hi).level);
    }

    #[test]
    fn progress_stays_in_unit_interval(points in 0u64..100_000) {
        let tier = tier_for(points);
        let progress = tier.progress(points);
        prop_assert!((0.0..=1.0).contains(&progress));
        prop_assert!(tier.contains(points));
    }

    #[test]
    fn save_load_round_trip(names in prop::collection::vec(activity_name(), 0..30)) {
        let mut store = MemoryStore::new();
        let mut tracker = ProgressionTracker::new();
        for name in &names {
            tracker.record(ActivityEvent::now(name.as_str()));
        }
        tracker.save(&mut store).unwrap();
        let loaded = ProgressionTracker::load(&store, TrackerSettings::default()).unwrap();
        prop_assert_eq!(loaded.current_state(), tracker.current_state());
    }
}

#[test]
fn test_level_boundaries() {
    assert_eq!(tier_for(99).level, 1);
    assert_eq!(tier_for(100).level, 2);
    assert_eq!(tier_for(100).name, "Consciência");

    let top = ProgressionTracker::restore(TrackerSettings::default(), 5000, Vec::new());
    let state = top.current_state();
    assert_eq!(state.level, 8);
    assert_eq!(state.progress_to_next_level, 1.0);
    assert_eq!(LEVELS.len(), 8);
}

#[test]
fn test_deep_reflection_from_ninety() {
    let mut tracker = ProgressionTracker::restore(TrackerSettings::default(), 90, Vec::new());
    let state = tracker.record(ActivityEvent::now("daily_reflection_deep"));
    assert_eq!(state.points, 115);
    assert_eq!(state.level, 2);
    assert_eq!(state.progress_to_next_level, 0.075);
}

#[test]
fn test_custom_capacity_applies() {
    let settings = TrackerSettings {
        recent_capacity: 3,
        ..TrackerSettings::default()
    };
    let mut tracker = ProgressionTracker::with_settings(settings);
    for _ in 0..5 {
        tracker.record(ActivityEvent::now(ActivityKind::InsightRecorded));
    }
    assert_eq!(tracker.current_state().recent_activities.len(), 3);
    assert_eq!(tracker.points(), 75);
}
