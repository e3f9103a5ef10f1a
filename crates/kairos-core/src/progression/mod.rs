//! Gamified presence progression: activity points, levels and the recent log.

mod activity;
mod levels;
mod tracker;

pub use activity::{ActivityEvent, ActivityKind, UnknownActivity};
pub use levels::{tier_for, LevelTier, LEVELS};
pub use tracker::{
    Award, ProgressionState, ProgressionTracker, RecentActivity, TrackerSettings, ACTIVITIES_KEY,
    POINTS_KEY,
};
