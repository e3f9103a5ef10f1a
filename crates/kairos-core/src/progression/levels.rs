//! Presence level ladder.
//!
//! Eight contiguous point ranges, `min` inclusive and `max` exclusive; the
//! last range is unbounded.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelTier {
    pub level: u8,
    pub name: &'static str,
    pub min_points: u64,
    /// `None` for the top tier.
    pub max_points: Option<u64>,
    pub color: &'static str,
}

pub const LEVELS: [LevelTier; 8] = [
    LevelTier { level: 1, name: "Despertar", min_points: 0, max_points: Some(100), color: "#E8F4FD" },
    LevelTier { level: 2, name: "Consciência", min_points: 100, max_points: Some(300), color: "#B8E6B8" },
    LevelTier { level: 3, name: "Presença", min_points: 300, max_points: Some(600), color: "#87CEEB" },
    LevelTier { level: 4, name: "Serenidade", min_points: 600, max_points: Some(1000), color: "#DDA0DD" },
    LevelTier { level: 5, name: "Sabedoria", min_points: 1000, max_points: Some(1500), color: "#F0E68C" },
    LevelTier { level: 6, name: "Transcendência", min_points: 1500, max_points: Some(2500), color: "#FFB6C1" },
    LevelTier { level: 7, name: "Iluminação", min_points: 2500, max_points: Some(5000), color: "#98FB98" },
    LevelTier { level: 8, name: "Mestre da Presença", min_points: 5000, max_points: None, color: "#FFD700" },
];

impl LevelTier {
    pub fn contains(&self, points: u64) -> bool {
        points >= self.min_points && self.max_points.map_or(true, |max| points < max)
    }

    /// Fraction of this tier covered by `points`, clamped to `[0, 1]`.
    /// Always 1.0 for the unbounded top tier.
    pub fn progress(&self, points: u64) -> f64 {
        match self.max_points {
            Some(max) => {
                let span = (max - self.min_points) as f64;
                let covered = points.saturating_sub(self.min_points) as f64;
                (covered / span).clamp(0.0, 1.0)
            }
            None => 1.0,
        }
    }

    pub fn next(&self) -> Option<&'static LevelTier> {
        LEVELS.get(usize::from(self.level))
    }
}

/// Tier containing `points`.
pub fn tier_for(points: u64) -> &'static LevelTier {
    LEVELS
        .iter()
        .find(|tier| tier.contains(points))
        .unwrap_or(&LEVELS[LEVELS.len() - 1])
}
