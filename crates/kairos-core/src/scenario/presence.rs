//! Presence level: ordinal 1-5 rating of a scenario choice, reactive to wise.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("presence level must be between 1 and 5, got {0}")]
pub struct InvalidPresenceLevel(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PresenceLevel(u8);

impl PresenceLevel {
    pub const REACTIVE: Self = Self(1);
    pub const AWARE: Self = Self(2);
    pub const GROWING: Self = Self(3);
    pub const PRESENT: Self = Self(4);
    pub const WISE: Self = Self(5);

    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "Reativo",
            2 => "Consciente",
            3 => "Crescendo",
            4 => "Presente",
            _ => "Sábio",
        }
    }

    pub fn color(self) -> &'static str {
        match self.0 {
            1 => "#ff6b6b",
            2 => "#ffa726",
            3 => "#ffeb3b",
            4 => "#66bb6a",
            _ => "#42a5f5",
        }
    }
}

impl TryFrom<u8> for PresenceLevel {
    type Error = InvalidPresenceLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidPresenceLevel(value))
        }
    }
}

impl From<PresenceLevel> for u8 {
    fn from(level: PresenceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for PresenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_through_five() {
        for v in 1..=5u8 {
            assert_eq!(PresenceLevel::try_from(v).unwrap().value(), v);
        }
        assert_eq!(PresenceLevel::try_from(0), Err(InvalidPresenceLevel(0)));
        assert_eq!(PresenceLevel::try_from(6), Err(InvalidPresenceLevel(6)));
    }

    #[test]
    fn labels_and_colors() {
        assert_eq!(PresenceLevel::REACTIVE.name(), "Reativo");
        assert_eq!(PresenceLevel::WISE.name(), "Sábio");
        assert_eq!(PresenceLevel::PRESENT.color(), "#66bb6a");
        assert_eq!(PresenceLevel::GROWING.to_string(), "3 (Crescendo)");
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&PresenceLevel::AWARE).unwrap(), "2");
        assert!(serde_json::from_str::<PresenceLevel>("9").is_err());
    }
}
