//! Breathing guide stepper.
//!
//! Like the rest of the engine it owns no timer: the caller invokes `tick()`
//! once per elapsed second and renders whatever phase is current.
//!
//! ```text
//! Inhale -> Hold -> Exhale -> Inhale (cycle += 1)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::BreathingPattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl fmt::Display for BreathPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BreathPhase::Inhale => "inhale",
            BreathPhase::Hold => "hold",
            BreathPhase::Exhale => "exhale",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingGuide {
    pattern: BreathingPattern,
    phase: BreathPhase,
    seconds_in_phase: u32,
    cycles: u32,
}

impl BreathingGuide {
    pub fn new(pattern: BreathingPattern) -> Self {
        Self {
            pattern,
            phase: BreathPhase::Inhale,
            seconds_in_phase: 0,
            cycles: 0,
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    /// Completed inhale-hold-exhale cycles.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn pattern(&self) -> &BreathingPattern {
        &self.pattern
    }

    fn phase_seconds(&self, phase: BreathPhase) -> u32 {
        match phase {
            BreathPhase::Inhale => self.pattern.inhale_seconds,
            BreathPhase::Hold => self.pattern.hold_seconds,
            BreathPhase::Exhale => self.pattern.exhale_seconds,
        }
    }

    /// Seconds left in the current phase.
    pub fn remaining_in_phase(&self) -> u32 {
        self.phase_seconds(self.phase)
            .saturating_sub(self.seconds_in_phase)
    }

    /// Advance one second. Returns the new phase when the phase changes.
    ///
    /// At most one phase change happens per tick, so a zero-second hold
    /// still occupies one tick.
    pub fn tick(&mut self) -> Option<BreathPhase> {
        self.seconds_in_phase += 1;
        if self.seconds_in_phase < self.phase_seconds(self.phase) {
            return None;
        }

        self.seconds_in_phase = 0;
        self.phase = match self.phase {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => {
                self.cycles += 1;
                BreathPhase::Inhale
            }
        };
        Some(self.phase)
    }

    /// Instruction text for the current phase, e.g. "Inspire (4s)".
    pub fn instruction(&self) -> String {
        let (verb, seconds) = match self.phase {
            BreathPhase::Inhale => ("Inspire", self.pattern.inhale_seconds),
            BreathPhase::Hold => ("Segure", self.pattern.hold_seconds),
            BreathPhase::Exhale => ("Expire", self.pattern.exhale_seconds),
        };
        format!("{verb} ({seconds}s)")
    }

    pub fn reset(&mut self) {
        self.phase = BreathPhase::Inhale;
        self.seconds_in_phase = 0;
        self.cycles = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide(inhale: u32, hold: u32, exhale: u32) -> BreathingGuide {
        BreathingGuide::new(BreathingPattern::new(inhale, hold, exhale, "test"))
    }

    #[test]
    fn phases_follow_pattern_durations() {
        let mut g = guide(2, 1, 2);
        assert_eq!(g.phase(), BreathPhase::Inhale);
        assert_eq!(g.instruction(), "Inspire (2s)");
        assert_eq!(g.tick(), None);
        assert_eq!(g.tick(), Some(BreathPhase::Hold));
        assert_eq!(g.instruction(), "Segure (1s)");
        assert_eq!(g.tick(), Some(BreathPhase::Exhale));
        assert_eq!(g.remaining_in_phase(), 2);
        assert_eq!(g.tick(), None);
        assert_eq!(g.cycles(), 0);
        assert_eq!(g.tick(), Some(BreathPhase::Inhale));
        assert_eq!(g.cycles(), 1);
    }

    #[test]
    fn full_cycle_takes_cycle_seconds() {
        let pattern = BreathingPattern::new(4, 4, 6, "Respiração Calmante");
        let mut g = BreathingGuide::new(pattern.clone());
        for _ in 0..pattern.cycle_seconds() * 3 {
            g.tick();
        }
        assert_eq!(g.cycles(), 3);
        assert_eq!(g.phase(), BreathPhase::Inhale);
    }

    #[test]
    fn zero_hold_still_takes_a_tick() {
        let mut g = guide(1, 0, 1);
        assert_eq!(g.tick(), Some(BreathPhase::Hold));
        assert_eq!(g.tick(), Some(BreathPhase::Exhale));
        assert_eq!(g.tick(), Some(BreathPhase::Inhale));
        assert_eq!(g.cycles(), 1);
    }

    #[test]
    fn reset_returns_to_first_inhale() {
        let mut g = guide(1, 1, 1);
        g.tick();
        g.tick();
        g.tick();
        g.reset();
        assert_eq!(g.phase(), BreathPhase::Inhale);
        assert_eq!(g.cycles(), 0);
    }
}
