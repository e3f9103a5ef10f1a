//! # Kairos Core Library
//!
//! This library provides the Presence Engine behind the Kairos companion: the
//! rule-based logic that turns what a user writes and does into guidance and
//! progression. It follows a CLI-first philosophy where every operation is
//! available through the standalone `kairos` binary.
//!
//! ## Architecture
//!
//! - **Emotion**: keyword-coverage classifier mapping free text to an
//!   emotional profile (dominant emotion, intensity, per-emotion confidence)
//! - **Environment**: deterministic composer turning a profile into a sensory
//!   guidance descriptor, plus a tick-driven breathing guide
//! - **Progression**: activity points, the eight presence levels and the
//!   recent-activity log
//! - **Scenario**: guided-choice state machine with anti-repeat selection
//! - **Storage**: SQLite key-value persistence and TOML configuration
//!
//! None of the engine components own timers or threads; callers drive them
//! with discrete method calls.
//!
//! ## Key Components
//!
//! - [`EmotionClassifier`]: text to [`EmotionalProfile`]
//! - [`EnvironmentComposer`]: profile to [`Environment`]
//! - [`ProgressionTracker`]: activity events to [`ProgressionState`]
//! - [`ScenarioEngine`]: scenario session lifecycle
//! - [`Companion`]: facade wiring the four together over a [`ProgressStore`]

pub mod companion;
pub mod emotion;
pub mod environment;
pub mod error;
pub mod events;
pub mod progression;
pub mod scenario;
pub mod storage;

pub use companion::{Companion, CompanionSettings};
pub use emotion::{EmotionClassifier, EmotionTag, EmotionalProfile, IntensityLevel, Lexicon};
pub use environment::{
    BreathPhase, BreathingGuide, BreathingPattern, Environment, EnvironmentCatalog,
    EnvironmentComposer, ImmersiveExperience,
};
pub use error::{ConfigError, CoreError, DatabaseError, ScenarioError};
pub use events::Event;
pub use progression::{ActivityEvent, ActivityKind, ProgressionState, ProgressionTracker};
pub use scenario::{
    IndexPicker, PresenceLevel, RandomPicker, Scenario, ScenarioEngine, ScenarioLibrary,
    ScenarioResult, SessionState,
};
pub use storage::{Config, Database, MemoryStore, ProgressStore};
