//! Guided behavioral practice: scenario library, selection and session flow.

mod engine;
mod library;
mod picker;
mod presence;

pub use engine::{
    ChoiceFeedback, ScenarioEngine, ScenarioResult, ScenarioSession, ScenarioSettings,
    SessionState, DEFAULT_ANTI_REPEAT_WINDOW,
};
pub use library::{Choice, Scenario, ScenarioCategory, ScenarioLibrary};
pub use picker::{IndexPicker, RandomPicker, SequencePicker};
pub use presence::{InvalidPresenceLevel, PresenceLevel};
