//! Sensory environment generation for guided presence sessions.

mod breathing;
mod catalog;
mod composer;
mod experience;

pub use breathing::{BreathPhase, BreathingGuide};
pub use catalog::{BreathingPattern, EnvironmentCatalog};
pub use composer::{Environment, EnvironmentComposer};
pub use experience::ImmersiveExperience;
