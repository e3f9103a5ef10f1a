//! Rule-based emotion classification.

mod classifier;
mod lexicon;
mod tags;

pub use classifier::{EmotionClassifier, EmotionScore, EmotionalProfile};
pub use lexicon::{EmotionEntry, IntensityEntry, Lexicon};
pub use tags::{EmotionTag, IntensityLevel};
