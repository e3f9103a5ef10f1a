use kairos_core::{EmotionTag, IntensityLevel};

use super::{open_companion, print_json, CliResult};

pub fn run(emotion: Option<EmotionTag>, intensity: Option<IntensityLevel>) -> CliResult {
    let companion = open_companion()?;
    let environment = match (emotion, intensity) {
        (None, None) => companion.environment(),
        (emotion, intensity) => {
            let base = companion.environment();
            companion.compose(
                emotion.unwrap_or(base.emotion),
                intensity.unwrap_or(base.intensity),
            )
        }
    };
    print_json(&environment)
}
