use super::{open_companion, print_json, CliResult};

pub fn run(text: &str, json: bool) -> CliResult {
    let mut companion = open_companion()?;
    let profile = companion.reflect(text)?;

    if json {
        return print_json(profile);
    }

    match profile.dominant_emotion {
        Some(emotion) => println!("Emotion:   {} ({})", emotion.label(), emotion),
        None => println!("Emotion:   none"),
    }
    println!("Intensity: {} ({})", profile.intensity.label(), profile.intensity);
    for score in &profile.scores {
        println!(
            "  {:<10} {:>5.1}%  [{}]",
            score.emotion.to_string(),
            score.confidence * 100.0,
            score.keywords.join(", ")
        );
    }
    Ok(())
}
