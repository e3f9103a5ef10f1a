use kairos_core::{ActivityEvent, ActivityKind, BreathingGuide, EmotionTag};

use super::{open_companion, CliResult};

/// Print one line per phase change, simulating one tick per second.
pub fn run(emotion: Option<EmotionTag>, cycles: u32, record: bool) -> CliResult {
    let mut companion = open_companion()?;
    let environment = match emotion {
        Some(emotion) => companion.compose(emotion, companion.environment().intensity),
        None => companion.environment(),
    };
    let pattern = environment.breathing_pattern.clone();
    println!(
        "{} ({}-{}-{}), {} cycle(s)",
        pattern.name, pattern.inhale_seconds, pattern.hold_seconds, pattern.exhale_seconds, cycles
    );

    let mut guide = BreathingGuide::new(pattern);
    let mut elapsed = 0u32;
    println!("{:02}:{:02}  {}", 0, 0, guide.instruction());
    while guide.cycles() < cycles {
        elapsed += 1;
        if guide.tick().is_some() && guide.cycles() < cycles {
            println!("{:02}:{:02}  {}", elapsed / 60, elapsed % 60, guide.instruction());
        }
    }
    println!("{:02}:{:02}  done", elapsed / 60, elapsed % 60);

    if record {
        let before = companion.progression().points;
        let state = companion.record(ActivityEvent::now(ActivityKind::BreathingSessionCompleted))?;
        println!(
            "+{} points, total {} ({})",
            state.points - before,
            state.points,
            state.level_name
        );
    }
    Ok(())
}
