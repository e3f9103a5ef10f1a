use clap::Subcommand;
use kairos_core::{ActivityEvent, ActivityKind};

use super::{open_companion, print_json, CliResult};

#[derive(Subcommand)]
pub enum PointsAction {
    /// Record an activity (e.g. "daily_reflection_deep")
    Record {
        /// Activity type; unknown types earn the fallback value
        activity_type: String,
    },
    /// Print current progression as JSON
    Status,
    /// List recent activities with their points
    Recent {
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// List every known activity type and its points
    Types,
}

pub fn run(action: PointsAction) -> CliResult {
    match action {
        PointsAction::Record { activity_type } => {
            let mut companion = open_companion()?;
            let state = companion.record(ActivityEvent::now(activity_type.as_str()))?;
            for event in companion.drain_events() {
                if let kairos_core::Event::LevelUp { level, level_name, .. } = event {
                    eprintln!("Level up! {level}: {level_name}");
                }
            }
            print_json(&state)?;
        }
        PointsAction::Status => {
            let companion = open_companion()?;
            print_json(&companion.progression())?;
        }
        PointsAction::Recent { limit } => {
            let companion = open_companion()?;
            print_json(&companion.recent(limit))?;
        }
        PointsAction::Types => {
            for kind in ActivityKind::known() {
                println!(
                    "{:<34} {:>4}  {}",
                    kind.as_str(),
                    kind.points().unwrap_or_default(),
                    kind.description()
                );
            }
        }
    }
    Ok(())
}
