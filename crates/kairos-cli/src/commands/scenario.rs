use clap::Subcommand;
use serde_json::json;

use super::{open_companion, print_json, CliResult};

#[derive(Subcommand)]
pub enum ScenarioAction {
    /// Draw a scenario, biased by the last analyzed emotion
    Start,
    /// Choose a response by id
    Choose {
        choice_id: String,
    },
    /// Finish the scenario and earn points
    Complete {
        #[arg(long, default_value = "")]
        reflection: String,
    },
    /// Draw the next scenario after completing one
    New,
    /// Drop the scenario in progress without completing it
    Abandon,
    /// Leave the simulator
    Exit,
    /// Print the session state as JSON
    Status,
}

pub fn run(action: ScenarioAction) -> CliResult {
    let mut companion = open_companion()?;
    match action {
        ScenarioAction::Start => {
            let scenario = companion.start_scenario()?;
            print_json(&scenario)?;
        }
        ScenarioAction::New => {
            let scenario = companion.start_new_scenario()?;
            print_json(&scenario)?;
        }
        ScenarioAction::Choose { choice_id } => {
            let feedback = companion.select_choice(&choice_id)?;
            print_json(&feedback)?;
        }
        ScenarioAction::Complete { reflection } => {
            let (result, state) = companion.complete_scenario(&reflection)?;
            print_json(&json!({
                "scenario_id": result.scenario.id,
                "choice_id": result.choice.id,
                "presence_level": result.presence_level,
                "presence_name": result.presence_level.name(),
                "progression": state,
            }))?;
        }
        ScenarioAction::Abandon => {
            let scenario = companion.abandon_scenario()?;
            println!("abandoned {}", scenario.id);
        }
        ScenarioAction::Exit => {
            companion.exit_scenario()?;
            println!("simulator exited");
        }
        ScenarioAction::Status => {
            let engine = companion.scenarios();
            print_json(&json!({
                "state": engine.state(),
                "active_scenario": engine.active_scenario().map(|s| &s.id),
                "selected_choice": engine.selected_choice().map(|c| &c.id),
                "completed": engine.history().len(),
                "recent_ids": engine.recent_ids(),
            }))?;
        }
    }
    Ok(())
}
