pub mod analyze;
pub mod breathe;
pub mod config;
pub mod environment;
pub mod points;
pub mod scenario;

use kairos_core::storage::Database;
use kairos_core::{Companion, CompanionSettings, Config, RandomPicker};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the companion over the on-disk database with the user's config.
pub fn open_companion() -> Result<Companion<Database>, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    let picker = RandomPicker::from_seed(config.scenarios.seed);
    tracing::debug!(seed = ?config.scenarios.seed, "opening companion");
    Ok(Companion::load(db, CompanionSettings::from(&config), picker)?)
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
