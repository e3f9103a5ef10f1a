use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use kairos_core::{EmotionTag, IntensityLevel};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "kairos", version, about = "Kairos presence companion CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify how a piece of text feels
    Analyze {
        /// Free text, e.g. a journal entry
        text: String,
        /// Print the full profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compose a guided environment (defaults to the last analyzed profile)
    Environment {
        /// Emotion, in English or Portuguese (e.g. "anxiety", "ansiedade")
        #[arg(long)]
        emotion: Option<EmotionTag>,
        /// low, medium or high
        #[arg(long)]
        intensity: Option<IntensityLevel>,
    },
    /// Presence points and levels
    Points {
        #[command(subcommand)]
        action: commands::points::PointsAction,
    },
    /// Guided scenario practice
    Scenario {
        #[command(subcommand)]
        action: commands::scenario::ScenarioAction,
    },
    /// Print a breathing guide schedule
    Breathe {
        #[arg(long)]
        emotion: Option<EmotionTag>,
        /// Number of full cycles
        #[arg(long, default_value = "3")]
        cycles: u32,
        /// Award points for a completed breathing session
        #[arg(long)]
        record: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn init_tracing() {
    let fallback = kairos_core::Config::load_or_default().logging.filter;
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Analyze { text, json } => commands::analyze::run(&text, json),
        Commands::Environment { emotion, intensity } => {
            commands::environment::run(emotion, intensity)
        }
        Commands::Points { action } => commands::points::run(action),
        Commands::Scenario { action } => commands::scenario::run(action),
        Commands::Breathe {
            emotion,
            cycles,
            record,
        } => commands::breathe::run(emotion, cycles, record),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "kairos", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
