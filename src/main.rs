//! PeacePal CLI
//!
//! Command-line interface for PeacePal:
//! - Classify journal text
//! - Walk a scripted session through the reducer
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use peacepal::config::{generate_default_config, Config};
use peacepal::content::TextFormat;
use peacepal::state::{Action, AppState, Session, WriterPresenter};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "peacepal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wellness journal engine: sentiment, moods and a garden")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify journal text
    Classify {
        /// Text to classify (default: read stdin)
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Run a scripted session and print every effect
    Demo {
        /// Seed for reproducible message picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    peacepal::logging::init(&config.logging);

    match cli.command {
        Commands::Classify { text, file, format } => {
            let text = read_input(text, file)?;
            classify(&config, &text, format)?;
        }

        Commands::Demo { seed } => demo(&config, seed)?,

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

fn classify(config: &Config, text: &str, format: OutputFormat) -> anyhow::Result<()> {
    let classifier = config.classifier();
    let result = classifier.classify(text);
    let keywords = classifier.score(text);

    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "positive": result.positive,
                "neutral": result.neutral,
                "negative": result.negative,
                "dominant": result.dominant,
                "keywords": keywords,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Table => {
            println!("{:<10} {:>8}", "Sentiment", "Percent");
            println!("{}", "-".repeat(19));
            println!("{:<10} {:>7}%", "positive", result.positive);
            println!("{:<10} {:>7}%", "neutral", result.neutral);
            println!("{:<10} {:>7}%", "negative", result.negative);
            println!();
            println!("Dominant: {}", result.dominant);
            println!(
                "Keywords: {} positive, {} negative",
                keywords.positive, keywords.negative
            );
        }
    }

    Ok(())
}

fn demo(config: &Config, seed: Option<u64>) -> anyhow::Result<()> {
    let initial = AppState::new(config.session.user_name.clone());
    let reducer = config.reducer();
    let mut session = match seed.or(config.session.rng_seed) {
        Some(seed) => Session::with_seed(initial, reducer, seed),
        None => Session::new(initial, reducer),
    };

    let script = vec![
        Action::CharacterClicked {
            character: "fox".to_string(),
        },
        Action::PlantClicked {
            plant: "sunflowers".to_string(),
        },
        Action::ContinueJourney,
        Action::OpenMoodLogger,
        Action::SelectMood { mood: 5 },
        Action::LogMood,
        Action::SwitchTab {
            tab: "journal".to_string(),
        },
        Action::JournalInput {
            text: "Today was wonderful, a peaceful walk in nature with good friends".to_string(),
        },
        Action::FormatText {
            format: TextFormat::Bold,
        },
        Action::SwitchTab {
            tab: "dashboard".to_string(),
        },
    ];

    let stdout = std::io::stdout();
    let mut presenter = WriterPresenter::new(stdout.lock());

    for action in script {
        println!("> {}", action.name());
        if let Err(e) = session.dispatch_to(action, &mut presenter) {
            bail!("Demo action failed: {}", e);
        }
    }

    let state = session.state();
    println!();
    println!(
        "{}: {} points, level {}, garden {}%",
        state.user.name, state.user.points, state.user.level, state.user.garden_progress
    );
    println!("Mood history: {:?}", state.mood.history);
    println!("Journal: {}", state.journal.sentiment);

    Ok(())
}
