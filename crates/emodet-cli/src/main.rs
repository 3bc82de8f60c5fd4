//! emodet CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "emodet", version, about = "Emotion Detective — learn sentiment analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a piece of text for sentiment
    Analyze {
        /// Text to analyze; reads stdin when omitted
        #[arg(long)]
        text: Option<String>,

        /// Custom lexicon TOML file
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Thinking delay in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run the emotion detection quiz
    Quiz {
        /// Exercise set TOML file (built-in set when omitted)
        #[arg(long)]
        exercises: Option<PathBuf>,

        /// Scripted answers, comma-separated (e.g. "positive,negative,neutral")
        #[arg(long)]
        answers: Option<String>,

        /// Save the session report as JSON
        #[arg(long)]
        save: bool,

        /// Also render the session report as HTML
        #[arg(long)]
        html: bool,

        /// Output directory (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the guided story
    Story {
        /// Which section: intro, practice, all
        #[arg(long, default_value = "all")]
        section: String,
    },

    /// Validate exercise set or lexicon TOML files
    Validate {
        /// Path to an exercise set file or directory
        #[arg(long)]
        exercises: Option<PathBuf>,

        /// Path to a lexicon file
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Create a starter config and example exercise set
    Init,

    /// Show a saved session report
    Report {
        /// Saved JSON session report
        #[arg(long)]
        input: PathBuf,

        /// Re-render as HTML next to the JSON file
        #[arg(long)]
        html: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("emodet=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            text,
            lexicon,
            delay_ms,
            format,
            config,
        } => commands::analyze::execute(text, lexicon, delay_ms, format, config).await,
        Commands::Quiz {
            exercises,
            answers,
            save,
            html,
            output,
            config,
        } => commands::quiz::execute(exercises, answers, save, html, output, config),
        Commands::Story { section } => commands::story::execute(section),
        Commands::Validate { exercises, lexicon } => {
            commands::validate::execute(exercises, lexicon)
        }
        Commands::Init => commands::init::execute(),
        Commands::Report { input, html } => commands::report::execute(input, html),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
