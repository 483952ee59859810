mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daybook",
    version,
    about = "Extract, browse and edit daily English lessons from a textbook PDF"
)]
struct Cli {
    /// Configuration file (default: ./daybook.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every lesson from the source PDF into the lesson store
    Extract {
        /// Source PDF (overrides the configured path)
        #[arg(long, value_name = "FILE")]
        pdf: Option<PathBuf>,

        /// Run pdftotext in -layout mode
        #[arg(long)]
        layout: bool,

        /// Output format for the summary: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Summarize the lesson store
    Report {
        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List the lessons in the store
    List,
    /// Show one lesson
    Show {
        /// Lesson number or label ("5", "day5", "DAY 005")
        lesson: String,

        /// Show the lesson after the given one
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Show the lesson before the given one
        #[arg(long)]
        prev: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Render a printable worksheet for one lesson
    Worksheet {
        /// Lesson number or label
        lesson: String,

        /// Write the worksheet to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the audio file for one lesson
    Audio {
        /// Lesson number or label
        lesson: String,
    },
    /// Edit one lesson in place
    Edit {
        /// Lesson number or label
        lesson: String,

        #[command(subcommand)]
        action: EditAction,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Subcommand)]
enum EditAction {
    /// Replace the title
    Title { title: String },
    /// Append an empty dialogue line
    AddLine,
    /// Overwrite one dialogue line
    SetLine {
        /// Zero-based line index
        index: usize,
        /// Speaker: A or B
        speaker: String,
        /// English sentence
        source: String,
        /// Korean translation
        translation: String,
    },
    /// Remove dialogue lines with no text
    Prune,
    /// Replace the patterns with the lines of a text file
    Patterns {
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },
    /// Replace the practice items with the lines of a text file
    Practice {
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = daybook_core::config::DaybookConfig::load(cli.config.as_deref()).and_then(
        |config| match cli.command {
            Commands::Extract {
                pdf,
                layout,
                output,
            } => commands::extract::run(config, pdf, layout, &output),
            Commands::Report { output } => commands::report::run(&config, &output),
            Commands::List => commands::browse::list(&config),
            Commands::Show {
                lesson,
                next,
                prev,
                output,
            } => commands::browse::show(&config, &lesson, next, prev, &output),
            Commands::Worksheet { lesson, out } => commands::worksheet::run(&config, &lesson, out),
            Commands::Audio { lesson } => commands::browse::audio(&config, &lesson),
            Commands::Edit { lesson, action } => commands::edit::run(&config, &lesson, action),
            Commands::Config => commands::report::config(&config),
        },
    );

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
