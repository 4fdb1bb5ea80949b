mod analyze;
mod evaluate;
mod render;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::analyze::SourceCommand;

#[derive(Debug, Parser)]
#[command(name = "moodlens")]
#[command(about = "Sentiment breakdown for posts, video comments and web pages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect texts from one source, classify them and show the breakdown
    Analyze {
        #[command(subcommand)]
        source: SourceCommand,
    },
    /// Score exported predictions against a labeled reference CSV
    Evaluate {
        /// CSV exported by `analyze --csv`
        #[arg(long, value_name = "PATH")]
        predictions: PathBuf,

        /// CSV with `text,label` columns holding the expected labels
        #[arg(long, value_name = "PATH")]
        truth: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = moodlens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze { source }) => analyze::run_analyze(&config, source).await,
        Some(Commands::Evaluate { predictions, truth }) => {
            evaluate::run_evaluate(&predictions, &truth)
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
