//! CAH Ollama - Main Binary
//!
//! Interactive Cards Against Humanity table with a local model as player and
//! judge

use anyhow::Context;
use cah_ollama::{
    client::{select_model, CompletionClient, OllamaClient},
    config::{Config, DEFAULT_PREFERRED_MODEL},
    game::{JudgePolicy, Session, TurnController, DEFAULT_HAND_SIZE},
    input::StdinLines,
    loader::WordListLoader,
    logging::init_logging,
    shell::Shell,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cah")]
#[command(about = "Cards Against Humanity with a local model as player and judge", long_about = None)]
struct Cli {
    /// Completion endpoint API base
    #[arg(long, env = "OLLAMA_URL", default_value = cah_ollama::client::ollama::DEFAULT_BASE_URL)]
    endpoint: String,

    /// Model to use if the endpoint offers it (falls back to the first listed)
    #[arg(long, default_value = DEFAULT_PREFERRED_MODEL)]
    preferred_model: String,

    /// Use this model without consulting the preference
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Play prompt template ({challenge}, {cards})
    #[arg(long, default_value = "prompts/baseprompt.txt")]
    play_template: PathBuf,

    /// Judge prompt template ({prompt}, {submissions})
    #[arg(long, default_value = "prompts/judgeprompt.txt")]
    judge_template: PathBuf,

    /// White card list, one card per line
    #[arg(long, default_value = "data/whiteCards.txt")]
    white_cards: PathBuf,

    /// Black card list, one card per line
    #[arg(long, default_value = "data/blackCards.txt")]
    black_cards: PathBuf,

    /// Cards dealt by `deal`
    #[arg(long, default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Report the judged winner as given, even if it matches no submission
    #[arg(long)]
    permissive_judge: bool,

    /// Set random seed for deterministic shuffling and dealing
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the progress spinner
    #[arg(long)]
    no_progress: bool,

    /// Abort completion requests after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Log level for diagnostics on stderr (RUST_LOG overrides)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            base_url: self.endpoint,
            preferred_model: self.preferred_model,
            model: self.model,
            play_template: self.play_template,
            judge_template: self.judge_template,
            white_cards: self.white_cards,
            black_cards: self.black_cards,
            hand_size: self.hand_size,
            judge_policy: if self.permissive_judge {
                JudgePolicy::Permissive
            } else {
                JudgePolicy::Strict
            },
            seed: self.seed,
            progress: !self.no_progress,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(cli.into_config()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let client = OllamaClient::new(&config.base_url, config.timeout)?;

    let models = client
        .list_models()
        .await
        .context("Failed to retrieve models")?;

    let model = match &config.model {
        Some(forced) => {
            if !models.contains(forced) {
                tracing::warn!(model = %forced, "requested model not listed by endpoint");
            }
            forced.clone()
        }
        None => select_model(&models, &config.preferred_model)
            .context("no selectable model")?
            .to_string(),
    };
    println!("Using model: {model}");

    let white = WordListLoader::load_from_file(&config.white_cards)?;
    let black = WordListLoader::load_from_file(&config.black_cards)?;
    tracing::info!(white = white.len(), black = black.len(), "word lists loaded");

    let session = Session::new(model, white, black, config.seed);
    let controller =
        TurnController::new(client, config.templates()).with_judge_policy(config.judge_policy);

    let mut shell = Shell::new(controller, session, StdinLines::new(), std::io::stdout())
        .with_hand_size(config.hand_size)
        .with_progress(config.progress);

    println!("Welcome to the interactive CLI. Type \"exit\" to quit or \"help\" for help.");
    shell.run().await?;
    Ok(())
}
