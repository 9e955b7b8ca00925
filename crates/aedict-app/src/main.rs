//! Aedict command line: kanji and word analysis, verb inflection tables and
//! dictionary search over EDICT/KANJIDIC files.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use aedict_config::Config;
use aedict_core::preprocess::{AnalysisPreprocessor, DefaultPreprocessor, Preprocessor};
use aedict_core::types::SegmentMode;
use aedict_lang_japanese::{InflectionOptions, JapaneseProcessor};
use clap::{Parser, Subcommand};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::analyze::run_analysis;
use self::events::inflect::resolve_verb;
use self::events::run_blocking;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "aedict")]
#[command(version)]
#[command(about = "Japanese-English dictionary: kanji/word analysis and verb inflections")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file; takes precedence over --profile
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Named profile from the profiles directory
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text per character, or per word with --words
    Analyze {
        #[arg(long)]
        words: bool,
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Show the inflection table of a verb
    Inflect {
        /// Treat the verb as ichidan
        #[arg(long)]
        ichidan: bool,
        /// Include advanced forms
        #[arg(long)]
        advanced: bool,
        /// Show romaji instead of kana
        #[arg(long)]
        romaji: bool,
        /// Reading in kana or romaji, or the written form
        reading: String,
    },

    /// Search the dictionary by kana/kanji, romaji or English
    Search {
        #[arg(long)]
        substring: bool,
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Create a profile cloned from the main profile
    NewProfile { name: String },

    /// Interactive session reading lines from stdin (default)
    Repl,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match (&cli.config, &cli.profile) {
        (Some(path), _) => profile::load_config_file(path)?,
        (None, Some(name)) => {
            let dir = profile::profiles_dir()?;
            profile::init_user_config(&dir)?;
            profile::load_user_profile(&dir, name)?
        }
        (None, None) => Config::default(),
    };
    config.apply_env();
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(cli));

    // A pending stdin read holds a blocking thread until the next line
    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let timeout = Duration::from_millis(config.analysis_timeout_ms);
    let processor = Arc::new(JapaneseProcessor::from_config(&config.dictionary));
    let cancel = CancellationToken::new();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Analyze { words, text } => {
            let text = AnalysisPreprocessor.process(&text.join(" "));
            let mode = if words {
                SegmentMode::PerWord
            } else {
                SegmentMode::PerCharacter
            };
            if let Some(entries) = run_analysis(processor, text, mode, timeout, &cancel).await {
                print!("{}", ui::render_entries(&entries, &config.ui));
            }
        }
        Commands::Inflect {
            ichidan,
            advanced,
            romaji,
            reading,
        } => {
            let mut ui_config = config.ui.clone();
            ui_config.use_romaji |= romaji;
            ui_config.basic_inflections_only &= !advanced;
            let options = InflectionOptions::from_config(&ui_config);

            let groups = run_blocking(&cancel, timeout, move || {
                let entry = resolve_verb(&processor, &reading, ichidan, &ui_config);
                processor.inflections(&entry, options)
            })
            .await;
            if let Some(groups) = groups {
                print!("{}", ui::render_inflections(&groups?));
            }
        }
        Commands::Search { substring, query } => {
            let query = DefaultPreprocessor.process(&query.join(" "));
            let ui_config = config.ui.clone();
            let found = run_blocking(&cancel, timeout, move || {
                processor.search(&query, !substring, &ui_config)
            })
            .await;
            if let Some(found) = found {
                let entries = found??;
                if entries.is_empty() {
                    println!("No matches");
                }
                print!("{}", ui::render_entries(&entries, &config.ui));
            }
        }
        Commands::NewProfile { name } => {
            let dir = profile::profiles_dir()?;
            profile::init_user_config(&dir)?;
            let path = profile::add_profile_from_default(&dir, &name)?;
            println!("{}", path.display());
        }
        Commands::Repl => run_repl(Arc::new(AppState::new(config)), processor).await,
    }

    Ok(())
}

async fn run_repl(state: Arc<AppState>, processor: Arc<JapaneseProcessor>) {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(processor);

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
                tasks.abort_all();
            }
            next = tasks.join_next() => match next {
                None => break,
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task exited: {e}");
                    controller.shutdown();
                    tasks.abort_all();
                }
                Some(Err(e)) if e.is_cancelled() => {}
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    controller.shutdown();
                    tasks.abort_all();
                }
            },
        }
    }

    controller.shutdown();
}
