//! Quill - Main entrypoint.
//!
//! Reads reference and sample texts from disk, runs the classifier, and prints
//! the scores. Logging goes to stderr so stdout carries only results.

use clap::{Parser, Subcommand};
use quill_lib::bench::compare_stores;
use quill_lib::config::{ConfigLoader, LogConfig, QuillConfig, ENV_PREFIX};
use quill_lib::error::{ErrorContext, ErrorReporter, QuillError, QuillResult, TracingErrorReporter};
use quill_lib::markov::{KGramModel, SpeakerClassifier, StoreKind};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Quill.
#[derive(Parser, Debug)]
#[clap(name = "quill", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Identify which of two speakers most likely produced a sample
    Identify {
        /// Reference text for speaker A
        file_a: PathBuf,

        /// Reference text for speaker B
        file_b: PathBuf,

        /// Sample text of unknown origin
        file_c: PathBuf,

        /// Model order (overrides configuration)
        #[clap(short, long)]
        k: Option<usize>,

        /// Backing store, "hashtable" or "dict" (overrides configuration)
        #[clap(short, long, value_parser)]
        store: Option<StoreKind>,
    },

    /// Time classification with each backing store across model orders
    CompareStores {
        /// Reference text for speaker A
        file_a: PathBuf,

        /// Reference text for speaker B
        file_b: PathBuf,

        /// Sample text of unknown origin
        file_c: PathBuf,

        /// Highest model order to time
        #[clap(long)]
        max_k: usize,

        /// Repetitions per order and store
        #[clap(long, default_value_t = 3)]
        runs: u32,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> QuillResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    installed
        .map_err(|e| QuillError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn read_text(path: &Path) -> QuillResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        QuillError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })
}

fn run(command: Command, config: QuillConfig) -> QuillResult<()> {
    match command {
        Command::Identify {
            file_a,
            file_b,
            file_c,
            k,
            store,
        } => {
            let k = k.unwrap_or(config.model.k);
            let store = store.unwrap_or(config.model.store);
            info!(k, %store, "Identifying speaker");

            let classifier = SpeakerClassifier::new(
                KGramModel::with_table_config(k, read_text(&file_a)?, store, &config.table)?,
                KGramModel::with_table_config(k, read_text(&file_b)?, store, &config.table)?,
            );
            let result = classifier.identify(&read_text(&file_c)?)?;

            println!("Speaker A: {}", result.score_a);
            println!("Speaker B: {}", result.score_b);
            println!("Conclusion: Speaker {} most likely", result.verdict);
            Ok(())
        }
        Command::CompareStores {
            file_a,
            file_b,
            file_c,
            max_k,
            runs,
        } => {
            info!(max_k, runs, "Comparing backing stores");
            let timings = compare_stores(
                &read_text(&file_a)?,
                &read_text(&file_b)?,
                &read_text(&file_c)?,
                max_k,
                runs,
            )?;

            println!("{:<10} {:>3} {:>14}", "store", "k", "mean (s)");
            for timing in timings {
                println!(
                    "{:<10} {:>3} {:>14.6}",
                    timing.store,
                    timing.k,
                    timing.mean.as_secs_f64()
                );
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = QuillConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| QuillError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Logging settings come from the configuration, so load it first and fall
    // back to default logging if it is broken.
    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log_config = config
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }

    let result = config
        .map_err(QuillError::from)
        .and_then(|config| run(args.command, config));

    if let Err(error) = result {
        TracingErrorReporter.report(ErrorContext::new(error, "quill"));
        process::exit(1);
    }
}
