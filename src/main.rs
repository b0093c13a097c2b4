//! Lanai - command line entrypoint.
//!
//! Replays the reference trie scenario, runs the concurrent stress workload,
//! and manages configuration files.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig, DEFAULT_CONFIG_PATH, ENV_PREFIX};
use lanai_lib::data_structures::{MauiTrie, OahuHeap};
use lanai_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, LanaiError, LanaiResult,
    TracingErrorReporter,
};
use lanai_lib::workload::StressRunner;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Keys used by the `demo` scenario.
const DEMO_KEYS: [&str; 4] = ["hello", "hi", "here", "fjdsngfjasd"];

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Replay the reference insert/search/delete scenario
    Demo,

    /// Run the concurrent stress workload against a trie
    Stress {
        /// Print the report as JSON on stdout
        #[clap(long)]
        json: bool,
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
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(log.thread_names)
        .with_writer(std::io::stderr);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    installed
        .map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Load configuration from the given file, or from the default location.
fn load_config(path: Option<&Path>) -> LanaiResult<LanaiConfig> {
    match path {
        Some(path) => {
            set_error_reporter(Arc::new(TracingErrorReporter));
            Ok(ConfigLoader::new(Some(path), ENV_PREFIX).load()?)
        }
        None => lanai_lib::init(),
    }
}

/// Report a fatal error and terminate.
fn fail(error: LanaiError, component: &str, details: String) -> ! {
    get_error_reporting().report(ErrorContext::new(error, component).with_details(details));
    process::exit(1);
}

fn print_presence(trie: &MauiTrie) {
    let line = DEMO_KEYS
        .iter()
        .map(|key| format!("{key}={}", trie.search(key)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
}

fn run_demo() {
    let trie = MauiTrie::new();
    for key in DEMO_KEYS {
        trie.insert(key);
    }

    println!("search(\"h\")={}", trie.search("h"));
    println!("search(\"\")={}", trie.search(""));
    print_presence(&trie);

    for key in ["hello", "fjdsngfjasd", "hi", "here", "here"] {
        info!(key, "Deleting key");
        trie.delete(key);
        print_presence(&trie);
    }
    info!(node_count = trie.node_count(), "Trie demo finished");

    let mut heap = OahuHeap::max_heap();
    for value in [7, 8, 1, 2, 3] {
        heap.insert(value);
        println!("{:?}", heap.as_slice());
    }
    while let Some(top) = heap.delete() {
        println!("{top} -> {:?}", heap.as_slice());
    }
}

/// Main entry point for the application.
fn main() -> LanaiResult<()> {
    let args = Args::parse();

    // Logging needs the config, so a load failure is held until logging is up.
    let loaded = load_config(args.config.as_deref());
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log)?;

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            let path = args
                .config
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
            fail(e, "config", format!("path={}", path.display()))
        }
    };

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            run_demo();
            Ok(())
        }
        Command::Stress { json } => {
            let details = format!(
                "writers={} readers={} keys_per_writer={}",
                config.workload.writer_threads,
                config.workload.reader_threads,
                config.workload.keys_per_writer
            );
            let report = match StressRunner::new(config.workload).run() {
                Ok(report) => report,
                Err(e) => fail(e, "workload", details),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                info!(
                    inserted = report.inserted,
                    deleted = report.deleted,
                    remaining = report.remaining,
                    lookups = report.lookups,
                    hits = report.hits,
                    node_count = report.node_count,
                    elapsed_ms = report.elapsed_ms,
                    "Stress report"
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
            let default_config = LanaiConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;

            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
