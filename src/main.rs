use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use inkprint::config::Config;
use inkprint::corpus;
use inkprint::output::terminal;
use inkprint::pipeline::attribute;
use inkprint::scoring::{self, FeatureWeights};
use inkprint::signature::store::read_signature;
use inkprint::signature::SignatureStore;

/// inkprint: guess who wrote a text from its writing style.
///
/// Builds a five-feature stylometric signature for every labeled text,
/// caches them, and attributes unlabeled texts to the nearest signature.
#[derive(Parser)]
#[command(name = "inkprint", version, about)]
struct Cli {
    /// Corpus root containing the labeled and unlabeled folders
    corpus: PathBuf,

    /// Attribute every unlabeled text and print a table
    #[arg(long)]
    test_all: bool,

    /// Attribute this file instead of choosing interactively
    #[arg(long, conflicts_with = "test_all")]
    file: Option<PathBuf>,

    /// Ignore the signature cache and recompute it
    #[arg(long)]
    rebuild: bool,

    /// Print the labeled signature table
    #[arg(long)]
    signatures: bool,

    /// Worker threads for signature extraction (default: one per core)
    #[arg(long)]
    workers: Option<usize>,

    /// Number of runner-up authors to show for a single prediction
    #[arg(long, default_value = "3")]
    runners_up: usize,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("inkprint=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(&cli.corpus)?;
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    config.require_labeled()?;
    if cli.file.is_none() {
        config.require_unlabeled()?;
    }

    let weights = FeatureWeights::default();

    if cli.test_all {
        let files = corpus::list_texts(&config.unlabeled_dir, &config.extension)?;
        if files.is_empty() {
            anyhow::bail!(
                "No .{} files found in {}",
                config.extension,
                config.unlabeled_dir.display()
            );
        }

        let store = load_store(&config, cli.rebuild, cli.signatures)?;
        println!("Batch testing all files in {}...\n", config.unlabeled_dir.display());
        let rows = attribute::attribute_all(&files, &store, &weights);
        terminal::display_batch(&rows);
        return Ok(());
    }

    // The file is chosen before any signatures are built or loaded
    let file = match cli.file {
        Some(file) => file,
        None => {
            let stdin = io::stdin();
            corpus::choose_text(
                &config.unlabeled_dir,
                &config.extension,
                stdin.lock(),
                io::stdout(),
            )?
        }
    };

    let store = load_store(&config, cli.rebuild, cli.signatures)?;

    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    println!("\nAnalyzing '{}'...", file_name.bold());

    let signature = read_signature(&file)?;
    let ranked = scoring::rank(&signature, &store, &weights);
    let best = scoring::find_closest(&signature, &store, &weights);
    let runners_up: Vec<_> = ranked
        .into_iter()
        .filter(|p| Some(&p.author) != best.as_ref().map(|b| &b.author))
        .take(cli.runners_up)
        .collect();

    terminal::display_prediction(&file_name, best.as_ref(), &runners_up);

    Ok(())
}

/// Load or build the labeled signatures, optionally printing the table.
fn load_store(config: &Config, rebuild: bool, show: bool) -> Result<SignatureStore> {
    let store = config
        .store_loader()
        .build_or_load(&config.labeled_dir, rebuild)?;
    info!(authors = store.len(), "Signature store ready");

    if show {
        terminal::display_signatures(&store);
    }
    Ok(store)
}
