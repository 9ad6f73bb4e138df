use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::signature::cache::CACHE_FILE_NAME;
use crate::signature::StoreLoader;

/// Default folder names under the corpus root.
pub const DEFAULT_LABELED_DIR: &str = "labeled-lyrics";
pub const DEFAULT_UNLABELED_DIR: &str = "unlabeled-lyrics";

/// Runtime configuration: corpus layout plus env-var overrides.
///
/// A .env file is loaded at startup via dotenvy, so any of these can live
/// there instead of the shell environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Texts with known authors (file stem = author)
    pub labeled_dir: PathBuf,
    /// Texts to attribute
    pub unlabeled_dir: PathBuf,
    /// Extension of text files, without the dot (INKPRINT_EXTENSION, default "txt")
    pub extension: String,
    /// Cache file inside the labeled directory (INKPRINT_CACHE_FILE)
    pub cache_file_name: String,
    /// Extraction worker threads, 0 = one per core (INKPRINT_WORKERS)
    pub workers: usize,
}

impl Config {
    /// Resolve the configuration for a corpus root.
    ///
    /// Folder names come from INKPRINT_LABELED_DIR / INKPRINT_UNLABELED_DIR
    /// and default to `labeled-lyrics` / `unlabeled-lyrics`.
    pub fn load(corpus_root: &Path) -> Result<Self> {
        let labeled = env::var("INKPRINT_LABELED_DIR").unwrap_or_else(|_| DEFAULT_LABELED_DIR.to_string());
        let unlabeled =
            env::var("INKPRINT_UNLABELED_DIR").unwrap_or_else(|_| DEFAULT_UNLABELED_DIR.to_string());

        let workers = match env::var("INKPRINT_WORKERS") {
            Ok(raw) => parse_workers(&raw)?,
            Err(_) => 0,
        };

        Ok(Self {
            labeled_dir: corpus_root.join(labeled),
            unlabeled_dir: corpus_root.join(unlabeled),
            extension: env::var("INKPRINT_EXTENSION").unwrap_or_else(|_| "txt".to_string()),
            cache_file_name: env::var("INKPRINT_CACHE_FILE")
                .unwrap_or_else(|_| CACHE_FILE_NAME.to_string()),
            workers,
        })
    }

    /// Check that the labeled directory exists.
    /// Call this before building or loading signatures.
    pub fn require_labeled(&self) -> Result<()> {
        if !self.labeled_dir.is_dir() {
            anyhow::bail!(
                "Could not find '{}'.\n\
                 Ensure the corpus has a labeled folder (or set INKPRINT_LABELED_DIR).",
                self.labeled_dir.display()
            );
        }
        Ok(())
    }

    /// Check that the unlabeled directory exists.
    pub fn require_unlabeled(&self) -> Result<()> {
        if !self.unlabeled_dir.is_dir() {
            anyhow::bail!(
                "Could not find '{}'.\n\
                 Ensure the corpus has an unlabeled folder (or set INKPRINT_UNLABELED_DIR).",
                self.unlabeled_dir.display()
            );
        }
        Ok(())
    }

    /// Store loader matching this configuration.
    pub fn store_loader(&self) -> StoreLoader {
        StoreLoader {
            extension: self.extension.clone(),
            cache_file_name: self.cache_file_name.clone(),
            workers: self.workers,
        }
    }
}

/// Parse a worker count; surrounding whitespace is ignored.
pub fn parse_workers(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .with_context(|| format!("INKPRINT_WORKERS must be a whole number, got {raw:?}"))
}
