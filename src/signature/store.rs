// Signature store: author -> signature for a labeled corpus directory.
//
// Built by extracting every text file on a bounded rayon pool, then cached
// as JSON next to the texts. Per-file failures are logged and skipped; only
// setup errors (unreadable directory, pool creation) fail the call.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::cache::{load_cache, save_cache, CACHE_FILE_NAME};
use super::features::Signature;
use crate::corpus;

/// Author identity -> signature, iterated in author-name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureStore {
    signatures: BTreeMap<String, Signature>,
}

impl SignatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, author: impl Into<String>, signature: Signature) {
        self.signatures.insert(author.into(), signature);
    }

    pub fn get(&self, author: &str) -> Option<&Signature> {
        self.signatures.get(author)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Signature)> + '_ {
        self.signatures.iter().map(|(a, s)| (a.as_str(), s))
    }
}

impl FromIterator<(String, Signature)> for SignatureStore {
    fn from_iter<I: IntoIterator<Item = (String, Signature)>>(iter: I) -> Self {
        Self {
            signatures: iter.into_iter().collect(),
        }
    }
}

/// How a labeled corpus is turned into a store.
#[derive(Debug, Clone)]
pub struct StoreLoader {
    /// File extension (without the dot) of labeled texts
    pub extension: String,
    /// Cache file name inside the corpus directory
    pub cache_file_name: String,
    /// Worker threads for extraction; 0 means one per core
    pub workers: usize,
}

impl Default for StoreLoader {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            cache_file_name: CACHE_FILE_NAME.to_string(),
            workers: 0,
        }
    }
}

impl StoreLoader {
    pub fn cache_path(&self, corpus_dir: &Path) -> PathBuf {
        corpus_dir.join(&self.cache_file_name)
    }

    /// Load the cached store for `corpus_dir`, or build and cache it.
    ///
    /// A cache that can't be read or parsed is treated as missing. A cache
    /// that can't be written is logged; the built store is returned anyway.
    pub fn build_or_load(&self, corpus_dir: &Path, force_rebuild: bool) -> Result<SignatureStore> {
        let cache_path = self.cache_path(corpus_dir);

        if cache_path.exists() && !force_rebuild {
            match load_cache(&cache_path) {
                Ok(store) => {
                    info!(
                        path = %cache_path.display(),
                        authors = store.len(),
                        "Loaded cached signatures"
                    );
                    return Ok(store);
                }
                Err(e) => {
                    warn!(error = %format!("{e:#}"), "Signature cache unusable, rebuilding");
                }
            }
        }

        let store = self.build(corpus_dir)?;

        match save_cache(&cache_path, &store) {
            Ok(()) => info!(path = %cache_path.display(), "Signatures saved"),
            Err(e) => warn!(error = %format!("{e:#}"), "Could not save signature cache"),
        }

        Ok(store)
    }

    /// Extract a signature for every labeled text, ignoring the cache.
    pub fn build(&self, corpus_dir: &Path) -> Result<SignatureStore> {
        let cache_path = self.cache_path(corpus_dir);
        let files: Vec<PathBuf> = corpus::list_texts(corpus_dir, &self.extension)?
            .into_iter()
            .filter(|p| *p != cache_path)
            .collect();

        info!(
            dir = %corpus_dir.display(),
            files = files.len(),
            workers = self.workers,
            "Calculating signatures"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .context("Failed to start signature worker pool")?;

        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar().template("  Signatures [{bar:30}] {pos}/{len} ({eta})")?,
        );

        let results: Vec<(&PathBuf, Result<Signature>)> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let result = read_signature(path);
                    pb.inc(1);
                    (path, result)
                })
                .collect()
        });
        pb.finish_and_clear();

        let mut store = SignatureStore::new();
        for (path, result) in results {
            match result {
                Ok(signature) => {
                    store.insert(author_name(path), signature);
                }
                Err(e) => {
                    warn!(
                        file = %path.display(),
                        error = %format!("{e:#}"),
                        "Could not process file, skipping"
                    );
                }
            }
        }

        Ok(store)
    }
}

/// Load or build the store for `corpus_dir` with default settings.
pub fn build_or_load(corpus_dir: &Path, force_rebuild: bool) -> Result<SignatureStore> {
    StoreLoader::default().build_or_load(corpus_dir, force_rebuild)
}

/// Read a UTF-8 text file and extract its signature.
pub fn read_signature(path: &Path) -> Result<Signature> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Signature::from_text(&text))
}

/// Author identity of a labeled file: its name with the last extension removed.
pub fn author_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
