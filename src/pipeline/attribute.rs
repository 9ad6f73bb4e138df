// Attribution pipeline: unlabeled file(s) -> predicted author.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::scoring::{find_closest, FeatureWeights, Prediction};
use crate::signature::store::read_signature;
use crate::signature::{build_or_load, SignatureStore};

/// Outcome for one file in a batch run.
#[derive(Debug, Clone)]
pub struct BatchRow {
    pub file_name: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Predicted(Prediction),
    /// The store was empty
    NoMatch,
    /// The file couldn't be read; holds the error message
    Unreadable(String),
}

/// Predict the author of `file` against a prebuilt store.
pub fn attribute_file(
    file: &Path,
    store: &SignatureStore,
    weights: &FeatureWeights,
) -> Result<Option<Prediction>> {
    let signature = read_signature(file)?;
    Ok(find_closest(&signature, store, weights))
}

/// Predict the author of `file`, loading (or building) the labeled store.
pub fn guess_author(
    file: &Path,
    labeled_dir: &Path,
    weights: &FeatureWeights,
) -> Result<Option<Prediction>> {
    let store = build_or_load(labeled_dir, false)?;
    attribute_file(file, &store, weights)
}

/// Predict every file in order. An unreadable file becomes an
/// `Outcome::Unreadable` row instead of stopping the batch.
pub fn attribute_all(
    files: &[PathBuf],
    store: &SignatureStore,
    weights: &FeatureWeights,
) -> Vec<BatchRow> {
    let rows: Vec<BatchRow> = files
        .iter()
        .map(|file| {
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let outcome = match attribute_file(file, store, weights) {
                Ok(Some(prediction)) => Outcome::Predicted(prediction),
                Ok(None) => Outcome::NoMatch,
                Err(e) => {
                    warn!(file = %file.display(), error = %format!("{e:#}"), "Could not attribute file");
                    Outcome::Unreadable(format!("{e:#}"))
                }
            };

            BatchRow { file_name, outcome }
        })
        .collect();

    info!(files = rows.len(), "Batch attribution complete");
    rows
}
