// Nearest-signature classification.
//
// The predicted author is the store entry with the smallest weighted
// distance. Ties keep the first author in store order (strict `<`).

use crate::signature::{Signature, SignatureStore};

use super::distance::{distance, FeatureWeights};

/// A candidate author and its distance from the unknown signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub author: String,
    pub distance: f64,
}

/// Find the closest author, or `None` if the store is empty.
pub fn find_closest(
    unknown: &Signature,
    store: &SignatureStore,
    weights: &FeatureWeights,
) -> Option<Prediction> {
    let mut best: Option<(&str, f64)> = None;

    for (author, known) in store.iter() {
        let d = distance(unknown, known, weights);
        if best.map_or(true, |(_, smallest)| d < smallest) {
            best = Some((author, d));
        }
    }

    best.map(|(author, distance)| Prediction {
        author: author.to_string(),
        distance,
    })
}

/// Every author ranked by ascending distance. Ties stay in store order.
pub fn rank(unknown: &Signature, store: &SignatureStore, weights: &FeatureWeights) -> Vec<Prediction> {
    let mut ranked: Vec<Prediction> = store
        .iter()
        .map(|(author, known)| Prediction {
            author: author.to_string(),
            distance: distance(unknown, known, weights),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
