// Unit tests for the distance metric and nearest-author selection.
//
// Tests isolated pure functions: distance symmetry and identity, weight
// defaults, find_closest tie and empty-store behavior, and rank ordering.

use inkprint::scoring::{distance, find_closest, rank, FeatureWeights};
use inkprint::signature::{Feature, Signature, SignatureStore};

fn sig(values: [f64; 5]) -> Signature {
    Signature {
        average_word_length: values[0],
        different_to_total: values[1],
        exactly_once_to_total: values[2],
        average_sentence_length: values[3],
        average_sentence_complexity: values[4],
    }
}

fn sample_signatures() -> Vec<Signature> {
    vec![
        Signature::default(),
        sig([4.1, 0.62, 0.41, 7.5, 1.1]),
        sig([5.3, 0.48, 0.29, 11.0, 1.6]),
        Signature::from_text("Rhymes like dimes, the mic is mine\nI spit it in time"),
        Signature::from_text("Quietly, deliberately; the narrator paused."),
    ]
}

// ============================================================
// FeatureWeights
// ============================================================

#[test]
fn default_weights_are_the_tuned_table() {
    let w = FeatureWeights::default();
    assert_eq!(w.get(Feature::AverageWordLength), 11.0);
    assert_eq!(w.get(Feature::DifferentToTotal), 33.0);
    assert_eq!(w.get(Feature::ExactlyOnceToTotal), 50.0);
    assert_eq!(w.get(Feature::AverageSentenceLength), 1.5);
    assert_eq!(w.get(Feature::AverageSentenceComplexity), 4.0);
}

#[test]
fn default_weights_are_positive() {
    let w = FeatureWeights::default();
    for feature in Feature::ALL {
        assert!(w.get(feature) > 0.0, "{feature}");
    }
}

// ============================================================
// distance
// ============================================================

#[test]
fn distance_is_symmetric() {
    let w = FeatureWeights::default();
    let sigs = sample_signatures();
    for a in &sigs {
        for b in &sigs {
            assert_eq!(distance(a, b, &w), distance(b, a, &w));
        }
    }
}

#[test]
fn distance_to_self_is_zero() {
    let w = FeatureWeights::default();
    for a in sample_signatures() {
        assert_eq!(distance(&a, &a, &w), 0.0);
    }
}

#[test]
fn distance_is_non_negative() {
    let w = FeatureWeights::default();
    let sigs = sample_signatures();
    for a in &sigs {
        for b in &sigs {
            assert!(distance(a, b, &w) >= 0.0);
        }
    }
}

#[test]
fn word_length_dominates_without_compensation() {
    // One unit of word length outweighs a 0.3 swing in type-token ratio
    let w = FeatureWeights::default();
    let base = sig([4.0, 0.5, 0.3, 6.0, 1.0]);
    let longer_words = sig([5.0, 0.5, 0.3, 6.0, 1.0]);
    let richer_vocab = sig([4.0, 0.8, 0.3, 6.0, 1.0]);
    assert!(distance(&base, &longer_words, &w) > distance(&base, &richer_vocab, &w));
}

// ============================================================
// find_closest / rank
// ============================================================

#[test]
fn empty_store_yields_none() {
    let w = FeatureWeights::default();
    assert!(find_closest(&sig([4.0, 0.5, 0.3, 6.0, 1.0]), &SignatureStore::new(), &w).is_none());
    assert!(rank(&Signature::default(), &SignatureStore::new(), &w).is_empty());
}

#[test]
fn single_author_always_wins() {
    let mut store = SignatureStore::new();
    store.insert("Solo", sig([9.0, 0.1, 0.0, 40.0, 5.0]));
    let p = find_closest(&Signature::default(), &store, &FeatureWeights::default()).unwrap();
    assert_eq!(p.author, "Solo");
}

#[test]
fn classification_is_deterministic() {
    let mut store = SignatureStore::new();
    for (i, s) in sample_signatures().into_iter().enumerate() {
        store.insert(format!("author-{i}"), s);
    }
    let unknown = sig([4.5, 0.55, 0.35, 9.0, 1.3]);
    let w = FeatureWeights::default();

    let first = find_closest(&unknown, &store, &w).unwrap();
    for _ in 0..10 {
        assert_eq!(find_closest(&unknown, &store, &w).unwrap(), first);
    }
}

#[test]
fn exact_match_has_zero_distance() {
    let target = sig([4.1, 0.62, 0.41, 7.5, 1.1]);
    let mut store = SignatureStore::new();
    store.insert("Other", sig([5.3, 0.48, 0.29, 11.0, 1.6]));
    store.insert("Target", target);

    let p = find_closest(&target, &store, &FeatureWeights::default()).unwrap();
    assert_eq!(p.author, "Target");
    assert_eq!(p.distance, 0.0);
}

#[test]
fn rank_is_sorted_ascending() {
    let mut store = SignatureStore::new();
    for (i, s) in sample_signatures().into_iter().enumerate() {
        store.insert(format!("author-{i}"), s);
    }
    let ranked = rank(&sig([4.5, 0.55, 0.35, 9.0, 1.3]), &store, &FeatureWeights::default());
    assert_eq!(ranked.len(), store.len());
    assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
}
