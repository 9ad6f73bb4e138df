// Signature comparison: weighted distance and nearest-author selection.

pub mod classify;
pub mod distance;

pub use classify::{find_closest, rank, Prediction};
pub use distance::{distance, FeatureWeights};
