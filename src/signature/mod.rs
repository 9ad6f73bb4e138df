// Stylometric signatures: feature extraction and the cached per-author store.

pub mod cache;
pub mod features;
pub mod stats;
pub mod store;

pub use features::{Feature, Signature};
pub use stats::TextStats;
pub use store::{build_or_load, SignatureStore, StoreLoader};
