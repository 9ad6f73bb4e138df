// Pipelines that tie signatures, the store and the classifier together.

pub mod attribute;
