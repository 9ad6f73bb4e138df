// inkprint: stylometric authorship attribution
//
// This is the library root. Text is tokenized (text), reduced to a
// five-feature signature (signature), and compared against a cached store
// of known-author signatures (scoring) to predict who wrote it (pipeline).

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod signature;
pub mod text;
