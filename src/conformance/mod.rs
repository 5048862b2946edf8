//! Test-vector conformance for the Curl hash.
//!
//! A corpus is a JSON file holding a manifest (the parameters the vectors
//! were produced with) and a list of vectors, each naming an operation, its
//! input, and either the expected output or the expected error code. Vectors
//! are compared on their text form: trit strings for states and digests,
//! numbers for offsets, trits and error codes.

pub mod corpus;

pub use corpus::{Corpus, CorpusManifest, CorpusResults, CorpusRunner, TestResult, TestVector};

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading a corpus.
#[derive(Debug)]
pub enum ConformanceError {
    /// The corpus file could not be read
    IoError(String),
    /// The corpus file is not a valid corpus document
    ParseError(String),
}

impl std::fmt::Display for ConformanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "Failed to read corpus file: {}", msg),
            Self::ParseError(msg) => write!(f, "Failed to parse corpus JSON: {}", msg),
        }
    }
}

impl std::error::Error for ConformanceError {}
