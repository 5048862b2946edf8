//! Corpus-based conformance testing.
//!
//! Loads test vectors from a corpus file and runs them against the Curl
//! implementation.
//!
//! Supported operations:
//!
//! - `index_table` - a window of the index table
//! - `substitute` - canonical substitution of two raw values
//! - `transform` - one transform over a full 729-trit state
//! - `hash` / `hash_padded` - one-shot digests
//! - `absorb_sequence` - several absorb calls on one sponge
//! - `absorb_transform` - absorb, then extra transforms before squeezing

use super::{ConformanceError, ConformanceResult};
use crate::curl::{
    hash, hash_padded, substitute, transform, IndexTable, Sponge, SpongeState, SubstitutionTable,
    HASH_LENGTH, NUMBER_OF_ROUNDS, PARAMS_VERSION, STATE_WIDTH,
};
use crate::error::CurlResult;
use crate::trit::{parse_trits, trits_to_string, TritDigest};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Corpus version.
    pub version: String,
    /// Version of `params/metadata.json` the vectors were produced with.
    pub params_version: String,
    /// State width in trits.
    pub state_width: usize,
    /// Rate (digest length) in trits.
    pub rate: usize,
    /// Rounds per transform.
    pub rounds: usize,
    /// Name of the substitution table.
    pub substitution: String,
}

impl CorpusManifest {
    /// Returns true if the manifest describes the parameters compiled into
    /// this crate.
    pub fn matches_params(&self) -> bool {
        self.params_version == PARAMS_VERSION
            && self.state_width == STATE_WIDTH
            && self.rate == HASH_LENGTH
            && self.rounds == NUMBER_OF_ROUNDS
            && self.substitution == "canonical"
    }
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Operation to test (e.g., "substitute", "hash").
    pub op: String,
    /// Input parameters for the operation.
    pub input: Value,
    /// Expected result (`{"ok": {...}}` or `{"err": {"code": n}}`).
    pub expected: Value,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the implementation.
        actual: String,
    },
    /// Test was skipped (operation not implemented).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
    /// Test errored during execution.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Returns true if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errors (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.total()
        )
    }

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. }))
            .collect()
    }

    /// Get errors only.
    pub fn error_details(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Error { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConformanceError::IoError(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Load corpus from JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)
            .map_err(|e| ConformanceError::ParseError(e.to_string()))?;
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    #[instrument(skip(self), fields(vectors = self.corpus.vectors.len()))]
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = self.run_vector(vector);
            results.record(&vector.id, result);
        }

        debug!(summary = %results.summary(), "corpus finished");
        results
    }

    /// Run a single test vector.
    #[instrument(skip(self, vector), fields(id = %vector.id, op = %vector.op))]
    fn run_vector(&self, vector: &TestVector) -> TestResult {
        match vector.op.as_str() {
            "index_table" => self.run_index_table(vector),
            "substitute" => self.run_substitute(vector),
            "transform" => self.run_transform(vector),
            "hash" => self.run_hash(vector, hash),
            "hash_padded" => self.run_hash(vector, hash_padded),
            "absorb_sequence" => self.run_absorb_sequence(vector),
            "absorb_transform" => self.run_absorb_transform(vector),
            _ => TestResult::Skip {
                reason: format!("Unknown operation: {}", vector.op),
            },
        }
    }

    /// Run index_table test.
    fn run_index_table(&self, vector: &TestVector) -> TestResult {
        let start = match input_u64(vector, "start") {
            Ok(v) => v as usize,
            Err(r) => return r,
        };
        let count = match input_u64(vector, "count") {
            Ok(v) => v as usize,
            Err(r) => return r,
        };

        let table = IndexTable::shared();
        let values = match table.as_slice().get(start..start.saturating_add(count)) {
            Some(values) => values.to_vec(),
            None => {
                return TestResult::error(format!(
                    "Window {}..{} outside table of {}",
                    start,
                    start.saturating_add(count),
                    table.len()
                ))
            }
        };

        compare(&vector.expected, "values", Ok(values), |v| Value::from(v.clone()))
    }

    /// Run substitute test.
    fn run_substitute(&self, vector: &TestVector) -> TestResult {
        let a = match input_u8(vector, "a") {
            Ok(v) => v,
            Err(r) => return r,
        };
        let b = match input_u8(vector, "b") {
            Ok(v) => v,
            Err(r) => return r,
        };

        compare(&vector.expected, "trit", substitute(a, b), |t| {
            Value::from(t.value())
        })
    }

    /// Run transform test.
    fn run_transform(&self, vector: &TestVector) -> TestResult {
        let text = match input_str(vector, "state") {
            Ok(s) => s,
            Err(r) => return r,
        };

        let result = parse_trits(text)
            .and_then(|trits| SpongeState::from_trits(&trits))
            .map(|mut state| {
                transform(
                    &mut state,
                    IndexTable::shared(),
                    &SubstitutionTable::CANONICAL,
                );
                state
            });

        compare(&vector.expected, "state", result, |s| {
            Value::from(trits_to_string(s.as_trits()))
        })
    }

    /// Run hash or hash_padded test.
    ///
    /// The message is given either as a trit string (`trits`) or as raw
    /// numbers (`values`), the latter allowing out-of-range values.
    fn run_hash<H>(&self, vector: &TestVector, hasher: H) -> TestResult
    where
        H: Fn(&[u8]) -> CurlResult<TritDigest>,
    {
        let message = match input_message(vector) {
            Ok(m) => m,
            Err(r) => return r,
        };

        let result = message.and_then(|values| hasher(values.as_slice()));

        compare(&vector.expected, "digest", result, |d| Value::from(d.to_string()))
    }

    /// Run absorb_sequence test.
    fn run_absorb_sequence(&self, vector: &TestVector) -> TestResult {
        let chunks = match vector.input.get("chunks").and_then(|v| v.as_array()) {
            Some(arr) => arr,
            None => return TestResult::error("Missing 'chunks' in input"),
        };

        let mut sponge = Sponge::new();
        for chunk in chunks {
            let text = match chunk.as_str() {
                Some(s) => s,
                None => return TestResult::error("Chunk is not a string"),
            };
            match parse_trits(text) {
                Ok(trits) => sponge.absorb_trits(&trits),
                Err(e) => return TestResult::error(format!("Invalid chunk: {}", e)),
            }
        }

        compare(&vector.expected, "digest", Ok(sponge.digest()), |d| {
            Value::from(d.to_string())
        })
    }

    /// Run absorb_transform test.
    fn run_absorb_transform(&self, vector: &TestVector) -> TestResult {
        let text = match input_str(vector, "trits") {
            Ok(s) => s,
            Err(r) => return r,
        };
        let transforms = match input_u64(vector, "transforms") {
            Ok(v) => v as usize,
            Err(r) => return r,
        };

        let result = parse_trits(text).map(|trits| {
            let mut sponge = Sponge::new();
            sponge.absorb_trits(&trits);
            sponge.transform_n(transforms);
            sponge.digest()
        });

        compare(&vector.expected, "digest", result, |d| Value::from(d.to_string()))
    }
}

/// Compare an operation's outcome with the vector's `expected` object.
///
/// `{"ok": {key: value}}` must match `render(result)`; `{"err": {"code": n}}`
/// must match the numeric error code.
fn compare<T, F>(expected: &Value, key: &str, result: CurlResult<T>, render: F) -> TestResult
where
    F: Fn(&T) -> Value,
{
    if let Some(ok) = expected.get("ok") {
        let expected_value = match ok.get(key) {
            Some(v) => v,
            None => return TestResult::error(format!("Missing '{}' in expected", key)),
        };
        match result {
            Ok(value) => {
                let actual = render(&value);
                if &actual == expected_value {
                    TestResult::Pass
                } else {
                    TestResult::Fail {
                        expected: expected_value.to_string(),
                        actual: actual.to_string(),
                    }
                }
            }
            Err(e) => TestResult::Fail {
                expected: format!("ok: {}", expected_value),
                actual: format!("err: {}", e),
            },
        }
    } else if let Some(err) = expected.get("err") {
        let expected_code = err.get("code").and_then(|v| v.as_u64()).unwrap_or(0) as u32;
        match result {
            Ok(value) => TestResult::Fail {
                expected: format!("E{}", expected_code),
                actual: format!("ok: {}", render(&value)),
            },
            Err(e) => {
                if e.code() == expected_code {
                    TestResult::Pass
                } else {
                    TestResult::Fail {
                        expected: format!("E{}", expected_code),
                        actual: format!("E{}", e.code()),
                    }
                }
            }
        }
    } else {
        TestResult::error("Invalid expected format")
    }
}

fn input_str<'v>(vector: &'v TestVector, key: &str) -> Result<&'v str, TestResult> {
    vector
        .input
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| TestResult::error(format!("Missing '{}' in input", key)))
}

fn input_u64(vector: &TestVector, key: &str) -> Result<u64, TestResult> {
    vector
        .input
        .get(key)
        .and_then(|v| v.as_u64())
        .ok_or_else(|| TestResult::error(format!("Missing '{}' in input", key)))
}

fn input_u8(vector: &TestVector, key: &str) -> Result<u8, TestResult> {
    let value = input_u64(vector, key)?;
    u8::try_from(value)
        .map_err(|_| TestResult::error(format!("'{}' = {} does not fit in a byte", key, value)))
}

/// Extract a hash message as raw values.
///
/// The outer result is a malformed vector; the inner one is a parse error
/// that the vector may expect (`E101`).
fn input_message(vector: &TestVector) -> Result<CurlResult<Vec<u8>>, TestResult> {
    if let Some(text) = vector.input.get("trits").and_then(|v| v.as_str()) {
        return Ok(parse_trits(text).map(|trits| trits.iter().map(|t| t.value()).collect()));
    }

    let values = match vector.input.get("values").and_then(|v| v.as_array()) {
        Some(arr) => arr,
        None => return Err(TestResult::error("Missing 'trits' or 'values' in input")),
    };

    let mut raw = Vec::with_capacity(values.len());
    for v in values {
        match v.as_u64().and_then(|n| u8::try_from(n).ok()) {
            Some(n) => raw.push(n),
            None => return Err(TestResult::error(format!("Value {} is not a byte", v))),
        }
    }
    Ok(Ok(raw))
}
