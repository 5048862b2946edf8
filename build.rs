// Build script that generates Rust code from the Curl parameter metadata.
// Build scripts are not part of the hashing path, so we allow expect() and panic().
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
//
// Consumes `params/metadata.json` and generates into OUT_DIR:
// - `error_generated.rs` - ErrorCode enum with all variants
// - `params_generated.rs` - sponge dimensions, round count, index recurrence
//   constants and the canonical substitution table

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Metadata {
    version: String,
    curl: CurlMetadata,
    substitution: SubstitutionMetadata,
    errors: Vec<ErrorInfo>,
}

#[derive(Debug, Deserialize)]
struct CurlMetadata {
    state_width: usize,
    rate: usize,
    rounds: usize,
    index_step_up: usize,
    index_step_down: usize,
    index_pivot: usize,
}

#[derive(Debug, Deserialize)]
struct SubstitutionMetadata {
    canonical: [[u8; 3]; 3],
}

#[derive(Debug, Deserialize)]
struct ErrorInfo {
    name: String,
    code: u32,
    params: Vec<String>,
}

impl Metadata {
    /// Parameters used when `params/metadata.json` cannot be read.
    fn fallback() -> Self {
        let error = |name: &str, code: u32, params: &[&str]| ErrorInfo {
            name: name.to_string(),
            code,
            params: params.iter().map(|p| p.to_string()).collect(),
        };

        Metadata {
            version: "1".to_string(),
            curl: CurlMetadata {
                state_width: 729,
                rate: 243,
                rounds: 27,
                index_step_up: 364,
                index_step_down: 365,
                index_pivot: 365,
            },
            substitution: SubstitutionMetadata {
                canonical: [[2, 2, 0], [1, 0, 2], [0, 1, 1]],
            },
            errors: vec![
                error("E100_InvalidTritValue", 100, &["index", "value"]),
                error("E101_InvalidTritSymbol", 101, &["index", "symbol"]),
                error("E102_WrongLength", 102, &["expected", "got"]),
                error("E103_InvalidSubstitutionEntry", 103, &["row", "col", "value"]),
            ],
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=params/metadata.json");
    println!("cargo:rerun-if-changed=build.rs");

    let metadata_path = Path::new("params/metadata.json");

    let metadata = match fs::read_to_string(metadata_path) {
        Ok(content) => match serde_json::from_str::<Metadata>(&content) {
            Ok(m) => m,
            Err(e) => {
                println!(
                    "cargo:warning=Could not parse params/metadata.json: {}. Using built-in parameters.",
                    e
                );
                Metadata::fallback()
            }
        },
        Err(e) => {
            println!(
                "cargo:warning=Could not read params/metadata.json: {}. Using built-in parameters.",
                e
            );
            Metadata::fallback()
        }
    };

    if metadata.version != "1" {
        println!(
            "cargo:warning=Unexpected metadata version '{}', expected '1'",
            metadata.version
        );
    }

    validate(&metadata);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let out_path = Path::new(&out_dir);

    generate_error_rs(out_path, &metadata.errors);
    generate_params_rs(out_path, &metadata);
}

/// Reject parameter sets the sponge cannot be instantiated with.
fn validate(metadata: &Metadata) {
    let curl = &metadata.curl;

    if curl.rate == 0 || curl.rate > curl.state_width {
        panic!(
            "rate {} must be in 1..={} (state width)",
            curl.rate, curl.state_width
        );
    }
    if curl.rounds == 0 {
        panic!("round count must be non-zero");
    }
    // Up steps start below the pivot and down steps start at or above it.
    if curl.index_pivot < curl.index_step_down
        || curl.index_pivot + curl.index_step_up > curl.state_width
    {
        panic!(
            "index recurrence (+{}, -{}, pivot {}) leaves [0, {})",
            curl.index_step_up, curl.index_step_down, curl.index_pivot, curl.state_width
        );
    }
    for (a, row) in metadata.substitution.canonical.iter().enumerate() {
        for (b, &value) in row.iter().enumerate() {
            if value > 2 {
                panic!("substitution[{}][{}] = {} is not a trit", a, b, value);
            }
        }
    }
}

fn generate_error_rs(out_path: &Path, errors: &[ErrorInfo]) {
    let mut code = String::new();

    // Use outer doc comments for include!() compatibility
    code.push_str(
        r#"// Error codes generated from the Curl parameter metadata.
//
// DO NOT EDIT - This file is generated by build.rs from params/metadata.json

use thiserror::Error;

/// All error codes raised by the Curl hash engine.
///
/// Each variant corresponds to one class of rejected input; the numeric
/// code is stable across releases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
"#,
    );

    for error in errors {
        let variant_name = error.name.clone();
        code.push_str(&format!("    /// {} (code {})\n", variant_name, error.code));

        if error.params.is_empty() {
            code.push_str(&format!(
                "    #[error(\"{}\")]\n    {},\n\n",
                variant_name, variant_name
            ));
        } else {
            let params: Vec<String> = error
                .params
                .iter()
                .map(|p| format!("/* {} */ {}", p, param_type(p)))
                .collect();
            let param_refs: Vec<String> =
                (0..error.params.len()).map(|i| format!("{{{}}}", i)).collect();
            code.push_str(&format!(
                "    #[error(\"{name}({refs})\")]\n    {name}({params}),\n\n",
                name = variant_name,
                refs = param_refs.join(", "),
                params = params.join(", ")
            ));
        }
    }

    code.push_str("}\n\n");

    code.push_str(
        r#"impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
"#,
    );

    for error in errors {
        code.push_str(&format!(
            "            ErrorCode::{}{} => {},\n",
            error.name,
            wildcards(error.params.len()),
            error.code
        ));
    }

    code.push_str(
        r#"        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
"#,
    );

    for error in errors {
        code.push_str(&format!(
            "            ErrorCode::{}{} => \"{}\",\n",
            error.name,
            wildcards(error.params.len()),
            error.name
        ));
    }

    code.push_str(
        r#"        }
    }
}

/// Result type for Curl operations.
pub type CurlResult<T> = Result<T, ErrorCode>;
"#,
    );

    fs::write(out_path.join("error_generated.rs"), code)
        .expect("Failed to write error_generated.rs");
}

fn wildcards(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        format!("({})", vec!["_"; count].join(", "))
    }
}

fn param_type(param_name: &str) -> &'static str {
    match param_name {
        "index" | "value" | "expected" | "got" | "row" | "col" => "u64",
        // symbol and all others
        _ => "String",
    }
}

fn generate_params_rs(out_path: &Path, metadata: &Metadata) {
    let curl = &metadata.curl;
    let table = &metadata.substitution.canonical;

    let row = |r: &[u8; 3]| format!("[{}, {}, {}]", r[0], r[1], r[2]);

    let code = format!(
        r#"// Curl parameters generated from params/metadata.json.
//
// DO NOT EDIT - This file is generated by build.rs

/// Version of the parameter metadata these constants were generated from.
pub const PARAMS_VERSION: &str = "{version}";

/// Width of the sponge state in trits (b).
pub const STATE_WIDTH: usize = {width};

/// Sponge rate in trits (r); also the digest length.
pub const HASH_LENGTH: usize = {rate};

/// Sponge capacity in trits (c = b - r).
pub const CAPACITY: usize = {capacity};

/// Rounds applied by one call to the transform.
pub const NUMBER_OF_ROUNDS: usize = {rounds};

/// Index recurrence: step added while the previous index is below the pivot.
pub const INDEX_STEP_UP: usize = {up};

/// Index recurrence: step subtracted once the previous index reaches the pivot.
pub const INDEX_STEP_DOWN: usize = {down};

/// Index recurrence pivot.
pub const INDEX_PIVOT: usize = {pivot};

/// Canonical substitution table, indexed `[a][b]`.
pub const CANONICAL_SUBSTITUTION: [[u8; 3]; 3] = [{r0}, {r1}, {r2}];
"#,
        version = metadata.version,
        width = curl.state_width,
        rate = curl.rate,
        capacity = curl.state_width - curl.rate,
        rounds = curl.rounds,
        up = curl.index_step_up,
        down = curl.index_step_down,
        pivot = curl.index_pivot,
        r0 = row(&table[0]),
        r1 = row(&table[1]),
        r2 = row(&table[2]),
    );

    fs::write(out_path.join("params_generated.rs"), code)
        .expect("Failed to write params_generated.rs");
}
