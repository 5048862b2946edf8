//! Error handling for the Curl hash engine.
//!
//! Error codes are generated from `params/metadata.json` by the build script,
//! so the numeric codes and their names live in one place.
//!
//! Errors are local to the call that detects them. Transform and squeeze never
//! fail; absorb validates its whole input before touching the sponge state.

// Include the generated error code enum
include!(concat!(env!("OUT_DIR"), "/error_generated.rs"));
