//! derby-test - Regression test framework for derby
//!
//! This crate provides a small regression harness modelled on the classic
//! `*_reg` test programs: each check is numbered, failures are collected
//! rather than aborting at the first mismatch, and [`RegParams::cleanup`]
//! reports the outcome.
//!
//! # Usage
//!
//! ```ignore
//! use derby_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("levels");
//! rp.compare_values(255.0, out as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Synthetic input images live in [`synth`] so that tests need no data files.

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::RegParams;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // derby-test is at crates/derby-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/target/regout", workspace_root())
}

/// Create the regout directory and return the path of a file inside it.
pub fn regout_path(name: &str) -> TestResult<String> {
    let dir = regout_dir();
    std::fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(format!("{}/{}", dir, name))
}
