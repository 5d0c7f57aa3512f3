//! glrl-test - Regression test framework for glrl
//!
//! This crate provides a small regression harness supporting two modes:
//!
//! - **Compare**: Check computed values against hand-derived expectations
//! - **Display**: Same checks, also printing every checked value
//!
//! and deterministic synthetic inputs (see [`synthetic`]) so that tests do
//! not depend on image files.
//!
//! # Usage
//!
//! ```ignore
//! use glrl_test::RegParams;
//!
//! let mut rp = RegParams::new("histogram");
//! rp.compare_values(9.0, hist.total_runs() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
