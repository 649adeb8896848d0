//! Rendering of the final [`BatchReport`](crate::models::BatchReport).
//!
//! # Submodules
//!
//! - [`summary`]: The two human-readable lines printed at the end of a run
//! - [`json`]: The full report as JSON, for `--json`
//!
//! Both render to a `String`; `main` decides where it goes (stdout). Nothing
//! is written to disk.

pub mod json;
pub mod summary;
