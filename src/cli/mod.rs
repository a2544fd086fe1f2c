//! Command Line Interface (CLI) layer for testvid.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that validates the request, runs
//! the pipeline, and maps the outcome to a process exit code.
//!
//! If you are embedding testvid into another application, prefer using
//! the high-level `testvid::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
