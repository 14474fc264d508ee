//! Use case orchestration for pomguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain and repo
//! layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod error;
mod explain;

pub use check::{
    CheckInput, CheckOutput, run_check, runtime_error_report, serialize_report, validate_manifest,
    verdict_exit_code,
};
pub use error::{ExecutionError, ValidationError};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
