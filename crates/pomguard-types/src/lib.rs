//! Stable DTOs and IDs used across the pomguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - artifact coordinates and the errors raised while rebuilding them
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod coordinate;
pub mod explain;
pub mod ids;
pub mod report;

pub use coordinate::{Coordinate, CoordinateReconstructionError};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use report::{
    Finding, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
