//! Pure version policy evaluation (no IO).
//!
//! Input: version-declaration nodes selected elsewhere, behind [`VersionNode`].
//! Output: success, or a [`PolicyViolation`] naming every offending artifact.

#![forbid(unsafe_code)]

pub mod checks;
pub mod placeholder;
pub mod policy;
pub mod section;

pub use checks::{CheckError, PolicyViolation, VersionNode, VersionRule, check_versions};
pub use placeholder::is_placeholder_version;
pub use section::Section;
