//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks, in execution order.
pub const CHECK_POM_DEPENDENCY_MANAGEMENT: &str = "pom.dependency_management";
pub const CHECK_POM_DEPENDENCIES: &str = "pom.dependencies";
pub const CHECK_POM_PROFILES_DEPENDENCY_MANAGEMENT: &str = "pom.profiles.dependency_management";
pub const CHECK_POM_PROFILES_DEPENDENCIES: &str = "pom.profiles.dependencies";

// Codes: dependency management sections (top level and profiles)
pub const CODE_VERSION_NOT_PLACEHOLDER: &str = "version_not_placeholder";

// Codes: plain dependency sections (top level and profiles)
pub const CODE_VERSION_NOT_ALLOWED: &str = "version_not_allowed";
