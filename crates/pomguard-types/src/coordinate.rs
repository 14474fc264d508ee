use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// `groupId:artifactId:version` triple recovered from a `<dependency>` element.
///
/// Only ever used to describe an offending declaration; it is never resolved.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A version node whose enclosing element cannot be described as an artifact.
///
/// This means the manifest is structurally broken, not that it violates policy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoordinateReconstructionError {
    #[error("version node has no enclosing element")]
    MissingParent,

    #[error("<{parent}> enclosing a version declaration has no <{field}> with text")]
    MissingField {
        parent: String,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_colon_separated_triple() {
        let c = Coordinate::new("org.example", "core", "${core.version}");
        assert_eq!(c.to_string(), "org.example:core:${core.version}");
    }

    #[test]
    fn missing_field_names_the_element() {
        let err = CoordinateReconstructionError::MissingField {
            parent: "dependency".to_string(),
            field: "groupId",
        };
        assert_eq!(
            err.to_string(),
            "<dependency> enclosing a version declaration has no <groupId> with text"
        );
    }
}
