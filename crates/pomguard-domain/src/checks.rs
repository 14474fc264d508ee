use crate::placeholder::is_placeholder_version;
use pomguard_types::{Coordinate, CoordinateReconstructionError, ids};
use std::fmt;
use thiserror::Error;

/// A selected `<version>` element, as seen by the policy checker.
pub trait VersionNode {
    /// Raw text of the version element.
    fn version_text(&self) -> String;

    /// Rebuild `groupId:artifactId:version` from the enclosing dependency.
    fn coordinate(&self) -> Result<Coordinate, CoordinateReconstructionError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VersionRule {
    /// Dependency management: every version must be a `${...}` placeholder.
    PlaceholderRequired,
    /// Plain dependencies: a version element must not exist at all.
    VersionForbidden,
}

impl VersionRule {
    pub fn code(self) -> &'static str {
        match self {
            VersionRule::PlaceholderRequired => ids::CODE_VERSION_NOT_PLACEHOLDER,
            VersionRule::VersionForbidden => ids::CODE_VERSION_NOT_ALLOWED,
        }
    }
}

/// Every artifact that broke one rule within one section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyViolation {
    pub check_id: &'static str,
    pub rule: VersionRule,
    /// Offending artifacts in document order.
    pub artifacts: Vec<Coordinate>,
}

impl PolicyViolation {
    pub fn code(&self) -> &'static str {
        self.rule.code()
    }
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            VersionRule::PlaceholderRequired => {
                writeln!(
                    f,
                    "dependencyManagement sections must use variables. \
                     These should likely be referenced in the dependency management project."
                )?;
                write!(f, "The following artifacts are in error:")?;
                for artifact in &self.artifacts {
                    write!(f, "\n{artifact}")?;
                }
                Ok(())
            }
            VersionRule::VersionForbidden => {
                write!(
                    f,
                    "\"version\" tag found where it was not allowed for the following artifacts:"
                )?;
                for artifact in &self.artifacts {
                    write!(f, "\n{artifact}")?;
                }
                write!(
                    f,
                    "\nVersions must be inherited from dependency management sections."
                )
            }
        }
    }
}

impl std::error::Error for PolicyViolation {}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Violation(#[from] PolicyViolation),

    #[error("cannot describe offending dependency in {check_id}")]
    Coordinate {
        check_id: &'static str,
        #[source]
        source: CoordinateReconstructionError,
    },
}

/// Apply `rule` to the version nodes of one section.
///
/// All offenders in the set are collected before failing, so a single run
/// reports every artifact that needs fixing in this section.
pub fn check_versions<N: VersionNode>(
    check_id: &'static str,
    nodes: &[N],
    rule: VersionRule,
) -> Result<(), CheckError> {
    let coordinate = |node: &N| {
        node.coordinate()
            .map_err(|source| CheckError::Coordinate { check_id, source })
    };

    let mut artifacts = Vec::new();
    match rule {
        VersionRule::PlaceholderRequired => {
            for node in nodes {
                if !is_placeholder_version(&node.version_text()) {
                    artifacts.push(coordinate(node)?);
                }
            }
        }
        // Presence alone is the violation; the content is never inspected.
        VersionRule::VersionForbidden => {
            for node in nodes {
                artifacts.push(coordinate(node)?);
            }
        }
    }

    if artifacts.is_empty() {
        return Ok(());
    }
    Err(PolicyViolation {
        check_id,
        rule,
        artifacts,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomguard_types::ids::{CHECK_POM_DEPENDENCIES, CHECK_POM_DEPENDENCY_MANAGEMENT};

    struct FakeNode {
        group: Option<&'static str>,
        artifact: &'static str,
        version: &'static str,
    }

    fn node(group: &'static str, artifact: &'static str, version: &'static str) -> FakeNode {
        FakeNode {
            group: Some(group),
            artifact,
            version,
        }
    }

    impl VersionNode for FakeNode {
        fn version_text(&self) -> String {
            self.version.to_string()
        }

        fn coordinate(&self) -> Result<Coordinate, CoordinateReconstructionError> {
            let group = self
                .group
                .ok_or(CoordinateReconstructionError::MissingField {
                    parent: "dependency".to_string(),
                    field: "groupId",
                })?;
            Ok(Coordinate::new(group, self.artifact, self.version))
        }
    }

    fn violation(result: Result<(), CheckError>) -> PolicyViolation {
        match result {
            Err(CheckError::Violation(v)) => v,
            other => panic!("expected a policy violation, got {other:?}"),
        }
    }

    #[test]
    fn empty_sets_pass_under_both_rules() {
        let nodes: Vec<FakeNode> = Vec::new();
        assert!(
            check_versions(CHECK_POM_DEPENDENCY_MANAGEMENT, &nodes, VersionRule::PlaceholderRequired)
                .is_ok()
        );
        assert!(
            check_versions(CHECK_POM_DEPENDENCIES, &nodes, VersionRule::VersionForbidden).is_ok()
        );
    }

    #[test]
    fn placeholders_pass_in_management() {
        let nodes = vec![
            node("g", "a", "${a.version}"),
            node("g", "b", "${b}-SNAPSHOT"),
        ];
        assert!(
            check_versions(CHECK_POM_DEPENDENCY_MANAGEMENT, &nodes, VersionRule::PlaceholderRequired)
                .is_ok()
        );
    }

    #[test]
    fn management_collects_every_literal_in_order() {
        let nodes = vec![
            node("g", "one", "1.0.0"),
            node("g", "two", "${two.version}"),
            node("g", "three", "3.0"),
        ];
        let v = violation(check_versions(
            CHECK_POM_DEPENDENCY_MANAGEMENT,
            &nodes,
            VersionRule::PlaceholderRequired,
        ));
        assert_eq!(v.code(), ids::CODE_VERSION_NOT_PLACEHOLDER);
        assert_eq!(
            v.artifacts,
            vec![
                Coordinate::new("g", "one", "1.0.0"),
                Coordinate::new("g", "three", "3.0")
            ]
        );
        assert_eq!(
            v.to_string(),
            "dependencyManagement sections must use variables. These should likely be \
             referenced in the dependency management project.\n\
             The following artifacts are in error:\n\
             g:one:1.0.0\n\
             g:three:3.0"
        );
    }

    #[test]
    fn any_version_in_plain_dependencies_is_a_violation() {
        let nodes = vec![node("g", "a", "${a.version}")];
        let v = violation(check_versions(
            CHECK_POM_DEPENDENCIES,
            &nodes,
            VersionRule::VersionForbidden,
        ));
        assert_eq!(v.check_id, CHECK_POM_DEPENDENCIES);
        assert_eq!(v.code(), ids::CODE_VERSION_NOT_ALLOWED);
        assert_eq!(
            v.to_string(),
            "\"version\" tag found where it was not allowed for the following artifacts:\n\
             g:a:${a.version}\n\
             Versions must be inherited from dependency management sections."
        );
    }

    #[test]
    fn missing_coordinate_is_not_a_policy_violation() {
        let nodes = vec![FakeNode {
            group: None,
            artifact: "a",
            version: "1.0",
        }];
        let err = check_versions(CHECK_POM_DEPENDENCIES, &nodes, VersionRule::VersionForbidden)
            .expect_err("must fail");
        assert!(matches!(
            err,
            CheckError::Coordinate {
                check_id: CHECK_POM_DEPENDENCIES,
                ..
            }
        ));
    }

    #[test]
    fn coordinates_are_only_rebuilt_for_offenders() {
        let nodes = vec![FakeNode {
            group: None,
            artifact: "a",
            version: "${a.version}",
        }];
        assert!(
            check_versions(CHECK_POM_DEPENDENCY_MANAGEMENT, &nodes, VersionRule::PlaceholderRequired)
                .is_ok()
        );
    }
}
