//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after manifest fragments.
    pub examples: ExamplePair,
}

/// Before and after manifest fragments.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// XML that would trigger a finding.
    pub before: &'static str,
    /// XML that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_POM_DEPENDENCY_MANAGEMENT => Some(explain_dependency_management()),
        ids::CHECK_POM_DEPENDENCIES => Some(explain_dependencies()),
        ids::CHECK_POM_PROFILES_DEPENDENCY_MANAGEMENT => {
            Some(explain_profiles_dependency_management())
        }
        ids::CHECK_POM_PROFILES_DEPENDENCIES => Some(explain_profiles_dependencies()),

        // Codes
        ids::CODE_VERSION_NOT_PLACEHOLDER => Some(explain_version_not_placeholder()),
        ids::CODE_VERSION_NOT_ALLOWED => Some(explain_version_not_allowed()),

        _ => None,
    }
}

/// List all known check IDs, in execution order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_POM_DEPENDENCY_MANAGEMENT,
        ids::CHECK_POM_DEPENDENCIES,
        ids::CHECK_POM_PROFILES_DEPENDENCY_MANAGEMENT,
        ids::CHECK_POM_PROFILES_DEPENDENCIES,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_VERSION_NOT_PLACEHOLDER, ids::CODE_VERSION_NOT_ALLOWED]
}

// --- Check-level explanations ---

fn explain_dependency_management() -> Explanation {
    Explanation {
        title: "Managed Versions Use Placeholders",
        description: "\
Every <version> inside <dependencyManagement> must reference a property, such as
`${slf4j.version}`, instead of spelling out a literal version.

Keeping literal versions out of dependency management means:
- all versions live in one <properties> block (or a parent/BOM project)
- upgrades touch a single line
- child projects and profiles cannot drift apart silently",
        remediation: "\
Declare a property for the version and reference it:
1. Add `<foo.version>1.2.3</foo.version>` under <properties>
2. Replace the literal with `${foo.version}`

A prefix of word characters or any suffix is accepted, e.g.
`${foo.version}-SNAPSHOT`.",
        examples: ExamplePair {
            before: r#"<dependencyManagement>
  <dependencies>
    <dependency>
      <groupId>org.slf4j</groupId>
      <artifactId>slf4j-api</artifactId>
      <version>2.0.13</version>
    </dependency>
  </dependencies>
</dependencyManagement>"#,
            after: r#"<properties>
  <slf4j.version>2.0.13</slf4j.version>
</properties>
<dependencyManagement>
  <dependencies>
    <dependency>
      <groupId>org.slf4j</groupId>
      <artifactId>slf4j-api</artifactId>
      <version>${slf4j.version}</version>
    </dependency>
  </dependencies>
</dependencyManagement>"#,
        },
    }
}

fn explain_dependencies() -> Explanation {
    Explanation {
        title: "Dependencies Inherit Versions",
        description: "\
A <dependency> outside <dependencyManagement> must not carry a <version> element at all.
The version is inherited from the dependency management section.

This applies even when the version is a placeholder: the mere presence of the tag
means two places can disagree about which version is used.",
        remediation: "\
1. Make sure the artifact is declared in <dependencyManagement> (here or in a parent)
2. Delete the <version> element from the plain <dependency>",
        examples: ExamplePair {
            before: r#"<dependencies>
  <dependency>
    <groupId>org.slf4j</groupId>
    <artifactId>slf4j-api</artifactId>
    <version>${slf4j.version}</version>
  </dependency>
</dependencies>"#,
            after: r#"<dependencies>
  <dependency>
    <groupId>org.slf4j</groupId>
    <artifactId>slf4j-api</artifactId>
  </dependency>
</dependencies>"#,
        },
    }
}

fn explain_profiles_dependency_management() -> Explanation {
    let mut exp = explain_dependency_management();
    exp.title = "Profile Managed Versions Use Placeholders";
    exp.description = "\
Same rule as `pom.dependency_management`, applied to the <dependencyManagement>
section of every <profile> under <profiles>.

Profiles are activated conditionally, so a literal version here only shows up
in some builds. That makes it easy to miss during upgrades.";
    exp
}

fn explain_profiles_dependencies() -> Explanation {
    let mut exp = explain_dependencies();
    exp.title = "Profile Dependencies Inherit Versions";
    exp.description = "\
Same rule as `pom.dependencies`, applied to the <dependencies> section of every
<profile> under <profiles>.";
    exp
}

// --- Code-level explanations ---

fn explain_version_not_placeholder() -> Explanation {
    let mut exp = explain_dependency_management();
    exp.title = "Literal Version In Dependency Management";
    exp
}

fn explain_version_not_allowed() -> Explanation {
    let mut exp = explain_dependencies();
    exp.title = "Version Tag Outside Dependency Management";
    exp
}
