use crate::checks::VersionRule;
use pomguard_types::ids;

/// The four manifest sections pomguard inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    DependencyManagement,
    Dependencies,
    ProfileDependencyManagement,
    ProfileDependencies,
}

impl Section {
    /// Execution order. A failing section stops the sections after it.
    pub const ALL: [Section; 4] = [
        Section::DependencyManagement,
        Section::Dependencies,
        Section::ProfileDependencyManagement,
        Section::ProfileDependencies,
    ];

    pub fn check_id(self) -> &'static str {
        match self {
            Section::DependencyManagement => ids::CHECK_POM_DEPENDENCY_MANAGEMENT,
            Section::Dependencies => ids::CHECK_POM_DEPENDENCIES,
            Section::ProfileDependencyManagement => ids::CHECK_POM_PROFILES_DEPENDENCY_MANAGEMENT,
            Section::ProfileDependencies => ids::CHECK_POM_PROFILES_DEPENDENCIES,
        }
    }

    pub fn from_check_id(check_id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.check_id() == check_id)
    }

    /// Whether the section sits under `<profiles><profile>`.
    pub fn in_profile(self) -> bool {
        matches!(
            self,
            Section::ProfileDependencyManagement | Section::ProfileDependencies
        )
    }

    /// Whether the section is a `<dependencyManagement>` block.
    pub fn is_managed(self) -> bool {
        matches!(
            self,
            Section::DependencyManagement | Section::ProfileDependencyManagement
        )
    }

    pub fn rule(self) -> VersionRule {
        if self.is_managed() {
            VersionRule::PlaceholderRequired
        } else {
            VersionRule::VersionForbidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn management_sections_require_placeholders() {
        assert_eq!(
            Section::DependencyManagement.rule(),
            VersionRule::PlaceholderRequired
        );
        assert_eq!(
            Section::ProfileDependencyManagement.rule(),
            VersionRule::PlaceholderRequired
        );
        assert_eq!(Section::Dependencies.rule(), VersionRule::VersionForbidden);
        assert_eq!(
            Section::ProfileDependencies.rule(),
            VersionRule::VersionForbidden
        );
    }

    #[test]
    fn check_ids_round_trip_in_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.check_id()).collect();
        assert_eq!(ids, pomguard_types::explain::all_check_ids());
        for section in Section::ALL {
            assert_eq!(Section::from_check_id(section.check_id()), Some(section));
        }
        assert_eq!(Section::from_check_id("pom.nope"), None);
    }
}
