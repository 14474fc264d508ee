use crate::section::Section;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// Which checks run. Keys are check ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        let checks = Section::ALL
            .iter()
            .map(|s| (s.check_id().to_string(), CheckPolicy::enabled()))
            .collect();
        Self { checks }
    }
}

impl EffectiveConfig {
    pub fn is_enabled(&self, check_id: &str) -> bool {
        self.checks.get(check_id).is_some_and(|p| p.enabled)
    }

    /// Enabled sections in execution order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(|s| self.is_enabled(s.check_id()))
    }
}
