use regex::Regex;
use std::sync::LazyLock;

/// Optional word-character prefix, one `${name}` token, then anything up to end of line.
///
/// The whole string must match, so `1.2.3` or `v-${x}` are rejected.
const PLACEHOLDER_PATTERN: &str = r"^([A-Za-z0-9_]*)(\$\{[A-Za-z0-9.\-]+\})(.*)$";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"));

/// Whether a version string is expressed through a property placeholder.
pub fn is_placeholder_version(version: &str) -> bool {
    PLACEHOLDER_RE.is_match(version)
}
