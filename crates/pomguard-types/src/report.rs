use crate::Coordinate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for pomguard reports.
pub const SCHEMA_REPORT_V1: &str = "pomguard.report.v1";

/// Outcome of one validation run.
///
/// `Error` means the validator could not finish; it is never a policy verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// One offending artifact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub coordinate: Coordinate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Manifest path as supplied by the caller.
    pub manifest: String,
    pub verdict: Verdict,
    /// Checks that actually ran, in order. A failing check stops the run.
    #[serde(default)]
    pub checks_run: Vec<String>,
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportEnvelope {
    pub fn new(manifest: impl Into<String>, started_at: OffsetDateTime) -> Self {
        Self {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "pomguard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            started_at,
            finished_at: started_at,
            manifest: manifest.into(),
            verdict: Verdict::Pass,
            checks_run: Vec::new(),
            findings: Vec::new(),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn serializes_verdict_lowercase_and_omits_missing_error() {
        let mut report = ReportEnvelope::new("pom.xml", datetime!(2025-01-01 0:00 UTC));
        report.verdict = Verdict::Fail;
        report.findings.push(Finding {
            check_id: "pom.dependencies".to_string(),
            code: "version_not_allowed".to_string(),
            message: "version tag not allowed".to_string(),
            coordinate: Coordinate::new("g", "a", "1.0"),
        });

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["schema"], SCHEMA_REPORT_V1);
        assert_eq!(json["verdict"], "fail");
        assert_eq!(json["started_at"], "2025-01-01T00:00:00Z");
        assert_eq!(json["findings"][0]["coordinate"]["artifact_id"], "a");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn schema_lists_report_fields() {
        let schema = schemars::schema_for!(ReportEnvelope);
        let json = serde_json::to_value(&schema).expect("serialize schema");
        let props = json["properties"].as_object().expect("properties");
        for key in ["schema", "tool", "manifest", "verdict", "checks_run", "findings"] {
            assert!(props.contains_key(key), "schema should describe {key}");
        }
    }
}
