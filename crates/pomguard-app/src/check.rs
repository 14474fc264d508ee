//! The `check` use case: load the manifest once, run the section checks in order, and report.

use crate::error::{ExecutionError, ValidationError};
use anyhow::Context;
use camino::Utf8Path;
use pomguard_domain::policy::EffectiveConfig;
use pomguard_domain::{PolicyViolation, VersionRule, check_versions};
use pomguard_repo::{StructuralQuery, load_manifest};
use pomguard_settings::Overrides;
use pomguard_types::{Finding, ReportEnvelope, Verdict};
use time::OffsetDateTime;
use tracing::debug;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Debug)]
pub struct CheckOutput {
    /// The generated report. Always present, whatever the outcome.
    pub report: ReportEnvelope,
    /// Policy violation or execution error, if the run did not pass.
    pub outcome: Result<(), ValidationError>,
}

/// Run the check use case: parse config, validate the manifest, produce report.
///
/// Configuration problems are returned as `Err`; everything that happens after the config is
/// resolved ends up in [`CheckOutput::outcome`].
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        pomguard_settings::PomguardConfigV1::default()
    } else {
        pomguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        pomguard_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let mut report = ReportEnvelope::new(resolved.manifest.as_str(), started_at);
    let outcome = validate(&resolved.manifest, &resolved.effective, &mut report.checks_run);

    match &outcome {
        Ok(()) => report.verdict = Verdict::Pass,
        Err(ValidationError::Policy(violation)) => {
            report.verdict = Verdict::Fail;
            report.findings = findings_for(violation);
        }
        Err(ValidationError::Execution(err)) => {
            report.verdict = Verdict::Error;
            report.error = Some(error_chain(err));
        }
    }
    report.finished_at = OffsetDateTime::now_utc();

    Ok(CheckOutput { report, outcome })
}

/// Validate one manifest with every check enabled.
///
/// This is the whole contract a host build needs: `Ok` means compliant.
pub fn validate_manifest(manifest: &Utf8Path) -> Result<(), ValidationError> {
    let mut checks_run = Vec::new();
    validate(manifest, &EffectiveConfig::default(), &mut checks_run)
}

fn validate(
    manifest: &Utf8Path,
    cfg: &EffectiveConfig,
    checks_run: &mut Vec<String>,
) -> Result<(), ValidationError> {
    let tree = load_manifest(manifest).map_err(|source| ExecutionError::Parse {
        manifest: manifest.to_owned(),
        source,
    })?;
    debug!(
        manifest = %manifest,
        root = tree.root().tag_name().unwrap_or_default(),
        "root element"
    );

    for section in cfg.sections() {
        let query = StructuralQuery::for_section(section).map_err(ExecutionError::from)?;
        let nodes = query.select(&tree);
        debug!(
            check_id = section.check_id(),
            query = %query,
            size = nodes.len(),
            "size of collection matching query"
        );

        checks_run.push(section.check_id().to_string());
        check_versions(section.check_id(), &nodes, section.rule())?;
    }
    Ok(())
}

fn findings_for(violation: &PolicyViolation) -> Vec<Finding> {
    violation
        .artifacts
        .iter()
        .map(|coordinate| Finding {
            check_id: violation.check_id.to_string(),
            code: violation.code().to_string(),
            message: match violation.rule {
                VersionRule::PlaceholderRequired => format!(
                    "managed version '{}' of {}:{} is not a ${{...}} placeholder",
                    coordinate.version, coordinate.group_id, coordinate.artifact_id
                ),
                VersionRule::VersionForbidden => format!(
                    "dependency {}:{} declares version '{}'; it must come from dependencyManagement",
                    coordinate.group_id, coordinate.artifact_id, coordinate.version
                ),
            },
            coordinate: coordinate.clone(),
        })
        .collect()
}

/// `outer: cause: root cause`, like anyhow's alternate formatting.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Build a report for a run that failed before any check could start.
pub fn runtime_error_report(manifest: &str, message: &str) -> ReportEnvelope {
    let now = OffsetDateTime::now_utc();
    let mut report = ReportEnvelope::new(manifest, now);
    report.verdict = Verdict::Error;
    report.error = Some(message.to_string());
    report
}

/// Map verdict to exit code: 0 = pass, 2 = policy failure, 1 = execution error.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
        Verdict::Error => 1,
    }
}

/// Serialize a report as pretty JSON with a trailing newline.
pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}
