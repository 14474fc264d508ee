use crate::model::{PomguardConfigV1, SCHEMA_CONFIG_V1};
use camino::Utf8PathBuf;
use pomguard_domain::Section;
use pomguard_domain::policy::{CheckPolicy, EffectiveConfig};

pub const DEFAULT_MANIFEST: &str = "pom.xml";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub manifest: Option<Utf8PathBuf>,
    /// Check ids to turn off for this run.
    pub skip: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub manifest: Utf8PathBuf,
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: PomguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let manifest = overrides
        .manifest
        .or(cfg.manifest.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_MANIFEST));

    let mut effective = EffectiveConfig::default();

    for (check_id, cc) in cfg.checks.iter() {
        ensure_known(check_id)?;
        if let Some(enabled) = cc.enabled {
            effective.checks.insert(
                check_id.clone(),
                if enabled {
                    CheckPolicy::enabled()
                } else {
                    CheckPolicy::disabled()
                },
            );
        }
    }

    for check_id in &overrides.skip {
        ensure_known(check_id)?;
        effective
            .checks
            .insert(check_id.clone(), CheckPolicy::disabled());
    }

    Ok(ResolvedConfig {
        manifest,
        effective,
    })
}

fn ensure_known(check_id: &str) -> anyhow::Result<()> {
    if Section::from_check_id(check_id).is_none() {
        let known: Vec<_> = Section::ALL.iter().map(|s| s.check_id()).collect();
        anyhow::bail!(
            "unknown check_id: {check_id} (expected one of {})",
            known.join(", ")
        );
    }
    Ok(())
}
