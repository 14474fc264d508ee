//! CLI entry point for pomguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `pomguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use pomguard_app::{
    CheckInput, CheckOutput, ExplainOutput, ValidationError, run_check, run_explain,
    runtime_error_report, serialize_report, verdict_exit_code,
};
use pomguard_settings::{DEFAULT_MANIFEST, Overrides};
use pomguard_types::ReportEnvelope;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pomguard",
    version,
    about = "Version policy guard for Maven project descriptors"
)]
struct Cli {
    /// Path to pomguard config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "pomguard.toml")]
    config: Utf8PathBuf,

    /// Log the root element and query sizes to stderr (same as RUST_LOG=debug).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a manifest against the version policy.
    Check {
        /// Manifest to validate (default: `manifest` from config, then pom.xml).
        #[arg(long)]
        manifest: Option<Utf8PathBuf>,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Disable a check for this run (repeatable), e.g. `--skip pom.profiles.dependencies`.
        #[arg(long = "skip", value_name = "CHECK_ID")]
        skip: Vec<String>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "pom.dependencies") or code (e.g., "version_not_allowed").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref manifest,
            ref report_out,
            ref skip,
        } => cmd_check(&cli, manifest.clone(), report_out.as_deref(), skip.clone()),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_check(
    cli: &Cli,
    manifest: Option<Utf8PathBuf>,
    report_out: Option<&Utf8Path>,
    skip: Vec<String>,
) -> anyhow::Result<()> {
    let manifest_label = manifest
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;
        let input = CheckInput {
            config_text: &cfg_text,
            overrides: Overrides { manifest, skip },
        };

        let CheckOutput { report, outcome } = run_check(input)?;

        if let Some(path) = report_out {
            write_report_file(path, &report).context("write report json")?;
        }

        match outcome {
            Ok(()) => println!(
                "pomguard: {} passed ({} checks)",
                report.manifest,
                report.checks_run.len()
            ),
            Err(ValidationError::Policy(violation)) => {
                eprintln!("pomguard: {} violates version policy", report.manifest);
                eprintln!("{violation}");
            }
            Err(ValidationError::Execution(err)) => {
                eprintln!("pomguard error: {:#}", anyhow::Error::from(err));
            }
        }

        Ok(verdict_exit_code(report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(path) = report_out {
                let report = runtime_error_report(&manifest_label, &format!("{err:#}"));
                let _ = write_report_file(path, &report);
            }
            eprintln!("pomguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Missing config is allowed (defaults apply); any other read failure is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn write_report_file(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", pomguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                pomguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
