use camino::Utf8PathBuf;
use pomguard_domain::{CheckError, PolicyViolation};
use pomguard_repo::{ParseError, QueryExecutionError};
use pomguard_types::CoordinateReconstructionError;
use thiserror::Error;

/// The validator could not finish its job.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("cannot parse manifest {manifest}")]
    Parse {
        manifest: Utf8PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("cannot evaluate structural query")]
    Query(#[from] QueryExecutionError),

    #[error("cannot describe offending dependency in {check_id}")]
    Coordinate {
        check_id: &'static str,
        #[source]
        source: CoordinateReconstructionError,
    },
}

/// Result category handed back to the host build.
///
/// `Policy` means the manifest is non-compliant; `Execution` means the validator broke.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Policy(#[from] PolicyViolation),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl ValidationError {
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, ValidationError::Policy(_))
    }
}

impl From<CheckError> for ValidationError {
    fn from(err: CheckError) -> Self {
        match err {
            CheckError::Violation(v) => ValidationError::Policy(v),
            CheckError::Coordinate { check_id, source } => {
                ValidationError::Execution(ExecutionError::Coordinate { check_id, source })
            }
        }
    }
}
