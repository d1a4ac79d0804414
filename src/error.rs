//! Top-level error type for module construction.
//!
//! ```text
//! BindingError
//! ├── Metadata - a version attribute could not be attached
//! ├── Plan     - registrar requirements are inconsistent (PlanError)
//! └── Drain    - a registration callback failed (DrainError)
//! ```
//!
//! Every variant means the module failed to load. Configuration-probe and
//! native-initialization failures never surface here.

use depthai_core::{DrainError, RegistrationError};
use depthai_registry::PlanError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A version attribute could not be attached to the module.
    #[error("failed to attach module metadata: {0}")]
    Metadata(#[source] RegistrationError),

    /// The registrars could not be ordered.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// A registration callback failed.
    #[error(transparent)]
    Drain(#[from] DrainError),
}

impl BindingError {
    pub fn is_plan(&self) -> bool {
        matches!(self, BindingError::Plan(_))
    }

    pub fn is_drain(&self) -> bool {
        matches!(self, BindingError::Drain(_))
    }

    /// The registration error behind this failure, if any.
    pub fn registration_error(&self) -> Option<&RegistrationError> {
        match self {
            BindingError::Metadata(err) => Some(err),
            BindingError::Drain(err) => Some(err.kind()),
            BindingError::Plan(_) => None,
        }
    }
}

/// Result alias for module construction.
pub type BindingResult<T> = Result<T, BindingError>;
