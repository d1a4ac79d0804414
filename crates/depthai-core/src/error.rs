//! Error types for module composition.
//!
//! ## Error Hierarchy
//!
//! ```text
//! RegistrationError - a single registration step could not attach its bindings
//! DrainError        - a RegistrationError tagged with the callback that raised it
//! NativeError       - the native library refused to initialize
//! ```
//!
//! Registration and drain errors are fatal to module construction. Native
//! errors are absorbed by the initialization gate.

use thiserror::Error;

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while a registration callback attaches bindings to a module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A referenced type has not been registered yet.
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// A referenced submodule has not been registered yet.
    #[error("namespace not found: {0}")]
    NamespaceNotFound(String),

    /// A name with this qualified path already exists.
    #[error("duplicate registration: {name} already registered as {kind}")]
    DuplicateRegistration {
        /// The qualified name that was duplicated.
        name: String,
        /// What kind of entry already holds the name (e.g. "type", "attribute").
        kind: String,
    },

    /// A registration step ran before an area it requires had completed.
    #[error("'{callback}' requires '{required}' to be registered first")]
    DependencyNotRegistered {
        /// The callback that ran too early.
        callback: String,
        /// The area that was still missing.
        required: String,
    },

    /// The host runtime rejected an operation on the module object.
    #[error("host module error: {0}")]
    Host(String),
}

impl RegistrationError {
    /// Create a duplicate-registration error.
    pub fn duplicate(name: impl Into<String>, kind: impl Into<String>) -> Self {
        RegistrationError::DuplicateRegistration {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

// ============================================================================
// Drain Errors
// ============================================================================

/// A registration failure raised while draining a work-list.
///
/// The wrapped [`RegistrationError`] is the one the callback returned,
/// untouched. Callbacks that had not run yet stay in the work-list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("registration '{callback}' failed: {source}")]
pub struct DrainError {
    /// Name of the callback that failed.
    pub callback: String,
    /// The error it returned.
    #[source]
    pub source: RegistrationError,
}

impl DrainError {
    /// The error kind raised by the callback.
    pub fn kind(&self) -> &RegistrationError {
        &self.source
    }
}

// ============================================================================
// Native Errors
// ============================================================================

/// Errors reported by the native library's global initializer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    /// The library could not complete its one-time initialization.
    #[error("native initialization failed: {0}")]
    InitializationFailed(String),

    /// The library cannot be used on this platform or in this process.
    #[error("native library unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_error_display_names_callback() {
        let err = DrainError {
            callback: "pipeline".to_string(),
            source: RegistrationError::TypeNotFound("Node".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "registration 'pipeline' failed: type not found: Node"
        );
        assert_eq!(
            err.kind(),
            &RegistrationError::TypeNotFound("Node".to_string())
        );
    }

    #[test]
    fn duplicate_helper() {
        let err = RegistrationError::duplicate("__version__", "attribute");
        assert_eq!(
            err.to_string(),
            "duplicate registration: __version__ already registered as attribute"
        );
    }
}
