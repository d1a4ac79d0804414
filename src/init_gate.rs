//! Native initialization after a successful build.
//!
//! Neither the probe nor the native call can fail module construction. A
//! probe that cannot answer leaves the default in place, and a failed native
//! call is logged and deferred to the next real use of the library.

use depthai_core::{InitGuard, InitOutcome, NativeError, NativeLibrary};

use crate::config::BindingsConfig;
use crate::probe::NamespaceProbe;

/// What happened at the initialization gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// The native library was initialized by this call.
    Initialized,
    /// The native library had already been initialized.
    AlreadyInitialized,
    /// Initialization failed and will be retried on first use.
    Deferred(NativeError),
}

impl GateOutcome {
    pub fn is_initialized(&self) -> bool {
        !matches!(self, GateOutcome::Deferred(_))
    }
}

/// Resolve the signal-handler switch.
///
/// Starts from the configured default and ANDs in every namespace that
/// defines the key as a boolean. Any namespace can turn the handler off;
/// none can turn it back on.
pub fn resolve_install_signal_handler<P>(config: &BindingsConfig, probe: &P) -> bool
where
    P: NamespaceProbe + ?Sized,
{
    let key = config.signal_handler_key.as_str();
    let mut install = config.install_signal_handler;
    for namespace in &config.probe_namespaces {
        match probe.try_read(namespace, key) {
            Some(value) => {
                tracing::debug!(namespace = namespace.as_str(), key, value, "switch found");
                install &= value;
            }
            None => tracing::trace!(namespace = namespace.as_str(), key, "switch not set"),
        }
    }
    install
}

/// Initialize the native library, swallowing any failure.
pub fn run_initialization_gate<L: NativeLibrary>(
    guard: &InitGuard<L>,
    banner: &str,
    install_signal_handler: bool,
) -> GateOutcome {
    match guard.ensure_initialized(banner, install_signal_handler) {
        Ok(InitOutcome::Initialized) => GateOutcome::Initialized,
        Ok(InitOutcome::AlreadyInitialized) => GateOutcome::AlreadyInitialized,
        Err(err) => {
            tracing::debug!(error = %err, "native initialization deferred");
            GateOutcome::Deferred(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::StaticNamespaces;

    const KEY: &str = "DEPTHAI_INSTALL_SIGNAL_HANDLER";

    fn resolve(ns: &StaticNamespaces) -> bool {
        resolve_install_signal_handler(&BindingsConfig::default(), ns)
    }

    #[test]
    fn absent_everywhere_keeps_default() {
        assert!(resolve(&StaticNamespaces::new()));
        let off = BindingsConfig::default().with_install_signal_handler(false);
        let empty = StaticNamespaces::new();
        assert!(!resolve_install_signal_handler(&off, &empty));
    }

    #[test]
    fn any_false_disables() {
        let builtins_off = StaticNamespaces::new().with_value("builtins", KEY, false);
        assert!(!resolve(&builtins_off));
        assert!(!resolve(
            &StaticNamespaces::new()
                .with_value("sys", KEY, false)
                .with_value("builtins", KEY, true)
        ));
    }

    #[test]
    fn unprobed_namespaces_are_ignored() {
        let os_off = StaticNamespaces::new().with_value("os", KEY, false);
        assert!(resolve(&os_off));
    }

    struct Broken;

    impl NativeLibrary for Broken {
        fn initialize(&self, _: &str, _: bool) -> Result<(), NativeError> {
            Err(NativeError::Unavailable("no device runtime".into()))
        }
    }

    #[test]
    fn failure_is_deferred() {
        let guard = InitGuard::new(Broken);
        let outcome = run_initialization_gate(&guard, "banner", true);
        assert_eq!(
            outcome,
            GateOutcome::Deferred(NativeError::Unavailable("no device runtime".into()))
        );
        assert!(!outcome.is_initialized());
        assert_eq!(guard.failed_attempts(), 1);
    }
}
