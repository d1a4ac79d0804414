//! The process-wide native runtime.

use std::sync::atomic::{AtomicBool, Ordering};

use depthai_core::{InitGuard, NativeError, NativeLibrary};
use lazy_static::lazy_static;

/// Native library used when the module is built inside a host process.
///
/// Device discovery and the transport stack live outside this crate. The
/// runtime records how it was initialized so the rest of the process can
/// ask later.
#[derive(Debug, Default)]
pub struct HostRuntime {
    signal_handler: AtomicBool,
}

impl HostRuntime {
    /// Whether initialization installed the crash signal handler.
    pub fn signal_handler_installed(&self) -> bool {
        self.signal_handler.load(Ordering::Acquire)
    }
}

impl NativeLibrary for HostRuntime {
    fn initialize(&self, banner: &str, install_signal_handler: bool) -> Result<(), NativeError> {
        if banner.is_empty() {
            return Err(NativeError::InitializationFailed(
                "empty caller banner".to_string(),
            ));
        }
        tracing::info!(install_signal_handler, "{banner}");
        self.signal_handler
            .store(install_signal_handler, Ordering::Release);
        Ok(())
    }
}

lazy_static! {
    static ref RUNTIME: InitGuard<HostRuntime> = InitGuard::new(HostRuntime::default());
}

/// The guard shared by every module built in this process.
///
/// Code that needs the runtime after a deferred initialization calls
/// [`InitGuard::ensure_initialized`] on it again.
pub fn process_runtime() -> &'static InitGuard<HostRuntime> {
    &RUNTIME
}
