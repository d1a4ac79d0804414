//! One-time initialization of the native device library.
//!
//! The device library needs a single process-wide initialization call. The
//! binding module makes that call right after construction, but the call is
//! best-effort: if it fails, the next real use of the library retries through
//! the same [`InitGuard`].

use parking_lot::Mutex;

use crate::error::NativeError;

/// The native library's global initialization entry point.
pub trait NativeLibrary {
    /// Initialize the library.
    ///
    /// `banner` identifies the caller in the library's logs.
    fn initialize(&self, banner: &str, install_signal_handler: bool) -> Result<(), NativeError>;
}

impl<L: NativeLibrary + ?Sized> NativeLibrary for &L {
    fn initialize(&self, banner: &str, install_signal_handler: bool) -> Result<(), NativeError> {
        (**self).initialize(banner, install_signal_handler)
    }
}

/// Result of [`InitGuard::ensure_initialized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// This call performed the initialization.
    Initialized,
    /// An earlier call already succeeded; the library was not called again.
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InitState {
    Uninitialized { attempts: u32 },
    Initialized {
        banner: String,
        install_signal_handler: bool,
    },
}

/// Idempotent, retryable guard around [`NativeLibrary::initialize`].
///
/// A failed attempt leaves the guard uninitialized so a later call can try
/// again. Once an attempt succeeds the library is never called again.
pub struct InitGuard<L> {
    library: L,
    state: Mutex<InitState>,
}

impl<L: NativeLibrary> InitGuard<L> {
    pub fn new(library: L) -> Self {
        Self {
            library,
            state: Mutex::new(InitState::Uninitialized { attempts: 0 }),
        }
    }

    /// Initialize the library unless an earlier call already did.
    ///
    /// The lock is held across the library call, so concurrent callers wait
    /// for the first attempt instead of initializing twice.
    pub fn ensure_initialized(
        &self,
        banner: &str,
        install_signal_handler: bool,
    ) -> Result<InitOutcome, NativeError> {
        let mut state = self.state.lock();
        let attempts = match &*state {
            InitState::Initialized { .. } => return Ok(InitOutcome::AlreadyInitialized),
            InitState::Uninitialized { attempts } => *attempts,
        };

        match self.library.initialize(banner, install_signal_handler) {
            Ok(()) => {
                tracing::debug!(banner, install_signal_handler, "native library initialized");
                *state = InitState::Initialized {
                    banner: banner.to_string(),
                    install_signal_handler,
                };
                Ok(InitOutcome::Initialized)
            }
            Err(err) => {
                *state = InitState::Uninitialized {
                    attempts: attempts + 1,
                };
                Err(err)
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(*self.state.lock(), InitState::Initialized { .. })
    }

    /// Number of failed initialization attempts so far.
    pub fn failed_attempts(&self) -> u32 {
        match *self.state.lock() {
            InitState::Uninitialized { attempts } => attempts,
            InitState::Initialized { .. } => 0,
        }
    }

    /// Banner and signal-handler flag of the successful initialization.
    pub fn initialized_with(&self) -> Option<(String, bool)> {
        match &*self.state.lock() {
            InitState::Initialized {
                banner,
                install_signal_handler,
            } => Some((banner.clone(), *install_signal_handler)),
            InitState::Uninitialized { .. } => None,
        }
    }

    pub fn library(&self) -> &L {
        &self.library
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails the first `failures` calls, then succeeds.
    struct Flaky {
        failures: u32,
        calls: AtomicU32,
    }

    impl Flaky {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }
    }

    impl NativeLibrary for Flaky {
        fn initialize(&self, _banner: &str, _install: bool) -> Result<(), NativeError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                Err(NativeError::InitializationFailed(format!("attempt {n}")))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn initializes_once() {
        let guard = InitGuard::new(Flaky::new(0));
        assert_eq!(
            guard.ensure_initialized("banner", true).unwrap(),
            InitOutcome::Initialized
        );
        assert_eq!(
            guard.ensure_initialized("other", false).unwrap(),
            InitOutcome::AlreadyInitialized
        );
        assert_eq!(guard.library().calls.load(Ordering::SeqCst), 1);
        assert_eq!(guard.initialized_with(), Some(("banner".to_string(), true)));
    }

    #[test]
    fn failure_allows_retry() {
        let guard = InitGuard::new(Flaky::new(2));
        assert!(guard.ensure_initialized("b", true).is_err());
        assert!(guard.ensure_initialized("b", true).is_err());
        assert!(!guard.is_initialized());
        assert_eq!(guard.failed_attempts(), 2);

        assert_eq!(
            guard.ensure_initialized("b", false).unwrap(),
            InitOutcome::Initialized
        );
        assert!(guard.is_initialized());
        assert_eq!(guard.initialized_with(), Some(("b".to_string(), false)));
    }
}
