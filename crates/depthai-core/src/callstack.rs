//! Deferred, ordered registration.
//!
//! A [`WorkList`] holds pending [`RegistrationCallback`]s. Draining it pops
//! the front callback and invokes it with the module and a [`Callstack`]
//! handle. The handle can only push new callbacks to the front of the
//! remaining work, so a callback's own pushes run before anything that was
//! already pending, and the last one pushed runs first:
//!
//! ```text
//! pending: [X, Y, Z]
//! run X                       -> [Y, Z]
//! run Y, push Y1, push Y2     -> [Y2, Y1, Z]
//! run Y2, Y1, Z               -> []
//! ```
//!
//! A callback cannot keep the handle past its own invocation:
//!
//! ```compile_fail
//! use depthai_core::{Callstack, Module, RegistrationCallback};
//!
//! let mut kept: Option<&mut Callstack<'_, Module>> = None;
//! let _cb = RegistrationCallback::new("leak", move |_m: &mut Module, cs| {
//!     kept = Some(cs);
//!     Ok(())
//! });
//! ```

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

use crate::error::{DrainError, RegistrationError};

type BoxedCallback<M> =
    Box<dyn FnOnce(&mut M, &mut Callstack<'_, M>) -> Result<(), RegistrationError>>;

// =============================================================================
// RegistrationCallback
// =============================================================================

/// One unit of registration work.
///
/// The name is only used for logging, drain reports and error messages.
pub struct RegistrationCallback<M> {
    name: Cow<'static, str>,
    func: BoxedCallback<M>,
}

impl<M> RegistrationCallback<M> {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: FnOnce(&mut M, &mut Callstack<'_, M>) -> Result<(), RegistrationError> + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    /// A callback that does nothing. Used as the end-of-callstack marker.
    pub fn noop(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, |_, _| Ok(()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn invoke(
        self,
        module: &mut M,
        callstack: &mut Callstack<'_, M>,
    ) -> Result<(), RegistrationError> {
        (self.func)(module, callstack)
    }
}

impl<M> fmt::Debug for RegistrationCallback<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegistrationCallback")
            .field(&self.name)
            .finish()
    }
}

// =============================================================================
// Callstack
// =============================================================================

/// Push-only view of the work-list handed to a running callback.
pub struct Callstack<'a, M> {
    pending: &'a mut VecDeque<RegistrationCallback<M>>,
    pushed: usize,
}

impl<M> Callstack<'_, M> {
    /// Schedule `callback` to run next, ahead of everything already pending.
    pub fn push_front(&mut self, callback: RegistrationCallback<M>) {
        tracing::trace!(callback = callback.name(), "scheduled");
        self.pending.push_front(callback);
        self.pushed += 1;
    }

    /// Shorthand for `push_front(RegistrationCallback::new(name, func))`.
    pub fn schedule<F>(&mut self, name: impl Into<Cow<'static, str>>, func: F)
    where
        F: FnOnce(&mut M, &mut Callstack<'_, M>) -> Result<(), RegistrationError> + 'static,
    {
        self.push_front(RegistrationCallback::new(name, func));
    }
}

// =============================================================================
// WorkList
// =============================================================================

/// Ordered list of pending registration callbacks.
pub struct WorkList<M> {
    pending: VecDeque<RegistrationCallback<M>>,
}

impl<M> Default for WorkList<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> WorkList<M> {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Append a callback behind everything already pending.
    ///
    /// Used while seeding, before draining starts.
    pub fn push_back(&mut self, callback: RegistrationCallback<M>) {
        self.pending.push_back(callback);
    }

    /// Insert a callback so it is the next one invoked.
    pub fn push_front(&mut self, callback: RegistrationCallback<M>) {
        self.pending.push_front(callback);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Names of the pending callbacks, front first.
    pub fn pending_names(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(RegistrationCallback::name)
    }

    /// Invoke callbacks front to back until the list is empty.
    ///
    /// Stops at the first failing callback and returns its error. Callbacks
    /// that had not run yet stay in the list; nothing is rolled back.
    pub fn drain(&mut self, module: &mut M) -> Result<DrainReport, DrainError> {
        #[cfg(feature = "profiling")]
        profiling::scope!("WorkList::drain");

        let mut report = DrainReport::default();
        while let Some(callback) = self.pending.pop_front() {
            let name = callback.name.clone();
            tracing::trace!(
                callback = %name,
                remaining = self.pending.len(),
                "registering"
            );

            let mut callstack = Callstack {
                pending: &mut self.pending,
                pushed: 0,
            };
            let result = callback.invoke(module, &mut callstack);
            report.pushed += callstack.pushed;

            if let Err(source) = result {
                tracing::debug!(
                    callback = %name,
                    abandoned = self.pending.len(),
                    error = %source,
                    "registration failed"
                );
                return Err(DrainError {
                    callback: name.into_owned(),
                    source,
                });
            }
            report.executed.push(name);
        }
        Ok(report)
    }
}

impl<M> fmt::Debug for WorkList<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pending_names()).finish()
    }
}

/// What a successful drain did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrainReport {
    executed: Vec<Cow<'static, str>>,
    pushed: usize,
}

impl DrainReport {
    /// Callback names in the order they ran.
    pub fn executed(&self) -> Vec<&str> {
        self.executed.iter().map(|n| n.as_ref()).collect()
    }

    /// Number of callbacks that ran.
    pub fn count(&self) -> usize {
        self.executed.len()
    }

    /// Number of callbacks pushed by other callbacks while draining.
    pub fn pushed(&self) -> usize {
        self.pushed
    }
}
