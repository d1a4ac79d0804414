//! Building the complete binding module.
//!
//! Construction runs in a fixed sequence:
//!
//! 1. attach the build metadata attributes
//! 2. order the registrars and seed the work-list
//! 3. drain the work-list
//! 4. resolve the signal-handler switch and initialize the native library
//!
//! A failure in steps 1 to 3 aborts construction. Step 4 only runs after a
//! successful drain and never fails.

use depthai_core::{DrainReport, InitGuard, Module, ModuleHandle, NativeLibrary};
use depthai_registry::{Registrar, RegistrationPlan};

use crate::build_info::BuildInfo;
use crate::config::BindingsConfig;
use crate::error::{BindingError, BindingResult};
use crate::init_gate::{self, GateOutcome};
use crate::probe::{EnvironmentProbe, NamespaceProbe};
use crate::runtime::{self, HostRuntime};

/// Summary of a successful module construction.
#[derive(Debug, Clone)]
pub struct CompositionReport {
    /// Callbacks executed while draining the work-list.
    pub drain: DrainReport,
    /// Resolved signal-handler switch passed to the native library.
    pub install_signal_handler: bool,
    /// Outcome of the native initialization call.
    pub init: GateOutcome,
}

/// Drives construction of the binding module.
///
/// # Example
///
/// ```
/// use depthai::{Composer, StaticNamespaces};
/// use depthai_core::{InitGuard, Module, ModuleHandle, NativeError, NativeLibrary};
///
/// struct Offline;
///
/// impl NativeLibrary for Offline {
///     fn initialize(&self, _: &str, _: bool) -> Result<(), NativeError> {
///         Err(NativeError::Unavailable("offline".into()))
///     }
/// }
///
/// let guard = InitGuard::new(Offline);
/// let composer = Composer::new(&guard).with_probe(StaticNamespaces::new());
///
/// let mut module = Module::new("depthai");
/// let report = composer.compose(&mut module).unwrap();
/// assert!(module.contains_type("Device"));
/// assert!(!report.init.is_initialized());
/// ```
pub struct Composer<'a, L> {
    config: BindingsConfig,
    build: BuildInfo,
    probe: Box<dyn NamespaceProbe + 'a>,
    native: &'a InitGuard<L>,
}

impl Composer<'static, HostRuntime> {
    /// Composer for the process-wide runtime, probing the environment.
    pub fn for_process() -> Self {
        Composer::new(runtime::process_runtime())
    }
}

impl<'a, L: NativeLibrary> Composer<'a, L> {
    /// Composer reading the switch from the process environment as well as
    /// the default namespaces.
    pub fn new(native: &'a InitGuard<L>) -> Self {
        let config = BindingsConfig::default().with_extra_namespace(EnvironmentProbe::NAMESPACE);
        Self {
            config,
            build: BuildInfo::from_build_env(),
            probe: Box::new(EnvironmentProbe::new()),
            native,
        }
    }

    pub fn with_config(mut self, config: BindingsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_build_info(mut self, build: BuildInfo) -> Self {
        self.build = build;
        self
    }

    pub fn with_probe(mut self, probe: impl NamespaceProbe + 'a) -> Self {
        self.probe = Box::new(probe);
        self
    }

    pub fn config(&self) -> &BindingsConfig {
        &self.config
    }

    pub fn build_info(&self) -> &BuildInfo {
        &self.build
    }

    /// Build a fresh in-memory module named after the configuration.
    pub fn build_module(&self) -> BindingResult<(Module, CompositionReport)> {
        let mut module = Module::new(self.config.module_name.clone());
        let report = self.compose(&mut module)?;
        Ok((module, report))
    }

    /// Register every functional area on `module`.
    pub fn compose<M: ModuleHandle + 'static>(
        &self,
        module: &mut M,
    ) -> BindingResult<CompositionReport> {
        self.compose_with(module, depthai_bindings::registrars())
    }

    /// Register the given areas on `module`.
    pub fn compose_with<M: ModuleHandle + 'static>(
        &self,
        module: &mut M,
        registrars: Vec<Registrar<M>>,
    ) -> BindingResult<CompositionReport> {
        #[cfg(feature = "profiling")]
        profiling::scope!("Composer::compose");

        let span = tracing::debug_span!("compose", module = module.name());
        let _enter = span.enter();

        for (name, value) in self.build.attributes() {
            module
                .add_attribute(name, value)
                .map_err(BindingError::Metadata)?;
        }

        let plan = RegistrationPlan::new(registrars)?;
        let drain = plan.into_work_list().drain(module)?;
        tracing::debug!(
            callbacks = drain.count(),
            pushed = drain.pushed(),
            "module registered"
        );

        let install_signal_handler =
            init_gate::resolve_install_signal_handler(&self.config, self.probe.as_ref());
        let init = init_gate::run_initialization_gate(
            self.native,
            &self.build.banner(),
            install_signal_handler,
        );

        Ok(CompositionReport {
            drain,
            install_signal_handler,
            init,
        })
    }
}
