//! The depthai binding module.
//!
//! Builds the module in one pass: version metadata, every functional area
//! in dependency order, then a best-effort initialization of the native
//! runtime. See [`Composer`] for the sequence.
//!
//! With the `python` feature the crate is also a Python extension module
//! named `depthai`.

mod build_info;
mod composer;
mod config;
mod error;
mod init_gate;
mod probe;
mod runtime;

#[cfg(feature = "python")]
pub mod python;

pub use build_info::BuildInfo;
pub use composer::{Composer, CompositionReport};
pub use config::{BindingsConfig, DEFAULT_PROBE_NAMESPACES, SIGNAL_HANDLER_KEY};
pub use error::{BindingError, BindingResult};
pub use init_gate::{GateOutcome, resolve_install_signal_handler, run_initialization_gate};
pub use probe::{EnvironmentProbe, NamespaceProbe, ProbeValue, StaticNamespaces};
pub use runtime::{HostRuntime, process_runtime};

pub mod prelude {
    pub use crate::{BindingError, BindingsConfig, BuildInfo, Composer, GateOutcome};
    pub use depthai_core::{InitGuard, Module, ModuleHandle, NativeError, NativeLibrary};
    pub use depthai_registry::{Area, RegistrationPlan};
}
