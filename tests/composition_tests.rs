//! End-to-end tests for building the binding module.
//!
//! These drive [`Composer`] against the in-memory module with the real area
//! registrars and a scripted native library.

use depthai::prelude::*;
use depthai::{EnvironmentProbe, SIGNAL_HANDLER_KEY, StaticNamespaces};
use depthai_core::{Callstack, RegistrationCallback, RegistrationError, WorkList};
use depthai_registry::{END_OF_CALLSTACK, Registrar};
use parking_lot::Mutex;

/// Records every initialization call and answers with a fixed result.
struct ScriptedLibrary {
    fail: bool,
    calls: Mutex<Vec<(String, bool)>>,
}

impl ScriptedLibrary {
    fn working() -> Self {
        Self {
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().clone()
    }
}

impl NativeLibrary for ScriptedLibrary {
    fn initialize(&self, banner: &str, install_signal_handler: bool) -> Result<(), NativeError> {
        let call = (banner.to_string(), install_signal_handler);
        self.calls.lock().push(call);
        if self.fail {
            Err(NativeError::InitializationFailed("no devices".to_string()))
        } else {
            Ok(())
        }
    }
}

fn build_info() -> BuildInfo {
    BuildInfo::from_build_env()
        .with_version("2.24.0.0")
        .with_commit("0123abcd", "2024-01-10 12:00:00")
        .with_build_datetime("2024-01-11 08:30:00")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Registration order
// =============================================================================

#[test]
fn test_canonical_area_order() {
    init_tracing();
    let guard = InitGuard::new(ScriptedLibrary::working());
    let composer = Composer::new(&guard).with_probe(StaticNamespaces::new());
    let (_, report) = composer.build_module().unwrap();

    let areas: Vec<&str> = report
        .drain
        .executed()
        .into_iter()
        .filter(|name| !name.contains("::"))
        .collect();
    assert_eq!(
        areas,
        [
            "common",
            "datatypes",
            "log",
            "version",
            "data_queue",
            "openvino",
            "nodes",
            "asset_manager",
            "pipeline",
            "xlink",
            "device",
            "device_bootloader",
            "calibration_handler",
            "ros",
            END_OF_CALLSTACK,
        ]
    );
}

#[test]
fn test_group_steps_expand_in_place() {
    let guard = InitGuard::new(ScriptedLibrary::working());
    let (_, report) = Composer::new(&guard)
        .with_probe(StaticNamespaces::new())
        .build_module()
        .unwrap();

    let executed = report.drain.executed();
    let datatypes = executed.iter().position(|n| *n == "datatypes").unwrap();
    let log = executed.iter().position(|n| *n == "log").unwrap();
    assert!(
        executed[datatypes + 1..log]
            .iter()
            .all(|n| n.starts_with("datatypes::"))
    );
    assert_eq!(
        report.drain.pushed(),
        depthai_bindings::datatypes::GROUPS.len() + depthai_bindings::nodes::GROUPS.len()
    );
}

#[test]
fn test_seeded_trace_runs_pushed_items_first() {
    let trace = std::rc::Rc::new(std::cell::RefCell::new(Vec::<&'static str>::new()));
    let record = |name: &'static str| {
        let trace = trace.clone();
        move |_: &mut Module, _: &mut Callstack<'_, Module>| -> Result<(), RegistrationError> {
            trace.borrow_mut().push(name);
            Ok(())
        }
    };

    let mut list = WorkList::new();
    list.push_back(RegistrationCallback::new("X", record("X")));
    let (y1, y2) = (record("Y1"), record("Y2"));
    let y = record("Y");
    list.push_back(RegistrationCallback::new("Y", move |m: &mut Module, cs| {
        y(m, cs)?;
        cs.schedule("Y1", y1);
        cs.schedule("Y2", y2);
        Ok(())
    }));
    list.push_back(RegistrationCallback::new("Z", record("Z")));

    list.drain(&mut Module::new("depthai")).unwrap();
    assert_eq!(*trace.borrow(), ["X", "Y", "Y2", "Y1", "Z"]);
}

// =============================================================================
// Module surface
// =============================================================================

#[test]
fn test_metadata_attributes() {
    let guard = InitGuard::new(ScriptedLibrary::working());
    let (module, _) = Composer::new(&guard)
        .with_build_info(build_info())
        .with_probe(StaticNamespaces::new())
        .build_module()
        .unwrap();

    assert_eq!(module.attribute("__version__"), Some("2.24.0.0"));
    assert_eq!(module.attribute("__commit__"), Some("0123abcd"));
    assert_eq!(
        module.attribute("__commit_datetime__"),
        Some("2024-01-10 12:00:00")
    );
    assert_eq!(
        module.attribute("__build_datetime__"),
        Some("2024-01-11 08:30:00")
    );
    for name in [
        "__device_version__",
        "__bootloader_version__",
        "__device_rvc3_version__",
    ] {
        assert!(module.attribute(name).is_some(), "{name} missing");
    }
}

#[test]
fn test_metadata_attributes_are_immutable() {
    let guard = InitGuard::new(ScriptedLibrary::working());
    let (mut module, _) = Composer::new(&guard)
        .with_probe(StaticNamespaces::new())
        .build_module()
        .unwrap();

    let err = module.add_attribute("__version__", "9.9.9").unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::DuplicateRegistration { .. }
    ));
}

#[test]
fn test_custom_module_name() {
    let guard = InitGuard::new(ScriptedLibrary::working());
    let (module, _) = Composer::new(&guard)
        .with_config(BindingsConfig::default().with_module_name("depthai_sdk"))
        .with_probe(StaticNamespaces::new())
        .build_module()
        .unwrap();
    assert_eq!(module.name(), "depthai_sdk");
}

// =============================================================================
// Initialization gate
// =============================================================================

#[test]
fn test_native_initialized_with_banner() {
    let guard = InitGuard::new(ScriptedLibrary::working());
    let (_, report) = Composer::new(&guard)
        .with_build_info(build_info())
        .with_probe(StaticNamespaces::new())
        .build_module()
        .unwrap();

    assert_eq!(report.init, GateOutcome::Initialized);
    let banner =
        "Python bindings - version: 2.24.0.0 from 2024-01-10 12:00:00 build: 2024-01-11 08:30:00";
    assert_eq!(guard.library().calls(), [(banner.to_string(), true)]);
}

#[test]
fn test_native_failure_does_not_fail_construction() {
    let guard = InitGuard::new(ScriptedLibrary::failing());
    let (module, report) = Composer::new(&guard)
        .with_probe(StaticNamespaces::new())
        .build_module()
        .unwrap();

    assert!(module.contains_type("Device"));
    assert!(matches!(report.init, GateOutcome::Deferred(_)));
    assert!(!guard.is_initialized());
    assert_eq!(guard.failed_attempts(), 1);
}

#[test]
fn test_second_module_reuses_initialization() {
    let guard = InitGuard::new(ScriptedLibrary::working());
    let composer = Composer::new(&guard).with_probe(StaticNamespaces::new());
    composer.build_module().unwrap();
    let (_, report) = composer.build_module().unwrap();

    assert_eq!(report.init, GateOutcome::AlreadyInitialized);
    assert_eq!(guard.library().calls().len(), 1);
}

#[test]
fn test_signal_handler_flag_reaches_native_library() {
    let guard = InitGuard::new(ScriptedLibrary::working());
    let probe = StaticNamespaces::new().with_value("builtins", SIGNAL_HANDLER_KEY, false);
    let (_, report) = Composer::new(&guard)
        .with_probe(probe)
        .build_module()
        .unwrap();

    assert!(!report.install_signal_handler);
    assert!(!guard.library().calls()[0].1);
}

#[test]
fn test_default_composer_honours_environment_switch() {
    let guard = InitGuard::new(ScriptedLibrary::working());
    let env = EnvironmentProbe::from_vars([(SIGNAL_HANDLER_KEY, "off")]);
    let (_, report) = Composer::new(&guard)
        .with_probe(env)
        .build_module()
        .unwrap();

    assert!(!report.install_signal_handler);
    assert_eq!(guard.library().calls().len(), 1);
    assert!(!guard.library().calls()[0].1);
}

// =============================================================================
// Failures
// =============================================================================

fn missing_type(m: &mut Module, _: &mut Callstack<'_, Module>) -> Result<(), RegistrationError> {
    m.require_type("ImgFrame")
}

#[test]
fn test_registration_failure_skips_gate() {
    let guard = InitGuard::new(ScriptedLibrary::working());
    let mut module = Module::new("depthai");
    let err = Composer::new(&guard)
        .with_probe(StaticNamespaces::new())
        .compose_with(
            &mut module,
            vec![Registrar::new(Area::Common, &[], missing_type)],
        )
        .unwrap_err();

    assert!(err.is_drain());
    assert_eq!(
        err.registration_error(),
        Some(&RegistrationError::TypeNotFound("ImgFrame".to_string()))
    );
    assert!(guard.library().calls().is_empty());
}

#[test]
fn test_dependency_cycle_rejected() {
    fn ok(_: &mut Module, _: &mut Callstack<'_, Module>) -> Result<(), RegistrationError> {
        Ok(())
    }

    let guard = InitGuard::new(ScriptedLibrary::working());
    let mut module = Module::new("depthai");
    let err = Composer::new(&guard)
        .with_probe(StaticNamespaces::new())
        .compose_with(
            &mut module,
            vec![
                Registrar::new(Area::Pipeline, &[Area::Device], ok),
                Registrar::new(Area::Device, &[Area::Pipeline], ok),
            ],
        )
        .unwrap_err();

    assert!(err.is_plan());
    assert!(guard.library().calls().is_empty());
}
