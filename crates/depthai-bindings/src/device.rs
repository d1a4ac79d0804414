//! Device handles: connecting, starting pipelines, reading queues and
//! device health.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static DEVICE: Group = Group::new("device")
    .requires(&[
        "Pipeline",
        "DeviceInfo",
        "DataOutputQueue",
        "DataInputQueue",
        "Version",
        "LogLevel",
        "UsbSpeed",
    ])
    .types(&[
        TypeSpec::class("CrashDump"),
        TypeSpec::class("BoardConfig"),
        TypeSpec::class("DeviceBase"),
        TypeSpec::class("Config").within("DeviceBase"),
        TypeSpec::class("Device").extends("DeviceBase"),
    ]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    DEVICE.register(module)
}
