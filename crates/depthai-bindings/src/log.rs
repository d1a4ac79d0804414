//! Log levels and log messages forwarded from the device.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static LOG: Group = Group::new("log").requires(&["Timestamp"]).types(&[
    TypeSpec::enumeration(
        "LogLevel",
        &["TRACE", "DEBUG", "INFO", "WARN", "ERR", "CRITICAL", "OFF"],
    ),
    TypeSpec::class("LogMessage"),
]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    LOG.register(module)
}
