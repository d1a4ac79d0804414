//! Firmware and bootloader version comparison.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static VERSION: Group = Group::new("version").types(&[TypeSpec::class("Version")]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    VERSION.register(module)
}
