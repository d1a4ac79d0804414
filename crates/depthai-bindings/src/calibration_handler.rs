//! Reading, editing and writing device calibration.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static CALIBRATION_HANDLER: Group = Group::new("calibration_handler")
    .requires(&["EepromData", "CameraBoardSocket", "Point2f"])
    .types(&[TypeSpec::class("CalibrationHandler")]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    CALIBRATION_HANDLER.register(module)
}
