//! OpenVINO toolkit versions and compiled network blobs.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static OPENVINO: Group = Group::new("openvino").types(&[
    TypeSpec::class("OpenVINO"),
    TypeSpec::enumeration(
        "Version",
        &[
            "VERSION_2020_3",
            "VERSION_2020_4",
            "VERSION_2021_1",
            "VERSION_2021_2",
            "VERSION_2021_3",
            "VERSION_2021_4",
            "VERSION_2022_1",
            "VERSION_UNIVERSAL",
        ],
    )
    .within("OpenVINO"),
    TypeSpec::class("Blob").within("OpenVINO"),
]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    OPENVINO.register(module)
}
