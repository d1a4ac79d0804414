//! The pipeline graph that nodes are created in and linked through.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static PIPELINE: Group = Group::new("pipeline")
    .requires(&["Node", "AssetManager", "OpenVINO.Version"])
    .types(&[
        TypeSpec::class("GlobalProperties"),
        TypeSpec::class("Pipeline"),
    ]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    PIPELINE.register(module)
}
