//! Assets (files, blobs) shipped to the device with a pipeline.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static ASSET_MANAGER: Group =
    Group::new("assets").types(&[TypeSpec::class("Asset"), TypeSpec::class("AssetManager")]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    ASSET_MANAGER.register(module)
}
