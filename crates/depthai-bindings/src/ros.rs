//! ROS message conversion helpers, registered last as an extension area.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static ROS: Group = Group::new("ros")
    .requires(&["ImgFrame", "IMUData", "SpatialImgDetections"])
    .types(&[
        TypeSpec::class("ImageConverter").within("ros"),
        TypeSpec::class("ImuConverter").within("ros"),
        TypeSpec::class("SpatialDetectionConverter").within("ros"),
    ]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    module.add_submodule("ros", "ROS message converters")?;
    ROS.register(module)
}
