//! Bootloader flashing and configuration.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static DEVICE_BOOTLOADER: Group = Group::new("device_bootloader")
    .requires(&["DeviceInfo", "XLinkConnection", "Version"])
    .types(&[
        TypeSpec::class("DeviceBootloader"),
        TypeSpec::enumeration("Type", &["AUTO", "USB", "NETWORK"]).within("DeviceBootloader"),
        TypeSpec::enumeration("Memory", &["AUTO", "FLASH", "EMMC"]).within("DeviceBootloader"),
        TypeSpec::enumeration(
            "Section",
            &[
                "AUTO",
                "HEADER",
                "BOOTLOADER",
                "BOOTLOADER_CONFIG",
                "APPLICATION",
            ],
        )
        .within("DeviceBootloader"),
        TypeSpec::class("Config").within("DeviceBootloader"),
        TypeSpec::class("ApplicationInfo").within("DeviceBootloader"),
    ]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    DEVICE_BOOTLOADER.register(module)
}
