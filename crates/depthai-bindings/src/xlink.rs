//! XLink transport: device discovery, connections and link errors.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static XLINK: Group = Group::new("xlink").types(&[
    TypeSpec::enumeration(
        "XLinkDeviceState",
        &[
            "X_LINK_ANY_STATE",
            "X_LINK_BOOTED",
            "X_LINK_UNBOOTED",
            "X_LINK_BOOTLOADER",
            "X_LINK_FLASH_BOOTED",
            "X_LINK_GATE",
        ],
    ),
    TypeSpec::enumeration(
        "XLinkProtocol",
        &[
            "X_LINK_USB_VSC",
            "X_LINK_USB_CDC",
            "X_LINK_PCIE",
            "X_LINK_IPC",
            "X_LINK_TCP_IP",
            "X_LINK_ANY_PROTOCOL",
        ],
    ),
    TypeSpec::enumeration(
        "XLinkPlatform",
        &[
            "X_LINK_ANY_PLATFORM",
            "X_LINK_MYRIAD_2",
            "X_LINK_MYRIAD_X",
            "X_LINK_RVC3",
        ],
    ),
    TypeSpec::class("DeviceInfo"),
    TypeSpec::class("XLinkConnection"),
    TypeSpec::class("XLinkError"),
    TypeSpec::class("XLinkReadError").extends("XLinkError"),
    TypeSpec::class("XLinkWriteError").extends("XLinkError"),
]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    XLINK.register(module)
}
