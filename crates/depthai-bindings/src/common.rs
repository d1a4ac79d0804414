//! Types shared by every other area: geometry, sockets, sensor and
//! calibration descriptions, device health readings.
//!
//! This area is the initial call of the composition and requires nothing.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static COMMON: Group = Group::new("common").types(&[
    TypeSpec::class("Timestamp"),
    TypeSpec::class("Point2f"),
    TypeSpec::class("Point3f"),
    TypeSpec::class("Size2f"),
    TypeSpec::class("Rect"),
    TypeSpec::class("RotatedRect"),
    TypeSpec::enumeration(
        "CameraBoardSocket",
        &[
            "AUTO", "CAM_A", "CAM_B", "CAM_C", "CAM_D", "CAM_E", "CAM_F", "CAM_G", "CAM_H",
        ],
    ),
    TypeSpec::enumeration("CameraSensorType", &["COLOR", "MONO", "TOF", "THERMAL"]),
    TypeSpec::enumeration(
        "CameraImageOrientation",
        &[
            "AUTO",
            "NORMAL",
            "HORIZONTAL_MIRROR",
            "VERTICAL_FLIP",
            "ROTATE_180_DEG",
        ],
    ),
    TypeSpec::enumeration(
        "UsbSpeed",
        &["UNKNOWN", "LOW", "FULL", "HIGH", "SUPER", "SUPER_PLUS"],
    ),
    TypeSpec::enumeration("ProcessorType", &["LEON_CSS", "LEON_MSS"]),
    TypeSpec::enumeration("DetectionNetworkType", &["YOLO", "MOBILENET"]),
    TypeSpec::enumeration("SerializationType", &["LIBNOP", "JSON", "JSON_MSGPACK"]),
    TypeSpec::enumeration(
        "Interpolation",
        &[
            "BILINEAR",
            "BICUBIC",
            "NEAREST_NEIGHBOR",
            "BYPASS",
            "DEFAULT",
            "DEFAULT_DISPARITY_DEPTH",
        ],
    ),
    TypeSpec::enumeration("FrameEvent", &["NONE", "READOUT_START", "READOUT_END"]),
    TypeSpec::enumeration(
        "Colormap",
        &["NONE", "TURBO", "JET", "STEREO_TURBO", "STEREO_JET"],
    ),
    TypeSpec::class("ChipTemperature"),
    TypeSpec::class("CpuUsage"),
    TypeSpec::class("MemoryInfo"),
    TypeSpec::class("CameraSensorConfig"),
    TypeSpec::class("CameraFeatures"),
    TypeSpec::class("CameraInfo"),
    TypeSpec::class("Extrinsics"),
    TypeSpec::class("StereoRectification"),
    TypeSpec::class("EepromData"),
    TypeSpec::class("DetectionParserOptions"),
]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    COMMON.register(module)
}
