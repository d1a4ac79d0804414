//! Message datatypes exchanged between host and device.
//!
//! The area registers `DatatypeEnum` itself and then pushes one step per
//! datatype group. Groups run in the order listed here, before any other
//! pending area, so `ADatatype` and `Buffer` exist before the messages
//! deriving from them.

use depthai_core::{Callstack, ModuleHandle, RegistrationError, TypeDecl};

use crate::decl::{Group, TypeSpec, schedule_groups};

const DATATYPE_ENUM: &[&str] = &[
    "ADatatype",
    "Buffer",
    "ImgFrame",
    "EncodedFrame",
    "NNData",
    "ImageManipConfig",
    "CameraControl",
    "ImgDetections",
    "SpatialImgDetections",
    "SystemInformation",
    "SpatialLocationCalculatorConfig",
    "SpatialLocationCalculatorData",
    "EdgeDetectorConfig",
    "AprilTagConfig",
    "AprilTags",
    "Tracklets",
    "IMUData",
    "StereoDepthConfig",
    "FeatureTrackerConfig",
    "ToFConfig",
    "TrackedFeatures",
    "PointCloudConfig",
    "PointCloudData",
    "MessageGroup",
];

/// Datatype groups in registration order.
pub static GROUPS: [Group; 19] = [
    Group::new("adatatype")
        .types(&[
            TypeSpec::class("ADatatype"),
            TypeSpec::class("Buffer").extends("ADatatype"),
        ])
        .functions(&[(
            "isDatatypeSubclassOf",
            "(parent: DatatypeEnum, children: DatatypeEnum) -> bool",
        )]),
    Group::new("img_frame").requires(&["Timestamp"]).types(&[
        TypeSpec::class("ImgFrame").extends("Buffer"),
        TypeSpec::enumeration(
            "Type",
            &[
                "YUV420p", "NV12", "RAW8", "RAW10", "GRAY8", "RGB888p", "BGR888i", "NONE",
            ],
        )
        .within("ImgFrame"),
    ]),
    Group::new("encoded_frame").types(&[
        TypeSpec::class("EncodedFrame").extends("Buffer"),
        TypeSpec::enumeration("Profile", &["JPEG", "AVC", "HEVC"]).within("EncodedFrame"),
        TypeSpec::enumeration("FrameType", &["I", "P", "B", "Unknown"]).within("EncodedFrame"),
    ]),
    Group::new("nn_data").types(&[
        TypeSpec::class("TensorInfo"),
        TypeSpec::class("NNData").extends("Buffer"),
    ]),
    Group::new("image_manip_config")
        .types(&[TypeSpec::class("ImageManipConfig").extends("Buffer")]),
    Group::new("camera_control").types(&[
        TypeSpec::class("CameraControl").extends("Buffer"),
        TypeSpec::enumeration(
            "AutoFocusMode",
            &[
                "OFF",
                "AUTO",
                "MACRO",
                "CONTINUOUS_VIDEO",
                "CONTINUOUS_PICTURE",
                "EDOF",
            ],
        )
        .within("CameraControl"),
        TypeSpec::enumeration(
            "AutoWhiteBalanceMode",
            &[
                "OFF",
                "AUTO",
                "INCANDESCENT",
                "FLUORESCENT",
                "DAYLIGHT",
                "SHADE",
            ],
        )
        .within("CameraControl"),
        TypeSpec::enumeration(
            "AntiBandingMode",
            &["OFF", "MAINS_50_HZ", "MAINS_60_HZ", "AUTO"],
        )
        .within("CameraControl"),
    ]),
    Group::new("img_detections").requires(&["Point3f"]).types(&[
        TypeSpec::class("ImgDetection"),
        TypeSpec::class("ImgDetections").extends("Buffer"),
        TypeSpec::class("SpatialImgDetection").extends("ImgDetection"),
        TypeSpec::class("SpatialImgDetections").extends("Buffer"),
    ]),
    Group::new("system_information")
        .requires(&["ChipTemperature", "CpuUsage", "MemoryInfo"])
        .types(&[TypeSpec::class("SystemInformation").extends("Buffer")]),
    Group::new("spatial_location_calculator")
        .requires(&["Rect"])
        .types(&[
            TypeSpec::class("SpatialLocationCalculatorConfigThresholds"),
            TypeSpec::class("SpatialLocationCalculatorConfigData"),
            TypeSpec::class("SpatialLocationCalculatorConfig").extends("Buffer"),
            TypeSpec::class("SpatialLocations"),
            TypeSpec::class("SpatialLocationCalculatorData").extends("Buffer"),
        ]),
    Group::new("edge_detector_config")
        .types(&[TypeSpec::class("EdgeDetectorConfig").extends("Buffer")]),
    Group::new("april_tag").types(&[
        TypeSpec::class("AprilTagConfig").extends("Buffer"),
        TypeSpec::class("AprilTag"),
        TypeSpec::class("AprilTags").extends("Buffer"),
    ]),
    Group::new("tracklets").types(&[
        TypeSpec::class("Tracklet"),
        TypeSpec::class("Tracklets").extends("Buffer"),
    ]),
    Group::new("imu_data").types(&[
        TypeSpec::class("IMUPacket"),
        TypeSpec::class("IMUData").extends("Buffer"),
    ]),
    Group::new("stereo_depth_config")
        .types(&[TypeSpec::class("StereoDepthConfig").extends("Buffer")]),
    Group::new("feature_tracker")
        .requires(&["Point2f"])
        .types(&[
            TypeSpec::class("FeatureTrackerConfig").extends("Buffer"),
            TypeSpec::class("TrackedFeature"),
            TypeSpec::class("TrackedFeatures").extends("Buffer"),
        ]),
    Group::new("tof_config").types(&[TypeSpec::class("ToFConfig").extends("Buffer")]),
    Group::new("point_cloud").types(&[
        TypeSpec::class("PointCloudConfig").extends("Buffer"),
        TypeSpec::class("PointCloudData").extends("Buffer"),
    ]),
    Group::new("message_group").types(&[TypeSpec::class("MessageGroup").extends("Buffer")]),
    Group::new("raw_buffer").types(&[TypeSpec::class("RawBuffer")]),
];

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    callstack: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    let datatype_enum = TypeDecl::enumeration("DatatypeEnum", DATATYPE_ENUM.iter().copied());
    module.add_type(datatype_enum)?;
    schedule_groups(callstack, "datatypes", &GROUPS);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_message_in_the_enum_is_declared() {
        let declared: Vec<&str> = GROUPS
            .iter()
            .flat_map(|g| g.types)
            .filter(|t| t.namespace.is_none())
            .map(|t| t.name)
            .collect();
        for name in DATATYPE_ENUM {
            assert!(declared.contains(name), "{name} has no declaration");
        }
    }

    #[test]
    fn base_types_come_first() {
        assert_eq!(GROUPS[0].label, "adatatype");
        assert_eq!(GROUPS[0].types[1].name, "Buffer");
    }
}
