//! Pipeline nodes.
//!
//! The area registers the `Node` base class and the `node` submodule, then
//! pushes one step per node group. Derived networks are grouped after the
//! node they extend.

use depthai_core::{Callstack, ModuleHandle, RegistrationError, TypeDecl};

use crate::decl::{Group, TypeSpec, schedule_groups};

/// A node class in the `node` submodule deriving from `Node`.
const fn node(name: &'static str) -> TypeSpec {
    TypeSpec::class(name).within("node").extends("Node")
}

/// Node groups in registration order.
pub static GROUPS: [Group; 18] = [
    Group::new("xlink").types(&[node("XLinkIn"), node("XLinkOut")]),
    Group::new("cameras")
        .requires(&["CameraControl", "CameraBoardSocket", "ImgFrame"])
        .types(&[node("ColorCamera"), node("MonoCamera"), node("Camera")]),
    Group::new("stereo_depth")
        .requires(&["StereoDepthConfig"])
        .types(&[node("StereoDepth")]),
    Group::new("neural_network")
        .requires(&["NNData", "OpenVINO.Blob"])
        .types(&[node("NeuralNetwork")]),
    Group::new("detection_network")
        .requires(&["ImgDetections", "DetectionNetworkType"])
        .types(&[
            node("DetectionNetwork").extends("node.NeuralNetwork"),
            node("MobileNetDetectionNetwork").extends("node.DetectionNetwork"),
            node("YoloDetectionNetwork").extends("node.DetectionNetwork"),
        ]),
    Group::new("spatial_detection_network")
        .requires(&["SpatialImgDetections"])
        .types(&[
            node("SpatialDetectionNetwork").extends("node.DetectionNetwork"),
            node("MobileNetSpatialDetectionNetwork").extends("node.SpatialDetectionNetwork"),
            node("YoloSpatialDetectionNetwork").extends("node.SpatialDetectionNetwork"),
        ]),
    Group::new("image_manip")
        .requires(&["ImageManipConfig"])
        .types(&[node("ImageManip"), node("Warp"), node("Cast")]),
    Group::new("video_encoder")
        .requires(&["EncodedFrame.Profile"])
        .types(&[node("VideoEncoder")]),
    Group::new("spi").types(&[node("SPIOut"), node("SPIIn")]),
    Group::new("imu")
        .requires(&["IMUData"])
        .types(&[node("IMU")]),
    Group::new("system_logger")
        .requires(&["SystemInformation"])
        .types(&[node("SystemLogger")]),
    Group::new("spatial_location_calculator")
        .requires(&["SpatialLocationCalculatorConfig"])
        .types(&[node("SpatialLocationCalculator")]),
    Group::new("object_tracker")
        .requires(&["Tracklets"])
        .types(&[node("ObjectTracker")]),
    Group::new("script").types(&[node("Script")]),
    Group::new("feature_detection")
        .requires(&[
            "EdgeDetectorConfig",
            "FeatureTrackerConfig",
            "AprilTagConfig",
        ])
        .types(&[
            node("EdgeDetector"),
            node("FeatureTracker"),
            node("AprilTag"),
        ]),
    Group::new("detection_parser")
        .requires(&["DetectionParserOptions"])
        .types(&[node("DetectionParser")]),
    Group::new("depth_sensors")
        .requires(&["ToFConfig", "PointCloudConfig"])
        .types(&[node("ToF"), node("PointCloud")]),
    Group::new("utility")
        .requires(&["MessageGroup"])
        .types(&[node("UVC"), node("Sync"), node("MessageDemux")]),
];

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    callstack: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    module.add_type(TypeDecl::class("Node"))?;
    module.add_type(TypeDecl::class("Input").in_namespace("Node"))?;
    module.add_type(TypeDecl::class("Output").in_namespace("Node"))?;
    module.add_type(TypeDecl::class("Connection").in_namespace("Node"))?;
    module.add_submodule("node", "Nodes that can be created in a Pipeline")?;
    schedule_groups(callstack, "nodes", &GROUPS);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_lives_in_node_namespace() {
        for group in &GROUPS {
            for spec in group.types {
                assert_eq!(spec.namespace, Some("node"), "{}", spec.name);
                assert!(spec.base.is_some(), "{} has no base", spec.name);
            }
        }
    }
}
