//! Functional areas of the binding module.

use std::fmt;

use bitflags::bitflags;

/// A functional area of the binding module.
///
/// Variants are listed in the order the areas are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Area {
    Common,
    Datatypes,
    Log,
    Version,
    DataQueue,
    OpenVino,
    Nodes,
    AssetManager,
    Pipeline,
    XLink,
    Device,
    DeviceBootloader,
    CalibrationHandler,
    Ros,
}

impl Area {
    /// All areas in registration order.
    pub const ALL: [Area; 14] = [
        Area::Common,
        Area::Datatypes,
        Area::Log,
        Area::Version,
        Area::DataQueue,
        Area::OpenVino,
        Area::Nodes,
        Area::AssetManager,
        Area::Pipeline,
        Area::XLink,
        Area::Device,
        Area::DeviceBootloader,
        Area::CalibrationHandler,
        Area::Ros,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Area::Common => "common",
            Area::Datatypes => "datatypes",
            Area::Log => "log",
            Area::Version => "version",
            Area::DataQueue => "data_queue",
            Area::OpenVino => "openvino",
            Area::Nodes => "nodes",
            Area::AssetManager => "asset_manager",
            Area::Pipeline => "pipeline",
            Area::XLink => "xlink",
            Area::Device => "device",
            Area::DeviceBootloader => "device_bootloader",
            Area::CalibrationHandler => "calibration_handler",
            Area::Ros => "ros",
        }
    }

    /// The single-bit set containing this area.
    pub fn flag(self) -> AreaSet {
        AreaSet::from_bits_truncate(1 << self as u16)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of areas, used to track which areas have finished registering.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AreaSet: u16 {
        const COMMON = 1 << 0;
        const DATATYPES = 1 << 1;
        const LOG = 1 << 2;
        const VERSION = 1 << 3;
        const DATA_QUEUE = 1 << 4;
        const OPENVINO = 1 << 5;
        const NODES = 1 << 6;
        const ASSET_MANAGER = 1 << 7;
        const PIPELINE = 1 << 8;
        const XLINK = 1 << 9;
        const DEVICE = 1 << 10;
        const DEVICE_BOOTLOADER = 1 << 11;
        const CALIBRATION_HANDLER = 1 << 12;
        const ROS = 1 << 13;
    }
}

impl AreaSet {
    pub fn contains_area(self, area: Area) -> bool {
        self.contains(area.flag())
    }

    pub fn insert_area(&mut self, area: Area) {
        self.insert(area.flag());
    }
}

impl FromIterator<Area> for AreaSet {
    fn from_iter<I: IntoIterator<Item = Area>>(iter: I) -> Self {
        iter.into_iter()
            .fold(AreaSet::empty(), |set, area| set | area.flag())
    }
}
