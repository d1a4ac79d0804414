//! Registrars for the functional areas of the depthai binding module.
//!
//! Each area module exposes a `bind` function with the registration
//! callback signature. [`registrars`] lists them in registration order
//! together with the areas each one requires:
//!
//! - **common** - geometry, sockets, sensor descriptions (the initial call)
//! - **datatypes** - messages; expands into one step per datatype group
//! - **log**, **version**, **data_queue**, **openvino**
//! - **nodes** - pipeline nodes; expands into one step per node group
//! - **asset_manager**, **pipeline**, **xlink**, **device**,
//!   **device_bootloader**, **calibration_handler**
//! - **ros** - extension area, registered last
//!
//! # Usage
//!
//! ```
//! use depthai_core::{Module, ModuleHandle};
//! use depthai_registry::RegistrationPlan;
//!
//! let plan = RegistrationPlan::new(depthai_bindings::registrars::<Module>()).unwrap();
//! let mut module = Module::new("depthai");
//! plan.into_work_list().drain(&mut module).unwrap();
//! assert!(module.contains_type("node.ColorCamera"));
//! ```

mod decl;

pub mod asset_manager;
pub mod calibration_handler;
pub mod common;
pub mod data_queue;
pub mod datatypes;
pub mod device;
pub mod device_bootloader;
pub mod log;
pub mod nodes;
pub mod openvino;
pub mod pipeline;
pub mod ros;
pub mod version;
pub mod xlink;

pub use decl::{Group, TypeSpec};

use depthai_core::ModuleHandle;
use depthai_registry::{Area, Registrar};

/// All area registrars, in registration order.
pub fn registrars<M: ModuleHandle + 'static>() -> Vec<Registrar<M>> {
    use Area::*;

    vec![
        Registrar::new(Common, &[], common::bind::<M>),
        Registrar::new(Datatypes, &[Common], datatypes::bind::<M>),
        Registrar::new(Log, &[Common], log::bind::<M>),
        Registrar::new(Version, &[Common], version::bind::<M>),
        Registrar::new(DataQueue, &[Datatypes], data_queue::bind::<M>),
        Registrar::new(OpenVino, &[Common], openvino::bind::<M>),
        Registrar::new(Nodes, &[Datatypes, OpenVino], nodes::bind::<M>),
        Registrar::new(AssetManager, &[Common], asset_manager::bind::<M>),
        Registrar::new(
            Pipeline,
            &[Nodes, AssetManager, OpenVino],
            pipeline::bind::<M>,
        ),
        Registrar::new(XLink, &[Common], xlink::bind::<M>),
        Registrar::new(
            Device,
            &[Pipeline, XLink, DataQueue, Version, Log],
            device::bind::<M>,
        ),
        Registrar::new(
            DeviceBootloader,
            &[XLink, Version],
            device_bootloader::bind::<M>,
        ),
        Registrar::new(
            CalibrationHandler,
            &[Common],
            calibration_handler::bind::<M>,
        ),
        Registrar::new(Ros, &[Datatypes], ros::bind::<M>),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use depthai_core::{Module, RegistrationCallback, RegistrationError, WorkList};
    use depthai_registry::{END_OF_CALLSTACK, RegistrationPlan};

    #[test]
    fn one_registrar_per_area() {
        let areas: Vec<Area> = registrars::<Module>().iter().map(|r| r.area).collect();
        assert_eq!(areas, Area::ALL);
    }

    #[test]
    fn listed_order_already_satisfies_dependencies() {
        let plan = RegistrationPlan::new(registrars::<Module>()).unwrap();
        assert_eq!(plan.areas(), Area::ALL);
    }

    #[test]
    fn full_drain_registers_every_area() {
        let plan = RegistrationPlan::new(registrars::<Module>()).unwrap();
        let mut module = Module::new("depthai");
        let report = plan.into_work_list().drain(&mut module).unwrap();

        let executed = report.executed();
        assert_eq!(executed.first(), Some(&"common"));
        assert_eq!(executed.last(), Some(&END_OF_CALLSTACK));
        assert_eq!(
            report.pushed(),
            datatypes::GROUPS.len() + nodes::GROUPS.len()
        );

        for ty in [
            "Buffer",
            "ImgFrame.Type",
            "node.YoloSpatialDetectionNetwork",
            "Pipeline",
            "Device",
            "DeviceBootloader.Memory",
            "CalibrationHandler",
            "ros.ImageConverter",
        ] {
            assert!(module.contains_type(ty), "{ty} missing");
        }
    }

    #[test]
    fn group_steps_run_right_after_their_area() {
        let plan = RegistrationPlan::new(registrars::<Module>()).unwrap();
        let report = plan
            .into_work_list()
            .drain(&mut Module::new("depthai"))
            .unwrap();
        let executed = report.executed();

        let position = |name: &str| executed.iter().position(|n| *n == name).unwrap();

        let start = position("datatypes");
        assert_eq!(executed[start + 1], "datatypes::adatatype");
        assert_eq!(position("log"), start + datatypes::GROUPS.len() + 1);

        let start = position("nodes");
        assert_eq!(executed[start + 1], "nodes::xlink");
        assert_eq!(position("asset_manager"), start + nodes::GROUPS.len() + 1);
    }

    #[test]
    fn area_out_of_order_fails_on_missing_types() {
        // The pipeline alone trips over the first type it needs.
        let mut list = WorkList::new();
        let callback = RegistrationCallback::new("pipeline", pipeline::bind::<Module>);
        list.push_back(callback);

        let err = list.drain(&mut Module::new("depthai")).unwrap_err();
        assert_eq!(err.callback, "pipeline");
        assert_eq!(
            err.source,
            RegistrationError::TypeNotFound("Node".to_string())
        );
    }
}
