//! Host-side message queues connected to device streams.

use depthai_core::{Callstack, ModuleHandle, RegistrationError};

use crate::decl::{Group, TypeSpec};

static DATA_QUEUE: Group = Group::new("data_queue").requires(&["ADatatype"]).types(&[
    TypeSpec::class("DataOutputQueue"),
    TypeSpec::class("DataInputQueue"),
]);

pub fn bind<M: ModuleHandle + 'static>(
    module: &mut M,
    _: &mut Callstack<'_, M>,
) -> Result<(), RegistrationError> {
    DATA_QUEUE.register(module)
}
