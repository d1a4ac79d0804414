use std::fmt;

use depthai_core::{Callstack, RegistrationError};

use crate::Area;

/// Registration function of one area.
pub type BindFn<M> = fn(&mut M, &mut Callstack<'_, M>) -> Result<(), RegistrationError>;

/// Describes how one functional area gets registered.
pub struct Registrar<M> {
    pub area: Area,
    /// Areas that must have finished registering before `bind` runs.
    pub requires: &'static [Area],
    pub bind: BindFn<M>,
}

impl<M> Registrar<M> {
    pub const fn new(area: Area, requires: &'static [Area], bind: BindFn<M>) -> Self {
        Self {
            area,
            requires,
            bind,
        }
    }
}

// Manual impls: a derive would require `M: Clone`.
impl<M> Clone for Registrar<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Registrar<M> {}

impl<M> fmt::Debug for Registrar<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registrar")
            .field("area", &self.area)
            .field("requires", &self.requires)
            .finish()
    }
}
