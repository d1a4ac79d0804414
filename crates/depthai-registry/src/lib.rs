//! Dependency-ordered registration of binding areas.
//!
//! Every functional area of the binding module is described by a
//! [`Registrar`]: the [`Area`] it provides, the areas it requires, and the
//! function that registers it. A [`RegistrationPlan`] sorts registrars so
//! every area runs after the areas it requires, keeping the listed order
//! wherever the dependencies allow, and turns the result into a
//! [`WorkList`](depthai_core::WorkList) ready to drain.

mod area;
mod error;
mod plan;
mod registrar;

pub use area::{Area, AreaSet};
pub use error::PlanError;
pub use plan::{END_OF_CALLSTACK, RegistrationPlan};
pub use registrar::{BindFn, Registrar};
