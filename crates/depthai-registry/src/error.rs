use thiserror::Error;

use crate::Area;

/// Errors found while ordering registrars, before any registration runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Two registrars provide the same area.
    #[error("area '{0}' is provided by more than one registrar")]
    DuplicateArea(Area),

    /// A registrar requires an area no registrar provides.
    #[error("'{area}' requires '{requires}', which no registrar provides")]
    UnknownDependency { area: Area, requires: Area },

    /// The requirements form a cycle.
    #[error("dependency cycle between {}", display_areas(.0))]
    DependencyCycle(Vec<Area>),
}

fn display_areas(areas: &[Area]) -> String {
    areas
        .iter()
        .map(|a| format!("'{a}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
